use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    db,
    error::AppResult,
    models::{Product, ProductPayload},
    AppState,
};

// ── Body extraction ───────────────────────────────────────────────────────────

/// A body not declared as JSON, or an empty one, counts as `{}`. Broken JSON
/// syntax is the only body that gets rejected.
#[async_trait]
impl<S> FromRequest<S> for ProductPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self::default());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let Json(body) = Json::<Value>::from_bytes(&bytes).map_err(IntoResponse::into_response)?;
        Ok(Self::from_body(&body))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = db::fetch_all_products(state.store.as_ref()).await?;
    info!(count = products.len(), "Listed products");
    Ok(Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    let product = db::fetch_product_by_id(state.store.as_ref(), &id).await?;
    info!(id = product.id, "Fetched product");
    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    payload: ProductPayload,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = db::insert_product(state.store.as_ref(), &payload).await?;
    info!(id = product.id, "Created product");
    Ok((StatusCode::CREATED, Json(product)))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: ProductPayload,
) -> AppResult<Json<Product>> {
    let product = db::update_product(state.store.as_ref(), &id, &payload).await?;
    info!(id = product.id, "Updated product");
    Ok(Json(product))
}
