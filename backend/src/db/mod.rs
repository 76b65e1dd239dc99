use crate::error::{AppError, AppResult};
use crate::models::{Product, ProductPayload};
use crate::store::{Param, Store};

// Every statement returns the same projection. NUMERIC prices come back as
// float8 so they serialize as JSON numbers.
const SELECT_ALL: &str = "SELECT id, name, price::float8 AS price, description FROM products";

const SELECT_BY_ID: &str = "SELECT id, name, price::float8 AS price, description \
     FROM products WHERE id = CAST($1 AS INTEGER)";

const INSERT: &str = "INSERT INTO products (name, price, description) \
     VALUES ($1, $2::numeric, $3) \
     RETURNING id, name, price::float8 AS price, description";

const UPDATE: &str = "UPDATE products \
     SET name = COALESCE($2, name), \
         price = COALESCE($3::numeric, price), \
         description = COALESCE($4, description) \
     WHERE id = CAST($1 AS INTEGER) \
     RETURNING id, name, price::float8 AS price, description";

// ── Products ──────────────────────────────────────────────────────────────────

/// All rows in the store's own order.
pub async fn fetch_all_products(store: &dyn Store) -> AppResult<Vec<Product>> {
    Ok(store.query(SELECT_ALL, Vec::new()).await?)
}

/// `id` is passed through as text; the store decides whether it is valid.
pub async fn fetch_product_by_id(store: &dyn Store, id: &str) -> AppResult<Product> {
    first_row(store.query(SELECT_BY_ID, vec![Param::from(id)]).await?)
}

pub async fn insert_product(store: &dyn Store, payload: &ProductPayload) -> AppResult<Product> {
    first_row(store.query(INSERT, payload.params().to_vec()).await?)
}

/// Partial update: fields that are absent or `null` keep their stored value.
pub async fn update_product(
    store: &dyn Store,
    id: &str,
    payload: &ProductPayload,
) -> AppResult<Product> {
    let mut params = vec![Param::from(id)];
    params.extend(payload.params());
    first_row(store.query(UPDATE, params).await?)
}

fn first_row(rows: Vec<Product>) -> AppResult<Product> {
    rows.into_iter().next().ok_or(AppError::NotFound)
}
