use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::Param;

/// Core product entity, exactly as a row comes back from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of create and update requests. Nothing is validated here: every
/// field is optional, `null` counts as absent, and whatever the caller sent
/// is handed to the store as a bound parameter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub description: Option<Value>,
}

impl ProductPayload {
    /// Reads the three known keys of a JSON object. Any other body (array,
    /// scalar) carries no fields.
    pub fn from_body(body: &Value) -> Self {
        let field = |key: &str| {
            body.as_object()
                .and_then(|fields| fields.get(key))
                .filter(|v| !v.is_null())
                .cloned()
        };
        Self {
            name: field("name"),
            price: field("price"),
            description: field("description"),
        }
    }

    /// Bound values in column order: name, price, description.
    pub fn params(&self) -> [Param; 3] {
        [
            Param::from(self.name.as_ref()),
            Param::from(self.price.as_ref()),
            Param::from(self.description.as_ref()),
        ]
    }
}
