//! Persistence seam. Handlers only ever talk to a [`Store`]: SQL text plus a
//! positional parameter list in, rows out. Production runs on [`PgStore`];
//! tests inject a fake.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::StoreError;
use crate::models::Product;

#[cfg(test)]
pub mod fake;

/// A positional value bound to `$1`, `$2`, ... Values never become part of
/// the SQL text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    Null,
    Text(String),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Param::Text(value.to_string())
    }
}

impl From<Option<&Value>> for Param {
    fn from(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Param::Null,
            Some(Value::String(s)) => Param::Text(s.clone()),
            Some(other) => Param::Text(other.to_string()),
        }
    }
}

#[async_trait]
pub trait Store: Send + Sync {
    async fn query(&self, sql: &str, params: Vec<Param>) -> Result<Vec<Product>, StoreError>;
}

/// PostgreSQL-backed store. Each query borrows one pooled connection for its
/// duration and returns it afterwards.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Store for PgStore {
    async fn query(&self, sql: &str, params: Vec<Param>) -> Result<Vec<Product>, StoreError> {
        let mut query = sqlx::query_as::<_, Product>(sql);
        for param in params {
            query = match param {
                Param::Null => query.bind(None::<String>),
                Param::Text(value) => query.bind(value),
            };
        }
        Ok(query.fetch_all(&self.pool).await?)
    }
}
