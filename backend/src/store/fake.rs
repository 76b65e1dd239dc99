use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{Param, Store};
use crate::error::StoreError;
use crate::models::Product;

/// One query as the store received it.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub sql: String,
    pub params: Vec<Param>,
}

/// In-memory stand-in for the database. Replies are queued up front and
/// handed out one per query; with nothing queued it answers with no rows.
#[derive(Default)]
pub struct FakeStore {
    replies: Mutex<VecDeque<Result<Vec<Product>, String>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn returning(rows: Vec<Product>) -> Arc<Self> {
        let store = Self::new();
        store.push_rows(rows);
        store
    }

    pub fn failing(message: &str) -> Arc<Self> {
        let store = Self::new();
        store.push_failure(message);
        store
    }

    pub fn push_rows(&self, rows: Vec<Product>) {
        self.replies.lock().unwrap().push_back(Ok(rows));
    }

    pub fn push_failure(&self, message: &str) {
        self.replies.lock().unwrap().push_back(Err(message.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Store for FakeStore {
    async fn query(&self, sql: &str, params: Vec<Param>) -> Result<Vec<Product>, StoreError> {
        self.calls.lock().unwrap().push(Call {
            sql: sql.to_string(),
            params,
        });
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(rows)) => Ok(rows),
            Some(Err(message)) => Err(StoreError::Other(message)),
            None => Ok(Vec::new()),
        }
    }
}

/// Shorthand for building fixture rows.
pub fn product(id: i32, name: &str, price: f64, description: &str) -> Product {
    Product {
        id,
        name: Some(name.to_string()),
        price: Some(price),
        description: Some(description.to_string()),
    }
}
