//! Collaborator contracts consumed by the generated handlers.
//!
//! A [`Model`] is the persistence-layer entity a resource is bound to; a [`ResourceType`] is the
//! validation/serialization contract for its records. The factory never inspects either one, it
//! only hands them to the builders, which call them from inside request handlers.

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

#[async_trait]
pub trait Model: Send + Sync {
    /// Identifier used in logs and in config registries.
    fn name(&self) -> &str;

    /// All records, filtered by exact match on query parameters the model understands.
    async fn list(&self, filters: &HashMap<String, String>) -> Result<Vec<Value>, AppError>;

    /// Replace the entire collection. Returns the stored records.
    async fn replace(&self, items: Vec<Value>) -> Result<Vec<Value>, AppError>;

    /// Remove every record. Returns how many were removed.
    async fn drop_all(&self) -> Result<u64, AppError>;

    async fn create(&self, item: Value) -> Result<Value, AppError>;

    async fn retrieve(&self, id: &str) -> Result<Option<Value>, AppError>;

    /// `None` when no record has that id.
    async fn update(&self, id: &str, item: Value) -> Result<Option<Value>, AppError>;

    /// `false` when no record has that id.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

pub trait ResourceType: Send + Sync {
    fn name(&self) -> &str;

    /// Validate an incoming body, returning the value to hand to the model.
    fn validate(&self, input: Value) -> Result<Value, AppError>;

    /// Shape a stored record for the response.
    fn serialize(&self, record: Value) -> Result<Value, AppError> {
        Ok(record)
    }
}

pub type SharedModel = Arc<dyn Model>;
pub type SharedType = Arc<dyn ResourceType>;
