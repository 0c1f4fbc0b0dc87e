#![allow(dead_code)]

use async_trait::async_trait;
use crud_resource::{AppError, Model, ResourceType};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// Records kept in insertion order, keyed by their `id` field.
pub struct MemoryModel {
    name: String,
    rows: Mutex<Vec<Map<String, Value>>>,
}

impl MemoryModel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            rows: Mutex::new(Vec::new()),
        }
    }

    fn with_id(item: Value) -> Result<Map<String, Value>, AppError> {
        let mut obj = match item {
            Value::Object(obj) => obj,
            _ => return Err(AppError::BadRequest("record must be an object".into())),
        };
        if !obj.contains_key("id") {
            obj.insert("id".into(), Value::String(uuid::Uuid::new_v4().to_string()));
        }
        Ok(obj)
    }

    fn id_of(row: &Map<String, Value>) -> Option<String> {
        match row.get("id")? {
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[async_trait]
impl Model for MemoryModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, filters: &HashMap<String, String>) -> Result<Vec<Value>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|row| {
                filters.iter().all(|(k, v)| match row.get(k) {
                    Some(Value::String(s)) => s == v,
                    Some(other) => other.to_string() == *v,
                    None => true,
                })
            })
            .cloned()
            .map(Value::Object)
            .collect())
    }

    async fn replace(&self, items: Vec<Value>) -> Result<Vec<Value>, AppError> {
        let new_rows = items
            .into_iter()
            .map(Self::with_id)
            .collect::<Result<Vec<_>, _>>()?;
        let mut rows = self.rows.lock().unwrap();
        *rows = new_rows;
        Ok(rows.iter().cloned().map(Value::Object).collect())
    }

    async fn drop_all(&self) -> Result<u64, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let n = rows.len() as u64;
        rows.clear();
        Ok(n)
    }

    async fn create(&self, item: Value) -> Result<Value, AppError> {
        let row = Self::with_id(item)?;
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| Self::id_of(r) == Self::id_of(&row)) {
            return Err(AppError::Conflict("id already exists".into()));
        }
        rows.push(row.clone());
        Ok(Value::Object(row))
    }

    async fn retrieve(&self, id: &str) -> Result<Option<Value>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| Self::id_of(r).as_deref() == Some(id))
            .cloned()
            .map(Value::Object))
    }

    async fn update(&self, id: &str, item: Value) -> Result<Option<Value>, AppError> {
        let patch = match item {
            Value::Object(obj) => obj,
            _ => return Err(AppError::BadRequest("record must be an object".into())),
        };
        let mut rows = self.rows.lock().unwrap();
        let Some(row) = rows.iter_mut().find(|r| Self::id_of(r).as_deref() == Some(id)) else {
            return Ok(None);
        };
        for (k, v) in patch {
            if k != "id" {
                row.insert(k, v);
            }
        }
        Ok(Some(Value::Object(row.clone())))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| Self::id_of(r).as_deref() != Some(id));
        Ok(rows.len() != before)
    }
}

/// Accepts JSON objects carrying every required field; hides `secret` in responses.
pub struct ObjectType {
    name: String,
    required: Vec<String>,
}

impl ObjectType {
    pub fn new(name: &str, required: &[&str]) -> Self {
        Self {
            name: name.into(),
            required: required.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ResourceType for ObjectType {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, input: Value) -> Result<Value, AppError> {
        let obj = input
            .as_object()
            .ok_or_else(|| AppError::Validation("expected an object".into()))?;
        for field in &self.required {
            if obj.get(field).map_or(true, Value::is_null) {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }
        Ok(input)
    }

    fn serialize(&self, mut record: Value) -> Result<Value, AppError> {
        if let Value::Object(obj) = &mut record {
            obj.remove("secret");
        }
        Ok(record)
    }
}

pub fn puppy_model() -> MemoryModel {
    MemoryModel::new("puppy")
}

pub fn puppy_type() -> ObjectType {
    ObjectType::new("puppy_type", &["name"])
}
