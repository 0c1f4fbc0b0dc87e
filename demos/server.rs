//! Example server: reads resource definitions from `CRUD_RESOURCES_PATH` (default
//! `resources.json`), binds them to in-memory models, and serves them on `CRUD_BIND_ADDR`.
//!
//! `CRUD_RESOURCES_PATH=demos/resources.json cargo run --example server`

use async_trait::async_trait;
use crud_resource::{app, load_from_path, resolve, AppError, Model, Registry, ResourceFactory, ResourceType, Settings};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

/// Rows keyed by a generated `id`.
struct MemoryModel {
    name: String,
    rows: RwLock<Vec<Map<String, Value>>>,
}

impl MemoryModel {
    fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            rows: RwLock::new(Vec::new()),
        }
    }

    fn object(item: Value) -> Result<Map<String, Value>, AppError> {
        match item {
            Value::Object(obj) => Ok(obj),
            _ => Err(AppError::BadRequest("record must be an object".into())),
        }
    }

    fn assign_id(mut obj: Map<String, Value>) -> Map<String, Value> {
        obj.insert("id".into(), Value::String(uuid::Uuid::new_v4().to_string()));
        obj
    }

    fn has_id(row: &Map<String, Value>, id: &str) -> bool {
        row.get("id").and_then(Value::as_str) == Some(id)
    }
}

#[async_trait]
impl Model for MemoryModel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list(&self, filters: &HashMap<String, String>) -> Result<Vec<Value>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| filters.iter().all(|(k, v)| row.get(k).and_then(Value::as_str).map_or(true, |s| s == v)))
            .cloned()
            .map(Value::Object)
            .collect())
    }

    async fn replace(&self, items: Vec<Value>) -> Result<Vec<Value>, AppError> {
        let new_rows = items
            .into_iter()
            .map(|v| Self::object(v).map(Self::assign_id))
            .collect::<Result<Vec<_>, _>>()?;
        let mut rows = self.rows.write().await;
        *rows = new_rows;
        Ok(rows.iter().cloned().map(Value::Object).collect())
    }

    async fn drop_all(&self) -> Result<u64, AppError> {
        let mut rows = self.rows.write().await;
        let n = rows.len() as u64;
        rows.clear();
        Ok(n)
    }

    async fn create(&self, item: Value) -> Result<Value, AppError> {
        let row = Self::assign_id(Self::object(item)?);
        self.rows.write().await.push(row.clone());
        Ok(Value::Object(row))
    }

    async fn retrieve(&self, id: &str) -> Result<Option<Value>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| Self::has_id(r, id)).cloned().map(Value::Object))
    }

    async fn update(&self, id: &str, item: Value) -> Result<Option<Value>, AppError> {
        let patch = Self::object(item)?;
        let mut rows = self.rows.write().await;
        let Some(row) = rows.iter_mut().find(|r| Self::has_id(r, id)) else {
            return Ok(None);
        };
        row.extend(patch.into_iter().filter(|(k, _)| k != "id"));
        Ok(Some(Value::Object(row.clone())))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| !Self::has_id(r, id));
        Ok(rows.len() != before)
    }
}

/// Accepts any JSON object.
struct ObjectType;

impl ResourceType for ObjectType {
    fn name(&self) -> &str {
        "object"
    }

    fn validate(&self, input: Value) -> Result<Value, AppError> {
        if input.is_object() {
            Ok(input)
        } else {
            Err(AppError::Validation("expected a JSON object".into()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("crud_resource=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let configs = load_from_path(&settings.resources_path).await?;

    let mut registry = Registry::new().with_type(ObjectType);
    for config in &configs {
        if let Some(id) = &config.model {
            registry.insert_model(id.clone(), std::sync::Arc::new(MemoryModel::new(id)));
        }
    }
    let resources = resolve(&configs, &registry, &ResourceFactory::default())?;

    let app = app(resources, &settings)?;
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
