//! Request handlers stored in a resource namespace.

use crate::error::AppError;
use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

/// What a handler sees of an HTTP request: the element id for element routes, the query string,
/// and the JSON body when one was sent.
#[derive(Clone, Debug, Default)]
pub struct CrudRequest {
    pub element_id: Option<String>,
    pub query: HashMap<String, String>,
    pub body: Option<Value>,
}

impl CrudRequest {
    pub fn element_id(&self) -> Result<&str, AppError> {
        self.element_id
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("missing element id".into()))
    }

    pub fn into_body(self) -> Result<Value, AppError> {
        self.body
            .ok_or_else(|| AppError::BadRequest("body must be JSON".into()))
    }
}

#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, req: CrudRequest) -> Result<Response, AppError>;
}

/// Handlers are shared between the namespace, the route table, and axum.
pub type BoxHandler = Arc<dyn Handler>;

/// Adapts an async closure into a [`Handler`].
pub struct FnHandler<F>(F);

#[async_trait]
impl<F, Fut> Handler for FnHandler<F>
where
    F: Fn(CrudRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, AppError>> + Send + 'static,
{
    async fn call(&self, req: CrudRequest) -> Result<Response, AppError> {
        (self.0)(req).await
    }
}

/// Wrap an async closure as a shareable handler.
pub fn handler_fn<F, Fut>(f: F) -> BoxHandler
where
    F: Fn(CrudRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, AppError>> + Send + 'static,
{
    Arc::new(FnHandler(f))
}
