//! Route descriptors and the finished resource.

use crate::error::AppError;
use crate::model::{SharedModel, SharedType};
use crate::resource::definition::Namespace;
use crate::resource::handler::{BoxHandler, CrudRequest};
use crate::resource::operation::{Operation, ELEMENT_ID};
use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::Method,
    response::Response,
    routing::{on, MethodRouter},
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// One (path, verb, handler, name) entry of a resource's route table.
#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub verb: Method,
    pub handler: BoxHandler,
    pub name: String,
    pub operation: Operation,
}

impl Route {
    pub(crate) fn new(op: Operation, handler: BoxHandler) -> Self {
        let (path, verb) = op.route();
        Self {
            path,
            verb,
            handler,
            name: op.to_string(),
            operation: op,
        }
    }

    /// True when `handler` is the very handler object this route dispatches to.
    pub fn dispatches_to(&self, handler: &BoxHandler) -> bool {
        Arc::ptr_eq(&self.handler, handler)
    }

    /// Path in axum's capture syntax (`/{element_id}/` -> `/:element_id/`).
    pub fn axum_path(&self) -> String {
        self.path.replace('{', ":").replace('}', "")
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("verb", &self.verb)
            .field("name", &self.name)
            .finish()
    }
}

/// A resource with every handler present and its route table computed.
#[derive(Clone)]
pub struct Resource {
    pub(crate) name: String,
    pub(crate) model: SharedModel,
    pub(crate) type_: SharedType,
    pub(crate) operations: Vec<Operation>,
    pub(crate) namespace: Namespace,
    pub(crate) routes: Vec<Route>,
}

impl Resource {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn resource_type(&self) -> &SharedType {
        &self.type_
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn handler(&self, name: &str) -> Option<&BoxHandler> {
        self.namespace.get(name)
    }

    pub fn route(&self, op: Operation) -> Option<&Route> {
        self.routes.iter().find(|r| r.operation == op)
    }

    /// Router serving the route table at its template paths.
    pub fn router(&self) -> Router {
        self.router_at("")
    }

    /// Router serving the route table under `prefix` (e.g. `/puppies` gives `/puppies/` and
    /// `/puppies/:element_id/`).
    pub fn router_at(&self, prefix: &str) -> Router {
        let prefix = prefix.trim_end_matches('/');
        let mut by_path: Vec<(String, Vec<(Operation, BoxHandler)>)> = Vec::new();
        for route in &self.routes {
            let path = format!("{}{}", prefix, route.axum_path());
            let entry = (route.operation, route.handler.clone());
            match by_path.iter_mut().find(|(p, _)| *p == path) {
                Some((_, ops)) => ops.push(entry),
                None => by_path.push((path, vec![entry])),
            }
        }
        let mut router = Router::new();
        for (path, ops) in by_path {
            let merged = ops
                .into_iter()
                .map(|(op, handler)| method_router(op, handler))
                .reduce(MethodRouter::merge);
            if let Some(mr) = merged {
                tracing::debug!(resource = %self.name, path = %path, "mounted");
                router = router.route(&path, mr);
            }
        }
        router
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("name", &self.name)
            .field("model", &self.model.name())
            .field("type", &self.type_.name())
            .field("routes", &self.routes)
            .finish()
    }
}

fn parse_body(body: &Bytes) -> Result<Option<Value>, AppError> {
    if body.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(|e| {
        tracing::warn!(error = %e, "rejected request body");
        AppError::BadRequest(format!("body must be JSON: {}", e))
    })
}

async fn dispatch(
    handler: BoxHandler,
    element_id: Option<String>,
    query: HashMap<String, String>,
    body: Bytes,
) -> Result<Response, AppError> {
    let req = CrudRequest {
        element_id,
        query,
        body: parse_body(&body)?,
    };
    handler.call(req).await
}

fn method_router(op: Operation, handler: BoxHandler) -> MethodRouter {
    let filter = op.method_filter();
    if op.is_element() {
        on(
            filter,
            move |Path(params): Path<HashMap<String, String>>,
                  Query(query): Query<HashMap<String, String>>,
                  body: Bytes| {
                dispatch(handler.clone(), params.get(ELEMENT_ID).cloned(), query, body)
            },
        )
    } else {
        on(
            filter,
            move |Query(query): Query<HashMap<String, String>>, body: Bytes| {
                dispatch(handler.clone(), None, query, body)
            },
        )
    }
}
