//! Common routes: health, version, and the mounted route table.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct RouteBody {
    resource: String,
    name: String,
    verb: String,
    path: String,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn route_table(State(state): State<AppState>) -> Json<crate::response::SuccessMany<RouteBody>> {
    let rows = state
        .resources
        .iter()
        .flat_map(|resource| {
            resource.routes().iter().map(move |route| RouteBody {
                resource: resource.name().to_string(),
                name: route.name.clone(),
                verb: route.verb.to_string(),
                path: format!("/{}{}", resource.name(), route.path),
            })
        })
        .collect();
    crate::response::success_many(rows).1
}

/// Common routes (no state): GET /health, GET /version, GET /info.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/info", get(version))
}

/// Common routes plus GET /routes describing every mounted resource route.
pub fn common_routes_with_table(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/info", get(version))
        .route("/routes", get(route_table))
        .with_state(state)
}
