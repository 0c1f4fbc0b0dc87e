//! Mount built resources. Each resource is served under `/<name>`, so a `puppies` resource
//! answers `/puppies/` and `/puppies/:element_id/`.

use crate::config::{validate_names, Settings};
use crate::error::{AppError, ConfigError};
use crate::resource::Resource;
use crate::routes::common_routes_with_table;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

/// Fails with [`ConfigError::DuplicateResource`] when two resources share a name.
pub fn resource_routes(resources: &[Resource]) -> Result<Router, ConfigError> {
    validate_names(resources.iter().map(|r| r.name()))?;
    Ok(resources.iter().fold(Router::new(), |router, resource| {
        let prefix = format!("/{}", resource.name().trim_matches('/'));
        router.merge(resource.router_at(&prefix))
    }))
}

async fn not_found() -> AppError {
    AppError::NotFound("route".into())
}

/// Full application: common routes, every resource, body limit from settings.
///
/// axum's own default body limit is disabled so `settings.body_limit` is the only cap.
pub fn app(resources: Vec<Resource>, settings: &Settings) -> Result<Router, ConfigError> {
    let api = resource_routes(&resources)?;
    Ok(Router::new()
        .merge(common_routes_with_table(AppState::new(resources)))
        .merge(api)
        .fallback(not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(settings.body_limit)))
}
