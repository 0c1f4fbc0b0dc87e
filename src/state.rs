//! Shared application state for the introspection routes.

use crate::resource::Resource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Every resource built at startup, in mount order.
    pub resources: Arc<Vec<Resource>>,
}

impl AppState {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources: Arc::new(resources),
        }
    }
}
