//! Named models and types that resource configs refer to by id.

use crate::model::{Model, ResourceType, SharedModel, SharedType};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct Registry {
    models: HashMap<String, SharedModel>,
    types: HashMap<String, SharedType>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its own [`Model::name`].
    pub fn with_model(mut self, model: impl Model + 'static) -> Self {
        let model: SharedModel = Arc::new(model);
        self.models.insert(model.name().to_string(), model);
        self
    }

    /// Register a type under its own [`ResourceType::name`].
    pub fn with_type(mut self, type_: impl ResourceType + 'static) -> Self {
        let type_: SharedType = Arc::new(type_);
        self.types.insert(type_.name().to_string(), type_);
        self
    }

    pub fn insert_model(&mut self, id: impl Into<String>, model: SharedModel) {
        self.models.insert(id.into(), model);
    }

    pub fn insert_type(&mut self, id: impl Into<String>, type_: SharedType) {
        self.types.insert(id.into(), type_);
    }

    pub fn model(&self, id: &str) -> Option<SharedModel> {
        self.models.get(id).cloned()
    }

    pub fn resource_type(&self, id: &str) -> Option<SharedType> {
        self.types.get(id).cloned()
    }
}
