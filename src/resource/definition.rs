//! Declarative resource descriptor handed to the factory.

use crate::model::{Model, ResourceType, SharedModel, SharedType};
use crate::resource::handler::BoxHandler;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Handlers keyed by operation name. User-supplied entries survive the build untouched; the
/// factory adds the rest.
pub type Namespace = BTreeMap<String, BoxHandler>;

#[derive(Clone)]
pub struct ResourceDefinition {
    pub name: String,
    pub model: Option<SharedModel>,
    pub type_: Option<SharedType>,
    /// `None` means the default operation set.
    pub methods: Option<Vec<String>>,
    pub handlers: Namespace,
}

impl ResourceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: None,
            type_: None,
            methods: None,
            handlers: Namespace::new(),
        }
    }

    pub fn model(mut self, model: impl Model + 'static) -> Self {
        let model: SharedModel = Arc::new(model);
        self.model = Some(model);
        self
    }

    pub fn shared_model(mut self, model: SharedModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn resource_type(mut self, type_: impl ResourceType + 'static) -> Self {
        let type_: SharedType = Arc::new(type_);
        self.type_ = Some(type_);
        self
    }

    pub fn shared_type(mut self, type_: SharedType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    /// Supply a hand-written handler for an operation name.
    pub fn handler(mut self, name: impl Into<String>, handler: BoxHandler) -> Self {
        self.handlers.insert(name.into(), handler);
        self
    }
}

impl fmt::Debug for ResourceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDefinition")
            .field("name", &self.name)
            .field("model", &self.model.as_ref().map(|m| m.name().to_string()))
            .field("type", &self.type_.as_ref().map(|t| t.name().to_string()))
            .field("methods", &self.methods)
            .field("handlers", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}
