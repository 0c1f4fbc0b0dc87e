//! Turns a [`ResourceDefinition`] into a [`Resource`]: validates the definition, synthesizes
//! missing handlers through the registered builders, and derives the route table.

use crate::error::ConfigError;
use crate::resource::builders::{default_builders, Builder};
use crate::resource::definition::ResourceDefinition;
use crate::resource::operation::Operation;
use crate::resource::route::{Resource, Route};
use std::collections::{HashMap, HashSet};

#[derive(Clone)]
pub struct ResourceFactory {
    builders: HashMap<Operation, Builder>,
}

impl Default for ResourceFactory {
    fn default() -> Self {
        Self {
            builders: default_builders().into_iter().collect(),
        }
    }
}

impl ResourceFactory {
    /// Factory with no builders; every operation must then be hand-written or registered.
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register (or override) the builder used for `op`.
    pub fn with_builder(mut self, op: Operation, builder: Builder) -> Self {
        self.builders.insert(op, builder);
        self
    }

    pub fn without_builder(mut self, op: Operation) -> Self {
        self.builders.remove(&op);
        self
    }

    pub fn builder(&self, op: Operation) -> Option<Builder> {
        self.builders.get(&op).copied()
    }

    pub fn build(&self, definition: ResourceDefinition) -> Result<Resource, ConfigError> {
        let ResourceDefinition {
            name,
            model,
            type_,
            methods,
            handlers: mut namespace,
        } = definition;

        let model = model.ok_or_else(|| ConfigError::MissingAttribute {
            resource: name.clone(),
            attribute: "model",
        })?;
        let type_ = type_.ok_or_else(|| ConfigError::MissingAttribute {
            resource: name.clone(),
            attribute: "type",
        })?;

        let operations = match methods {
            Some(methods) => parse_operations(&name, &methods)?,
            None => Operation::DEFAULT.to_vec(),
        };

        for op in &operations {
            if namespace.contains_key(op.as_str()) {
                tracing::debug!(resource = %name, operation = %op, "keeping supplied handler");
                continue;
            }
            let builder = self
                .builder(*op)
                .ok_or_else(|| Operation::invalid(op.as_str()))?;
            builder(&mut namespace, &model, &type_);
            tracing::debug!(resource = %name, operation = %op, "synthesized handler");
        }

        let routes = operations
            .iter()
            .map(|op| {
                namespace
                    .get(op.as_str())
                    .cloned()
                    .map(|handler| Route::new(*op, handler))
                    .ok_or_else(|| {
                        ConfigError::Validation(format!(
                            "builder for \"{}\" on {} did not register a handler",
                            op, name
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            resource = %name,
            model = model.name(),
            routes = routes.len(),
            "resource built"
        );

        Ok(Resource {
            name,
            model,
            type_,
            operations,
            namespace,
            routes,
        })
    }
}

fn parse_operations(resource: &str, methods: &[String]) -> Result<Vec<Operation>, ConfigError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(methods.len());
    for method in methods {
        let op: Operation = method.parse()?;
        if !seen.insert(op) {
            return Err(ConfigError::DuplicateMethod {
                resource: resource.to_string(),
                method: method.clone(),
            });
        }
        out.push(op);
    }
    Ok(out)
}

/// Build with the default builders.
pub fn build(definition: ResourceDefinition) -> Result<Resource, ConfigError> {
    ResourceFactory::default().build(definition)
}
