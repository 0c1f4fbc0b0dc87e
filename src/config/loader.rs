//! Load resource configs from a JSON file and resolve them against a registry of models/types.

use crate::config::{validate, Registry, ResourceConfig};
use crate::error::ConfigError;
use crate::resource::{Resource, ResourceDefinition, ResourceFactory};
use std::path::Path;

/// Read a JSON array of [`ResourceConfig`] from `path`.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Vec<ResourceConfig>, ConfigError> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading resource config");
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Load(format!("{}: {}", path.display(), e)))?;
    load_from_str(&raw)
}

pub fn load_from_str(raw: &str) -> Result<Vec<ResourceConfig>, ConfigError> {
    serde_json::from_str(raw).map_err(|e| ConfigError::Load(e.to_string()))
}

/// Turn one config into a definition, looking up its model and type by id.
pub fn definition_from_config(
    config: &ResourceConfig,
    registry: &Registry,
) -> Result<ResourceDefinition, ConfigError> {
    let mut def = ResourceDefinition::new(config.name.trim_matches('/'));
    if let Some(id) = &config.model {
        let model = registry.model(id).ok_or_else(|| ConfigError::MissingReference {
            kind: "model",
            id: id.clone(),
        })?;
        def = def.shared_model(model);
    }
    if let Some(id) = &config.type_ {
        let type_ = registry.resource_type(id).ok_or_else(|| ConfigError::MissingReference {
            kind: "type",
            id: id.clone(),
        })?;
        def = def.shared_type(type_);
    }
    if let Some(methods) = &config.methods {
        def = def.methods(methods.iter().cloned());
    }
    Ok(def)
}

/// Validate configs and build every resource (call once at startup).
pub fn resolve(
    configs: &[ResourceConfig],
    registry: &Registry,
    factory: &ResourceFactory,
) -> Result<Vec<Resource>, ConfigError> {
    validate(configs)?;
    configs
        .iter()
        .map(|c| factory.build(definition_from_config(c, registry)?))
        .collect()
}
