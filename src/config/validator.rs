//! Config validation: names must be usable as path segments and unique.

use crate::config::ResourceConfig;
use crate::error::ConfigError;
use std::collections::HashSet;

pub fn validate(configs: &[ResourceConfig]) -> Result<(), ConfigError> {
    validate_names(configs.iter().map(|c| c.name.as_str()))
}

/// Check that every name is a non-empty single path segment and that no two are the same.
/// Leading and trailing slashes are ignored.
pub fn validate_names<'a, I>(names: I) -> Result<(), ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for raw in names {
        let name = raw.trim_matches('/');
        if name.is_empty() {
            return Err(ConfigError::Validation("resource name must not be empty".into()));
        }
        if name.contains('/') || name.contains(':') || name.contains('{') {
            return Err(ConfigError::Validation(format!(
                "resource name '{}' must be a single path segment",
                raw
            )));
        }
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateResource(name.to_string()));
        }
    }
    Ok(())
}
