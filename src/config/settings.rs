//! Process settings from environment variables.

use crate::error::ConfigError;
use std::path::PathBuf;

pub const RESOURCES_PATH_VAR: &str = "CRUD_RESOURCES_PATH";
pub const BIND_ADDR_VAR: &str = "CRUD_BIND_ADDR";
pub const BODY_LIMIT_VAR: &str = "CRUD_BODY_LIMIT";

pub const DEFAULT_RESOURCES_PATH: &str = "resources.json";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
/// 1 MiB.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub resources_path: PathBuf,
    pub bind_addr: String,
    /// Maximum request body size in bytes.
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            resources_path: PathBuf::from(DEFAULT_RESOURCES_PATH),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    /// Read `CRUD_RESOURCES_PATH`, `CRUD_BIND_ADDR` and `CRUD_BODY_LIMIT`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let body_limit = match lookup(BODY_LIMIT_VAR) {
            Some(v) => v.trim().parse().map_err(|_| {
                ConfigError::Validation(format!("{} must be a byte count, got '{}'", BODY_LIMIT_VAR, v))
            })?,
            None => defaults.body_limit,
        };
        Ok(Self {
            resources_path: lookup(RESOURCES_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.resources_path),
            bind_addr: lookup(BIND_ADDR_VAR).unwrap_or(defaults.bind_addr),
            body_limit,
        })
    }
}
