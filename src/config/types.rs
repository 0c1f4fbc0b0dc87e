//! Raw config types matching the resources JSON file.

use serde::{Deserialize, Serialize};

/// One resource as written in `resources.json`. `model` and `type` name entries of a
/// [`Registry`](crate::config::Registry); they stay optional here so that a missing one is
/// reported by the factory with the resource's name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub name: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default, rename = "type")]
    pub type_: Option<String>,
    #[serde(default)]
    pub methods: Option<Vec<String>>,
}
