//! crud-resource: declarative CRUD resources for axum.
//!
//! A [`ResourceDefinition`] names a model, a type, and optionally the subset of operations to
//! expose. [`ResourceFactory::build`] checks it, synthesizes every handler the definition does not
//! supply, and returns a [`Resource`] whose route table can be mounted on a router.

pub mod config;
pub mod error;
pub mod model;
pub mod resource;
pub mod response;
pub mod routes;
pub mod state;

pub use config::{load_from_path, resolve, Registry, ResourceConfig, Settings};
pub use error::{AppError, ConfigError};
pub use model::{Model, ResourceType, SharedModel, SharedType};
pub use resource::{
    handler_fn, BoxHandler, CrudRequest, Handler, Namespace, Operation, Resource, ResourceDefinition,
    ResourceFactory, Route,
};
pub use response::{success_many, success_one};
pub use routes::{app, common_routes, resource_routes};
pub use state::AppState;
