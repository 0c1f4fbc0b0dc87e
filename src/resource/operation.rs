//! The fixed method table: every CRUD operation with its path template and HTTP verb.

use crate::error::ConfigError;
use axum::http::Method;
use axum::routing::MethodFilter;
use std::fmt;
use std::str::FromStr;

/// Path template shared by collection operations.
pub const COLLECTION_PATH: &str = "/";
/// Path template shared by element operations.
pub const ELEMENT_PATH: &str = "/{element_id}/";
/// Name of the path parameter in [`ELEMENT_PATH`].
pub const ELEMENT_ID: &str = "element_id";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// List resource collection.
    List,
    /// Replace the entire collection with a new one.
    Replace,
    /// Drop the entire collection.
    Drop,
    /// Create a new element.
    Create,
    /// Retrieve one element.
    Retrieve,
    /// Update one element.
    Update,
    /// Delete one element.
    Delete,
}

impl Operation {
    /// Every recognized operation, in table order.
    pub const ALL: [Operation; 7] = [
        Operation::List,
        Operation::Replace,
        Operation::Drop,
        Operation::Create,
        Operation::Retrieve,
        Operation::Update,
        Operation::Delete,
    ];

    /// Operations generated when a definition does not restrict them.
    pub const DEFAULT: [Operation; 5] = [
        Operation::Create,
        Operation::Retrieve,
        Operation::Update,
        Operation::Delete,
        Operation::List,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Replace => "replace",
            Operation::Drop => "drop",
            Operation::Create => "create",
            Operation::Retrieve => "retrieve",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    /// (path template, verb) for this operation.
    pub fn route(self) -> (&'static str, Method) {
        match self {
            Operation::List => (COLLECTION_PATH, Method::GET),
            Operation::Replace => (COLLECTION_PATH, Method::PUT),
            Operation::Drop => (COLLECTION_PATH, Method::DELETE),
            Operation::Create => (COLLECTION_PATH, Method::POST),
            Operation::Retrieve => (ELEMENT_PATH, Method::GET),
            Operation::Update => (ELEMENT_PATH, Method::PUT),
            Operation::Delete => (ELEMENT_PATH, Method::DELETE),
        }
    }

    pub fn path(self) -> &'static str {
        self.route().0
    }

    pub fn verb(self) -> Method {
        self.route().1
    }

    pub fn is_element(self) -> bool {
        self.path() == ELEMENT_PATH
    }

    pub(crate) fn method_filter(self) -> MethodFilter {
        match self {
            Operation::List | Operation::Retrieve => MethodFilter::GET,
            Operation::Replace | Operation::Update => MethodFilter::PUT,
            Operation::Drop | Operation::Delete => MethodFilter::DELETE,
            Operation::Create => MethodFilter::POST,
        }
    }

    /// Comma separated list of every valid operation name.
    pub fn available() -> String {
        Operation::ALL
            .iter()
            .map(|op| op.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn invalid(method: &str) -> ConfigError {
        ConfigError::InvalidMethod {
            method: method.to_string(),
            available: Operation::available(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| Operation::invalid(s))
    }
}
