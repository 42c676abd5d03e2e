//! Error types for relink core

use crate::tree::RefId;
use thiserror::Error;

/// Core error type
///
/// These are programmer errors raised by invalid tree operations. Data-level
/// resolution failures never use this type; they are recorded in the
/// [`ErrorChannel`](crate::ErrorChannel) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Unknown node reference: {0}")]
    UnknownRef(RefId),

    #[error("Node {parent} of type {parent_type} cannot own a {child_type}")]
    InvalidParent {
        parent: RefId,
        parent_type: &'static str,
        child_type: &'static str,
    },

    #[error("A container with key '{0}' already exists")]
    DuplicateContainerKey(String),

    #[error("A definition with key '{key}' already exists in container '{container}'")]
    DuplicateDefinitionKey { container: String, key: String },

    #[error("A resource with key '{0}' already exists")]
    DuplicateResourceKey(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
