//! Map (transform) domain objects

use crate::tree::RefId;
use serde::{Deserialize, Serialize};

/// A parsed map artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub name: String,

    /// Namespace qualified type name
    pub full_name: String,

    /// Key of the backing [`ResourceDefinition`](crate::ResourceDefinition)
    pub resource_definition_key: String,

    /// Full names of the schemas the map reads
    #[serde(default)]
    pub source_schemas: Vec<String>,

    /// Full names of the schemas the map writes
    #[serde(default)]
    pub target_schemas: Vec<String>,

    /// Linked map resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl Transform {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        resource_definition_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            resource_definition_key: resource_definition_key.into(),
            source_schemas: Vec::new(),
            target_schemas: Vec::new(),
            resource: None,
        }
    }

    pub fn with_source_schema(mut self, full_name: impl Into<String>) -> Self {
        self.source_schemas.push(full_name.into());
        self
    }

    pub fn with_target_schema(mut self, full_name: impl Into<String>) -> Self {
        self.target_schemas.push(full_name.into());
        self
    }
}
