//! Schema domain objects

use crate::tree::RefId;
use serde::{Deserialize, Serialize};

/// Whether a schema describes documents or promoted properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Document,
    Property,
}

/// A root element declared by a schema, which becomes a message type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageDefinition {
    /// Local name of the root element
    pub root_element_name: String,

    /// Target namespace of the schema
    #[serde(default)]
    pub namespace: String,

    /// Linked message type resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl MessageDefinition {
    pub fn new(namespace: impl Into<String>, root_element_name: impl Into<String>) -> Self {
        Self {
            root_element_name: root_element_name.into(),
            namespace: namespace.into(),
            resource: None,
        }
    }

    /// Message type in `namespace#root` form
    pub fn message_type(&self) -> String {
        if self.namespace.is_empty() {
            self.root_element_name.clone()
        } else {
            format!("{}#{}", self.namespace, self.root_element_name)
        }
    }
}

/// A parsed schema artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub name: String,

    /// Namespace qualified type name, used by maps to refer to the schema
    pub full_name: String,

    /// Key of the backing [`ResourceDefinition`](crate::ResourceDefinition)
    pub resource_definition_key: String,

    #[serde(default)]
    pub schema_kind: SchemaKind,

    #[serde(default)]
    pub message_definitions: Vec<MessageDefinition>,

    /// Linked schema resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl Schema {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        resource_definition_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            resource_definition_key: resource_definition_key.into(),
            schema_kind: SchemaKind::Document,
            message_definitions: Vec::new(),
            resource: None,
        }
    }

    pub fn with_kind(mut self, schema_kind: SchemaKind) -> Self {
        self.schema_kind = schema_kind;
        self
    }

    pub fn with_message(mut self, message: MessageDefinition) -> Self {
        self.message_definitions.push(message);
        self
    }
}
