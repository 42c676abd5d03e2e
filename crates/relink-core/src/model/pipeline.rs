//! Pipeline domain objects

use crate::tree::RefId;
use serde::{Deserialize, Serialize};

/// Whether a pipeline processes inbound or outbound messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineDirection {
    #[default]
    Receive,
    Send,
}

/// A component placed in a pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineComponent {
    pub name: String,

    /// Type name of the component implementation
    #[serde(default)]
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl PipelineComponent {
    pub fn new(name: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            resource: None,
        }
    }
}

/// A stage in a pipeline document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStage {
    pub name: String,

    /// Stage category identifier
    #[serde(default)]
    pub category_id: String,

    #[serde(default)]
    pub components: Vec<PipelineComponent>,
}

impl PipelineStage {
    pub fn new(name: impl Into<String>, category_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category_id: category_id.into(),
            components: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: PipelineComponent) -> Self {
        self.components.push(component);
        self
    }
}

/// Structure of a pipeline artifact
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineDocument {
    #[serde(default)]
    pub stages: Vec<PipelineStage>,
}

/// A parsed pipeline artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    pub name: String,

    pub full_name: String,

    /// Key of the backing [`ResourceDefinition`](crate::ResourceDefinition)
    pub resource_definition_key: String,

    #[serde(default)]
    pub direction: PipelineDirection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<PipelineDocument>,

    /// Linked pipeline resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl Pipeline {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        resource_definition_key: impl Into<String>,
        direction: PipelineDirection,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            resource_definition_key: resource_definition_key.into(),
            direction,
            document: None,
            resource: None,
        }
    }

    pub fn with_stage(mut self, stage: PipelineStage) -> Self {
        self.document.get_or_insert_with(PipelineDocument::default).stages.push(stage);
        self
    }
}
