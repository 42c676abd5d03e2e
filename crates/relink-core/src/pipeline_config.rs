//! Decoded pipeline configuration
//!
//! Produced from the pipeline payloads embedded in binding data and attached
//! to the owning port or location. Independent of the resource tree.

use crate::property_bag::PropertyBag;
use serde::{Deserialize, Serialize};

/// Configuration of one component within a stage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentConfiguration {
    /// Type name of the configured component
    pub name: String,

    #[serde(default)]
    pub properties: PropertyBag,
}

/// Configuration of one stage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StageConfiguration {
    /// Stage category identifier
    #[serde(default)]
    pub category_id: String,

    #[serde(default)]
    pub components: Vec<ComponentConfiguration>,
}

/// Per-instance pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelineConfiguration {
    #[serde(default)]
    pub stages: Vec<StageConfiguration>,
}

impl PipelineConfiguration {
    /// Total number of configured components across all stages
    pub fn component_count(&self) -> usize {
        self.stages.iter().map(|s| s.components.len()).sum()
    }
}
