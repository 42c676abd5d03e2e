//! Binding file domain objects
//!
//! Receive locations and ports carry their pipeline configuration as raw
//! payload strings (`*_pipeline_data`). The pipeline data parsers decode those
//! into the matching `*_pipeline_configuration` fields.

use crate::pipeline_config::PipelineConfiguration;
use crate::tree::RefId;
use serde::{Deserialize, Serialize};

/// A receive location of a receive port
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReceiveLocation {
    pub name: String,

    #[serde(default)]
    pub address: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_pipeline_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pipeline_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_pipeline_configuration: Option<PipelineConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pipeline_configuration: Option<PipelineConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl ReceiveLocation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_receive_pipeline_data(mut self, data: impl Into<String>) -> Self {
        self.receive_pipeline_data = Some(data.into());
        self
    }

    pub fn with_send_pipeline_data(mut self, data: impl Into<String>) -> Self {
        self.send_pipeline_data = Some(data.into());
        self
    }
}

/// A receive port
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReceivePort {
    pub name: String,

    #[serde(default)]
    pub is_two_way: bool,

    /// Response pipeline payload of a two-way port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pipeline_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pipeline_configuration: Option<PipelineConfiguration>,

    #[serde(default)]
    pub receive_locations: Vec<ReceiveLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl ReceivePort {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn two_way(mut self) -> Self {
        self.is_two_way = true;
        self
    }

    pub fn with_send_pipeline_data(mut self, data: impl Into<String>) -> Self {
        self.send_pipeline_data = Some(data.into());
        self
    }

    pub fn with_location(mut self, location: ReceiveLocation) -> Self {
        self.receive_locations.push(location);
        self
    }
}

/// A send port
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SendPort {
    pub name: String,

    #[serde(default)]
    pub is_two_way: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pipeline_data: Option<String>,

    /// Response pipeline payload of a solicit-response port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_pipeline_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_pipeline_configuration: Option<PipelineConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receive_pipeline_configuration: Option<PipelineConfiguration>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl SendPort {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn two_way(mut self) -> Self {
        self.is_two_way = true;
        self
    }

    pub fn with_send_pipeline_data(mut self, data: impl Into<String>) -> Self {
        self.send_pipeline_data = Some(data.into());
        self
    }

    pub fn with_receive_pipeline_data(mut self, data: impl Into<String>) -> Self {
        self.receive_pipeline_data = Some(data.into());
        self
    }
}

/// Contents of a binding file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BindingInfo {
    /// Application the bindings were exported from
    #[serde(default)]
    pub application_name: String,

    #[serde(default)]
    pub receive_ports: Vec<ReceivePort>,

    #[serde(default)]
    pub send_ports: Vec<SendPort>,
}

/// A parsed binding file artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingFile {
    pub name: String,

    /// Key of the backing [`ResourceDefinition`](crate::ResourceDefinition)
    pub resource_definition_key: String,

    /// Parsed contents; `None` when the file held no binding info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding_info: Option<BindingInfo>,

    /// Owning application name, assigned while parsing pipeline data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,

    /// Linked bindings resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl BindingFile {
    pub fn new(name: impl Into<String>, resource_definition_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resource_definition_key: resource_definition_key.into(),
            binding_info: None,
            application_name: None,
            resource: None,
        }
    }

    pub fn with_binding_info(mut self, binding_info: BindingInfo) -> Self {
        self.binding_info = Some(binding_info);
        self
    }
}
