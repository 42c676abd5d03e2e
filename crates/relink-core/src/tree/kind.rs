//! Kind tags for tree nodes
//!
//! Every kind renders as a stable lowercase tag. The tags appear in error
//! messages and in serialized snapshots, so they must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical grouping level of a [`ResourceContainer`](super::ResourceContainer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    /// Installer package
    Msi,
    /// Cabinet archive extracted from an installer
    Cab,
    /// Assembly holding compiled artifacts
    Assembly,
    /// Plain directory
    Folder,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Msi => "msi",
            ContainerKind::Cab => "cab",
            ContainerKind::Assembly => "assembly",
            ContainerKind::Folder => "folder",
        }
    }
}

/// Kind of physical artifact payload a [`ResourceDefinition`](super::ResourceDefinition) represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefinitionKind {
    Schema,
    Transform,
    Orchestration,
    Pipeline,
    Bindings,
    ApplicationDefinition,
}

impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DefinitionKind::Schema => "schema",
            DefinitionKind::Transform => "transform",
            DefinitionKind::Orchestration => "orchestration",
            DefinitionKind::Pipeline => "pipeline",
            DefinitionKind::Bindings => "bindings",
            DefinitionKind::ApplicationDefinition => "applicationdefinition",
        }
    }
}

/// Kind of logical unit a [`Resource`](super::Resource) represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    DocumentSchema,
    PropertySchema,
    MessageType,
    Map,
    Module,
    CorrelationType,
    MultipartMessageType,
    PortType,
    ServiceDeclaration,
    ReceivePipeline,
    SendPipeline,
    PipelineComponent,
    Bindings,
    ReceivePort,
    ReceiveLocation,
    SendPort,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::DocumentSchema => "documentschema",
            ResourceKind::PropertySchema => "propertyschema",
            ResourceKind::MessageType => "messagetype",
            ResourceKind::Map => "map",
            ResourceKind::Module => "module",
            ResourceKind::CorrelationType => "correlationtype",
            ResourceKind::MultipartMessageType => "multipartmessagetype",
            ResourceKind::PortType => "porttype",
            ResourceKind::ServiceDeclaration => "servicedeclaration",
            ResourceKind::ReceivePipeline => "receivepipeline",
            ResourceKind::SendPipeline => "sendpipeline",
            ResourceKind::PipelineComponent => "pipelinecomponent",
            ResourceKind::Bindings => "bindings",
            ResourceKind::ReceivePort => "receiveport",
            ResourceKind::ReceiveLocation => "receivelocation",
            ResourceKind::SendPort => "sendport",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
