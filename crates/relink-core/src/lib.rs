//! Relink Core - Data model for the relink artifact resolver
//!
//! This crate provides the types shared by every relink crate:
//! - The resource tree (containers, definitions, resources) and its key index
//! - The flat domain objects parsed from an application group
//! - Pipeline configuration and property bag types
//! - The run-scoped error channel and the diagnostic sink contract
//! - Error types

pub mod context;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod pipeline_config;
pub mod property_bag;
pub mod tree;

// Re-export commonly used types
pub use context::{ErrorChannel, ErrorRecord, ParseContext, Severity};
pub use diagnostics::{DiagnosticLevel, DiagnosticSink, RecordingDiagnostics};
pub use error::CoreError;
pub use model::{ApplicationGroup, MigrationModel, SourceRef};
pub use pipeline_config::{ComponentConfiguration, PipelineConfiguration, StageConfiguration};
pub use property_bag::{Property, PropertyBag};
pub use tree::{
    ContainerKind, DefinitionKind, RefId, Resource, ResourceContainer, ResourceDefinition,
    ResourceKind, ResourceTree,
};
