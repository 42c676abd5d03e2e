//! Domain model
//!
//! A [`MigrationModel`] pairs the resource tree with the flat domain objects
//! parsed from an application group. Domain objects live in arenas on the
//! [`ApplicationGroup`] and are addressed by typed indices. A resource points
//! back at its object through a [`SourceRef`]; the object stores the
//! resource's [`RefId`](crate::RefId). Neither side owns the other.

pub mod binding;
pub mod orchestration;
pub mod pipeline;
pub mod schema;
pub mod transform;

pub use binding::{BindingFile, BindingInfo, ReceiveLocation, ReceivePort, SendPort};
pub use orchestration::{ElementId, ElementKind, MetaModel, MetaModelElement, Orchestration};
pub use pipeline::{Pipeline, PipelineComponent, PipelineDirection, PipelineDocument, PipelineStage};
pub use schema::{MessageDefinition, Schema, SchemaKind};
pub use transform::Transform;

use crate::tree::ResourceTree;
use serde::{Deserialize, Serialize};

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl $name {
            pub fn index(&self) -> usize {
                self.0
            }
        }
    };
}

arena_id!(
    /// Index of a [`Schema`] in [`ApplicationGroup::schemas`]
    SchemaId
);
arena_id!(
    /// Index of a [`Transform`] in [`ApplicationGroup::transforms`]
    TransformId
);
arena_id!(
    /// Index of an [`Orchestration`] in [`ApplicationGroup::orchestrations`]
    OrchestrationId
);
arena_id!(
    /// Index of a [`Pipeline`] in [`ApplicationGroup::pipelines`]
    PipelineId
);
arena_id!(
    /// Index of a [`BindingFile`] in [`ApplicationGroup::binding_files`]
    BindingFileId
);

/// Back-reference from a resource to the domain object it represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SourceRef {
    Schema { schema: SchemaId },
    MessageType { schema: SchemaId, message: usize },
    Transform { transform: TransformId },
    Orchestration { orchestration: OrchestrationId },
    OrchestrationElement { orchestration: OrchestrationId, element: ElementId },
    Pipeline { pipeline: PipelineId },
    PipelineComponent { pipeline: PipelineId, stage: usize, component: usize },
    BindingFile { binding_file: BindingFileId },
    ReceivePort { binding_file: BindingFileId, port: usize },
    ReceiveLocation { binding_file: BindingFileId, port: usize, location: usize },
    SendPort { binding_file: BindingFileId, port: usize },
}

/// An application in the group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Application {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Flat domain objects parsed from an application group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApplicationGroup {
    #[serde(default)]
    pub applications: Vec<Application>,

    #[serde(default)]
    pub schemas: Vec<Schema>,

    #[serde(default)]
    pub transforms: Vec<Transform>,

    #[serde(default)]
    pub orchestrations: Vec<Orchestration>,

    #[serde(default)]
    pub pipelines: Vec<Pipeline>,

    #[serde(default)]
    pub binding_files: Vec<BindingFile>,
}

/// Find a schema by full type name in a schema list, with its arena id
pub fn find_schema_by_full_name<'a>(
    schemas: &'a [Schema],
    full_name: &str,
) -> Option<(SchemaId, &'a Schema)> {
    schemas
        .iter()
        .enumerate()
        .find(|(_, s)| s.full_name == full_name)
        .map(|(i, s)| (SchemaId(i), s))
}

impl ApplicationGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema(&self, id: SchemaId) -> Option<&Schema> {
        self.schemas.get(id.0)
    }

    pub fn transform(&self, id: TransformId) -> Option<&Transform> {
        self.transforms.get(id.0)
    }

    pub fn orchestration(&self, id: OrchestrationId) -> Option<&Orchestration> {
        self.orchestrations.get(id.0)
    }

    pub fn pipeline(&self, id: PipelineId) -> Option<&Pipeline> {
        self.pipelines.get(id.0)
    }

    pub fn binding_file(&self, id: BindingFileId) -> Option<&BindingFile> {
        self.binding_files.get(id.0)
    }

    /// Find a schema by its full (namespace qualified) type name
    pub fn find_schema_by_full_name(&self, full_name: &str) -> Option<(SchemaId, &Schema)> {
        find_schema_by_full_name(&self.schemas, full_name)
    }

    /// Resource link stored on the object a [`SourceRef`] points at
    pub fn resource_of(&self, source: SourceRef) -> Option<crate::RefId> {
        match source {
            SourceRef::Schema { schema } => self.schema(schema)?.resource,
            SourceRef::MessageType { schema, message } => {
                self.schema(schema)?.message_definitions.get(message)?.resource
            }
            SourceRef::Transform { transform } => self.transform(transform)?.resource,
            SourceRef::Orchestration { orchestration } => {
                self.orchestration(orchestration)?.resource
            }
            SourceRef::OrchestrationElement {
                orchestration,
                element,
            } => {
                self.orchestration(orchestration)?
                    .model
                    .as_ref()?
                    .element(element)?
                    .resource
            }
            SourceRef::Pipeline { pipeline } => self.pipeline(pipeline)?.resource,
            SourceRef::PipelineComponent {
                pipeline,
                stage,
                component,
            } => {
                self.pipeline(pipeline)?
                    .document
                    .as_ref()?
                    .stages
                    .get(stage)?
                    .components
                    .get(component)?
                    .resource
            }
            SourceRef::BindingFile { binding_file } => self.binding_file(binding_file)?.resource,
            SourceRef::ReceivePort { binding_file, port } => {
                self.binding_file(binding_file)?
                    .binding_info
                    .as_ref()?
                    .receive_ports
                    .get(port)?
                    .resource
            }
            SourceRef::ReceiveLocation {
                binding_file,
                port,
                location,
            } => {
                self.binding_file(binding_file)?
                    .binding_info
                    .as_ref()?
                    .receive_ports
                    .get(port)?
                    .receive_locations
                    .get(location)?
                    .resource
            }
            SourceRef::SendPort { binding_file, port } => {
                self.binding_file(binding_file)?
                    .binding_info
                    .as_ref()?
                    .send_ports
                    .get(port)?
                    .resource
            }
        }
    }
}

/// The model a run operates on
///
/// `source` is `None` when no application group was parsed at all; every
/// artifact parser treats that as "nothing to do".
#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrationModel {
    pub resources: ResourceTree,
    pub source: Option<ApplicationGroup>,
}

impl MigrationModel {
    /// Create a model with an empty tree and no parsed source
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model from an existing tree and group
    pub fn with_source(resources: ResourceTree, source: ApplicationGroup) -> Self {
        Self {
            resources,
            source: Some(source),
        }
    }
}
