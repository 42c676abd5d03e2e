//! Tree node definitions
//!
//! Nodes are owned by the [`ResourceTree`](super::ResourceTree) arena and refer
//! to each other by [`RefId`]. Identity fields (`ref_id`, parent and child
//! lists) are assigned by the tree on insertion and are read-only outside it.

use super::kind::{ContainerKind, DefinitionKind, ResourceKind};
use crate::model::SourceRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Run-scoped identity of a tree node
///
/// One counter is shared by containers, definitions and resources, so a
/// `RefId` is unique across the whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefId(pub u64);

impl fmt::Display for RefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ref-{}", self.0)
    }
}

/// Physical grouping node (installer, archive, assembly)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceContainer {
    /// Unique key
    pub key: String,

    /// Display name
    pub name: String,

    /// Grouping level
    pub kind: ContainerKind,

    /// Opaque origin reference (usually a file path)
    pub location: String,

    pub(crate) ref_id: RefId,
    pub(crate) parent_ref_id: Option<RefId>,
    pub(crate) containers: Vec<RefId>,
    pub(crate) definitions: Vec<RefId>,
}

impl ResourceContainer {
    /// Create a new container; identity is assigned when it is added to a tree
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        kind: ContainerKind,
        location: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            location: location.into(),
            ref_id: RefId(0),
            parent_ref_id: None,
            containers: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn ref_id(&self) -> RefId {
        self.ref_id
    }

    pub fn parent_ref_id(&self) -> Option<RefId> {
        self.parent_ref_id
    }

    /// Child containers in insertion order
    pub fn containers(&self) -> &[RefId] {
        &self.containers
    }

    /// Definitions in insertion order
    pub fn definitions(&self) -> &[RefId] {
        &self.definitions
    }
}

/// One physical artifact payload (a schema file, a map, a binding file)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Key, unique within the owning container
    pub key: String,

    /// Display name
    pub name: String,

    /// Artifact kind
    pub kind: DefinitionKind,

    pub(crate) ref_id: RefId,
    pub(crate) parent_ref_id: RefId,
    pub(crate) resources: Vec<RefId>,
}

impl ResourceDefinition {
    /// Create a new definition; identity is assigned when it is added to a tree
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            ref_id: RefId(0),
            parent_ref_id: RefId(0),
            resources: Vec::new(),
        }
    }

    pub fn ref_id(&self) -> RefId {
        self.ref_id
    }

    /// The owning container
    pub fn parent_ref_id(&self) -> RefId {
        self.parent_ref_id
    }

    /// Top-level resources attached to this definition
    pub fn resources(&self) -> &[RefId] {
        &self.resources
    }
}

/// Direction of a cross reference between two resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipKind {
    ReferencesTo,
    ReferencedBy,
}

/// A cross reference from one resource to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub target: RefId,
    pub kind: RelationshipKind,
}

/// A logical, addressable unit produced by resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Globally unique key
    pub key: String,

    /// Display name
    pub name: String,

    /// Logical kind
    pub kind: ResourceKind,

    /// Optional free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub(crate) ref_id: RefId,
    pub(crate) parent_ref_id: RefId,
    pub(crate) source_object: Option<SourceRef>,
    pub(crate) resources: Vec<RefId>,
    pub(crate) relationships: Vec<Relationship>,
}

impl Resource {
    /// Create a new resource; identity is assigned when it is attached to a tree
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            kind,
            description: None,
            ref_id: RefId(0),
            parent_ref_id: RefId(0),
            source_object: None,
            resources: Vec::new(),
            relationships: Vec::new(),
        }
    }

    /// Set the domain object this resource represents
    pub fn with_source(mut self, source: SourceRef) -> Self {
        self.source_object = Some(source);
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn ref_id(&self) -> RefId {
        self.ref_id
    }

    /// The owning definition or resource
    pub fn parent_ref_id(&self) -> RefId {
        self.parent_ref_id
    }

    /// Back-reference to the domain object this resource represents
    pub fn source_object(&self) -> Option<SourceRef> {
        self.source_object
    }

    /// Child resources in attach order
    pub fn resources(&self) -> &[RefId] {
        &self.resources
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Targets of outgoing `ReferencesTo` relationships
    pub fn references(&self) -> impl Iterator<Item = RefId> + '_ {
        self.relationships
            .iter()
            .filter(|r| r.kind == RelationshipKind::ReferencesTo)
            .map(|r| r.target)
    }
}
