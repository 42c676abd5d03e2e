//! Resource tree and key index
//!
//! The tree is an arena holding three node types:
//! - [`ResourceContainer`]: physical grouping (installer, archive, assembly)
//! - [`ResourceDefinition`]: one physical artifact payload inside a container
//! - [`Resource`]: a logical unit found by resolution, owned by a definition
//!   or by another resource
//!
//! Containers and definitions are created by ingestion. Resources are attached
//! by the artifact parsers and are never removed within a run.
//!
//! Lookups are keyed by `(key, kind)` rather than by key alone, because a
//! definition and a resource of different kinds may share the same textual key.

pub mod kind;
pub mod node;

pub use kind::{ContainerKind, DefinitionKind, ResourceKind};
pub use node::{Relationship, RelationshipKind, RefId, Resource, ResourceContainer, ResourceDefinition};

use crate::error::{CoreError, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Container(usize),
    Definition(usize),
    Resource(usize),
}

impl Slot {
    fn type_name(&self) -> &'static str {
        match self {
            Slot::Container(_) => "container",
            Slot::Definition(_) => "definition",
            Slot::Resource(_) => "resource",
        }
    }
}

/// Arena of containers, definitions and resources with a `(key, kind)` index
#[derive(Debug, Clone, Serialize)]
pub struct ResourceTree {
    containers: Vec<ResourceContainer>,
    definitions: Vec<ResourceDefinition>,
    resources: Vec<Resource>,
    roots: Vec<RefId>,

    #[serde(skip)]
    slots: HashMap<RefId, Slot>,
    #[serde(skip)]
    container_index: HashMap<String, RefId>,
    #[serde(skip)]
    definition_index: HashMap<(String, DefinitionKind), RefId>,
    #[serde(skip)]
    resource_index: HashMap<(String, ResourceKind), RefId>,
    #[serde(skip)]
    resource_keys: HashSet<String>,
    #[serde(skip)]
    next_ref: u64,
}

impl Default for ResourceTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self {
            containers: Vec::new(),
            definitions: Vec::new(),
            resources: Vec::new(),
            roots: Vec::new(),
            slots: HashMap::new(),
            container_index: HashMap::new(),
            definition_index: HashMap::new(),
            resource_index: HashMap::new(),
            resource_keys: HashSet::new(),
            next_ref: 1,
        }
    }

    fn allocate(&mut self) -> RefId {
        let id = RefId(self.next_ref);
        self.next_ref += 1;
        id
    }

    fn slot(&self, id: RefId) -> Result<Slot> {
        self.slots.get(&id).copied().ok_or(CoreError::UnknownRef(id))
    }

    // ========== Ingestion ==========

    /// Add a container, either as a root (`parent == None`) or under another container
    pub fn add_container(
        &mut self,
        parent: Option<RefId>,
        mut container: ResourceContainer,
    ) -> Result<RefId> {
        if self.container_index.contains_key(&container.key) {
            return Err(CoreError::DuplicateContainerKey(container.key));
        }

        let parent_index = match parent {
            None => None,
            Some(parent_id) => match self.slot(parent_id)? {
                Slot::Container(index) => Some(index),
                other => {
                    return Err(CoreError::InvalidParent {
                        parent: parent_id,
                        parent_type: other.type_name(),
                        child_type: "container",
                    })
                }
            },
        };

        let id = self.allocate();
        container.ref_id = id;
        container.parent_ref_id = parent;
        container.containers.clear();
        container.definitions.clear();

        match parent_index {
            Some(index) => self.containers[index].containers.push(id),
            None => self.roots.push(id),
        }

        log::debug!("added container '{}' as {}", container.key, id);
        self.container_index.insert(container.key.clone(), id);
        self.slots.insert(id, Slot::Container(self.containers.len()));
        self.containers.push(container);

        Ok(id)
    }

    /// Add a definition to a container
    ///
    /// Definition keys must be unique within their container. When two
    /// containers hold a definition with the same `(key, kind)`, lookups return
    /// the one added first.
    pub fn add_definition(
        &mut self,
        container: RefId,
        mut definition: ResourceDefinition,
    ) -> Result<RefId> {
        let container_index = match self.slot(container)? {
            Slot::Container(index) => index,
            other => {
                return Err(CoreError::InvalidParent {
                    parent: container,
                    parent_type: other.type_name(),
                    child_type: "definition",
                })
            }
        };

        let owner = &self.containers[container_index];
        let clash = owner
            .definitions
            .iter()
            .filter_map(|id| self.definition(*id))
            .any(|existing| existing.key == definition.key);
        if clash {
            return Err(CoreError::DuplicateDefinitionKey {
                container: owner.key.clone(),
                key: definition.key,
            });
        }

        let id = self.allocate();
        definition.ref_id = id;
        definition.parent_ref_id = container;
        definition.resources.clear();

        self.containers[container_index].definitions.push(id);
        self.definition_index
            .entry((definition.key.clone(), definition.kind))
            .or_insert(id);
        self.slots.insert(id, Slot::Definition(self.definitions.len()));
        self.definitions.push(definition);

        Ok(id)
    }

    // ========== Resolution ==========

    /// Attach a resource under a definition or another resource
    ///
    /// Assigns a fresh [`RefId`], sets the parent reference and appends the
    /// resource to the parent's child list. A key that is already used by any
    /// resource in the tree is rejected and the tree is left unchanged.
    pub fn attach(&mut self, parent: RefId, mut resource: Resource) -> Result<RefId> {
        let parent_slot = self.slot(parent)?;
        if self.resource_keys.contains(&resource.key) {
            return Err(CoreError::DuplicateResourceKey(resource.key));
        }

        let id = match parent_slot {
            Slot::Container(_) => {
                return Err(CoreError::InvalidParent {
                    parent,
                    parent_type: parent_slot.type_name(),
                    child_type: "resource",
                })
            }
            Slot::Definition(index) => {
                let id = self.allocate();
                self.definitions[index].resources.push(id);
                id
            }
            Slot::Resource(index) => {
                let id = self.allocate();
                self.resources[index].resources.push(id);
                id
            }
        };

        resource.ref_id = id;
        resource.parent_ref_id = parent;
        resource.resources.clear();
        resource.relationships.clear();

        log::debug!("attached {} '{}' as {} under {}", resource.kind, resource.key, id, parent);
        self.resource_keys.insert(resource.key.clone());
        self.resource_index.insert((resource.key.clone(), resource.kind), id);
        self.slots.insert(id, Slot::Resource(self.resources.len()));
        self.resources.push(resource);

        Ok(id)
    }

    /// Record that `from` references `to`, with the reciprocal link on `to`
    pub fn add_relationship(&mut self, from: RefId, to: RefId) -> Result<()> {
        let from_index = self.resource_slot(from)?;
        let to_index = self.resource_slot(to)?;

        let forward = Relationship {
            target: to,
            kind: RelationshipKind::ReferencesTo,
        };
        if !self.resources[from_index].relationships.contains(&forward) {
            self.resources[from_index].relationships.push(forward);
        }

        let backward = Relationship {
            target: from,
            kind: RelationshipKind::ReferencedBy,
        };
        if !self.resources[to_index].relationships.contains(&backward) {
            self.resources[to_index].relationships.push(backward);
        }

        Ok(())
    }

    fn resource_slot(&self, id: RefId) -> Result<usize> {
        match self.slot(id)? {
            Slot::Resource(index) => Ok(index),
            other => Err(CoreError::InvalidParent {
                parent: id,
                parent_type: other.type_name(),
                child_type: "relationship",
            }),
        }
    }

    // ========== Lookup ==========

    /// Find a definition by key and kind
    ///
    /// Absence is not an error; the caller decides whether it is fatal.
    pub fn find_resource_definition(
        &self,
        key: &str,
        kind: DefinitionKind,
    ) -> Option<&ResourceDefinition> {
        self.definition_index
            .get(&(key.to_string(), kind))
            .and_then(|id| self.definition(*id))
    }

    /// Find a resource by key and kind
    pub fn find_resource(&self, key: &str, kind: ResourceKind) -> Option<&Resource> {
        self.resource_index
            .get(&(key.to_string(), kind))
            .and_then(|id| self.resource(*id))
    }

    /// All resources of a kind, in attach order
    pub fn find_resources_by_kind(&self, kind: ResourceKind) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.kind == kind).collect()
    }

    /// Find a container by key
    pub fn find_container(&self, key: &str) -> Option<&ResourceContainer> {
        self.container_index
            .get(key)
            .and_then(|id| self.container(*id))
    }

    pub fn container(&self, id: RefId) -> Option<&ResourceContainer> {
        match self.slots.get(&id) {
            Some(Slot::Container(index)) => self.containers.get(*index),
            _ => None,
        }
    }

    pub fn definition(&self, id: RefId) -> Option<&ResourceDefinition> {
        match self.slots.get(&id) {
            Some(Slot::Definition(index)) => self.definitions.get(*index),
            _ => None,
        }
    }

    pub fn resource(&self, id: RefId) -> Option<&Resource> {
        match self.slots.get(&id) {
            Some(Slot::Resource(index)) => self.resources.get(*index),
            _ => None,
        }
    }

    /// Key of any node, whatever its type
    pub fn key_of(&self, id: RefId) -> Option<&str> {
        match self.slots.get(&id)? {
            Slot::Container(index) => self.containers.get(*index).map(|c| c.key.as_str()),
            Slot::Definition(index) => self.definitions.get(*index).map(|d| d.key.as_str()),
            Slot::Resource(index) => self.resources.get(*index).map(|r| r.key.as_str()),
        }
    }

    /// Resources directly owned by a definition or a resource
    pub fn children_of(&self, id: RefId) -> &[RefId] {
        match self.slots.get(&id) {
            Some(Slot::Definition(index)) => &self.definitions[*index].resources,
            Some(Slot::Resource(index)) => &self.resources[*index].resources,
            _ => &[],
        }
    }

    /// Parent of any node; `None` for root containers and unknown ids
    pub fn parent_of(&self, id: RefId) -> Option<RefId> {
        match self.slots.get(&id)? {
            Slot::Container(index) => self.containers.get(*index)?.parent_ref_id,
            Slot::Definition(index) => self.definitions.get(*index).map(|d| d.parent_ref_id),
            Slot::Resource(index) => self.resources.get(*index).map(|r| r.parent_ref_id),
        }
    }

    /// Definitions held by a container, in insertion order
    pub fn definitions_in(&self, container: RefId) -> impl Iterator<Item = &ResourceDefinition> {
        let ids = match self.slots.get(&container) {
            Some(Slot::Container(index)) => self.containers[*index].definitions.as_slice(),
            _ => &[],
        };
        ids.iter().filter_map(move |id| self.definition(*id))
    }

    /// Root containers in insertion order
    pub fn root_containers(&self) -> impl Iterator<Item = &ResourceContainer> {
        self.roots.iter().filter_map(move |id| self.container(*id))
    }

    pub fn containers(&self) -> impl Iterator<Item = &ResourceContainer> {
        self.containers.iter()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &ResourceDefinition> {
        self.definitions.iter()
    }

    /// All resources in attach order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}
