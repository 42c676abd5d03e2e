//! Orchestration domain objects
//!
//! An orchestration carries its meta-model as a tagged tree: every element has
//! a kind, ordered named properties and ordered children. Elements are stored
//! in an arena and addressed by [`ElementId`], which lets a resource point back
//! at the element it was created for.

use crate::tree::RefId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of an element in [`MetaModel::elements`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub usize);

/// Meta-model element kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    Module,
    CorrelationType,
    MultipartMessageType,
    PortType,
    ServiceDeclaration,
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Module => "Module",
            ElementKind::CorrelationType => "CorrelationType",
            ElementKind::MultipartMessageType => "MultipartMessageType",
            ElementKind::PortType => "PortType",
            ElementKind::ServiceDeclaration => "ServiceDeclaration",
            ElementKind::Other(tag) => tag,
        }
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Module" => ElementKind::Module,
            "CorrelationType" => ElementKind::CorrelationType,
            "MultipartMessageType" => ElementKind::MultipartMessageType,
            "PortType" => ElementKind::PortType,
            "ServiceDeclaration" => ElementKind::ServiceDeclaration,
            _ => ElementKind::Other(tag),
        }
    }
}

impl From<ElementKind> for String {
    fn from(kind: ElementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name/value pair on a meta-model element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProperty {
    pub name: String,
    pub value: String,
}

/// One node of the meta-model tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaModelElement {
    pub kind: ElementKind,

    #[serde(default)]
    pub properties: Vec<ElementProperty>,

    #[serde(default)]
    pub children: Vec<ElementId>,

    /// Linked resource, for elements that become resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl MetaModelElement {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            properties: Vec::new(),
            children: Vec::new(),
            resource: None,
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(ElementProperty {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// First property value with the given name
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// The `Name` property, if present and non-empty
    pub fn name(&self) -> Option<&str> {
        self.property("Name").filter(|n| !n.is_empty())
    }
}

/// Arena-backed meta-model tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetaModel {
    #[serde(default)]
    pub elements: Vec<MetaModelElement>,

    #[serde(default)]
    pub root: Option<ElementId>,
}

impl MetaModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root element, returning its id
    pub fn set_root(&mut self, element: MetaModelElement) -> ElementId {
        let id = self.push(element);
        self.root = Some(id);
        id
    }

    /// Append a child under `parent`; returns `None` if `parent` does not exist
    pub fn add_child(&mut self, parent: ElementId, element: MetaModelElement) -> Option<ElementId> {
        if parent.0 >= self.elements.len() {
            return None;
        }
        let id = self.push(element);
        self.elements[parent.0].children.push(id);
        Some(id)
    }

    fn push(&mut self, element: MetaModelElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, id: ElementId) -> Option<&MetaModelElement> {
        self.elements.get(id.0)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut MetaModelElement> {
        self.elements.get_mut(id.0)
    }

    /// Depth-first search from the root for the first element of a kind
    pub fn find_first(&self, kind: &ElementKind) -> Option<ElementId> {
        let mut stack = vec![self.root?];
        let mut visited = vec![false; self.elements.len()];

        while let Some(id) = stack.pop() {
            let Some(element) = self.element(id) else {
                continue;
            };
            if std::mem::replace(&mut visited[id.0], true) {
                continue;
            }
            if &element.kind == kind {
                return Some(id);
            }
            // Reverse so children are visited in document order
            stack.extend(element.children.iter().rev().copied());
        }

        None
    }

    /// Direct children of `parent` with the given kind, in document order
    pub fn children_of_kind(&self, parent: ElementId, kind: &ElementKind) -> Vec<ElementId> {
        self.element(parent)
            .map(|element| {
                element
                    .children
                    .iter()
                    .copied()
                    .filter(|child| self.element(*child).is_some_and(|c| &c.kind == kind))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A parsed orchestration artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orchestration {
    pub name: String,

    pub full_name: String,

    /// Key of the backing [`ResourceDefinition`](crate::ResourceDefinition)
    pub resource_definition_key: String,

    /// Meta-model tree, absent when the orchestration could not be read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<MetaModel>,

    /// Linked module resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<RefId>,
}

impl Orchestration {
    pub fn new(
        name: impl Into<String>,
        full_name: impl Into<String>,
        resource_definition_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            full_name: full_name.into(),
            resource_definition_key: resource_definition_key.into(),
            model: None,
            resource: None,
        }
    }

    pub fn with_model(mut self, model: MetaModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Key the module resource is expected under, derived from the declared definition key
    pub fn module_resource_key(&self) -> String {
        format!("{}:{}", self.resource_definition_key, ElementKind::Module)
    }
}
