//! Model snapshots
//!
//! A snapshot is the serialized input of a run: the physical container tree
//! (containers nest, each holding its artifact definitions) and the parsed
//! application group. Loading a snapshot ingests the containers depth-first,
//! definitions before child containers, so that a `(key, kind)` lookup
//! returns the first match in depth-first order.
//!
//! ```json
//! {
//!   "containers": [{
//!     "key": "app.msi", "name": "app.msi", "kind": "msi",
//!     "definitions": [{ "key": "app.msi:order.xsd", "name": "order.xsd", "kind": "schema" }]
//!   }],
//!   "source": {
//!     "schemas": [{ "name": "Order", "full_name": "Contoso.Order", "resource_definition_key": "app.msi:order.xsd" }]
//!   }
//! }
//! ```

use crate::error::{Result, SdkError};
use relink_core::{
    ApplicationGroup, ContainerKind, DefinitionKind, MigrationModel, RefId, ResourceContainer,
    ResourceDefinition, ResourceTree,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An artifact definition inside a container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionSnapshot {
    pub key: String,
    pub name: String,
    pub kind: DefinitionKind,
}

/// A container with its definitions and nested containers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    pub key: String,
    pub name: String,
    pub kind: ContainerKind,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub definitions: Vec<DefinitionSnapshot>,

    #[serde(default)]
    pub containers: Vec<ContainerSnapshot>,
}

/// Serialized input of a run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub containers: Vec<ContainerSnapshot>,

    /// Parsed application group; absent when nothing was parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ApplicationGroup>,
}

impl ModelSnapshot {
    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a snapshot from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| SdkError::InvalidSnapshot(e.to_string()))
    }

    /// Read a snapshot file; `.yaml` and `.yml` files are read as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let snapshot = if is_yaml {
            Self::from_yaml(&content)?
        } else {
            Self::from_json(&content)?
        };

        tracing::debug!(path = %path.display(), containers = snapshot.containers.len(), "read model snapshot");
        Ok(snapshot)
    }

    /// Ingest the snapshot into a fresh model
    pub fn into_model(self) -> Result<MigrationModel> {
        let mut tree = ResourceTree::new();
        for container in self.containers {
            ingest(&mut tree, None, container)?;
        }

        Ok(MigrationModel {
            resources: tree,
            source: self.source,
        })
    }
}

fn ingest(tree: &mut ResourceTree, parent: Option<RefId>, snapshot: ContainerSnapshot) -> Result<()> {
    let container = tree.add_container(
        parent,
        ResourceContainer::new(snapshot.key, snapshot.name, snapshot.kind, snapshot.location),
    )?;

    for definition in snapshot.definitions {
        tree.add_definition(
            container,
            ResourceDefinition::new(definition.key, definition.name, definition.kind),
        )?;
    }

    for child in snapshot.containers {
        ingest(tree, Some(container), child)?;
    }

    Ok(())
}
