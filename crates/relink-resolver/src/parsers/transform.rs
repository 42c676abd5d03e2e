//! Map parser
//!
//! Creates one map resource per transform and cross references the schema
//! resources the map reads and writes. Each schema reference is resolved on
//! its own: an unresolved reference records one error but keeps the map
//! resource and the references that did resolve.

use super::{attach_or_report, child_key};
use crate::messages;
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::{ParseScope, Reporter};
use relink_core::model::{find_schema_by_full_name, ApplicationGroup, Schema, TransformId};
use relink_core::{DefinitionKind, RefId, Resource, ResourceKind, ResourceTree, SourceRef};
use tracing::debug;

const MAP_SUFFIX: &str = "map";

/// Resolves maps and their schema references
#[derive(Debug, Default, Clone, Copy)]
pub struct TransformParser;

impl ArtifactParser for TransformParser {
    fn kind(&self) -> ParserKind {
        ParserKind::Transform
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (tree, group, mut reporter) = scope.split(self.name());
        let Some(ApplicationGroup {
            schemas,
            transforms,
            ..
        }) = group
        else {
            debug!("no application group, skipping maps");
            return;
        };

        for (index, transform) in transforms.iter_mut().enumerate() {
            let Some(definition) = tree.find_resource_definition(
                &transform.resource_definition_key,
                DefinitionKind::Transform,
            ) else {
                reporter.error(messages::definition_not_found(
                    DefinitionKind::Transform,
                    &transform.resource_definition_key,
                    &transform.name,
                ));
                continue;
            };

            let definition_id = definition.ref_id();
            let resource = Resource::new(
                child_key(&definition.key, MAP_SUFFIX),
                &transform.name,
                ResourceKind::Map,
            )
            .with_description(&transform.full_name)
            .with_source(SourceRef::Transform {
                transform: TransformId(index),
            });

            let Some(map_ref) =
                attach_or_report(tree, &mut reporter, definition_id, resource, &transform.name)
            else {
                continue;
            };
            transform.resource = Some(map_ref);

            let references = transform
                .source_schemas
                .iter()
                .map(|name| ("source", name))
                .chain(transform.target_schemas.iter().map(|name| ("target", name)));

            for (role, schema_name) in references {
                link_schema(
                    tree,
                    &mut reporter,
                    schemas,
                    map_ref,
                    role,
                    schema_name,
                    &transform.name,
                );
            }
        }
    }
}

fn link_schema(
    tree: &mut ResourceTree,
    reporter: &mut Reporter<'_>,
    schemas: &[Schema],
    map_ref: RefId,
    role: &str,
    schema_name: &str,
    map_name: &str,
) {
    let Some((_, schema)) = find_schema_by_full_name(schemas, schema_name) else {
        reporter.error(messages::schema_reference_not_found(role, schema_name, map_name));
        return;
    };

    let Some(schema_ref) = schema.resource else {
        reporter.error(messages::schema_reference_unresolved(role, schema_name, map_name));
        return;
    };

    if let Err(err) = tree.add_relationship(map_ref, schema_ref) {
        reporter.error(messages::attach_failed(schema_name, map_name, &err));
    }
}
