//! Schema parser
//!
//! Creates one schema resource per schema under its definition, and one
//! message type resource per root element beneath the schema resource.

use super::{attach_or_report, child_key};
use crate::messages;
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::ParseScope;
use relink_core::model::{SchemaId, SchemaKind};
use relink_core::{DefinitionKind, Resource, ResourceKind, SourceRef};
use tracing::debug;

const SCHEMA_SUFFIX: &str = "schema";

/// Resolves schemas and their message types
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaParser;

impl ArtifactParser for SchemaParser {
    fn kind(&self) -> ParserKind {
        ParserKind::Schema
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (tree, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!("no application group, skipping schemas");
            return;
        };

        for (index, schema) in group.schemas.iter_mut().enumerate() {
            let schema_id = SchemaId(index);

            let Some(definition) = tree
                .find_resource_definition(&schema.resource_definition_key, DefinitionKind::Schema)
            else {
                reporter.error(messages::definition_not_found(
                    DefinitionKind::Schema,
                    &schema.resource_definition_key,
                    &schema.name,
                ));
                continue;
            };

            let definition_id = definition.ref_id();
            let schema_key = child_key(&definition.key, SCHEMA_SUFFIX);
            let kind = match schema.schema_kind {
                SchemaKind::Document => ResourceKind::DocumentSchema,
                SchemaKind::Property => ResourceKind::PropertySchema,
            };

            let resource = Resource::new(schema_key.clone(), &schema.name, kind)
                .with_description(&schema.full_name)
                .with_source(SourceRef::Schema { schema: schema_id });
            let Some(schema_ref) =
                attach_or_report(tree, &mut reporter, definition_id, resource, &schema.name)
            else {
                continue;
            };
            schema.resource = Some(schema_ref);

            for (message_index, message) in schema.message_definitions.iter_mut().enumerate() {
                let resource = Resource::new(
                    child_key(&schema_key, &message.root_element_name),
                    &message.root_element_name,
                    ResourceKind::MessageType,
                )
                .with_description(message.message_type())
                .with_source(SourceRef::MessageType {
                    schema: schema_id,
                    message: message_index,
                });

                if let Some(message_ref) =
                    attach_or_report(tree, &mut reporter, schema_ref, resource, &schema.name)
                {
                    message.resource = Some(message_ref);
                }
            }

            debug!(
                schema = %schema.name,
                messages = schema.message_definitions.len(),
                "resolved schema"
            );
        }
    }
}
