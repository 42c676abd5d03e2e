//! Bindings parser
//!
//! Creates the bindings resource for each binding file, then one resource per
//! receive port, receive location and send port found in its binding info.

use super::{attach_or_report, child_key};
use crate::messages;
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::ParseScope;
use relink_core::model::BindingFileId;
use relink_core::{DefinitionKind, Resource, ResourceKind, SourceRef};
use tracing::debug;

/// Resolves binding files and the ports they declare
#[derive(Debug, Default, Clone, Copy)]
pub struct BindingsParser;

impl ArtifactParser for BindingsParser {
    fn kind(&self) -> ParserKind {
        ParserKind::Bindings
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (tree, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!("no application group, skipping bindings");
            return;
        };

        for (index, binding_file) in group.binding_files.iter_mut().enumerate() {
            let file_id = BindingFileId(index);

            let Some(definition) = tree.find_resource_definition(
                &binding_file.resource_definition_key,
                DefinitionKind::Bindings,
            ) else {
                reporter.error(messages::definition_not_found(
                    DefinitionKind::Bindings,
                    &binding_file.resource_definition_key,
                    &binding_file.name,
                ));
                continue;
            };

            let definition_id = definition.ref_id();
            let bindings_key = child_key(&definition.key, ResourceKind::Bindings);
            let resource = Resource::new(bindings_key.clone(), &binding_file.name, ResourceKind::Bindings)
                .with_source(SourceRef::BindingFile {
                    binding_file: file_id,
                });
            let Some(bindings_ref) = attach_or_report(
                tree,
                &mut reporter,
                definition_id,
                resource,
                &binding_file.name,
            ) else {
                continue;
            };
            binding_file.resource = Some(bindings_ref);

            let Some(info) = binding_file.binding_info.as_mut() else {
                debug!(binding_file = %binding_file.name, "no binding info, no ports to attach");
                continue;
            };

            let receive_prefix = child_key(&bindings_key, ResourceKind::ReceivePort);
            for (port_index, port) in info.receive_ports.iter_mut().enumerate() {
                let port_key = child_key(&receive_prefix, &port.name);
                let resource = Resource::new(port_key.clone(), &port.name, ResourceKind::ReceivePort)
                    .with_source(SourceRef::ReceivePort {
                        binding_file: file_id,
                        port: port_index,
                    });
                let Some(port_ref) =
                    attach_or_report(tree, &mut reporter, bindings_ref, resource, &binding_file.name)
                else {
                    continue;
                };
                port.resource = Some(port_ref);

                for (location_index, location) in port.receive_locations.iter_mut().enumerate() {
                    let resource = Resource::new(
                        child_key(&port_key, &location.name),
                        &location.name,
                        ResourceKind::ReceiveLocation,
                    )
                    .with_description(&location.address)
                    .with_source(SourceRef::ReceiveLocation {
                        binding_file: file_id,
                        port: port_index,
                        location: location_index,
                    });
                    if let Some(location_ref) =
                        attach_or_report(tree, &mut reporter, port_ref, resource, &binding_file.name)
                    {
                        location.resource = Some(location_ref);
                    }
                }
            }

            let send_prefix = child_key(&bindings_key, ResourceKind::SendPort);
            for (port_index, port) in info.send_ports.iter_mut().enumerate() {
                let resource = Resource::new(
                    child_key(&send_prefix, &port.name),
                    &port.name,
                    ResourceKind::SendPort,
                )
                .with_source(SourceRef::SendPort {
                    binding_file: file_id,
                    port: port_index,
                });
                if let Some(port_ref) =
                    attach_or_report(tree, &mut reporter, bindings_ref, resource, &binding_file.name)
                {
                    port.resource = Some(port_ref);
                }
            }
        }
    }
}
