//! Orchestration parsers
//!
//! The module parser creates the module resource for each orchestration from
//! the `Module` element of its meta-model. The element parsers then find that
//! module resource again and attach one resource per named child element of
//! their kind (correlation types, multi-part message types, port types and
//! service declarations).

use super::{attach_or_report, child_key};
use crate::messages;
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::ParseScope;
use relink_core::model::{ElementKind, OrchestrationId};
use relink_core::{DefinitionKind, Resource, ResourceKind, SourceRef};
use tracing::debug;

/// Resolves the module resource of each orchestration
#[derive(Debug, Default, Clone, Copy)]
pub struct OrchestrationModuleParser;

impl ArtifactParser for OrchestrationModuleParser {
    fn kind(&self) -> ParserKind {
        ParserKind::OrchestrationModule
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (tree, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!("no application group, skipping orchestration modules");
            return;
        };

        for (index, orchestration) in group.orchestrations.iter_mut().enumerate() {
            let Some(definition) = tree.find_resource_definition(
                &orchestration.resource_definition_key,
                DefinitionKind::Orchestration,
            ) else {
                reporter.error(messages::definition_not_found(
                    DefinitionKind::Orchestration,
                    &orchestration.resource_definition_key,
                    &orchestration.name,
                ));
                continue;
            };
            let definition_id = definition.ref_id();
            let module_key = child_key(&definition.key, ElementKind::Module);

            let Some(model) = orchestration.model.as_mut() else {
                reporter.error(messages::meta_model_missing(&orchestration.name));
                continue;
            };
            let Some(module_id) = model.find_first(&ElementKind::Module) else {
                reporter.error(messages::element_not_found(
                    ElementKind::Module.as_str(),
                    &orchestration.name,
                ));
                continue;
            };

            let resource = Resource::new(module_key, &orchestration.name, ResourceKind::Module)
                .with_description(&orchestration.full_name)
                .with_source(SourceRef::Orchestration {
                    orchestration: OrchestrationId(index),
                });
            let Some(module_ref) = attach_or_report(
                tree,
                &mut reporter,
                definition_id,
                resource,
                &orchestration.name,
            ) else {
                continue;
            };

            if let Some(element) = model.element_mut(module_id) {
                element.resource = Some(module_ref);
            }
            orchestration.resource = Some(module_ref);
        }
    }
}

/// Resolves one kind of named element nested in an orchestration module
#[derive(Debug, Clone)]
pub struct OrchestrationElementParser {
    parser_kind: ParserKind,
    element_kind: ElementKind,
    resource_kind: ResourceKind,
}

impl OrchestrationElementParser {
    fn new(parser_kind: ParserKind, element_kind: ElementKind, resource_kind: ResourceKind) -> Self {
        Self {
            parser_kind,
            element_kind,
            resource_kind,
        }
    }

    pub fn correlation_types() -> Self {
        Self::new(
            ParserKind::CorrelationType,
            ElementKind::CorrelationType,
            ResourceKind::CorrelationType,
        )
    }

    pub fn multipart_message_types() -> Self {
        Self::new(
            ParserKind::MultipartMessageType,
            ElementKind::MultipartMessageType,
            ResourceKind::MultipartMessageType,
        )
    }

    pub fn port_types() -> Self {
        Self::new(
            ParserKind::PortType,
            ElementKind::PortType,
            ResourceKind::PortType,
        )
    }

    pub fn service_declarations() -> Self {
        Self::new(
            ParserKind::ServiceDeclaration,
            ElementKind::ServiceDeclaration,
            ResourceKind::ServiceDeclaration,
        )
    }

    pub fn element_kind(&self) -> &ElementKind {
        &self.element_kind
    }

    pub fn resource_kind(&self) -> ResourceKind {
        self.resource_kind
    }
}

impl ArtifactParser for OrchestrationElementParser {
    fn kind(&self) -> ParserKind {
        self.parser_kind
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (tree, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!(element = %self.element_kind, "no application group, skipping elements");
            return;
        };

        for (index, orchestration) in group.orchestrations.iter_mut().enumerate() {
            let module_key = orchestration.module_resource_key();
            let Some(module) = tree.find_resource(&module_key, ResourceKind::Module) else {
                reporter.error(messages::resource_not_found(
                    ResourceKind::Module,
                    &module_key,
                    &orchestration.name,
                ));
                continue;
            };
            let owner = SourceRef::Orchestration {
                orchestration: OrchestrationId(index),
            };
            if module.source_object() != Some(owner) {
                reporter.error(messages::resource_owned_by_other(
                    ResourceKind::Module,
                    &module_key,
                    &orchestration.name,
                ));
                continue;
            }
            let module_ref = module.ref_id();

            // The module resource only exists when the model had a module element
            let Some(model) = orchestration.model.as_mut() else {
                continue;
            };
            let Some(module_id) = model.find_first(&ElementKind::Module) else {
                continue;
            };

            for element_id in model.children_of_kind(module_id, &self.element_kind) {
                let Some(element) = model.element_mut(element_id) else {
                    continue;
                };
                let Some(name) = element.name().map(str::to_string) else {
                    reporter.error(messages::element_without_name(
                        self.element_kind.as_str(),
                        &orchestration.name,
                    ));
                    continue;
                };

                let resource = Resource::new(child_key(&module_key, &name), &name, self.resource_kind)
                    .with_source(SourceRef::OrchestrationElement {
                        orchestration: OrchestrationId(index),
                        element: element_id,
                    });
                if let Some(element_ref) =
                    attach_or_report(tree, &mut reporter, module_ref, resource, &orchestration.name)
                {
                    element.resource = Some(element_ref);
                }
            }
        }
    }
}
