//! Pipeline parser
//!
//! Creates one pipeline resource per pipeline, and one component resource per
//! component found while walking the pipeline's stages. Component keys are
//! `<pipeline>:<stage>:<component>`; a stage or component name that repeats
//! under the same parent gets its ordinal appended (`...:Custom:2`).

use super::{attach_or_report, child_key};
use crate::messages;
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::ParseScope;
use relink_core::model::{PipelineDirection, PipelineId};
use relink_core::{DefinitionKind, Resource, ResourceKind, SourceRef};
use std::collections::HashMap;
use tracing::debug;

const PIPELINE_SUFFIX: &str = "pipeline";

/// Resolves pipelines and their components
#[derive(Debug, Default, Clone, Copy)]
pub struct PipelineParser;

impl ArtifactParser for PipelineParser {
    fn kind(&self) -> ParserKind {
        ParserKind::Pipeline
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (tree, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!("no application group, skipping pipelines");
            return;
        };

        for (index, pipeline) in group.pipelines.iter_mut().enumerate() {
            let pipeline_id = PipelineId(index);

            let Some(definition) = tree.find_resource_definition(
                &pipeline.resource_definition_key,
                DefinitionKind::Pipeline,
            ) else {
                reporter.error(messages::definition_not_found(
                    DefinitionKind::Pipeline,
                    &pipeline.resource_definition_key,
                    &pipeline.name,
                ));
                continue;
            };

            let definition_id = definition.ref_id();
            let pipeline_key = child_key(&definition.key, PIPELINE_SUFFIX);
            let kind = match pipeline.direction {
                PipelineDirection::Receive => ResourceKind::ReceivePipeline,
                PipelineDirection::Send => ResourceKind::SendPipeline,
            };

            let resource = Resource::new(pipeline_key.clone(), &pipeline.name, kind)
                .with_description(&pipeline.full_name)
                .with_source(SourceRef::Pipeline {
                    pipeline: pipeline_id,
                });
            let Some(pipeline_ref) =
                attach_or_report(tree, &mut reporter, definition_id, resource, &pipeline.name)
            else {
                continue;
            };
            pipeline.resource = Some(pipeline_ref);

            let Some(document) = pipeline.document.as_mut() else {
                continue;
            };

            let mut stage_names = HashMap::new();
            for (stage_index, stage) in document.stages.iter_mut().enumerate() {
                let stage_key = occurrence_key(&pipeline_key, &stage.name, &mut stage_names);
                let mut component_names = HashMap::new();
                for (component_index, component) in stage.components.iter_mut().enumerate() {
                    let resource = Resource::new(
                        occurrence_key(&stage_key, &component.name, &mut component_names),
                        &component.name,
                        ResourceKind::PipelineComponent,
                    )
                    .with_description(&component.full_name)
                    .with_source(SourceRef::PipelineComponent {
                        pipeline: pipeline_id,
                        stage: stage_index,
                        component: component_index,
                    });

                    if let Some(component_ref) =
                        attach_or_report(tree, &mut reporter, pipeline_ref, resource, &pipeline.name)
                    {
                        component.resource = Some(component_ref);
                    }
                }
            }
        }
    }
}

/// Child key for `name`, suffixed with its ordinal when the name was seen before
fn occurrence_key(parent_key: &str, name: &str, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(name.to_string()).or_insert(0);
    *count += 1;

    let key = child_key(parent_key, name);
    match *count {
        1 => key,
        n => child_key(&key, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrence_key_suffixes_repeats() {
        let mut seen = HashMap::new();
        assert_eq!(occurrence_key("p", "Custom", &mut seen), "p:Custom");
        assert_eq!(occurrence_key("p", "Other", &mut seen), "p:Other");
        assert_eq!(occurrence_key("p", "Custom", &mut seen), "p:Custom:2");
        assert_eq!(occurrence_key("p", "Custom", &mut seen), "p:Custom:3");
    }
}
