//! Pipeline data parsers
//!
//! Binding files store the per-instance configuration of the pipelines used
//! by ports and receive locations as raw payloads. These parsers decode each
//! payload into a [`PipelineConfiguration`] on the owning object. A payload
//! that fails to decode records one error and leaves the configuration unset;
//! the remaining payloads are still decoded.

use crate::messages::{self, UNKNOWN_APPLICATION_NAME};
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::{ParseScope, Reporter};
use relink_core::model::{BindingFile, BindingInfo};
use relink_core::PipelineConfiguration;
use relink_parser::PipelineConfigurationParser;
use tracing::debug;

const SEND: &str = "send";
const RECEIVE: &str = "receive";

/// Decodes the pipeline payloads of receive ports and their locations
#[derive(Debug, Default, Clone, Copy)]
pub struct ReceivePortPipelineDataParser;

impl ArtifactParser for ReceivePortPipelineDataParser {
    fn kind(&self) -> ParserKind {
        ParserKind::ReceivePortPipelineData
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (_, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!("no application group, skipping receive port pipeline data");
            return;
        };

        for binding_file in group.binding_files.iter_mut() {
            let Some((application, info)) = binding_info(binding_file, &mut reporter) else {
                continue;
            };

            for port in info.receive_ports.iter_mut() {
                let owner = format!("receive port '{}' in application '{}'", port.name, application);
                decode_into(
                    &mut port.send_pipeline_configuration,
                    port.send_pipeline_data.as_deref(),
                    SEND,
                    &owner,
                    &mut reporter,
                );

                for location in port.receive_locations.iter_mut() {
                    let owner = format!(
                        "receive location '{}' of receive port '{}' in application '{}'",
                        location.name, port.name, application
                    );
                    decode_into(
                        &mut location.receive_pipeline_configuration,
                        location.receive_pipeline_data.as_deref(),
                        RECEIVE,
                        &owner,
                        &mut reporter,
                    );
                    decode_into(
                        &mut location.send_pipeline_configuration,
                        location.send_pipeline_data.as_deref(),
                        SEND,
                        &owner,
                        &mut reporter,
                    );
                }
            }
        }
    }
}

/// Decodes the pipeline payloads of send ports
#[derive(Debug, Default, Clone, Copy)]
pub struct SendPortPipelineDataParser;

impl ArtifactParser for SendPortPipelineDataParser {
    fn kind(&self) -> ParserKind {
        ParserKind::SendPortPipelineData
    }

    fn parse(&self, scope: &mut ParseScope<'_>) {
        let (_, group, mut reporter) = scope.split(self.name());
        let Some(group) = group else {
            debug!("no application group, skipping send port pipeline data");
            return;
        };

        for binding_file in group.binding_files.iter_mut() {
            let Some((application, info)) = binding_info(binding_file, &mut reporter) else {
                continue;
            };

            for port in info.send_ports.iter_mut() {
                let owner = format!("send port '{}' in application '{}'", port.name, application);
                decode_into(
                    &mut port.send_pipeline_configuration,
                    port.send_pipeline_data.as_deref(),
                    SEND,
                    &owner,
                    &mut reporter,
                );
                decode_into(
                    &mut port.receive_pipeline_configuration,
                    port.receive_pipeline_data.as_deref(),
                    RECEIVE,
                    &owner,
                    &mut reporter,
                );
            }
        }
    }
}

/// Assign the owning application name and hand out the binding info
///
/// A file without binding info gets the placeholder application name and a
/// warning; it is skipped without recording an error.
fn binding_info<'f>(
    binding_file: &'f mut BindingFile,
    reporter: &mut Reporter<'_>,
) -> Option<(String, &'f mut BindingInfo)> {
    let Some(info) = binding_file.binding_info.as_mut() else {
        binding_file.application_name = Some(UNKNOWN_APPLICATION_NAME.to_string());
        reporter.warning(messages::binding_info_missing(
            &binding_file.name,
            UNKNOWN_APPLICATION_NAME,
        ));
        return None;
    };

    let application = if info.application_name.is_empty() {
        UNKNOWN_APPLICATION_NAME.to_string()
    } else {
        info.application_name.clone()
    };
    binding_file.application_name = Some(application.clone());

    Some((application, info))
}

fn decode_into(
    target: &mut Option<PipelineConfiguration>,
    payload: Option<&str>,
    side: &str,
    owner: &str,
    reporter: &mut Reporter<'_>,
) {
    match PipelineConfigurationParser::parse(payload) {
        Ok(configuration) => *target = configuration,
        Err(err) => {
            *target = None;
            reporter.error(messages::pipeline_data_invalid(side, owner, &err));
        }
    }
}
