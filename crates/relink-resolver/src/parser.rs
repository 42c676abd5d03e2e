//! Artifact parser capability

use crate::parsers::{
    BindingsParser, OrchestrationElementParser, OrchestrationModuleParser, PipelineParser,
    ReceivePortPipelineDataParser, SchemaParser, SendPortPipelineDataParser, TransformParser,
};
use crate::scope::ParseScope;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an artifact parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    Schema,
    Transform,
    Pipeline,
    OrchestrationModule,
    CorrelationType,
    MultipartMessageType,
    PortType,
    ServiceDeclaration,
    Bindings,
    ReceivePortPipelineData,
    SendPortPipelineData,
}

impl ParserKind {
    /// Every parser, in standard run order
    pub const ALL: [ParserKind; 11] = [
        ParserKind::Schema,
        ParserKind::Transform,
        ParserKind::Pipeline,
        ParserKind::OrchestrationModule,
        ParserKind::CorrelationType,
        ParserKind::MultipartMessageType,
        ParserKind::PortType,
        ParserKind::ServiceDeclaration,
        ParserKind::Bindings,
        ParserKind::ReceivePortPipelineData,
        ParserKind::SendPortPipelineData,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParserKind::Schema => "schema",
            ParserKind::Transform => "transform",
            ParserKind::Pipeline => "pipeline",
            ParserKind::OrchestrationModule => "orchestration_module",
            ParserKind::CorrelationType => "correlation_type",
            ParserKind::MultipartMessageType => "multipart_message_type",
            ParserKind::PortType => "port_type",
            ParserKind::ServiceDeclaration => "service_declaration",
            ParserKind::Bindings => "bindings",
            ParserKind::ReceivePortPipelineData => "receive_port_pipeline_data",
            ParserKind::SendPortPipelineData => "send_port_pipeline_data",
        }
    }

    /// Parsers whose resources this parser resolves against
    pub fn dependencies(&self) -> &'static [ParserKind] {
        match self {
            ParserKind::Transform => &[ParserKind::Schema],
            ParserKind::CorrelationType
            | ParserKind::MultipartMessageType
            | ParserKind::PortType
            | ParserKind::ServiceDeclaration => &[ParserKind::OrchestrationModule],
            _ => &[],
        }
    }

    /// Construct the parser for this kind
    pub fn create(&self) -> Box<dyn ArtifactParser> {
        match self {
            ParserKind::Schema => Box::new(SchemaParser),
            ParserKind::Transform => Box::new(TransformParser),
            ParserKind::Pipeline => Box::new(PipelineParser),
            ParserKind::OrchestrationModule => Box::new(OrchestrationModuleParser),
            ParserKind::CorrelationType => Box::new(OrchestrationElementParser::correlation_types()),
            ParserKind::MultipartMessageType => {
                Box::new(OrchestrationElementParser::multipart_message_types())
            }
            ParserKind::PortType => Box::new(OrchestrationElementParser::port_types()),
            ParserKind::ServiceDeclaration => {
                Box::new(OrchestrationElementParser::service_declarations())
            }
            ParserKind::Bindings => Box::new(BindingsParser),
            ParserKind::ReceivePortPipelineData => Box::new(ReceivePortPipelineDataParser),
            ParserKind::SendPortPipelineData => Box::new(SendPortPipelineDataParser),
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolution pass over the domain objects of a kind
///
/// `parse` never fails: an absent application group is "nothing to do", and
/// every unresolved object is recorded through the scope's reporter while
/// the pass moves on to the next object.
pub trait ArtifactParser {
    fn kind(&self) -> ParserKind;

    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn parse(&self, scope: &mut ParseScope<'_>);
}
