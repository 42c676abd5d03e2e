//! Relink Resolver - Artifact parsers and run plan
//!
//! Each artifact parser makes one pass over the domain objects of its kind,
//! resolves them against the resource tree, attaches resources and links both
//! sides. Failures are recorded in the parse context and never abort a pass.
//! The [`RunPlan`] orders the passes according to their declared dependencies.

pub mod diagnostics;
pub mod error;
pub mod messages;
pub mod parser;
pub mod parsers;
pub mod plan;
pub mod scope;

// Re-export main types
pub use diagnostics::TracingDiagnostics;
pub use error::{ResolveError, Result};
pub use parser::{ArtifactParser, ParserKind};
pub use parsers::{
    BindingsParser, OrchestrationElementParser, OrchestrationModuleParser, PipelineParser,
    ReceivePortPipelineDataParser, SchemaParser, SendPortPipelineDataParser, TransformParser,
};
pub use plan::{PassSummary, RunPlan};
pub use scope::{ParseScope, Reporter};
