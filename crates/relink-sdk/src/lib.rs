//! Relink SDK - Host surface for the relink artifact resolver
//!
//! This crate ties the lower layers together for a host program:
//! - [`RunnerBuilder`] / [`Runner`]: collaborator checks and plan execution
//! - [`RunnerConfig`]: file and environment configuration
//! - [`ModelSnapshot`]: serialized run input, ingested into a model
//! - [`RunReport`]: counts and records of one run, persisted as JSON
//! - [`telemetry::init_tracing`]: subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use relink_sdk::{Runner, RunnerConfig};
//!
//! let config = RunnerConfig::load("config/relink.yaml")?;
//! relink_sdk::telemetry::init_tracing(&config.log_filter)?;
//!
//! let mut runner = Runner::from_config(config)?;
//! let report = runner.run()?;
//! println!("{} errors, {} resources", report.error_count, report.resources_created);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod snapshot;
pub mod telemetry;

pub use config::RunnerConfig;
pub use error::{Result, SdkError};
pub use report::RunReport;
pub use runner::{Runner, RunnerBuilder};
pub use snapshot::{ContainerSnapshot, DefinitionSnapshot, ModelSnapshot};

// Re-export the layers a host works with directly
pub use relink_core::{
    DiagnosticLevel, DiagnosticSink, ErrorRecord, MigrationModel, ParseContext,
    RecordingDiagnostics, Severity,
};
pub use relink_parser::{PipelineConfigurationParser, PropertyBagCodec};
pub use relink_resolver::{ParserKind, PassSummary, RunPlan, TracingDiagnostics};
