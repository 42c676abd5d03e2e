//! Run report

use crate::error::Result;
use relink_core::{ErrorRecord, Severity};
use relink_resolver::{ParserKind, PassSummary};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome of one run
///
/// `records` holds the error channel entries appended during the run.
/// `warnings` holds the warnings sent to the diagnostic sink, which never
/// enter the error channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub parsers_run: Vec<ParserKind>,
    pub error_count: usize,
    pub warning_count: usize,
    pub resources_created: usize,
    pub records: Vec<ErrorRecord>,
    pub warnings: Vec<String>,
}

impl RunReport {
    /// Build a report from the pass summaries, new records and warnings of a run
    pub fn new(passes: &[PassSummary], records: Vec<ErrorRecord>, warnings: Vec<String>) -> Self {
        let error_count = records
            .iter()
            .filter(|record| record.severity == Severity::Error)
            .count();
        let record_warnings = records.len() - error_count;

        Self {
            parsers_run: passes.iter().map(|pass| pass.parser).collect(),
            error_count,
            warning_count: warnings.len() + record_warnings,
            resources_created: passes.iter().map(|pass| pass.resources_created).sum(),
            records,
            warnings,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Error messages in the order they were recorded
    pub fn error_messages(&self) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(|record| record.severity == Severity::Error)
            .map(|record| record.message.as_str())
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        tracing::info!(path = %path.as_ref().display(), "wrote run report");
        Ok(())
    }

    /// Read a report written by [`RunReport::write_json`]
    pub fn read_json(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
