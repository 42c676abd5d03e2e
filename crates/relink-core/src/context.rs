//! Run-scoped parse context and error channel
//!
//! Data errors found by the artifact parsers are appended here as
//! [`ErrorRecord`]s instead of being returned. A run with records is still a
//! completed run; callers inspect the channel to detect partial failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an [`ErrorRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One structured finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub severity: Severity,

    /// Human-readable message containing the offending key or identifier
    pub message: String,

    /// Name of the parser that recorded the finding
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl ErrorRecord {
    /// Create an error record
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            origin: None,
        }
    }

    /// Create a warning record
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            origin: None,
        }
    }

    /// Tag the record with the parser that produced it
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.origin {
            Some(origin) => write!(f, "[{}] {}: {}", origin, level, self.message),
            None => write!(f, "{}: {}", level, self.message),
        }
    }
}

/// Ordered, append-only list of records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorChannel {
    records: Vec<ErrorRecord>,
}

impl ErrorChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ErrorRecord) {
        self.records.push(record);
    }

    /// All records in the order they were appended
    pub fn records(&self) -> &[ErrorRecord] {
        &self.records
    }

    pub fn errors(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter().filter(|r| r.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.records.iter().filter(|r| r.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append records collected elsewhere, keeping their order
    pub fn extend(&mut self, records: impl IntoIterator<Item = ErrorRecord>) {
        self.records.extend(records);
    }
}

/// State shared by every parser pass of one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseContext {
    /// Error channel
    pub errors: ErrorChannel,
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error on behalf of `origin`
    pub fn add_error(&mut self, origin: &str, message: impl Into<String>) {
        let record = ErrorRecord::error(message).with_origin(origin);
        log::debug!("{}", record);
        self.errors.push(record);
    }

    /// Record a warning on behalf of `origin`
    pub fn add_warning(&mut self, origin: &str, message: impl Into<String>) {
        let record = ErrorRecord::warning(message).with_origin(origin);
        log::debug!("{}", record);
        self.errors.push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_severity() {
        let mut context = ParseContext::new();
        context.add_error("schema", "missing a");
        context.add_warning("schema", "odd b");
        context.add_error("transform", "missing c");

        assert_eq!(context.errors.len(), 3);
        assert_eq!(context.errors.error_count(), 2);
        assert_eq!(context.errors.warning_count(), 1);
        assert!(context.errors.has_errors());
    }

    #[test]
    fn test_records_keep_append_order() {
        let mut channel = ErrorChannel::new();
        channel.push(ErrorRecord::error("first"));
        channel.extend(vec![ErrorRecord::error("second"), ErrorRecord::warning("third")]);

        let messages: Vec<_> = channel.records().iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_display_includes_origin() {
        let record = ErrorRecord::error("Unable to find key 'x'").with_origin("schema");
        assert_eq!(record.to_string(), "[schema] error: Unable to find key 'x'");
        assert_eq!(ErrorRecord::warning("w").to_string(), "warning: w");
    }
}
