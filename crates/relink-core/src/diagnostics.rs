//! Diagnostic sink contract
//!
//! Parsers report soft problems (warnings that do not count as errors) and
//! mirror hard errors to a sink. The sink only has to keep the two levels
//! apart and preserve the message text.

use std::sync::Mutex;

/// Level of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

/// Receiver of leveled diagnostic messages
pub trait DiagnosticSink {
    fn log(&self, level: DiagnosticLevel, message: &str);

    fn warning(&self, message: &str) {
        self.log(DiagnosticLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(DiagnosticLevel::Error, message);
    }
}

/// Sink that keeps every message in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<(DiagnosticLevel, String)>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all messages in arrival order
    pub fn entries(&self) -> Vec<(DiagnosticLevel, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages logged at `level`
    pub fn messages(&self, level: DiagnosticLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Warning)
    }

    pub fn errors(&self) -> Vec<String> {
        self.messages(DiagnosticLevel::Error)
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_separates_levels() {
        let sink = RecordingDiagnostics::new();
        sink.warning("binding info missing");
        sink.error("schema missing");
        sink.warning("second warning");

        assert_eq!(sink.warnings(), vec!["binding info missing", "second warning"]);
        assert_eq!(sink.errors(), vec!["schema missing"]);
        assert_eq!(sink.entries().len(), 3);
    }
}
