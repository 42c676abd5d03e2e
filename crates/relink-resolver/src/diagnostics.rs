//! Diagnostic sink backed by `tracing`

use relink_core::{DiagnosticLevel, DiagnosticSink};

/// Forwards diagnostics to the `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        match level {
            DiagnosticLevel::Warning => tracing::warn!(target: "relink::diagnostics", "{}", message),
            DiagnosticLevel::Error => tracing::error!(target: "relink::diagnostics", "{}", message),
        }
    }
}
