//! Runner and its builder
//!
//! The runner owns the collaborators of a run (model, parse context and
//! diagnostic sink) and executes the configured plan against them.

use crate::config::RunnerConfig;
use crate::error::{Result, SdkError};
use crate::report::RunReport;
use crate::snapshot::ModelSnapshot;
use relink_core::{DiagnosticLevel, DiagnosticSink, MigrationModel, ParseContext};
use relink_resolver::{ParseScope, RunPlan, TracingDiagnostics};
use std::sync::{Arc, Mutex};
use tracing::{info, info_span, warn};

/// Builder for [`Runner`]
///
/// # Example
///
/// ```rust,ignore
/// use relink_sdk::{RunnerBuilder, ModelSnapshot};
///
/// let runner = RunnerBuilder::new()
///     .with_model(ModelSnapshot::from_path("model.json")?.into_model()?)
///     .with_context(ParseContext::new())
///     .with_tracing_diagnostics()
///     .build()?;
/// ```
#[derive(Default)]
pub struct RunnerBuilder {
    model: Option<MigrationModel>,
    context: Option<ParseContext>,
    diagnostics: Option<Arc<dyn DiagnosticSink + Send + Sync>>,
    config: RunnerConfig,
}

impl RunnerBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: MigrationModel) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_context(mut self, context: ParseContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticSink + Send + Sync>) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    /// Send diagnostics to the `tracing` subscriber
    pub fn with_tracing_diagnostics(self) -> Self {
        self.with_diagnostics(Arc::new(TracingDiagnostics))
    }

    pub fn with_config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the runner
    ///
    /// Fails when the model, the context or the diagnostic sink is missing,
    /// or when the configured skips leave a plan with unmet dependencies.
    pub fn build(self) -> Result<Runner> {
        let model = self.model.ok_or(SdkError::MissingCollaborator("model"))?;
        let context = self.context.ok_or(SdkError::MissingCollaborator("context"))?;
        let diagnostics = self
            .diagnostics
            .ok_or(SdkError::MissingCollaborator("diagnostics"))?;
        let plan = RunPlan::standard().without(&self.config.skip_parsers)?;

        Ok(Runner {
            model,
            context,
            diagnostics,
            config: self.config,
            plan,
        })
    }
}

/// Executes a run plan against one model
pub struct Runner {
    model: MigrationModel,
    context: ParseContext,
    diagnostics: Arc<dyn DiagnosticSink + Send + Sync>,
    config: RunnerConfig,
    plan: RunPlan,
}

impl Runner {
    /// Build a runner from configuration alone
    ///
    /// Loads the model from `snapshot_path`, starts with an empty context and
    /// sends diagnostics to `tracing`.
    pub fn from_config(config: RunnerConfig) -> Result<Self> {
        let path = config
            .snapshot_path
            .clone()
            .ok_or_else(|| SdkError::ConfigError("no snapshot_path configured".to_string()))?;
        let model = ModelSnapshot::from_path(&path)?.into_model()?;

        RunnerBuilder::new()
            .with_model(model)
            .with_context(ParseContext::new())
            .with_tracing_diagnostics()
            .with_config(config)
            .build()
    }

    /// Run every pass of the plan
    ///
    /// The report covers the records appended during this run only. When
    /// `report_path` is configured the report is written before
    /// `fail_on_errors` is applied.
    pub fn run(&mut self) -> Result<RunReport> {
        let span = info_span!("run", parsers = self.plan.len());
        let _guard = span.enter();

        let first_record = self.context.errors.len();
        let sink = WarningCollector::new(&*self.diagnostics);
        let passes = {
            let mut scope = ParseScope::new(&mut self.model, &mut self.context, &sink);
            self.plan.execute(&mut scope)
        };

        let records = self.context.errors.records()[first_record..].to_vec();
        let report = RunReport::new(&passes, records, sink.into_warnings());
        info!(
            errors = report.error_count,
            warnings = report.warning_count,
            resources = report.resources_created,
            "run complete"
        );

        if let Some(path) = &self.config.report_path {
            report.write_json(path)?;
        }

        if self.config.fail_on_errors && report.has_errors() {
            warn!(errors = report.error_count, "failing run with errors");
            return Err(SdkError::RunFailed {
                error_count: report.error_count,
            });
        }

        Ok(report)
    }

    pub fn model(&self) -> &MigrationModel {
        &self.model
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    /// Give back the model and context after a run
    pub fn into_parts(self) -> (MigrationModel, ParseContext) {
        (self.model, self.context)
    }
}

/// Forwards to the configured sink and keeps the warnings for the report
struct WarningCollector<'a> {
    inner: &'a dyn DiagnosticSink,
    warnings: Mutex<Vec<String>>,
}

impl<'a> WarningCollector<'a> {
    fn new(inner: &'a dyn DiagnosticSink) -> Self {
        Self {
            inner,
            warnings: Mutex::new(Vec::new()),
        }
    }

    fn into_warnings(self) -> Vec<String> {
        self.warnings.into_inner().unwrap_or_default()
    }
}

impl DiagnosticSink for WarningCollector<'_> {
    fn log(&self, level: DiagnosticLevel, message: &str) {
        if level == DiagnosticLevel::Warning {
            if let Ok(mut warnings) = self.warnings.lock() {
                warnings.push(message.to_string());
            }
        }
        self.inner.log(level, message);
    }
}
