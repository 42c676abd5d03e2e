//! Ordered run plan
//!
//! A plan is the sequence of parser passes for one run. Construction checks
//! that every parser's declared dependencies run before it, so a plan that
//! exists is always safe to execute.

use crate::error::{ResolveError, Result};
use crate::parser::{ArtifactParser, ParserKind};
use crate::scope::ParseScope;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{info, info_span};

/// What one pass added to the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub parser: ParserKind,

    /// Error records appended by the pass
    pub errors_recorded: usize,

    /// Resources attached by the pass
    pub resources_created: usize,
}

/// Validated sequence of parser passes
pub struct RunPlan {
    parsers: Vec<Box<dyn ArtifactParser>>,
}

impl RunPlan {
    /// Create a plan from parsers in run order
    ///
    /// Fails when a parser appears twice or when a dependency is missing or
    /// scheduled after the parser that needs it.
    pub fn new(parsers: Vec<Box<dyn ArtifactParser>>) -> Result<Self> {
        let mut scheduled = HashSet::new();

        for parser in &parsers {
            let kind = parser.kind();
            for dependency in kind.dependencies() {
                if !scheduled.contains(dependency) {
                    return Err(ResolveError::UnsatisfiedDependency {
                        parser: kind,
                        dependency: *dependency,
                    });
                }
            }
            if !scheduled.insert(kind) {
                return Err(ResolveError::DuplicateParser(kind));
            }
        }

        Ok(Self { parsers })
    }

    /// Create a plan from parser kinds in run order
    pub fn from_kinds(kinds: &[ParserKind]) -> Result<Self> {
        Self::new(kinds.iter().map(|kind| kind.create()).collect())
    }

    /// Every parser in standard order
    pub fn standard() -> Self {
        Self {
            parsers: ParserKind::ALL.iter().map(|kind| kind.create()).collect(),
        }
    }

    /// Remove parsers from this plan and re-validate what is left
    pub fn without(self, skipped: &[ParserKind]) -> Result<Self> {
        let parsers = self
            .parsers
            .into_iter()
            .filter(|parser| !skipped.contains(&parser.kind()))
            .collect();
        Self::new(parsers)
    }

    /// Parser kinds in run order
    pub fn kinds(&self) -> Vec<ParserKind> {
        self.parsers.iter().map(|parser| parser.kind()).collect()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Run every pass in order against one scope
    pub fn execute(&self, scope: &mut ParseScope<'_>) -> Vec<PassSummary> {
        self.parsers
            .iter()
            .map(|parser| {
                let span = info_span!("parse", parser = parser.name());
                let _guard = span.enter();

                let errors_before = scope.context.errors.error_count();
                let resources_before = scope.model.resources.resource_count();

                parser.parse(scope);

                let summary = PassSummary {
                    parser: parser.kind(),
                    errors_recorded: scope.context.errors.error_count() - errors_before,
                    resources_created: scope.model.resources.resource_count() - resources_before,
                };
                info!(
                    errors = summary.errors_recorded,
                    resources = summary.resources_created,
                    "pass complete"
                );
                summary
            })
            .collect()
    }
}

impl Default for RunPlan {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for RunPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunPlan").field("parsers", &self.kinds()).finish()
    }
}
