//! Resolver error types

use crate::parser::ParserKind;
use thiserror::Error;

/// Resolver error
///
/// Only plan construction can fail. Parser passes report data problems
/// through the parse context instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A parser runs without a parser it depends on running first
    #[error("Parser '{parser}' depends on '{dependency}', which does not run before it")]
    UnsatisfiedDependency {
        parser: ParserKind,
        dependency: ParserKind,
    },

    /// The same parser appears twice in a plan
    #[error("Parser '{0}' appears more than once in the run plan")]
    DuplicateParser(ParserKind),
}

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, ResolveError>;
