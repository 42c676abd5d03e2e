//! Collaborators shared by a parser pass

use relink_core::model::ApplicationGroup;
use relink_core::{DiagnosticSink, MigrationModel, ParseContext, ResourceTree};

/// The model, context and diagnostic sink a pass operates on
pub struct ParseScope<'a> {
    pub model: &'a mut MigrationModel,
    pub context: &'a mut ParseContext,
    pub diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> ParseScope<'a> {
    pub fn new(
        model: &'a mut MigrationModel,
        context: &'a mut ParseContext,
        diagnostics: &'a dyn DiagnosticSink,
    ) -> Self {
        Self {
            model,
            context,
            diagnostics,
        }
    }

    /// Borrow the tree, the application group and a reporter at the same time
    pub fn split(
        &mut self,
        origin: &'static str,
    ) -> (&mut ResourceTree, Option<&mut ApplicationGroup>, Reporter<'_>) {
        let model = &mut *self.model;
        (
            &mut model.resources,
            model.source.as_mut(),
            Reporter {
                origin,
                context: &mut *self.context,
                diagnostics: self.diagnostics,
            },
        )
    }
}

/// Records findings on behalf of one parser
pub struct Reporter<'s> {
    origin: &'static str,
    context: &'s mut ParseContext,
    diagnostics: &'s dyn DiagnosticSink,
}

impl Reporter<'_> {
    /// Append an error to the context and mirror it to the sink
    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.diagnostics.error(&message);
        self.context.add_error(self.origin, message);
    }

    /// Report a soft problem; warnings do not enter the error channel
    pub fn warning(&mut self, message: impl Into<String>) {
        self.diagnostics.warning(&message.into());
    }
}
