//! The interface every primitive parser implements.

use std::fmt;

use argot_core::{Cursor, ParseError, ParseResult, ParserCustomization};
use serde::Serialize;

use crate::cardinality::Cardinality;
use crate::trace::{NoopTracer, Tracer};

/// One row of help output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HelpEntry {
    pub display_text: String,
    pub description: String,
}

impl HelpEntry {
    pub fn new(display_text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            description: description.into(),
        }
    }
}

/// A primitive parser: static configuration plus a match step.
///
/// Implementations hold no state across `parse` calls beyond their
/// configuration. They are object safe so combinators can store trees of
/// `Box<dyn Parser>`.
pub trait Parser: fmt::Debug {
    /// Single-line usage summary.
    fn usage_text(&self) -> String;

    /// Help rows, in display order.
    fn help_text(&self) -> Vec<HelpEntry>;

    fn cardinality(&self) -> Cardinality;

    /// Configuration-time checks, independent of any input.
    fn validate(&self, customize: &dyn ParserCustomization) -> Result<(), ParseError>;

    /// Attempt one match at `tokens`, reporting each step to `tracer`.
    ///
    /// Validation is re-run on every call. On `NoMatch` the returned cursor
    /// equals `tokens`.
    fn parse_traced<'t>(
        &self,
        tokens: Cursor<'t>,
        customize: &dyn ParserCustomization,
        tracer: &mut dyn Tracer,
    ) -> ParseResult<'t>;

    fn parse<'t>(&self, tokens: Cursor<'t>, customize: &dyn ParserCustomization) -> ParseResult<'t> {
        self.parse_traced(tokens, customize, &mut NoopTracer)
    }

    /// Independent copy with identical configuration.
    fn clone_box(&self) -> Box<dyn Parser>;
}

impl Clone for Box<dyn Parser> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
