//! Positional arguments: plain tokens with no option prefix.

use std::str::FromStr;

use argot_core::{Cursor, Outcome, ParseError, ParseResult, ParseState, ParserCustomization};

use crate::binding::Binding;
use crate::bound::{Bound, bound_builders};
use crate::cardinality::Cardinality;
use crate::parser::{HelpEntry, Parser};
use crate::sink::{Sink, SinkResult};
use crate::trace::Tracer;

/// A parser for the next argument token, whatever its text.
///
/// Position alone decides eligibility: an argument-classified token at the
/// cursor matches, an option-classified one never does.
#[derive(Clone, Debug)]
pub struct Arg {
    bound: Bound,
}

impl Arg {
    /// Positional converted into a scalar binding.
    pub fn new<T>(target: &Binding<T>, hint: impl Into<String>) -> Self
    where
        T: FromStr + 'static,
    {
        Self::from_sink(Sink::value(target), hint)
    }

    /// Positional appending every match; unbounded unless told otherwise.
    pub fn collect<T>(target: &Binding<Vec<T>>, hint: impl Into<String>) -> Self
    where
        T: FromStr + 'static,
    {
        Self::from_sink(Sink::values(target), hint)
    }

    /// Positional converted and handed to `f`.
    pub fn with_fn<T, F>(f: F, hint: impl Into<String>) -> Self
    where
        T: FromStr + 'static,
        F: Fn(T) -> SinkResult + 'static,
    {
        Self::from_sink(Sink::value_fn(f), hint)
    }

    pub fn from_sink(sink: Sink, hint: impl Into<String>) -> Self {
        Self {
            bound: Bound::new(sink, hint),
        }
    }
}

bound_builders!(Arg);

impl Parser for Arg {
    /// `<hint>` once per required match, then `[<hint>]` or `[<hint>...]` for
    /// the optional remainder. Empty when there is no hint.
    fn usage_text(&self) -> String {
        let hint = &self.bound.hint;
        if hint.is_empty() {
            return String::new();
        }

        let cardinality = self.bound.cardinality;
        let mut parts = vec![format!("<{hint}>"); cardinality.minimum];
        match cardinality.maximum {
            None => parts.push(format!("[<{hint}>...]")),
            Some(max) if max == cardinality.minimum + 1 => parts.push(format!("[<{hint}>]")),
            Some(max) if max > cardinality.minimum => parts.push(format!("[<{hint}>...]")),
            Some(_) => {}
        }
        parts.join(" ")
    }

    fn help_text(&self) -> Vec<HelpEntry> {
        vec![HelpEntry::new(
            self.usage_text(),
            self.bound.description.clone(),
        )]
    }

    fn cardinality(&self) -> Cardinality {
        self.bound.cardinality
    }

    fn validate(&self, _customize: &dyn ParserCustomization) -> Result<(), ParseError> {
        if self.bound.sink.is_flag() {
            return Err(ParseError::logic("Positional argument cannot bind a flag"));
        }
        self.bound.validate()
    }

    fn parse_traced<'t>(
        &self,
        tokens: Cursor<'t>,
        customize: &dyn ParserCustomization,
        tracer: &mut dyn Tracer,
    ) -> ParseResult<'t> {
        if let Err(error) = self.validate(customize) {
            tracer.trace_validation_failed(self, &error);
            return Err(error);
        }

        let at = tokens.position();
        let Some(token) = tokens.peek().filter(|token| token.is_argument()) else {
            tracer.trace_no_match(self, at);
            return Ok(ParseState::no_match(tokens));
        };

        let outcome = match self.bound.accept_value(token.text()) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracer.trace_rejected(self, at, &error);
                return Err(error);
            }
        };

        let remaining = tokens.advance();
        if outcome == Outcome::ShortCircuitAll {
            tracer.trace_short_circuit(self, at, remaining.position());
            return Ok(ParseState::short_circuit(remaining));
        }
        tracer.trace_matched(self, at, remaining.position());
        Ok(ParseState::matched(remaining))
    }

    fn clone_box(&self) -> Box<dyn Parser> {
        Box::new(self.clone())
    }
}
