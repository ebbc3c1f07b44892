//! Named options: flags (`-v`, `--verbose`) and valued options (`--name value`).
//!
//! An option matches the token at the cursor when it is classified as an
//! option and, after prefix normalization, equals one of the registered
//! aliases. A flag consumes that one token. A valued option also consumes the
//! following argument token, so a successful match advances by one or two.

use std::borrow::Cow;
use std::str::FromStr;

use argot_core::{Cursor, Outcome, ParseError, ParseResult, ParseState, ParserCustomization};
use indexmap::IndexSet;

use crate::binding::Binding;
use crate::bound::{Bound, bound_builders};
use crate::cardinality::Cardinality;
use crate::parser::{HelpEntry, Parser};
use crate::sink::{Sink, SinkResult};
use crate::trace::Tracer;

/// A parser for one option with any number of alias spellings.
#[derive(Clone, Debug)]
pub struct Opt {
    names: IndexSet<String>,
    bound: Bound,
}

impl Opt {
    /// Option bound to an arbitrary sink. Flag sinks make a flag option.
    pub fn new(sink: Sink) -> Self {
        Self {
            names: IndexSet::new(),
            bound: Bound::new(sink, ""),
        }
    }

    /// Flag setting `target` to `true` when present.
    pub fn flag(target: &Binding<bool>) -> Self {
        Self::new(Sink::flag(target))
    }

    /// Flag calling `f(true)` when present.
    pub fn flag_fn<F>(f: F) -> Self
    where
        F: Fn(bool) -> SinkResult + 'static,
    {
        Self::new(Sink::flag_fn(f))
    }

    /// Option taking a value converted into `target`.
    pub fn value<T>(target: &Binding<T>, hint: impl Into<String>) -> Self
    where
        T: FromStr + 'static,
    {
        Self::new(Sink::value(target)).hint(hint)
    }

    /// Option taking a value converted and handed to `f`.
    pub fn value_fn<T, F>(f: F, hint: impl Into<String>) -> Self
    where
        T: FromStr + 'static,
        F: Fn(T) -> SinkResult + 'static,
    {
        Self::new(Sink::value_fn(f)).hint(hint)
    }

    /// Append an alias such as `-n` or `--name`. Checked by `validate`, not here.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Append several aliases.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Does `token` spell one of this option's aliases?
    pub fn is_match(&self, token: &str, customize: &dyn ParserCustomization) -> bool {
        let token = normalize_option_name(token, customize);
        self.names
            .iter()
            .any(|name| normalize_option_name(name, customize) == token)
    }

    fn prefix_error(customize: &dyn ParserCustomization) -> ParseError {
        let mut prefix = String::from("-");
        prefix.extend(customize.option_prefix().chars().filter(|&c| c != '-'));
        if prefix.chars().count() == 1 {
            ParseError::logic(format!("Option name must begin with '{prefix}'"))
        } else {
            ParseError::logic(format!("Option name must begin with one of '{prefix}'"))
        }
    }

    /// Consume the argument after a valued option and hand it to the sink.
    fn take_value<'t>(
        &self,
        option: &str,
        after: Cursor<'t>,
    ) -> Result<(Outcome, Cursor<'t>), ParseError> {
        let Some(value) = after.peek().filter(|token| token.is_argument()) else {
            return Err(ParseError::runtime(format!(
                "Expected argument following {option}"
            )));
        };
        let outcome = self.bound.accept_value(value.text())?;
        Ok((outcome, after.advance()))
    }
}

bound_builders!(Opt);

/// Aliases may always be written with `-`, whatever the configured prefix.
/// Normalization maps custom-prefixed tokens onto the `-`/`--` spelling.
fn is_alias_prefix_char(c: char, customize: &dyn ParserCustomization) -> bool {
    c == '-' || customize.is_prefix_char(c)
}

/// Canonical spelling of an option name under `customize`.
///
/// A name of two or more characters starting with a prefix character becomes
/// `--rest` when its second character is also a prefix character, and `-rest`
/// otherwise. Anything else is returned unchanged. Canonical names map to
/// themselves.
pub fn normalize_option_name<'a>(name: &'a str, customize: &dyn ParserCustomization) -> Cow<'a, str> {
    let mut chars = name.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return Cow::Borrowed(name);
    };
    if !customize.is_prefix_char(first) {
        return Cow::Borrowed(name);
    }

    if customize.is_prefix_char(second) {
        let rest = &name[first.len_utf8() + second.len_utf8()..];
        if first == '-' && second == '-' {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("--{rest}"))
        }
    } else {
        let rest = &name[first.len_utf8()..];
        if first == '-' {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("-{rest}"))
        }
    }
}

impl Parser for Opt {
    fn usage_text(&self) -> String {
        self.aliases().collect::<Vec<_>>().join("|")
    }

    fn help_text(&self) -> Vec<HelpEntry> {
        let mut display = self.aliases().collect::<Vec<_>>().join(", ");
        if !self.bound.hint.is_empty() {
            display.push_str(&format!(" <{}>", self.bound.hint));
        }
        vec![HelpEntry::new(display, self.bound.description.clone())]
    }

    fn cardinality(&self) -> Cardinality {
        self.bound.cardinality
    }

    fn validate(&self, customize: &dyn ParserCustomization) -> Result<(), ParseError> {
        if self.names.is_empty() {
            return Err(ParseError::logic("No options supplied to opt"));
        }
        for name in &self.names {
            let Some(first) = name.chars().next() else {
                return Err(ParseError::logic("Option name cannot be empty"));
            };
            if !is_alias_prefix_char(first, customize) {
                return Err(Self::prefix_error(customize));
            }
            if name.chars().all(|c| is_alias_prefix_char(c, customize)) {
                return Err(ParseError::logic(format!(
                    "Option name '{name}' has nothing after its prefix"
                )));
            }
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
        let Some(token) = tokens
            .peek()
            .filter(|token| token.is_option() && self.is_match(token.text(), customize))
        else {
            tracer.trace_no_match(self, at);
            return Ok(ParseState::no_match(tokens));
        };

        let after_option = tokens.advance();
        let consumed = match &self.bound.sink {
            Sink::Flag(flag) => flag.set_flag(true).map(|outcome| (outcome, after_option)),
            Sink::Value(_) => self.take_value(token.text(), after_option),
        };
        let (outcome, remaining) = match consumed {
            Ok(consumed) => consumed,
            Err(error) => {
                tracer.trace_rejected(self, at, &error);
                return Err(error);
            }
        };

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
