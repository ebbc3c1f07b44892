//! Outcome and error model returned by every parse operation.
//!
//! Failures are values, never panics: a parser reports misconfiguration as
//! [`ParseError::Logic`] and bad user input as [`ParseError::Runtime`].
//! A "no match" is not a failure, it tells a composing caller to try the next
//! candidate.

use crate::token::Cursor;

/// Tag carried by a successful parse step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Nothing was consumed; try another parser.
    NoMatch,
    /// Tokens were consumed and bound.
    Matched,
    /// Stop all further parsing and treat the command line as handled
    /// (help flags and the like). Composing callers must halt immediately.
    ShortCircuitAll,
}

/// Successful parse step: the outcome plus where to resume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseState<'t> {
    outcome: Outcome,
    remaining: Cursor<'t>,
}

impl<'t> ParseState<'t> {
    pub fn new(outcome: Outcome, remaining: Cursor<'t>) -> Self {
        Self { outcome, remaining }
    }

    pub fn no_match(remaining: Cursor<'t>) -> Self {
        Self::new(Outcome::NoMatch, remaining)
    }

    pub fn matched(remaining: Cursor<'t>) -> Self {
        Self::new(Outcome::Matched, remaining)
    }

    pub fn short_circuit(remaining: Cursor<'t>) -> Self {
        Self::new(Outcome::ShortCircuitAll, remaining)
    }

    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    pub fn remaining(&self) -> Cursor<'t> {
        self.remaining
    }

    /// True for both `Matched` and `ShortCircuitAll`.
    pub fn is_match(&self) -> bool {
        self.outcome != Outcome::NoMatch
    }

    pub fn is_short_circuit(&self) -> bool {
        self.outcome == Outcome::ShortCircuitAll
    }
}

/// Error category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The command line was defined wrongly; not fixable by the end user.
    Logic,
    /// The end user supplied bad input; show them the message.
    Runtime,
}

/// A parse failure. Displays as its bare message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("{0}")]
    Logic(String),

    #[error("{0}")]
    Runtime(String),
}

impl ParseError {
    pub fn logic(message: impl Into<String>) -> Self {
        Self::Logic(message.into())
    }

    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Logic(_) => ErrorKind::Logic,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Logic(message) | Self::Runtime(message) => message,
        }
    }

    pub fn is_logic(&self) -> bool {
        self.kind() == ErrorKind::Logic
    }

    pub fn is_runtime(&self) -> bool {
        self.kind() == ErrorKind::Runtime
    }
}

/// Result of one parser attempting to match at a cursor.
pub type ParseResult<'t> = std::result::Result<ParseState<'t>, ParseError>;
