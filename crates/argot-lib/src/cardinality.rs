//! Minimum/maximum repetition contract for a parser.

use std::fmt;

use argot_core::ParseError;
use serde::Serialize;

/// How many times a parser may (and must) match.
///
/// `maximum: None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Cardinality {
    pub minimum: usize,
    pub maximum: Option<usize>,
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::optional()
    }
}

impl Cardinality {
    /// `0..=1`
    pub const fn optional() -> Self {
        Self {
            minimum: 0,
            maximum: Some(1),
        }
    }

    /// Exactly `n` times.
    pub const fn required(n: usize) -> Self {
        Self {
            minimum: n,
            maximum: Some(n),
        }
    }

    /// `0..`
    pub const fn unbounded() -> Self {
        Self {
            minimum: 0,
            maximum: None,
        }
    }

    /// `minimum..`
    pub const fn at_least(minimum: usize) -> Self {
        Self {
            minimum,
            maximum: None,
        }
    }

    /// `minimum..=maximum`
    pub const fn bounded(minimum: usize, maximum: usize) -> Self {
        Self {
            minimum,
            maximum: Some(maximum),
        }
    }

    pub fn is_optional(&self) -> bool {
        self.minimum == 0
    }

    pub fn is_required(&self) -> bool {
        self.minimum > 0
    }

    pub fn is_bounded(&self) -> bool {
        self.maximum.is_some()
    }

    pub fn is_unbounded(&self) -> bool {
        self.maximum.is_none()
    }

    /// Has a parser that matched `count` times met this contract?
    pub fn is_satisfied_by(&self, count: usize) -> bool {
        count >= self.minimum && self.maximum.is_none_or(|max| count <= max)
    }

    /// May a parser that matched `count` times match again?
    pub fn accepts_more(&self, count: usize) -> bool {
        self.maximum.is_none_or(|max| count < max)
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        match self.maximum {
            Some(0) => Err(ParseError::logic("Cardinality maximum cannot be zero")),
            Some(max) if self.minimum > max => Err(ParseError::logic(format!(
                "Cardinality minimum {} exceeds maximum {max}",
                self.minimum
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.maximum {
            Some(max) => write!(f, "{}..={max}", self.minimum),
            None => write!(f, "{}..", self.minimum),
        }
    }
}
