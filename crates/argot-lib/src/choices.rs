//! Permitted-value sets.

use std::fmt;
use std::rc::Rc;

use argot_core::ParseError;
use indexmap::IndexSet;

/// Restricts which raw argument texts a parser accepts.
///
/// Checked against the raw token text, before conversion.
#[derive(Clone)]
pub enum Choices {
    /// Ordered set of accepted strings.
    Values(IndexSet<String>),
    /// Arbitrary acceptance test.
    Predicate(Rc<dyn Fn(&str) -> bool>),
}

impl Choices {
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Values(values.into_iter().map(Into::into).collect())
    }

    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        Self::Predicate(Rc::new(f))
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        match self {
            Self::Values(values) if values.is_empty() => {
                Err(ParseError::logic("No choices supplied"))
            }
            _ => Ok(()),
        }
    }

    /// Runtime error naming the rejected value when `raw` is not permitted.
    pub fn contains_value(&self, raw: &str) -> Result<(), ParseError> {
        match self {
            Self::Values(values) if values.contains(raw) => Ok(()),
            Self::Values(values) => {
                let allowed: Vec<&str> = values.iter().map(String::as_str).collect();
                Err(ParseError::runtime(format!(
                    "Value '{raw}' not expected. Allowed values are: {}",
                    allowed.join(", ")
                )))
            }
            Self::Predicate(accepts) if accepts(raw) => Ok(()),
            Self::Predicate(_) => Err(ParseError::runtime(format!("Value '{raw}' not expected."))),
        }
    }
}

impl fmt::Debug for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => f.debug_tuple("Values").field(values).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}
