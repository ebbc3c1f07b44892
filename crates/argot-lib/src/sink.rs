//! Where a matched value goes.
//!
//! A sink is a closed variant: either it receives a boolean (flag) or it
//! receives the raw text of an argument token (value). Both report an
//! [`Outcome`] so a destination can ask the caller to stop parsing.
//!
//! Value sinks convert with [`FromStr`] before touching the destination, so a
//! failed conversion leaves the destination unchanged and the callback
//! uncalled.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use argot_core::{Outcome, ParseError};

use crate::binding::Binding;
use crate::cardinality::Cardinality;

/// What a sink reports after accepting a value.
pub type SinkResult = Result<Outcome, ParseError>;

type FlagFn = dyn Fn(bool) -> SinkResult;
type ValueFn = dyn Fn(&str) -> SinkResult;

/// A parser's destination, fixed at construction.
///
/// Cloning shares the underlying destination (see [`Binding`]).
#[derive(Clone)]
pub enum Sink {
    Flag(FlagSink),
    Value(ValueSink),
}

#[derive(Clone)]
pub struct FlagSink {
    set: Rc<FlagFn>,
}

#[derive(Clone)]
pub struct ValueSink {
    set: Rc<ValueFn>,
    collects: bool,
}

impl FlagSink {
    pub fn set_flag(&self, value: bool) -> SinkResult {
        (self.set)(value)
    }
}

impl ValueSink {
    pub fn set_value(&self, raw: &str) -> SinkResult {
        (self.set)(raw)
    }

    /// True when repeated matches accumulate (container destinations).
    pub fn collects(&self) -> bool {
        self.collects
    }
}

impl Sink {
    /// Flag writing `true`/`false` into a boolean binding.
    pub fn flag(target: &Binding<bool>) -> Self {
        let target = target.clone();
        Self::flag_fn(move |value| {
            target.set(value);
            Ok(Outcome::Matched)
        })
    }

    /// Flag invoking a callback.
    pub fn flag_fn<F>(f: F) -> Self
    where
        F: Fn(bool) -> SinkResult + 'static,
    {
        Self::Flag(FlagSink { set: Rc::new(f) })
    }

    /// Value converted into a scalar binding.
    pub fn value<T>(target: &Binding<T>) -> Self
    where
        T: FromStr + 'static,
    {
        let target = target.clone();
        Self::value_fn(move |value: T| {
            target.set(value);
            Ok(Outcome::Matched)
        })
    }

    /// Value converted and stored as `Some(..)`.
    pub fn optional<T>(target: &Binding<Option<T>>) -> Self
    where
        T: FromStr + 'static,
    {
        let target = target.clone();
        Self::value_fn(move |value: T| {
            target.set(Some(value));
            Ok(Outcome::Matched)
        })
    }

    /// Value converted and appended; one element per match.
    pub fn values<T>(target: &Binding<Vec<T>>) -> Self
    where
        T: FromStr + 'static,
    {
        let target = target.clone();
        let set = move |raw: &str| -> SinkResult {
            let value = convert::<T>(raw)?;
            target.with_mut(|values| values.push(value));
            Ok(Outcome::Matched)
        };
        Self::Value(ValueSink {
            set: Rc::new(set),
            collects: true,
        })
    }

    /// Value converted, then handed to a callback.
    pub fn value_fn<T, F>(f: F) -> Self
    where
        T: FromStr + 'static,
        F: Fn(T) -> SinkResult + 'static,
    {
        let set = move |raw: &str| -> SinkResult { f(convert::<T>(raw)?) };
        Self::Value(ValueSink {
            set: Rc::new(set),
            collects: false,
        })
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag(_))
    }

    pub fn set_flag(&self, value: bool) -> SinkResult {
        match self {
            Self::Flag(flag) => flag.set_flag(value),
            Self::Value(_) => Err(ParseError::logic("Value sink cannot be set as a flag")),
        }
    }

    pub fn set_value(&self, raw: &str) -> SinkResult {
        match self {
            Self::Value(value) => value.set_value(raw),
            Self::Flag(_) => Err(ParseError::logic("Flag sink cannot take a value")),
        }
    }

    /// Repetition a parser bound to this sink gets unless told otherwise.
    pub fn natural_cardinality(&self) -> Cardinality {
        match self {
            Self::Value(value) if value.collects() => Cardinality::unbounded(),
            _ => Cardinality::optional(),
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(_) => f.write_str("Sink::Flag"),
            Self::Value(value) if value.collects() => f.write_str("Sink::Value(collect)"),
            Self::Value(_) => f.write_str("Sink::Value"),
        }
    }
}

fn convert<T: FromStr>(raw: &str) -> Result<T, ParseError> {
    raw.parse::<T>()
        .map_err(|_| ParseError::runtime(format!("Unable to convert '{raw}' to destination type")))
}
