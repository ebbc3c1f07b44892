//! Configuration shared by every parser that binds to a sink.

use argot_core::ParseError;

use crate::cardinality::Cardinality;
use crate::choices::Choices;
use crate::sink::{Sink, SinkResult};

#[derive(Clone, Debug)]
pub(crate) struct Bound {
    pub(crate) sink: Sink,
    pub(crate) hint: String,
    pub(crate) description: String,
    pub(crate) choices: Option<Choices>,
    pub(crate) cardinality: Cardinality,
}

impl Bound {
    pub(crate) fn new(sink: Sink, hint: impl Into<String>) -> Self {
        let cardinality = sink.natural_cardinality();
        Self {
            sink,
            hint: hint.into(),
            description: String::new(),
            choices: None,
            cardinality,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ParseError> {
        self.cardinality.validate()?;
        if let Some(choices) = &self.choices {
            choices.validate()?;
        }
        Ok(())
    }

    /// Check the permitted values, then hand `raw` to the value sink.
    pub(crate) fn accept_value(&self, raw: &str) -> SinkResult {
        if let Some(choices) = &self.choices {
            choices.contains_value(raw)?;
        }
        self.sink.set_value(raw)
    }
}

/// Builder methods every bound parser exposes, forwarding to its `Bound`.
macro_rules! bound_builders {
    ($ty:ty) => {
        impl $ty {
            /// Placeholder name shown in usage and help (`<hint>`).
            pub fn hint(mut self, hint: impl Into<String>) -> Self {
                self.bound.hint = hint.into();
                self
            }

            /// Description shown next to the parser in help output.
            pub fn help(mut self, description: impl Into<String>) -> Self {
                self.bound.description = description.into();
                self
            }

            /// Restrict accepted values to an ordered set of strings.
            pub fn choices<I, S>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.bound.choices = Some($crate::choices::Choices::values(values));
                self
            }

            /// Restrict accepted values with a predicate over the raw text.
            pub fn choices_fn<F>(mut self, accepts: F) -> Self
            where
                F: Fn(&str) -> bool + 'static,
            {
                self.bound.choices = Some($crate::choices::Choices::predicate(accepts));
                self
            }

            /// `0..=1`
            pub fn optional(mut self) -> Self {
                self.bound.cardinality = $crate::cardinality::Cardinality::optional();
                self
            }

            /// Exactly `n` times.
            pub fn required(mut self, n: usize) -> Self {
                self.bound.cardinality = $crate::cardinality::Cardinality::required(n);
                self
            }

            pub fn with_cardinality(mut self, cardinality: $crate::cardinality::Cardinality) -> Self {
                self.bound.cardinality = cardinality;
                self
            }

            pub fn hint_text(&self) -> &str {
                &self.bound.hint
            }

            pub fn description(&self) -> &str {
                &self.bound.description
            }

            pub fn sink(&self) -> &$crate::sink::Sink {
                &self.bound.sink
            }
        }
    };
}

pub(crate) use bound_builders;
