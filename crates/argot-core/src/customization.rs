//! Prefix conventions that parameterize option matching.

use std::borrow::Cow;

/// Tunable conventions consumed by the tokenizer and option matching.
pub trait ParserCustomization {
    /// Characters that may start an option (`-` by default).
    fn option_prefix(&self) -> &str;

    /// Characters that split an inline value off a long option (`--name=value`).
    fn option_value_delimiters(&self) -> &str;

    fn is_prefix_char(&self, c: char) -> bool {
        self.option_prefix().contains(c)
    }

    fn is_value_delimiter(&self, c: char) -> bool {
        self.option_value_delimiters().contains(c)
    }
}

/// Default customization: `-` prefix, `=` value delimiter.
pub static DEFAULT_CUSTOMIZATION: Customization = Customization::DEFAULT;

/// Concrete customization with builder-style setters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Customization {
    option_prefix: Cow<'static, str>,
    option_value_delimiters: Cow<'static, str>,
}

impl Default for Customization {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Customization {
    pub const DEFAULT: Self = Self {
        option_prefix: Cow::Borrowed("-"),
        option_value_delimiters: Cow::Borrowed("="),
    };

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the set of option prefix characters.
    pub fn with_option_prefix(mut self, prefix: impl Into<Cow<'static, str>>) -> Self {
        self.option_prefix = prefix.into();
        self
    }

    /// Replace the set of inline value delimiters.
    pub fn with_option_value_delimiters(mut self, delimiters: impl Into<Cow<'static, str>>) -> Self {
        self.option_value_delimiters = delimiters.into();
        self
    }
}

impl ParserCustomization for Customization {
    fn option_prefix(&self) -> &str {
        &self.option_prefix
    }

    fn option_value_delimiters(&self) -> &str {
        &self.option_value_delimiters
    }
}

impl<T: ParserCustomization + ?Sized> ParserCustomization for &T {
    fn option_prefix(&self) -> &str {
        (*self).option_prefix()
    }

    fn option_value_delimiters(&self) -> &str {
        (*self).option_value_delimiters()
    }
}
