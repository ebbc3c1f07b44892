//! Classified tokens and the immutable cursor used to walk them.
//!
//! Classification happens once, when the stream is built. Parsers only ever
//! read it back through a [`Cursor`], which is a `Copy` value: advancing yields
//! a new cursor and leaves the original untouched, so any number of candidate
//! parsers can be tried from the same starting position.

use serde::{Deserialize, Serialize};

use crate::customization::ParserCustomization;
use crate::result::ParseError;

/// How the tokenizer classified a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Begins with an option prefix character (`-x`, `--name`).
    Option,
    /// Anything else.
    Argument,
}

/// One classified unit of the argument list.
///
/// Fields are private so the classification cannot change after the token
/// is produced.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn option(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Option, text)
    }

    pub fn argument(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Argument, text)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is_option(&self) -> bool {
        self.kind == TokenKind::Option
    }

    #[inline]
    pub fn is_argument(&self) -> bool {
        self.kind == TokenKind::Argument
    }
}

/// Owned, immutable sequence of tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Classify raw arguments (program name already stripped).
    ///
    /// An argument of two or more characters whose first character is an
    /// option prefix becomes an option token; everything else, including a
    /// lone prefix character such as `-`, is an argument. Long options
    /// carrying an inline value (`--name=value`) are split into an option
    /// token and an argument token at the first value delimiter.
    pub fn from_args<I, S>(args: I, customize: &dyn ParserCustomization) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = Vec::new();
        for arg in args {
            let arg = arg.into();
            if !is_option_text(&arg, customize) {
                tokens.push(Token::argument(arg));
                continue;
            }

            match split_inline_value(&arg, customize) {
                Some((name, value)) => {
                    tokens.push(Token::option(name));
                    tokens.push(Token::argument(value));
                }
                None => tokens.push(Token::option(arg)),
            }
        }
        Self { tokens }
    }

    /// Cursor positioned at the first token.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<T: IntoIterator<Item = Token>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn is_option_text(arg: &str, customize: &dyn ParserCustomization) -> bool {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(_)) => customize.is_prefix_char(first),
        _ => false,
    }
}

/// `--name=value` -> (`--name`, `value`). Short options are left whole.
fn split_inline_value<'a>(
    arg: &'a str,
    customize: &dyn ParserCustomization,
) -> Option<(&'a str, &'a str)> {
    let mut chars = arg.char_indices();
    chars.next()?;
    let (_, second) = chars.next()?;
    if !customize.is_prefix_char(second) {
        return None;
    }

    let (at, delimiter) = chars.find(|&(_, c)| customize.is_value_delimiter(c))?;
    Some((&arg[..at], &arg[at + delimiter.len_utf8()..]))
}

/// Immutable position into a token slice.
///
/// Advancing past the end is well-defined: the cursor stays empty.
///
/// Two cursors are equal when they point into the same slice at the same
/// position. Token contents are never compared.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tokens, other.tokens) && self.pos == other.pos
    }
}

impl Eq for Cursor<'_> {}

impl<'t> Cursor<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Index of the token this cursor points at.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn has_token(&self) -> bool {
        self.pos < self.tokens.len()
    }

    #[inline]
    pub fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    /// Token at the cursor. Asking an empty cursor is a caller bug.
    pub fn current(&self) -> Result<&'t Token, ParseError> {
        self.peek()
            .ok_or_else(|| ParseError::logic(format!("No token at cursor position {}", self.pos)))
    }

    /// Cursor one position further; an empty cursor stays where it is.
    #[must_use]
    pub fn advance(self) -> Self {
        if self.has_token() {
            Self {
                tokens: self.tokens,
                pos: self.pos + 1,
            }
        } else {
            self
        }
    }

    /// Tokens from the cursor to the end of the stream.
    pub fn remaining(&self) -> &'t [Token] {
        self.tokens.get(self.pos..).unwrap_or(&[])
    }

    /// Number of positions between `earlier` and this cursor.
    pub fn consumed_since(&self, earlier: Cursor<'_>) -> usize {
        self.pos.saturating_sub(earlier.pos)
    }
}
