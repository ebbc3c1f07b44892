#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model shared by argot parsers.
//!
//! Three layers:
//! - **Tokens**: classified command-line tokens and an immutable cursor over them
//! - **Results**: the outcome/error model every parse operation returns
//! - **Customization**: the prefix conventions that tune option matching

pub mod colors;
pub mod customization;
pub mod result;
pub mod token;

#[cfg(test)]
mod result_tests;

pub use colors::Colors;
pub use customization::{Customization, DEFAULT_CUSTOMIZATION, ParserCustomization};
pub use result::{ErrorKind, Outcome, ParseError, ParseResult, ParseState};
pub use token::{Cursor, Token, TokenKind, TokenStream};
