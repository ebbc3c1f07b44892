//! Argot: composable option and positional-argument parsers.
//!
//! Primitive parsers bind to a destination (a shared [`Binding`] or a
//! callback) and match against an already-classified token stream. Every
//! `parse` call returns a new cursor plus an outcome; nothing is consumed on
//! `NoMatch`, so callers can try parsers in sequence from the same position.
//!
//! # Example
//!
//! ```
//! use argot_lib::{Arg, Binding, DEFAULT_CUSTOMIZATION, Opt, Outcome, Parser, TokenStream};
//!
//! let verbose = Binding::new(false);
//! let input = Binding::new(String::new());
//!
//! let flag = Opt::flag(&verbose).name("-v").name("--verbose");
//! let path = Arg::new(&input, "input");
//!
//! let tokens = TokenStream::from_args(["--verbose", "notes.txt"], &DEFAULT_CUSTOMIZATION);
//! let state = flag.parse(tokens.cursor(), &DEFAULT_CUSTOMIZATION).unwrap();
//! assert_eq!(state.outcome(), Outcome::Matched);
//!
//! let state = path.parse(state.remaining(), &DEFAULT_CUSTOMIZATION).unwrap();
//! assert_eq!(state.outcome(), Outcome::Matched);
//! assert!(verbose.get());
//! assert_eq!(input.get(), "notes.txt");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod arg;
pub mod binding;
pub mod cardinality;
pub mod choices;
pub mod opt;
pub mod parser;
pub mod sink;
pub mod trace;

mod bound;

#[cfg(test)]
mod trace_tests;

pub use argot_core::{
    Colors, Cursor, Customization, DEFAULT_CUSTOMIZATION, ErrorKind, Outcome, ParseError,
    ParseResult, ParseState, ParserCustomization, Token, TokenKind, TokenStream,
};

pub use arg::Arg;
pub use binding::Binding;
pub use cardinality::Cardinality;
pub use choices::Choices;
pub use opt::{Opt, normalize_option_name};
pub use parser::{HelpEntry, Parser};
pub use sink::{Sink, SinkResult};
pub use trace::{NoopTracer, PrintTracer, Tracer};
