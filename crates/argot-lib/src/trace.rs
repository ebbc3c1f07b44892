//! Tracing hooks for parse steps.
//!
//! # Design: Zero-Cost Default
//!
//! `Parser::parse` runs with `NoopTracer`, whose hooks are empty
//! `#[inline(always)]` functions. Hooks receive the parser itself rather than
//! preformatted text, so a parser's usage string is only built when a tracer
//! actually prints it.

use std::io;

use argot_core::{Colors, ParseError};

use crate::parser::Parser;

/// Instrumentation for primitive parser steps.
///
/// Positions are cursor indices into the token stream.
pub trait Tracer {
    /// The parser's own configuration was rejected before matching.
    fn trace_validation_failed(&mut self, parser: &dyn Parser, error: &ParseError);

    /// The parser did not apply at `at`; nothing was consumed.
    fn trace_no_match(&mut self, parser: &dyn Parser, at: usize);

    /// Tokens `from..to` were consumed and bound.
    fn trace_matched(&mut self, parser: &dyn Parser, from: usize, to: usize);

    /// Tokens `from..to` were consumed and the sink asked to stop all parsing.
    fn trace_short_circuit(&mut self, parser: &dyn Parser, from: usize, to: usize);

    /// The parser applied at `at` but the input was refused.
    fn trace_rejected(&mut self, parser: &dyn Parser, at: usize, error: &ParseError);
}

/// Tracer that gets optimized away.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_validation_failed(&mut self, _parser: &dyn Parser, _error: &ParseError) {}

    #[inline(always)]
    fn trace_no_match(&mut self, _parser: &dyn Parser, _at: usize) {}

    #[inline(always)]
    fn trace_matched(&mut self, _parser: &dyn Parser, _from: usize, _to: usize) {}

    #[inline(always)]
    fn trace_short_circuit(&mut self, _parser: &dyn Parser, _from: usize, _to: usize) {}

    #[inline(always)]
    fn trace_rejected(&mut self, _parser: &dyn Parser, _at: usize, _error: &ParseError) {}
}

/// Tracer that collects one line per event.
///
/// Line shape: position, the parser's usage text, then the event.
#[derive(Debug, Default)]
pub struct PrintTracer {
    lines: Vec<String>,
    colors: Colors,
}

impl PrintTracer {
    pub fn new(colors: Colors) -> Self {
        Self {
            lines: Vec::new(),
            colors,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All collected lines, newline separated.
    pub fn dump(&self) -> String {
        self.lines.join("\n")
    }

    /// Write all trace lines, one per line.
    pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn push(&mut self, at: Option<usize>, parser: &dyn Parser, event: String) {
        let Colors { dim, reset, .. } = self.colors;
        let at = match at {
            Some(at) => format!("{at:>3}"),
            None => "  -".to_string(),
        };
        let usage = parser.usage_text();
        self.lines.push(format!("{dim}{at}{reset}  {usage}  {event}"));
    }
}

impl Tracer for PrintTracer {
    fn trace_validation_failed(&mut self, parser: &dyn Parser, error: &ParseError) {
        let Colors { red, reset, .. } = self.colors;
        self.push(None, parser, format!("{red}invalid{reset}: {error}"));
    }

    fn trace_no_match(&mut self, parser: &dyn Parser, at: usize) {
        let Colors { dim, reset, .. } = self.colors;
        self.push(Some(at), parser, format!("{dim}no match{reset}"));
    }

    fn trace_matched(&mut self, parser: &dyn Parser, from: usize, to: usize) {
        let Colors { green, reset, .. } = self.colors;
        self.push(Some(from), parser, format!("{green}matched{reset} -> {to}"));
    }

    fn trace_short_circuit(&mut self, parser: &dyn Parser, from: usize, to: usize) {
        let Colors { green, reset, .. } = self.colors;
        self.push(Some(from), parser, format!("{green}short-circuit{reset} -> {to}"));
    }

    fn trace_rejected(&mut self, parser: &dyn Parser, at: usize, error: &ParseError) {
        let Colors { red, reset, .. } = self.colors;
        self.push(Some(at), parser, format!("{red}rejected{reset}: {error}"));
    }
}
