//! Parser for a small graph-description language.
//!
//! A grammar file declares nodes, directed edges, and `key = value`
//! property blocks, plus named productions: rewrite rules that pair a
//! pattern graph with a replacement graph for an external
//! graph-transformation engine.
//!
//! ```text
//! start { color = red; };          # a node with properties
//! start -> finish;                 # a directed edge
//! grow (a;) -> (a; a -> b;);       # a production
//! ```
//!
//! [`Lexer`] turns source text into tokens one at a time, tracking line and
//! column for diagnostics. [`Parser`] drives it with one token of lookahead
//! and populates a [`Graph`] and a set of [`Production`]s. The `generator`
//! module is the thin driver: file in, parsed results (and optionally a
//! printed report) out. The first malformed character or token aborts the
//! parse with a single positioned [`Error`].

pub mod error;
pub mod generator;
pub mod graph;
pub mod lexer;
pub mod parser;
pub mod production;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::generator::{generate_from_file, parse_grammar, write_report};
pub use crate::graph::{Graph, Properties, Value};
pub use crate::lexer::{Lexer, Token, TokenKind};
pub use crate::parser::Parser;
pub use crate::production::Production;
