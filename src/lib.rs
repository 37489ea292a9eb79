//! Jest Name
//!
//! Resolves a `file:line` location inside a Jest-style test file into the
//! full name of the innermost enclosing suite or test, escaped for use as a
//! test runner name filter. Files are parsed with Tree-sitter.

pub mod blocks;
pub mod cli;
pub mod error;
pub mod location;
pub mod logging;
pub mod naming;
pub mod output;
pub mod parser;
pub mod resolve;
mod utils;

pub use blocks::{Block, BlockRange, TestBlocks};
pub use error::{Error, Result};
pub use parser::{NodeKind, Position, SyntaxNode, TestFileParser};
pub use resolve::{resolve_file, resolve_source, resolve_tree, Resolution};
