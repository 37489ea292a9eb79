//! End-to-end resolution of a line in a test file to a test name pattern.

use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::blocks::{BlockRange, TestBlocks};
use crate::cli::Language;
use crate::error::Result;
use crate::parser::{SyntaxNode, TestFileParser};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub line: usize,
    /// Escaped name pattern, or `None` when no named block encloses the line.
    pub name: Option<String>,
    /// Range of the selected block, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockRange>,
}

impl Resolution {
    /// The name as printed: empty when nothing matched.
    pub fn test_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn is_match(&self) -> bool {
        self.name.is_some()
    }
}

pub fn resolve_tree(root: &SyntaxNode, line: usize) -> Resolution {
    let blocks = TestBlocks::collect(&root.children);
    debug!(blocks = blocks.len(), line, "collected blocks");

    let block = blocks.enclosing(line).map(|b| b.range);
    let name = blocks.test_name_at(line);

    Resolution { line, name, block }
}

pub fn resolve_source(source: &str, language: Language, line: usize) -> Result<Resolution> {
    let root = TestFileParser::new(language).parse_source(source)?;
    Ok(resolve_tree(&root, line))
}

/// Parses `path` (grammar from `language` or the extension) and resolves
/// `line` in it.
pub fn resolve_file(path: &Path, line: usize, language: Option<Language>) -> Result<Resolution> {
    let parser = TestFileParser::for_path(path, language)?;
    let root = parser.parse_file(path)?;
    let resolution = resolve_tree(&root, line);

    info!(
        path = %path.display(),
        line,
        name = resolution.test_name(),
        "resolved test name"
    );
    Ok(resolution)
}
