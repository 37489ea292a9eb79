use tracing::debug;

use super::collector::{collect_blocks, Block};
use crate::naming::to_name_pattern;
use crate::parser::SyntaxNode;

/// Blocks of one file ordered by ascending line span, so the first block
/// containing a line is the innermost one.
#[derive(Debug, Clone, Default)]
pub struct TestBlocks {
    blocks: Vec<Block>,
}

impl TestBlocks {
    pub fn collect(roots: &[SyntaxNode]) -> Self {
        Self::from_blocks(collect_blocks(roots))
    }

    /// Stable sort: equal spans keep collection order.
    pub fn from_blocks(mut blocks: Vec<Block>) -> Self {
        blocks.sort_by_key(|block| block.range.length);
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Smallest block whose range contains `line`.
    pub fn enclosing(&self, line: usize) -> Option<&Block> {
        let found = self.blocks.iter().find(|block| block.range.contains(line));
        debug!(
            line,
            candidates = self.blocks.len(),
            found = found.is_some(),
            "selected enclosing block"
        );
        found
    }

    /// Escaped, normalized name of the innermost block around `line`.
    pub fn test_name_at(&self, line: usize) -> Option<String> {
        let block = self.enclosing(line)?;
        to_name_pattern(block.full_test_name.as_deref())
    }
}
