//! Blocks: every suite and test in a file with its line range and composed
//! full name, and the lookup of the innermost block around a line.

mod collector;
mod selector;

pub use collector::{collect_blocks, find_full_test_name, Block, BlockRange};
pub use selector::TestBlocks;
