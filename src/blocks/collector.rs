use serde::Serialize;
use tracing::trace;

use crate::naming::resolve_interpolation;
use crate::parser::SyntaxNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockRange {
    pub start: usize,
    pub end: usize,
    pub start_col: usize,
    pub end_col: usize,
    /// Number of lines covered, `end - start + 1`.
    pub length: usize,
}

impl BlockRange {
    pub fn of(node: &SyntaxNode) -> Self {
        Self {
            start: node.start.line,
            end: node.end.line,
            start_col: node.start.column,
            end_col: node.end.column,
            length: (node.end.line + 1).saturating_sub(node.start.line),
        }
    }

    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub range: BlockRange,
    /// Interpolation-resolved, space-joined ancestor chain; not yet escaped.
    pub full_test_name: Option<String>,
}

/// Flattens the tree into blocks, children before their parent. Assertions
/// and everything below them are skipped.
pub fn collect_blocks(roots: &[SyntaxNode]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for node in roots {
        collect_node(node, roots, &mut blocks);
    }
    blocks
}

fn collect_node(node: &SyntaxNode, roots: &[SyntaxNode], out: &mut Vec<Block>) {
    if node.is_expect() {
        return;
    }

    for child in &node.children {
        collect_node(child, roots, out);
    }

    let block = Block {
        range: BlockRange::of(node),
        full_test_name: find_full_test_name(node.start.line, roots),
    };
    trace!(
        start = block.range.start,
        end = block.range.end,
        name = block.full_test_name.as_deref().unwrap_or(""),
        "collected block"
    );
    out.push(block);
}

/// Composes the full name of whatever `line` points at, searching from the
/// top-level `children` down.
///
/// A suite matches only on its own declaration line; any other named node
/// matches anywhere within its span. The first match at a depth ends the
/// search there. Otherwise each sibling's subtree is searched in order and
/// the first non-empty hit is prefixed with that sibling's name.
pub fn find_full_test_name(line: usize, children: &[SyntaxNode]) -> Option<String> {
    if let Some(name) = children.iter().find_map(|element| matched_name(element, line)) {
        return Some(resolve_interpolation(name));
    }

    for element in children {
        let Some(inner) = find_full_test_name(line, &element.children) else {
            continue;
        };
        if inner.is_empty() {
            continue;
        }
        return Some(match element.name.as_deref() {
            Some(name) => format!("{} {inner}", resolve_interpolation(name)),
            None => inner,
        });
    }

    None
}

fn matched_name(element: &SyntaxNode, line: usize) -> Option<&str> {
    let name = element.name.as_deref()?;
    let hit = if element.is_describe() {
        line == element.start.line
    } else {
        element.spans_line(line)
    };
    hit.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{NodeKind, Position};

    fn node(kind: NodeKind, name: Option<&str>, start: usize, end: usize) -> SyntaxNode {
        SyntaxNode::new(
            kind,
            name.map(str::to_string),
            Position::new(start, 1),
            Position::new(end, 3),
        )
    }

    fn describe(name: &str, start: usize, end: usize, children: Vec<SyntaxNode>) -> SyntaxNode {
        node(NodeKind::Describe, Some(name), start, end).with_children(children)
    }

    fn it(name: &str, start: usize, end: usize) -> SyntaxNode {
        node(NodeKind::Test, Some(name), start, end)
    }

    fn expect(line: usize) -> SyntaxNode {
        node(NodeKind::Expect, None, line, line)
    }

    #[test]
    fn test_range_length() {
        let range = BlockRange::of(&it("a", 2, 4));
        assert_eq!(range.length, 3);
        assert_eq!((range.start_col, range.end_col), (1, 3));
        assert!(range.contains(2) && range.contains(4));
        assert!(!range.contains(5));
    }

    #[test]
    fn test_single_line_range_length() {
        assert_eq!(BlockRange::of(&it("a", 7, 7)).length, 1);
    }

    #[test]
    fn test_full_name_composes_ancestors() {
        let roots = vec![describe(
            "Outer",
            1,
            10,
            vec![describe("Inner", 2, 9, vec![it("leaf", 3, 5)])],
        )];
        assert_eq!(
            find_full_test_name(4, &roots).as_deref(),
            Some("Outer Inner leaf")
        );
        assert_eq!(find_full_test_name(2, &roots).as_deref(), Some("Outer Inner"));
        assert_eq!(find_full_test_name(1, &roots).as_deref(), Some("Outer"));
    }

    #[test]
    fn test_suite_body_line_has_no_name() {
        let roots = vec![describe("Suite", 1, 10, vec![it("a", 2, 4)])];
        assert_eq!(find_full_test_name(6, &roots), None);
    }

    #[test]
    fn test_full_name_resolves_interpolation() {
        let roots = vec![describe("sum %i", 1, 5, vec![it("adds ${a}", 2, 4)])];
        assert_eq!(
            find_full_test_name(3, &roots).as_deref(),
            Some("sum (.*?) adds (.*?)")
        );
    }

    #[test]
    fn test_first_matching_sibling_wins() {
        let roots = vec![it("first", 1, 5), it("second", 3, 4)];
        assert_eq!(find_full_test_name(3, &roots).as_deref(), Some("first"));
    }

    #[test]
    fn test_unnamed_node_never_matches() {
        let roots = vec![describe("Suite", 1, 6, vec![expect(3), it("named", 2, 5)])];
        assert_eq!(find_full_test_name(3, &roots).as_deref(), Some("Suite named"));
    }

    #[test]
    fn test_unnamed_ancestor_adds_no_prefix() {
        let wrapper = node(NodeKind::Test, None, 1, 10).with_children(vec![it("inner", 2, 3)]);
        assert_eq!(
            find_full_test_name(2, &[wrapper]).as_deref(),
            Some("inner")
        );
    }

    #[test]
    fn test_empty_child_name_falls_through() {
        let roots = vec![
            describe("A", 1, 4, vec![it("", 2, 3)]),
            describe("B", 5, 9, vec![it("b", 2, 3)]),
        ];
        assert_eq!(find_full_test_name(2, &roots).as_deref(), Some("B b"));
    }

    #[test]
    fn test_collect_is_post_order_and_skips_assertions() {
        let roots = vec![describe(
            "Suite",
            1,
            5,
            vec![it("does ${x}", 2, 4).with_children(vec![expect(3)])],
        )];
        let blocks = collect_blocks(&roots);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].range.start, 2);
        assert_eq!(
            blocks[0].full_test_name.as_deref(),
            Some("Suite does (.*?)")
        );
        assert_eq!(blocks[1].range.start, 1);
        assert_eq!(blocks[1].full_test_name.as_deref(), Some("Suite"));
    }

    #[test]
    fn test_assertion_subtree_is_skipped() {
        let roots = vec![it("t", 1, 5).with_children(vec![
            expect(2).with_children(vec![it("nested", 2, 2)])
        ])];
        let blocks = collect_blocks(&roots);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].full_test_name.as_deref(), Some("t"));
    }
}
