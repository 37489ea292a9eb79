use serde::Serialize;

/// Kind of a node in a parsed test file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// The file itself; holds the top-level blocks.
    Root,
    /// A suite (`describe` and friends).
    Describe,
    /// An executable test (`it`/`test` and friends).
    Test,
    /// An assertion (`expect(...)`). Never named.
    Expect,
}

/// 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Immutable tree of suites, tests and assertions in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Raw declared name, interpolation syntax untouched.
    pub name: Option<String>,
    pub start: Position,
    pub end: Position,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, name: Option<String>, start: Position, end: Position) -> Self {
        Self {
            kind,
            name,
            start,
            end,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_describe(&self) -> bool {
        self.kind == NodeKind::Describe
    }

    pub fn is_expect(&self) -> bool {
        self.kind == NodeKind::Expect
    }

    pub fn spans_line(&self, line: usize) -> bool {
        self.start.line <= line && line <= self.end.line
    }

    /// Counts every node below this one, excluding itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
