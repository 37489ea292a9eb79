//! Test file parser.
//!
//! Turns a JavaScript or TypeScript test file into a [`SyntaxNode`] tree of
//! suites, tests and assertions using Tree-sitter. Everything downstream works
//! on that tree only.

mod keywords;
mod node;

pub use keywords::kind_for_callee;
pub use node::{NodeKind, Position, SyntaxNode};

use std::fs;
use std::path::Path;
use tracing::{debug, trace};
use tree_sitter::{Node, Parser, Point};

use crate::cli::{detect_language, Language};
use crate::error::{IoError, ParserError, Result};
use crate::utils::{decode_escape_sequence, unquote_string};
use keywords::EACH_MEMBER;

const INLINE_SOURCE: &str = "<source>";

pub struct TestFileParser {
    language: Language,
}

impl TestFileParser {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Picks the grammar from `language` or, failing that, the file extension.
    pub fn for_path(path: &Path, language: Option<Language>) -> Result<Self> {
        let language = language
            .or_else(|| detect_language(path))
            .ok_or_else(|| ParserError::unsupported_file_type(path))?;
        Ok(Self::new(language))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn parse_file(&self, path: &Path) -> Result<SyntaxNode> {
        let source = fs::read_to_string(path).map_err(|e| IoError::from_read(path, e))?;
        self.parse(&source, path)
    }

    pub fn parse_source(&self, source: &str) -> Result<SyntaxNode> {
        self.parse(source, Path::new(INLINE_SOURCE))
    }

    fn parse(&self, source: &str, path: &Path) -> Result<SyntaxNode> {
        trace!(path = %path.display(), language = self.language.as_str(), "parsing test file");

        let mut parser = Parser::new();
        parser
            .set_language(&grammar(self.language))
            .map_err(|_| ParserError::language_setup_failed(self.language.as_str()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParserError::parse_failed(path))?;
        let root = tree.root_node();

        if let Some(bad) = first_syntax_error(root) {
            let start = start_position(bad.start_position());
            let message = if bad.is_missing() {
                format!("missing `{}`", bad.kind())
            } else {
                "unexpected syntax".to_string()
            };
            return Err(ParserError::syntax_error(start.line, start.column, message).into());
        }

        let source = source.as_bytes();
        let mut children = Vec::new();
        collect_nodes(root, source, &mut children);

        let file = SyntaxNode::new(
            NodeKind::Root,
            None,
            start_position(root.start_position()),
            end_position(root.end_position()),
        )
        .with_children(children);

        debug!(
            path = %path.display(),
            top_level = file.children.len(),
            nodes = file.descendant_count(),
            "parsed test file"
        );
        Ok(file)
    }
}

fn grammar(language: Language) -> tree_sitter::Language {
    match language {
        Language::Javascript => tree_sitter_javascript::LANGUAGE.into(),
        Language::Typescript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

fn start_position(point: Point) -> Position {
    Position::new(point.row + 1, point.column + 1)
}

/// Tree-sitter end columns are exclusive and 0-based, which is the same
/// number as an inclusive 1-based column.
fn end_position(point: Point) -> Position {
    Position::new(point.row + 1, point.column)
}

fn first_syntax_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_syntax_error)
}

/// Appends every suite, test and assertion found below `node`, stopping the
/// descent at each one found (its own subtree becomes its children).
fn collect_nodes(node: Node<'_>, source: &[u8], out: &mut Vec<SyntaxNode>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "call_expression" {
            if let Some(kind) = classify_call(child, source) {
                out.push(build_node(child, kind, source));
                continue;
            }
        }
        collect_nodes(child, source, out);
    }
}

fn build_node(call: Node<'_>, kind: NodeKind, source: &[u8]) -> SyntaxNode {
    let arguments = call.child_by_field_name("arguments");

    let name = match kind {
        NodeKind::Expect | NodeKind::Root => None,
        NodeKind::Describe | NodeKind::Test => arguments
            .and_then(first_argument)
            .and_then(|arg| argument_name(arg, source)),
    };

    let mut node = SyntaxNode::new(
        kind,
        name,
        start_position(call.start_position()),
        end_position(call.end_position()),
    );

    if kind != NodeKind::Expect {
        if let Some(arguments) = arguments {
            collect_nodes(arguments, source, &mut node.children);
        }
    }

    trace!(
        kind = ?node.kind,
        name = node.name.as_deref().unwrap_or(""),
        start = node.start.line,
        end = node.end.line,
        "found block"
    );
    node
}

fn classify_call(call: Node<'_>, source: &[u8]) -> Option<NodeKind> {
    let function = call.child_by_field_name("function")?;
    // `describe.each(table)` only builds the block factory; the block is the
    // call applied to its result.
    if is_each_member(function, source) {
        return None;
    }
    callee_root(function, source).and_then(kind_for_callee)
}

fn callee_root<'a>(node: Node<'a>, source: &'a [u8]) -> Option<&'a str> {
    match node.kind() {
        "identifier" => node.utf8_text(source).ok(),
        "member_expression" => callee_root(node.child_by_field_name("object")?, source),
        "call_expression" => {
            let function = node.child_by_field_name("function")?;
            if is_each_member(function, source) {
                callee_root(function, source)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn is_each_member(node: Node<'_>, source: &[u8]) -> bool {
    node.kind() == "member_expression"
        && node
            .child_by_field_name("property")
            .and_then(|p| p.utf8_text(source).ok())
            == Some(EACH_MEMBER)
}

fn first_argument(arguments: Node<'_>) -> Option<Node<'_>> {
    if arguments.kind() != "arguments" {
        return None;
    }
    let mut cursor = arguments.walk();
    let first = arguments
        .named_children(&mut cursor)
        .find(|arg| arg.kind() != "comment");
    first
}

/// String literals yield their decoded value. Template literals lose their
/// backticks but stay raw so `${...}` survives. Any other expression
/// (`Foo.name`, `Foo.prototype.bar`, a variable) keeps its source text.
fn argument_name(arg: Node<'_>, source: &[u8]) -> Option<String> {
    match arg.kind() {
        "string" => string_value(arg, source),
        "template_string" => arg.utf8_text(source).ok().map(unquote_string),
        _ => arg.utf8_text(source).ok().map(str::to_string),
    }
}

fn string_value(string: Node<'_>, source: &[u8]) -> Option<String> {
    let mut value = String::new();
    let mut cursor = string.walk();
    for part in string.named_children(&mut cursor) {
        let text = part.utf8_text(source).ok()?;
        match part.kind() {
            "escape_sequence" => value.push_str(&decode_escape_sequence(text)),
            _ => value.push_str(text),
        }
    }
    Some(value)
}
