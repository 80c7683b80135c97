//! # Teditor Syntax
//!
//! Line-at-a-time syntax classification using tree-sitter.
//!
//! ## Model
//!
//! Each visible line is parsed on its own and split into fragments tagged
//! with a [`TokenClass`]. Concatenating the fragments of a line always
//! reproduces the line exactly, so the renderer can draw them left to right
//! without any bookkeeping.
//!
//! Parsing a single line loses context that spans lines (block comments,
//! multi-line strings). Tree-sitter's error recovery still yields a usable
//! tree for partial code, which is good enough for coloring.
//!
//! ## Classification
//!
//! - string, comment and heading nodes are taken whole
//! - anonymous alphabetic leaves (`fn`, `def`, `return`, ...), builtin type
//!   names and markup names (HTML tags, CSS properties) are keywords
//! - callee names, definition names, macro names, shell command words and a
//!   short per-language list of built-ins are functions
//! - everything else is [`TokenClass::Default`]

mod languages;

use std::iter::Peekable;
use std::ops::Range;

use tree_sitter::{Node, Parser};

pub use languages::SUPPORTED_LANGUAGES;

/// Errors that can occur when setting up a highlighter.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Parser error")]
    ParseError,
}

/// Coloring class of a line fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    String,
    Comment,
    /// Function names and built-ins
    Function,
    Default,
}

/// Classifies lines of one language.
pub struct Highlighter {
    parser: Parser,
    language: &'static str,
    builtins: &'static [&'static str],
}

impl Highlighter {
    /// Creates a highlighter for a language id such as `"rust"` or `"py"`.
    pub fn new(lang: &str) -> Result<Self, SyntaxError> {
        let (language, grammar) = languages::get_language(lang)?;

        let mut parser = Parser::new();
        parser
            .set_language(&grammar)
            .map_err(|_| SyntaxError::ParseError)?;

        Ok(Self {
            parser,
            language,
            builtins: languages::builtins(language),
        })
    }

    /// Canonical id of the highlighted language.
    pub fn language(&self) -> &'static str {
        self.language
    }

    /// Splits a line into classified fragments.
    ///
    /// A line that fails to parse comes back as a single default fragment.
    pub fn highlight_line<'a>(&mut self, line: &'a str) -> LineTokens<'a> {
        let spans = match self.parser.parse(line, None) {
            Some(tree) => {
                let mut spans = Vec::new();
                self.collect_spans(tree.root_node(), line, &mut spans);
                spans
            }
            None => {
                tracing::warn!(language = self.language, "Failed to parse line");
                Vec::new()
            }
        };
        LineTokens::new(line, spans)
    }

    /// Walks the tree in document order, pushing classified spans.
    ///
    /// Whole-node classes (strings, comments, headings) are not descended
    /// into, so spans never overlap.
    fn collect_spans(&self, node: Node, line: &str, spans: &mut Vec<(Range<usize>, TokenClass)>) {
        if let Some(class) = whole_node_class(node.kind()) {
            spans.push((node.byte_range(), class));
            return;
        }

        if node.child_count() == 0 {
            let class = self.classify_leaf(node, line);
            if class != TokenClass::Default {
                spans.push((node.byte_range(), class));
            }
            return;
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.collect_spans(child, line, spans);
        }
    }

    fn classify_leaf(&self, node: Node, line: &str) -> TokenClass {
        let kind = node.kind();

        if !node.is_named() {
            if !kind.is_empty() && kind.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
                return TokenClass::Keyword;
            }
            return TokenClass::Default;
        }

        match kind {
            "true" | "false" | "null" | "none" => return TokenClass::Keyword,
            // Builtin type names and markup names
            "primitive_type" | "predefined_type" | "void_type" | "tag_name" | "property_name"
            | "at_keyword" => return TokenClass::Keyword,
            "function_name" => return TokenClass::Function,
            _ => {}
        }

        if is_function_name(node) {
            return TokenClass::Function;
        }

        let text = node.utf8_text(line.as_bytes()).unwrap_or_default();
        if self.builtins.contains(&text) {
            return TokenClass::Function;
        }

        TokenClass::Default
    }
}

/// Class of node kinds that are colored as one piece.
fn whole_node_class(kind: &str) -> Option<TokenClass> {
    match kind {
        "string_literal" | "raw_string_literal" | "char_literal" | "character_literal"
        | "string" | "raw_string" | "template_string" | "interpreted_string_literal"
        | "rune_literal" | "verbatim_string_literal" | "interpolated_string_expression"
        | "system_lib_string" | "string_value" | "quoted_attribute_value"
        | "fenced_code_block" | "indented_code_block" => Some(TokenClass::String),
        "line_comment" | "block_comment" | "comment" => Some(TokenClass::Comment),
        "atx_heading" | "setext_heading" => Some(TokenClass::Keyword),
        _ => None,
    }
}

/// True if `node` names a function being defined, called or expanded.
fn is_function_name(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };

    let field = match parent.kind() {
        // A shell command word
        "command_name" => return true,
        "function_item" | "function_signature_item" | "function_definition"
        | "function_declaration" | "method_definition" | "method_declaration"
        | "constructor_declaration" | "local_function_statement" => "name",
        "function_declarator" => "declarator",
        "call_expression" | "call" | "invocation_expression" => "function",
        "method_invocation" => "name",
        "macro_invocation" => "macro",
        // `a.b()`, `a::b()` and friends: the last segment is the callee
        "field_expression" | "selector_expression" => "field",
        "member_expression" => "property",
        "member_access_expression" | "scoped_identifier" | "qualified_identifier" => "name",
        "attribute" => "attribute",
        _ => return false,
    };

    if !is_field(parent, field, node) {
        return false;
    }

    match parent.kind() {
        "field_expression" | "selector_expression" | "member_expression"
        | "member_access_expression" | "scoped_identifier" | "qualified_identifier"
        | "attribute" => parent.parent().is_some_and(|call| {
            matches!(call.kind(), "call_expression" | "call" | "invocation_expression")
                && is_field(call, "function", parent)
        }),
        _ => true,
    }
}

fn is_field(parent: Node, field: &str, child: Node) -> bool {
    parent
        .child_by_field_name(field)
        .is_some_and(|n| n.id() == child.id())
}

/// Lazy iterator over the classified fragments of one line.
///
/// Gaps between classified spans come out as [`TokenClass::Default`].
pub struct LineTokens<'a> {
    line: &'a str,
    pos: usize,
    spans: Peekable<std::vec::IntoIter<(Range<usize>, TokenClass)>>,
}

impl<'a> LineTokens<'a> {
    fn new(line: &'a str, mut spans: Vec<(Range<usize>, TokenClass)>) -> Self {
        // Keep only ordered, non-empty spans on char boundaries
        let mut end = 0;
        spans.retain(|(range, _)| {
            let keep = range.start >= end
                && range.start < range.end
                && range.end <= line.len()
                && line.is_char_boundary(range.start)
                && line.is_char_boundary(range.end);
            if keep {
                end = range.end;
            }
            keep
        });

        Self {
            line,
            pos: 0,
            spans: spans.into_iter().peekable(),
        }
    }

    /// A line with no classified spans.
    pub fn plain(line: &'a str) -> Self {
        Self::new(line, Vec::new())
    }
}

impl<'a> Iterator for LineTokens<'a> {
    type Item = (&'a str, TokenClass);

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.line.len() {
            return None;
        }

        let (end, class) = match self.spans.peek() {
            Some((range, class)) if range.start == self.pos => {
                let item = (range.end, *class);
                self.spans.next();
                item
            }
            Some((range, _)) => (range.start, TokenClass::Default),
            None => (self.line.len(), TokenClass::Default),
        };

        let fragment = &self.line[self.pos..end];
        self.pos = end;
        Some((fragment, class))
    }
}
