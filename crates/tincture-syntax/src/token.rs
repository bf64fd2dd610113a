//! CSS value tokens built on top of the `cssparser` tokenizer.
//!
//! `cssparser` produces a flat token stream tuned for browsers. Lint rules
//! need something closer to the source text: every fragment keeps its raw
//! slice and byte offset so that a value can be re-serialized exactly, and
//! whitespace and comments are kept as nodes of their own.
//!
//! # Example
//!
//! ```
//! use tincture_syntax::token::{parse_value, stringify, TokenKind};
//!
//! let nodes = parse_value("rgb(255 0 0) 10px");
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[0].kind, TokenKind::Function);
//! assert_eq!(nodes[0].value, "rgb");
//! assert_eq!(nodes[2].value, "10px");
//! assert_eq!(stringify(&nodes), "rgb(255 0 0) 10px");
//! ```

use std::borrow::Cow;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token as CssToken};

/// The kind of a value token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Anything that is not a separator: keywords, numbers, dimensions, hashes.
    Word,
    /// A function call or a bare parenthesized group (empty name).
    Function,
    /// A quoted string.
    String,
    /// A `,`, `/` or `:` separator.
    Div,
    /// A run of whitespace.
    Space,
    /// A `/* ... */` comment.
    Comment,
}

/// A fragment of a parsed CSS value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of fragment this is.
    pub kind: TokenKind,
    /// Semantic value: the word itself, the function name, the unescaped
    /// string contents, the separator character or the comment body.
    pub value: String,
    /// Exact source text of the whole fragment.
    pub raw: String,
    /// Byte offset of the fragment in the tokenized input.
    pub source_index: usize,
    /// Children of a function, in source order.
    pub nodes: Vec<Token>,
    /// Whitespace directly after the opening parenthesis of a function.
    pub before: String,
    /// Whitespace directly before the closing parenthesis of a function.
    pub after: String,
    /// `true` when the input ended before the function was closed.
    pub unclosed: bool,
}

impl Token {
    fn leaf(kind: TokenKind, value: impl Into<String>, raw: &str, source_index: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            raw: raw.to_string(),
            source_index,
            nodes: Vec::new(),
            before: String::new(),
            after: String::new(),
            unclosed: false,
        }
    }

    fn function(
        name: &str,
        raw: &str,
        source_index: usize,
        mut nodes: Vec<Token>,
        unclosed: bool,
    ) -> Self {
        let before = match nodes.first() {
            Some(first) if first.kind == TokenKind::Space => nodes.remove(0).raw,
            _ => String::new(),
        };
        let after = match nodes.last() {
            Some(last) if last.kind == TokenKind::Space => {
                nodes.pop().map(|t| t.raw).unwrap_or_default()
            }
            _ => String::new(),
        };

        Self {
            kind: TokenKind::Function,
            value: name.to_string(),
            raw: raw.to_string(),
            source_index,
            nodes,
            before,
            after,
            unclosed,
        }
    }

    /// Create a word token. Mostly useful for tests and synthesized values.
    pub fn word(value: impl Into<String>, source_index: usize) -> Self {
        let value = value.into();
        let raw = value.clone();
        Self::leaf(TokenKind::Word, value, &raw, source_index)
    }

    /// Check if this is a word token.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this is a function token.
    #[inline]
    pub fn is_function(&self) -> bool {
        self.kind == TokenKind::Function
    }

    /// Check if this is the given separator.
    #[inline]
    pub fn is_div(&self, separator: char) -> bool {
        self.kind == TokenKind::Div && self.value.len() == 1 && self.value.starts_with(separator)
    }

    /// Check if this token only carries whitespace or a comment.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Space | TokenKind::Comment)
    }

    /// Byte offset just past the end of this token.
    #[inline]
    pub fn source_end(&self) -> usize {
        self.source_index + self.raw.len()
    }
}

/// Tokenize a CSS value into top-level nodes.
///
/// Never fails: anything the tokenizer does not model degrades to a word
/// carrying its raw text, so `stringify(&parse_value(s)) == s` holds for
/// every input.
pub fn parse_value(input: &str) -> Vec<Token> {
    let mut parser_input = ParserInput::new(input);
    let mut parser = Parser::new(&mut parser_input);
    read_nodes(&mut parser)
}

/// Concatenate the raw text of a list of nodes.
pub fn stringify(nodes: &[Token]) -> String {
    nodes.iter().map(|node| node.raw.as_str()).collect()
}

fn read_nodes(parser: &mut Parser<'_, '_>) -> Vec<Token> {
    let mut nodes: Vec<Token> = Vec::new();

    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let source_index = start.byte_index();

        match token {
            CssToken::WhiteSpace(_) => {
                let raw = parser.slice_from(start);
                nodes.push(Token::leaf(TokenKind::Space, raw, raw, source_index));
            }
            CssToken::Comment(body) => {
                let raw = parser.slice_from(start);
                nodes.push(Token::leaf(TokenKind::Comment, body, raw, source_index));
            }
            CssToken::Comma => push_div(&mut nodes, ",", parser.slice_from(start), source_index),
            CssToken::Colon => push_div(&mut nodes, ":", parser.slice_from(start), source_index),
            CssToken::Delim('/') => {
                push_div(&mut nodes, "/", parser.slice_from(start), source_index)
            }
            CssToken::QuotedString(value) => {
                let raw = parser.slice_from(start);
                nodes.push(Token::leaf(TokenKind::String, value.as_ref(), raw, source_index));
            }
            CssToken::Function(name) => {
                let (children, unclosed) = read_block(parser);
                let raw = parser.slice_from(start);
                nodes.push(Token::function(name.as_ref(), raw, source_index, children, unclosed));
            }
            CssToken::ParenthesisBlock => {
                let (children, unclosed) = read_block(parser);
                let raw = parser.slice_from(start);
                nodes.push(Token::function("", raw, source_index, children, unclosed));
            }
            CssToken::SquareBracketBlock | CssToken::CurlyBracketBlock => {
                // Blocks are opaque to value rules; keep them as raw words.
                let _ = parser.parse_nested_block(|p| {
                    while p.next_including_whitespace_and_comments().is_ok() {}
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                push_word(&mut nodes, parser.slice_from(start), source_index);
            }
            _ => push_word(&mut nodes, parser.slice_from(start), source_index),
        }
    }

    nodes
}

/// Read the children of a parenthesized block, and whether the input ended
/// before its closing `)`.
fn read_block(parser: &mut Parser<'_, '_>) -> (Vec<Token>, bool) {
    let block = parser.parse_nested_block(|p| {
        let children = read_nodes(p);
        Ok::<_, CssParseError<'_, ()>>((children, p.position().byte_index()))
    });
    match block {
        // A consumed `)` moves the outer parser past the end of the block.
        Ok((children, end)) => (children, parser.position().byte_index() == end),
        Err(_) => (Vec::new(), parser.is_exhausted()),
    }
}

fn push_div(nodes: &mut Vec<Token>, separator: &str, raw: &str, source_index: usize) {
    nodes.push(Token::leaf(TokenKind::Div, separator, raw, source_index));
}

/// Append a word fragment, merging it into the previous word when the two
/// are adjacent in the source (`1.5.3`, `!important`, `10px-`).
fn push_word(nodes: &mut Vec<Token>, raw: &str, source_index: usize) {
    if let Some(last) = nodes.last_mut() {
        if last.kind == TokenKind::Word && last.source_end() == source_index {
            last.raw.push_str(raw);
            last.value.push_str(raw);
            return;
        }
    }
    nodes.push(Token::leaf(TokenKind::Word, raw, raw, source_index));
}

/// Input accepted by the value parsers: raw text or an already parsed token.
#[derive(Debug, Clone, Copy)]
pub enum ValueInput<'a> {
    /// Raw CSS value text.
    Str(&'a str),
    /// A single token produced by [`parse_value`].
    Token(&'a Token),
}

impl<'a> ValueInput<'a> {
    /// Resolve the input to exactly one token.
    ///
    /// Text input is tokenized first; it resolves only when it consists of a
    /// single node (no surrounding whitespace).
    pub fn single_node(self) -> Option<Cow<'a, Token>> {
        match self {
            ValueInput::Token(token) => Some(Cow::Borrowed(token)),
            ValueInput::Str(text) => {
                let mut nodes = parse_value(text);
                if nodes.len() == 1 {
                    nodes.pop().map(Cow::Owned)
                } else {
                    None
                }
            }
        }
    }

    /// The raw source text of the input.
    pub fn raw(&self) -> &'a str {
        match self {
            ValueInput::Str(text) => text,
            ValueInput::Token(token) => &token.raw,
        }
    }
}

impl<'a> From<&'a str> for ValueInput<'a> {
    fn from(value: &'a str) -> Self {
        ValueInput::Str(value)
    }
}

impl<'a> From<&'a String> for ValueInput<'a> {
    fn from(value: &'a String) -> Self {
        ValueInput::Str(value.as_str())
    }
}

impl<'a> From<&'a Token> for ValueInput<'a> {
    fn from(value: &'a Token) -> Self {
        ValueInput::Token(value)
    }
}
