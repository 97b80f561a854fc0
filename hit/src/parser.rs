//! Recursive-descent parser building hit trees from token streams.
//!
//! The parser accepts both `[name]` and legacy `[./name]` section openers;
//! `[]` and legacy `[../]` close one section. Comments and blank lines
//! become nodes at the position they occupy so an unmodified tree re-renders
//! faithfully.

use crate::error::{Error, Result};
use crate::lexer::{lex, Token, TokenKind};
use crate::tree::{
    parse_int, path_norm, to_bool, Blank, Comment, Field, FieldKind, Location, Node, Section,
};

/// Parse hit input text into a tree, returning the root node.
///
/// `file` labels the input in locations and error messages (use `stdin` for
/// standard input). The root is a section with an empty name owned by the
/// caller.
///
/// # Errors
///
/// Returns a parse error with `file:line:col` context for invalid syntax.
///
/// # Examples
///
/// ```
/// use hit::parse;
///
/// let root = parse("in.i", "[hello]\n  world = 42\n[]\n").unwrap();
/// assert_eq!(root.param::<i64>("hello/world").unwrap(), 42);
/// ```
pub fn parse(file: &str, input: &str) -> Result<Node> {
    let tokens = lex(file, input)?;
    let mut parser = Parser {
        file,
        tokens,
        pos: 0,
    };
    let mut root = Section::with_location("", Location::new(file, 1));
    parser.parse_items(&mut root, true, true)?;
    Ok(Node::Section(root))
}

/// Parse the input, checking for errors without keeping the tree.
///
/// # Errors
///
/// Returns a parse error with `file:line:col` context for invalid syntax.
pub fn check(file: &str, input: &str) -> Result<()> {
    parse(file, input).map(|_| ())
}

struct Parser<'a> {
    file: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> &Token {
        // the token stream always ends with Eof
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn next(&mut self) -> Token {
        let tok = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, tok: &Token, message: impl Into<String>) -> Error {
        Error::parse(self.file, tok.line, tok.column, message)
    }

    fn location(&self, tok: &Token) -> Location {
        Location::new(self.file, tok.line)
    }

    /// Parse items into `section` until its closer (or EOF for the root).
    ///
    /// Returns whether the section was closed with the legacy `[../]` form.
    fn parse_items(
        &mut self,
        section: &mut Section,
        is_root: bool,
        mut at_line_start: bool,
    ) -> Result<bool> {
        loop {
            let tok = self.next();
            match tok.kind {
                TokenKind::Eof => {
                    if is_root {
                        return Ok(false);
                    }
                    return Err(self.err(
                        &tok,
                        format!("unterminated section '{}'", section.name()),
                    ));
                }
                TokenKind::Newline => {
                    if at_line_start {
                        section.add_child(Node::Blank(Blank::with_location(self.location(&tok))));
                    }
                    at_line_start = true;
                }
                TokenKind::Comment => {
                    section.add_child(Node::Comment(Comment::with_location(
                        &tok.text,
                        !at_line_start,
                        self.location(&tok),
                    )));
                    at_line_start = false;
                }
                TokenKind::EmptyBracket => {
                    if is_root {
                        return Err(self.err(&tok, "extra closing '[]' found"));
                    }
                    return Ok(false);
                }
                TokenKind::LeftBracket => {
                    let closed_legacy = self.parse_section_header(section, &tok)?;
                    if let Some(legacy) = closed_legacy {
                        // header was actually a legacy closer
                        if is_root {
                            return Err(self.err(&tok, "extra closing '[../]' found"));
                        }
                        return Ok(legacy);
                    }
                    at_line_start = false;
                }
                TokenKind::Ident => {
                    self.parse_field(section, tok)?;
                    at_line_start = false;
                }
                _ => {
                    return Err(self.err(&tok, format!("unexpected token '{}'", tok.text)));
                }
            }
        }
    }

    /// Parse the remainder of a `[...` construct. Returns `Some(true)` when
    /// it was the legacy `[../]` closer, `None` when a section was opened,
    /// parsed, and attached.
    fn parse_section_header(&mut self, parent: &mut Section, open: &Token) -> Result<Option<bool>> {
        let name_tok = self.next();
        if name_tok.kind != TokenKind::Ident {
            return Err(self.err(&name_tok, "invalid section header: expected a section name"));
        }

        if name_tok.text == "../" || name_tok.text == ".." {
            let close = self.next();
            if close.kind != TokenKind::RightBracket {
                return Err(self.err(&close, "missing ']' in section closer"));
            }
            return Ok(Some(true));
        }

        let legacy = name_tok.text.starts_with("./");
        let name = path_norm(&name_tok.text);
        if name.is_empty() {
            return Err(self.err(&name_tok, "empty section name"));
        }

        let close = self.next();
        if close.kind != TokenKind::RightBracket {
            return Err(self.err(&close, "missing ']' in section header"));
        }

        let mut child = Section::with_location(name, self.location(open));
        child.legacy_markers = legacy;
        let closed_legacy = self.parse_items(&mut child, false, false)?;
        child.legacy_markers = child.legacy_markers || closed_legacy;
        parent.add_child(Node::Section(child));
        Ok(None)
    }

    fn parse_field(&mut self, parent: &mut Section, name_tok: Token) -> Result<()> {
        let equals = self.next();
        if equals.kind != TokenKind::Equals {
            return Err(self.err(
                &equals,
                format!("missing '=' after field name '{}'", name_tok.text),
            ));
        }

        let value = self.next();
        let kind = match value.kind {
            TokenKind::Number => {
                if parse_int(&value.text).is_some() {
                    FieldKind::Int
                } else {
                    FieldKind::Float
                }
            }
            TokenKind::String => FieldKind::String,
            TokenKind::Ident => {
                if to_bool(&value.text).is_some() {
                    FieldKind::Bool
                } else {
                    FieldKind::String
                }
            }
            _ => {
                return Err(self.err(
                    &value,
                    format!("field '{}' is missing a value", name_tok.text),
                ));
            }
        };

        parent.add_child(Node::Field(Field::with_location(
            path_norm(&name_tok.text),
            kind,
            &value.text,
            self.location(&name_tok),
        )));
        Ok(())
    }
}
