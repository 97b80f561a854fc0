//! Tokenizer for the hit language.
//!
//! The lexer turns input text into a flat stream of typed tokens, each
//! carrying its source line and column so the parser can attach locations
//! to tree nodes and produce `file:line:col` diagnostics.

use crate::error::{Error, Result};

/// The type of a lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[` opening a section header or legacy closer.
    LeftBracket,
    /// `]` ending a section header.
    RightBracket,
    /// `[]` closing a section.
    EmptyBracket,
    /// `=` between a field name and its value.
    Equals,
    /// An identifier or unquoted value (`[A-Za-z_][A-Za-z0-9_./*?+-]*`
    /// and the wildcard forms used by sorting patterns).
    Ident,
    /// A single- or double-quoted string, quotes included, escapes kept raw.
    String,
    /// A decimal, float, or hex numeric literal.
    Number,
    /// `#` to end of line, `#` included.
    Comment,
    /// A line terminator.
    Newline,
    /// End of input.
    Eof,
}

/// A single lexed token with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The raw text of the token (quotes and `#` included).
    pub text: String,
    /// Line the token starts on (1-based).
    pub line: usize,
    /// Column the token starts at (1-based).
    pub column: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

/// Characters that terminate an unquoted word.
fn is_word_end(c: char) -> bool {
    c.is_whitespace() || c == '#' || c == '[' || c == ']' || c == '='
}

/// Classify an unquoted word as a number or identifier.
///
/// A word that begins with a digit (after an optional sign) but fails the
/// numeric grammar is an unquoted string value, lexed as `Ident`.
fn classify_word(word: &str) -> TokenKind {
    let body = word.strip_prefix(['+', '-']).unwrap_or(word);
    let mut chars = body.chars();
    let leading_digit = match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    };
    if !leading_digit {
        return TokenKind::Ident;
    }

    if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        if !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return TokenKind::Number;
        }
        return TokenKind::Ident;
    }

    // Reject words like "1e5x" that f64 would reject anyway, and words like
    // "nan"/"inf" that it would accept but are not numeric literals here
    // (they never reach this point: no leading digit).
    if body.parse::<f64>().is_ok() {
        TokenKind::Number
    } else {
        TokenKind::Ident
    }
}

/// Tokenize `input`, using `file` to label error locations.
///
/// The returned stream always ends with an `Eof` token.
///
/// # Errors
///
/// Returns a parse error for unterminated quoted strings.
///
/// # Examples
///
/// ```
/// use hit::lexer::{lex, TokenKind};
///
/// let tokens = lex("in.i", "a = 1\n").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::Ident,
///         TokenKind::Equals,
///         TokenKind::Number,
///         TokenKind::Newline,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub fn lex(file: &str, input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    let mut line = 1usize;
    let mut column = 1usize;

    while let Some((start, c)) = chars.next() {
        let (tok_line, tok_column) = (line, column);
        match c {
            ' ' | '\t' | '\r' => {
                column += 1;
            }
            '\n' => {
                tokens.push(Token::new(TokenKind::Newline, "\n", tok_line, tok_column));
                line += 1;
                column = 1;
            }
            '[' => {
                if chars.peek().is_some_and(|&(_, next)| next == ']') {
                    chars.next();
                    tokens.push(Token::new(TokenKind::EmptyBracket, "[]", tok_line, tok_column));
                    column += 2;
                } else {
                    tokens.push(Token::new(TokenKind::LeftBracket, "[", tok_line, tok_column));
                    column += 1;
                }
            }
            ']' => {
                tokens.push(Token::new(TokenKind::RightBracket, "]", tok_line, tok_column));
                column += 1;
            }
            '=' => {
                tokens.push(Token::new(TokenKind::Equals, "=", tok_line, tok_column));
                column += 1;
            }
            '#' => {
                let mut end = input.len();
                column += 1;
                while let Some(&(i, next)) = chars.peek() {
                    if next == '\n' {
                        end = i;
                        break;
                    }
                    chars.next();
                    column += 1;
                }
                let text = input[start..end].trim_end();
                tokens.push(Token::new(TokenKind::Comment, text, tok_line, tok_column));
            }
            '\'' | '"' => {
                let quote = c;
                column += 1;
                let mut end = None;
                while let Some((i, next)) = chars.next() {
                    match next {
                        '\\' => {
                            column += 1;
                            if let Some((_, escaped)) = chars.next() {
                                if escaped == '\n' {
                                    line += 1;
                                    column = 1;
                                } else {
                                    column += 1;
                                }
                            }
                        }
                        '\n' => {
                            line += 1;
                            column = 1;
                        }
                        _ if next == quote => {
                            end = Some(i + next.len_utf8());
                            column += 1;
                            break;
                        }
                        _ => {
                            column += 1;
                        }
                    }
                }
                let end = end.ok_or_else(|| {
                    Error::parse(file, tok_line, tok_column, "unterminated string")
                })?;
                tokens.push(Token::new(
                    TokenKind::String,
                    &input[start..end],
                    tok_line,
                    tok_column,
                ));
            }
            _ => {
                let mut end = input.len();
                column += 1;
                while let Some(&(i, next)) = chars.peek() {
                    if is_word_end(next) {
                        end = i;
                        break;
                    }
                    chars.next();
                    column += 1;
                }
                let word = &input[start..end];
                tokens.push(Token::new(classify_word(word), word, tok_line, tok_column));
            }
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", line, column));
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex("test", input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_field() {
        assert_eq!(
            kinds("a = 1"),
            vec![
                TokenKind::Ident,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_lex_section() {
        assert_eq!(
            kinds("[mesh]\n[]"),
            vec![
                TokenKind::LeftBracket,
                TokenKind::Ident,
                TokenKind::RightBracket,
                TokenKind::Newline,
                TokenKind::EmptyBracket,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_lex_positions() {
        let tokens = lex("test", "a = 1\nbb = 2\n").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[2].line, tokens[2].column), (1, 5));
        assert_eq!((tokens[4].line, tokens[4].column), (2, 1));
        assert_eq!(tokens[4].text, "bb");
    }

    #[test]
    fn test_lex_quoted_strings() {
        let tokens = lex("test", r#"a = "hello world""#).unwrap();
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, r#""hello world""#);

        let tokens = lex("test", r"b = 'single \' escape'").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, r"'single \' escape'");
    }

    #[test]
    fn test_lex_multiline_string() {
        let tokens = lex("test", "a = 'one\ntwo'\nb = 3\n").unwrap();
        assert_eq!(tokens[2].kind, TokenKind::String);
        assert_eq!(tokens[2].text, "'one\ntwo'");
        // b starts on line 3
        let b = tokens.iter().find(|t| t.text == "b").unwrap();
        assert_eq!(b.line, 3);
    }

    #[test]
    fn test_lex_unterminated_string() {
        let err = lex("test", "a = 'never closed\n").unwrap_err();
        assert!(format!("{err}").contains("unterminated string"));
    }

    #[test]
    fn test_lex_comment() {
        let tokens = lex("test", "a = 1 # trailing\n# block\n").unwrap();
        assert_eq!(tokens[3].kind, TokenKind::Comment);
        assert_eq!(tokens[3].text, "# trailing");
        assert_eq!(tokens[5].kind, TokenKind::Comment);
        assert_eq!(tokens[5].text, "# block");
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify_word("42"), TokenKind::Number);
        assert_eq!(classify_word("-42"), TokenKind::Number);
        assert_eq!(classify_word("+3.5"), TokenKind::Number);
        assert_eq!(classify_word("1e-5"), TokenKind::Number);
        assert_eq!(classify_word(".5"), TokenKind::Number);
        assert_eq!(classify_word("0xdeadBEEF"), TokenKind::Number);
    }

    #[test]
    fn test_classify_non_numbers() {
        assert_eq!(classify_word("abc"), TokenKind::Ident);
        assert_eq!(classify_word("a/b/c"), TokenKind::Ident);
        assert_eq!(classify_word("inf"), TokenKind::Ident);
        assert_eq!(classify_word("nan"), TokenKind::Ident);
        // digit-leading words that fail numeric parse fall back to strings
        assert_eq!(classify_word("1e5x"), TokenKind::Ident);
        assert_eq!(classify_word("0x"), TokenKind::Ident);
        assert_eq!(classify_word("2nd"), TokenKind::Ident);
    }

    #[test]
    fn test_lex_empty_input() {
        let tokens = lex("test", "").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}
