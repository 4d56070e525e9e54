use core::fmt;

use crate::error::Error;

/// The closed set of lexical categories.
///
/// `Property` is reserved in the token set but never produced by the lexer;
/// property assignments are recognized structurally by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Semicolon,
    Equals,
    LBrace,
    RBrace,
    Arrow,
    LParen,
    RParen,
    Quote,
    Comma,
    Property,
    Number,
    Ident,
}

/// One lexical unit: a kind plus the literal text it was scanned from.
///
/// Equality and hashing are by `(kind, text)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {:?}", self.text, self.kind)
    }
}

/// Character-at-a-time scanner over one grammar file.
///
/// The lexer owns the source text and a cursor; `current` is the character
/// under the cursor, or `None` once the input is exhausted. Whitespace and
/// `#` line comments never become tokens. After end of input, `next_token`
/// keeps returning the `Eof` token.
pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current: Option<char>,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let current = text.first().copied();
        Self {
            text,
            pos: 0,
            current,
            line: 1,
            column: 1,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current 1-based column number.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Advances the cursor by one character and refreshes `current`.
    ///
    /// A newline advances the line counter, but the column counter keeps
    /// counting rather than resetting to 1. Diagnostic consumers depend on
    /// the exact numbers, so this matches the historical output.
    fn consume(&mut self) {
        if let Some(c) = self.current {
            if c == '\n' || c == '\r' {
                self.line += 1;
            }
            self.column += 1;
        }
        self.pos += 1;
        self.current = self.text.get(self.pos).copied();
    }

    fn punct(&mut self, kind: TokenKind, text: &str) -> Token {
        self.consume();
        Token::new(kind, text)
    }

    /// Returns the next significant token.
    ///
    /// Lexical errors are fatal; the lexer does not resynchronize.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while let Some(c) = self.current {
            match c {
                ' ' | '\t' | '\n' | '\r' => self.consume(),

                // The quote character itself is the token; the span between
                // quotes is assembled by the parser, not here.
                '\'' | '"' => {
                    self.consume();
                    return Ok(Token::new(TokenKind::Quote, "\""));
                }

                ';' => return Ok(self.punct(TokenKind::Semicolon, ";")),
                ',' => return Ok(self.punct(TokenKind::Comma, ",")),
                '{' => return Ok(self.punct(TokenKind::LBrace, "{")),
                '}' => return Ok(self.punct(TokenKind::RBrace, "}")),
                '(' => return Ok(self.punct(TokenKind::LParen, "(")),
                ')' => return Ok(self.punct(TokenKind::RParen, ")")),
                '=' => return Ok(self.punct(TokenKind::Equals, "=")),

                '-' => {
                    self.consume();
                    return match self.current {
                        Some('>') => {
                            self.consume();
                            Ok(Token::new(TokenKind::Arrow, "->"))
                        }
                        Some(ch) => Err(Error::InvalidChar {
                            ch,
                            line: self.line,
                            column: self.column,
                        }),
                        None => Err(Error::UnexpectedEof {
                            line: self.line,
                            column: self.column,
                        }),
                    };
                }

                '#' => {
                    while let Some(c) = self.current {
                        if c == '\n' {
                            break;
                        }
                        self.consume();
                    }
                }

                c if c.is_ascii_digit() => {
                    let mut lexeme = String::new();
                    while let Some(c) = self.current {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        lexeme.push(c);
                        self.consume();
                    }
                    return Ok(Token::new(TokenKind::Number, lexeme));
                }

                c if c.is_alphabetic() => {
                    let mut lexeme = String::new();
                    while let Some(c) = self.current {
                        if !(c.is_alphabetic() || c.is_ascii_digit() || c == '_') {
                            break;
                        }
                        lexeme.push(c);
                        self.consume();
                    }
                    return Ok(Token::new(TokenKind::Ident, lexeme));
                }

                ch => {
                    return Err(Error::InvalidChar {
                        ch,
                        line: self.line,
                        column: self.column,
                    })
                }
            }
        }
        Ok(Token::new(TokenKind::Eof, "<EOF>"))
    }
}
