//! Record tokenization for fastint
//!
//! Splits a block of record text into fields and line breaks using logos.
//! A field is any run of bytes that is not whitespace; deciding whether it
//! holds an integer is left to the scanner.

use fastint_ast::Span;
use logos::Logos;

/// Bytes that separate fields. A line made only of these is not a record.
#[must_use]
pub const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0c' | b'\r')
}

/// Record tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A whitespace-delimited field
    #[regex(r"[^ \t\x0c\r\n]+")]
    Field,

    /// End of a record
    #[token("\n")]
    Newline,

    /// Blanks between fields (ignored); same class as [`is_blank`]
    #[regex(r"[ \t\x0c\r]+", logos::skip)]
    Whitespace,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken<'input> {
    pub token: Token,
    pub span: Span,
    pub text: &'input str,
}

/// Lexer that produces tokens with spans
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken<'input> {
        match self.lexer.next() {
            Some(result) => {
                let span = self.lexer.span();
                SpannedToken {
                    token: result.unwrap_or(Token::Error),
                    span: Span::new(span.start, span.end),
                    text: &self.input[span],
                }
            }
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.input.len(), self.input.len()),
                text: "",
            },
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken<'input>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Group field tokens into records, one per non-blank line
    pub fn records(&mut self) -> Vec<Vec<SpannedToken<'input>>> {
        let mut records = Vec::new();
        let mut current = Vec::new();
        for token in self.tokenize() {
            match token.token {
                Token::Field | Token::Error => current.push(token),
                Token::Newline | Token::Eof => {
                    if !current.is_empty() {
                        records.push(std::mem::take(&mut current));
                    }
                }
                Token::Whitespace => {}
            }
        }
        records
    }
}
