use crate::source::SourceReader;
use crate::token::{Span, Token, TokenKind};

/// Scan a whole source string, up to and including the first `Eot`.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan();
        let done = token.is(TokenKind::Eot);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// On-demand tokenizer.
///
/// Each call to [`Scanner::scan`] classifies the next lexeme. Scanning
/// never fails: characters that fit no rule come back as
/// [`TokenKind::Error`] tokens, and once the input is exhausted every
/// further call yields an `Eot` token at the end position.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    reader: SourceReader<'a>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_reader(SourceReader::new(input))
    }

    #[must_use]
    pub const fn from_reader(reader: SourceReader<'a>) -> Self {
        Self { reader }
    }

    pub fn scan(&mut self) -> Token {
        self.skip_separators();

        let start = self.reader.span();
        let kind = match self.reader.current() {
            None => TokenKind::Eot,
            Some(ch) if ch.is_ascii_alphabetic() => self.read_word(start),
            Some(ch) if ch.is_ascii_digit() => self.read_integer(),
            Some(ch) => self.read_symbol(ch),
        };

        let token = Token {
            kind,
            text: self.reader.slice_from(start).to_string(),
            span: start,
        };

        if token.is(TokenKind::Error) {
            tracing::warn!(
                line = start.line,
                column = start.column,
                "unrecognized character {:?}",
                token.text
            );
        } else {
            tracing::trace!(kind = ?token.kind, text = %token.text, "scanned token");
        }

        token
    }

    /// Skip whitespace, `//` line comments and `/* */` block comments.
    fn skip_separators(&mut self) {
        loop {
            match (self.reader.current(), self.reader.peek()) {
                (Some(' ' | '\t' | '\r' | '\n'), _) => self.reader.advance(),
                (Some('/'), Some('/')) => {
                    while !matches!(self.reader.current(), None | Some('\n')) {
                        self.reader.advance();
                    }
                }
                (Some('/'), Some('*')) => self.skip_block_comment(),
                _ => return,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        self.reader.advance(); // skip /
        self.reader.advance(); // skip *
        loop {
            match (self.reader.current(), self.reader.peek()) {
                // unterminated: the comment swallows the rest of the input
                (None, _) => return,
                (Some('*'), Some('/')) => {
                    self.reader.advance();
                    self.reader.advance();
                    return;
                }
                _ => self.reader.advance(),
            }
        }
    }

    fn read_word(&mut self, start: Span) -> TokenKind {
        while self
            .reader
            .current()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        {
            self.reader.advance();
        }
        TokenKind::keyword(self.reader.slice_from(start)).unwrap_or(TokenKind::Identifier)
    }

    fn read_integer(&mut self) -> TokenKind {
        while self.reader.current().is_some_and(|c| c.is_ascii_digit()) {
            self.reader.advance();
        }
        TokenKind::IntegerLiteral
    }

    fn read_symbol(&mut self, ch: char) -> TokenKind {
        self.reader.advance();
        match ch {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParam,
            ')' => TokenKind::RightParam,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => {
                if self.eat('=') {
                    TokenKind::AssignmentOperator
                } else {
                    TokenKind::DeclareVarType
                }
            }
            '=' => {
                if self.eat('=') {
                    TokenKind::Operator
                } else {
                    TokenKind::Equals
                }
            }
            '<' | '>' | '!' => {
                self.eat('=');
                TokenKind::Operator
            }
            '+' | '-' | '*' | '/' | '%' => TokenKind::Operator,
            '&' | '|' => {
                if self.eat(ch) {
                    TokenKind::Operator
                } else {
                    TokenKind::Error
                }
            }
            _ => TokenKind::Error,
        }
    }

    /// Consume `expected` if it is the current character.
    fn eat(&mut self, expected: char) -> bool {
        if self.reader.current() == Some(expected) {
            self.reader.advance();
            true
        } else {
            false
        }
    }
}
