use std::fmt;

use crate::scanner::Scanner;
use crate::token::{Span, Token, TokenKind};

const EXPRESSION_START: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::IntegerLiteral,
    TokenKind::BooleanLiteral,
    TokenKind::Operator,
    TokenKind::LeftParam,
];

const STATEMENT_START: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::Operator,
    TokenKind::LeftParam,
    TokenKind::Integer,
    TokenKind::Boolean,
    TokenKind::Func,
    TokenKind::If,
    TokenKind::While,
    TokenKind::Input,
    TokenKind::Output,
];

const DECLARATION_START: &[TokenKind] = &[TokenKind::Integer, TokenKind::Boolean, TokenKind::Func];

const TYPE_KEYWORD: &[TokenKind] = &[TokenKind::Integer, TokenKind::Boolean];

const LITERAL: &[TokenKind] = &[TokenKind::IntegerLiteral, TokenKind::BooleanLiteral];

/// `=` and `:=` are interchangeable wherever the grammar assigns.
const ASSIGNMENT: &[TokenKind] = &[TokenKind::Equals, TokenKind::AssignmentOperator];

/// What the grammar would have accepted at the point of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A single terminal required by `accept`.
    Kind(TokenKind),
    /// Any of the kinds that can start the rule being matched.
    OneOf(&'static [TokenKind]),
}

impl Expected {
    #[must_use]
    pub fn allows(self, kind: TokenKind) -> bool {
        match self {
            Self::Kind(k) => k == kind,
            Self::OneOf(kinds) => kinds.contains(&kind),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "'{kind}'"),
            Self::OneOf(kinds) => {
                write!(f, "one of ")?;
                for (i, kind) in kinds.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{kind}'")?;
                }
                Ok(())
            }
        }
    }
}

/// The first point where the token stream leaves the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "expected {expected}, found {} at line {}, column {}",
    describe_found(*found, spelling),
    span.line,
    span.column
)]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: TokenKind,
    /// Exact lexeme of the offending token (empty at end of input).
    pub spelling: String,
    pub span: Span,
}

fn describe_found(kind: TokenKind, spelling: &str) -> String {
    if spelling.is_empty() || spelling == kind.spelling() {
        format!("'{kind}'")
    } else {
        format!("{kind} '{spelling}'")
    }
}

/// Check that a source string is a syntactically valid program.
///
/// # Errors
///
/// Returns `SyntaxError` describing the first token that cannot
/// continue the grammar.
#[tracing::instrument(skip_all, fields(source_len = input.len()))]
pub fn recognize(input: &str) -> Result<(), SyntaxError> {
    Parser::new(Scanner::new(input)).parse_program()
}

/// Recursive-descent recognizer with a single token of lookahead.
///
/// Each grammar rule is one method. Tokens are only ever consumed by
/// `accept`, which replaces the lookahead with the next scanned token;
/// all branching is decided by the lookahead kind alone.
#[derive(Debug)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Reads the first token into the lookahead.
    #[must_use]
    pub fn new(mut scanner: Scanner<'a>) -> Self {
        let current = scanner.scan();
        Self { scanner, current }
    }

    /// The next unconsumed token.
    #[must_use]
    pub const fn lookahead(&self) -> &Token {
        &self.current
    }

    /// `Program := Block EOT`
    pub fn parse_program(mut self) -> Result<(), SyntaxError> {
        self.parse_block()?;
        self.accept(TokenKind::Eot)
    }

    /// `Block := declare '{' Declarations Statements '}'`
    fn parse_block(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::Declare)?;
        self.accept(TokenKind::LeftBrace)?;
        self.parse_declarations()?;
        self.parse_statements()?;
        self.accept(TokenKind::RightBrace)
    }

    fn parse_declarations(&mut self) -> Result<(), SyntaxError> {
        while self.at_any(DECLARATION_START) {
            self.parse_declaration()?;
        }
        Ok(())
    }

    fn parse_declaration(&mut self) -> Result<(), SyntaxError> {
        match self.current.kind {
            TokenKind::Integer | TokenKind::Boolean => self.parse_variable_declaration()?,
            TokenKind::Func => self.parse_function_declaration()?,
            _ => return Err(self.fail(Expected::OneOf(DECLARATION_START))),
        }

        // a stray ')' and the closing ';' are both optional
        if self.at(TokenKind::RightParam) {
            self.accept(TokenKind::RightParam)?;
        }
        if self.at(TokenKind::Semicolon) {
            self.accept(TokenKind::Semicolon)?;
        }
        Ok(())
    }

    /// `('int'|'bool') ':' Identifier [ '=' Literal ]`
    fn parse_variable_declaration(&mut self) -> Result<(), SyntaxError> {
        self.accept_any(TYPE_KEYWORD)?;
        self.accept(TokenKind::DeclareVarType)?;
        self.accept(TokenKind::Identifier)?;
        if self.at_any(ASSIGNMENT) {
            self.accept_any(ASSIGNMENT)?;
            self.accept_any(LITERAL)?;
        }
        Ok(())
    }

    /// `'func' Identifier '(' [ IdList ] ')' Block 'return' Expression`
    fn parse_function_declaration(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::Func)?;
        self.accept(TokenKind::Identifier)?;
        self.accept(TokenKind::LeftParam)?;
        if self.at(TokenKind::Identifier) {
            self.parse_id_list()?;
        }
        self.accept(TokenKind::RightParam)?;
        self.parse_block()?;
        self.accept(TokenKind::Return)?;
        self.parse_expression()
    }

    fn parse_id_list(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::Identifier)?;
        while self.at(TokenKind::Comma) {
            self.accept(TokenKind::Comma)?;
            self.accept(TokenKind::Identifier)?;
        }
        Ok(())
    }

    fn parse_statements(&mut self) -> Result<(), SyntaxError> {
        while self.at_any(STATEMENT_START) {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        match self.current.kind {
            TokenKind::Identifier => {
                self.parse_expression()?;
                if self.at_any(ASSIGNMENT) {
                    self.accept_any(ASSIGNMENT)?;
                    self.accept_any(LITERAL)?;
                }
                self.accept(TokenKind::Semicolon)
            }
            TokenKind::Operator | TokenKind::LeftParam => {
                self.parse_expression()?;
                self.accept(TokenKind::Semicolon)
            }
            TokenKind::Integer | TokenKind::Boolean | TokenKind::Func => self.parse_declaration(),
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::Input | TokenKind::Output => {
                self.accept_any(&[TokenKind::Input, TokenKind::Output])?;
                self.parse_expression()?;
                self.accept(TokenKind::Semicolon)
            }
            _ => Err(self.fail(Expected::OneOf(STATEMENT_START))),
        }
    }

    /// `'if' Expression 'do' '{' Statements '}' [ 'else' '{' Statements '}' ]`
    fn parse_if(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::If)?;
        self.parse_expression()?;
        self.accept(TokenKind::Do)?;
        self.parse_braced_statements()?;
        if self.at(TokenKind::Else) {
            self.accept(TokenKind::Else)?;
            self.parse_braced_statements()?;
        }
        Ok(())
    }

    /// `'while' Expression 'do' '{' Statements '}'`
    fn parse_while(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::While)?;
        self.parse_expression()?;
        self.accept(TokenKind::Do)?;
        self.parse_braced_statements()
    }

    fn parse_braced_statements(&mut self) -> Result<(), SyntaxError> {
        self.accept(TokenKind::LeftBrace)?;
        self.parse_statements()?;
        self.accept(TokenKind::RightBrace)
    }

    /// `Expression := Primary { OPERATOR Primary } { ',' Primary }`
    fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.parse_primary()?;
        while self.at(TokenKind::Operator) {
            self.accept(TokenKind::Operator)?;
            self.parse_primary()?;
        }
        while self.at(TokenKind::Comma) {
            self.accept(TokenKind::Comma)?;
            self.parse_primary()?;
        }
        Ok(())
    }

    fn parse_primary(&mut self) -> Result<(), SyntaxError> {
        match self.current.kind {
            TokenKind::Identifier => {
                self.accept(TokenKind::Identifier)?;
                if self.at_any(ASSIGNMENT) {
                    self.parse_primary_assignment()?;
                }
                if self.at(TokenKind::LeftParam) {
                    self.accept(TokenKind::LeftParam)?;
                    if self.at_any(EXPRESSION_START) {
                        self.parse_expression_list()?;
                    }
                    self.accept(TokenKind::RightParam)?;
                }
                Ok(())
            }
            TokenKind::IntegerLiteral | TokenKind::BooleanLiteral => self.accept_any(LITERAL),
            TokenKind::Operator => {
                self.accept(TokenKind::Operator)?;
                self.parse_primary()
            }
            // Always a parenthesized sub-expression; a type keyword
            // after '(' is rejected rather than read as statements.
            TokenKind::LeftParam => {
                self.accept(TokenKind::LeftParam)?;
                if self.at_any(EXPRESSION_START) {
                    self.parse_expression()?;
                }
                self.accept(TokenKind::RightParam)
            }
            _ => Err(self.fail(Expected::OneOf(EXPRESSION_START))),
        }
    }

    /// After an identifier: `'=' ( Literal [ '=' ExprList ] | ExprList )`
    fn parse_primary_assignment(&mut self) -> Result<(), SyntaxError> {
        self.accept_any(ASSIGNMENT)?;
        if self.at_any(LITERAL) {
            self.accept_any(LITERAL)?;
            if self.at_any(ASSIGNMENT) {
                self.accept_any(ASSIGNMENT)?;
                self.parse_expression_list()?;
            }
            Ok(())
        } else {
            self.parse_expression_list()
        }
    }

    fn parse_expression_list(&mut self) -> Result<(), SyntaxError> {
        self.parse_expression()?;
        while self.at(TokenKind::Comma) {
            self.accept(TokenKind::Comma)?;
            self.parse_expression()?;
        }
        Ok(())
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    fn at_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current.kind)
    }

    /// Consume the lookahead if it has the expected kind.
    fn accept(&mut self, expected: TokenKind) -> Result<(), SyntaxError> {
        if self.at(expected) {
            self.current = self.scanner.scan();
            Ok(())
        } else {
            Err(self.fail(Expected::Kind(expected)))
        }
    }

    fn accept_any(&mut self, kinds: &'static [TokenKind]) -> Result<(), SyntaxError> {
        if self.at_any(kinds) {
            self.accept(self.current.kind)
        } else {
            Err(self.fail(Expected::OneOf(kinds)))
        }
    }

    fn fail(&self, expected: Expected) -> SyntaxError {
        let err = SyntaxError {
            expected,
            found: self.current.kind,
            spelling: self.current.text.clone(),
            span: self.current.span,
        };
        tracing::error!(
            line = err.span.line,
            column = err.span.column,
            "syntax error: {err}"
        );
        err
    }
}
