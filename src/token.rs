use std::fmt;

/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Byte offset into the source text.
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Terminal categories produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftParam,
    RightParam,
    Comma,
    Semicolon,
    /// `:` between a type keyword and the declared name.
    DeclareVarType,
    /// `=`
    Equals,
    /// `:=`
    AssignmentOperator,

    Declare,
    Func,
    Return,
    If,
    Else,
    While,
    Do,
    Input,
    Output,
    /// The `int` type keyword.
    Integer,
    /// The `bool` type keyword.
    Boolean,

    IntegerLiteral,
    BooleanLiteral,
    Identifier,
    /// Any unary or binary operator symbol.
    Operator,

    /// A character no rule can classify.
    Error,
    /// End of input, returned repeatably.
    Eot,
}

impl TokenKind {
    /// Canonical display spelling used in diagnostics.
    #[must_use]
    pub const fn spelling(self) -> &'static str {
        match self {
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftParam => "(",
            Self::RightParam => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::DeclareVarType => ":",
            Self::Equals => "=",
            Self::AssignmentOperator => ":=",
            Self::Declare => "declare",
            Self::Func => "func",
            Self::Return => "return",
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Do => "do",
            Self::Input => "input",
            Self::Output => "output",
            Self::Integer => "int",
            Self::Boolean => "bool",
            Self::IntegerLiteral => "<integer literal>",
            Self::BooleanLiteral => "<boolean literal>",
            Self::Identifier => "<identifier>",
            Self::Operator => "<operator>",
            Self::Error => "<error>",
            Self::Eot => "<eot>",
        }
    }

    /// Map a scanned word to its keyword or literal kind.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "declare" => Self::Declare,
            "func" => Self::Func,
            "return" => Self::Return,
            "if" => Self::If,
            "else" => Self::Else,
            "while" => Self::While,
            "do" => Self::Do,
            "input" => Self::Input,
            "output" => Self::Output,
            "int" => Self::Integer,
            "bool" => Self::Boolean,
            "true" | "false" => Self::BooleanLiteral,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spelling())
    }
}

/// Operator identity carried by the spelling of an `Operator` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Eq,
    NotEq,
    Not,
    And,
    Or,
}

impl Operator {
    #[must_use]
    pub fn from_spelling(text: &str) -> Option<Self> {
        let op = match text {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Rem,
            "<" => Self::Less,
            "<=" => Self::LessEq,
            ">" => Self::Greater,
            ">=" => Self::GreaterEq,
            "==" => Self::Eq,
            "!=" => Self::NotEq,
            "!" => Self::Not,
            "&&" => Self::And,
            "||" => Self::Or,
            _ => return None,
        };
        Some(op)
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Not => "!",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Whether the operator can appear in prefix position.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Sub | Self::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single token with its kind, exact lexeme, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The operator symbol, for `Operator` tokens only.
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        if self.kind == TokenKind::Operator {
            Operator::from_spelling(&self.text)
        } else {
            None
        }
    }
}
