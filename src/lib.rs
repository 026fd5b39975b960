//! Scanner and syntax recognizer for a small imperative language.
//!
//! Programs are a `declare { ... }` block of typed variable and
//! function declarations followed by statements (`if`, `while`,
//! `input`, `output`, assignments and calls). The crate answers one
//! question: is the text a syntactically valid program? On the first
//! violation it reports which token kind was expected and what was
//! found instead.
//!
//! # Quick start
//!
//! ```
//! use minilang_syntax::{Expected, TokenKind, recognize};
//!
//! assert!(recognize("declare { int : x = 5 ; output x ; }").is_ok());
//!
//! let err = recognize("declare { int : x = 5 ;").unwrap_err();
//! assert_eq!(err.expected, Expected::Kind(TokenKind::RightBrace));
//! assert_eq!(err.found, TokenKind::Eot);
//! ```
//!
//! ## Token stream
//!
//! ```
//! use minilang_syntax::{TokenKind, tokenize};
//!
//! let kinds: Vec<_> = tokenize("declare { }").iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Declare, TokenKind::LeftBrace, TokenKind::RightBrace, TokenKind::Eot]
//! );
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod parser;
pub mod scanner;
pub mod source;
pub mod token;

use std::io;
use std::path::{Path, PathBuf};

pub use ast::{BinaryExpression, Expression, UnaryExpression};
pub use parser::{Expected, Parser, SyntaxError, recognize};
pub use scanner::{Scanner, tokenize};
pub use source::{SourceFile, SourceReader};
pub use token::{Operator, Span, Token, TokenKind};

/// Unified error type covering file loading and recognition.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The program is not syntactically valid.
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
}

/// Load a program from disk and recognize it in one step.
pub fn recognize_file(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let file = SourceFile::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(recognize(&file.text)?)
}
