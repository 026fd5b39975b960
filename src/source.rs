use std::fs;
use std::io;
use std::path::Path;

use crate::token::Span;

/// Program text together with a display name for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub text: String,
}

impl SourceFile {
    /// Wrap in-memory text. A leading UTF-8 byte order mark is dropped.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut text = text.into();
        if text.starts_with('\u{FEFF}') {
            text.drain(..'\u{FEFF}'.len_utf8());
        }
        Self {
            name: name.into(),
            text,
        }
    }

    /// Read a program from disk.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        Ok(Self::new(path.display().to_string(), text))
    }

    #[must_use]
    pub fn reader(&self) -> SourceReader<'_> {
        SourceReader::new(&self.text)
    }
}

/// Character cursor over program text.
///
/// Hands out one character at a time and keeps the byte offset,
/// line and column of the current character up to date.
#[derive(Debug, Clone)]
pub struct SourceReader<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> SourceReader<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let start = if input.starts_with('\u{FEFF}') { 3 } else { 0 };
        Self {
            input,
            pos: start,
            line: 1,
            col: 1,
        }
    }

    /// The character under the cursor, or `None` at end of input.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// The character after the current one.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Move past the current character. No-op at end of input.
    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    /// Text between an earlier span and the cursor.
    #[must_use]
    pub fn slice_from(&self, start: Span) -> &'a str {
        &self.input[start.offset..self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_lines_and_columns() {
        let mut reader = SourceReader::new("ab\nc");
        reader.advance();
        assert_eq!(reader.span().column, 2);
        reader.advance();
        reader.advance();
        let span = reader.span();
        assert_eq!((span.line, span.column, span.offset), (2, 1, 3));
        assert_eq!(reader.current(), Some('c'));
        reader.advance();
        assert!(reader.is_at_end());
        assert_eq!(reader.current(), None);
        reader.advance();
        assert_eq!(reader.span().offset, 4);
    }

    #[test]
    fn bom_stripping() {
        let reader = SourceReader::new("\u{FEFF}declare");
        assert_eq!(reader.current(), Some('d'));
        let file = SourceFile::new("mem", "\u{FEFF}declare");
        assert_eq!(file.text, "declare");
    }

    #[test]
    fn multibyte_characters_advance_by_char() {
        let mut reader = SourceReader::new("é;");
        let start = reader.span();
        reader.advance();
        assert_eq!(reader.slice_from(start), "é");
        assert_eq!(reader.current(), Some(';'));
        assert_eq!(reader.peek(), None);
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let err = SourceFile::open("/definitely/not/here.ml").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
