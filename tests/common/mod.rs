#![allow(dead_code)]

use minilang_syntax::{Expected, SyntaxError, TokenKind, recognize, tokenize};

pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).iter().map(|t| t.kind).collect()
}

pub fn assert_valid(input: &str) {
    if let Err(e) = recognize(input) {
        panic!("expected a valid program, got: {e}\n--- input ---\n{input}");
    }
}

pub fn rejection(input: &str) -> SyntaxError {
    recognize(input).map_or_else(
        |e| e,
        |()| panic!("expected a syntax error\n--- input ---\n{input}"),
    )
}

/// Assert the program fails with exactly this expected/found pair.
pub fn assert_rejects(input: &str, expected: TokenKind, found: TokenKind) -> SyntaxError {
    let err = rejection(input);
    assert_eq!(
        (err.expected, err.found),
        (Expected::Kind(expected), found),
        "wrong failure: {err}\n--- input ---\n{input}"
    );
    err
}
