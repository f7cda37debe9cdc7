use std::{cell::RefCell, path::Path};

use lox::{
    base::{Located, SilentHandler, VoidHandler},
    lexical::{
        scan_tokens,
        token::{Literal, Token, TokenKind},
        Error,
    },
};

#[test]
fn scanning_program() {
    let source = include_str!("./program.lox");
    let handler = SilentHandler::<Error>::new();

    let tokens = lox::tokenize_str(&handler, "program.lox", source);
    assert!(!handler.has_received());

    let eof = tokens.last().expect("token stream is never empty");
    assert!(eof.is_eof());
    assert_eq!(eof.line(), 20);
    assert_eq!(tokens.iter().filter(|token| token.is_eof()).count(), 1);

    let find = |kind: TokenKind| {
        tokens
            .iter()
            .find(|token| token.kind() == kind)
            .unwrap_or_else(|| panic!("Expected a {kind} token"))
    };

    assert_eq!(find(TokenKind::Class).line(), 2);
    assert_eq!(find(TokenKind::Print).line(), 4);
    assert_eq!(find(TokenKind::Fun).line(), 8);
    assert_eq!(find(TokenKind::LessEqual).line(), 9);
    assert_eq!(find(TokenKind::For).line(), 14);
    assert_eq!(find(TokenKind::While).line(), 18);
    assert_eq!(find(TokenKind::GreaterEqual).line(), 18);
    assert_eq!(find(TokenKind::Bang).line(), 18);
    assert_eq!(find(TokenKind::BangEqual).line(), 19);
    assert_eq!(find(TokenKind::EqualEqual).line(), 19);
    assert_eq!(find(TokenKind::Super).line(), 19);

    let greeting = find(TokenKind::String);
    assert_eq!(greeting.lexeme(), "\"Hello, \"");
    assert_eq!(
        greeting.literal(),
        &Some(Literal::String("Hello, ".to_string()))
    );

    let numbers = tokens
        .iter()
        .filter(|token| token.kind() == TokenKind::Number)
        .map(|token| token.lexeme())
        .collect::<Vec<_>>();
    assert_eq!(
        numbers,
        vec!["1", "2", "1", "0", "0", "10", "1", "1.5", "100.25", "2"]
    );

    // every token but EOF maps back onto its own text
    for token in tokens.iter().filter(|token| !token.is_eof()) {
        assert!(!token.lexeme().is_empty());
        assert!(source.contains(token.lexeme()));
    }
}

#[test]
fn scanning_invalid() {
    let source = include_str!("./invalid.lox");
    let handler = SilentHandler::<Error>::new();

    let tokens = lox::tokenize_str(&handler, "invalid.lox", source);

    assert_eq!(
        tokens.iter().map(Token::kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::String,
            TokenKind::Semicolon,
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Semicolon,
            TokenKind::Print,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens.last().map(Token::line), Some(5));

    let errors = handler
        .into_received()
        .into_iter()
        .map(|error| (error.line(), error.to_string()))
        .collect::<Vec<_>>();
    assert_eq!(
        errors,
        vec![
            (2, "Unexpected character: @".to_string()),
            (5, "Unterminated string".to_string()),
        ]
    );
}

#[test]
fn scanning_with_callback() {
    let reported = RefCell::new(Vec::new());
    let tokens = scan_tokens("print 1 | 2;", |line, message| {
        reported.borrow_mut().push((line, message.to_string()));
    });

    assert_eq!(tokens.len(), 5);
    assert_eq!(
        reported.into_inner(),
        vec![(1, "Unexpected character: |".to_string())]
    );
}

#[test]
fn scanning_missing_file() {
    let provider = lox::base::FsProvider::from(env!("CARGO_MANIFEST_DIR"));
    let result = lox::tokenize(&VoidHandler, &provider, Path::new("tests/does-not-exist.lox"));

    assert!(matches!(result, Err(lox::base::Error::FileNotFound(_))));
}

#[test]
fn scanning_file() {
    let provider = lox::base::FsProvider::from(env!("CARGO_MANIFEST_DIR"));
    let tokens = lox::tokenize(&VoidHandler, &provider, Path::new("tests/scanning/program.lox"))
        .expect("Failed to tokenize");

    assert_eq!(tokens.first().map(Token::kind), Some(TokenKind::Class));
}
