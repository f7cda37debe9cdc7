//! Contains the [`Scanner`] that turns source code into [`Token`]s.

use std::{str::FromStr, sync::Arc};

use crate::base::{
    source_file::{SourceFile, Span},
    FnHandler, Handler,
};

use super::{
    error::{UnexpectedCharacter, UnterminatedString},
    token::{Literal, Token, TokenKind},
    Error,
};

/// Scans a whole source file into tokens in a single left to right pass.
///
/// A scanner is created for one source file and consumed by [`Scanner::scan_tokens`].
#[derive(Debug)]
pub struct Scanner<'a, H> {
    source_file: &'a Arc<SourceFile>,
    source: &'a str,
    handler: &'a H,
    tokens: Vec<Token>,

    /// Byte index of the first character of the current lexeme.
    start: usize,
    /// Byte index of the next character to read.
    current: usize,
    /// Line of the next character to read.
    line: usize,
    /// Line of the first character of the current lexeme.
    start_line: usize,
}

impl<'a, H: Handler<Error>> Scanner<'a, H> {
    /// Creates a scanner reporting lexical errors to the given handler.
    #[must_use]
    pub fn new(source_file: &'a Arc<SourceFile>, handler: &'a H) -> Self {
        Self {
            source_file,
            source: source_file.content(),
            handler,
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Scans the whole source.
    ///
    /// The returned tokens are in source order and always end with exactly one
    /// [`TokenKind::Eof`] token. Malformed lexemes are reported to the handler and skipped.
    #[must_use]
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::at_end(self.source_file.clone()),
            None,
            self.line,
        ));

        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(character) = self.advance() else {
            return;
        };

        if let Some(kind) = TokenKind::from_punctuation(character) {
            self.add_token(kind, None);
            return;
        }

        match character {
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.match_char('/') {
                    // line comment, the newline is left for the next step
                    while self.peek().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash, None);
                }
            }
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,
            '"' => self.handle_string_literal(),
            c if c.is_ascii_digit() => self.handle_number_literal(),
            c if is_identifier_start(c) => self.handle_identifier_and_keyword(),
            c => self.report(UnexpectedCharacter {
                line: self.line,
                character: c,
            }),
        }
    }

    /// Handles a sequence of characters that are enclosed in double quotes.
    fn handle_string_literal(&mut self) {
        while let Some(character) = self.peek() {
            if character == '"' {
                break;
            }
            if character == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.report(UnterminatedString { line: self.line });
            return;
        }

        // the closing quote
        self.advance();

        let content = &self.source[self.start + 1..self.current - 1];
        self.add_token(TokenKind::String, Some(Literal::String(content.to_string())));
    }

    /// Handles a sequence of digits with an optional fractional part.
    fn handle_number_literal(&mut self) {
        self.walk(|c| c.is_ascii_digit());

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.walk(|c| c.is_ascii_digit());
        }

        // `digits[.digits]` always parses
        let value = self.source[self.start..self.current]
            .parse::<f64>()
            .ok()
            .map(Literal::Number);
        self.add_token(TokenKind::Number, value);
    }

    /// Handles a contiguous sequence of characters that are valid in an identifier.
    fn handle_identifier_and_keyword(&mut self) {
        self.walk(is_identifier_character);

        let word = &self.source[self.start..self.current];
        let kind = TokenKind::from_str(word).unwrap_or(TokenKind::Identifier);
        self.add_token(kind, None);
    }

    /// Adds `matched` if the next character is `expected`, `otherwise` if not.
    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.match_char(expected) {
            matched
        } else {
            otherwise
        };
        self.add_token(kind, None);
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let span = Span::new_unchecked(self.source_file.clone(), self.start, self.current);
        self.tokens
            .push(Token::new(kind, span, literal, self.start_line));
    }

    fn report(&self, error: impl Into<Error>) {
        let error = error.into();
        tracing::trace!(%error, "lexical error");
        self.handler.receive(error);
    }

    /// Consumes the next character.
    fn advance(&mut self) -> Option<char> {
        let character = self.peek()?;
        self.current += character.len_utf8();
        Some(character)
    }

    /// Consumes the next character only if it is `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    /// Increments the cursor while the predicate returns true.
    fn walk(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Checks if the given character is a valid first character of an identifier.
fn is_identifier_start(character: char) -> bool {
    character.is_ascii_alphabetic() || character == '_'
}

/// Checks if the given character is a valid character of an identifier.
fn is_identifier_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Scans the given source code, reporting each lexical error as `(line, message)`.
///
/// ```
/// let tokens = lox::lexical::scan_tokens("print 1;", |line, message| {
///     eprintln!("[line {line}] Error: {message}");
/// });
/// assert_eq!(tokens.len(), 4);
/// ```
#[must_use]
pub fn scan_tokens(source: &str, on_error: impl Fn(usize, &str)) -> Vec<Token> {
    let source_file = SourceFile::new("<source>", source);
    let handler = FnHandler(on_error);
    Scanner::new(&source_file, &handler).scan_tokens()
}
