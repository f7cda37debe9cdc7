//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::base::source_file::Span;

/// Is an enumeration containing all kinds of tokens in the Lox programming language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, StrumDisplay,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum TokenKind {
    // single character
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // one or two characters
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // literals
    Identifier,
    String,
    Number,

    // reserved words
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    #[strum(serialize = "EOF")]
    Eof,
}

/// Is an error that is returned when a string is not a reserved word in [`FromStr`]
/// trait implementation of [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of reserved word.")]
pub struct KeywordParseError;

impl FromStr for TokenKind {
    type Err = KeywordParseError;

    /// Looks up the reserved word with exactly the given spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, TokenKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            Self::iter()
                .filter_map(|kind| kind.keyword_str().map(|word| (word, kind)))
                .collect()
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl TokenKind {
    /// Gets the spelling of the reserved word, if this kind is one.
    #[must_use]
    pub fn keyword_str(self) -> Option<&'static str> {
        let word = match self {
            Self::And => "and",
            Self::Class => "class",
            Self::Else => "else",
            Self::False => "false",
            Self::For => "for",
            Self::Fun => "fun",
            Self::If => "if",
            Self::Nil => "nil",
            Self::Or => "or",
            Self::Print => "print",
            Self::Return => "return",
            Self::Super => "super",
            Self::This => "this",
            Self::True => "true",
            Self::Var => "var",
            Self::While => "while",
            _ => return None,
        };

        Some(word)
    }

    /// Whether the kind is a reserved word.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    /// Gets the kind of a single character punctuation token.
    #[must_use]
    pub fn from_punctuation(character: char) -> Option<Self> {
        let kind = match character {
            '(' => Self::LeftParen,
            ')' => Self::RightParen,
            '{' => Self::LeftBrace,
            '}' => Self::RightBrace,
            ',' => Self::Comma,
            '.' => Self::Dot,
            '-' => Self::Minus,
            '+' => Self::Plus,
            ';' => Self::Semicolon,
            '*' => Self::Star,
            _ => return None,
        };

        Some(kind)
    }
}

/// Is the decoded value carried by a literal token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, PartialOrd, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum Literal {
    String(String),
    Number(f64),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(string) => f.write_str(string),
            Self::Number(number) => fmt_number(*number, f),
        }
    }
}

/// Writes the shortest representation of the number that reads back to the same value.
///
/// Decimal exponents in `-4..16` use positional notation with at least one fractional digit
/// (`3.0`, `0.0001`), all others use scientific notation with a signed two digit exponent
/// (`1e+16`, `1e-05`).
fn fmt_number(number: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if !number.is_finite() {
        return write!(f, "{number}");
    }

    let scientific = format!("{number:e}");
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent = exponent.parse::<i32>().unwrap_or_default();

    if (-4..16).contains(&exponent) {
        let positional = number.to_string();
        if positional.contains('.') {
            f.write_str(&positional)
        } else {
            write!(f, "{positional}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Represents a classified lexeme of the source code.
///
/// Tokens are created once by the scanner and never mutated afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Get the span that makes up the token.
    #[get = "pub"]
    span: Span,

    /// Get the decoded literal value of the token.
    #[get = "pub"]
    literal: Option<Literal>,

    /// Get the line (starting at 1) of the first character of the token.
    #[get_copy = "pub"]
    line: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, span: Span, literal: Option<Literal>, line: usize) -> Self {
        Self {
            kind,
            span,
            literal,
            line,
        }
    }

    /// Gets the exact text the token was scanned from.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        self.span.str()
    }

    /// Whether the token terminates the stream.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lexeme = if self.span.is_empty() {
            "N/A"
        } else {
            self.lexeme()
        };

        match &self.literal {
            Some(literal) => write!(f, "<[{}] {lexeme} {literal}>", self.kind),
            None => write!(f, "<[{}] {lexeme}>", self.kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::source_file::SourceFile;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::from_str("while"), Ok(TokenKind::While));
        assert_eq!(TokenKind::from_str("nil"), Ok(TokenKind::Nil));
        assert_eq!(TokenKind::from_str("While"), Err(KeywordParseError));
        assert_eq!(TokenKind::from_str("forest"), Err(KeywordParseError));
        assert_eq!(TokenKind::from_str("EOF"), Err(KeywordParseError));
    }

    #[test]
    fn test_keyword_table_is_complete() {
        let keywords = TokenKind::iter().filter(|kind| kind.is_keyword()).count();
        assert_eq!(keywords, 16);

        for kind in TokenKind::iter().filter(|kind| kind.is_keyword()) {
            let word = kind.keyword_str().unwrap();
            assert_eq!(TokenKind::from_str(word), Ok(kind));
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TokenKind::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenKind::BangEqual.to_string(), "BANG_EQUAL");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_literal_display() {
        assert_eq!(Literal::Number(3.0).to_string(), "3.0");
        assert_eq!(Literal::Number(12.5).to_string(), "12.5");
        assert_eq!(Literal::Number(0.0).to_string(), "0.0");
        assert_eq!(Literal::Number(0.0001).to_string(), "0.0001");
        assert_eq!(Literal::Number(0.00001).to_string(), "1e-05");
        assert_eq!(Literal::Number(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Literal::Number(1e16).to_string(), "1e+16");
        assert_eq!(
            Literal::Number(123_456_789_012_345_678_901_234.0).to_string(),
            "1.2345678901234569e+23"
        );
        assert_eq!(Literal::Number(1e300).to_string(), "1e+300");
        assert_eq!(Literal::Number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Literal::from("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_token_display() {
        let file = SourceFile::new("test", "\"hi\" x");
        let string = Token::new(
            TokenKind::String,
            Span::new(file.clone(), 0, 4).unwrap(),
            Some(Literal::String("hi".to_string())),
            1,
        );
        assert_eq!(string.to_string(), "<[STRING] \"hi\" hi>");

        let identifier = Token::new(
            TokenKind::Identifier,
            Span::new(file.clone(), 5, 6).unwrap(),
            None,
            1,
        );
        assert_eq!(identifier.to_string(), "<[IDENTIFIER] x>");

        let eof = Token::new(TokenKind::Eof, Span::at_end(file), None, 1);
        assert!(eof.is_eof());
        assert_eq!(eof.lexeme(), "");
        assert_eq!(eof.to_string(), "<[EOF] N/A>");
    }
}
