use std::fmt::Display;

use crate::base::Located;

/// Represents an error that occurred during the lexical analysis of the source code.
///
/// Lexical errors never stop the scan; they are reported and the scanner continues with
/// the next character.
#[allow(missing_docs)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UnexpectedCharacter(#[from] UnexpectedCharacter),
    #[error(transparent)]
    UnterminatedString(#[from] UnterminatedString),
}

impl Located for Error {
    fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter(err) => err.line,
            Self::UnterminatedString(err) => err.line,
        }
    }
}

/// Source code contains a character that does not start any token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub struct UnexpectedCharacter {
    /// Line the character was found on.
    pub line: usize,

    /// The offending character.
    pub character: char,
}

impl Display for UnexpectedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unexpected character: {}", self.character)
    }
}

/// Source code ends inside a string literal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub struct UnterminatedString {
    /// Line the end of the source was reached on.
    pub line: usize,
}

impl Display for UnterminatedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Unterminated string")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err: Error = UnexpectedCharacter {
            line: 4,
            character: '@',
        }
        .into();
        assert_eq!(err.to_string(), "Unexpected character: @");
        assert_eq!(err.line(), 4);

        let err: Error = UnterminatedString { line: 2 }.into();
        assert_eq!(err.to_string(), "Unterminated string");
        assert_eq!(err.line(), 2);
    }

    #[test]
    fn test_errors_are_copied() {
        let err: Error = UnexpectedCharacter {
            line: 1,
            character: '#',
        }
        .into();
        let reported = err;

        assert_eq!(err, reported);
        assert_eq!(err.line(), reported.line());
    }
}
