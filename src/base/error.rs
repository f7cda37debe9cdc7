/// An error that occurred while loading a script.
///
/// Lexical errors are not part of this type, they are reported through a
/// [`Handler`](super::Handler) while scanning continues.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("An error occurred while working with Input/Output: {0}")]
    IoError(String),
    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
