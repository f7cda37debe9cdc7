//! Contains the [`TokenStream`] struct and its related types.

use std::{fmt::Debug, fmt::Display, sync::Arc};

use derive_more::Deref;
use itertools::Itertools;

use crate::{
    base::{source_file::SourceFile, Handler},
    lexical::Error,
};

use super::{scanner::Scanner, token::Token};

/// Is a list of tokens terminated by exactly one end of file token.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the interpreter.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Deref)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tokens.iter().join(" "))
    }
}

impl TokenStream {
    /// Tokenizes the given source code.
    ///
    /// Lexical errors are passed to the handler; the stream contains every token that could
    /// be scanned regardless.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all, fields(source_file = %source_file.identifier()))]
    pub fn tokenize(source_file: &Arc<SourceFile>, handler: &impl Handler<Error>) -> Self {
        tracing::debug!(bytes = source_file.content().len(), "Scanning source code");

        let tokens = Scanner::new(source_file, handler).scan_tokens();

        tracing::debug!(tokens = tokens.len(), "Finished scanning");

        Self { tokens }
    }

    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}
