//! The `lox` scanner.
//!
//! Converts the source code of the Lox scripting language into a stream of classified tokens.
//! Lexical errors are reported through a [`Handler`] and never stop the scan.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use std::path::Path;

use base::{source_file::SourceFile, FileProvider, Handler, Result};

use crate::lexical::{token_stream::TokenStream, Error};

/// Converts the source code of the file at the given path to tokens.
///
/// # Errors
/// - If an error occurs while reading the file.
pub fn tokenize(
    handler: &impl Handler<Error>,
    file_provider: &impl FileProvider,
    path: &Path,
) -> Result<TokenStream> {
    tracing::info!("Tokenizing the source code at path: {}", path.display());

    let source_file = SourceFile::load(path, file_provider)?;

    Ok(TokenStream::tokenize(&source_file, handler))
}

/// Converts the given source code to tokens.
///
/// The identifier names the source in diagnostics, e.g. `<prompt>` for interactive input.
#[must_use]
pub fn tokenize_str(
    handler: &impl Handler<Error>,
    identifier: &str,
    source: &str,
) -> TokenStream {
    let source_file = SourceFile::new(identifier, source);

    TokenStream::tokenize(&source_file, handler)
}
