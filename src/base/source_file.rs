//! Module for handling source files and their elements.

use std::{
    fmt::Debug,
    ops::Range,
    path::{Path, PathBuf},
    sync::Arc,
};

use getset::{CopyGetters, Getters};

use super::{file_provider::FileProvider, Error};

/// Represents a source file that contains the source code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters)]
pub struct SourceFile {
    /// Get the path of the source file.
    #[get = "pub"]
    path: PathBuf,
    /// Get the identifier of the source file.
    #[get = "pub"]
    identifier: String,
    /// Get the content of the source file
    #[get = "pub"]
    content: String,
    lines: Vec<Range<usize>>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("identifier", &self.identifier)
            .field("lines", &self.lines)
            .finish()
    }
}

impl SourceFile {
    /// Create a source file from the given content.
    ///
    /// The path of the file is derived from the identifier.
    #[must_use]
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Arc<Self> {
        let identifier = identifier.into();
        Self::with_path(PathBuf::from(&identifier), identifier, content.into())
    }

    fn with_path(path: PathBuf, identifier: String, content: String) -> Arc<Self> {
        let lines = get_line_byte_positions(&content);

        Arc::new(Self {
            path,
            identifier,
            content,
            lines,
        })
    }

    /// Load the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::FileNotFound`]: The file does not exist.
    /// - [`Error::IoError`]: Error occurred when reading the file contents.
    /// - [`Error::Utf8Error`]: The file is not valid UTF-8.
    pub fn load(path: &Path, provider: &impl FileProvider) -> Result<Arc<Self>, Error> {
        let source = provider.read_str(path)?;
        Ok(Self::with_path(
            path.to_path_buf(),
            path.display().to_string(),
            source.into_owned(),
        ))
    }

    /// Get the line of the source file at the given line number, without its line terminator.
    ///
    /// Numbering starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| self.content[range.clone()].trim_end_matches(['\n', '\r']))
    }

    /// Get the number of lines in the source file.
    #[must_use]
    pub fn line_amount(&self) -> usize {
        self.lines.len()
    }

    /// Get the line number (starting at 1) that contains the given byte index.
    ///
    /// The index equal to the content length belongs to the last line.
    #[must_use]
    pub fn line_of(&self, byte_index: usize) -> Option<usize> {
        if byte_index > self.content.len() {
            return None;
        }

        // only `\n` terminates a line, so a binary search over the line starts suffices
        let line = self
            .lines
            .partition_point(|range| range.start <= byte_index);

        Some(line.max(1))
    }
}

/// Represents a range of characters in a source file.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Getters, CopyGetters)]
pub struct Span {
    /// Get the start byte index of the span.
    #[get_copy = "pub"]
    start: usize,

    /// Get the end byte index of the span (exclusive).
    #[get_copy = "pub"]
    end: usize,

    /// Get the source file that the span is located in.
    #[get = "pub"]
    source_file: Arc<SourceFile>,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Span")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("content", &self.str())
            .finish()
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source_file, &other.source_file)
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for Span {}

impl Span {
    /// Create a span from the given start and end byte indices in the source file.
    ///
    /// Returns [`None`] if the range is reversed, out of bounds or does not lie on
    /// character boundaries.
    #[must_use]
    pub fn new(source_file: Arc<SourceFile>, start: usize, end: usize) -> Option<Self> {
        let content = source_file.content();
        if start > end || !content.is_char_boundary(start) || !content.is_char_boundary(end) {
            return None;
        }

        Some(Self {
            start,
            end,
            source_file,
        })
    }

    /// Create a span without validating the range.
    ///
    /// The caller guarantees `start <= end` and that both lie on character boundaries.
    pub(crate) fn new_unchecked(source_file: Arc<SourceFile>, start: usize, end: usize) -> Self {
        debug_assert!(Self::new(source_file.clone(), start, end).is_some());

        Self {
            start,
            end,
            source_file,
        }
    }

    /// Create an empty span at the end of the source file.
    #[must_use]
    pub fn at_end(source_file: Arc<SourceFile>) -> Self {
        let end = source_file.content().len();
        Self {
            start: end,
            end,
            source_file,
        }
    }

    /// Get the string slice of the source code that the span represents.
    #[must_use]
    pub fn str(&self) -> &str {
        &self.source_file.content()[self.start..self.end]
    }

    /// Whether the span covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Get the line (starting at 1) the span starts on.
    #[must_use]
    pub fn start_line(&self) -> usize {
        self.source_file.line_of(self.start).unwrap_or(1)
    }
}

/// Get the byte ranges of the lines in the given text, each including its `\n`.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, _) in text.match_indices('\n') {
        #[allow(clippy::range_plus_one)]
        results.push(current_position..byte + 1);
        current_position = byte + 1;
    }

    // add the last line
    results.push(current_position..text.len());

    results
}
