//! Module containing structures and implementations for logging messages to the user.

use colored::Colorize;
use std::fmt::Display;

/// Represent the severity of a log message to be printed to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

impl Severity {
    /// Gets the label printed in front of the message.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Info => "Info",
            Self::Warning => "Warning",
        }
    }
}

/// Struct implementing [`Display`] that represents a log message to be displayed to the user.
///
/// Messages are rendered as `[line N] Error: message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Message<T> {
    /// The severity of the log message.
    pub severity: Severity,

    /// The source line the message refers to.
    pub line: usize,

    /// The message to be displayed.
    pub display: T,
}

impl<T> Message<T> {
    /// Create a new log message with the given severity, line and message to be displayed.
    pub fn new(severity: Severity, line: usize, display: T) -> Self {
        Self {
            severity,
            line,
            display,
        }
    }
}

impl<T: Display> Display for Message<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = format!("[line {}]", self.line).bold();
        let label = format!("{}:", self.severity.as_str());
        let label = match self.severity {
            Severity::Error => label.red(),
            Severity::Info => label.green(),
            Severity::Warning => label.yellow(),
        }
        .bold();

        write!(f, "{location} {label} {}", self.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_plain() {
        colored::control::set_override(false);
        let message = Message::new(Severity::Error, 3, "Unterminated string");
        assert_eq!(message.to_string(), "[line 3] Error: Unterminated string");
        colored::control::unset_override();
    }
}
