use std::{
    cell::{Cell, RefCell},
    fmt::Display,
};

use super::log::{Message, Severity};

/// Represents a trait responsible for handling diagnostics in the scanner.
pub trait Handler<T> {
    /// Receive an error and handles it.
    fn receive(&self, error: T);
}

/// Errors that know which source line they refer to.
pub trait Located {
    /// Get the line (starting at 1) the error was detected on.
    fn line(&self) -> usize;
}

/// Handler that prints every received error to stderr as `[line N] Error: message`.
#[derive(Debug, Default)]
pub struct PrintHandler {
    printed: Cell<bool>,
}

impl PrintHandler {
    /// Creates a new [`PrintHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one error was printed.
    #[must_use]
    pub fn has_printed(&self) -> bool {
        self.printed.get()
    }

    /// Forgets about previously printed errors.
    pub fn reset(&self) {
        self.printed.set(false);
    }
}

impl<T: Located + Display> Handler<T> for PrintHandler {
    fn receive(&self, error: T) {
        eprintln!("{}", Message::new(Severity::Error, error.line(), &error));
        self.printed.set(true);
    }
}

/// Handler that collects every received error.
#[derive(Debug)]
pub struct SilentHandler<T> {
    received: RefCell<Vec<T>>,
}

impl<T> Default for SilentHandler<T> {
    fn default() -> Self {
        Self {
            received: RefCell::new(Vec::new()),
        }
    }
}

impl<T> SilentHandler<T> {
    /// Creates a new [`SilentHandler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any error was received.
    #[must_use]
    pub fn has_received(&self) -> bool {
        !self.received.borrow().is_empty()
    }

    /// Takes the received errors, in the order they were received.
    #[must_use]
    pub fn into_received(self) -> Vec<T> {
        self.received.into_inner()
    }
}

impl<T> Handler<T> for SilentHandler<T> {
    fn receive(&self, error: T) {
        self.received.borrow_mut().push(error);
    }
}

/// Handler that discards every received error.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoidHandler;

impl<T> Handler<T> for VoidHandler {
    fn receive(&self, _error: T) {}
}

/// Handler adapting a `(line, message)` callback.
#[derive(Debug, Clone, Copy)]
pub struct FnHandler<F>(pub F);

impl<T, F> Handler<T> for FnHandler<F>
where
    T: Located + Display,
    F: Fn(usize, &str),
{
    fn receive(&self, error: T) {
        (self.0)(error.line(), &error.to_string());
    }
}

impl<T, H: Handler<T> + ?Sized> Handler<T> for &H {
    fn receive(&self, error: T) {
        (**self).receive(error);
    }
}
