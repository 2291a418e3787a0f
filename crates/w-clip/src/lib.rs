//! # w-clip — clipboard capability
//!
//! Copying to the system clipboard is the one side effect in the toolbox,
//! so it lives behind a trait. Production code uses [`Osc52`], which asks
//! the terminal emulator to set the clipboard via the OSC 52 escape
//! sequence — no display server, no helper binaries, works over SSH.
//! Tests use [`Sink`], which just records what was copied.
//!
//! Clipboard writes are best-effort by contract: callers treat failure as
//! a local, reportable condition, never a fatal one.

pub mod osc52;

use thiserror::Error;

pub use osc52::Osc52;

/// Result type alias for clipboard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while copying.
#[derive(Debug, Error)]
pub enum Error {
    /// Stdout is not a terminal, so there is nowhere to send OSC 52.
    #[error("clipboard unavailable: stdout is not a terminal")]
    NotATty,

    /// Writing the escape sequence failed.
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The capability to place text on the system clipboard.
pub trait Clipboard {
    /// Copy `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the clipboard is unreachable or the write
    /// fails. Errors are expected to be handled locally by the caller.
    fn copy(&mut self, text: &str) -> Result<()>;
}

// ─── Sink ────────────────────────────────────────────────────────────────────

/// An in-memory clipboard that records every copy. For tests.
#[derive(Debug, Default)]
pub struct Sink {
    copied: Vec<String>,
}

impl Sink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything copied so far, oldest first.
    #[must_use]
    pub fn copied(&self) -> &[String] {
        &self.copied
    }

    /// The most recent copy, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.copied.last().map(String::as_str)
    }
}

impl Clipboard for Sink {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sink_records_copies_in_order() {
        let mut clip = Sink::new();
        clip.copy("first").unwrap();
        clip.copy("second").unwrap();
        assert_eq!(clip.copied(), ["first", "second"]);
        assert_eq!(clip.last(), Some("second"));
    }

    #[test]
    fn empty_sink_has_no_last() {
        assert_eq!(Sink::new().last(), None);
    }
}
