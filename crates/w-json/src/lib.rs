//! # w-json — JSON pretty-printing
//!
//! One operation: take a text blob, parse it as JSON, re-emit it with
//! two-space indentation. The document is transient — parsed, printed,
//! dropped. Key order is preserved (`preserve_order`), so formatting
//! never reorders what the user wrote.
//!
//! Parse failures surface as a typed [`Error`] wrapping the parser's
//! diagnostic (line/column included); nothing panics on user input.

use thiserror::Error;

/// Result type alias for w-json operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while formatting.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not valid JSON. Carries the parser's diagnostic.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse `input` as JSON and re-serialize it with two-space indentation.
///
/// The output has no trailing newline. Formatting is idempotent: running
/// the output through `format` again reproduces it byte-for-byte.
///
/// # Errors
///
/// Returns [`Error::Parse`] when `input` is not valid JSON.
pub fn format(input: &str) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    // to_string_pretty only fails on non-string map keys or fallible
    // Serialize impls; Value has neither.
    Ok(serde_json::to_string_pretty(&value)?)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
