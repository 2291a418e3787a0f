//! # w-color — sRGB color parsing and WCAG contrast math
//!
//! The computational core of the contrast checker:
//!
//! - **[`rgb`]** — `Rgb`, a 24-bit sRGB color parsed from `#RRGGBB` hex
//! - **[`contrast`]** — relative luminance, contrast ratio, pass/fail grading
//!
//! Everything here is a pure function over value types. No I/O, no state,
//! no panics on user input — malformed hex is a typed [`ParseColorError`].

// Single-char variable names (r, g, b, l) are the standard mathematical
// convention in color science.
#![allow(clippy::many_single_char_names)]

pub mod contrast;
pub mod rgb;

pub use contrast::{ContrastReport, Grade, contrast_ratio, relative_luminance};
pub use rgb::{ParseColorError, Rgb};
