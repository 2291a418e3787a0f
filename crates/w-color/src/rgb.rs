//! The `Rgb` color type and hex parsing.
//!
//! A color here is exactly what the contrast formula needs: three 8-bit
//! sRGB channels. No alpha, no named colors, no wider gamuts. Input is
//! the web-familiar `#RRGGBB` form; the leading `#` may be omitted.

use std::fmt;

use thiserror::Error;

/// A 24-bit sRGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel, 0–255.
    pub r: u8,
    /// Green channel, 0–255.
    pub g: u8,
    /// Blue channel, 0–255.
    pub b: u8,
}

/// Failure to parse a hex color token.
///
/// Carries the offending token verbatim so the caller can echo it back
/// to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid color {token:?}: expected a hex color like #RRGGBB")]
pub struct ParseColorError {
    /// The token that failed to parse, as the user typed it.
    pub token: String,
}

impl Rgb {
    /// Pure black (`#000000`).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white (`#ffffff`).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RRGGBB` or `RRGGBB`, case-insensitive. Anything else —
    /// wrong length, stray characters, empty input — is an error naming
    /// the token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if `s` is not a 6-digit hex color.
    pub fn hex(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s).ok_or_else(|| ParseColorError {
            token: s.to_string(),
        })
    }

    /// Render as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({})", self.to_hex())
    }
}

// ─── Hex parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }

    let bytes = s.as_bytes();
    let r = parse_hex_byte(&bytes[0..2])?;
    let g = parse_hex_byte(&bytes[2..4])?;
    let b = parse_hex_byte(&bytes[4..6])?;
    Some(Rgb::new(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
