//! WCAG contrast ratio math.
//!
//! Implements the WCAG 2.x definition of relative luminance and contrast
//! ratio over sRGB colors, plus pass/fail grading at the 4.5:1 threshold
//! for normal-size text (level AA).
//!
//! One subtlety worth stating: WCAG specifies the linearization cutoff as
//! 0.03928, a historical constant that differs slightly from the sRGB
//! standard's 0.04045. The difference is invisible in practice but this
//! module follows the WCAG text exactly.

use std::fmt;

use crate::rgb::Rgb;

/// Minimum contrast ratio for normal-size text at WCAG level AA.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Linearize a single 8-bit sRGB channel per the WCAG 2.x formula.
///
/// `c = v/255`; then `c/12.92` below the cutoff, `((c+0.055)/1.055)^2.4`
/// above it.
#[inline]
#[must_use]
pub fn srgb_to_linear(v: u8) -> f64 {
    let c = f64::from(v) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.x.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let r_lin = srgb_to_linear(color.r);
    let g_lin = srgb_to_linear(color.g);
    let b_lin = srgb_to_linear(color.b);
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// Compute the WCAG 2.x contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result is always >= 1.0 regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

// ─── Grading ─────────────────────────────────────────────────────────────────

/// Pass/fail verdict against [`AA_NORMAL_TEXT`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Grade {
    /// Ratio meets the 4.5:1 threshold.
    Pass,
    /// Ratio falls below the threshold.
    Fail,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// The result of checking one color pair: a display-rounded ratio and
/// its verdict.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ContrastReport {
    /// Contrast ratio rounded to two decimal places.
    pub ratio: f64,
    /// Pass/fail at the 4.5:1 threshold, judged on the rounded ratio.
    pub grade: Grade,
}

impl ContrastReport {
    /// Evaluate a color pair.
    ///
    /// The ratio is rounded to two decimals first and the threshold is
    /// applied to the rounded value, so the verdict always agrees with
    /// the number the user sees (4.495 rounds up to 4.50 and passes).
    #[must_use]
    pub fn evaluate(a: Rgb, b: Rgb) -> Self {
        let ratio = round2(contrast_ratio(a, b));
        let grade = if ratio >= AA_NORMAL_TEXT {
            Grade::Pass
        } else {
            Grade::Fail
        };
        Self { ratio, grade }
    }
}

impl fmt::Display for ContrastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}:1 ({})", self.ratio, self.grade)
    }
}

/// Round to two decimal places, ties away from zero.
#[inline]
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

// ─── Tests ───────────────────────────────────────────────────────────────────
