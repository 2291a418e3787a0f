//! The tool layer — one function per utility.
//!
//! Each tool is the same shape: take the raw input text, run a pure
//! computation, produce a [`ToolOutput`] holding the display text and
//! whether the copy affordance is enabled. All user-facing strings live
//! here; the library crates below deal only in values.

use w_clip::Clipboard;
use w_color::{ContrastReport, Rgb};

/// Fixed instructional message shown when the contrast input doesn't
/// contain exactly two comma-separated colors.
pub const CONTRAST_USAGE: &str =
    "Please enter two colors in the format: #FFFFFF, #000000";

/// What a tool run produced: text for the display surface, plus the
/// state of the copy affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// The text to show the user (result or diagnostic).
    pub text: String,
    /// Whether the copy action is enabled for this output.
    pub copyable: bool,
}

impl ToolOutput {
    fn copyable(text: String) -> Self {
        Self { text, copyable: true }
    }

    fn not_copyable(text: String) -> Self {
        Self { text, copyable: false }
    }
}

// ─── Contrast checker ────────────────────────────────────────────────────────

/// Run the contrast checker over one input line.
///
/// The input must be exactly two comma-separated hex colors; any other
/// token count yields the fixed instructional message instead of a
/// computation. A malformed color token is reported as an error naming
/// the token, with the copy action disabled.
#[must_use]
pub fn contrast(input: &str) -> ToolOutput {
    let tokens: Vec<&str> = input.split(',').collect();
    let [first, second] = tokens.as_slice() else {
        return ToolOutput::copyable(CONTRAST_USAGE.to_string());
    };

    let pair = Rgb::hex(first.trim()).and_then(|a| {
        let b = Rgb::hex(second.trim())?;
        Ok((a, b))
    });
    match pair {
        Ok((a, b)) => {
            let report = ContrastReport::evaluate(a, b);
            tracing::debug!(ratio = report.ratio, "contrast computed");
            ToolOutput::copyable(format!("Contrast Ratio: {report}"))
        }
        Err(e) => ToolOutput::not_copyable(e.to_string()),
    }
}

// ─── JSON formatter ──────────────────────────────────────────────────────────

/// Run the JSON formatter over one input blob.
///
/// On success the output is the input re-serialized with two-space
/// indentation. On failure the output embeds the parser's diagnostic and
/// the copy action is disabled.
#[must_use]
pub fn json(input: &str) -> ToolOutput {
    match w_json::format(input) {
        Ok(pretty) => ToolOutput::copyable(pretty),
        Err(e) => ToolOutput::not_copyable(format!("Invalid JSON: {e}")),
    }
}

// ─── Copy affordance ─────────────────────────────────────────────────────────

/// Copy a tool result to the clipboard if its copy affordance is enabled.
///
/// Returns `Ok(true)` when a copy happened, `Ok(false)` when the output
/// is not copyable (the guard, not an error).
///
/// # Errors
///
/// Propagates clipboard failures; callers report them locally and move on.
pub fn copy_if_enabled(
    out: &ToolOutput,
    clip: &mut impl Clipboard,
) -> w_clip::Result<bool> {
    if !out.copyable {
        return Ok(false);
    }
    clip.copy(&out.text)?;
    Ok(true)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use w_clip::Sink;

    use super::*;

    // ── Contrast tool ───────────────────────────────────────────────

    #[test]
    fn white_on_black_passes() {
        let out = contrast("#FFFFFF, #000000");
        assert_eq!(out.text, "Contrast Ratio: 21.00:1 (Pass)");
        assert!(out.copyable);
    }

    #[test]
    fn same_gray_fails() {
        let out = contrast("#777777, #777777");
        assert_eq!(out.text, "Contrast Ratio: 1.00:1 (Fail)");
    }

    #[test]
    fn argument_order_does_not_matter() {
        assert_eq!(
            contrast("#123456, #fedcba").text,
            contrast("#fedcba, #123456").text
        );
    }

    #[test]
    fn whitespace_around_tokens_is_trimmed() {
        assert_eq!(
            contrast("  #FFFFFF ,#000000  ").text,
            "Contrast Ratio: 21.00:1 (Pass)"
        );
    }

    #[test]
    fn one_token_shows_usage() {
        let out = contrast("#FFFFFF");
        assert_eq!(out.text, CONTRAST_USAGE);
        assert!(out.copyable);
    }

    #[test]
    fn three_tokens_show_usage() {
        let out = contrast("#FFFFFF, #000000, #777777");
        assert_eq!(out.text, CONTRAST_USAGE);
    }

    #[test]
    fn empty_input_shows_usage_for_missing_comma() {
        assert_eq!(contrast("").text, CONTRAST_USAGE);
    }

    #[test]
    fn malformed_token_is_reported_and_not_copyable() {
        let out = contrast("#FFFFFF, #GGGGGG");
        assert!(out.text.contains("#GGGGGG"), "was: {}", out.text);
        assert!(!out.copyable);
    }

    // ── JSON tool ───────────────────────────────────────────────────

    #[test]
    fn valid_json_is_pretty_and_copyable() {
        let out = json(r#"{"a":1}"#);
        assert_eq!(out.text, "{\n  \"a\": 1\n}");
        assert!(out.copyable);
    }

    #[test]
    fn invalid_json_disables_copy() {
        let out = json("{bad}");
        assert!(out.text.starts_with("Invalid JSON: "), "was: {}", out.text);
        assert!(!out.copyable);
    }

    #[test]
    fn formatting_twice_is_stable() {
        let once = json(r#"{"a":[1,2,{"b":null}]}"#);
        let twice = json(&once.text);
        assert_eq!(once, twice);
    }

    // ── Copy gating ─────────────────────────────────────────────────

    #[test]
    fn copyable_output_reaches_the_clipboard() {
        let out = contrast("#FFFFFF, #000000");
        let mut clip = Sink::new();
        assert!(copy_if_enabled(&out, &mut clip).unwrap());
        assert_eq!(clip.last(), Some("Contrast Ratio: 21.00:1 (Pass)"));
    }

    #[test]
    fn non_copyable_output_never_reaches_the_clipboard() {
        let out = json("{bad}");
        let mut clip = Sink::new();
        assert!(!copy_if_enabled(&out, &mut clip).unwrap());
        assert_eq!(clip.copied(), &[] as &[String]);
    }
}
