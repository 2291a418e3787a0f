// OSC 52 clipboard writes.
//
// OSC 52 is the escape sequence that lets a program ask the terminal
// emulator to set the system clipboard:
//
//   ESC ] 52 ; c ; <base64 payload> BEL
//
// The `c` selection targets the clipboard proper (as opposed to the X11
// primary selection). Support is wide — xterm, kitty, alacritty, wezterm,
// iTerm2, tmux with `set-clipboard on` — and it composes over SSH, which
// no display-server clipboard API does. Terminals that don't support it
// ignore the sequence.
#![allow(unsafe_code)]

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::{Clipboard, Error, Result};

/// A clipboard that writes OSC 52 sequences to a terminal.
///
/// Generic over the writer so tests can capture the raw bytes; use
/// [`Osc52::stdout`] for the real thing.
pub struct Osc52<W: Write> {
    out: W,
}

impl Osc52<io::Stdout> {
    /// An OSC 52 clipboard over stdout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATty`] when stdout is not a terminal — sending
    /// escape sequences into a pipe would corrupt the data stream.
    pub fn stdout() -> Result<Self> {
        if stdout_is_tty() {
            Ok(Self { out: io::stdout() })
        } else {
            Err(Error::NotATty)
        }
    }
}

impl<W: Write> Osc52<W> {
    /// An OSC 52 clipboard over an arbitrary writer, no tty check.
    pub const fn to_writer(out: W) -> Self {
        Self { out }
    }

    /// Consume the clipboard, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52<W> {
    fn copy(&mut self, text: &str) -> Result<()> {
        let payload = STANDARD.encode(text);
        self.out.write_all(b"\x1b]52;c;")?;
        self.out.write_all(payload.as_bytes())?;
        self.out.write_all(b"\x07")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Whether stdout is attached to a terminal.
#[cfg(unix)]
#[must_use]
pub fn stdout_is_tty() -> bool {
    // Safe: isatty only inspects the fd.
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

/// Non-Unix fallback: assume a terminal.
#[cfg(not(unix))]
#[must_use]
pub fn stdout_is_tty() -> bool {
    true
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn copy_to_bytes(text: &str) -> Vec<u8> {
        let mut clip = Osc52::to_writer(Vec::new());
        clip.copy(text).unwrap();
        clip.into_inner()
    }

    #[test]
    fn wraps_payload_in_osc52_framing() {
        let bytes = copy_to_bytes("hello");
        assert!(bytes.starts_with(b"\x1b]52;c;"));
        assert!(bytes.ends_with(b"\x07"));
    }

    #[test]
    fn payload_is_base64_of_the_text() {
        let bytes = copy_to_bytes("Contrast Ratio: 21.00:1 (Pass)");
        let inner = &bytes[b"\x1b]52;c;".len()..bytes.len() - 1];
        let decoded = STANDARD.decode(inner).unwrap();
        assert_eq!(decoded, b"Contrast Ratio: 21.00:1 (Pass)");
    }

    #[test]
    fn empty_copy_produces_empty_payload() {
        let bytes = copy_to_bytes("");
        assert_eq!(bytes, b"\x1b]52;c;\x07");
    }

    #[test]
    fn consecutive_copies_append() {
        let mut clip = Osc52::to_writer(Vec::new());
        clip.copy("a").unwrap();
        clip.copy("b").unwrap();
        let bytes = clip.into_inner();
        assert_eq!(bytes.iter().filter(|&&b| b == 0x07).count(), 2);
    }
}
