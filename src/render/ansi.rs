//! ANSI escape primitives and escape-aware text measurement
//!
//! All color is emitted as CSI truecolor sequences. Layout decisions are
//! made on *visible* width, which ignores those sequences entirely.

/// The escape character that introduces a CSI sequence
pub const ESC: char = '\x1b';

/// Reset all attributes back to the terminal defaults
pub const RESET: &str = "\x1b[0m";

/// A 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Foreground escape: `ESC[38;2;R;G;Bm`
    #[must_use]
    pub fn fg(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.0, self.1, self.2)
    }

    /// Background escape: `ESC[48;2;R;G;Bm`
    #[must_use]
    pub fn bg(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.0, self.1, self.2)
    }
}

/// Count the characters of `text` a terminal would actually draw.
///
/// An escape sequence runs from `ESC` through every following
/// non-alphabetic character plus the terminating letter, and contributes
/// nothing. A sequence cut off by the end of the string is dropped.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == ESC {
            // Consumes the terminator too; stops quietly at end of input
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }

    width
}

/// Left-pad `content` so it sits centered against `reference_width`.
///
/// Uses floor division and never pads on the right. Content at least as
/// wide as the reference comes back unchanged.
#[must_use]
pub fn center_pad(content: &str, reference_width: usize) -> String {
    let offset = reference_width.saturating_sub(visible_width(content)) / 2;
    format!("{}{content}", " ".repeat(offset))
}
