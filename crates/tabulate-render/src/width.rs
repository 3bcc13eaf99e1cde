//! Display width measurement and padding for terminal text.
//!
//! All functions in this module understand ANSI escape sequences: they are
//! preserved in output but never count toward the display width. Printable
//! text is measured with `unicode-width`, so CJK and other wide glyphs take
//! two columns and combining marks take none.
//!
//! # Example
//!
//! ```rust
//! use tabulate_render::width::{visual_width, pad_right};
//!
//! assert_eq!(visual_width("hello"), 5);
//! assert_eq!(visual_width("\x1b[31mred\x1b[0m"), 3);
//! assert_eq!(visual_width("日本"), 4);
//!
//! assert_eq!(pad_right("日本", 4, 6), "日本  ");
//! ```

use console::AnsiCodeIterator;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// How East-Asian "Ambiguous" characters are measured.
///
/// Terminals disagree on these (`…`, `±`, Greek and Cyrillic letters in some
/// fonts). Western terminals draw them one column wide, CJK-locale terminals
/// two columns wide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthMode {
    /// Ambiguous characters are one column wide.
    #[default]
    Standard,
    /// Ambiguous characters are two columns wide.
    AmbiguousWide,
}

impl WidthMode {
    /// Returns the display width of `text` under this mode, ignoring ANSI
    /// escape sequences.
    ///
    /// Escape detection is `console`'s; an ESC that does not start a complete
    /// sequence is measured as ordinary text.
    pub fn measure(self, text: &str) -> usize {
        AnsiCodeIterator::new(text)
            .filter(|(_, is_ansi)| !is_ansi)
            .map(|(piece, _)| self.measure_plain(piece))
            .sum()
    }

    fn measure_plain(self, text: &str) -> usize {
        match self {
            WidthMode::Standard => text.width(),
            WidthMode::AmbiguousWide => text.width_cjk(),
        }
    }
}

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// Equivalent to `WidthMode::Standard.measure(text)`.
pub fn visual_width(text: &str) -> usize {
    WidthMode::Standard.measure(text)
}

/// Removes every recognized ANSI escape sequence from `text`.
///
/// Incomplete sequences are kept, since they are treated as literal text.
pub fn strip_ansi(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

/// Pads a fragment on the left (right-aligns) to reach `width` columns.
///
/// `text_width` is the already-measured display width of `text`. Content
/// wider than `width` is returned unchanged.
pub fn pad_left(text: &str, text_width: usize, width: usize) -> String {
    let fill = width.saturating_sub(text_width);
    let mut out = String::with_capacity(text.len() + fill);
    out.extend(std::iter::repeat_n(' ', fill));
    out.push_str(text);
    out
}

/// Pads a fragment on the right (left-aligns) to reach `width` columns.
pub fn pad_right(text: &str, text_width: usize, width: usize) -> String {
    let fill = width.saturating_sub(text_width);
    let mut out = String::with_capacity(text.len() + fill);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Pads a fragment on both sides (centers) to reach `width` columns.
///
/// When the remaining space is odd, the extra space goes on the right.
pub fn pad_center(text: &str, text_width: usize, width: usize) -> String {
    let fill = width.saturating_sub(text_width);
    let left = fill / 2;
    let right = fill - left;
    let mut out = String::with_capacity(text.len() + fill);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
