//! The cell model: a raw value plus everything layout needs to know about it.

use crate::width::{strip_ansi, WidthMode};

/// One line of a cell, with its display width already measured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    text: String,
    width: usize,
}

impl Line {
    fn new(text: &str, mode: WidthMode) -> Self {
        Line {
            text: text.to_string(),
            width: mode.measure(text),
        }
    }

    /// The line text, escapes included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width of the line.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Where the decimal point of a numeric cell falls.
///
/// `before` is the display width of everything ahead of the point, `after`
/// the width from the point to the end. Numbers without a point (or an
/// exponent) have `after == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalParts {
    pub before: usize,
    pub after: usize,
}

impl DecimalParts {
    /// Splits a number at its last `.`, falling back to its exponent marker.
    pub fn of(number: &str) -> Self {
        let split = number
            .rfind('.')
            .or_else(|| number.rfind(['e', 'E']));
        match split {
            Some(pos) => DecimalParts {
                before: pos,
                after: number.len() - pos,
            },
            None => DecimalParts {
                before: number.len(),
                after: 0,
            },
        }
    }
}

/// A single table cell.
///
/// Built once from raw input and never mutated. The raw text is split on
/// `\n` (a trailing `\r` is dropped from each line) and every line is
/// measured independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    raw: String,
    lines: Vec<Line>,
    visual_width: usize,
    decimal: Option<DecimalParts>,
}

impl Cell {
    /// Creates a cell from raw text, measuring it with `mode`.
    pub fn new(raw: impl Into<String>, mode: WidthMode) -> Self {
        let raw = raw.into();
        let lines: Vec<Line> = raw
            .split('\n')
            .map(|l| Line::new(l.strip_suffix('\r').unwrap_or(l), mode))
            .collect();
        let visual_width = lines.iter().map(Line::width).max().unwrap_or(0);

        let decimal = if let [only] = lines.as_slice() {
            let plain = strip_ansi(only.text());
            is_number(&plain).then(|| DecimalParts::of(&plain))
        } else {
            None
        };

        Cell {
            raw,
            lines,
            visual_width,
            decimal,
        }
    }

    /// An empty cell, used to pad short rows.
    pub fn empty() -> Self {
        Cell::new("", WidthMode::Standard)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Widest line of the cell, in display columns.
    pub fn visual_width(&self) -> usize {
        self.visual_width
    }

    /// True if the cell text (with ANSI escapes removed) is a number.
    pub fn is_numeric(&self) -> bool {
        self.decimal.is_some()
    }

    /// Decimal point position for numeric cells.
    pub fn decimal(&self) -> Option<DecimalParts> {
        self.decimal
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of output lines this cell needs.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

/// Returns true if `s` is a decimal number.
///
/// Accepted: an optional sign, digits with at most one decimal point (at
/// least one digit overall), and an optional exponent (`1e5`, `2.5E-3`).
/// Whitespace, `inf` and `nan` are rejected.
///
/// ```rust
/// use tabulate_render::cell::is_number;
///
/// assert!(is_number("123.45"));
/// assert!(is_number("-1"));
/// assert!(is_number("1e+234"));
/// assert!(!is_number("spam"));
/// assert!(!is_number("1.2.3"));
/// ```
pub fn is_number(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_accepted() {
        for s in ["0", "123", "-56", "+7", "1.5", "23.75", ".5", "5.", "1e5", "1.0e234", "-2E-3"] {
            assert!(is_number(s), "{s} should be numeric");
        }
    }

    #[test]
    fn numbers_rejected() {
        for s in ["", "-", ".", "spam", "1.2.3", "1e", "e5", " 1", "1 ", "inf", "nan", "1,5", "--1"] {
            assert!(!is_number(s), "{s:?} should not be numeric");
        }
    }

    #[test]
    fn decimal_parts() {
        assert_eq!(DecimalParts::of("23.75"), DecimalParts { before: 2, after: 3 });
        assert_eq!(DecimalParts::of("100"), DecimalParts { before: 3, after: 0 });
        assert_eq!(DecimalParts::of("-1234.5"), DecimalParts { before: 5, after: 2 });
        assert_eq!(DecimalParts::of("1e+234"), DecimalParts { before: 1, after: 5 });
        assert_eq!(DecimalParts::of("1.0e234"), DecimalParts { before: 1, after: 6 });
    }

    #[test]
    fn single_line_cell() {
        let cell = Cell::new("hello", WidthMode::Standard);
        assert_eq!(cell.raw(), "hello");
        assert_eq!(cell.visual_width(), 5);
        assert_eq!(cell.height(), 1);
        assert!(!cell.is_numeric());
    }

    #[test]
    fn multi_line_cell() {
        let cell = Cell::new("a\nlonger\r\nmid", WidthMode::Standard);
        assert_eq!(cell.height(), 3);
        assert_eq!(cell.visual_width(), 6);
        let texts: Vec<&str> = cell.lines().iter().map(Line::text).collect();
        assert_eq!(texts, vec!["a", "longer", "mid"]);
        assert!(!cell.is_numeric());
    }

    #[test]
    fn width_is_max_line_width() {
        let cell = Cell::new("日本\nabc", WidthMode::Standard);
        let max = cell.lines().iter().map(Line::width).max().unwrap();
        assert_eq!(cell.visual_width(), max);
        assert_eq!(cell.visual_width(), 4);
    }

    #[test]
    fn numeric_detection_ignores_ansi() {
        let cell = Cell::new("\x1b[32m-1.25\x1b[0m", WidthMode::Standard);
        assert!(cell.is_numeric());
        assert_eq!(cell.visual_width(), 5);
        assert_eq!(cell.decimal(), Some(DecimalParts { before: 2, after: 3 }));
    }

    #[test]
    fn empty_cell() {
        let cell = Cell::empty();
        assert!(cell.is_empty());
        assert_eq!(cell.height(), 1);
        assert_eq!(cell.visual_width(), 0);
        assert!(!cell.is_numeric());
    }
}
