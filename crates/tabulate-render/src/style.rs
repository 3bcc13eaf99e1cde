//! Named border styles.
//!
//! A [`StyleTemplate`] is an immutable description of the glyphs that frame a
//! table. Templates live in a fixed, static registry and are looked up by
//! name with [`resolve`]. Adding a style means adding an entry to the
//! registry; templates are never modified at runtime.
//!
//! ```rust
//! use tabulate_render::style;
//!
//! let rounded = style::resolve("rounded_outline").unwrap();
//! assert_eq!(rounded.line_above.unwrap().begin, "╭");
//! assert!(style::resolve("not_a_style").is_err());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::TableError;

/// A horizontal rule: `begin`, then `fill` repeated across each column,
/// `sep` at column boundaries, and `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub begin: &'static str,
    pub fill: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

/// Glyphs framing the cells of a content row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowGlyphs {
    pub begin: &'static str,
    pub sep: &'static str,
    pub end: &'static str,
}

/// Identifies one of the four horizontal rules of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Above,
    BelowHeader,
    BetweenRows,
    Below,
}

/// Border and spacing description for a named table style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyleTemplate {
    pub name: &'static str,
    /// Top border.
    pub line_above: Option<Rule>,
    /// Separator under the header row.
    pub line_below_header: Option<Rule>,
    /// Separator between consecutive body rows.
    pub line_between_rows: Option<Rule>,
    /// Bottom border.
    pub line_below: Option<Rule>,
    pub header_row: RowGlyphs,
    pub data_row: RowGlyphs,
    /// Spaces on each side of every cell.
    pub padding: usize,
    /// Mark column alignment with colons in the header rule (`:---`, `---:`).
    pub alignment_markers: bool,
    /// Rules not drawn when the table has a header.
    pub hide_with_header: &'static [RuleKind],
    /// Rules not drawn when the table has no header.
    pub hide_without_header: &'static [RuleKind],
}

impl StyleTemplate {
    /// Looks up a template by name. Same as [`resolve`].
    pub fn resolve(name: &str) -> Result<&'static StyleTemplate, TableError> {
        resolve(name)
    }

    /// Returns `rule` unless the template hides it for this header state.
    pub fn rule(&self, kind: RuleKind, has_header: bool) -> Option<Rule> {
        let hidden = if has_header {
            self.hide_with_header
        } else {
            self.hide_without_header
        };
        if hidden.contains(&kind) {
            return None;
        }
        match kind {
            RuleKind::Above => self.line_above,
            RuleKind::BelowHeader => self.line_below_header,
            RuleKind::BetweenRows => self.line_between_rows,
            RuleKind::Below => self.line_below,
        }
    }

    /// True if a separator is drawn under the header row.
    pub fn separates_header(&self) -> bool {
        self.rule(RuleKind::BelowHeader, true).is_some()
    }
}

const fn rule(begin: &'static str, fill: &'static str, sep: &'static str, end: &'static str) -> Rule {
    Rule {
        begin,
        fill,
        sep,
        end,
    }
}

const fn row(begin: &'static str, sep: &'static str, end: &'static str) -> RowGlyphs {
    RowGlyphs { begin, sep, end }
}

const BARE: RowGlyphs = row("", "  ", "");
const ASCII_ROW: RowGlyphs = row("|", "|", "|");
const LIGHT_ROW: RowGlyphs = row("│", "│", "│");
const HEAVY_ROW: RowGlyphs = row("┃", "┃", "┃");
const DOUBLE_ROW: RowGlyphs = row("║", "║", "║");

const NO_HIDE: &[RuleKind] = &[];
const HEADERLESS: &[RuleKind] = &[RuleKind::BelowHeader];

/// Builds a framed template with a shared row glyph set and padding 1.
const fn framed(
    name: &'static str,
    above: Rule,
    below_header: Rule,
    between: Option<Rule>,
    below: Rule,
    rows: RowGlyphs,
) -> StyleTemplate {
    StyleTemplate {
        name,
        line_above: Some(above),
        line_below_header: Some(below_header),
        line_between_rows: between,
        line_below: Some(below),
        header_row: rows,
        data_row: rows,
        padding: 1,
        alignment_markers: false,
        hide_with_header: NO_HIDE,
        hide_without_header: HEADERLESS,
    }
}

static STYLES: [StyleTemplate; 14] = [
    StyleTemplate {
        name: "plain",
        line_above: None,
        line_below_header: None,
        line_between_rows: None,
        line_below: None,
        header_row: BARE,
        data_row: BARE,
        padding: 0,
        alignment_markers: false,
        hide_with_header: NO_HIDE,
        hide_without_header: NO_HIDE,
    },
    StyleTemplate {
        name: "simple",
        line_above: None,
        line_below_header: Some(rule("", "-", "  ", "")),
        line_between_rows: None,
        line_below: Some(rule("", "-", "  ", "")),
        header_row: BARE,
        data_row: BARE,
        padding: 0,
        alignment_markers: false,
        hide_with_header: &[RuleKind::Below],
        hide_without_header: NO_HIDE,
    },
    framed(
        "grid",
        rule("+", "-", "+", "+"),
        rule("+", "=", "+", "+"),
        Some(rule("+", "-", "+", "+")),
        rule("+", "-", "+", "+"),
        ASCII_ROW,
    ),
    StyleTemplate {
        name: "pipe",
        line_above: None,
        line_below_header: Some(rule("|", "-", "|", "|")),
        line_between_rows: None,
        line_below: None,
        header_row: ASCII_ROW,
        data_row: ASCII_ROW,
        padding: 1,
        alignment_markers: true,
        hide_with_header: NO_HIDE,
        hide_without_header: NO_HIDE,
    },
    StyleTemplate {
        name: "github",
        line_above: None,
        line_below_header: Some(rule("|", "-", "|", "|")),
        line_between_rows: None,
        line_below: None,
        header_row: ASCII_ROW,
        data_row: ASCII_ROW,
        padding: 1,
        alignment_markers: false,
        hide_with_header: NO_HIDE,
        hide_without_header: HEADERLESS,
    },
    StyleTemplate {
        name: "orgtbl",
        line_above: None,
        line_below_header: Some(rule("|", "-", "+", "|")),
        line_between_rows: None,
        line_below: None,
        header_row: ASCII_ROW,
        data_row: ASCII_ROW,
        padding: 1,
        alignment_markers: false,
        hide_with_header: NO_HIDE,
        hide_without_header: HEADERLESS,
    },
    framed(
        "psql",
        rule("+", "-", "+", "+"),
        rule("|", "-", "+", "|"),
        None,
        rule("+", "-", "+", "+"),
        ASCII_ROW,
    ),
    framed(
        "simple_outline",
        rule("┌", "─", "┬", "┐"),
        rule("├", "─", "┼", "┤"),
        None,
        rule("└", "─", "┴", "┘"),
        LIGHT_ROW,
    ),
    framed(
        "rounded_outline",
        rule("╭", "─", "┬", "╮"),
        rule("├", "─", "┼", "┤"),
        None,
        rule("╰", "─", "┴", "╯"),
        LIGHT_ROW,
    ),
    framed(
        "heavy_outline",
        rule("┏", "━", "┳", "┓"),
        rule("┣", "━", "╋", "┫"),
        None,
        rule("┗", "━", "┻", "┛"),
        HEAVY_ROW,
    ),
    framed(
        "double_outline",
        rule("╔", "═", "╦", "╗"),
        rule("╠", "═", "╬", "╣"),
        None,
        rule("╚", "═", "╩", "╝"),
        DOUBLE_ROW,
    ),
    framed(
        "simple_grid",
        rule("┌", "─", "┬", "┐"),
        rule("├", "─", "┼", "┤"),
        Some(rule("├", "─", "┼", "┤")),
        rule("└", "─", "┴", "┘"),
        LIGHT_ROW,
    ),
    framed(
        "rounded_grid",
        rule("╭", "─", "┬", "╮"),
        rule("├", "─", "┼", "┤"),
        Some(rule("├", "─", "┼", "┤")),
        rule("╰", "─", "┴", "╯"),
        LIGHT_ROW,
    ),
    framed(
        "fancy_grid",
        rule("╒", "═", "╤", "╕"),
        rule("╞", "═", "╪", "╡"),
        Some(rule("├", "─", "┼", "┤")),
        rule("╘", "═", "╧", "╛"),
        LIGHT_ROW,
    ),
];

static INDEX: Lazy<HashMap<&'static str, &'static StyleTemplate>> =
    Lazy::new(|| STYLES.iter().map(|style| (style.name, style)).collect());

/// Looks up a style template by name.
///
/// # Errors
///
/// Returns [`TableError::UnknownStyle`] if no template has that name.
pub fn resolve(name: &str) -> Result<&'static StyleTemplate, TableError> {
    INDEX
        .get(name)
        .copied()
        .ok_or_else(|| TableError::UnknownStyle(name.to_string()))
}

/// Names of all registered styles, in registry order.
pub fn style_names() -> impl Iterator<Item = &'static str> {
    STYLES.iter().map(|style| style.name)
}
