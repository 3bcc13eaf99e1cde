//! Drawing a laid-out grid with a style template.

use crate::grid::{Grid, Row};
use crate::layout::{ColumnAlign, ColumnSpec};
use crate::style::{RowGlyphs, Rule, RuleKind, StyleTemplate};

/// Renders `grid` with the given column layout and style.
///
/// Emits, in order: the line above, the header row, the header rule, body
/// rows (with the between-rows rule when the style has one), and the line
/// below. Lines are joined with `\n`; there is no trailing newline. A grid
/// with no columns renders as an empty string.
///
/// When the grid has no header but the style still draws its header rule
/// (`simple`, `pipe`), that rule is emitted where the header would have
/// been, acting as the top line of the table.
pub fn render(grid: &Grid, columns: &[ColumnSpec], style: &StyleTemplate) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let has_header = grid.has_header();
    let mut lines = Vec::new();

    if let Some(rule) = style.rule(RuleKind::Above, has_header) {
        lines.push(rule_line(&rule, columns, style.padding, false));
    }

    if let Some(header) = grid.header() {
        push_row(&mut lines, header, columns, style, &style.header_row);
    }

    if let Some(rule) = style.rule(RuleKind::BelowHeader, has_header) {
        lines.push(rule_line(&rule, columns, style.padding, style.alignment_markers));
    }

    let between = style
        .rule(RuleKind::BetweenRows, has_header)
        .map(|rule| rule_line(&rule, columns, style.padding, false));

    for (i, row) in grid.body().iter().enumerate() {
        if i > 0 {
            if let Some(ref sep) = between {
                lines.push(sep.clone());
            }
        }
        push_row(&mut lines, row, columns, style, &style.data_row);
    }

    if let Some(rule) = style.rule(RuleKind::Below, has_header) {
        lines.push(rule_line(&rule, columns, style.padding, false));
    }

    lines.join("\n")
}

/// Appends one output line per line of row height.
fn push_row(
    lines: &mut Vec<String>,
    row: &Row,
    columns: &[ColumnSpec],
    style: &StyleTemplate,
    glyphs: &RowGlyphs,
) {
    let pad = " ".repeat(style.padding);
    for line in 0..row.height() {
        let cells: Vec<String> = row
            .cells()
            .iter()
            .zip(columns)
            .map(|(cell, column)| {
                format!("{pad}{}{pad}", column.align_cell(cell, line, row.is_header()))
            })
            .collect();
        lines.push(format!("{}{}{}", glyphs.begin, cells.join(glyphs.sep), glyphs.end));
    }
}

/// Builds a horizontal rule sized to the column widths.
fn rule_line(rule: &Rule, columns: &[ColumnSpec], padding: usize, markers: bool) -> String {
    let segments: Vec<String> = columns
        .iter()
        .map(|column| {
            let width = column.width + 2 * padding;
            if markers {
                marked_segment(rule.fill, width, column.align)
            } else {
                rule.fill.repeat(width)
            }
        })
        .collect();
    format!("{}{}{}", rule.begin, segments.join(rule.sep), rule.end)
}

/// A rule segment with colons marking the column alignment.
fn marked_segment(fill: &str, width: usize, align: ColumnAlign) -> String {
    match align {
        ColumnAlign::Left => format!(":{}", fill.repeat(width.saturating_sub(1))),
        ColumnAlign::Right | ColumnAlign::Numeric(_) => {
            format!("{}:", fill.repeat(width.saturating_sub(1)))
        }
        ColumnAlign::Center => format!(":{}:", fill.repeat(width.saturating_sub(2))),
    }
}
