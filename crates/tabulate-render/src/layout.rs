//! Column layout: per-column width and alignment resolved from grid data.
//!
//! Layout runs once per table. Alignment is resolved here, including the
//! decimal point position for numeric columns, so the renderer never has to
//! inspect a whole column again.
//!
//! # Example
//!
//! ```rust
//! use tabulate_render::{layout, Align, ColumnAlign, Grid, Gutter};
//!
//! let grid = Grid::build(vec![vec!["item", "price"], vec!["tea", "1.5"], vec!["cake", "12"]], true);
//! let columns = layout(&grid, &[], Gutter::none());
//!
//! assert_eq!(columns[0].width, 4);
//! assert_eq!(columns[0].align, ColumnAlign::Left);
//! assert!(columns[1].align.is_numeric());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, DecimalParts};
use crate::error::TableError;
use crate::grid::Grid;
use crate::width::{pad_center, pad_left, pad_right};

/// Requested alignment for a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on both sides.
    Center,
    /// Pad on the left.
    Right,
    /// Right-align with decimal points lined up.
    #[serde(alias = "decimal")]
    Numeric,
}

impl FromStr for Align {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Align::Left),
            "center" | "centre" | "c" => Ok(Align::Center),
            "right" | "r" => Ok(Align::Right),
            "numeric" | "decimal" | "n" => Ok(Align::Numeric),
            _ => Err(TableError::InvalidAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Numeric => "numeric",
        };
        f.write_str(name)
    }
}

/// Decimal point position shared by every numeric cell of a column.
///
/// `before` is the decimal point offset (widest integer part), `after` the
/// widest fraction including the point itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalLayout {
    pub before: usize,
    pub after: usize,
}

impl DecimalLayout {
    /// Width of the aligned number block.
    pub fn width(&self) -> usize {
        self.before + self.after
    }
}

/// Alignment after resolution, ready for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnAlign {
    Left,
    Center,
    Right,
    Numeric(DecimalLayout),
}

impl ColumnAlign {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnAlign::Numeric(_))
    }
}

/// Extra width added to every column.
///
/// Compensates for terminals that draw ambiguous-width characters wider
/// than `unicode-width` reports. Defaults to one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gutter {
    pub extra_width: usize,
}

impl Gutter {
    pub const DEFAULT_WIDTH: usize = 1;

    pub fn new(extra_width: usize) -> Self {
        Gutter { extra_width }
    }

    /// No compensation.
    pub fn none() -> Self {
        Gutter { extra_width: 0 }
    }
}

impl Default for Gutter {
    fn default() -> Self {
        Gutter::new(Self::DEFAULT_WIDTH)
    }
}

/// Alignment used for columns without an override, by detected type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeAlign {
    /// Columns whose non-empty body cells are all numbers.
    pub numeric: Align,
    /// Every other column.
    pub text: Align,
}

impl Default for TypeAlign {
    fn default() -> Self {
        TypeAlign {
            numeric: Align::Numeric,
            text: Align::Left,
        }
    }
}

/// Resolved layout for one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Content width in display columns, gutter included.
    pub width: usize,
    pub align: ColumnAlign,
}

impl ColumnSpec {
    /// Pads line `line` of `cell` to the column width.
    ///
    /// Lines past the end of the cell (in a row taller than the cell) come
    /// out as blank padding.
    pub fn align_cell(&self, cell: &Cell, line: usize, is_header: bool) -> String {
        match cell.lines().get(line) {
            Some(l) => self.align_text(l.text(), l.width(), cell.decimal(), is_header),
            None => " ".repeat(self.width),
        }
    }

    /// Pads a fragment of known display width to the column width.
    ///
    /// Numeric columns line up the decimal point of fragments with `decimal`
    /// parts and right-align everything else, header included.
    pub fn align_text(
        &self,
        text: &str,
        text_width: usize,
        decimal: Option<DecimalParts>,
        is_header: bool,
    ) -> String {
        match (self.align, decimal) {
            (ColumnAlign::Left, _) => pad_right(text, text_width, self.width),
            (ColumnAlign::Center, _) => pad_center(text, text_width, self.width),
            (ColumnAlign::Right, _) => pad_left(text, text_width, self.width),
            (ColumnAlign::Numeric(layout), Some(parts)) if !is_header => {
                let lead = layout.before.saturating_sub(parts.before);
                let trail = layout.after.saturating_sub(parts.after);
                let mut block = String::with_capacity(text.len() + lead + trail);
                block.extend(std::iter::repeat_n(' ', lead));
                block.push_str(text);
                block.extend(std::iter::repeat_n(' ', trail));
                pad_left(&block, text_width + lead + trail, self.width)
            }
            (ColumnAlign::Numeric(_), _) => pad_left(text, text_width, self.width),
        }
    }
}

/// Computes width and alignment for every column of `grid`.
///
/// Alignment for column `i` is `alignments[i]` when given, otherwise numeric
/// if every non-empty body cell is a number, otherwise left. The header never
/// takes part in numeric detection but always counts toward the width.
///
/// Pure: the same grid and configuration always give the same result. An
/// empty grid gives an empty layout.
pub fn layout(grid: &Grid, alignments: &[Align], gutter: Gutter) -> Vec<ColumnSpec> {
    layout_with(grid, alignments, TypeAlign::default(), gutter)
}

/// Like [`layout`], with the fallback alignment for numeric and text columns
/// taken from `defaults`.
pub fn layout_with(
    grid: &Grid,
    alignments: &[Align],
    defaults: TypeAlign,
    gutter: Gutter,
) -> Vec<ColumnSpec> {
    if grid.is_empty() {
        return Vec::new();
    }

    (0..grid.column_count())
        .map(|i| {
            let body: Vec<&Cell> = grid
                .body()
                .iter()
                .map(|row| &row.cells()[i])
                .collect();

            let requested = alignments.get(i).copied().unwrap_or_else(|| {
                if is_numeric_column(&body) {
                    defaults.numeric
                } else {
                    defaults.text
                }
            });
            let align = match requested {
                Align::Left => ColumnAlign::Left,
                Align::Center => ColumnAlign::Center,
                Align::Right => ColumnAlign::Right,
                Align::Numeric => ColumnAlign::Numeric(decimal_layout(&body)),
            };

            let content = grid.column(i).map(Cell::visual_width).max().unwrap_or(0);
            let block = match align {
                ColumnAlign::Numeric(layout) => layout.width(),
                _ => 0,
            };

            ColumnSpec {
                width: content.max(block) + gutter.extra_width,
                align,
            }
        })
        .collect()
}

fn is_numeric_column(body: &[&Cell]) -> bool {
    let mut filled = body.iter().filter(|cell| !cell.is_empty()).peekable();
    filled.peek().is_some() && filled.all(|cell| cell.is_numeric())
}

fn decimal_layout(body: &[&Cell]) -> DecimalLayout {
    body.iter()
        .filter_map(|cell| cell.decimal())
        .fold(DecimalLayout::default(), |acc, parts| DecimalLayout {
            before: acc.before.max(parts.before),
            after: acc.after.max(parts.after),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::{visual_width, WidthMode};

    fn aligned(spec: &ColumnSpec, text: &str, is_header: bool) -> String {
        spec.align_cell(&Cell::new(text, WidthMode::Standard), 0, is_header)
    }

    fn widths(columns: &[ColumnSpec]) -> Vec<usize> {
        columns.iter().map(|c| c.width).collect()
    }

    #[test]
    fn align_parses_tokens() {
        assert_eq!("left".parse::<Align>().unwrap(), Align::Left);
        assert_eq!("CENTER".parse::<Align>().unwrap(), Align::Center);
        assert_eq!(" r ".parse::<Align>().unwrap(), Align::Right);
        assert_eq!("decimal".parse::<Align>().unwrap(), Align::Numeric);
        assert_eq!(
            "diagonal".parse::<Align>(),
            Err(TableError::InvalidAlignment("diagonal".into()))
        );
    }

    #[test]
    fn align_display_round_trips() {
        for align in [Align::Left, Align::Center, Align::Right, Align::Numeric] {
            assert_eq!(align.to_string().parse::<Align>().unwrap(), align);
        }
    }

    #[test]
    fn width_is_max_cell_width() {
        let grid = Grid::build(vec![vec!["one", "two", "three"], vec!["a", "日本語", "x"]], true);
        let columns = layout(&grid, &[], Gutter::none());
        assert_eq!(widths(&columns), vec![3, 6, 5]);
    }

    #[test]
    fn gutter_adds_to_every_column() {
        let grid = Grid::build(vec![vec!["one", "two"], vec!["1", "22"]], false);
        let plain = layout(&grid, &[], Gutter::none());
        let wide = layout(&grid, &[], Gutter::new(2));
        for (a, b) in plain.iter().zip(&wide) {
            assert_eq!(b.width, a.width + 2);
        }
    }

    #[test]
    fn default_gutter_is_one() {
        assert_eq!(Gutter::default().extra_width, 1);
    }

    #[test]
    fn numeric_detected_excluding_header() {
        let grid = Grid::build(vec![vec!["name", "qty"], vec!["a", "1"], vec!["b", "2.5"]], true);
        let columns = layout(&grid, &[], Gutter::none());
        assert_eq!(columns[0].align, ColumnAlign::Left);
        assert_eq!(
            columns[1].align,
            ColumnAlign::Numeric(DecimalLayout { before: 1, after: 2 })
        );
    }

    #[test]
    fn empty_cells_do_not_block_numeric() {
        let grid = Grid::build(vec![vec!["1"], vec![""], vec!["3"]], false);
        let columns = layout(&grid, &[], Gutter::none());
        assert!(columns[0].align.is_numeric());
    }

    #[test]
    fn all_empty_column_is_left() {
        let grid = Grid::build(vec![vec!["a", ""], vec!["b", ""]], false);
        let columns = layout(&grid, &[], Gutter::none());
        assert_eq!(columns[1].align, ColumnAlign::Left);
    }

    #[test]
    fn mixed_column_is_left() {
        let grid = Grid::build(vec![vec!["1"], vec!["two"]], false);
        let columns = layout(&grid, &[], Gutter::none());
        assert_eq!(columns[0].align, ColumnAlign::Left);
    }

    #[test]
    fn override_beats_detection() {
        let grid = Grid::build(vec![vec!["1", "x"], vec!["2", "y"]], false);
        let columns = layout(&grid, &[Align::Center], Gutter::none());
        assert_eq!(columns[0].align, ColumnAlign::Center);
        // No override for column 1: falls back to detection.
        assert_eq!(columns[1].align, ColumnAlign::Left);
    }

    #[test]
    fn type_defaults_apply_without_override() {
        let grid = Grid::build(vec![vec!["name", "qty"], vec!["tea", "1.5"], vec!["cake", "12"]], true);
        let defaults = TypeAlign {
            numeric: Align::Right,
            text: Align::Center,
        };
        let columns = layout_with(&grid, &[], defaults, Gutter::none());
        assert_eq!(columns[0].align, ColumnAlign::Center);
        assert_eq!(columns[1].align, ColumnAlign::Right);
        assert_eq!(columns[1].width, 3);
        assert_eq!(aligned(&columns[1], "12", false), " 12");

        // Overrides still win over the type defaults.
        let columns = layout_with(&grid, &[Align::Left, Align::Numeric], defaults, Gutter::none());
        assert_eq!(columns[0].align, ColumnAlign::Left);
        assert!(columns[1].align.is_numeric());
    }

    #[test]
    fn default_type_align_matches_layout() {
        let grid = Grid::build(vec![vec!["a", "1.5"], vec!["b", "-2"]], false);
        assert_eq!(
            layout_with(&grid, &[], TypeAlign::default(), Gutter::default()),
            layout(&grid, &[], Gutter::default())
        );
    }

    #[test]
    fn all_empty_column_uses_text_default() {
        let grid = Grid::build(vec![vec!["1", ""], vec!["2", ""]], false);
        let defaults = TypeAlign {
            numeric: Align::Numeric,
            text: Align::Right,
        };
        let columns = layout_with(&grid, &[], defaults, Gutter::none());
        assert!(columns[0].align.is_numeric());
        assert_eq!(columns[1].align, ColumnAlign::Right);
    }

    #[test]
    fn decimal_block_widens_column() {
        let grid = Grid::build(vec![vec!["1.5"], vec!["23.75"], vec!["100"]], false);
        let columns = layout(&grid, &[], Gutter::none());
        assert_eq!(
            columns[0].align,
            ColumnAlign::Numeric(DecimalLayout { before: 3, after: 3 })
        );
        assert_eq!(columns[0].width, 6);
    }

    #[test]
    fn decimal_points_line_up() {
        let grid = Grid::build(vec![vec!["1.5"], vec!["23.75"], vec!["100"]], false);
        let columns = layout(&grid, &[], Gutter::none());
        let spec = columns[0];
        let out: Vec<String> = ["1.5", "23.75", "100"]
            .iter()
            .map(|s| aligned(&spec, s, false))
            .collect();
        assert_eq!(out, vec!["  1.5 ", " 23.75", "100   "]);
        // Every rendered decimal point (or the implied one) sits at offset 3.
        assert_eq!(out[0].find('.'), Some(3));
        assert_eq!(out[1].find('.'), Some(3));
        assert_eq!(out[2].trim_end().len(), 3);
    }

    #[test]
    fn numeric_header_right_aligned() {
        let grid = Grid::build(vec![vec!["amount"], vec!["1.5"], vec!["10"]], true);
        let spec = layout(&grid, &[], Gutter::none())[0];
        assert_eq!(spec.width, 6);
        assert_eq!(aligned(&spec, "amount", true), "amount");
        assert_eq!(aligned(&spec, "1.5", false), "   1.5");
        assert_eq!(aligned(&spec, "10", false), "  10  ");
    }

    #[test]
    fn numeric_override_keeps_text_right_aligned() {
        let grid = Grid::build(vec![vec!["n/a"], vec!["1.25"]], false);
        let spec = layout(&grid, &[Align::Numeric], Gutter::none())[0];
        assert_eq!(aligned(&spec, "n/a", false), " n/a");
        assert_eq!(aligned(&spec, "1.25", false), "1.25");
    }

    #[test]
    fn numeric_alignment_with_ansi() {
        let grid = Grid::build(vec![vec!["\x1b[31m1.5\x1b[0m"], vec!["22.25"]], false);
        let spec = layout(&grid, &[], Gutter::none())[0];
        let red = "\x1b[31m1.5\x1b[0m";
        let out = aligned(&spec, red, false);
        assert_eq!(out, format!(" {} ", red));
        assert_eq!(visual_width(&out), spec.width);
    }

    #[test]
    fn multi_line_numbers_are_not_decimal_aligned() {
        let grid = Grid::build(vec![vec!["1.25"], vec!["1234\n5"]], false);
        let spec = layout(&grid, &[Align::Numeric], Gutter::none())[0];
        let tall = Cell::new("1234\n5", WidthMode::Standard);
        assert_eq!(spec.width, 4);
        assert_eq!(spec.align_cell(&tall, 0, false), "1234");
        assert_eq!(spec.align_cell(&tall, 1, false), "   5");
        assert_eq!(spec.align_cell(&tall, 2, false), "    ");
    }

    #[test]
    fn empty_grid_has_no_columns() {
        let rows: Vec<Vec<&str>> = vec![];
        let grid = Grid::build(rows, false);
        assert!(layout(&grid, &[Align::Right], Gutter::default()).is_empty());
    }

    #[test]
    fn layout_is_idempotent() {
        let grid = Grid::build(vec![vec!["h", "n"], vec!["x", "1.5"], vec!["日本", "-3"]], true);
        let first = layout(&grid, &[Align::Left], Gutter::new(1));
        let second = layout(&grid, &[Align::Left], Gutter::new(1));
        assert_eq!(first, second);
    }

    #[test]
    fn align_deserializes_lowercase() {
        let aligns: Vec<Align> = serde_json::from_str(r#"["left", "numeric", "decimal"]"#).unwrap();
        assert_eq!(aligns, vec![Align::Left, Align::Numeric, Align::Numeric]);

        let defaults: TypeAlign = serde_json::from_str(r#"{"numeric": "right"}"#).unwrap();
        assert_eq!(defaults.numeric, Align::Right);
        assert_eq!(defaults.text, Align::Left);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn every_cell_fits_its_column(
            rows in prop::collection::vec(
                prop::collection::vec("([a-z\u{4e00}-\u{4fff}]{0,5}|-?[0-9]{1,4}(\\.[0-9]{1,3})?)", 1..5),
                1..8,
            ),
            header in any::<bool>(),
            gutter in 0usize..3,
        ) {
            let grid = Grid::build(rows, header);
            let columns = layout(&grid, &[], Gutter::new(gutter));
            prop_assert_eq!(columns.len(), grid.column_count());
            for row in grid.rows() {
                for (cell, spec) in row.cells().iter().zip(&columns) {
                    prop_assert!(cell.visual_width() <= spec.width);
                    for line in 0..row.height() {
                        let padded = spec.align_cell(cell, line, row.is_header());
                        prop_assert_eq!(crate::width::visual_width(&padded), spec.width);
                    }
                }
            }
        }
    }
}
