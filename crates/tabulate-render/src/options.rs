//! One-call rendering with a bundle of options.
//!
//! [`TableOptions`] collects everything the pipeline needs (style name,
//! header flag, gutter, alignment overrides and per-type defaults, width mode) and [`tabulate`] runs
//! grid building, layout and rendering in one go.
//!
//! ```rust
//! use tabulate_render::{tabulate, TableOptions};
//!
//! let opts = TableOptions::default().style("plain").gutter(0);
//! let out = tabulate(vec![vec!["a", "1"], vec!["bb", "22"]], &opts).unwrap();
//! assert_eq!(out, "a    1\nbb  22");
//! ```

use serde::Deserialize;

use crate::error::TableError;
use crate::grid::Grid;
use crate::layout::{layout_with, Align, Gutter, TypeAlign};
use crate::render::render;
use crate::style::{self, StyleTemplate};
use crate::width::WidthMode;

/// Name of the style used when none is configured.
pub const DEFAULT_STYLE: &str = "rounded_outline";

/// Rendering options.
///
/// Deserializes from any serde format with every field optional:
///
/// ```yaml
/// style: fancy_grid
/// header: true
/// gutter_width: 0
/// alignments: [left, numeric]
/// numalign: right
/// stralign: left
/// width_mode: ambiguous_wide
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub style: String,
    pub header: bool,
    pub gutter_width: usize,
    pub alignments: Vec<Align>,
    /// Alignment of numeric columns without an override.
    pub numalign: Align,
    /// Alignment of non-numeric columns without an override.
    pub stralign: Align,
    pub width_mode: WidthMode,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            style: DEFAULT_STYLE.to_string(),
            header: false,
            gutter_width: Gutter::DEFAULT_WIDTH,
            alignments: Vec::new(),
            numalign: Align::Numeric,
            stralign: Align::Left,
            width_mode: WidthMode::Standard,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = name.into();
        self
    }

    /// Treat the first row as a header.
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Extra width added to every column.
    pub fn gutter(mut self, extra_width: usize) -> Self {
        self.gutter_width = extra_width;
        self
    }

    /// Per-column alignment overrides, by column index.
    pub fn alignments(mut self, alignments: impl IntoIterator<Item = Align>) -> Self {
        self.alignments = alignments.into_iter().collect();
        self
    }

    pub fn numalign(mut self, align: Align) -> Self {
        self.numalign = align;
        self
    }

    pub fn stralign(mut self, align: Align) -> Self {
        self.stralign = align;
        self
    }

    pub fn width_mode(mut self, mode: WidthMode) -> Self {
        self.width_mode = mode;
        self
    }

    /// Looks up the configured style.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownStyle`] if the name is not registered.
    pub fn template(&self) -> Result<&'static StyleTemplate, TableError> {
        style::resolve(&self.style)
    }

    /// Renders rows of text.
    pub fn render<R, S>(&self, rows: impl IntoIterator<Item = R>) -> Result<String, TableError>
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let template = self.template()?;
        let grid = Grid::build_with(rows, self.header, self.width_mode);
        Ok(self.draw(&grid, template))
    }

    /// Renders rows of undecoded fields.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownStyle`] for an unregistered style (checked first)
    /// and [`TableError::MalformedInput`] for a field that is not UTF-8.
    pub fn render_bytes<R, B>(&self, rows: impl IntoIterator<Item = R>) -> Result<String, TableError>
    where
        R: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let template = self.template()?;
        let grid = Grid::try_from_bytes(rows, self.header, self.width_mode)?;
        Ok(self.draw(&grid, template))
    }

    fn draw(&self, grid: &Grid, template: &StyleTemplate) -> String {
        let defaults = TypeAlign {
            numeric: self.numalign,
            text: self.stralign,
        };
        let columns = layout_with(grid, &self.alignments, defaults, Gutter::new(self.gutter_width));
        render(grid, &columns, template)
    }
}

/// Renders `rows` as a table.
///
/// # Errors
///
/// [`TableError::UnknownStyle`] if `options.style` is not registered. The
/// style is resolved before the grid is built, so nothing is produced.
pub fn tabulate<R, S>(rows: impl IntoIterator<Item = R>, options: &TableOptions) -> Result<String, TableError>
where
    R: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    options.render(rows)
}
