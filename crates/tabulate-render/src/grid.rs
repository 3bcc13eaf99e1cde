//! Building a rectangular grid of cells from ragged input rows.

use crate::cell::Cell;
use crate::error::TableError;
use crate::width::WidthMode;

/// One row of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
    header: bool,
}

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True for the header row.
    pub fn is_header(&self) -> bool {
        self.header
    }

    /// Number of output lines the row occupies (its tallest cell).
    pub fn height(&self) -> usize {
        self.cells.iter().map(Cell::height).max().unwrap_or(1)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A rectangular table of cells.
///
/// Every row holds exactly [`column_count`](Grid::column_count) cells; short
/// input rows are padded with empty cells. When a header is present it is
/// always row 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    column_count: usize,
}

impl Grid {
    /// Builds a grid measuring cells in [`WidthMode::Standard`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use tabulate_render::Grid;
    ///
    /// let grid = Grid::build(vec![vec!["name", "qty"], vec!["apples"]], true);
    /// assert_eq!(grid.column_count(), 2);
    /// assert!(grid.header().is_some());
    /// assert_eq!(grid.body()[0].cells()[1].raw(), "");
    /// ```
    pub fn build<R, S>(rows: impl IntoIterator<Item = R>, header: bool) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(rows, header, WidthMode::Standard)
    }

    /// Builds a grid measuring cells with the given width mode.
    pub fn build_with<R, S>(rows: impl IntoIterator<Item = R>, header: bool, mode: WidthMode) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| Cell::new(value.as_ref(), mode))
                    .collect()
            })
            .collect();
        Self::from_cells(raw, header)
    }

    /// Builds a grid from undecoded byte fields.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MalformedInput`] naming the first field (1-based
    /// row and field numbers) that is not valid UTF-8.
    pub fn try_from_bytes<R, B>(
        rows: impl IntoIterator<Item = R>,
        header: bool,
        mode: WidthMode,
    ) -> Result<Self, TableError>
    where
        R: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut raw = Vec::new();
        for (r, row) in rows.into_iter().enumerate() {
            let mut cells = Vec::new();
            for (f, field) in row.into_iter().enumerate() {
                let text = std::str::from_utf8(field.as_ref()).map_err(|e| {
                    TableError::malformed(format!(
                        "row {}, field {}: invalid UTF-8 after byte {}",
                        r + 1,
                        f + 1,
                        e.valid_up_to()
                    ))
                })?;
                cells.push(Cell::new(text, mode));
            }
            raw.push(cells);
        }
        Ok(Self::from_cells(raw, header))
    }

    fn from_cells(raw: Vec<Vec<Cell>>, header: bool) -> Self {
        let column_count = raw.iter().map(Vec::len).max().unwrap_or(0);
        let rows = raw
            .into_iter()
            .enumerate()
            .map(|(i, mut cells)| {
                cells.resize_with(column_count, Cell::empty);
                Row {
                    cells,
                    header: header && i == 0,
                }
            })
            .collect();
        Grid { rows, column_count }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The header row, if one was requested and the input was not empty.
    pub fn header(&self) -> Option<&Row> {
        self.rows.first().filter(|row| row.header)
    }

    /// The rows after the header.
    pub fn body(&self) -> &[Row] {
        match self.header() {
            Some(_) => &self.rows[1..],
            None => &self.rows,
        }
    }

    pub fn has_header(&self) -> bool {
        self.header().is_some()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// True when there is nothing to lay out (no rows or no columns).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.column_count == 0
    }

    /// Iterates over the cells of column `index`, header first.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.cells.get(index))
    }
}
