//! # Tabulate Render - Aligned Tables for the Terminal
//!
//! `tabulate-render` turns rows of text into a table drawn with a named border
//! style. Column widths are measured in display columns, so wide CJK glyphs,
//! combining marks, emoji and embedded ANSI color codes all line up.
//!
//! The crate does no I/O and no logging. Reading input and printing output is
//! left to the caller (see the `tabulate` binary).
//!
//! ## Core Concepts
//!
//! - [`Grid`]: rectangular table of [`Cell`]s, with an optional header row
//! - [`layout`]: per-column width and resolved [`ColumnAlign`]
//! - [`StyleTemplate`]: immutable border description, looked up by name
//! - [`render()`]: draws a laid-out grid with a template
//! - [`TableOptions`] / [`tabulate`]: the whole pipeline in one call
//!
//! ## Quick Start
//!
//! ```rust
//! use tabulate_render::{tabulate, TableOptions};
//!
//! let rows = vec![
//!     vec!["fruit", "price"],
//!     vec!["apple", "1.5"],
//!     vec!["kiwi", "12"],
//! ];
//! let out = tabulate(rows, &TableOptions::new().header(true).gutter(0)).unwrap();
//!
//! assert_eq!(out, "\
//! ╭───────┬───────╮
//! │ fruit │ price │
//! ├───────┼───────┤
//! │ apple │   1.5 │
//! │ kiwi  │  12   │
//! ╰───────┴───────╯");
//! ```
//!
//! ## Step by Step
//!
//! ```rust
//! use tabulate_render::{layout, render, style, Align, Grid, Gutter};
//!
//! let grid = Grid::build(vec![vec!["a", "b"], vec!["ccc", "d"]], false);
//! let columns = layout(&grid, &[Align::Right], Gutter::none());
//! let out = render(&grid, &columns, style::resolve("plain").unwrap());
//! assert_eq!(out, "  a  b\nccc  d");
//! ```

pub mod cell;
mod error;
pub mod grid;
pub mod layout;
pub mod options;
pub mod render;
pub mod style;
pub mod width;

pub use cell::Cell;
pub use error::TableError;
pub use grid::{Grid, Row};
pub use layout::{layout, layout_with, Align, ColumnAlign, ColumnSpec, DecimalLayout, Gutter, TypeAlign};
pub use options::{tabulate, TableOptions, DEFAULT_STYLE};
pub use render::render;
pub use style::{resolve as resolve_style, style_names, StyleTemplate};
pub use width::{visual_width, WidthMode};
