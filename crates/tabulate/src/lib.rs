//! # Tabulate - Aligned Tables from Delimited Text
//!
//! The command-line front end for [`tabulate_render`]: flag parsing, YAML
//! configuration, CSV and regex input splitting, and the [`run`] entry point
//! used by the `tabulate` binary.
//!
//! [`run`] produces the complete output or an error, never part of a table.
//!
//! ```rust
//! use clap::Parser;
//! use tabulate::{run, Cli};
//!
//! let cli = Cli::try_parse_from(["tabulate", "--style", "pipe", "--header"]).unwrap();
//! let out = run(&cli, "name,qty\ntea,3\n".as_bytes()).unwrap();
//! assert_eq!(out, "| name  |  qty |\n|:------|-----:|\n| tea   |    3 |\n");
//! ```

pub mod cli;
pub mod config;
mod error;
pub mod input;

use std::fs::File;
use std::io::{BufReader, Read};

use tracing::debug;

pub use cli::Cli;
pub use config::{Config, Settings};
pub use error::CliError;
pub use input::FieldSeparator;

/// Runs one invocation: loads configuration, reads the input named by `cli`
/// (or `stdin` when there is none) and renders it.
///
/// Returns the table followed by a newline, or an empty string for empty
/// input. With `--list-styles`, returns the style names, one per line,
/// without touching the input.
///
/// # Errors
///
/// Configuration problems are reported before any input is read; after
/// that, input and rendering errors.
pub fn run(cli: &Cli, stdin: impl Read) -> Result<String, CliError> {
    if cli.list_styles {
        return Ok(tabulate_render::style_names()
            .map(|name| format!("{name}\n"))
            .collect());
    }

    let config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let settings = Settings::resolve(cli, config)?;
    settings.table.template()?;
    debug!(
        style = %settings.table.style,
        header = settings.table.header,
        gutter = settings.table.gutter_width,
        separator = ?settings.separator,
        "resolved settings"
    );

    let rows = match cli.input_path() {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.display().to_string(),
                source,
            })?;
            settings.separator.read_rows(BufReader::new(file))?
        }
        None => settings.separator.read_rows(stdin)?,
    };
    debug!(rows = rows.len(), "parsed input");

    let table = settings.table.render_bytes(rows)?;
    debug!(bytes = table.len(), "rendered table");

    if table.is_empty() {
        Ok(table)
    } else {
        Ok(table + "\n")
    }
}
