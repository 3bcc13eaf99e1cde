//! YAML configuration and option layering.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! the configuration file, then command-line flags.
//!
//! ```yaml
//! style: fancy_grid
//! header: true
//! gutter_width: 0
//! alignments: [left, numeric]
//! numalign: right
//! stralign: left
//! delimiter: ";"
//! ambiguous_wide: false
//! ```

use std::path::Path;

use serde::Deserialize;
use tabulate_render::{Align, TableOptions, WidthMode};

use crate::cli::Cli;
use crate::error::CliError;
use crate::input::FieldSeparator;

/// Contents of a configuration file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub style: Option<String>,
    pub header: Option<bool>,
    pub gutter_width: Option<usize>,
    pub alignments: Option<Vec<Align>>,
    pub numalign: Option<Align>,
    pub stralign: Option<Align>,
    pub delimiter: Option<String>,
    pub separator_regex: Option<String>,
    pub ambiguous_wide: Option<bool>,
}

impl Config {
    /// Parses configuration from YAML. An empty document is an empty config.
    ///
    /// # Errors
    ///
    /// [`CliError::Config`] for invalid YAML, unknown keys, or a file that
    /// sets both `delimiter` and `separator_regex`.
    pub fn from_yaml(yaml: &str) -> Result<Self, CliError> {
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| CliError::config(e.to_string()))?;
        if config.delimiter.is_some() && config.separator_regex.is_some() {
            return Err(CliError::config(
                "delimiter and separator_regex cannot both be set",
            ));
        }
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_yaml(&content).map_err(|e| match e {
            CliError::Config(detail) => CliError::config(format!("{}: {}", path.display(), detail)),
            other => other,
        })
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub table: TableOptions,
    pub separator: FieldSeparator,
}

impl Settings {
    /// Layers `cli` over `config` over the defaults.
    ///
    /// Boolean flags can only switch a setting on. A separator given on the
    /// command line (either kind) replaces any separator from the file.
    ///
    /// # Errors
    ///
    /// Invalid alignment tokens, delimiters and separator patterns.
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self, CliError> {
        let mut table = TableOptions::default();

        if let Some(style) = cli.style.clone().or(config.style) {
            table = table.style(style);
        }
        table = table.header(cli.header || config.header.unwrap_or(false));
        if let Some(gutter) = cli.gutter.or(config.gutter_width) {
            table = table.gutter(gutter);
        }

        if !cli.align.is_empty() {
            let alignments = cli
                .align
                .iter()
                .map(|token| token.parse::<Align>())
                .collect::<Result<Vec<_>, _>>()?;
            table = table.alignments(alignments);
        } else if let Some(alignments) = config.alignments {
            table = table.alignments(alignments);
        }

        if let Some(align) = type_align(cli.numalign.as_deref(), config.numalign)? {
            table = table.numalign(align);
        }
        if let Some(align) = type_align(cli.stralign.as_deref(), config.stralign)? {
            table = table.stralign(align);
        }

        if cli.ambiguous_wide || config.ambiguous_wide.unwrap_or(false) {
            table = table.width_mode(WidthMode::AmbiguousWide);
        }

        let separator = match (&cli.separator_regex, &cli.delimiter) {
            (Some(pattern), _) => FieldSeparator::pattern(pattern)?,
            (None, Some(delimiter)) => FieldSeparator::delimiter(delimiter)?,
            (None, None) => match (config.separator_regex, config.delimiter) {
                (Some(pattern), _) => FieldSeparator::pattern(&pattern)?,
                (None, Some(delimiter)) => FieldSeparator::delimiter(&delimiter)?,
                (None, None) => FieldSeparator::default(),
            },
        };

        Ok(Settings { table, separator })
    }
}

/// A flag token wins over the config value.
fn type_align(flag: Option<&str>, config: Option<Align>) -> Result<Option<Align>, CliError> {
    match flag {
        Some(token) => Ok(Some(token.parse()?)),
        None => Ok(config),
    }
}
