//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

/// Render delimited text as an aligned table.
///
/// Reads CSV (or TSV, or any regex-separated columns) from FILE or standard
/// input and writes a table drawn with the chosen border style. Widths are
/// measured in terminal columns, so CJK text, emoji and ANSI colors line up.
#[derive(Parser, Debug, Default)]
#[command(name = "tabulate")]
#[command(version)]
#[command(about = "Render delimited text as an aligned table")]
pub struct Cli {
    /// Input file; omit or use "-" to read standard input
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Border style (see --list-styles) [default: rounded_outline]
    #[arg(short, long, value_name = "NAME")]
    pub style: Option<String>,

    /// Treat the first row as a header
    #[arg(short = 'H', long)]
    pub header: bool,

    /// Extra width added to every column [default: 1]
    #[arg(short, long, value_name = "N")]
    pub gutter: Option<usize>,

    /// Per-column alignments: left, center, right or numeric
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub align: Vec<String>,

    /// Alignment of numeric columns without an --align entry [default: numeric]
    #[arg(long, value_name = "ALIGN")]
    pub numalign: Option<String>,

    /// Alignment of other columns without an --align entry [default: left]
    #[arg(long, value_name = "ALIGN")]
    pub stralign: Option<String>,

    /// Field delimiter: one ASCII character, '\t' or 'tab' [default: ,]
    #[arg(short, long, value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Split fields on a regular expression instead of a delimiter
    #[arg(short = 'F', long, value_name = "REGEX", conflicts_with = "delimiter")]
    pub separator_regex: Option<String>,

    /// Measure East-Asian ambiguous characters as two columns wide
    #[arg(short = 'w', long)]
    pub ambiguous_wide: bool,

    /// YAML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available style names and exit
    #[arg(long)]
    pub list_styles: bool,
}

impl Cli {
    /// The input file, or `None` for standard input.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|path| path.as_os_str() != "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "tabulate", "-s", "pipe", "-H", "-g", "0", "-a", "left,numeric", "-d", ";", "-w", "data.csv",
        ])
        .unwrap();
        assert_eq!(cli.style.as_deref(), Some("pipe"));
        assert!(cli.header);
        assert_eq!(cli.gutter, Some(0));
        assert_eq!(cli.align, vec!["left", "numeric"]);
        assert_eq!(cli.delimiter.as_deref(), Some(";"));
        assert!(cli.ambiguous_wide);
        assert_eq!(cli.input_path(), Some(&PathBuf::from("data.csv")));
    }

    #[test]
    fn parses_type_alignments() {
        let cli = Cli::try_parse_from(["tabulate", "--numalign", "right", "--stralign", "center"]).unwrap();
        assert_eq!(cli.numalign.as_deref(), Some("right"));
        assert_eq!(cli.stralign.as_deref(), Some("center"));
        let cli = Cli::try_parse_from(["tabulate"]).unwrap();
        assert!(cli.numalign.is_none() && cli.stralign.is_none());
    }

    #[test]
    fn dash_means_stdin() {
        let cli = Cli::try_parse_from(["tabulate", "-"]).unwrap();
        assert!(cli.input_path().is_none());
        let cli = Cli::try_parse_from(["tabulate"]).unwrap();
        assert!(cli.input_path().is_none());
    }

    #[test]
    fn regex_conflicts_with_delimiter() {
        let err = Cli::try_parse_from(["tabulate", "-d", ";", "-F", r"\s+"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
