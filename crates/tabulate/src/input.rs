//! Splitting raw input into rows of fields.
//!
//! Fields are kept as bytes; decoding (and reporting bad UTF-8 with its row
//! and field position) is left to the grid builder.

use std::fmt;
use std::io::Read;

use regex::bytes::Regex;

use crate::error::CliError;

/// A row of undecoded fields.
pub type RawRow = Vec<Vec<u8>>;

/// How fields are separated within a line.
#[derive(Clone)]
pub enum FieldSeparator {
    /// A single byte, parsed with full CSV quoting rules.
    Delimiter(u8),
    /// A regular expression; every line is split on its matches after
    /// trailing whitespace is trimmed. Blank lines are skipped.
    Pattern(Regex),
}

impl Default for FieldSeparator {
    fn default() -> Self {
        FieldSeparator::Delimiter(b',')
    }
}

impl fmt::Debug for FieldSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldSeparator::Delimiter(byte) => {
                f.debug_tuple("Delimiter").field(&char::from(*byte)).finish()
            }
            FieldSeparator::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
        }
    }
}

impl PartialEq for FieldSeparator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldSeparator::Delimiter(a), FieldSeparator::Delimiter(b)) => a == b,
            (FieldSeparator::Pattern(a), FieldSeparator::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl FieldSeparator {
    /// Parses a delimiter token.
    ///
    /// Accepts one ASCII character, the escape `\t`, or the word `tab`.
    pub fn delimiter(token: &str) -> Result<Self, CliError> {
        let byte = match token {
            "\\t" | "tab" | "TAB" => b'\t',
            _ => match token.as_bytes() {
                [byte] if byte.is_ascii() => *byte,
                _ => return Err(CliError::Delimiter(token.to_string())),
            },
        };
        Ok(FieldSeparator::Delimiter(byte))
    }

    /// Compiles a separator regex.
    ///
    /// Patterns that match the empty string are rejected: they would split
    /// between every character.
    pub fn pattern(pattern: &str) -> Result<Self, CliError> {
        let re = Regex::new(pattern).map_err(|e| CliError::pattern(pattern, e))?;
        if re.is_match(b"") {
            return Err(CliError::pattern(pattern, "pattern matches the empty string"));
        }
        Ok(FieldSeparator::Pattern(re))
    }

    /// Reads all of `reader` and splits it into rows.
    pub fn read_rows(&self, reader: impl Read) -> Result<Vec<RawRow>, CliError> {
        match self {
            FieldSeparator::Delimiter(byte) => read_delimited(reader, *byte),
            FieldSeparator::Pattern(re) => read_pattern(reader, re),
        }
    }
}

fn read_delimited(reader: impl Read, delimiter: u8) -> Result<Vec<RawRow>, CliError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.byte_records() {
        let record = record?;
        rows.push(record.iter().map(<[u8]>::to_vec).collect());
    }
    Ok(rows)
}

fn read_pattern(mut reader: impl Read, re: &Regex) -> Result<Vec<RawRow>, CliError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;

    Ok(data
        .split(|&b| b == b'\n')
        .map(<[u8]>::trim_ascii_end)
        .filter(|line| !line.is_empty())
        .map(|line| re.split(line).map(<[u8]>::to_vec).collect())
        .collect())
}
