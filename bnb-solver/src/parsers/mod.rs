//! Line-based readers for the instance formats of the solver.
//!
//! Both formats ignore empty lines and lines starting with `c`; every other line starts with a
//! single-letter tag followed by whitespace-separated numbers.
mod graph;
mod knapsack;

use std::io::BufRead;
use std::str::FromStr;

use bnb_encodings::EncodingError;
pub(crate) use graph::parse_graph;
pub(crate) use knapsack::parse_knapsack;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum InstanceParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("missing '{0}' header")]
    MissingHeader(char),

    #[error("line {line}: multiple headers found")]
    DuplicateHeader { line: usize },

    #[error("line {line}: '{content}' is an invalid header")]
    InvalidHeader { line: usize, content: String },

    #[error("line {line}: '{token}' is not a valid number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: unexpected line '{content}'")]
    UnexpectedLine { line: usize, content: String },

    #[error("line {line}: {source}")]
    Encoding { line: usize, source: EncodingError },

    #[error("expected to parse {expected} edges, but parsed {parsed}")]
    IncorrectEdgeCount { expected: usize, parsed: usize },
}

/// A line which carries data, split into its tag and its fields.
#[derive(Debug)]
struct DataLine<'a> {
    number: usize,
    content: &'a str,
    tag: &'a str,
    fields: Vec<&'a str>,
}

impl DataLine<'_> {
    fn unexpected(&self) -> InstanceParseError {
        InstanceParseError::UnexpectedLine {
            line: self.number,
            content: self.content.to_owned(),
        }
    }

    fn invalid_header(&self) -> InstanceParseError {
        InstanceParseError::InvalidHeader {
            line: self.number,
            content: self.content.to_owned(),
        }
    }

    /// Parses field `index`, or returns `None` if the line has fewer fields.
    fn field<T: FromStr>(&self, index: usize) -> Result<Option<T>, InstanceParseError> {
        self.fields
            .get(index)
            .map(|token| {
                token
                    .parse::<T>()
                    .map_err(|_| InstanceParseError::InvalidNumber {
                        line: self.number,
                        token: (*token).to_owned(),
                    })
            })
            .transpose()
    }

    fn required_field<T: FromStr>(&self, index: usize) -> Result<T, InstanceParseError> {
        self.field(index)?.ok_or_else(|| self.unexpected())
    }
}

/// Reads all lines of `source` and calls `handle` for every line which is not a comment.
fn for_each_data_line(
    source: impl BufRead,
    mut handle: impl FnMut(DataLine<'_>) -> Result<(), InstanceParseError>,
) -> Result<(), InstanceParseError> {
    for (index, line) in source.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('c') {
            continue;
        }

        let mut tokens = content.split_whitespace();
        let tag = tokens.next().unwrap_or_default();
        handle(DataLine {
            number: index + 1,
            content,
            tag,
            fields: tokens.collect(),
        })?;
    }

    Ok(())
}
