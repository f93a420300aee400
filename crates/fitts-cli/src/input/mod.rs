//! Readers for the plain-text data files.
//!
//! Both formats are line oriented. Values on a line are separated by commas,
//! spaces or both. Blank lines and lines starting with `#` are skipped
//! between records; the first remaining line is a header naming the columns
//! of the per-record code (e.g. `Participant,Session,Block`), which is echoed
//! into the summary output.

use std::{iter::Enumerate, str::Lines};

use fitts_analysis::Point;

pub(crate) use self::{
    sequences::{SequenceRecord, parse_sequence_file},
    trials::{TrialRecord, parse_trial_file},
};

mod sequences;
mod trials;

/// A malformed line in a data file.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("line {line}: {message}")]
pub(crate) struct ParseError {
    pub(crate) line: usize,
    pub(crate) message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// A line cursor that remembers 1-based line numbers.
struct LineCursor<'a> {
    lines: Enumerate<Lines<'a>>,
    last_line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last_line: 0,
        }
    }

    /// Next line that is neither blank nor a comment.
    fn next_record_line(&mut self) -> Option<(usize, &'a str)> {
        self.by_ref()
            .find(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
    }

    /// The very next line, whatever it holds.
    fn expect_line(&mut self, what: &str) -> Result<(usize, &'a str), ParseError> {
        self.next().ok_or_else(|| {
            ParseError::new(
                self.last_line + 1,
                format!("expected {what}, found end of file"),
            )
        })
    }
}

impl<'a> Iterator for LineCursor<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, line) = self.lines.next()?;
        self.last_line = index + 1;
        Some((index + 1, line.trim_end()))
    }
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split([',', ' ', '\t']).filter(|t| !t.is_empty())
}

fn parse_numbers(line_no: usize, line: &str) -> Result<Vec<f64>, ParseError> {
    tokens(line)
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| ParseError::new(line_no, format!("{token:?} is not a number")))
        })
        .collect()
}

/// Parses a line holding exactly `N` numbers described by `what`.
fn parse_exact<const N: usize>(
    line_no: usize,
    line: &str,
    what: &str,
) -> Result<[f64; N], ParseError> {
    let values = parse_numbers(line_no, line)?;
    <[f64; N]>::try_from(values).map_err(|values| {
        ParseError::new(
            line_no,
            format!("expected {N} value(s) ({what}), found {}", values.len()),
        )
    })
}

fn parse_point(line_no: usize, line: &str, what: &str) -> Result<Point, ParseError> {
    let [x, y] = parse_exact::<2>(line_no, line, what)?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_accept_mixed_separators() {
        let values = parse_numbers(1, "1.5, 2  3,4\t5").unwrap();
        assert_eq!(values, [1.5, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_exact_count_is_enforced() {
        let err = parse_exact::<2>(7, "1, 2, 3", "fromX, fromY").unwrap_err();
        assert_eq!(err.line, 7);
        assert!(err.message.contains("expected 2"), "{err}");
    }

    #[test]
    fn test_bad_number_names_token() {
        let err = parse_point(3, "12, abc", "toX, toY").unwrap_err();
        assert_eq!(err.to_string(), "line 3: \"abc\" is not a number");
    }

    #[test]
    fn test_cursor_skips_comments_and_blanks() {
        let mut cursor = LineCursor::new("# comment\n\n  \nheader\nnext");
        assert_eq!(cursor.next_record_line(), Some((4, "header")));
        assert_eq!(cursor.expect_line("data").unwrap(), (5, "next"));
        assert_eq!(cursor.expect_line("data").unwrap_err().line, 6);
    }
}
