//! Single-trial path files.
//!
//! ```text
//! # comment
//! Participant,Trial
//! P01,1
//! 856.5, 501.0          from x, y
//! 515.0, 159.5          to x, y
//! 60                    width
//! 842, 847, 850, ...    path x values
//! 499, 501, 503, ...    path y values
//!
//! P01,2
//! ...
//! ```

use fitts_analysis::Point;

use super::{LineCursor, ParseError, parse_exact, parse_numbers, parse_point};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrialFile {
    pub(crate) code_header: String,
    pub(crate) trials: Vec<TrialRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TrialRecord {
    pub(crate) code: String,
    pub(crate) from: Point,
    pub(crate) to: Point,
    pub(crate) width: f64,
    pub(crate) path: Vec<Point>,
}

pub(crate) fn parse_trial_file(text: &str) -> Result<TrialFile, ParseError> {
    let mut cursor = LineCursor::new(text);
    let Some((_, code_header)) = cursor.next_record_line() else {
        return Err(ParseError::new(1, "expected a code header line"));
    };

    let mut trials = Vec::new();
    while let Some((_, code)) = cursor.next_record_line() {
        let (n, line) = cursor.expect_line("fromX, fromY")?;
        let from = parse_point(n, line, "fromX, fromY")?;
        let (n, line) = cursor.expect_line("toX, toY")?;
        let to = parse_point(n, line, "toX, toY")?;
        let (n, line) = cursor.expect_line("width")?;
        let [width] = parse_exact::<1>(n, line, "width")?;

        let (nx, xs) = cursor.expect_line("path x values")?;
        let (ny, ys) = cursor.expect_line("path y values")?;
        let xs = parse_numbers(nx, xs)?;
        let ys = parse_numbers(ny, ys)?;
        if xs.len() != ys.len() {
            return Err(ParseError::new(
                ny,
                format!(
                    "path has {} x values but {} y values",
                    xs.len(),
                    ys.len()
                ),
            ));
        }

        trials.push(TrialRecord {
            code: code.to_owned(),
            from,
            to,
            width,
            path: xs.into_iter().zip(ys).map(|(x, y)| Point::new(x, y)).collect(),
        });
    }

    Ok(TrialFile {
        code_header: code_header.to_owned(),
        trials,
    })
}
