//! Sequence files for throughput analysis.
//!
//! ```text
//! Participant,Block
//! P01,1
//! 250, 60               amplitude, width
//! 1D Serial             task type, response type
//! 300 200 550 200 553 205 251    fromX fromY toX toY selX selY MT
//! ...
//!                       (blank line ends the sequence)
//! ```

use fitts_analysis::{
    Point,
    throughput::{ResponseType, SequenceCondition, TaskType},
};

use super::{LineCursor, ParseError, parse_exact, tokens};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SequenceFile {
    pub(crate) code_header: String,
    pub(crate) sequences: Vec<SequenceRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SequenceRecord {
    pub(crate) code: String,
    pub(crate) condition: SequenceCondition,
    pub(crate) from: Vec<Point>,
    pub(crate) to: Vec<Point>,
    pub(crate) select: Vec<Point>,
    pub(crate) movement_times: Vec<f64>,
}

impl SequenceRecord {
    pub(crate) fn trial_count(&self) -> usize {
        self.from.len()
    }
}

pub(crate) fn parse_sequence_file(text: &str) -> Result<SequenceFile, ParseError> {
    let mut cursor = LineCursor::new(text);
    let Some((_, code_header)) = cursor.next_record_line() else {
        return Err(ParseError::new(1, "expected a code header line"));
    };

    let mut sequences = Vec::new();
    while let Some((_, code)) = cursor.next_record_line() {
        let (n, line) = cursor.expect_line("amplitude, width")?;
        let [amplitude, width] = parse_exact::<2>(n, line, "amplitude, width")?;
        let (n, line) = cursor.expect_line("task type and response type")?;
        let (task_type, response_type) = parse_types(n, line)?;

        let mut record = SequenceRecord {
            code: code.to_owned(),
            condition: SequenceCondition {
                amplitude,
                width,
                task_type,
                response_type,
            },
            from: Vec::new(),
            to: Vec::new(),
            select: Vec::new(),
            movement_times: Vec::new(),
        };
        for (n, line) in cursor.by_ref() {
            if line.trim().is_empty() {
                break;
            }
            let [fx, fy, tx, ty, sx, sy, mt] =
                parse_exact::<7>(n, line, "fromX fromY toX toY selX selY MT")?;
            record.from.push(Point::new(fx, fy));
            record.to.push(Point::new(tx, ty));
            record.select.push(Point::new(sx, sy));
            record.movement_times.push(mt);
        }
        if record.trial_count() == 0 {
            return Err(ParseError::new(
                n + 1,
                format!("sequence {:?} has no trial lines", record.code),
            ));
        }
        sequences.push(record);
    }

    Ok(SequenceFile {
        code_header: code_header.to_owned(),
        sequences,
    })
}

fn parse_types(line_no: usize, line: &str) -> Result<(TaskType, ResponseType), ParseError> {
    let mut parts = tokens(line);
    let (Some(task), Some(response), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::new(
            line_no,
            "expected task type and response type (e.g. \"1D Serial\")",
        ));
    };
    let task = task
        .parse()
        .map_err(|err| ParseError::new(line_no, format!("{err}")))?;
    let response = response
        .parse()
        .map_err(|err| ParseError::new(line_no, format!("{err}")))?;
    Ok((task, response))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Participant,Block
P01,1
250, 60
1d serial
300 200 550 200 553 205 251
550 200 300 200 290 198 244.5

P01,2
200, 20
2D Discrete
100,100,300,100,301,99,400
";

    #[test]
    fn test_parses_sequences() {
        let file = parse_sequence_file(SAMPLE).unwrap();
        assert_eq!(file.code_header, "Participant,Block");
        assert_eq!(file.sequences.len(), 2);

        let first = &file.sequences[0];
        assert_eq!(first.code, "P01,1");
        assert_eq!(
            first.condition,
            SequenceCondition {
                amplitude: 250.0,
                width: 60.0,
                task_type: TaskType::OneDimensional,
                response_type: ResponseType::Serial,
            }
        );
        assert_eq!(first.trial_count(), 2);
        assert_eq!(first.select[1], Point::new(290.0, 198.0));
        assert_eq!(first.movement_times, [251.0, 244.5]);

        let second = &file.sequences[1];
        assert_eq!(second.condition.task_type, TaskType::TwoDimensional);
        assert_eq!(second.condition.response_type, ResponseType::Discrete);
        assert_eq!(second.trial_count(), 1);
    }

    #[test]
    fn test_unknown_task_type() {
        let err = parse_sequence_file("Code\nA\n250, 60\n3D Serial\n").unwrap_err();
        assert_eq!(err.line, 4);
        assert!(err.message.contains("3D"), "{err}");
    }

    #[test]
    fn test_missing_response_type() {
        let err = parse_sequence_file("Code\nA\n250, 60\n1D\n").unwrap_err();
        assert_eq!(err.line, 4);
    }

    #[test]
    fn test_short_trial_line() {
        let err = parse_sequence_file("Code\nA\n250, 60\n1D Serial\n1 2 3 4 5 6\n").unwrap_err();
        assert_eq!(err.line, 5);
        assert!(err.message.contains("expected 7"), "{err}");
    }

    #[test]
    fn test_sequence_without_trials() {
        let err = parse_sequence_file("Code\nA\n250, 60\n1D Serial\n\n").unwrap_err();
        assert!(err.message.contains("no trial lines"), "{err}");
    }
}
