//! Text input parsing.
//!
//! Parses the simulator's plain-text process format: one process per
//! line, three whitespace-separated integer fields `id arrival burst`.
//! Blank lines are skipped. Parsing checks shape only; semantic
//! preconditions (duplicate ids, value ranges) belong to
//! [`crate::validation`].

use crate::models::Process;

/// A parse error, pointing at the offending line.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// 1-based line number within the input.
    pub line: usize,
    /// Human-readable description including the offending text.
    pub message: String,
}

/// Categories of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A line does not have exactly three fields.
    MalformedLine,
    /// A field is not a valid integer.
    InvalidField,
}

impl ParseError {
    fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses a process list from text, one `id arrival burst` triple per line.
///
/// # Example
///
/// ```
/// use cpu_schedule::input::parse_processes;
///
/// let processes = parse_processes("1 0 5\n2 1 3\n3 2 8\n4 3 6").unwrap();
/// assert_eq!(processes.len(), 4);
/// assert_eq!(processes[1].burst_time, 3);
/// ```
pub fn parse_processes(input: &str) -> Result<Vec<Process>, ParseError> {
    let mut processes = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(ParseError::new(
                ParseErrorKind::MalformedLine,
                line_no,
                format!("expected `id arrival burst`, got \"{trimmed}\""),
            ));
        }

        let id = parse_field::<u32>(fields[0], "id", line_no)?;
        let arrival = parse_field::<i64>(fields[1], "arrival time", line_no)?;
        let burst = parse_field::<i64>(fields[2], "burst time", line_no)?;
        processes.push(Process::new(id, arrival, burst));
    }

    Ok(processes)
}

/// Parses a Round Robin time quantum.
pub fn parse_quantum(input: &str) -> Result<i64, ParseError> {
    parse_field::<i64>(input.trim(), "time quantum", 1)
}

fn parse_field<T: std::str::FromStr>(
    text: &str,
    name: &str,
    line_no: usize,
) -> Result<T, ParseError> {
    text.parse().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidField,
            line_no,
            format!("invalid {name}: \"{text}\""),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_input() {
        // The simulator's stock example
        let processes = parse_processes("1 0 5\n2 1 3\n3 2 8\n4 3 6").unwrap();
        assert_eq!(processes.len(), 4);
        assert_eq!(processes[0].id, 1);
        assert_eq!(processes[2].arrival_time, 2);
        assert_eq!(processes[3].burst_time, 6);
        assert_eq!(processes[3].remaining_time, 6);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_padding() {
        let processes = parse_processes("\n  1 0 5  \n\n2 1 3\n").unwrap();
        assert_eq!(processes.len(), 2);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = parse_processes("1 0 5\n2 1").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MalformedLine);
        assert_eq!(err.line, 2);
        assert!(err.message.contains("2 1"));
    }

    #[test]
    fn test_parse_non_integer_field() {
        let err = parse_processes("1 zero 5").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidField);
        assert_eq!(err.line, 1);
        assert!(err.message.contains("arrival time"));
        assert!(err.to_string().starts_with("line 1:"));
    }

    #[test]
    fn test_parse_empty_input_is_empty_set() {
        // Emptiness is a validation concern, not a parse failure
        assert!(parse_processes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_quantum() {
        assert_eq!(parse_quantum(" 2 ").unwrap(), 2);
        let err = parse_quantum("two").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidField);
    }
}
