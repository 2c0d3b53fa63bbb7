//! Schedule text reader.
//!
//! ```text
//! 4
//! Atlanta       83 71  8  0 1 6 1
//! Philadelphia  80 79  3  1 0 0 2
//! New_York      78 78  6  6 0 0 0
//! Montreal      77 82  3  1 2 0 0
//! ```
//!
//! First line: number of teams N. Then one row per team: name, wins, losses, remaining,
//! and N head-to-head counts. Columns are separated by any run of spaces or tabs.

use crate::models::{Division, DivisionError, Team};
use std::path::Path;

/// Errors while reading a schedule.
#[derive(Debug)]
pub enum ScheduleError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// Input holds no team count line.
    MissingTeamCount,
    /// First line is not a single non-negative integer.
    InvalidTeamCount(String),
    InvalidNumber { line: u64, value: String },
    /// Team row with the wrong number of columns.
    WrongFieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },
    /// Number of team rows differs from the declared count.
    WrongTeamCount { expected: usize, found: usize },
    /// Rows parsed but the schedule breaks a division invariant.
    Division(DivisionError),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::Io(e) => write!(f, "Could not read schedule: {}", e),
            ScheduleError::Csv(e) => write!(f, "Malformed schedule: {}", e),
            ScheduleError::MissingTeamCount => write!(f, "Schedule is empty"),
            ScheduleError::InvalidTeamCount(value) => {
                write!(f, "Expected the number of teams, found '{}'", value)
            }
            ScheduleError::InvalidNumber { line, value } => {
                write!(f, "Line {}: '{}' is not a valid count", line, value)
            }
            ScheduleError::WrongFieldCount {
                line,
                expected,
                found,
            } => write!(
                f,
                "Line {}: expected {} columns, found {}",
                line, expected, found
            ),
            ScheduleError::WrongTeamCount { expected, found } => write!(
                f,
                "Schedule declares {} teams but lists {}",
                expected, found
            ),
            ScheduleError::Division(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ScheduleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScheduleError::Io(e) => Some(e),
            ScheduleError::Csv(e) => Some(e),
            ScheduleError::Division(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScheduleError {
    fn from(e: std::io::Error) -> Self {
        ScheduleError::Io(e)
    }
}

impl From<csv::Error> for ScheduleError {
    fn from(e: csv::Error) -> Self {
        ScheduleError::Csv(e)
    }
}

impl From<DivisionError> for ScheduleError {
    fn from(e: DivisionError) -> Self {
        ScheduleError::Division(e)
    }
}

/// Read and parse a schedule file.
pub fn read_schedule(path: impl AsRef<Path>) -> Result<Division, ScheduleError> {
    let text = std::fs::read_to_string(path)?;
    parse_schedule(&text)
}

/// Parse schedule text into a validated division.
pub fn parse_schedule(input: &str) -> Result<Division, ScheduleError> {
    let normalized = input.replace('\t', " ");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(normalized.as_bytes());

    let mut rows: Vec<(u64, Vec<String>)> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<String> = record
            .iter()
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        if !fields.is_empty() {
            rows.push((line, fields));
        }
    }

    let mut rows = rows.into_iter();
    let (_, header) = rows.next().ok_or(ScheduleError::MissingTeamCount)?;
    let n: usize = match header.as_slice() {
        [count] => count
            .parse()
            .map_err(|_| ScheduleError::InvalidTeamCount(count.clone()))?,
        _ => return Err(ScheduleError::InvalidTeamCount(header.join(" "))),
    };

    let rows: Vec<_> = rows.collect();
    if rows.len() != n {
        return Err(ScheduleError::WrongTeamCount {
            expected: n,
            found: rows.len(),
        });
    }
    let teams = rows
        .iter()
        .map(|(line, fields)| parse_team_row(*line, fields, n))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed schedule with {} teams", n);
    Ok(Division::new(teams)?)
}

fn parse_team_row(line: u64, fields: &[String], n: usize) -> Result<Team, ScheduleError> {
    let expected = 4 + n;
    if fields.len() != expected {
        return Err(ScheduleError::WrongFieldCount {
            line,
            expected,
            found: fields.len(),
        });
    }
    let count = |value: &String| -> Result<u32, ScheduleError> {
        value.parse().map_err(|_| ScheduleError::InvalidNumber {
            line,
            value: value.clone(),
        })
    };
    let against = fields[4..]
        .iter()
        .map(|value| count(value))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Team::new(
        fields[0].clone(),
        count(&fields[1])?,
        count(&fields[2])?,
        count(&fields[3])?,
        against,
    ))
}
