use std::fmt;

use crate::table::Day;

/// Errors surfaced while building or aggregating a demand table.
///
/// All of these are fatal input errors: the analysis is a one-shot pipeline
/// and nothing downstream can recover from a malformed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A day's count series does not have one entry per hourly bucket.
    SeriesLengthMismatch {
        day: Day,
        expected: usize,
        actual: usize,
    },
    /// The table has zero hourly buckets, so average-per-hour is undefined.
    NoHours,
    /// The table has no weekday series to aggregate.
    NoWeekdays,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::SeriesLengthMismatch {
                day,
                expected,
                actual,
            } => write!(
                f,
                "{day} has {actual} hourly counts, expected {expected}"
            ),
            AnalysisError::NoHours => write!(f, "demand table has no hourly buckets"),
            AnalysisError::NoWeekdays => write!(f, "demand table has no weekday series"),
        }
    }
}

impl std::error::Error for AnalysisError {}
