//! Reduction of the weekly table to the statistics the simulation is
//! fitted on: daily totals, weekly average demand per hour, and the sample
//! standard deviation of the daily totals.

use serde::Serialize;

use crate::error::AnalysisError;
use crate::stats;
use crate::table::{Day, DemandTable};

/// Aggregates derived from one weekly demand table. Computed once,
/// immutable afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyAggregates {
    /// Per-weekday totals, in table order.
    pub daily_totals: Vec<(Day, u32)>,
    /// Number of hourly buckets per day (L).
    pub hours_per_day: usize,
    /// Mean over weekdays of (daily total / hours per day).
    pub weekly_average: f64,
    /// Sample standard deviation (n − 1) of the weekday totals.
    pub std_deviation: f64,
}

/// Aggregate the weekday portion of a demand table.
///
/// A table with zero hourly buckets has no defined average-per-hour and is
/// rejected, as is a table with no weekday series.
pub fn aggregate(table: &DemandTable) -> Result<WeeklyAggregates, AnalysisError> {
    let hours_per_day = table.hours_per_day();
    if hours_per_day == 0 {
        return Err(AnalysisError::NoHours);
    }

    let daily_totals: Vec<(Day, u32)> = table
        .weekday_series()
        .map(|s| (s.day, s.counts.iter().sum()))
        .collect();
    if daily_totals.is_empty() {
        return Err(AnalysisError::NoWeekdays);
    }

    let per_hour: Vec<f64> = daily_totals
        .iter()
        .map(|(_, total)| *total as f64 / hours_per_day as f64)
        .collect();
    let weekly_average = stats::mean(&per_hour);

    let totals: Vec<f64> = daily_totals
        .iter()
        .map(|(_, total)| *total as f64)
        .collect();
    let std_deviation = stats::sample_std_dev(&totals);

    Ok(WeeklyAggregates {
        daily_totals,
        hours_per_day,
        weekly_average,
        std_deviation,
    })
}
