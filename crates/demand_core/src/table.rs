//! Weekly demand table: ordered hour-of-day buckets by day of week.
//!
//! The table is built once, validated on construction, and never mutated.
//! Weekend days carry zero demand and are excluded from aggregation.

use std::fmt;

use serde::Serialize;

use crate::error::AnalysisError;

/// Day of week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One day's demand counts, in hourly-bucket order.
#[derive(Debug, Clone, Serialize)]
pub struct DaySeries {
    pub day: Day,
    pub counts: Vec<u32>,
}

/// Demand counts for one week, bucketed by hour of day.
///
/// Invariant: every day's series has exactly one count per hourly bucket.
#[derive(Debug, Clone, Serialize)]
pub struct DemandTable {
    hours: Vec<String>,
    series: Vec<DaySeries>,
}

impl DemandTable {
    /// Build a table, checking that each series matches the hour labels.
    pub fn new(
        hours: Vec<String>,
        series: Vec<(Day, Vec<u32>)>,
    ) -> Result<Self, AnalysisError> {
        let expected = hours.len();
        let series = series
            .into_iter()
            .map(|(day, counts)| {
                if counts.len() != expected {
                    return Err(AnalysisError::SeriesLengthMismatch {
                        day,
                        expected,
                        actual: counts.len(),
                    });
                }
                Ok(DaySeries { day, counts })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { hours, series })
    }

    pub fn hours(&self) -> &[String] {
        &self.hours
    }

    /// Number of hourly buckets per day (L in the simulation).
    pub fn hours_per_day(&self) -> usize {
        self.hours.len()
    }

    /// The non-weekend series, in table order.
    pub fn weekday_series(&self) -> impl Iterator<Item = &DaySeries> {
        self.series.iter().filter(|s| !s.day.is_weekend())
    }

    /// The fixed synthetic week this analysis was built around: lunch-service
    /// demand for 10 AM through 5 PM, weekdays only.
    pub fn sample_week() -> Self {
        let hours = [
            "10 AM - 11 AM",
            "11 AM - 12 PM",
            "12 PM - 1 PM",
            "1 PM - 2 PM",
            "2 PM - 3 PM",
            "3 PM - 4 PM",
            "4 PM - 5 PM",
        ]
        .map(String::from)
        .to_vec();

        let series = vec![
            (Day::Monday, vec![8, 6, 25, 28, 10, 7, 5]),
            (Day::Tuesday, vec![6, 7, 27, 30, 9, 5, 4]),
            (Day::Wednesday, vec![7, 8, 26, 25, 11, 6, 6]),
            (Day::Thursday, vec![9, 6, 28, 29, 12, 8, 7]),
            (Day::Friday, vec![8, 5, 30, 27, 10, 7, 5]),
            (Day::Saturday, vec![0; 7]),
            (Day::Sunday, vec![0; 7]),
        ];

        Self::new(hours, series).expect("sample week data is well-formed")
    }
}
