//! Monte Carlo analysis of weekly meal demand.
//!
//! This crate aggregates an hour-by-weekday demand table into daily totals,
//! fits a normal distribution to the weekday totals, and simulates the
//! distribution of total daily demand by repeated sampling.
//!
//! # Quick Start
//!
//! ```
//! use demand_core::{run_analysis, DemandTable, SimulationParams};
//!
//! let table = DemandTable::sample_week();
//! let params = SimulationParams::default().with_seed(42);
//!
//! let analysis = run_analysis(&table, &params).unwrap();
//!
//! assert_eq!(analysis.simulated_totals.len(), 1000);
//! assert!(analysis.percentiles.p25 <= analysis.percentiles.p95);
//! ```
//!
//! # Architecture
//!
//! - [`table`]: the weekly demand table and its shape invariants
//! - [`aggregate`]: daily totals, weekly average, standard deviation
//! - [`simulate`]: seeded Monte Carlo trials of total daily demand
//! - [`stats`]: percentile and moment helpers
//! - [`histogram`]: equal-width binning of the simulated sample
//! - [`runner`]: the end-to-end pipeline, sequential or rayon-parallel
//! - [`export`]: CSV/JSON export of analysis results

pub mod aggregate;
pub mod error;
pub mod export;
pub mod histogram;
pub mod runner;
pub mod simulate;
pub mod stats;
pub mod table;

pub use aggregate::{aggregate, WeeklyAggregates};
pub use error::AnalysisError;
pub use export::{export_sample_to_csv, export_to_json};
pub use histogram::{Histogram, DEFAULT_NUM_BINS};
pub use runner::{run_analysis, run_parallel_trials, DemandAnalysis};
pub use simulate::{simulate_totals, SimulationParams, DEFAULT_NUM_TRIALS};
pub use stats::PercentileSummary;
pub use table::{Day, DemandTable};
