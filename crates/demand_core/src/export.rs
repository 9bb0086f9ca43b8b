//! Export of analysis results to CSV and JSON for downstream tooling.
//!
//! The default analysis run persists nothing; these writers exist for
//! batch workflows that want the raw sample or the full result on disk.

use std::error::Error;
use std::fs::File;
use std::path::Path;

use crate::runner::DemandAnalysis;

/// Write the simulated sample as CSV, one row per trial.
pub fn export_sample_to_csv(path: &Path, analysis: &DemandAnalysis) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record(["trial", "simulated_total"])?;
    for (trial, total) in analysis.simulated_totals.iter().enumerate() {
        wtr.write_record([&trial.to_string(), &total.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the full analysis (aggregates, sample, percentiles) as pretty JSON.
pub fn export_to_json(path: &Path, analysis: &DemandAnalysis) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, analysis)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::run_analysis;
    use crate::simulate::SimulationParams;
    use crate::table::DemandTable;

    fn small_analysis() -> DemandAnalysis {
        let params = SimulationParams::default().with_seed(5).with_trials(20);
        run_analysis(&DemandTable::sample_week(), &params).unwrap()
    }

    #[test]
    fn csv_has_one_row_per_trial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        let analysis = small_analysis();

        export_sample_to_csv(&path, &analysis).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "trial,simulated_total");
        assert_eq!(lines.len(), 1 + analysis.simulated_totals.len());
    }

    #[test]
    fn json_round_trips_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        let analysis = small_analysis();

        export_to_json(&path, &analysis).unwrap();

        let value: serde_json::Value =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(
            value["simulated_totals"].as_array().unwrap().len(),
            analysis.simulated_totals.len()
        );
        assert!(value["percentiles"]["p50"].is_number());
    }
}
