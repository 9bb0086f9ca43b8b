//! Console report and histogram viewer for the weekly demand analysis.
//!
//! Runs the whole pipeline on the fixed sample week, prints the daily
//! totals and fitted statistics, then opens an interactive histogram of
//! the simulated sample with the percentile cut points marked.

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, LineStyle, Plot, VLine};

use demand_core::{
    run_analysis, DemandAnalysis, DemandTable, Histogram, PercentileSummary, SimulationParams,
    DEFAULT_NUM_BINS,
};

fn main() -> eframe::Result<()> {
    let table = DemandTable::sample_week();
    let params = SimulationParams::default();
    let analysis =
        run_analysis(&table, &params).expect("sample week table should aggregate cleanly");

    print_report(&analysis);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(egui::Vec2::new(1000.0, 600.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Monte Carlo Simulation of Total Daily Demand",
        options,
        Box::new(move |_cc| Ok(Box::new(DemandApp::new(&analysis)))),
    )
}

fn print_report(analysis: &DemandAnalysis) {
    println!("Daily Totals:");
    for (day, total) in &analysis.aggregates.daily_totals {
        println!("{:<12} {}", day.name(), total);
    }
    println!();
    println!(
        "Weekly Average Demand per Hour: {}",
        analysis.aggregates.weekly_average
    );
    println!(
        "Standard Deviation of Daily Totals: {}",
        analysis.aggregates.std_deviation
    );
}

struct DemandApp {
    histogram: Histogram,
    percentiles: PercentileSummary,
}

impl DemandApp {
    fn new(analysis: &DemandAnalysis) -> Self {
        let histogram = Histogram::from_sample(&analysis.simulated_totals, DEFAULT_NUM_BINS)
            .expect("simulated sample is non-empty");
        Self {
            histogram,
            percentiles: analysis.percentiles,
        }
    }

    fn bars(&self) -> Vec<Bar> {
        // Degenerate samples have zero-width bins; give the lone bar a
        // visible width.
        let width = if self.histogram.bin_width > 0.0 {
            self.histogram.bin_width * 0.95
        } else {
            1.0
        };
        self.histogram
            .bin_centers()
            .into_iter()
            .zip(self.histogram.counts.iter())
            .map(|(center, &count)| Bar::new(center, count as f64).width(width))
            .collect()
    }
}

const PERCENTILE_COLORS: [Color32; 4] = [
    Color32::RED,
    Color32::GREEN,
    Color32::BLUE,
    Color32::from_rgb(128, 0, 128),
];

impl eframe::App for DemandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Monte Carlo Simulation of Total Daily Demand");
            Plot::new("demand_histogram")
                .legend(Legend::default())
                .x_axis_label("Total Meals Sold")
                .y_axis_label("Frequency")
                .show(ui, |plot_ui| {
                    plot_ui.bar_chart(
                        BarChart::new("Simulated daily totals", self.bars())
                            .color(Color32::from_rgb(135, 206, 235)),
                    );
                    for ((value, label), color) in
                        self.percentiles.labeled().into_iter().zip(PERCENTILE_COLORS)
                    {
                        plot_ui.vline(
                            VLine::new(label, value)
                                .color(color)
                                .width(1.5)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                });
        });
    }
}
