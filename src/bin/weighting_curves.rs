//! Auditory weighting-curve viewer.
//!
//! Overlays the A/B/C/D frequency-weighting curves, each normalized to
//! its own peak and converted to dB, on a logarithmic frequency axis.

use eframe::egui;

use curvescope::ui::plot::{self, CurveDisplay};
use curvescope::weighting::SAMPLE_RATE;

fn main() -> eframe::Result {
    env_logger::init();

    // The traces are fixed functions of the sample rate: evaluate once,
    // then the event loop only draws.
    let traces = plot::weighting_traces(SAMPLE_RATE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "curvescope – Auditory Weighting Curves",
        options,
        Box::new(|_cc| Ok(Box::new(WeightingApp { traces }))),
    )
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

struct WeightingApp {
    traces: Vec<CurveDisplay>,
}

impl eframe::App for WeightingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::weighting_plot(ui, &self.traces);
        });
    }
}
