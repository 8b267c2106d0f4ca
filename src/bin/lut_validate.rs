//! Lookup-table validation viewer.
//!
//! Reads the trace a table validator leaves behind as `lt_vf.txt` in the
//! working directory and shows reference vs. estimate plus both error
//! series in three stacked panels, so large absolute and relative errors
//! can be correlated by row.

use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;

use curvescope::state::ValidationState;
use curvescope::ui::{panels, plot};

/// Fixed input contract: no flags, the trace sits next to the invocation.
const VALIDATION_FILE: &str = "lt_vf.txt";

fn main() -> Result<()> {
    env_logger::init();

    // A missing or malformed trace is fatal before any window opens.
    let state = ValidationState::load(Path::new(VALIDATION_FILE))
        .context("loading the validation trace")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "curvescope – Lookup-table Validation",
        options,
        Box::new(|_cc| Ok(Box::new(ValidationApp { state }))),
    )
    .map_err(|e| anyhow::anyhow!("running the viewer: {e}"))
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

struct ValidationApp {
    state: ValidationState,
}

impl eframe::App for ValidationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu and error summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the three linked trace panels ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::validation_panels(ui, &self.state.table);
        });
    }
}
