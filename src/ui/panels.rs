use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader;
use crate::state::ValidationState;

// ---------------------------------------------------------------------------
// Top bar – validation viewer
// ---------------------------------------------------------------------------

/// Render the top menu / status bar of the validation viewer.
pub fn top_bar(ui: &mut Ui, state: &mut ValidationState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows from {}",
            state.table.len(),
            state.source.display()
        ));

        ui.separator();

        ui.label(format!(
            "abs err mean {:.2e}, max {:.2e}",
            state.stats.abserr_mean, state.stats.abserr_max
        ));

        ui.separator();

        ui.label(format!(
            "rel err mean {:.2e}, max {:.2e}",
            state.stats.relerr_mean, state.stats.relerr_max
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the operator load another trace without restarting.  A failed load
/// keeps the current table on screen; the error goes to the log and the
/// status label only.
pub fn open_file_dialog(state: &mut ValidationState) {
    let file = rfd::FileDialog::new()
        .set_title("Open validation trace")
        .add_filter("Validation trace", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_table(&path) {
            Ok(table) => {
                log::info!("loaded {} rows from {}", table.len(), path.display());
                state.set_table(table, path);
            }
            Err(e) => {
                log::error!("failed to load trace: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
