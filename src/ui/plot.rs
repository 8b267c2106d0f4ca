use eframe::egui::{Color32, Id, Ui};
use egui_plot::{
    GridInput, GridMark, Legend, Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points,
};

use crate::color;
use crate::data::model::ValidationTable;
use crate::weighting::{self, WeightingCurve};

// ---------------------------------------------------------------------------
// Validation trace panels
// ---------------------------------------------------------------------------

/// Render the three stacked validation panels with a shared x axis (the
/// row index): reference vs. estimate, absolute error, relative error.
pub fn validation_panels(ui: &mut Ui, table: &ValidationTable) {
    let link_group = ui.id().with("validation_x");
    let panel_height = (ui.available_height() - 2.0 * ui.spacing().item_spacing.y) / 3.0;

    Plot::new("refs_vs_estims")
        .height(panel_height)
        .legend(Legend::default())
        .link_axis(link_group, [true, false])
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(series_points(&table.references()))
                    .name("ref")
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(2.5)
                    .color(Color32::GRAY),
            );
            plot_ui.points(
                Points::new(series_points(&table.estimates()))
                    .name("estim")
                    .shape(MarkerShape::Cross)
                    .radius(3.0)
                    .color(Color32::LIGHT_BLUE),
            );
        });

    error_panel(
        ui,
        "absolute_error",
        "Absolute error",
        panel_height,
        link_group,
        &table.absolute_errors(),
        Color32::LIGHT_RED,
    );
    error_panel(
        ui,
        "relative_error",
        "Relative error",
        panel_height,
        link_group,
        &table.relative_errors(),
        Color32::GOLD,
    );
}

fn error_panel(
    ui: &mut Ui,
    id: &str,
    label: &str,
    height: f32,
    link_group: Id,
    values: &[f64],
    color: Color32,
) {
    Plot::new(id)
        .height(height)
        .y_axis_label(label)
        .link_axis(link_group, [true, false])
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(series_points(values)).color(color).width(1.0));
        });
}

/// Plot a sequence against its row index.
fn series_points(values: &[f64]) -> PlotPoints<'static> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [i as f64, v])
        .collect()
}

// ---------------------------------------------------------------------------
// Weighting curve plot
// ---------------------------------------------------------------------------

/// One curve prepared for display: dB against log10(frequency).
pub struct CurveDisplay {
    pub name: &'static str,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Evaluate, peak-normalize and dB-convert the four weighting curves.
///
/// Points are mapped to `x = log10(f)` because the plot has no native
/// logarithmic axis.  `f = 0` never reaches the plot: it has no place on
/// a log axis and its level is -inf anyway.
pub fn weighting_traces(sample_rate: u32) -> Vec<CurveDisplay> {
    let freqs = weighting::frequency_axis(sample_rate);
    let colors = color::series_palette(WeightingCurve::ALL.len());

    WeightingCurve::ALL
        .iter()
        .zip(colors)
        .map(|(&curve, color)| {
            let db = curve
                .normalized_response(&freqs)
                .into_iter()
                .map(weighting::lin2db);
            let points = freqs
                .iter()
                .zip(db)
                .filter_map(|(&f, y)| {
                    (f > 0.0 && y.is_finite()).then(|| [f.log10(), y])
                })
                .collect();
            CurveDisplay {
                name: curve.label(),
                color,
                points,
            }
        })
        .collect()
}

/// Render the overlaid weighting curves on a logarithmic frequency axis.
pub fn weighting_plot(ui: &mut Ui, traces: &[CurveDisplay]) {
    Plot::new("weighting_curves")
        .legend(Legend::default())
        .x_axis_label("Frequency (Hz)")
        .y_axis_label("Weighting (dB)")
        .x_grid_spacer(log_grid_marks)
        .x_axis_formatter(|mark, _range| log_axis_label(mark))
        .label_formatter(hover_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for trace in traces {
                plot_ui.line(
                    Line::new(PlotPoints::from(trace.points.clone()))
                        .name(trace.name)
                        .color(trace.color)
                        .width(1.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Log axis helpers (axis coordinates are log10 units)
// ---------------------------------------------------------------------------

/// Minor grid lines at 2–9 within each decade, major lines at the decades.
fn log_grid_marks(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let mut marks = Vec::new();
    for decade in (min.floor() as i32)..=(max.ceil() as i32) {
        for mantissa in 1..=9 {
            let value = f64::from(decade) + f64::from(mantissa).log10();
            if value < min || value > max {
                continue;
            }
            let step_size = if mantissa == 1 { 1.0 } else { 0.1 };
            marks.push(GridMark { value, step_size });
        }
    }
    marks
}

/// Only decade marks get a printed label.
fn log_axis_label(mark: GridMark) -> String {
    if mark.step_size < 1.0 {
        return String::new();
    }
    format_hz(10f64.powf(mark.value))
}

fn format_hz(hz: f64) -> String {
    if hz >= 1000.0 {
        format!("{:.0}k", hz / 1000.0)
    } else {
        format!("{hz:.0}")
    }
}

/// Hover readout in real units rather than log coordinates.
fn hover_label(name: &str, point: &PlotPoint) -> String {
    let hz = 10f64.powf(point.x);
    if name.is_empty() {
        format!("{hz:.0} Hz\n{:.1} dB", point.y)
    } else {
        format!("{name}\n{hz:.0} Hz\n{:.1} dB", point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traces_skip_dc_and_keep_finite_points() {
        let traces = weighting_traces(weighting::SAMPLE_RATE);
        assert_eq!(traces.len(), 4);
        for trace in &traces {
            // f = 1 .. 22049 survive; f = 0 is dropped.
            assert_eq!(trace.points.len(), 22_049, "{}", trace.name);
            assert_eq!(trace.points[0][0], 0.0, "{}: first x must be log10(1)", trace.name);
            assert!(
                trace.points.iter().all(|p| p[1].is_finite()),
                "{}: non-finite dB survived",
                trace.name
            );
            // Peak-normalized: nothing above 0 dB.
            assert!(
                trace.points.iter().all(|p| p[1] <= 1e-12),
                "{}: dB above 0",
                trace.name
            );
        }
    }

    #[test]
    fn grid_marks_stay_in_bounds_and_label_only_decades() {
        let input = GridInput {
            bounds: (0.0, 4.35),
            base_step_size: 0.1,
        };
        let marks = log_grid_marks(input);
        assert!(!marks.is_empty());
        assert!(marks.iter().all(|m| m.value >= 0.0 && m.value <= 4.35));

        let labels: Vec<String> = marks.iter().map(|&m| log_axis_label(m)).collect();
        let printed: Vec<&String> = labels.iter().filter(|l| !l.is_empty()).collect();
        // Decades 1, 10, 100, 1k, 10k fall inside [10^0, 10^4.35].
        assert_eq!(printed, ["1", "10", "100", "1k", "10k"]);
    }

    #[test]
    fn frequency_labels_abbreviate_kilohertz() {
        assert_eq!(format_hz(20.0), "20");
        assert_eq!(format_hz(1000.0), "1k");
        assert_eq!(format_hz(16000.0), "16k");
    }
}
