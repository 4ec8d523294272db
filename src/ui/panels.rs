use eframe::egui::{self, RichText, Ui};

use crate::color::HEADER_COLOR;
use crate::data::query::{PayloadRange, SiteSelection};
use crate::state::{AppState, SLIDER_MAX_KG, SLIDER_MIN_KG, SLIDER_STEP_KG};

// ---------------------------------------------------------------------------
// Top bar – dashboard header and status line
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("Launch Records Dashboard")
                .color(HEADER_COLOR)
                .size(28.0)
                .strong(),
        );
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{} launch records loaded", state.dataset.len()));
        ui.separator();
        ui.label(format!("{} points in view", state.visible_points()));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – input widgets
// ---------------------------------------------------------------------------

/// Render the site dropdown and the payload range sliders. Widget changes
/// feed straight into [`AppState`], which re-runs the affected chart
/// builders.
pub fn control_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    // ---- Site dropdown ----
    ui.strong("Launch Site");
    let mut selection = state.site_selection.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selection.to_string())
        .width(ui.available_width() - 8.0)
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut selection, SiteSelection::All, "All Sites");
            for site in &state.dataset.sites {
                ui.selectable_value(
                    &mut selection,
                    SiteSelection::Site(site.clone()),
                    site.as_str(),
                );
            }
        });
    state.set_site(selection);

    ui.add_space(12.0);

    // ---- Payload range sliders ----
    // Bounds are fixed at [0, 10000] kg regardless of the dataset; the
    // dataset's observed min/max only seed the default selection.
    ui.strong("Payload range (kg)");
    let mut low = state.payload_range.low_kg;
    let mut high = state.payload_range.high_kg;

    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, SLIDER_MIN_KG..=SLIDER_MAX_KG)
                .step_by(SLIDER_STEP_KG)
                .text("min"),
        )
        .changed();
    let high_changed = ui
        .add(
            egui::Slider::new(&mut high, SLIDER_MIN_KG..=SLIDER_MAX_KG)
                .step_by(SLIDER_STEP_KG)
                .text("max"),
        )
        .changed();

    // Keep low ≤ high by dragging the other endpoint along.
    if low_changed && low > high {
        high = low;
    }
    if high_changed && high < low {
        low = high;
    }
    state.set_payload_range(PayloadRange::new(low, high));
}
