use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchboardApp {
    pub state: AppState,
}

impl LaunchboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dashboard header ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: input controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::control_panel(ui, &mut self.state);
            });

        // ---- Central panel: pie above, scatter below ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let half = ui.available_height() * 0.5;
            charts::pie_chart(ui, &self.state.pie, (half - 70.0).max(120.0));
            ui.separator();
            let remaining = (ui.available_height() - 50.0).max(120.0);
            charts::scatter_chart(ui, &self.state.scatter, remaining);
        });
    }
}
