use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, RichText, Shape, Stroke, Ui, Vec2};
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::chart::{PieSpec, ScatterSpec};
use crate::color::TITLE_COLOR;

// ---------------------------------------------------------------------------
// Pie chart (painter-drawn)
// ---------------------------------------------------------------------------

/// Render a [`PieSpec`]: centered title, wedges, legend.
///
/// Zero-valued slices keep their legend entry but get no wedge.
pub fn pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    chart_title(ui, &spec.title);

    let total = spec.total();
    if total <= 0.0 {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label("No launches match the current selection.");
        });
        return;
    }

    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let radius = (rect.height().min(rect.width()) * 0.5 - 8.0).max(0.0);
    let center = rect.center();

    // Wedges start at 12 o'clock and run clockwise in slice order.
    let mut angle = -TAU / 4.0;
    for slice in &spec.slices {
        if slice.value <= 0.0 {
            continue;
        }
        let sweep = (slice.value / total) as f32 * TAU;
        draw_wedge(&painter, center, radius, angle, sweep, slice.color);
        angle += sweep;
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for slice in &spec.slices {
            legend_swatch(ui, slice.color);
            ui.label(format!("{} ({})", slice.label, slice.value as u64));
            ui.add_space(8.0);
        }
    });
}

/// A wedge is drawn as a fan of small triangles so the painter only ever
/// sees convex shapes, whatever the sweep angle.
fn draw_wedge(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    let segments = ((sweep / 0.05).ceil() as usize).max(1);
    let step = sweep / segments as f32;
    for i in 0..segments {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        let p0 = center + radius * Vec2::new(a0.cos(), a0.sin());
        let p1 = center + radius * Vec2::new(a1.cos(), a1.sin());
        painter.add(Shape::convex_polygon(
            vec![center, p0, p1],
            color,
            Stroke::NONE,
        ));
    }
}

fn legend_swatch(ui: &mut Ui, color: Color32) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
}

// ---------------------------------------------------------------------------
// Scatter chart (egui_plot)
// ---------------------------------------------------------------------------

/// Render a [`ScatterSpec`]: centered title, one point series per booster
/// version category.
pub fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec, height: f32) {
    chart_title(ui, &spec.title);

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Class")
        .include_y(-0.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.label)
                        .color(series.color)
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}

fn chart_title(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).color(TITLE_COLOR).heading());
    });
}
