use eframe::egui::Color32;

use crate::color::palette_color;
use crate::data::model::LaunchDataset;
use crate::data::query::{
    outcome_counts_for_site, payload_window, success_counts_by_site, PayloadRange, SiteSelection,
};

// ---------------------------------------------------------------------------
// Chart specifications – the contract between updaters and rendering
// ---------------------------------------------------------------------------

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// A complete pie chart description, produced fresh on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One color-grouped point series of a scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    /// Booster version category the series represents.
    pub label: String,
    pub color: Color32,
    /// [payload mass (kg), outcome class (0 or 1)] pairs.
    pub points: Vec<[f64; 2]>,
}

/// A complete scatter chart description, produced fresh on every update.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    /// Total point count across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Pie chart updater
// ---------------------------------------------------------------------------

/// Build the success-count pie for the current site selection.
///
/// All sites: one slice per site with at least one success, value = success
/// count. Single site: exactly two slices, failures then successes; a
/// zero-valued slice is kept so the renderer can decide to omit the wedge.
pub fn pie_chart(dataset: &LaunchDataset, selection: &SiteSelection) -> PieSpec {
    match selection {
        SiteSelection::All => {
            let slices = success_counts_by_site(dataset)
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .enumerate()
                .map(|(i, (site, count))| PieSlice {
                    label: site,
                    value: count as f64,
                    color: palette_color(i),
                })
                .collect();
            PieSpec {
                title: "Total Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let (successes, failures) = outcome_counts_for_site(dataset, site);
            let slices = vec![
                PieSlice {
                    label: "failed Launches".to_string(),
                    value: failures as f64,
                    color: palette_color(0),
                },
                PieSlice {
                    label: "success Launches".to_string(),
                    value: successes as f64,
                    color: palette_color(1),
                },
            ];
            PieSpec {
                title: format!("Total Success Launches for site {site}"),
                slices,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter chart updater
// ---------------------------------------------------------------------------

/// Build the payload-vs-outcome scatter for the current selection.
///
/// Rows are kept when `low ≤ payload ≤ high` (inclusive both ends) and, for
/// a single-site selection, when the site matches. Points are grouped into
/// one series per booster category, in first-seen order among the kept rows.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterSpec {
    let title = match selection {
        SiteSelection::All => "Correlation between PayLoad and Success for all Sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between PayLoad and Success for Launch Site: {site}")
        }
    };

    let mut series: Vec<ScatterSeries> = Vec::new();
    for rec in payload_window(dataset, selection, range) {
        let point = [rec.payload_mass_kg, rec.outcome.as_f64()];
        match series.iter_mut().find(|s| s.label == rec.booster_category) {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                label: rec.booster_category.clone(),
                color: palette_color(series.len()),
                points: vec![point],
            }),
        }
    }

    ScatterSpec { title, series }
}
