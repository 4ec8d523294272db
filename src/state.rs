use crate::chart::{pie_chart, scatter_chart, PieSpec, ScatterSpec};
use crate::data::model::LaunchDataset;
use crate::data::query::{PayloadRange, SiteSelection};

/// Fixed payload slider bounds in kilograms. Deliberately independent of the
/// dataset's observed min/max, which only seed the default selection.
pub const SLIDER_MIN_KG: f64 = 0.0;
pub const SLIDER_MAX_KG: f64 = 10_000.0;
/// Slider increment in kilograms.
pub const SLIDER_STEP_KG: f64 = 1_000.0;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is loaded once before the window opens and never mutated.
/// Each input setter re-runs exactly the chart builders that depend on it:
/// the pie depends on the site selection only, the scatter on both inputs.
pub struct AppState {
    /// Loaded dataset, immutable for the process lifetime.
    pub dataset: LaunchDataset,

    /// Current site dropdown value.
    pub site_selection: SiteSelection,

    /// Current payload slider window.
    pub payload_range: PayloadRange,

    /// Pie spec for the current site selection (cached).
    pub pie: PieSpec,

    /// Scatter spec for the current selection and range (cached).
    pub scatter: ScatterSpec,
}

impl AppState {
    /// Build the initial state: all sites selected, payload window defaulted
    /// to the dataset's observed bounds, clamped into the fixed slider range.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site_selection = SiteSelection::All;
        let payload_range = PayloadRange::new(
            dataset.min_payload.clamp(SLIDER_MIN_KG, SLIDER_MAX_KG),
            dataset.max_payload.clamp(SLIDER_MIN_KG, SLIDER_MAX_KG),
        );

        let pie = pie_chart(&dataset, &site_selection);
        let scatter = scatter_chart(&dataset, &site_selection, payload_range);

        AppState {
            dataset,
            site_selection,
            payload_range,
            pie,
            scatter,
        }
    }

    /// Change the site selection; recomputes both charts.
    pub fn set_site(&mut self, selection: SiteSelection) {
        if self.site_selection == selection {
            return;
        }
        self.site_selection = selection;
        self.pie = pie_chart(&self.dataset, &self.site_selection);
        self.scatter = scatter_chart(&self.dataset, &self.site_selection, self.payload_range);
    }

    /// Change the payload window; recomputes the scatter only.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if self.payload_range == range {
            return;
        }
        self.payload_range = range;
        self.scatter = scatter_chart(&self.dataset, &self.site_selection, self.payload_range);
    }

    /// Points currently shown in the scatter, for the status line.
    pub fn visible_points(&self) -> usize {
        self.scatter.point_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    fn state() -> AppState {
        AppState::new(LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "v1"),
            record("A", 1500.0, 0, "v1"),
            record("B", 3000.0, 1, "v2"),
        ]))
    }

    #[test]
    fn default_range_comes_from_dataset_bounds() {
        let st = state();
        assert_eq!(st.site_selection, SiteSelection::All);
        assert_eq!(st.payload_range, PayloadRange::new(500.0, 3000.0));
        assert_eq!(st.visible_points(), 3);
    }

    #[test]
    fn default_range_is_clamped_into_slider_bounds() {
        let st = AppState::new(LaunchDataset::from_records(vec![record(
            "A", 15_000.0, 1, "v1",
        )]));
        assert_eq!(st.payload_range.high_kg, SLIDER_MAX_KG);
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut st = state();
        let pie_before = st.pie.clone();
        let scatter_before = st.scatter.clone();

        st.set_site(SiteSelection::Site("A".to_string()));

        assert_ne!(st.pie, pie_before);
        assert_ne!(st.scatter, scatter_before);
        assert_eq!(st.visible_points(), 2);
    }

    #[test]
    fn range_change_leaves_pie_untouched() {
        let mut st = state();
        let pie_before = st.pie.clone();

        st.set_payload_range(PayloadRange::new(1000.0, 2000.0));

        assert_eq!(st.pie, pie_before);
        assert_eq!(st.visible_points(), 1);
    }
}
