use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Selection state passed into the chart builders
// ---------------------------------------------------------------------------

/// The site dropdown value: all sites, or one site by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    Site(String),
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "All Sites"),
            SiteSelection::Site(name) => write!(f, "{name}"),
        }
    }
}

/// Inclusive payload-mass window in kilograms.
///
/// An inverted window (low > high) matches nothing rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low_kg: f64,
    pub high_kg: f64,
}

impl PayloadRange {
    pub fn new(low_kg: f64, high_kg: f64) -> Self {
        PayloadRange { low_kg, high_kg }
    }

    /// Both endpoints are inclusive.
    pub fn contains(&self, payload_kg: f64) -> bool {
        payload_kg >= self.low_kg && payload_kg <= self.high_kg
    }
}

// ---------------------------------------------------------------------------
// Filter / aggregate queries over the immutable dataset
// ---------------------------------------------------------------------------

/// Success count per site, in first-seen site order. Sites without a single
/// success are included with a count of zero.
pub fn success_counts_by_site(dataset: &LaunchDataset) -> Vec<(String, usize)> {
    dataset
        .sites
        .iter()
        .map(|site| {
            let count = dataset
                .records
                .iter()
                .filter(|r| &r.site == site && r.outcome.is_success())
                .count();
            (site.clone(), count)
        })
        .collect()
}

/// (successes, failures) for one site. A site absent from the dataset
/// yields (0, 0).
pub fn outcome_counts_for_site(dataset: &LaunchDataset, site: &str) -> (usize, usize) {
    let mut successes = 0;
    let mut failures = 0;
    for rec in dataset.records.iter().filter(|r| r.site == site) {
        if rec.outcome.is_success() {
            successes += 1;
        } else {
            failures += 1;
        }
    }
    (successes, failures)
}

/// Rows within the payload window, optionally restricted to one site.
pub fn payload_window<'a>(
    dataset: &'a LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    dataset
        .records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| match selection {
            SiteSelection::All => true,
            SiteSelection::Site(site) => &r.site == site,
        })
        .collect()
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

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("A", 500.0, 1, "v1"),
            record("A", 1500.0, 0, "v1"),
            record("B", 3000.0, 1, "v2"),
        ])
    }

    #[test]
    fn success_counts_follow_first_seen_site_order() {
        let ds = dataset();
        assert_eq!(
            success_counts_by_site(&ds),
            vec![("A".to_string(), 1), ("B".to_string(), 1)]
        );
    }

    #[test]
    fn outcome_counts_split_success_and_failure() {
        let ds = dataset();
        assert_eq!(outcome_counts_for_site(&ds, "A"), (1, 1));
        assert_eq!(outcome_counts_for_site(&ds, "B"), (1, 0));
        assert_eq!(outcome_counts_for_site(&ds, "unknown"), (0, 0));
    }

    #[test]
    fn payload_window_is_inclusive_on_both_ends() {
        let ds = dataset();
        let hits = payload_window(&ds, &SiteSelection::All, PayloadRange::new(500.0, 1500.0));
        let payloads: Vec<f64> = hits.iter().map(|r| r.payload_mass_kg).collect();
        assert_eq!(payloads, vec![500.0, 1500.0]);
    }

    #[test]
    fn payload_window_respects_site_selection() {
        let ds = dataset();
        let hits = payload_window(
            &ds,
            &SiteSelection::Site("A".to_string()),
            PayloadRange::new(0.0, 10_000.0),
        );
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|r| r.site == "A"));
    }

    #[test]
    fn disjoint_or_inverted_window_matches_nothing() {
        let ds = dataset();
        let above = payload_window(&ds, &SiteSelection::All, PayloadRange::new(4000.0, 9000.0));
        assert!(above.is_empty());

        let inverted = payload_window(&ds, &SiteSelection::All, PayloadRange::new(2000.0, 100.0));
        assert!(inverted.is_empty());
    }
}
