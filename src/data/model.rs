use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch result
// ---------------------------------------------------------------------------

/// Outcome of a launch attempt, from the dataset's 0/1 `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Map the raw `class` value. Anything outside {0, 1} is rejected.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Numeric value for plotting (0.0 or 1.0).
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "failed"),
            Outcome::Success => write!(f, "success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms, non-negative.
    pub payload_mass_kg: f64,
    /// Success / failure of the attempt.
    pub outcome: Outcome,
    /// Booster hardware variant, used only for scatter-plot color grouping.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with scalars derived once at load time.
///
/// Immutable after construction; the whole UI reads from one instance for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct site names in first-seen order.
    pub sites: Vec<String>,
    /// Distinct booster version categories in first-seen order.
    pub booster_categories: Vec<String>,
    /// Smallest payload mass in the table (kg).
    pub min_payload: f64,
    /// Largest payload mass in the table (kg).
    pub max_payload: f64,
}

impl LaunchDataset {
    /// Build the derived indices and payload bounds from the loaded rows.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            if !booster_categories.contains(&rec.booster_category) {
                booster_categories.push(rec.booster_category.clone());
            }
            min_payload = min_payload.min(rec.payload_mass_kg);
            max_payload = max_payload.max(rec.payload_mass_kg);
        }

        if records.is_empty() {
            min_payload = 0.0;
            max_payload = 0.0;
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            min_payload,
            max_payload,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome: Outcome::from_class(class).unwrap(),
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn derived_scalars_and_first_seen_order() {
        let ds = LaunchDataset::from_records(vec![
            record("B", 3000.0, 1, "v2"),
            record("A", 500.0, 1, "v1"),
            record("A", 1500.0, 0, "v1"),
            record("B", 9600.0, 0, "v3"),
        ]);

        assert_eq!(ds.sites, vec!["B", "A"]);
        assert_eq!(ds.booster_categories, vec!["v2", "v1", "v3"]);
        assert_eq!(ds.min_payload, 500.0);
        assert_eq!(ds.max_payload, 9600.0);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn outcome_rejects_values_outside_binary_range() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
    }
}
