//! Launch dataset types
//!
//! Core data structures for the in-memory launch table.

use serde::Serialize;
use std::fmt;

use super::error::{LoadError, LoadResult};

/// Binary launch outcome, stored as the `class` column (1 = success)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret a `class` cell value
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric class value used on chart axes
    pub fn class(&self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Human-readable label for chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single launch attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    /// Sequential flight number, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
    /// Launch site identifier (e.g. "KSC LC-39A")
    pub launch_site: String,
    /// Payload mass in kilograms
    pub payload_mass_kg: f64,
    /// Full booster version, when the source provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    /// Booster version category (e.g. "FT", "B5")
    pub booster_version_category: String,
    /// Launch outcome
    pub outcome: Outcome,
}

impl LaunchRecord {
    /// Create a record with only the required attributes
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            flight_number: None,
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version: None,
            booster_version_category: booster_version_category.into(),
            outcome,
        }
    }
}

/// Inclusive payload mass bounds across the whole table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Immutable in-memory launch table
///
/// Built once at startup and shared behind an `Arc`. Nothing hands out
/// mutable access to the records.
#[derive(Debug)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    bounds: PayloadBounds,
}

impl LaunchTable {
    /// Build a table from records in source order
    ///
    /// Fails with [`LoadError::Empty`] when there are no records, since the
    /// payload bounds would be undefined.
    pub fn from_records(records: Vec<LaunchRecord>) -> LoadResult<Self> {
        let first = records.first().ok_or(LoadError::Empty)?;
        let mut bounds = PayloadBounds {
            min: first.payload_mass_kg,
            max: first.payload_mass_kg,
        };

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            bounds.min = bounds.min.min(record.payload_mass_kg);
            bounds.max = bounds.max.max(record.payload_mass_kg);
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        Ok(Self {
            records,
            sites,
            bounds,
        })
    }

    /// All records in source order
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in first-appearance order
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Minimum and maximum payload mass
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully built table
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
    }

    #[test]
    fn test_table_bounds_and_sites() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("B", 2500.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 0.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("B", 9600.0, "B5", Outcome::Success),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.sites(), &["B".to_string(), "A".to_string()]);
        assert_eq!(
            table.payload_bounds(),
            PayloadBounds {
                min: 0.0,
                max: 9600.0
            }
        );
    }

    #[test]
    fn test_empty_table_rejected() {
        let result = LaunchTable::from_records(Vec::new());
        assert!(matches!(result, Err(LoadError::Empty)));
    }
}
