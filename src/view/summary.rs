//! Outcome aggregation

use serde::Serialize;
use std::collections::BTreeMap;

use super::filter::Subset;
use crate::dataset::Outcome;

/// Count of launches per outcome
///
/// Only outcomes present in the summarized subset have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    counts: BTreeMap<Outcome, usize>,
}

impl OutcomeCounts {
    /// Count for `outcome`, zero when absent
    pub fn get(&self, outcome: Outcome) -> usize {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Whether `outcome` occurred at least once
    pub fn contains(&self, outcome: Outcome) -> bool {
        self.counts.contains_key(&outcome)
    }

    /// Total number of summarized rows
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Present outcomes with their counts, failure before success
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, usize)> + '_ {
        self.counts.iter().map(|(o, c)| (*o, *c))
    }
}

/// Group a subset by outcome
pub fn summarize_outcomes(subset: &Subset<'_>) -> OutcomeCounts {
    let mut counts = BTreeMap::new();
    for record in subset.iter() {
        *counts.entry(record.outcome).or_insert(0) += 1;
    }
    OutcomeCounts { counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, LaunchTable};
    use crate::view::{filter_by_site, SiteSelection};

    #[test]
    fn test_site_a_summary() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("A", 1.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 2.0, "FT", Outcome::Failure),
            LaunchRecord::new("B", 3.0, "FT", Outcome::Success),
            LaunchRecord::new("B", 4.0, "FT", Outcome::Success),
        ])
        .unwrap();

        let site_a = filter_by_site(Subset::all(&table), &SiteSelection::from("A"));
        assert_eq!(site_a.len(), 2);

        let counts = summarize_outcomes(&site_a);
        assert_eq!(counts.get(Outcome::Success), 1);
        assert_eq!(counts.get(Outcome::Failure), 1);
        assert_eq!(counts.total(), site_a.len());
    }

    #[test]
    fn test_absent_outcome_not_zero_filled() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("B", 3.0, "FT", Outcome::Success),
            LaunchRecord::new("B", 4.0, "FT", Outcome::Success),
        ])
        .unwrap();

        let counts = summarize_outcomes(&Subset::all(&table));
        assert!(!counts.contains(Outcome::Failure));
        assert_eq!(counts.iter().collect::<Vec<_>>(), vec![(Outcome::Success, 2)]);
    }

    #[test]
    fn test_empty_subset() {
        let counts = summarize_outcomes(&Subset::default());
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
