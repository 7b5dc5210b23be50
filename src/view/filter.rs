//! Filter Engine
//!
//! Pure, order-preserving filters over the launch table.
//!
//! # Composition
//!
//! ```text
//! pie     : table → site
//! scatter : table → payload range → site
//! ```

use std::ops::Deref;

use super::selection::{PayloadRange, SiteSelection};
use crate::dataset::{LaunchRecord, LaunchTable};

/// Borrowed, order-preserving subset of table rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Subset<'a> {
    rows: Vec<&'a LaunchRecord>,
}

impl<'a> Subset<'a> {
    /// Every row of the table
    pub fn all(table: &'a LaunchTable) -> Self {
        Self {
            rows: table.records().iter().collect(),
        }
    }

    pub fn rows(&self) -> &[&'a LaunchRecord] {
        &self.rows
    }

    fn retain(self, keep: impl Fn(&LaunchRecord) -> bool) -> Self {
        Self {
            rows: self.rows.into_iter().filter(|r| keep(r)).collect(),
        }
    }
}

impl<'a> Deref for Subset<'a> {
    type Target = [&'a LaunchRecord];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl<'a> FromIterator<&'a LaunchRecord> for Subset<'a> {
    fn from_iter<I: IntoIterator<Item = &'a LaunchRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Rows launched from `site`, or all rows for [`SiteSelection::All`]
///
/// A site with no matching rows yields an empty subset.
pub fn filter_by_site<'a>(subset: Subset<'a>, site: &SiteSelection) -> Subset<'a> {
    if site.is_all() {
        return subset;
    }
    subset.retain(|r| site.matches(&r.launch_site))
}

/// Rows whose payload mass lies within `range`, bounds inclusive
pub fn filter_by_payload_range<'a>(subset: Subset<'a>, range: &PayloadRange) -> Subset<'a> {
    subset.retain(|r| range.contains(r.payload_mass_kg))
}
