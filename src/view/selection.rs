//! Filter selection types
//!
//! The transient control state a derived view is computed from.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::dataset::PayloadBounds;

/// Dropdown value meaning "every site"
pub const ALL_SITES: &str = "ALL";

/// Launch site selection from the site dropdown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    All,
    Site(String),
}

impl SiteSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// Whether a record from `site` passes this selection
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::All
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

/// Invalid payload range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("payload range bounds must be finite")]
    NotFinite,

    #[error("payload range low ({low}) exceeds high ({high})")]
    Inverted { low: f64, high: f64 },
}

/// Inclusive payload mass range, always `low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, RangeError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(RangeError::NotFinite);
        }
        if low > high {
            return Err(RangeError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    /// The range covering the whole dataset
    pub fn full(bounds: PayloadBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = RangeError;

    fn try_from([low, high]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

/// Current value of every filter control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterSelection {
    /// Control defaults: all sites, full payload range
    pub fn defaults(bounds: PayloadBounds) -> Self {
        Self {
            site: SiteSelection::All,
            payload: PayloadRange::full(bounds),
        }
    }
}
