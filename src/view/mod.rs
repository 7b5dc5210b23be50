//! Derived Views
//!
//! Filtering and aggregation over the launch table. Everything here is a
//! pure function of its inputs and is recomputed on every control change.

mod filter;
mod selection;
mod summary;

pub use filter::{filter_by_payload_range, filter_by_site, Subset};
pub use selection::{FilterSelection, PayloadRange, RangeError, SiteSelection, ALL_SITES};
pub use summary::{summarize_outcomes, OutcomeCounts};
