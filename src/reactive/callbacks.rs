//! Dashboard callbacks

use super::error::CallbackError;
use crate::chart::{pie_chart, scatter_chart, Figure};
use crate::dataset::LaunchTable;
use crate::view::{
    filter_by_payload_range, filter_by_site, summarize_outcomes, FilterSelection, Subset,
};

/// Outcome proportions for the selected site
pub fn update_pie_chart(
    table: &LaunchTable,
    selection: &FilterSelection,
) -> Result<Figure, CallbackError> {
    let subset = filter_by_site(Subset::all(table), &selection.site);
    let counts = summarize_outcomes(&subset);
    Ok(pie_chart(&selection.site, &counts))
}

/// Payload/outcome correlation for the selected site and payload range
pub fn update_scatter_chart(
    table: &LaunchTable,
    selection: &FilterSelection,
) -> Result<Figure, CallbackError> {
    let in_range = filter_by_payload_range(Subset::all(table), &selection.payload);
    let subset = filter_by_site(in_range, &selection.site);
    Ok(scatter_chart(&selection.site, &subset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Trace;
    use crate::dataset::{LaunchRecord, Outcome};
    use crate::view::{PayloadRange, SiteSelection};

    #[test]
    fn test_scatter_applies_both_filters() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("A", 100.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 800.0, "FT", Outcome::Failure),
            LaunchRecord::new("B", 1500.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 3000.0, "FT", Outcome::Success),
        ])
        .unwrap();

        let selection = FilterSelection {
            site: SiteSelection::from("A"),
            payload: PayloadRange::new(500.0, 2000.0).unwrap(),
        };

        let figure = update_scatter_chart(&table, &selection).unwrap();
        match &figure.data[0] {
            Trace::Scatter { x, y, .. } => {
                assert_eq!(x, &vec![800.0]);
                assert_eq!(y, &vec![0]);
            }
            other => panic!("Expected Scatter, got {other:?}"),
        }
    }

    #[test]
    fn test_pie_ignores_payload_range() {
        let table = LaunchTable::from_records(vec![
            LaunchRecord::new("A", 100.0, "FT", Outcome::Success),
            LaunchRecord::new("A", 9000.0, "FT", Outcome::Failure),
        ])
        .unwrap();

        let selection = FilterSelection {
            site: SiteSelection::All,
            payload: PayloadRange::new(0.0, 200.0).unwrap(),
        };

        let figure = update_pie_chart(&table, &selection).unwrap();
        match &figure.data[0] {
            Trace::Pie { values, .. } => assert_eq!(values.iter().sum::<usize>(), 2),
            other => panic!("Expected Pie, got {other:?}"),
        }
    }
}
