//! Chart builders
//!
//! Turn derived views into figures for the two dashboard charts.

use super::figure::{Axis, Figure, Marker, Trace};
use crate::view::{OutcomeCounts, SiteSelection, Subset};

/// Plotly's default qualitative palette, one color per booster category
const CATEGORY_COLORS: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

const PIE_HOLE: f64 = 0.3;
const MARKER_SIZE: u32 = 9;

fn site_label(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "All Sites".to_string(),
        SiteSelection::Site(name) => name.clone(),
    }
}

/// Success/failure proportions for the selected site
pub fn pie_chart(site: &SiteSelection, counts: &OutcomeCounts) -> Figure {
    let (labels, values) = counts
        .iter()
        .map(|(outcome, count)| (outcome.label().to_string(), count))
        .unzip();

    Figure::new(format!("Total Success Launches for {}", site_label(site))).trace(Trace::Pie {
        labels,
        values,
        hole: PIE_HOLE,
        sort: false,
    })
}

/// Payload mass against outcome, one trace per booster version category
///
/// Categories appear in the order they first occur in the subset.
pub fn scatter_chart(site: &SiteSelection, subset: &Subset<'_>) -> Figure {
    let mut categories: Vec<(&str, Vec<f64>, Vec<u8>)> = Vec::new();

    for record in subset.iter() {
        let category = record.booster_version_category.as_str();
        let pos = match categories.iter().position(|(c, _, _)| *c == category) {
            Some(pos) => pos,
            None => {
                categories.push((category, Vec::new(), Vec::new()));
                categories.len() - 1
            }
        };
        categories[pos].1.push(record.payload_mass_kg);
        categories[pos].2.push(record.outcome.class());
    }

    let mut y_axis = Axis::titled("class");
    y_axis.tickvals = Some(vec![0.0, 1.0]);

    let mut figure = Figure::new(format!(
        "Correlation between Payload and Success for {}",
        site_label(site)
    ))
    .axes(Axis::titled("Payload Mass (kg)"), y_axis)
    .legend_title("Booster Version Category");

    for (i, (category, x, y)) in categories.into_iter().enumerate() {
        figure = figure.trace(Trace::Scatter {
            name: category.to_string(),
            x,
            y,
            mode: "markers",
            marker: Some(Marker {
                color: CATEGORY_COLORS[i % CATEGORY_COLORS.len()].to_string(),
                size: MARKER_SIZE,
            }),
        });
    }

    figure
}
