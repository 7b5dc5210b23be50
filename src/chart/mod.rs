//! Chart Figures
//!
//! Plotly-compatible figure descriptions and the builders for the pie and
//! scatter charts shown on the dashboard.

mod builders;
mod figure;

pub use builders::{pie_chart, scatter_chart};
pub use figure::{Axis, Figure, FigureLayout, Legend, Marker, Title, Trace};
