//! Figure description
//!
//! Serializes to the `{ "data": [...], "layout": {...} }` object that
//! Plotly's `react()` accepts, so the page can draw it without translation.

use serde::Serialize;

/// Chart traces
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<usize>,
        hole: f64,
        sort: bool,
    },
    Scatter {
        name: String,
        x: Vec<f64>,
        y: Vec<u8>,
        mode: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        marker: Option<Marker>,
    },
}

/// Marker styling for scatter traces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
    pub size: u32,
}

/// Figure title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

/// Axis settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
}

impl Axis {
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title { text: text.into() },
            tickvals: None,
        }
    }
}

/// Figure layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

/// Legend settings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

/// A complete chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl Figure {
    /// Figure with a title and no axes
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            layout: FigureLayout {
                title: Title { text: title.into() },
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn axes(mut self, x: Axis, y: Axis) -> Self {
        self.layout.xaxis = Some(x);
        self.layout.yaxis = Some(y);
        self
    }

    pub fn legend_title(mut self, text: impl Into<String>) -> Self {
        self.layout.legend = Some(Legend {
            title: Title { text: text.into() },
        });
        self
    }
}
