//! Dashboard Layout
//!
//! Static description of the page: controls first, chart placeholders
//! between them. Built once from the loaded table.

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::dataset::LaunchTable;
use crate::reactive::{CallbackRegistry, ControlId, OutputId};
use crate::view::ALL_SITES;

/// Settings that shape the layout
#[derive(Debug, Clone)]
pub struct LayoutSettings {
    pub title: String,
    pub slider_step: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            slider_step: 1000.0,
        }
    }
}

/// One dropdown entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

/// Page components in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Component {
    Heading {
        text: String,
        color: String,
        font_size_px: u32,
    },
    Dropdown {
        id: ControlId,
        options: Vec<DropdownOption>,
        value: String,
        placeholder: String,
        searchable: bool,
    },
    Graph {
        id: OutputId,
    },
    Paragraph {
        text: String,
    },
    RangeSlider {
        id: ControlId,
        min: f64,
        max: f64,
        step: f64,
        marks: BTreeMap<i64, String>,
        value: [f64; 2],
    },
    Break,
}

impl Component {
    /// Control id, if this component is an input control
    pub fn control_id(&self) -> Option<ControlId> {
        match self {
            Component::Dropdown { id, .. } | Component::RangeSlider { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Output id, if this component is a chart region
    pub fn output_id(&self) -> Option<OutputId> {
        match self {
            Component::Graph { id } => Some(*id),
            _ => None,
        }
    }
}

/// Wiring errors between the layout and the callbacks
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Callback input {0} has no control on the page")]
    MissingControl(ControlId),

    #[error("Callback output {0} has no chart on the page")]
    MissingOutput(OutputId),

    #[error("Component id {0} appears more than once")]
    DuplicateId(String),

    #[error("Failed to render page: {0}")]
    Render(#[from] std::fmt::Error),
}

/// The whole page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub components: Vec<Component>,
}

impl Layout {
    /// Build the launch dashboard layout for `table`
    pub fn dashboard(table: &LaunchTable, settings: &LayoutSettings) -> Self {
        let bounds = table.payload_bounds();

        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(table.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let mut marks = BTreeMap::new();
        let min_mark = bounds.min.trunc() as i64;
        let max_mark = bounds.max.trunc() as i64;
        marks.insert(min_mark, min_mark.to_string());
        marks.insert(max_mark, max_mark.to_string());

        let components = vec![
            Component::Heading {
                text: settings.title.clone(),
                color: "#503D36".to_string(),
                font_size_px: 40,
            },
            Component::Dropdown {
                id: ControlId::SiteDropdown,
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            Component::Break,
            Component::Graph {
                id: OutputId::SuccessPieChart,
            },
            Component::Break,
            Component::Paragraph {
                text: "Payload range (Kg):".to_string(),
            },
            Component::RangeSlider {
                id: ControlId::PayloadSlider,
                min: bounds.min,
                max: bounds.max,
                step: settings.slider_step,
                marks,
                value: [bounds.min, bounds.max],
            },
            Component::Break,
            Component::Graph {
                id: OutputId::SuccessPayloadScatterChart,
            },
        ];

        Self {
            title: settings.title.clone(),
            components,
        }
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.components.iter().filter_map(Component::control_id)
    }

    pub fn outputs(&self) -> impl Iterator<Item = OutputId> + '_ {
        self.components.iter().filter_map(Component::output_id)
    }

    /// Check that every callback reads and writes components on this page
    pub fn validate(&self, registry: &CallbackRegistry) -> Result<(), LayoutError> {
        let mut seen: Vec<&'static str> = Vec::new();
        let ids = self
            .controls()
            .map(|c| c.as_str())
            .chain(self.outputs().map(|o| o.as_str()));
        for id in ids {
            if seen.contains(&id) {
                return Err(LayoutError::DuplicateId(id.to_string()));
            }
            seen.push(id);
        }

        for callback in registry.callbacks() {
            if !self.outputs().any(|o| o == callback.output()) {
                return Err(LayoutError::MissingOutput(callback.output()));
            }
            if let Some(missing) = callback
                .inputs()
                .iter()
                .find(|input| !self.controls().any(|c| c == **input))
            {
                return Err(LayoutError::MissingControl(*missing));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};

    fn table() -> LaunchTable {
        LaunchTable::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", Outcome::Failure),
            LaunchRecord::new("KSC LC-39A", 9600.0, "B5", Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn test_dropdown_options() {
        let layout = Layout::dashboard(&table(), &LayoutSettings::default());
        let dropdown = layout
            .components
            .iter()
            .find(|c| c.control_id() == Some(ControlId::SiteDropdown))
            .unwrap();

        match dropdown {
            Component::Dropdown { options, value, .. } => {
                let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, vec!["ALL", "CCAFS LC-40", "KSC LC-39A"]);
                assert_eq!(options[0].label, "All Sites");
                assert_eq!(value, "ALL");
            }
            other => panic!("Expected Dropdown, got {other:?}"),
        }
    }

    #[test]
    fn test_slider_bounds() {
        let layout = Layout::dashboard(&table(), &LayoutSettings::default());
        let slider = layout
            .components
            .iter()
            .find(|c| c.control_id() == Some(ControlId::PayloadSlider))
            .unwrap();

        match slider {
            Component::RangeSlider {
                min,
                max,
                step,
                marks,
                value,
                ..
            } => {
                assert_eq!((*min, *max), (0.0, 9600.0));
                assert_eq!(*step, 1000.0);
                assert_eq!(value, &[0.0, 9600.0]);
                assert_eq!(marks.get(&0).map(String::as_str), Some("0"));
                assert_eq!(marks.get(&9600).map(String::as_str), Some("9600"));
            }
            other => panic!("Expected RangeSlider, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_dashboard_wiring() {
        let layout = Layout::dashboard(&table(), &LayoutSettings::default());
        let registry = CallbackRegistry::dashboard().unwrap();
        assert_eq!(layout.validate(&registry), Ok(()));
    }

    #[test]
    fn test_validate_missing_output() {
        let mut layout = Layout::dashboard(&table(), &LayoutSettings::default());
        layout
            .components
            .retain(|c| c.output_id() != Some(OutputId::SuccessPieChart));

        let registry = CallbackRegistry::dashboard().unwrap();
        assert_eq!(
            layout.validate(&registry),
            Err(LayoutError::MissingOutput(OutputId::SuccessPieChart))
        );
    }

    #[test]
    fn test_validate_missing_control() {
        let mut layout = Layout::dashboard(&table(), &LayoutSettings::default());
        layout
            .components
            .retain(|c| c.control_id() != Some(ControlId::PayloadSlider));

        let registry = CallbackRegistry::dashboard().unwrap();
        assert_eq!(
            layout.validate(&registry),
            Err(LayoutError::MissingControl(ControlId::PayloadSlider))
        );
    }

    #[test]
    fn test_layout_json_shape() {
        let layout = Layout::dashboard(&table(), &LayoutSettings::default());
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["components"][1]["kind"], "dropdown");
        assert_eq!(json["components"][1]["id"], "site-dropdown");
        assert_eq!(json["components"][6]["marks"]["9600"], "9600");
    }
}
