//! Component identifiers and control changes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::CallbackError;
use crate::view::{PayloadRange, SiteSelection};

/// Filter controls that can trigger recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

impl ControlId {
    /// DOM id of the control on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlId::SiteDropdown => "site-dropdown",
            ControlId::PayloadSlider => "payload-slider",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chart regions that callbacks write to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl OutputId {
    /// DOM id of the chart region on the page
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputId::SuccessPieChart => "success-pie-chart",
            OutputId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for OutputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed new value for one control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlChange {
    Site(SiteSelection),
    Payload(PayloadRange),
}

impl ControlChange {
    /// Interpret a raw JSON value sent for `control`
    pub fn parse(control: ControlId, value: serde_json::Value) -> Result<Self, CallbackError> {
        let invalid = |e: serde_json::Error| CallbackError::InvalidValue {
            control,
            message: e.to_string(),
        };

        match control {
            ControlId::SiteDropdown => serde_json::from_value::<SiteSelection>(value)
                .map(ControlChange::Site)
                .map_err(invalid),
            ControlId::PayloadSlider => serde_json::from_value::<PayloadRange>(value)
                .map(ControlChange::Payload)
                .map_err(invalid),
        }
    }

    /// The control this change belongs to
    pub fn control(&self) -> ControlId {
        match self {
            ControlChange::Site(_) => ControlId::SiteDropdown,
            ControlChange::Payload(_) => ControlId::PayloadSlider,
        }
    }
}
