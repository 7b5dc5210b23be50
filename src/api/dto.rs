//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::dataset::PayloadBounds;
use crate::reactive::{ControlId, OutputId, Update};
use crate::view::{FilterSelection, PayloadRange, SiteSelection};

// ============================================
// UPDATE DTOs
// ============================================

/// Stateless recompute request
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    /// Control that changed; absent or null for the initial render
    #[serde(default)]
    pub trigger: Option<ControlId>,
    /// Current value of every control
    pub inputs: ControlInputs,
}

/// Raw control values as sent by the page
#[derive(Debug, Deserialize)]
pub struct ControlInputs {
    pub site: SiteSelection,
    /// `[low, high]`, validated after parsing
    pub payload: [f64; 2],
}

impl ControlInputs {
    /// Validate into a filter selection
    pub fn into_selection(self) -> Result<FilterSelection, crate::view::RangeError> {
        Ok(FilterSelection {
            site: self.site,
            payload: PayloadRange::try_from(self.payload)?,
        })
    }
}

/// One recomputed output
#[derive(Debug, Serialize)]
pub struct OutputUpdate {
    pub output: OutputId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure: Option<Figure>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OutputUpdate {
    /// Convert a callback update, hiding error details unless `verbose`
    pub fn from_update(update: Update, verbose: bool) -> Self {
        match update.result {
            Ok(figure) => Self {
                output: update.output,
                figure: Some(figure),
                error: None,
            },
            Err(e) => Self {
                output: update.output,
                figure: None,
                error: Some(if verbose {
                    e.to_string()
                } else {
                    "Callback failed".to_string()
                }),
            },
        }
    }
}

/// Stateless recompute response
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub updates: Vec<OutputUpdate>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Dataset summary
#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub records: usize,
    pub sites: Vec<String>,
    pub payload_bounds: PayloadBounds,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "unhealthy"
    pub status: String,
    /// Number of loaded launch records
    pub records: usize,
    /// Active WebSocket sessions
    pub sessions: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_without_trigger() {
        let json = r#"{"inputs": {"site": "ALL", "payload": [0, 9600]}}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert!(req.trigger.is_none());

        let selection = req.inputs.into_selection().unwrap();
        assert_eq!(selection.site, SiteSelection::All);
        assert_eq!(selection.payload.high(), 9600.0);
    }

    #[test]
    fn test_update_request_inverted_range() {
        let json = r#"{"trigger": "payload-slider", "inputs": {"site": "A", "payload": [9600, 0]}}"#;
        let req: UpdateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.trigger, Some(ControlId::PayloadSlider));
        assert!(req.inputs.into_selection().is_err());
    }

    #[test]
    fn test_output_update_serialization() {
        let update = OutputUpdate {
            output: OutputId::SuccessPieChart,
            figure: None,
            error: Some("Callback failed".to_string()),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["output"], "success-pie-chart");
        assert!(json.get("figure").is_none());
    }
}
