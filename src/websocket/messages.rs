//! WebSocket Message Types
//!
//! Defines all message types exchanged between the dashboard page and the
//! server over `/ws`.

use serde::{Deserialize, Serialize};

use crate::chart::Figure;
use crate::reactive::{ControlId, OutputId, Update};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Page loaded; render every chart for the default controls
    Init,
    /// A control's value changed
    ControlChanged {
        /// Control that changed (e.g. "site-dropdown")
        control: ControlId,
        /// New raw value: a site string or a `[low, high]` pair
        value: serde_json::Value,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// New figure for a chart region
    Figure { output: OutputId, figure: Figure },
    /// A recomputation failed; the client keeps the previous chart
    CallbackError {
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<OutputId>,
        message: String,
    },
    /// Pong response to ping
    Pong,
    /// Protocol-level error
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    /// Convert a callback update into the message for its chart
    ///
    /// With `verbose` unset, handler failures are reported with a generic
    /// message instead of the error text.
    pub fn from_update(update: Update, verbose: bool) -> Self {
        match update.result {
            Ok(figure) => ServerMessage::Figure {
                output: update.output,
                figure,
            },
            Err(e) => ServerMessage::CallbackError {
                output: Some(update.output),
                message: if verbose {
                    e.to_string()
                } else {
                    "Callback failed".to_string()
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::CallbackError;

    #[test]
    fn test_client_message_deserialize_control_changed() {
        let json = r#"{"type": "control_changed", "control": "payload-slider", "value": [0, 5000]}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        match msg {
            ClientMessage::ControlChanged { control, value } => {
                assert_eq!(control, ControlId::PayloadSlider);
                assert_eq!(value[1], 5000);
            }
            _ => panic!("Expected ControlChanged"),
        }
    }

    #[test]
    fn test_client_message_unknown_control() {
        let json = r#"{"type": "control_changed", "control": "color-picker", "value": "red"}"#;
        assert!(serde_json::from_str::<ClientMessage>(json).is_err());
    }

    #[test]
    fn test_client_message_deserialize_init_and_ping() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "init"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Init));
        let msg: ClientMessage = serde_json::from_str(r#"{"type": "ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
    }

    #[test]
    fn test_server_message_serialize_figure() {
        let msg = ServerMessage::Figure {
            output: OutputId::SuccessPieChart,
            figure: Figure::new("Total Success Launches for All Sites"),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"figure\""));
        assert!(json.contains("\"output\":\"success-pie-chart\""));
    }

    #[test]
    fn test_from_update_hides_details_unless_verbose() {
        let update = Update {
            output: OutputId::SuccessPieChart,
            result: Err(CallbackError::Handler {
                output: OutputId::SuccessPieChart,
                message: "secret".to_string(),
            }),
        };

        match ServerMessage::from_update(update.clone(), false) {
            ServerMessage::CallbackError { message, .. } => assert_eq!(message, "Callback failed"),
            other => panic!("Expected CallbackError, got {other:?}"),
        }
        match ServerMessage::from_update(update, true) {
            ServerMessage::CallbackError { message, .. } => assert!(message.contains("secret")),
            other => panic!("Expected CallbackError, got {other:?}"),
        }
    }
}
