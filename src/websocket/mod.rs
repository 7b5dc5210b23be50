//! WebSocket Sessions
//!
//! Carries control changes from the dashboard page to the server and new
//! figures back, one [`Session`](crate::reactive::Session) per connection.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks active connections and their outbound channels
//! - **Handler**: Handles WebSocket upgrade and message processing
//! - **Messages**: Defines client and server message formats
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'init'}));
//!   ws.send(JSON.stringify({type: 'control_changed', control: 'site-dropdown', value: 'KSC LC-39A'}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'figure') Plotly.react(msg.output, msg.figure.data, msg.figure.layout);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage};
