//! Reactive Bindings
//!
//! Declares which control changes recompute which chart.
//!
//! ## Architecture
//!
//! - **CallbackRegistry**: output → (inputs, handler) table, dispatched by control id
//! - **Session**: one client's current [`FilterSelection`](crate::view::FilterSelection)
//! - **callbacks**: the pie and scatter handlers
//!
//! ```text
//! control change → Session::control_changed → CallbackRegistry::dispatch
//!                                                   │
//!                         ┌─────────────────────────┴───────────┐
//!                         ▼                                     ▼
//!              update_pie_chart                      update_scatter_chart
//!                         │                                     │
//!                         └──────────────► Vec<Update> ◄────────┘
//! ```

pub mod callbacks;
mod error;
mod ids;
mod registry;
mod session;

pub use error::{CallbackError, RegistryError};
pub use ids::{ControlChange, ControlId, OutputId};
pub use registry::{Callback, CallbackRegistry, Handler, Update};
pub use session::{Phase, Session};
