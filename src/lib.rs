//! # Launchboard
//!
//! Interactive dashboard over a static table of SpaceX launch records.
//! A site dropdown and a payload range slider drive two charts: a pie of
//! launch outcomes and a payload/outcome scatter by booster category.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading into an immutable launch table
//! - [`view`]: Filters and outcome aggregation
//! - [`chart`]: Plotly-compatible figure builders
//! - [`reactive`]: Control → chart callback registry and sessions
//! - [`ui`]: Page layout and HTML rendering
//! - [`api`]: HTTP server with Axum
//! - [`websocket`]: Per-session control channel
//!
//! ## Quick Start
//!
//! ```rust
//! use launchboard::dataset::load_table_from_reader;
//! use launchboard::view::{filter_by_site, summarize_outcomes, SiteSelection, Subset};
//! use launchboard::Outcome;
//!
//! let csv = "Launch Site,Payload Mass (kg),Booster Version Category,class
//! A,500,FT,1
//! A,900,FT,0
//! B,2500,B5,1
//! ";
//! let table = load_table_from_reader(csv.as_bytes()).unwrap();
//!
//! let site_a = filter_by_site(Subset::all(&table), &SiteSelection::from("A"));
//! let counts = summarize_outcomes(&site_a);
//!
//! assert_eq!(counts.get(Outcome::Success), 1);
//! assert_eq!(counts.get(Outcome::Failure), 1);
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod reactive;
pub mod ui;
pub mod view;
pub mod websocket;

// Re-export top-level types for convenience
pub use dataset::{
    load_table, LaunchRecord, LaunchTable, LoadError, LoadResult, Outcome, PayloadBounds,
};

pub use view::{
    filter_by_payload_range, filter_by_site, summarize_outcomes, FilterSelection, OutcomeCounts,
    PayloadRange, SiteSelection, Subset,
};

pub use chart::{pie_chart, scatter_chart, Figure, Trace};

pub use reactive::{
    CallbackError, CallbackRegistry, ControlId, OutputId, RegistryError, Session, Update,
};

pub use ui::{render_page, Layout, LayoutError, LayoutSettings, PageOptions};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use websocket::{ClientMessage, ConnectionHub, HubConfig, HubError, ServerMessage};

pub use config::{Config, ConfigError, LoggingConfig};
