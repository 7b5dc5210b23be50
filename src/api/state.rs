//! Application State
//!
//! Shared state accessible by all API handlers.
//! Everything here is built once at startup and only read afterwards.

use crate::dataset::LaunchTable;
use crate::reactive::CallbackRegistry;
use crate::ui::{render_page, Layout, LayoutError, LayoutSettings, PageOptions};
use crate::websocket::{ConnectionHub, HubConfig};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch records, loaded once
    pub table: Arc<LaunchTable>,
    /// Control → chart callbacks
    pub registry: Arc<CallbackRegistry>,
    /// Page layout
    pub layout: Arc<Layout>,
    /// Pre-rendered dashboard page
    pub page: Arc<String>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// WebSocket connection hub
    pub ws_hub: Arc<ConnectionHub>,
}

impl AppState {
    /// Wire up the dashboard for `table`
    ///
    /// Fails if the layout and the callbacks disagree about component ids.
    pub fn new(
        table: Arc<LaunchTable>,
        registry: CallbackRegistry,
        settings: &LayoutSettings,
        config: ApiConfig,
    ) -> Result<Self, LayoutError> {
        let layout = Layout::dashboard(&table, settings);
        layout.validate(&registry)?;

        let page = render_page(&layout, &PageOptions { debug: config.debug })?;
        let hub_config = HubConfig {
            max_connections: config.max_connections,
        };

        Ok(Self {
            table,
            registry: Arc::new(registry),
            layout: Arc::new(layout),
            page: Arc::new(page),
            config: Arc::new(config),
            start_time: Instant::now(),
            ws_hub: Arc::new(ConnectionHub::new(hub_config)),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket connection count
    pub async fn ws_connection_count(&self) -> usize {
        self.ws_hub.connection_count().await
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Debug mode: verbose errors, no page caching
    pub debug: bool,
    /// Maximum concurrent WebSocket sessions
    pub max_connections: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
            debug: false,
            max_connections: HubConfig::default().max_connections,
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
