//! Application state for the HTTP server.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::services::Dashboard;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single dashboard session; each request holds the lock until done.
    pub dashboard: Arc<RwLock<Dashboard>>,
}

impl AppState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: Arc::new(RwLock::new(dashboard)),
        }
    }
}
