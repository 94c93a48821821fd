//! Keepalive server state.
//!
//! Defines the `AppState` struct handed to the keepalive router. It carries the health
//! monitor so the status endpoint can report the current belief, plus the poll cadence
//! the monitor was started with.

use std::{sync::Arc, time::Duration};

use crate::monitor::HealthMonitor;

/// State shared across keepalive request handlers.
///
/// Cloned for each request via Axum's state extraction; both fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Monitor whose belief is reported by `GET /api/status`
    pub monitor: Arc<HealthMonitor>,

    /// Poll cadence the monitor runs at
    pub interval: Duration,
}

impl AppState {
    pub fn new(monitor: Arc<HealthMonitor>, interval: Duration) -> Self {
        Self { monitor, interval }
    }
}
