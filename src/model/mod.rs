//! Domain models and data transfer objects.
//!
//! - `monitor` - Probe outcomes and belief transitions produced by the health monitor
//! - `notification` - Messages delivered to the notification sink
//! - `api` - JSON bodies served by the keepalive server

pub mod api;
pub mod monitor;
pub mod notification;
