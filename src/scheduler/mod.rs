//! Recurring background jobs.
//!
//! - `health_monitor` - Polls the signal server on a fixed cadence

pub mod health_monitor;
