//! Outbound integrations.
//!
//! - `webhook` - Delivers monitor notifications to a Discord webhook

pub mod webhook;
