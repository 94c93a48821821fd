use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Snapshot of the monitor returned by `GET /api/status`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusDto {
    /// URL being probed
    pub target: String,
    /// Current reachability belief
    pub is_up: bool,
    /// Poll cadence in seconds
    pub interval_secs: u64,
}
