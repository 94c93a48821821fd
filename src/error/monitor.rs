use std::time::Duration;
use thiserror::Error;

/// Reasons a reachability probe counts as a failure.
///
/// Never surfaced to callers of the monitor. The display text becomes the `reason` of an
/// unreachable outcome and ends up in the "down" notification.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Target answered with a status outside the 2xx/3xx range.
    #[error("Status {0}")]
    Status(u16),

    /// Target did not answer within the probe timeout.
    #[error("Timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Connection refused, DNS failure or any other transport error.
    #[error(transparent)]
    Request(reqwest::Error),
}

impl ProbeError {
    /// Classifies a reqwest error, separating timeouts from other transport failures.
    ///
    /// # Arguments
    /// - `err` - Error returned by the probe request
    /// - `timeout` - Timeout the request was sent with
    pub fn from_request(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Request(err)
        }
    }
}

/// Failure to deliver a notification to the sink.
///
/// Logged and discarded by the monitor. Delivery is never retried and never reverts the
/// belief transition that triggered it.
#[derive(Error, Debug)]
pub enum NotificationError {
    /// Webhook was unreachable or the request timed out.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Webhook answered with a non-success status.
    #[error("Webhook rejected notification with status {0}")]
    Rejected(u16),
}
