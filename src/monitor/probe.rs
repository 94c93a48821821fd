//! Reachability probes.
//!
//! The `Probe` trait abstracts a single reachability check so the monitor can be driven
//! by scripted outcomes in tests. `HttpProbe` is the production implementation: a HEAD
//! request with a bounded timeout, classifying any 2xx or 3xx answer as reachable.

use dioxus_logger::tracing;
use serenity::async_trait;
use std::time::Duration;
use url::Url;

use crate::{error::monitor::ProbeError, model::monitor::ProbeOutcome};

/// A single reachability check against a fixed target.
///
/// Implementations must never fail: every error is folded into
/// `ProbeOutcome::Unreachable`.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self) -> ProbeOutcome;
}

/// Probes a URL with an HTTP HEAD request.
pub struct HttpProbe {
    /// Shared HTTP client, expected not to follow redirects
    client: reqwest::Client,
    /// Endpoint being probed
    target: Url,
    /// Upper bound on a single request
    timeout: Duration,
}

impl HttpProbe {
    /// Creates a new HttpProbe.
    ///
    /// # Arguments
    /// - `client` - HTTP client; build it without redirect following so 3xx answers are
    ///   observed as-is
    /// - `target` - URL to send the HEAD request to
    /// - `timeout` - Per-request timeout
    pub fn new(client: reqwest::Client, target: Url, timeout: Duration) -> Self {
        Self {
            client,
            target,
            timeout,
        }
    }

    /// Sends the HEAD request and checks the status class.
    ///
    /// # Returns
    /// - `Ok(u16)` - Response status in the 2xx/3xx range
    /// - `Err(ProbeError::Status)` - Any other status
    /// - `Err(ProbeError::Timeout)` - No answer within the timeout
    /// - `Err(ProbeError::Request)` - Connection or transport failure
    async fn send(&self) -> Result<u16, ProbeError> {
        let response = self
            .client
            .head(self.target.as_str())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ProbeError::from_request(e, self.timeout))?;

        let status = response.status();
        if status.is_success() || status.is_redirection() {
            Ok(status.as_u16())
        } else {
            Err(ProbeError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    async fn probe(&self) -> ProbeOutcome {
        match self.send().await {
            Ok(status) => ProbeOutcome::Reachable { status },
            Err(e) => {
                tracing::debug!("Probe of {} failed: {:?}", self.target, e);
                ProbeOutcome::Unreachable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, network::refused_url};

    fn probe_for(url: &str, timeout: Duration) -> HttpProbe {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .unwrap();

        HttpProbe::new(client, Url::parse(url).unwrap(), timeout)
    }

    /// Tests that a 200 answer is reachable and that the probe uses HEAD.
    ///
    /// Expected: Reachable { status: 200 }, one HEAD request recorded
    #[tokio::test]
    async fn ok_status_is_reachable() {
        let test = TestBuilder::new().with_status(200).build().await.unwrap();
        let probe = probe_for(&test.url(), Duration::from_secs(5));

        let outcome = probe.probe().await;

        assert_eq!(outcome, ProbeOutcome::Reachable { status: 200 });
        let requests = test.requests().await;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "HEAD");
    }

    /// Tests that a redirect is not followed and still counts as reachable.
    ///
    /// Expected: Reachable { status: 301 }
    #[tokio::test]
    async fn redirect_is_reachable() {
        let test = TestBuilder::new().with_status(301).build().await.unwrap();
        let probe = probe_for(&test.url(), Duration::from_secs(5));

        assert_eq!(
            probe.probe().await,
            ProbeOutcome::Reachable { status: 301 }
        );
    }

    /// Expected: Unreachable with "Status 500" as the reason
    #[tokio::test]
    async fn server_error_is_unreachable() {
        let test = TestBuilder::new().with_status(500).build().await.unwrap();
        let probe = probe_for(&test.url(), Duration::from_secs(5));

        assert_eq!(
            probe.probe().await,
            ProbeOutcome::Unreachable {
                reason: "Status 500".to_string()
            }
        );
    }

    /// Expected: Unreachable
    #[tokio::test]
    async fn connection_refused_is_unreachable() {
        let probe = probe_for(&refused_url().unwrap(), Duration::from_secs(5));

        assert!(matches!(
            probe.probe().await,
            ProbeOutcome::Unreachable { .. }
        ));
    }

    /// Tests that a target which never answers within the timeout is classified the same
    /// way as a refused connection.
    ///
    /// Expected: Unreachable with a timeout reason
    #[tokio::test]
    async fn timeout_is_unreachable() {
        let test = TestBuilder::new()
            .with_status(200)
            .with_delay(Duration::from_secs(10))
            .build()
            .await
            .unwrap();
        let probe = probe_for(&test.url(), Duration::from_millis(200));

        let outcome = probe.probe().await;

        assert_eq!(
            outcome,
            ProbeOutcome::Unreachable {
                reason: "Timed out after 200ms".to_string()
            }
        );
    }
}
