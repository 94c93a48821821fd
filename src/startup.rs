use dioxus_logger::tracing;
use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    error::AppError,
    monitor::{probe::HttpProbe, HealthMonitor},
    router,
    service::webhook::WebhookNotifier,
    state::AppState,
};

/// Number of attempts made to reach the detected public URL.
pub const PUBLIC_URL_ATTEMPTS: u32 = 3;
/// Pause between public URL attempts.
pub const PUBLIC_URL_RETRY_DELAY: Duration = Duration::from_secs(5);
/// Per-request timeout for public URL attempts.
pub const PUBLIC_URL_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client shared by the probe, the webhook notifier and URL detection.
///
/// Redirects are not followed so a 3xx answer from the monitored target is observed
/// directly and counted as reachable.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialise
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Wires the HTTP probe and webhook notifier into a health monitor for the configured target.
pub fn build_monitor(config: &Config, client: &reqwest::Client) -> HealthMonitor {
    let probe = HttpProbe::new(
        client.clone(),
        config.monitor_url.clone(),
        config.probe_timeout,
    );
    let notifier = WebhookNotifier::new(client.clone(), config.webhook_url.clone());

    HealthMonitor::new(
        config.monitor_url.clone(),
        Arc::new(probe),
        Arc::new(notifier),
    )
}

/// Serves the keepalive page on all interfaces until the process exits.
///
/// # Arguments
/// - `port` - Port to bind on `0.0.0.0`
/// - `state` - State handed to the keepalive handlers
///
/// # Returns
/// - `Ok(())` - Server shut down
/// - `Err(AppError::IoErr)` - Failed to bind or serve
pub async fn serve_keepalive(port: u16, state: AppState) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Keepalive server ready on port {}", port);

    axum::serve(listener, router::router().with_state(state)).await?;

    Ok(())
}

/// Checks that the detected public URL actually reaches this process.
///
/// GETs the URL up to `attempts` times, sleeping `delay` between tries. Failure is only
/// logged; the bot runs the same either way.
///
/// # Arguments
/// - `client` - HTTP client for the check
/// - `url` - Public URL to verify
/// - `attempts` - Maximum number of requests
/// - `delay` - Pause between requests
/// - `timeout` - Limit on each request; a request that runs over counts as a failed attempt
///
/// # Returns
/// - `true` - The URL answered with a success status
/// - `false` - Every attempt failed
pub async fn verify_public_url(
    client: &reqwest::Client,
    url: &str,
    attempts: u32,
    delay: Duration,
    timeout: Duration,
) -> bool {
    for attempt in 1..=attempts {
        match client.get(url).timeout(timeout).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Public URL detected: {}", url);
                return true;
            }
            Ok(response) => tracing::debug!(
                "Public URL {} answered {} (attempt {}/{})",
                url,
                response.status(),
                attempt,
                attempts
            ),
            Err(e) => tracing::debug!(
                "Public URL {} unreachable (attempt {}/{}): {}",
                url,
                attempt,
                attempts,
                e
            ),
        }

        if attempt < attempts {
            tokio::time::sleep(delay).await;
        }
    }

    tracing::warn!(
        "Could not reach public URL {} after {} attempts",
        url,
        attempts
    );

    false
}
