//! Keepalive endpoints.
//!
//! Hosting platforms that put idle services to sleep keep the bot alive by hitting the
//! landing page. The status endpoint exposes the monitor's belief as JSON.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};

use crate::{
    model::api::{ErrorDto, StatusDto},
    state::AppState,
};

const INDEX_HTML: &str = r#"<html>
	<head><title>Status Bot</title></head>
	<body style="font-family:sans-serif;text-align:center;margin-top:50px;">
		<h1>🤖 Server Status Discord Bot</h1>
		<p>Bot is online and connected to Discord!</p>
	</body>
</html>
"#;

/// Serves the landing page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Reports the monitored target, the current belief and the poll cadence.
///
/// # Returns
/// - 200 OK - `StatusDto` JSON body
pub async fn status(State(state): State<AppState>) -> Json<StatusDto> {
    Json(StatusDto {
        target: state.monitor.target().to_string(),
        is_up: state.monitor.is_up().await,
        interval_secs: state.interval.as_secs(),
    })
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
