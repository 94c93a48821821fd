use axum::{routing::get, Router};

use crate::{
    controller::keepalive::{index, not_found, status},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(status))
        .fallback(not_found)
}
