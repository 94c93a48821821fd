use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    Router,
};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{sync::Mutex, task::JoinHandle};

use crate::error::TestError;

/// A request received by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method, e.g. `HEAD` or `POST`
    pub method: String,
    /// Request path including the query string
    pub path: String,
    /// Raw request body
    pub body: String,
}

impl RecordedRequest {
    /// Parses the recorded body as JSON.
    ///
    /// # Returns
    /// - `Some(Value)` - Body was valid JSON
    /// - `None` - Body was empty or not JSON
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Shared state handed to the stub request handler.
#[derive(Clone)]
struct StubState {
    statuses: Arc<Vec<u16>>,
    delay: Option<Duration>,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubState {
    /// Status for the request with the given zero-based index.
    fn status_for(&self, index: usize) -> u16 {
        self.statuses
            .get(index)
            .or_else(|| self.statuses.last())
            .copied()
            .unwrap_or(200)
    }
}

/// Running stub HTTP server.
///
/// The server lives until the context is dropped, at which point the serving task is
/// aborted and the port released.
pub struct TestContext {
    /// Address the stub server is bound to.
    pub addr: SocketAddr,

    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    task: JoinHandle<()>,
}

impl TestContext {
    pub(crate) async fn serve(
        statuses: Vec<u16>,
        delay: Option<Duration>,
    ) -> Result<Self, TestError> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = StubState {
            statuses: Arc::new(statuses),
            delay,
            hits: Arc::new(AtomicUsize::new(0)),
            requests: requests.clone(),
        };

        let router = Router::new().fallback(respond).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            addr,
            requests,
            task,
        })
    }

    /// Base URL of the stub server, with a trailing slash.
    pub fn url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    /// Returns a copy of every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of requests received so far.
    pub async fn hits(&self) -> usize {
        self.requests.lock().await.len()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Records the request, waits for the configured delay and answers with the next
/// scripted status.
async fn respond(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    body: String,
) -> StatusCode {
    let index = state.hits.fetch_add(1, Ordering::SeqCst);

    state.requests.lock().await.push(RecordedRequest {
        method: method.to_string(),
        path: uri.to_string(),
        body,
    });

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    StatusCode::from_u16(state.status_for(index)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
