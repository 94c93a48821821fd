use std::time::Duration;

use crate::{context::TestContext, error::TestError};

/// Builder for creating stub HTTP servers with scripted responses.
///
/// Provides a fluent interface for configuring the status codes a stub server answers
/// with, in order, and an optional delay applied before every response. Call `build()`
/// to bind the server to a random local port and start serving.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_status(200)
///     .with_delay(Duration::from_secs(5))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Status codes returned for consecutive requests.
    ///
    /// Once the script is exhausted the last status keeps being returned. An empty
    /// script answers every request with 200.
    statuses: Vec<u16>,

    /// Delay applied before answering each request.
    delay: Option<Duration>,
}

impl TestBuilder {
    /// Creates a new test builder answering 200 with no delay.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty status script
    pub fn new() -> Self {
        Self {
            statuses: Vec::new(),
            delay: None,
        }
    }

    /// Appends a status code to the response script.
    ///
    /// Chain multiple calls to answer consecutive requests with different codes.
    ///
    /// # Arguments
    /// - `status` - HTTP status code to answer the next unscripted request with
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_status(mut self, status: u16) -> Self {
        self.statuses.push(status);
        self
    }

    /// Appends several status codes to the response script.
    pub fn with_statuses(mut self, statuses: &[u16]) -> Self {
        self.statuses.extend_from_slice(statuses);
        self
    }

    /// Delays every response by the provided duration.
    ///
    /// Used to simulate targets that accept the connection but never answer within the
    /// caller's timeout.
    ///
    /// # Arguments
    /// - `delay` - Time to wait before responding
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Binds the stub server and starts serving in a background task.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Running stub server
    /// - `Err(TestError::Io)` - Failed to bind a local port
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::serve(self.statuses, self.delay).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
