//! Signal Watch Test Utils
//!
//! Provides shared testing utilities for the signal-watch bot. The monitor, the webhook
//! notifier and the keepalive server all talk plain HTTP, so the central piece here is a
//! throwaway axum server bound to a random local port that answers with scripted status
//! codes and records every request it receives.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring a stub HTTP server
//! - **TestContext**: Running stub server with its URL and recorded requests
//! - **TestError**: Error types that can occur during test setup
//! - **network**: Helpers for targets that refuse connections
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_probe() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_status(200)
//!         .with_status(500)
//!         .build()
//!         .await?;
//!
//!     let url = test.url();
//!     // First request answers 200, every later one answers 500...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod network;
