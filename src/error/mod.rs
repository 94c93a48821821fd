//! Error types for the bot process.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type returned from startup, the Discord bot and the monitor scheduler.
//! Errors raised inside the health monitor itself (`ProbeError`, `NotificationError`) are
//! never propagated through `AppError`: the monitor classifies or logs them in place so a
//! failed probe or webhook delivery cannot stop the poll loop.

pub mod config;
pub mod monitor;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur while starting and running the bot.
/// Most variants use `#[from]` for automatic error conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always fatal, the process cannot run without a valid configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error while starting or stopping the monitor job.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket error from the keepalive server.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
