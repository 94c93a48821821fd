use std::{str::FromStr, time::Duration};
use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    scheduler::health_monitor::DEFAULT_POLL_INTERVAL,
};

const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub discord_token: String,
    pub guild_id: Option<u64>,

    pub monitor_url: Url,
    pub webhook_url: Option<Url>,
    pub poll_interval: Duration,
    pub probe_timeout: Duration,

    pub port: u16,
    pub public_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparsable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Ok(Self {
            discord_token: required(&get, "DISCORD_TOKEN")?,
            guild_id: optional(&get, "GUILD_ID")?,
            monitor_url: parse_url("MONITOR_URL", required(&get, "MONITOR_URL")?)?,
            webhook_url: get("DISCORD_WEBHOOK_API")
                .map(|value| parse_url("DISCORD_WEBHOOK_API", value))
                .transpose()?,
            poll_interval: optional(&get, "MONITOR_INTERVAL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_POLL_INTERVAL),
            probe_timeout: Duration::from_secs(
                optional(&get, "MONITOR_TIMEOUT_SECS")?.unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS),
            ),
            port: optional(&get, "PORT")?.unwrap_or(DEFAULT_PORT),
            public_url: resolve_public_url(&get),
        })
    }
}

fn required<F>(get: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<F, T>(get: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(name)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: name.to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}

fn parse_url(name: &str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
        value,
    })
}

/// Detects the public URL the keepalive page is reachable at.
///
/// An explicit `PUBLIC_URL` wins, then the hosting platform's `RENDER_EXTERNAL_URL`,
/// then a URL built from `RENDER_EXTERNAL_HOSTNAME`.
fn resolve_public_url<F>(get: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    get("PUBLIC_URL")
        .or_else(|| get("RENDER_EXTERNAL_URL"))
        .or_else(|| get("RENDER_EXTERNAL_HOSTNAME").map(|host| format!("https://{}", host)))
        .map(|url| url.trim_end_matches('/').to_string())
}
