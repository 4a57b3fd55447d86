use std::{net::SocketAddr, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
static DEFAULT_TOOLTIP_BASE_DOMAIN: &str = "wowhead.com";
const DEFAULT_TOOLTIP_TIMEOUT_MS: u64 = 1500;

/// Runtime configuration read from the environment.
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bind_address: SocketAddr,
    /// Hides officer-only fields from every page regardless of permissions.
    pub streamer_mode: bool,
    pub tooltip_base_domain: String,
    /// Replaces the per-expansion tooltip host entirely, used for proxies & tests.
    pub tooltip_base_url: Option<String>,
    pub tooltip_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bind_address: parse_bind_address(
                optional("BIND_ADDRESS").as_deref().unwrap_or(DEFAULT_BIND_ADDRESS),
            )?,
            streamer_mode: match optional("STREAMER_MODE") {
                Some(value) => parse_streamer_mode(&value)?,
                None => false,
            },
            tooltip_base_domain: optional("TOOLTIP_BASE_DOMAIN")
                .unwrap_or_else(|| DEFAULT_TOOLTIP_BASE_DOMAIN.to_string()),
            tooltip_base_url: optional("TOOLTIP_BASE_URL"),
            tooltip_timeout: match optional("TOOLTIP_TIMEOUT_MS") {
                Some(value) => parse_tooltip_timeout(&value)?,
                None => Duration::from_millis(DEFAULT_TOOLTIP_TIMEOUT_MS),
            },
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

/// Unset and empty variables are both treated as absent
fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

fn parse_streamer_mode(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidStreamerMode(value.to_string())),
    }
}

fn parse_tooltip_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidTooltipTimeout {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_bind_address(value: &str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidBindAddress {
            value: value.to_string(),
            reason: e.to_string(),
        })
}
