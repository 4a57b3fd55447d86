use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::config::Config;

/// Where tooltips are fetched from and how long to wait for them
#[derive(Clone, Debug)]
pub struct TooltipConfig {
    pub base_domain: String,
    pub base_url: Option<String>,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub tooltip: TooltipConfig,
    pub streamer_mode: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            db,
            http_client,
            tooltip: TooltipConfig {
                base_domain: config.tooltip_base_domain.clone(),
                base_url: config.tooltip_base_url.clone(),
                timeout: config.tooltip_timeout,
            },
            streamer_mode: config.streamer_mode,
        }
    }
}

/// Builds state pointing tooltip requests at a fixed base URL, used by test setups.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, tooltip_base_url): (DatabaseConnection, String)) -> Self {
        Self {
            db,
            http_client: reqwest::Client::new(),
            tooltip: TooltipConfig {
                base_domain: "wowhead.com".to_string(),
                base_url: Some(tooltip_base_url),
                timeout: Duration::from_millis(1500),
            },
            streamer_mode: false,
        }
    }
}
