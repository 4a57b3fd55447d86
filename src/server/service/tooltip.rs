//! Best-effort item tooltip lookups.

use dioxus_logger::tracing;
use serde::Deserialize;

use crate::server::model::app::TooltipConfig;

/// Expansion whose tooltips are served from the classic subdomain
const CLASSIC_EXPANSION_ID: i32 = 1;

#[derive(Deserialize)]
struct TooltipResponse {
    tooltip: String,
}

pub struct TooltipService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a TooltipConfig,
}

impl<'a> TooltipService<'a> {
    /// Creates a new instance of [`TooltipService`]
    pub fn new(http_client: &'a reqwest::Client, config: &'a TooltipConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Tooltip endpoint for an item
    pub fn tooltip_url(&self, item_id: i32, expansion_id: i32) -> String {
        match &self.config.base_url {
            Some(base_url) => format!(
                "{}/tooltip/item/{}",
                base_url.trim_end_matches('/'),
                item_id
            ),
            None => {
                let subdomain = if expansion_id == CLASSIC_EXPANSION_ID {
                    "classic"
                } else {
                    "www"
                };
                format!(
                    "https://{}.{}/tooltip/item/{}",
                    subdomain, self.config.base_domain, item_id
                )
            }
        }
    }

    /// Fetches the tooltip HTML for an item.
    ///
    /// Never fails: network errors, error statuses, timeouts & malformed bodies are logged at
    /// debug level and yield `None`.
    pub async fn fetch(&self, item_id: i32, expansion_id: i32) -> Option<String> {
        let url = self.tooltip_url(item_id, expansion_id);

        let response = match self
            .http_client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(item_id = %item_id, "Tooltip request to {} failed: {}", url, e);
                return None;
            }
        };

        match response.json::<TooltipResponse>().await {
            Ok(body) => Some(body.tooltip),
            Err(e) => {
                tracing::debug!(item_id = %item_id, "Failed to decode tooltip response: {}", e);
                None
            }
        }
    }
}
