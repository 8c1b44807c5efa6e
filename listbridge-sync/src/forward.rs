//! Forward gateway: pushes a single item name to the target webhook.

use std::time::Duration;

use reqwest::header::ACCEPT;

/// Thin adapter around the target webhook.
///
/// The outcome is a plain boolean by design: the engine only ever decides
/// "may I mark this item completed?", and no error is allowed to escape this
/// boundary. Failures are logged with the item name for operator visibility.
pub struct ForwardGateway {
    webhook_url: String,
    client: reqwest::Client,
}

impl ForwardGateway {
    /// Create a gateway for the given webhook URL.
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// POST `{"name": name}` to the webhook. `true` only on a 2xx response.
    pub async fn forward(&self, name: &str) -> bool {
        let body = serde_json::json!({ "name": name });

        let result = self
            .client
            .post(&self.webhook_url)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await;

        match result {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!(item = %name, "Forwarded item to webhook");
                true
            }
            Ok(resp) => {
                tracing::error!(
                    item = %name,
                    status = %resp.status(),
                    "Webhook rejected item"
                );
                false
            }
            Err(e) => {
                tracing::error!(item = %name, error = %e, "Webhook request failed");
                false
            }
        }
    }
}
