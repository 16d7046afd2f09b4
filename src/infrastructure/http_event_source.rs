// HTTP charging event source
use crate::application::event_source::ChargingEventSource;
use crate::domain::charging::ChargingEvent;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: reqwest::Client,
    url: String,
}

impl HttpEventSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl ChargingEventSource for HttpEventSource {
    async fn load_events(&self) -> Result<Vec<ChargingEvent>> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", self.url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Charging feed request failed with status {}: {}", status, body);
        }

        let events = response
            .json::<Vec<ChargingEvent>>()
            .await
            .context("Failed to parse charging feed")?;

        tracing::debug!("Fetched {} charging events from {}", events.len(), self.url);
        Ok(events)
    }

    fn describe(&self) -> String {
        format!("http {}", self.url)
    }
}
