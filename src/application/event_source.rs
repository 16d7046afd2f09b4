// Source trait for charging event feeds
use crate::domain::charging::ChargingEvent;
use async_trait::async_trait;

#[async_trait]
pub trait ChargingEventSource: Send + Sync {
    /// Fetch the whole feed, ordered ascending by date. Called once per load
    /// cycle; implementations do not retry.
    async fn load_events(&self) -> anyhow::Result<Vec<ChargingEvent>>;

    /// Short description for logs.
    fn describe(&self) -> String;
}
