// Dashboard service - Runs one load cycle against the event source
use crate::application::event_source::ChargingEventSource;
use crate::domain::load_state::{LoadCycle, LoadFailure};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn ChargingEventSource>,
    recent_count: usize,
}

impl DashboardService {
    pub fn new(source: Arc<dyn ChargingEventSource>, recent_count: usize) -> Self {
        Self { source, recent_count }
    }

    pub fn recent_count(&self) -> usize {
        self.recent_count
    }

    /// Await the source once and settle `cycle` with the result. Dropping the
    /// returned future before the source answers leaves nothing computed.
    pub async fn run_cycle(&self, cycle: LoadCycle) -> LoadCycle {
        let start_time = Instant::now();
        tracing::debug!(
            sequence = cycle.sequence,
            source = %self.source.describe(),
            "loading charging events"
        );

        let outcome = self.source.load_events().await.map_err(LoadFailure::from);
        if let Ok(events) = &outcome {
            tracing::debug!(sequence = cycle.sequence, "received {} charging events", events.len());
        }

        let resolved = cycle.resolve(outcome, self.recent_count);
        tracing::info!(
            sequence = resolved.sequence,
            state = resolved.state.name(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "load cycle resolved"
        );
        resolved
    }
}
