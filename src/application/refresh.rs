// Background refresher - Publishes one load cycle at start-up and per interval
use crate::application::dashboard_service::DashboardService;
use crate::domain::load_state::LoadCycle;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub type CycleReceiver = watch::Receiver<Arc<LoadCycle>>;

/// Start publishing load cycles. Readers always see a whole cycle: either
/// `Loading` or its resolved state, never a mix of two feeds.
///
/// With `interval` set to `None` exactly one cycle runs. The task stops once
/// every receiver is dropped; a load still in flight at that point is dropped
/// with it.
pub fn spawn_refresh(service: DashboardService, interval: Option<Duration>) -> (CycleReceiver, JoinHandle<()>) {
    let (tx, rx) = watch::channel(Arc::new(LoadCycle::begin(1)));

    let handle = tokio::spawn(async move {
        let mut sequence: u64 = 1;
        loop {
            let pending = LoadCycle::begin(sequence);
            if tx.send(Arc::new(pending.clone())).is_err() {
                break;
            }

            let resolved = tokio::select! {
                _ = tx.closed() => {
                    tracing::debug!(sequence, "no readers left, abandoning load cycle");
                    break;
                }
                cycle = service.run_cycle(pending) => cycle,
            };
            if tx.send(Arc::new(resolved)).is_err() {
                break;
            }

            let Some(interval) = interval else {
                break;
            };
            tokio::select! {
                _ = tx.closed() => break,
                _ = tokio::time::sleep(interval) => {}
            }
            sequence += 1;
        }
        tracing::debug!("refresher stopped");
    });

    (rx, handle)
}
