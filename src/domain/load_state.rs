// Load cycle state machine: Loading -> {Empty, Ready, Failed}
use super::charging::ChargingEvent;
use super::dashboard::DashboardView;
use thiserror::Error;

pub const LOADING_MESSAGE: &str = "Waiting for battery data...";
pub const EMPTY_MESSAGE: &str = "No events yet, please check back later.";
pub const FAILED_MESSAGE: &str = "Something went wrong, please refresh the page.";

/// The event source did not deliver a feed.
#[derive(Debug, Error)]
#[error("failed to load charging events: {0:#}")]
pub struct LoadFailure(#[from] pub anyhow::Error);

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Empty,
    Ready(DashboardView),
    Failed,
}

impl LoadState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LoadState::Loading)
    }

    /// Fixed user-facing text; `Ready` has none.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoadState::Loading => Some(LOADING_MESSAGE),
            LoadState::Empty => Some(EMPTY_MESSAGE),
            LoadState::Ready(_) => None,
            LoadState::Failed => Some(FAILED_MESSAGE),
        }
    }

    pub fn view(&self) -> Option<&DashboardView> {
        match self {
            LoadState::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Loading => "loading",
            LoadState::Empty => "empty",
            LoadState::Ready(_) => "ready",
            LoadState::Failed => "failed",
        }
    }
}

/// One fetch-and-resolve round trip, numbered by the refresher.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadCycle {
    pub sequence: u64,
    pub state: LoadState,
}

impl LoadCycle {
    pub fn begin(sequence: u64) -> Self {
        Self {
            sequence,
            state: LoadState::Loading,
        }
    }

    /// Settle a pending cycle with the loader's outcome. A cycle that is
    /// already terminal is returned unchanged.
    pub fn resolve(self, outcome: Result<Vec<ChargingEvent>, LoadFailure>, recent_count: usize) -> Self {
        if self.state.is_terminal() {
            tracing::warn!(
                sequence = self.sequence,
                state = self.state.name(),
                "ignoring second resolution of load cycle"
            );
            return self;
        }

        let state = match outcome {
            Err(failure) => {
                tracing::error!(sequence = self.sequence, "{}", failure);
                LoadState::Failed
            }
            Ok(events) if events.is_empty() => LoadState::Empty,
            Ok(events) => match DashboardView::build(&events, recent_count) {
                Ok(view) => LoadState::Ready(view),
                Err(e) => {
                    tracing::error!(sequence = self.sequence, "{}", e);
                    LoadState::Empty
                }
            },
        };

        Self {
            sequence: self.sequence,
            state,
        }
    }
}
