// Application state for HTTP handlers
use crate::application::refresh::CycleReceiver;

#[derive(Clone)]
pub struct AppState {
    pub cycles: CycleReceiver,
    pub recent_events: usize,
}
