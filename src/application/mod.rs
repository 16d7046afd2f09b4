// Application layer - Load cycles over a charging event source
pub mod dashboard_service;
pub mod event_source;
pub mod refresh;
