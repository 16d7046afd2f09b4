// Presentation layer - HTTP surface over published load cycles
pub mod app_state;
pub mod handlers;
