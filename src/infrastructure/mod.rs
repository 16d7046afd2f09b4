// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_event_source;
pub mod http_event_source;
pub mod payload_mapper;
