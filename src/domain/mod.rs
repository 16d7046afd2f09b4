// Domain layer - Charging events and the analytics derived from them
pub mod charging;
pub mod dashboard;
pub mod display;
pub mod load_state;
pub mod statistics;
