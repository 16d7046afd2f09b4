//! Battery charging dashboard: derives summary statistics, a labelled time
//! series and a recent-events feed from a charging event feed, and serves
//! them as JSON.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
