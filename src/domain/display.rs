// Presentation-ready time series for charting
use super::charging::ChargingEvent;
use chrono::{DateTime, Utc};
use serde::Serialize;

const TIME_LABEL_FORMAT: &str = "%H:%M";
const DAY_LABEL_FORMAT: &str = "%b %-d";

/// A charging event with its chart labels. Labels are rendered in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayPoint {
    #[serde(flatten)]
    pub event: ChargingEvent,
    pub time: String,
    pub day: String,
}

impl DisplayPoint {
    pub fn from_event(event: ChargingEvent) -> Self {
        let time = time_label(&event.date);
        let day = day_label(&event.date);
        Self { event, time, day }
    }
}

/// Zero-padded 24-hour `HH:MM`.
pub fn time_label(date: &DateTime<Utc>) -> String {
    date.format(TIME_LABEL_FORMAT).to_string()
}

/// Abbreviated month and day of month, e.g. `Sep 2`.
pub fn day_label(date: &DateTime<Utc>) -> String {
    date.format(DAY_LABEL_FORMAT).to_string()
}

pub fn build_display_series(events: &[ChargingEvent]) -> Vec<DisplayPoint> {
    events.iter().cloned().map(DisplayPoint::from_event).collect()
}

/// The last `count` items, most recent first.
pub fn select_recent_events<T: Clone>(series: &[T], count: usize) -> Vec<T> {
    series.iter().rev().take(count).cloned().collect()
}
