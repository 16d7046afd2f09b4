// Summary statistics over a charging event feed
use super::charging::{ChargingEvent, ChargingLevel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("statistics need at least one charging event")]
pub struct InsufficientDataError;

/// Direction between the two most recent observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    /// No previous reading means `Stable`.
    pub fn between(previous: Option<ChargingLevel>, current: ChargingLevel) -> Self {
        match previous {
            Some(prev) if current > prev => Trend::Up,
            Some(prev) if current < prev => Trend::Down,
            _ => Trend::Stable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub current: ChargingLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<ChargingLevel>,
    pub max: ChargingLevel,
    pub min: ChargingLevel,
    pub avg: ChargingLevel,
    pub trend: Trend,
}

/// Derive the summary for an ascending-by-date event feed.
///
/// The tail element is the current reading; the input is never re-sorted.
/// The average is rounded half away from zero.
pub fn compute_statistics(events: &[ChargingEvent]) -> Result<StatisticsSummary, InsufficientDataError> {
    let (current, previous) = match events {
        [] => return Err(InsufficientDataError),
        [only] => (only.charging_level, None),
        [.., prev, last] => (last.charging_level, Some(prev.charging_level)),
    };

    let mut max = current;
    let mut min = current;
    let mut sum: u64 = 0;
    for event in events {
        let level = event.charging_level;
        max = max.max(level);
        min = min.min(level);
        sum += u64::from(level.percent());
    }

    Ok(StatisticsSummary {
        current,
        previous,
        max,
        min,
        avg: rounded_mean(sum, events.len() as u64),
        trend: Trend::between(previous, current),
    })
}

// count > 0; floor(sum / count + 1/2) without leaving integers
fn rounded_mean(sum: u64, count: u64) -> ChargingLevel {
    ChargingLevel::saturating((2 * sum + count) / (2 * count))
}
