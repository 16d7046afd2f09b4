// Charging event domain models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Feed-local identifier of a charging event. Upstream feeds send either a
/// number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("charging level {0} is outside 0..=100")]
pub struct InvalidChargingLevel(pub i64);

/// State of charge in percent, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct ChargingLevel(u8);

impl ChargingLevel {
    pub const MAX: u8 = 100;

    pub fn new(percent: u8) -> Result<Self, InvalidChargingLevel> {
        if percent > Self::MAX {
            return Err(InvalidChargingLevel(i64::from(percent)));
        }
        Ok(Self(percent))
    }

    pub fn saturating(percent: u64) -> Self {
        Self(percent.min(u64::from(Self::MAX)) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for ChargingLevel {
    type Error = InvalidChargingLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| InvalidChargingLevel(value))
            .and_then(Self::new)
    }
}

impl From<ChargingLevel> for u8 {
    fn from(level: ChargingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for ChargingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One timestamped observation of battery charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingEvent {
    pub internal_event_id: EventId,
    pub date: DateTime<Utc>,
    pub charging_level: ChargingLevel,
}

impl ChargingEvent {
    pub fn new(internal_event_id: EventId, date: DateTime<Utc>, charging_level: ChargingLevel) -> Self {
        Self {
            internal_event_id,
            date,
            charging_level,
        }
    }
}

/// Severity band of a charging level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelTier {
    Low,
    Medium,
    High,
}

// Lower bounds, checked top-down.
const TIER_THRESHOLDS: [(u8, LevelTier); 2] = [(70, LevelTier::High), (40, LevelTier::Medium)];

impl LevelTier {
    pub fn of(level: ChargingLevel) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(floor, _)| level.percent() >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(LevelTier::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(percent: u8) -> ChargingLevel {
        ChargingLevel::new(percent).unwrap()
    }

    #[test]
    fn test_level_bounds() {
        assert!(ChargingLevel::new(0).is_ok());
        assert!(ChargingLevel::new(100).is_ok());
        assert_eq!(ChargingLevel::new(101), Err(InvalidChargingLevel(101)));
        assert_eq!(ChargingLevel::try_from(-1), Err(InvalidChargingLevel(-1)));
        assert_eq!(ChargingLevel::try_from(300), Err(InvalidChargingLevel(300)));
    }

    #[test]
    fn test_level_tier_thresholds() {
        assert_eq!(LevelTier::of(level(0)), LevelTier::Low);
        assert_eq!(LevelTier::of(level(39)), LevelTier::Low);
        assert_eq!(LevelTier::of(level(40)), LevelTier::Medium);
        assert_eq!(LevelTier::of(level(69)), LevelTier::Medium);
        assert_eq!(LevelTier::of(level(70)), LevelTier::High);
        assert_eq!(LevelTier::of(level(100)), LevelTier::High);
    }

    #[test]
    fn test_deserialize_event() {
        let json = r#"[
            {"internalEventId": 17, "date": "2024-09-02T08:05:00Z", "chargingLevel": 55},
            {"internalEventId": "evt-18", "date": "2024-09-02T10:30:00+02:00", "chargingLevel": 60}
        ]"#;
        let events: Vec<ChargingEvent> = serde_json::from_str(json).unwrap();

        assert_eq!(events[0].internal_event_id, EventId::Number(17));
        assert_eq!(events[0].charging_level, level(55));
        assert_eq!(events[1].internal_event_id, EventId::Text("evt-18".to_string()));
        assert_eq!(events[1].date.to_rfc3339(), "2024-09-02T08:30:00+00:00");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_level() {
        let json = r#"{"internalEventId": 1, "date": "2024-09-02T08:05:00Z", "chargingLevel": 120}"#;
        let err = serde_json::from_str::<ChargingEvent>(json).unwrap_err();
        assert!(err.to_string().contains("outside 0..=100"));

        let json = r#"{"internalEventId": 1, "date": "2024-09-02T08:05:00Z", "chargingLevel": 50.5}"#;
        assert!(serde_json::from_str::<ChargingEvent>(json).is_err());
    }

    #[test]
    fn test_event_id_display() {
        assert_eq!(EventId::Number(42).to_string(), "42");
        assert_eq!(EventId::Text("abc".to_string()).to_string(), "abc");
    }
}
