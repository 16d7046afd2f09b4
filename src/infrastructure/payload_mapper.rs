// Mapper to convert load cycles to JSON payloads
use crate::domain::charging::{ChargingEvent, LevelTier};
use crate::domain::display::DisplayPoint;
use crate::domain::load_state::LoadCycle;
use crate::domain::statistics::StatisticsSummary;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub status: &'static str,
    pub sequence: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<StatisticsSummary>,
    pub series: Vec<PointPayload>,
    pub recent_events: Vec<PointPayload>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEventsPayload {
    pub status: &'static str,
    pub sequence: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub events: Vec<PointPayload>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointPayload {
    #[serde(flatten)]
    pub event: ChargingEvent,
    pub time: String,
    pub day: String,
    pub tier: LevelTier,
}

pub fn cycle_to_payload(cycle: &LoadCycle) -> DashboardPayload {
    let view = cycle.state.view();

    DashboardPayload {
        status: cycle.state.name(),
        sequence: cycle.sequence,
        message: cycle.state.message(),
        statistics: view.map(|v| v.statistics),
        series: view.map(|v| points_to_payload(&v.series)).unwrap_or_default(),
        recent_events: view.map(|v| points_to_payload(&v.recent)).unwrap_or_default(),
    }
}

pub fn cycle_to_recent_payload(cycle: &LoadCycle, count: usize) -> RecentEventsPayload {
    let events = cycle
        .state
        .view()
        .map(|v| points_to_payload(&v.recent_events(count)))
        .unwrap_or_default();

    RecentEventsPayload {
        status: cycle.state.name(),
        sequence: cycle.sequence,
        message: cycle.state.message(),
        events,
    }
}

fn points_to_payload(points: &[DisplayPoint]) -> Vec<PointPayload> {
    points.iter().map(point_to_payload).collect()
}

fn point_to_payload(point: &DisplayPoint) -> PointPayload {
    PointPayload {
        event: point.event.clone(),
        time: point.time.clone(),
        day: point.day.clone(),
        tier: LevelTier::of(point.event.charging_level),
    }
}
