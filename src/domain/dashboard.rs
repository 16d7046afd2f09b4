// Dashboard domain model
use super::charging::ChargingEvent;
use super::display::{build_display_series, select_recent_events, DisplayPoint};
use super::statistics::{compute_statistics, InsufficientDataError, StatisticsSummary};

/// Everything derived from one event snapshot, built in one step so that
/// statistics and series always describe the same feed.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub statistics: StatisticsSummary,
    pub series: Vec<DisplayPoint>,
    pub recent: Vec<DisplayPoint>,
}

impl DashboardView {
    pub fn build(events: &[ChargingEvent], recent_count: usize) -> Result<Self, InsufficientDataError> {
        let statistics = compute_statistics(events)?;
        let series = build_display_series(events);
        let recent = select_recent_events(&series, recent_count);

        Ok(Self {
            statistics,
            series,
            recent,
        })
    }

    pub fn recent_events(&self, count: usize) -> Vec<DisplayPoint> {
        select_recent_events(&self.series, count)
    }
}
