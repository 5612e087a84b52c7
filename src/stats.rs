use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsSummary {
    pub visits: u32,
    pub streak_days: u32,
    pub completed_workouts: u32,
    pub avg_session_min: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DayActivity {
    pub day: String,
    pub visits: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrainingStats {
    pub summary: StatsSummary,
    pub weekly_activity: Vec<DayActivity>,
}

/// Fixed demo statistics; the front-end renders these as cards and a weekly
/// activity chart. No real attendance tracking exists behind them.
pub fn sample_stats() -> TrainingStats {
    let weekly = [("Mon", 3), ("Tue", 5), ("Wed", 2), ("Thu", 4), ("Fri", 6)];
    TrainingStats {
        summary: StatsSummary {
            visits: 16,
            streak_days: 7,
            completed_workouts: 42,
            avg_session_min: 65,
        },
        weekly_activity: weekly
            .into_iter()
            .map(|(day, visits)| DayActivity {
                day: day.to_string(),
                visits,
            })
            .collect(),
    }
}
