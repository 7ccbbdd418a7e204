use super::MAX_SCORE;
use crate::analysis::domain::DriveData;
use crate::analysis::statistics;

/// Continuous driving beyond this many hours starts to cost points.
pub const RECOMMENDED_CONTINUOUS_HOURS: f64 = 4.0;
pub const OVERTIME_PENALTY_PER_HOUR: f64 = 10.0;
pub const MAX_OVERTIME_PENALTY: u32 = 50;
pub const INACTIVITY_PENALTY_POINTS: u32 = 5;
pub const MAX_INACTIVITY_PENALTY: u32 = 50;

pub fn overtime_hours(drive: &DriveData) -> f64 {
    (statistics::driving_time_minutes(drive) / 60.0 - RECOMMENDED_CONTINUOUS_HOURS).max(0.0)
}

/// Penalize hours past the continuous-driving threshold and detected inactivity events.
/// The overtime penalty is rounded to whole points.
pub fn score(drive: &DriveData) -> u8 {
    let overtime_penalty = ((overtime_hours(drive) * OVERTIME_PENALTY_PER_HOUR).round() as u32)
        .min(MAX_OVERTIME_PENALTY);

    let inactivity_penalty = u32::try_from(drive.inactivity_event_count())
        .unwrap_or(u32::MAX)
        .saturating_mul(INACTIVITY_PENALTY_POINTS)
        .min(MAX_INACTIVITY_PENALTY);

    u32::from(MAX_SCORE)
        .saturating_sub(overtime_penalty)
        .saturating_sub(inactivity_penalty) as u8
}
