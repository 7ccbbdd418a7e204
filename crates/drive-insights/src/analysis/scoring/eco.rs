use super::MAX_SCORE;
use crate::analysis::domain::DriveData;
use crate::analysis::statistics;

/// Idling penalty at an idling ratio of 1.
pub const MAX_IDLING_PENALTY: f64 = 50.0;
/// Points per sudden acceleration or brake.
pub const ABRUPT_INPUT_PENALTY_POINTS: u32 = 1;
pub const MAX_ABRUPT_INPUT_PENALTY: u32 = 20;

/// Share of the trip spent idling, in `[0, 1]`. Zero for trips without driving time.
pub fn idling_ratio(drive: &DriveData) -> f64 {
    let driving = statistics::driving_time_minutes(drive);
    if driving <= 0.0 {
        return 0.0;
    }
    (statistics::idling_time_minutes(drive) / driving).clamp(0.0, 1.0)
}

/// Penalize idling share (up to 50) and abrupt inputs (up to 20).
pub fn score(drive: &DriveData) -> u8 {
    let idling_penalty = (idling_ratio(drive) * MAX_IDLING_PENALTY).round() as u32;

    let abrupt_inputs = drive
        .sudden_acceleration_count()
        .saturating_add(drive.sudden_brake_count());
    let abrupt_penalty = u32::try_from(abrupt_inputs)
        .unwrap_or(u32::MAX)
        .saturating_mul(ABRUPT_INPUT_PENALTY_POINTS)
        .min(MAX_ABRUPT_INPUT_PENALTY);

    u32::from(MAX_SCORE)
        .saturating_sub(idling_penalty)
        .saturating_sub(abrupt_penalty) as u8
}
