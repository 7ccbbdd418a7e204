use super::penalties::{acceleration_penalty, brake_penalty, speeding_penalty};
use super::MAX_SCORE;
use crate::analysis::domain::DriveData;

/// Start from 100 and subtract event and speeding penalties, floored at 0.
pub fn score(drive: &DriveData) -> u8 {
    let penalty = acceleration_penalty(drive.sudden_acceleration_count())
        .saturating_add(brake_penalty(drive.sudden_brake_count()))
        .saturating_add(speeding_penalty(drive.max_speed));

    u32::from(MAX_SCORE).saturating_sub(penalty) as u8
}
