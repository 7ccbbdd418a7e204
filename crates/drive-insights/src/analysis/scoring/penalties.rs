//! Point penalties for discrete driving events.

pub const ACCELERATION_PENALTY_POINTS: u32 = 3;
pub const BRAKE_PENALTY_POINTS: u32 = 5;

/// Speeding brackets as `(exclusive lower bound km/h, penalty)`, highest first.
pub const SPEEDING_BRACKETS: [(f64, u32); 3] = [(130.0, 30), (110.0, 20), (90.0, 10)];

pub fn acceleration_penalty(count: usize) -> u32 {
    saturating_count(count).saturating_mul(ACCELERATION_PENALTY_POINTS)
}

pub fn brake_penalty(count: usize) -> u32 {
    saturating_count(count).saturating_mul(BRAKE_PENALTY_POINTS)
}

/// First bracket whose lower bound is strictly exceeded wins.
pub fn speeding_penalty(max_speed: f64) -> u32 {
    SPEEDING_BRACKETS
        .iter()
        .find(|(threshold, _)| max_speed > *threshold)
        .map(|(_, penalty)| *penalty)
        .unwrap_or(0)
}

fn saturating_count(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
