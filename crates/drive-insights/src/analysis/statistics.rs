use super::domain::{DriveData, DriveStatistics};

/// Derive trip statistics. Optional figures are only present when their inputs are known
/// and the quotient is finite, so "unknown" never reads as a measured zero or a JSON null.
pub fn compute(drive: &DriveData) -> DriveStatistics {
    DriveStatistics {
        total_distance: drive.distance,
        driving_time: driving_time_minutes(drive),
        idling_time: idling_time_minutes(drive),
        fuel_efficiency: fuel_efficiency(drive),
        carbon_intensity: carbon_intensity(drive),
    }
}

pub fn driving_time_minutes(drive: &DriveData) -> f64 {
    (drive.end_time - drive.start_time).num_milliseconds() as f64 / 60_000.0
}

pub fn idling_time_minutes(drive: &DriveData) -> f64 {
    drive
        .idling_periods
        .iter()
        .fold(0.0, |total, period| total + period.duration / 60.0)
}

pub fn fuel_efficiency(drive: &DriveData) -> Option<f64> {
    drive
        .fuel_consumption
        .filter(|fuel| *fuel > 0.0)
        .map(|fuel| drive.distance / fuel)
        .filter(|efficiency| efficiency.is_finite())
}

pub fn carbon_intensity(drive: &DriveData) -> Option<f64> {
    drive
        .estimated_co2
        .filter(|_| drive.distance > 0.0)
        .map(|co2| co2 / drive.distance)
        .filter(|intensity| intensity.is_finite())
}
