use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::json;

use crate::analysis::domain::{DriveData, EventMarker, IdlingPeriod, SpeedSample};

pub(super) fn trip_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
        .single()
        .expect("valid trip start")
}

/// Thirty-minute, 25 km urban trip with no events, idling or fuel data.
pub(super) fn drive() -> DriveData {
    let start = trip_start();
    DriveData {
        drive_id: "drive-001".to_string(),
        start_time: start,
        end_time: start + Duration::minutes(30),
        distance: 25.0,
        average_speed: 50.0,
        max_speed: 80.0,
        speed_data: vec![
            SpeedSample {
                timestamp: start,
                speed: 0.0,
                latitude: Some(41.59),
                longitude: Some(-93.62),
            },
            SpeedSample {
                timestamp: start + Duration::minutes(15),
                speed: 62.0,
                latitude: None,
                longitude: None,
            },
        ],
        sudden_accelerations: Vec::new(),
        sudden_brakes: Vec::new(),
        idling_periods: Vec::new(),
        inactivity_events: Vec::new(),
        fuel_consumption: None,
        estimated_co2: None,
    }
}

pub(super) fn with_duration_minutes(mut drive: DriveData, minutes: i64) -> DriveData {
    drive.end_time = drive.start_time + Duration::minutes(minutes);
    drive
}

pub(super) fn markers(count: usize) -> Vec<EventMarker> {
    (0..count)
        .map(|index| {
            let at = trip_start() + Duration::seconds(30 * index as i64);
            EventMarker(json!(at.to_rfc3339()))
        })
        .collect()
}

/// Back-to-back idling periods starting at the trip start, one per duration.
pub(super) fn idling(durations_secs: &[i64]) -> Vec<IdlingPeriod> {
    let mut cursor = trip_start();
    durations_secs
        .iter()
        .map(|secs| {
            let start_time = cursor;
            let end_time = start_time + Duration::seconds(*secs);
            cursor = end_time;
            IdlingPeriod {
                start_time,
                end_time,
                duration: *secs as f64,
            }
        })
        .collect()
}
