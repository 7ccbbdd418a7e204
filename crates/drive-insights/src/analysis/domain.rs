use super::validation::AnalysisError;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

/// One completed trip as assembled by the telemetry layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveData {
    pub drive_id: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub average_speed: f64,
    /// km/h.
    pub max_speed: f64,
    pub speed_data: Vec<SpeedSample>,
    pub sudden_accelerations: Vec<EventMarker>,
    pub sudden_brakes: Vec<EventMarker>,
    pub idling_periods: Vec<IdlingPeriod>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inactivity_events: Vec<EventMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_consumption: Option<f64>,
    #[serde(default, rename = "estimatedCO2", skip_serializing_if = "Option::is_none")]
    pub estimated_co2: Option<f64>,
}

impl DriveData {
    /// Parse a single trip from JSON. Missing fields, wrong types and unparseable timestamps
    /// all surface as [`AnalysisError::MalformedInput`].
    pub fn from_json(raw: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(raw).map_err(AnalysisError::malformed)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AnalysisError> {
        serde_json::from_reader(reader).map_err(AnalysisError::malformed)
    }

    /// Parse a JSON array of trips.
    pub fn batch_from_reader<R: Read>(reader: R) -> Result<Vec<Self>, AnalysisError> {
        serde_json::from_reader(reader).map_err(AnalysisError::malformed)
    }

    pub fn sudden_acceleration_count(&self) -> usize {
        self.sudden_accelerations.len()
    }

    pub fn sudden_brake_count(&self) -> usize {
        self.sudden_brakes.len()
    }

    pub fn inactivity_event_count(&self) -> usize {
        self.inactivity_events.len()
    }
}

/// A time-stamped speed reading, optionally geo-tagged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedSample {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Opaque driving-event marker. Only the number of markers is ever consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventMarker(pub serde_json::Value);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdlingPeriod {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: DateTime<Utc>,
    /// Seconds.
    #[serde(alias = "durationSeconds")]
    pub duration: f64,
}

/// Derived, read-only trip statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveStatistics {
    /// Kilometers.
    pub total_distance: f64,
    /// Minutes.
    pub driving_time: f64,
    /// Minutes.
    pub idling_time: f64,
    /// Kilometers per unit of fuel; absent when consumption is unknown, zero, or the ratio overflows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency: Option<f64>,
    /// CO2 per kilometer; absent when the estimate is unknown or the trip has no distance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_intensity: Option<f64>,
}

/// Analysis output handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveAnalysisResult {
    pub drive_id: String,
    pub safety_score: u8,
    pub eco_score: u8,
    pub attention_score: u8,
    pub total_score: u8,
    pub statistics: DriveStatistics,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

impl DriveAnalysisResult {
    pub fn rating(&self) -> DriveRating {
        DriveRating::from_score(self.total_score)
    }
}

/// Coarse band over the total score, used for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl DriveRating {
    pub const fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Fair,
            _ => Self::Poor,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    EpochMillis(i64),
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(raw) => parse_timestamp(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "failed to parse '{raw}' as an RFC 3339 timestamp"
            ))
        }),
        RawTimestamp::EpochMillis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| {
                serde::de::Error::custom(format!("epoch milliseconds {millis} out of range"))
            }),
    }
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
