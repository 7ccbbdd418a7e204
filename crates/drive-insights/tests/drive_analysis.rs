use drive_insights::analysis::{analyze, AnalysisError, DriveData};
use serde_json::{json, Value};

fn trip_json() -> Value {
    json!({
        "driveId": "trip-42",
        "startTime": "2024-05-01T08:00:00Z",
        "endTime": "2024-05-01T08:45:00Z",
        "distance": 50.0,
        "averageSpeed": 66.7,
        "maxSpeed": 80.0,
        "speedData": [
            { "timestamp": "2024-05-01T08:00:00Z", "speed": 0.0, "latitude": 41.59, "longitude": -93.62 },
            { "timestamp": "2024-05-01T08:20:00Z", "speed": 72.5 }
        ],
        "suddenAccelerations": [],
        "suddenBrakes": [],
        "idlingPeriods": []
    })
}

fn parse(value: &Value) -> DriveData {
    DriveData::from_json(&value.to_string()).expect("trip parses")
}

fn score_with(patch: impl FnOnce(&mut Value)) -> u8 {
    let mut value = trip_json();
    patch(&mut value);
    analyze(&parse(&value)).expect("analysis succeeds").safety_score
}

#[test]
fn clean_trip_scores_full_safety() {
    assert_eq!(score_with(|_| {}), 100);
}

#[test]
fn two_sudden_accelerations_cost_six_points() {
    let score = score_with(|value| {
        value["suddenAccelerations"] = json!(["2024-05-01T08:05:00Z", "2024-05-01T08:31:12Z"]);
    });
    assert_eq!(score, 94);
}

#[test]
fn one_sudden_brake_costs_five_points() {
    let score = score_with(|value| {
        value["suddenBrakes"] = json!([{ "at": 1714550700000_i64 }]);
    });
    assert_eq!(score, 95);
}

#[test]
fn speeding_bracket_costs_twenty_points() {
    let score = score_with(|value| {
        value["maxSpeed"] = json!(115);
    });
    assert_eq!(score, 80);
}

#[test]
fn fuel_efficiency_is_distance_per_fuel() {
    let mut value = trip_json();
    value["fuelConsumption"] = json!(5);

    let result = analyze(&parse(&value)).expect("analysis succeeds");

    assert_eq!(result.statistics.fuel_efficiency, Some(10.0));
    assert_eq!(result.statistics.carbon_intensity, None);
}

#[test]
fn idling_seconds_sum_to_minutes() {
    let mut value = trip_json();
    value["idlingPeriods"] = json!([
        { "startTime": "2024-05-01T08:10:00Z", "endTime": "2024-05-01T08:12:00Z", "duration": 120 },
        { "startTime": "2024-05-01T08:30:00Z", "endTime": "2024-05-01T08:31:00Z", "durationSeconds": 60 }
    ]);

    let result = analyze(&parse(&value)).expect("analysis succeeds");

    assert_eq!(result.statistics.idling_time, 3.0);
    assert_eq!(result.statistics.driving_time, 45.0);
}

#[test]
fn accepts_epoch_millis_and_naive_timestamps() {
    let mut value = trip_json();
    value["startTime"] = json!(1_714_550_400_000_i64);
    value["endTime"] = json!("2024-05-01T09:00:00");

    let result = analyze(&parse(&value)).expect("analysis succeeds");

    assert_eq!(result.statistics.driving_time, 60.0);
}

#[test]
fn output_uses_camel_case_contract() {
    let mut value = trip_json();
    value["estimatedCO2"] = json!(6000);

    let result = analyze(&parse(&value)).expect("analysis succeeds");
    let encoded = serde_json::to_value(&result).expect("result encodes");

    assert_eq!(encoded["driveId"], "trip-42");
    for key in ["safetyScore", "ecoScore", "attentionScore", "totalScore"] {
        assert!(encoded[key].is_u64(), "{key} should be an integer");
    }
    assert_eq!(encoded["statistics"]["carbonIntensity"], 120.0);
    assert!(encoded["statistics"].get("fuelEfficiency").is_none());
    assert!(encoded["insights"].is_array());
    assert!(encoded["recommendations"].is_array());
}

#[test]
fn missing_required_field_is_malformed() {
    let mut value = trip_json();
    value
        .as_object_mut()
        .expect("object")
        .remove("maxSpeed");

    match DriveData::from_json(&value.to_string()) {
        Err(AnalysisError::MalformedInput { detail }) => assert!(detail.contains("maxSpeed")),
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn unparseable_timestamp_is_malformed() {
    let mut value = trip_json();
    value["endTime"] = json!("yesterday afternoon");

    match DriveData::from_json(&value.to_string()) {
        Err(AnalysisError::MalformedInput { detail }) => {
            assert!(detail.contains("yesterday afternoon"))
        }
        other => panic!("expected malformed input, got {other:?}"),
    }
}

#[test]
fn wrong_type_is_malformed() {
    let mut value = trip_json();
    value["distance"] = json!("fifty");

    assert!(matches!(
        DriveData::from_json(&value.to_string()),
        Err(AnalysisError::MalformedInput { .. })
    ));
}

#[test]
fn end_before_start_is_an_invariant_violation() {
    let mut value = trip_json();
    value["endTime"] = json!("2024-05-01T07:00:00Z");

    let err = analyze(&parse(&value)).expect_err("inverted trip rejected");

    assert_eq!(err.field(), Some("endTime"));
}

#[test]
fn batch_arrays_parse_in_order() {
    let mut second = trip_json();
    second["driveId"] = json!("trip-43");
    let raw = json!([trip_json(), second]).to_string();

    let drives = DriveData::batch_from_reader(raw.as_bytes()).expect("batch parses");

    let ids: Vec<&str> = drives.iter().map(|drive| drive.drive_id.as_str()).collect();
    assert_eq!(ids, vec!["trip-42", "trip-43"]);
}
