use crate::analysis::domain::DriveData;
use crate::analysis::scoring::penalties::speeding_penalty;
use crate::analysis::scoring::{attention, eco, SubScores};
use crate::analysis::statistics;

pub const HARSH_ACCELERATION_THRESHOLD: usize = 3;
pub const HARD_BRAKING_THRESHOLD: usize = 2;
pub const EXCESSIVE_IDLING_RATIO: f64 = 0.15;
/// Kilometers per unit of fuel below which economy advice is given.
pub const LOW_FUEL_EFFICIENCY: f64 = 8.0;
pub const LOW_SAFETY_SCORE: u8 = 60;
pub const STRONG_ECO_SCORE: u8 = 90;

/// Everything the rules look at, computed once per trip.
#[derive(Debug, Clone)]
pub(crate) struct RuleSignals {
    pub accelerations: usize,
    pub brakes: usize,
    pub max_speed: f64,
    pub speeding_penalty: u32,
    pub idling_minutes: f64,
    pub idling_ratio: f64,
    pub driving_hours: f64,
    pub overtime_hours: f64,
    pub inactivity_events: usize,
    pub fuel_efficiency: Option<f64>,
    pub scores: SubScores,
}

impl RuleSignals {
    pub(crate) fn collect(drive: &DriveData, scores: SubScores) -> Self {
        Self {
            accelerations: drive.sudden_acceleration_count(),
            brakes: drive.sudden_brake_count(),
            max_speed: drive.max_speed,
            speeding_penalty: speeding_penalty(drive.max_speed),
            idling_minutes: statistics::idling_time_minutes(drive),
            idling_ratio: eco::idling_ratio(drive),
            driving_hours: statistics::driving_time_minutes(drive) / 60.0,
            overtime_hours: attention::overtime_hours(drive),
            inactivity_events: drive.inactivity_event_count(),
            fuel_efficiency: statistics::fuel_efficiency(drive),
            scores,
        }
    }
}

/// Observation and/or advice produced by one triggered rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RuleOutcome {
    pub insight: Option<String>,
    pub recommendation: Option<String>,
}

/// Insight rules. Output order follows declaration order in [`InsightRule::ordered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightRule {
    SmoothDriving,
    HarshAcceleration,
    HardBraking,
    Speeding,
    ExcessiveIdling,
    LongDrive,
    Inactivity,
    LowFuelEfficiency,
    StrongEcoScore,
    LowSafetyScore,
}

impl InsightRule {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::SmoothDriving,
            Self::HarshAcceleration,
            Self::HardBraking,
            Self::Speeding,
            Self::ExcessiveIdling,
            Self::LongDrive,
            Self::Inactivity,
            Self::LowFuelEfficiency,
            Self::StrongEcoScore,
            Self::LowSafetyScore,
        ]
    }

    pub(crate) fn evaluate(self, signals: &RuleSignals) -> Option<RuleOutcome> {
        match self {
            Self::SmoothDriving => (signals.accelerations == 0
                && signals.brakes == 0
                && signals.speeding_penalty == 0)
                .then(|| RuleOutcome {
                    insight: Some("Smooth, steady driving with no harsh events".to_string()),
                    recommendation: None,
                }),
            Self::HarshAcceleration => (signals.accelerations >= HARSH_ACCELERATION_THRESHOLD)
                .then(|| RuleOutcome {
                    insight: Some(format!(
                        "{} sudden accelerations detected",
                        signals.accelerations
                    )),
                    recommendation: Some(
                        "Accelerate gradually; smooth starts are safer and save fuel".to_string(),
                    ),
                }),
            Self::HardBraking => (signals.brakes >= HARD_BRAKING_THRESHOLD).then(|| RuleOutcome {
                insight: Some(format!("{} sudden braking events detected", signals.brakes)),
                recommendation: Some(
                    "Keep a larger following distance so you can brake gently".to_string(),
                ),
            }),
            Self::Speeding => (signals.speeding_penalty > 0).then(|| RuleOutcome {
                insight: Some(format!("Top speed reached {:.1} km/h", signals.max_speed)),
                recommendation: Some("Keep to posted speed limits on fast roads".to_string()),
            }),
            Self::ExcessiveIdling => {
                (signals.idling_ratio >= EXCESSIVE_IDLING_RATIO).then(|| RuleOutcome {
                    insight: Some(format!(
                        "Idled for {:.1} minutes ({:.0}% of the trip)",
                        signals.idling_minutes,
                        signals.idling_ratio * 100.0
                    )),
                    recommendation: Some(
                        "Switch the engine off during long stops to cut fuel use and emissions"
                            .to_string(),
                    ),
                })
            }
            Self::LongDrive => (signals.overtime_hours > 0.0).then(|| RuleOutcome {
                insight: Some(format!(
                    "Drove {:.1} hours without a recorded break",
                    signals.driving_hours
                )),
                recommendation: Some(
                    "Take a 15-minute break at least every two hours on long trips".to_string(),
                ),
            }),
            Self::Inactivity => (signals.inactivity_events > 0).then(|| RuleOutcome {
                insight: Some(format!(
                    "{} period{} without driver input detected",
                    signals.inactivity_events,
                    if signals.inactivity_events == 1 { "" } else { "s" }
                )),
                recommendation: Some(
                    "Pull over somewhere safe if you feel drowsy or distracted".to_string(),
                ),
            }),
            Self::LowFuelEfficiency => signals
                .fuel_efficiency
                .filter(|efficiency| *efficiency < LOW_FUEL_EFFICIENCY)
                .map(|efficiency| RuleOutcome {
                    insight: Some(format!(
                        "Fuel efficiency was {efficiency:.1} km per unit of fuel"
                    )),
                    recommendation: Some(
                        "Hold a steady speed and check tyre pressure to improve fuel economy"
                            .to_string(),
                    ),
                }),
            Self::StrongEcoScore => {
                (signals.scores.eco >= STRONG_ECO_SCORE).then(|| RuleOutcome {
                    insight: Some("Eco-friendly driving kept fuel waste low".to_string()),
                    recommendation: None,
                })
            }
            Self::LowSafetyScore => {
                (signals.scores.safety < LOW_SAFETY_SCORE).then(|| RuleOutcome {
                    insight: None,
                    recommendation: Some(
                        "Review this trip's harsh events; a defensive driving refresher could help"
                            .to_string(),
                    ),
                })
            }
        }
    }
}
