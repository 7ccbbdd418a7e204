mod rules;

pub use rules::{
    InsightRule, EXCESSIVE_IDLING_RATIO, HARD_BRAKING_THRESHOLD, HARSH_ACCELERATION_THRESHOLD,
    LOW_FUEL_EFFICIENCY, LOW_SAFETY_SCORE, STRONG_ECO_SCORE,
};

use super::domain::DriveData;
use super::scoring::SubScores;
use rules::RuleSignals;

/// Observations and advice for one trip, in rule declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriveInsights {
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn generate(drive: &DriveData, scores: SubScores) -> DriveInsights {
    let signals = RuleSignals::collect(drive, scores);
    let mut output = DriveInsights::default();

    for rule in InsightRule::ordered() {
        if let Some(outcome) = rule.evaluate(&signals) {
            output.insights.extend(outcome.insight);
            output.recommendations.extend(outcome.recommendation);
        }
    }

    output
}
