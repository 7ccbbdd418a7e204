//! Trip analysis pipeline: validation, scoring, statistics, insights and aggregation.

pub mod domain;
pub mod insights;
pub mod scoring;
pub mod statistics;
mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    DriveAnalysisResult, DriveData, DriveRating, DriveStatistics, EventMarker, IdlingPeriod,
    SpeedSample,
};
pub use insights::{DriveInsights, InsightRule};
pub use scoring::{SubScores, ATTENTION_WEIGHT, ECO_WEIGHT, SAFETY_WEIGHT};
pub use validation::{AnalysisError, IDLING_DURATION_TOLERANCE_SECS};

use rayon::prelude::*;
use tracing::debug;

/// Stateless aggregator that validates a trip and folds every sub-result into one report.
#[derive(Debug, Clone, Copy, Default)]
pub struct DriveAnalyzer;

impl DriveAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, drive: &DriveData) -> Result<DriveAnalysisResult, AnalysisError> {
        drive.validate()?;

        let scores = SubScores::compute(drive);
        let statistics = statistics::compute(drive);
        let total_score = scores.total();
        let DriveInsights {
            insights,
            recommendations,
        } = insights::generate(drive, scores);

        debug!(
            drive_id = %drive.drive_id,
            safety = scores.safety,
            eco = scores.eco,
            attention = scores.attention,
            total = total_score,
            "drive analyzed"
        );

        Ok(DriveAnalysisResult {
            drive_id: drive.drive_id.clone(),
            safety_score: scores.safety,
            eco_score: scores.eco,
            attention_score: scores.attention,
            total_score,
            statistics,
            insights,
            recommendations,
        })
    }

    /// Analyze trips in parallel. Results keep the input order and fail independently.
    pub fn analyze_batch(
        &self,
        drives: &[DriveData],
    ) -> Vec<Result<DriveAnalysisResult, AnalysisError>> {
        drives.par_iter().map(|drive| self.analyze(drive)).collect()
    }
}

pub fn analyze(drive: &DriveData) -> Result<DriveAnalysisResult, AnalysisError> {
    DriveAnalyzer::new().analyze(drive)
}

pub fn analyze_batch(drives: &[DriveData]) -> Vec<Result<DriveAnalysisResult, AnalysisError>> {
    DriveAnalyzer::new().analyze_batch(drives)
}
