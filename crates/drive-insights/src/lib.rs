//! Scoring and aggregation engine for completed vehicle trips.
//!
//! [`analysis::analyze`] turns one [`analysis::DriveData`] record into a
//! [`analysis::DriveAnalysisResult`]: safety, eco and attention sub-scores, a weighted total,
//! derived trip statistics, and rule-based insights and recommendations. The engine is pure;
//! `config` and `telemetry` exist for the command-line host only.

pub mod analysis;
pub mod config;
pub mod error;
pub mod telemetry;
