//! Per-dimension scorers and the weighted total.
//!
//! Every score lives in `0..=MAX_SCORE`. The three weights are the only place the overall
//! emphasis between safety, eco and attention is encoded.

pub mod attention;
pub mod eco;
pub mod penalties;
pub mod safety;

use super::domain::DriveData;

pub const MAX_SCORE: u8 = 100;

pub const SAFETY_WEIGHT: f64 = 0.4;
pub const ECO_WEIGHT: f64 = 0.3;
pub const ATTENTION_WEIGHT: f64 = 0.3;

/// The three dimension scores for one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubScores {
    pub safety: u8,
    pub eco: u8,
    pub attention: u8,
}

impl SubScores {
    pub fn compute(drive: &DriveData) -> Self {
        Self {
            safety: safety::score(drive),
            eco: eco::score(drive),
            attention: attention::score(drive),
        }
    }

    /// Weighted total, rounded to the nearest point.
    pub fn total(&self) -> u8 {
        let weighted = SAFETY_WEIGHT * f64::from(self.safety)
            + ECO_WEIGHT * f64::from(self.eco)
            + ATTENTION_WEIGHT * f64::from(self.attention);

        weighted.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert_eq!(SAFETY_WEIGHT + ECO_WEIGHT + ATTENTION_WEIGHT, 1.0);
    }

    #[test]
    fn total_rounds_weighted_sum() {
        let scores = SubScores {
            safety: 94,
            eco: 100,
            attention: 100,
        };
        // 37.6 + 30 + 30
        assert_eq!(scores.total(), 98);

        let perfect = SubScores {
            safety: 100,
            eco: 100,
            attention: 100,
        };
        assert_eq!(perfect.total(), 100);

        let zero = SubScores {
            safety: 0,
            eco: 0,
            attention: 0,
        };
        assert_eq!(zero.total(), 0);
    }
}
