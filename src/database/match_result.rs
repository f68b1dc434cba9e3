use serde::{Deserialize, Serialize};

use crate::config::MatchThresholds;

/// Which column produced the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    CanonicalName,
    Alias,
}

impl MatchSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CanonicalName => "canonical_name",
            Self::Alias => "alias",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// Step function over the configured band boundaries.
    pub fn from_score(score: f32, thresholds: &MatchThresholds) -> Self {
        if score >= thresholds.high {
            Self::High
        } else if score >= thresholds.medium {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// One fuzzy-match candidate, built per query response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub account_id: i64,
    pub account_name: String,
    pub matched_text: String,
    pub similarity_score: f32,
    pub match_source: MatchSource,
    pub confidence_band: ConfidenceBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_is_a_step_function_at_the_boundaries() {
        let thresholds = MatchThresholds::default();
        assert_eq!(
            ConfidenceBand::from_score(1.0, &thresholds),
            ConfidenceBand::High
        );
        assert_eq!(
            ConfidenceBand::from_score(0.8, &thresholds),
            ConfidenceBand::High
        );
        assert_eq!(
            ConfidenceBand::from_score(0.79, &thresholds),
            ConfidenceBand::Medium
        );
        assert_eq!(
            ConfidenceBand::from_score(0.6, &thresholds),
            ConfidenceBand::Medium
        );
        assert_eq!(
            ConfidenceBand::from_score(0.59, &thresholds),
            ConfidenceBand::Low
        );
        assert_eq!(
            ConfidenceBand::from_score(0.0, &thresholds),
            ConfidenceBand::Low
        );
    }

    #[test]
    fn custom_boundaries_move_the_bands() {
        let thresholds = MatchThresholds {
            best_match: 0.5,
            high: 0.9,
            medium: 0.5,
        };
        assert_eq!(
            ConfidenceBand::from_score(0.85, &thresholds),
            ConfidenceBand::Medium
        );
        assert_eq!(
            ConfidenceBand::from_score(0.9, &thresholds),
            ConfidenceBand::High
        );
    }
}
