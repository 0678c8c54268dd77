//! Coping suggestions graded by stress score
//!
//! Bands are evaluated in ascending order with exclusive upper bounds; the
//! first band whose bound exceeds the score wins, and anything at or above the
//! last bound falls through to the top band. The boundary between the
//! Elevated and Stressed bands coincides with the decision threshold, so the
//! suggestion always agrees with the label.

use serde::Serialize;

/// Graded arousal state, least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StressState {
    DeeplyRelaxed,
    Calm,
    Elevated,
    Stressed,
    HighlyStressed,
}

/// Exclusive upper bound of each band below the top one
pub const ADVISORY_BANDS: [(f64, StressState); 4] = [
    (0.20, StressState::DeeplyRelaxed),
    (0.45, StressState::Calm),
    (0.60, StressState::Elevated),
    (0.80, StressState::Stressed),
];

impl StressState {
    /// Band containing a stress score
    pub fn from_score(score: f64) -> Self {
        ADVISORY_BANDS
            .iter()
            .find(|(upper, _)| score < *upper)
            .map(|(_, state)| *state)
            .unwrap_or(Self::HighlyStressed)
    }

    /// Suggestion shown to the wearer
    pub fn message(&self) -> &'static str {
        match self {
            Self::DeeplyRelaxed => {
                "State: Deeply Relaxed. Excellent condition. Great for focus or recovery."
            }
            Self::Calm => "State: Calm. You are balanced and doing well. Keep it up.",
            Self::Elevated => {
                "State: Elevated. You may be experiencing slight pressure and are approaching \
                 the stress threshold. Consider a short break soon."
            }
            Self::Stressed => {
                "State: Stressed. Detected physiological stress. Try 'Box Breathing' \
                 (4s in, 4s hold, 4s out, 4s hold)."
            }
            Self::HighlyStressed => {
                "State: Highly Stressed. Strong markers detected. Stop what you are doing, \
                 close your eyes, and take 5 deep breaths."
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeeplyRelaxed => "deeply_relaxed",
            Self::Calm => "calm",
            Self::Elevated => "elevated",
            Self::Stressed => "stressed",
            Self::HighlyStressed => "highly_stressed",
        }
    }
}

/// Suggestion for a stress score
pub fn advise(stress_score: f64) -> &'static str {
    StressState::from_score(stress_score).message()
}
