//! Core types for BioSync

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The two registered stress classifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// Full random-forest model, needs electrodermal activity
    #[serde(rename = "RF")]
    Rf,
    /// Reduced model for readings without electrodermal activity
    #[serde(rename = "Lite")]
    Lite,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::Rf, ModelKind::Lite];

    /// Public identifier reported to callers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rf => "RF",
            Self::Lite => "Lite",
        }
    }

    /// Look up a model by its public identifier
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary classification output. Serialized as `0` / `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StressLabel {
    NotStressed,
    Stressed,
}

impl StressLabel {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::NotStressed => 0,
            Self::Stressed => 1,
        }
    }

    pub fn is_stressed(&self) -> bool {
        matches!(self, Self::Stressed)
    }
}

impl Serialize for StressLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for StressLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Self::NotStressed),
            1 => Ok(Self::Stressed),
            other => Err(serde::de::Error::custom(format!(
                "label must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Outcome of scoring one feature set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Model that produced the score
    pub model_name: String,

    /// Label derived from the score and the decision threshold
    pub label: StressLabel,

    /// Probability of the stressed class (0.0-1.0)
    pub stress_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_names() {
        assert_eq!(ModelKind::Rf.as_str(), "RF");
        assert_eq!(ModelKind::from_name("Lite"), Some(ModelKind::Lite));
        assert_eq!(ModelKind::from_name("rf"), None);
        assert_eq!(serde_json::to_string(&ModelKind::Rf).unwrap(), "\"RF\"");
    }

    #[test]
    fn test_label_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&StressLabel::Stressed).unwrap(), "1");
        assert_eq!(serde_json::to_string(&StressLabel::NotStressed).unwrap(), "0");

        let label: StressLabel = serde_json::from_str("1").unwrap();
        assert!(label.is_stressed());
        assert!(serde_json::from_str::<StressLabel>("2").is_err());
    }
}
