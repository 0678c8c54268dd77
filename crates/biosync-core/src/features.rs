//! Physiological feature sets

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known feature names
pub mod names {
    pub const EDA_MEAN: &str = "eda_mean";
    pub const EDA_STD: &str = "eda_std";
    pub const EDA_MIN: &str = "eda_min";
    pub const EDA_MAX: &str = "eda_max";
    pub const BVP_MEAN: &str = "bvp_mean";
    pub const BVP_STD: &str = "bvp_std";
    pub const BVP_MIN: &str = "bvp_min";
    pub const BVP_MAX: &str = "bvp_max";
    pub const BVP_RANGE: &str = "bvp_range";
    pub const BVP_ENERGY: &str = "bvp_energy";
    pub const TEMP_MEAN: &str = "temp_mean";
    pub const TEMP_STD: &str = "temp_std";
    pub const ACC_MAG_MEAN: &str = "acc_mag_mean";
    pub const ACC_MAG_STD: &str = "acc_mag_std";
    pub const ACC_MEAN: &str = "acc_mean";
    pub const ACC_STD: &str = "acc_std";
    pub const ACC_MAX: &str = "acc_max";
}

/// One physiological summary reading, keyed by feature name.
///
/// A feature is either present with a value, present but null, or missing
/// entirely. Null and missing are both treated as "not measured"; zero is a
/// valid reading and is never used as a stand-in for either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSet {
    values: BTreeMap<String, Option<f64>>,
}

impl FeatureSet {
    /// Create an empty feature set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a measured value
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, Some(value));
        self
    }

    /// Add a feature that was reported as null
    pub fn with_null(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    /// Insert or replace a feature
    pub fn insert(&mut self, name: impl Into<String>, value: Option<f64>) {
        self.values.insert(name.into(), value);
    }

    /// Value of a feature, if it was measured
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied().flatten()
    }

    /// Whether a feature carries a value
    pub fn is_present(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of keys, including null ones
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys were supplied at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over all keys and their values in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, Option<f64>)> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = (K, Option<f64>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Wire form of a feature set as submitted by clients.
///
/// `bvp_mean` and `bvp_std` are mandatory; every other field may be omitted or
/// sent as `null`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInput {
    // Electrodermal activity
    #[serde(default)]
    pub eda_mean: Option<f64>,
    #[serde(default)]
    pub eda_std: Option<f64>,
    #[serde(default)]
    pub eda_min: Option<f64>,
    #[serde(default)]
    pub eda_max: Option<f64>,

    // Blood-volume pulse
    pub bvp_mean: f64,
    pub bvp_std: f64,
    #[serde(default)]
    pub bvp_min: Option<f64>,
    #[serde(default)]
    pub bvp_max: Option<f64>,
    #[serde(default)]
    pub bvp_range: Option<f64>,
    #[serde(default)]
    pub bvp_energy: Option<f64>,

    // Skin temperature
    #[serde(default)]
    pub temp_mean: Option<f64>,
    #[serde(default)]
    pub temp_std: Option<f64>,

    // Motion magnitude
    #[serde(default)]
    pub acc_mag_mean: Option<f64>,
    #[serde(default)]
    pub acc_mag_std: Option<f64>,

    // Raw accelerometer
    #[serde(default)]
    pub acc_mean: Option<f64>,
    #[serde(default)]
    pub acc_std: Option<f64>,
    #[serde(default)]
    pub acc_max: Option<f64>,
}

impl From<FeatureInput> for FeatureSet {
    fn from(input: FeatureInput) -> Self {
        use names::*;

        [
            (EDA_MEAN, input.eda_mean),
            (EDA_STD, input.eda_std),
            (EDA_MIN, input.eda_min),
            (EDA_MAX, input.eda_max),
            (BVP_MEAN, Some(input.bvp_mean)),
            (BVP_STD, Some(input.bvp_std)),
            (BVP_MIN, input.bvp_min),
            (BVP_MAX, input.bvp_max),
            (BVP_RANGE, input.bvp_range),
            (BVP_ENERGY, input.bvp_energy),
            (TEMP_MEAN, input.temp_mean),
            (TEMP_STD, input.temp_std),
            (ACC_MAG_MEAN, input.acc_mag_mean),
            (ACC_MAG_STD, input.acc_mag_std),
            (ACC_MEAN, input.acc_mean),
            (ACC_STD, input.acc_std),
            (ACC_MAX, input.acc_max),
        ]
        .into_iter()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_and_missing_are_absent() {
        let features = FeatureSet::new().with("bvp_mean", 0.5).with_null("eda_mean");

        assert!(features.is_present("bvp_mean"));
        assert!(!features.is_present("eda_mean"));
        assert!(!features.is_present("temp_mean"));
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_zero_is_a_reading() {
        let features = FeatureSet::new().with("eda_mean", 0.0);
        assert_eq!(features.get("eda_mean"), Some(0.0));
    }

    #[test]
    fn test_deserialize_map_with_nulls() {
        let features: FeatureSet =
            serde_json::from_str(r#"{"bvp_mean": 0.5, "eda_mean": null}"#).unwrap();

        assert_eq!(features.get("bvp_mean"), Some(0.5));
        assert_eq!(features.get("eda_mean"), None);
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn test_input_requires_bvp() {
        let missing_std = serde_json::from_str::<FeatureInput>(r#"{"bvp_mean": 0.5}"#);
        assert!(missing_std.is_err());

        let input: FeatureInput =
            serde_json::from_str(r#"{"bvp_mean": 0.5, "bvp_std": 0.1, "extra": 3}"#).unwrap();
        assert_eq!(input.eda_mean, None);
    }

    #[test]
    fn test_input_conversion_keeps_absent_fields_absent() {
        let input: FeatureInput = serde_json::from_str(
            r#"{"bvp_mean": 0.5, "bvp_std": 0.1, "acc_max": 1.0, "eda_mean": null}"#,
        )
        .unwrap();

        let features = FeatureSet::from(input);
        assert_eq!(features.get(names::BVP_MEAN), Some(0.5));
        assert_eq!(features.get(names::BVP_STD), Some(0.1));
        assert_eq!(features.get(names::ACC_MAX), Some(1.0));
        assert_eq!(features.get(names::EDA_MEAN), None);
        assert_eq!(features.get(names::TEMP_MEAN), None);
    }
}
