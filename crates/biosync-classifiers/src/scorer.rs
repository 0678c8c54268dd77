//! Scoring a feature set against one classifier

use crate::registry::ClassifierEntry;
use biosync_core::{Error, FeatureSet, PredictionResult, Result, StressLabel};

/// Probability at or above which a reading is labelled stressed
pub const DECISION_THRESHOLD: f64 = 0.6;

/// Label for a stressed-class probability; the threshold itself is stressed
pub fn label_for(probability: f64) -> StressLabel {
    if probability >= DECISION_THRESHOLD {
        StressLabel::Stressed
    } else {
        StressLabel::NotStressed
    }
}

/// Build the model input row from `columns`, in order.
///
/// Fails on the first column that is missing or null.
pub fn assemble(columns: &[String], features: &FeatureSet) -> Result<Vec<f64>> {
    columns
        .iter()
        .map(|col| {
            features
                .get(col)
                .ok_or_else(|| Error::missing_feature(col.as_str()))
        })
        .collect()
}

/// Score a feature set with a classifier entry.
///
/// Feature values are passed to the predictor exactly as supplied.
pub fn score(entry: &ClassifierEntry, features: &FeatureSet) -> Result<PredictionResult> {
    let predictor = entry
        .predictor()
        .ok_or_else(|| Error::model_unavailable(entry.name()))?;

    let row = assemble(entry.required_columns(), features)?;

    let probability = predictor
        .probability_of_positive(&row)
        .map_err(|e| Error::scoring(entry.name(), e.to_string()))?;

    if !(0.0..=1.0).contains(&probability) {
        return Err(Error::scoring(
            entry.name(),
            format!("probability {} is outside [0, 1]", probability),
        ));
    }

    Ok(PredictionResult {
        model_name: entry.name().to_string(),
        label: label_for(probability),
        stress_score: probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::Predictor;
    use biosync_core::ModelKind;
    use proptest::prelude::*;
    use std::sync::Arc;

    /// Returns a fixed probability regardless of input
    struct Constant(f64);

    impl Predictor for Constant {
        fn probability_of_positive(&self, _features: &[f64]) -> Result<f64> {
            Ok(self.0)
        }

        fn n_features(&self) -> usize {
            0
        }

        fn kind(&self) -> &'static str {
            "constant"
        }
    }

    /// Returns the first input as the probability
    struct Echo;

    impl Predictor for Echo {
        fn probability_of_positive(&self, features: &[f64]) -> Result<f64> {
            Ok(features[0])
        }

        fn n_features(&self) -> usize {
            1
        }

        fn kind(&self) -> &'static str {
            "echo"
        }
    }

    fn entry(predictor: Arc<dyn Predictor>, columns: &[&str]) -> ClassifierEntry {
        ClassifierEntry::loaded(
            ModelKind::Rf,
            predictor,
            columns.iter().map(|c| c.to_string()).collect(),
        )
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(label_for(0.6), StressLabel::Stressed);
        assert_eq!(label_for(0.599_999_999), StressLabel::NotStressed);
        assert_eq!(label_for(0.0), StressLabel::NotStressed);
        assert_eq!(label_for(1.0), StressLabel::Stressed);
    }

    #[test]
    fn test_assemble_preserves_column_order() {
        let features = FeatureSet::new()
            .with("a", 1.0)
            .with("b", 2.0)
            .with("c", 3.0);
        let columns = vec!["c".to_string(), "a".to_string(), "b".to_string()];

        assert_eq!(assemble(&columns, &features).unwrap(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_first_missing_column_is_reported() {
        let features = FeatureSet::new().with("a", 1.0);
        let columns = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        match assemble(&columns, &features) {
            Err(Error::MissingFeature(col)) => assert_eq!(col, "b"),
            other => panic!("expected MissingFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_null_column_counts_as_missing() {
        let features = FeatureSet::new().with("a", 1.0).with_null("b");
        let entry = entry(Arc::new(Constant(0.9)), &["a", "b"]);

        assert!(matches!(
            score(&entry, &features),
            Err(Error::MissingFeature(col)) if col == "b"
        ));
    }

    #[test]
    fn test_score_passes_values_through() {
        let features = FeatureSet::new().with("eda_mean", 0.73);
        let result = score(&entry(Arc::new(Echo), &["eda_mean"]), &features).unwrap();

        assert_eq!(result.model_name, "RF");
        assert_eq!(result.stress_score, 0.73);
        assert_eq!(result.label, StressLabel::Stressed);
    }

    #[test]
    fn test_unset_entry_is_unavailable() {
        let entry = ClassifierEntry::unset(ModelKind::Lite);
        let result = score(&entry, &FeatureSet::new());

        assert!(matches!(result, Err(Error::ModelUnavailable(name)) if name == "Lite"));
    }

    #[test]
    fn test_out_of_range_probability_is_a_scoring_error() {
        let features = FeatureSet::new();
        for bad in [1.5, -0.1, f64::NAN] {
            let result = score(&entry(Arc::new(Constant(bad)), &[]), &features);
            assert!(matches!(result, Err(Error::Scoring { .. })));
        }
    }

    proptest! {
        #[test]
        fn prop_label_is_monotonic(p1 in 0.0f64..0.6, p2 in 0.6f64..=1.0) {
            prop_assert_eq!(label_for(p1), StressLabel::NotStressed);
            prop_assert_eq!(label_for(p2), StressLabel::Stressed);
        }
    }
}
