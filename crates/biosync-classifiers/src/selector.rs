//! Model selection

use biosync_core::features::names::EDA_MEAN;
use biosync_core::{FeatureSet, ModelKind};

/// Pick the classifier for a feature set.
///
/// A measured `eda_mean` stands in for "this reading includes electrodermal
/// sensor data" and selects the full RF model; otherwise the Lite model is
/// used. The value of `eda_mean` plays no part in the decision, and no other
/// field is consulted.
pub fn select(features: &FeatureSet) -> ModelKind {
    if features.is_present(EDA_MEAN) {
        ModelKind::Rf
    } else {
        ModelKind::Lite
    }
}
