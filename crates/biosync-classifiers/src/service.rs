//! Request orchestration: select, score, advise

use crate::advisory::StressState;
use crate::registry::ClassifierRegistry;
use crate::{scorer, selector};
use biosync_core::{FeatureSet, ModelKind, Result, StressLabel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Complete answer for one feature set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Identifier of the model that scored the reading
    pub model_used: ModelKind,

    /// 1 when stressed, 0 otherwise
    pub label: StressLabel,

    /// Probability of the stressed class
    pub stress_score: f64,

    /// Graded coping suggestion
    pub suggestion: String,
}

/// Stress classification over an injected, read-only registry
#[derive(Debug, Clone)]
pub struct StressService {
    registry: Arc<ClassifierRegistry>,
}

impl StressService {
    pub fn new(registry: Arc<ClassifierRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ClassifierRegistry> {
        &self.registry
    }

    /// Classify one feature set.
    ///
    /// Fails with `ModelUnavailable` when the selected model did not load,
    /// `MissingFeature` when the selected model needs a field the reading lacks,
    /// and `Scoring` when the predictor itself fails. There is no fallback to
    /// the other model and no partial result.
    pub fn handle(&self, features: &FeatureSet) -> Result<Assessment> {
        let kind = selector::select(features);
        if kind == ModelKind::Rf {
            debug!("EDA data detected, using RF model");
        } else {
            debug!("No EDA data detected, using Lite model");
        }

        let prediction = scorer::score(self.registry.get(kind), features)?;
        let state = StressState::from_score(prediction.stress_score);

        debug!(
            model = %kind,
            score = prediction.stress_score,
            label = prediction.label.as_u8(),
            state = state.as_str(),
            "Scored feature set"
        );

        Ok(Assessment {
            model_used: kind,
            label: prediction.label,
            stress_score: prediction.stress_score,
            suggestion: state.message().to_string(),
        })
    }
}
