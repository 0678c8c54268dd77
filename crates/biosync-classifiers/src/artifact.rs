//! Model artifacts on disk
//!
//! An artifact is a JSON document holding a trained model together with the
//! ordered list of feature names it was trained on:
//!
//! ```json
//! {
//!   "feature_cols": ["bvp_mean", "bvp_std"],
//!   "model": { "type": "logistic", "coefficients": [1.2, -0.4], "intercept": 0.1 }
//! }
//! ```

use crate::forest::{DecisionTree, Node, RandomForest};
use crate::logistic::LogisticModel;
use crate::predictor::Predictor;
use biosync_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// A trained model and its input contract
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Feature names in the order the model consumes them
    pub feature_cols: Vec<String>,

    /// Model parameters
    pub model: ModelSpec,
}

/// Serialized model parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelSpec {
    /// Ensemble of decision trees
    RandomForest { trees: Vec<TreeSpec> },

    /// Logistic regression
    Logistic {
        coefficients: Vec<f64>,
        intercept: f64,
    },
}

/// Serialized decision tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeSpec {
    pub nodes: Vec<Node>,
}

impl ModelArtifact {
    /// Read an artifact from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::artifact(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
            .map_err(|e| Error::artifact(format!("{}: {}", path.display(), e)))
    }

    /// Parse an artifact from a JSON string
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::artifact(format!("invalid JSON: {}", e)))
    }

    /// Validate the artifact and build its predictor
    pub fn build_predictor(&self) -> Result<Arc<dyn Predictor>> {
        self.validate_columns()?;
        let n_features = self.feature_cols.len();

        match &self.model {
            ModelSpec::RandomForest { trees } => {
                let trees = trees
                    .iter()
                    .map(|tree| DecisionTree::new(tree.nodes.clone(), n_features))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Arc::new(RandomForest::new(trees, n_features)?))
            }
            ModelSpec::Logistic {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != n_features {
                    return Err(Error::artifact(format!(
                        "logistic model has {} coefficients for {} feature columns",
                        coefficients.len(),
                        n_features
                    )));
                }
                Ok(Arc::new(LogisticModel::new(coefficients.clone(), *intercept)?))
            }
        }
    }

    fn validate_columns(&self) -> Result<()> {
        if self.feature_cols.is_empty() {
            return Err(Error::artifact("feature_cols is empty"));
        }

        let mut seen = HashSet::new();
        for col in &self.feature_cols {
            if !seen.insert(col.as_str()) {
                return Err(Error::artifact(format!("duplicate feature column: {}", col)));
            }
        }

        Ok(())
    }
}
