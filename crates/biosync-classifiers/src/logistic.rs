//! Logistic-regression predictor

use crate::predictor::Predictor;
use biosync_core::{Error, Result};

/// Linear model squashed through the logistic function
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(Error::artifact("logistic model has no coefficients"));
        }
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::artifact("logistic model has non-finite parameters"));
        }

        Ok(Self {
            coefficients,
            intercept,
        })
    }

    fn decision_function(&self, features: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }
}

fn sigmoid(z: f64) -> f64 {
    // Split on sign so exp never overflows
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Predictor for LogisticModel {
    fn probability_of_positive(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            return Err(Error::internal(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }

        let z = self.decision_function(features);
        if z.is_nan() {
            return Err(Error::internal("decision function is not a number"));
        }

        Ok(sigmoid(z))
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn kind(&self) -> &'static str {
        "logistic"
    }
}
