//! Mock predictors and fixtures for testing
//!
//! Provides configurable implementations of the Predictor trait and the
//! feature layouts of the two production models.

#![allow(dead_code)]

use biosync_classifiers::{ClassifierRegistry, Predictor};
use biosync_core::{Error, FeatureSet, ModelKind, Result};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

pub const RF_COLUMNS: [&str; 10] = [
    "eda_mean",
    "eda_std",
    "eda_min",
    "eda_max",
    "bvp_mean",
    "bvp_std",
    "temp_mean",
    "temp_std",
    "acc_mag_mean",
    "acc_mag_std",
];

pub const LITE_COLUMNS: [&str; 9] = [
    "bvp_mean",
    "bvp_std",
    "bvp_min",
    "bvp_max",
    "bvp_range",
    "bvp_energy",
    "acc_mean",
    "acc_std",
    "acc_max",
];

/// A predictor returning a fixed probability and recording its inputs
pub struct MockPredictor {
    probability: f64,
    n_features: usize,
    call_count: AtomicU32,
    last_input: Mutex<Option<Vec<f64>>>,
}

impl MockPredictor {
    pub fn new(probability: f64, n_features: usize) -> Self {
        Self {
            probability,
            n_features,
            call_count: AtomicU32::new(0),
            last_input: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn last_input(&self) -> Option<Vec<f64>> {
        self.last_input.lock().unwrap().clone()
    }
}

impl Predictor for MockPredictor {
    fn probability_of_positive(&self, features: &[f64]) -> Result<f64> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_input.lock().unwrap() = Some(features.to_vec());
        Ok(self.probability)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}

/// A predictor that always fails - for testing error paths
pub struct FailingPredictor {
    message: String,
}

impl FailingPredictor {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl Predictor for FailingPredictor {
    fn probability_of_positive(&self, _features: &[f64]) -> Result<f64> {
        Err(Error::internal(&self.message))
    }

    fn n_features(&self) -> usize {
        0
    }

    fn kind(&self) -> &'static str {
        "failing"
    }
}

/// Registry with both models backed by the given predictors
pub fn registry(rf: Arc<dyn Predictor>, lite: Arc<dyn Predictor>) -> ClassifierRegistry {
    ClassifierRegistry::builder()
        .with_model(ModelKind::Rf, rf, RF_COLUMNS)
        .with_model(ModelKind::Lite, lite, LITE_COLUMNS)
        .build()
}

/// Full reading with electrodermal activity
pub fn rf_payload() -> FeatureSet {
    FeatureSet::new()
        .with("eda_mean", 0.5)
        .with("eda_std", 0.1)
        .with("eda_min", 0.2)
        .with("eda_max", 0.8)
        .with("bvp_mean", 0.5)
        .with("bvp_std", 0.1)
        .with("temp_mean", 30.0)
        .with("temp_std", 0.5)
        .with("acc_mag_mean", 1.0)
        .with("acc_mag_std", 0.1)
}

/// Reading without electrodermal activity
pub fn lite_payload() -> FeatureSet {
    FeatureSet::new()
        .with("bvp_mean", 0.5)
        .with("bvp_std", 0.1)
        .with("bvp_min", 0.0)
        .with("bvp_max", 1.0)
        .with("bvp_range", 1.0)
        .with("bvp_energy", 0.5)
        .with("acc_mean", 0.5)
        .with("acc_std", 0.1)
        .with("acc_max", 1.0)
}
