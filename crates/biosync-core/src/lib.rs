//! BioSync Core
//!
//! Core types shared across the BioSync stress service.
//!
//! This crate provides:
//! - The feature set submitted for classification and its wire form
//! - Prediction results, labels and model identifiers
//! - Error types, their caller-facing classification, and result handling

pub mod error;
pub mod features;
pub mod types;

pub use error::{Error, ErrorKind, Result};
pub use features::{FeatureInput, FeatureSet};
pub use types::{ModelKind, PredictionResult, StressLabel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::features::{FeatureInput, FeatureSet};
    pub use crate::types::{ModelKind, PredictionResult, StressLabel};
}
