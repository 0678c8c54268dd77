//! BioSync Classifiers
//!
//! Stress classification for physiological feature snapshots.
//!
//! A request flows through four steps:
//! - Selection: the presence of electrodermal activity picks the RF or Lite model
//! - Scoring: required columns are assembled in order and passed to the predictor
//! - Labelling: the stressed-class probability is compared against a fixed threshold
//! - Advisory: the probability is mapped to a graded coping suggestion
//!
//! Models are loaded once at startup into an immutable [`ClassifierRegistry`]
//! and shared read-only across requests.

pub mod advisory;
pub mod artifact;
pub mod config;
pub mod forest;
pub mod logistic;
pub mod predictor;
pub mod registry;
pub mod scorer;
pub mod selector;
pub mod service;

pub use advisory::{advise, StressState, ADVISORY_BANDS};
pub use artifact::{ModelArtifact, ModelSpec};
pub use config::{ModelSourceConfig, ModelsConfig};
pub use forest::{DecisionTree, Node, RandomForest};
pub use logistic::LogisticModel;
pub use predictor::Predictor;
pub use registry::{ClassifierEntry, ClassifierRegistry, ModelStatus, RegistryBuilder};
pub use scorer::{label_for, score, DECISION_THRESHOLD};
pub use selector::select;
pub use service::{Assessment, StressService};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::advisory::{advise, StressState};
    pub use crate::predictor::Predictor;
    pub use crate::registry::{ClassifierEntry, ClassifierRegistry};
    pub use crate::service::{Assessment, StressService};
    pub use biosync_core::prelude::*;
}
