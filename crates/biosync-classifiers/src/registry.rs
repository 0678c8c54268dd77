//! Classifier registry initialization and lookup

use crate::artifact::ModelArtifact;
use crate::config::ModelsConfig;
use crate::predictor::Predictor;
use biosync_core::{ModelKind, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// A loaded model together with the columns it consumes
#[derive(Clone)]
pub struct ClassifierEntry {
    kind: ModelKind,
    predictor: Option<Arc<dyn Predictor>>,
    required_columns: Vec<String>,
}

impl ClassifierEntry {
    /// Create a usable entry
    pub fn loaded(
        kind: ModelKind,
        predictor: Arc<dyn Predictor>,
        required_columns: Vec<String>,
    ) -> Self {
        Self {
            kind,
            predictor: Some(predictor),
            required_columns,
        }
    }

    /// Create an entry whose model failed to load
    pub fn unset(kind: ModelKind) -> Self {
        Self {
            kind,
            predictor: None,
            required_columns: Vec::new(),
        }
    }

    /// Load an entry from an artifact file
    pub fn from_artifact(kind: ModelKind, path: impl AsRef<Path>) -> Result<Self> {
        let artifact = ModelArtifact::from_path(path)?;
        let predictor = artifact.build_predictor()?;
        Ok(Self::loaded(kind, predictor, artifact.feature_cols))
    }

    /// Which model this entry holds
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Wire name of the model, `RF` or `Lite`
    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Loaded predictor, `None` when the artifact failed to load
    pub fn predictor(&self) -> Option<&Arc<dyn Predictor>> {
        self.predictor.as_ref()
    }

    /// Columns the predictor expects, in input order
    pub fn required_columns(&self) -> &[String] {
        &self.required_columns
    }

    /// Whether a predictor is available for scoring
    pub fn is_loaded(&self) -> bool {
        self.predictor.is_some()
    }
}

impl fmt::Debug for ClassifierEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierEntry")
            .field("kind", &self.kind)
            .field("predictor", &self.predictor.as_ref().map(|p| p.kind()))
            .field("required_columns", &self.required_columns)
            .finish()
    }
}

/// Load state of one model, as reported to operators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelStatus {
    pub name: &'static str,
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<&'static str>,
    pub required_columns: usize,
}

/// Both stress classifiers, built once at startup and read-only afterwards
#[derive(Debug, Clone)]
pub struct ClassifierRegistry {
    rf: ClassifierEntry,
    lite: ClassifierEntry,
}

impl ClassifierRegistry {
    /// Start building a registry in process
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Load both models from their configured artifacts.
    ///
    /// Each model loads independently. A failure is logged and leaves that
    /// entry unset; it never prevents the other model from loading.
    pub fn load(config: &ModelsConfig) -> Self {
        info!("Loading stress classifiers from {}", config.dir.display());

        let [rf, lite] = ModelKind::ALL.map(|kind| {
            let path = config.artifact_path(kind);
            info!("Loading {} model from {}", kind, path.display());

            match ClassifierEntry::from_artifact(kind, &path) {
                Ok(entry) => {
                    info!(
                        "✓ Loaded {} model ({} columns)",
                        kind,
                        entry.required_columns().len()
                    );
                    entry
                }
                Err(e) => {
                    warn!("✗ Failed to load {} model: {}", kind, e);
                    ClassifierEntry::unset(kind)
                }
            }
        });

        let registry = Self { rf, lite };
        info!(
            "Classifier registry initialized with {}/{} models",
            registry.loaded_count(),
            ModelKind::ALL.len()
        );
        registry
    }

    /// Entry for a model; the entry may be unset
    pub fn get(&self, kind: ModelKind) -> &ClassifierEntry {
        match kind {
            ModelKind::Rf => &self.rf,
            ModelKind::Lite => &self.lite,
        }
    }

    /// Entry for a model by its public identifier
    pub fn get_by_name(&self, name: &str) -> Option<&ClassifierEntry> {
        ModelKind::from_name(name).map(|kind| self.get(kind))
    }

    /// Number of models with a usable predictor
    pub fn loaded_count(&self) -> usize {
        ModelKind::ALL
            .iter()
            .filter(|kind| self.get(**kind).is_loaded())
            .count()
    }

    /// Load state of every model
    pub fn status(&self) -> Vec<ModelStatus> {
        ModelKind::ALL
            .iter()
            .map(|kind| {
                let entry = self.get(*kind);
                ModelStatus {
                    name: entry.name(),
                    loaded: entry.is_loaded(),
                    model_type: entry.predictor().map(|p| p.kind()),
                    required_columns: entry.required_columns().len(),
                }
            })
            .collect()
    }
}

/// In-process registry construction, for embedders and tests
#[derive(Default)]
pub struct RegistryBuilder {
    rf: Option<ClassifierEntry>,
    lite: Option<ClassifierEntry>,
}

impl RegistryBuilder {
    /// Register a model with its required columns
    pub fn with_model<I, S>(
        mut self,
        kind: ModelKind,
        predictor: Arc<dyn Predictor>,
        required_columns: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = ClassifierEntry::loaded(
            kind,
            predictor,
            required_columns.into_iter().map(Into::into).collect(),
        );
        self.set(entry);
        self
    }

    /// Register a prepared entry
    pub fn with_entry(mut self, entry: ClassifierEntry) -> Self {
        self.set(entry);
        self
    }

    fn set(&mut self, entry: ClassifierEntry) {
        match entry.kind() {
            ModelKind::Rf => self.rf = Some(entry),
            ModelKind::Lite => self.lite = Some(entry),
        }
    }

    /// Finish; models never registered are left unset
    pub fn build(self) -> ClassifierRegistry {
        ClassifierRegistry {
            rf: self.rf.unwrap_or_else(|| ClassifierEntry::unset(ModelKind::Rf)),
            lite: self
                .lite
                .unwrap_or_else(|| ClassifierEntry::unset(ModelKind::Lite)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logistic::LogisticModel;

    fn logistic(n: usize) -> Arc<dyn Predictor> {
        Arc::new(LogisticModel::new(vec![0.0; n], 0.0).unwrap())
    }

    #[test]
    fn test_builder_leaves_missing_models_unset() {
        let registry = ClassifierRegistry::builder()
            .with_model(ModelKind::Lite, logistic(2), ["bvp_mean", "bvp_std"])
            .build();

        assert!(!registry.get(ModelKind::Rf).is_loaded());
        assert!(registry.get(ModelKind::Lite).is_loaded());
        assert_eq!(registry.loaded_count(), 1);
        assert_eq!(
            registry.get(ModelKind::Lite).required_columns(),
            &["bvp_mean".to_string(), "bvp_std".to_string()]
        );
    }

    #[test]
    fn test_get_by_name() {
        let registry = ClassifierRegistry::builder()
            .with_model(ModelKind::Rf, logistic(1), ["eda_mean"])
            .build();

        assert_eq!(registry.get_by_name("RF").map(|e| e.kind()), Some(ModelKind::Rf));
        assert!(registry.get_by_name("XGB").is_none());
    }

    #[test]
    fn test_status_report() {
        let registry = ClassifierRegistry::builder()
            .with_model(ModelKind::Rf, logistic(3), ["a", "b", "c"])
            .build();

        let status = registry.status();
        assert_eq!(status.len(), 2);
        assert_eq!(
            status[0],
            ModelStatus {
                name: "RF",
                loaded: true,
                model_type: Some("logistic"),
                required_columns: 3,
            }
        );
        assert!(!status[1].loaded);
        assert_eq!(status[1].model_type, None);
    }
}
