//! Configuration for model artifact locations

use biosync_core::ModelKind;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to find the model artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    /// Directory that relative artifact paths are resolved against
    #[serde(default = "default_models_dir")]
    pub dir: PathBuf,

    /// Full model, used when electrodermal activity is present
    #[serde(default = "default_rf_source")]
    pub rf: ModelSourceConfig,

    /// Reduced model, used otherwise
    #[serde(default = "default_lite_source")]
    pub lite: ModelSourceConfig,
}

/// Location of a single artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSourceConfig {
    pub artifact: PathBuf,
}

impl ModelsConfig {
    /// Source configuration for a model
    pub fn source(&self, kind: ModelKind) -> &ModelSourceConfig {
        match kind {
            ModelKind::Rf => &self.rf,
            ModelKind::Lite => &self.lite,
        }
    }

    /// Resolved path of a model's artifact
    pub fn artifact_path(&self, kind: ModelKind) -> PathBuf {
        resolve(&self.dir, &self.source(kind).artifact)
    }
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_models_dir(),
            rf: default_rf_source(),
            lite: default_lite_source(),
        }
    }
}

fn resolve(dir: &Path, artifact: &Path) -> PathBuf {
    if artifact.is_absolute() {
        artifact.to_path_buf()
    } else {
        dir.join(artifact)
    }
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("./models")
}

fn default_rf_source() -> ModelSourceConfig {
    ModelSourceConfig {
        artifact: PathBuf::from("biosync_rf.json"),
    }
}

fn default_lite_source() -> ModelSourceConfig {
    ModelSourceConfig {
        artifact: PathBuf::from("biosync_lite.json"),
    }
}
