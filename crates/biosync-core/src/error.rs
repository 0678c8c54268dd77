//! Error types for BioSync

/// Result type alias using BioSync's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for BioSync operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A column required by the selected model is absent from the feature set
    #[error("missing feature for selected model: {0}")]
    MissingFeature(String),

    /// The selected model failed to load at startup
    #[error("{0} model is not loaded")]
    ModelUnavailable(String),

    /// The predictor itself failed while producing a probability
    #[error("prediction error in {model} model: {message}")]
    Scoring { model: String, message: String },

    /// Model artifact could not be read or failed validation
    #[error("artifact error: {0}")]
    Artifact(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

/// Caller-facing class of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself cannot be served as submitted
    MalformedInput,
    /// The service cannot serve this request until it is redeployed
    ServiceUnavailable,
    /// Anything else
    Internal,
}

impl ErrorKind {
    /// Stable identifier used in error bodies and metric labels
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedInput => "invalid_request_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Internal => "internal_error",
        }
    }
}

impl Error {
    /// Create a new missing-feature error
    pub fn missing_feature(column: impl Into<String>) -> Self {
        Self::MissingFeature(column.into())
    }

    /// Create a new model-unavailable error
    pub fn model_unavailable(model: impl Into<String>) -> Self {
        Self::ModelUnavailable(model.into())
    }

    /// Create a new scoring error for the given model
    pub fn scoring(model: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Scoring {
            model: model.into(),
            message: message.into(),
        }
    }

    /// Create a new artifact error
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Classify this error for the caller
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingFeature(_) => ErrorKind::MalformedInput,
            Self::ModelUnavailable(_) => ErrorKind::ServiceUnavailable,
            _ => ErrorKind::Internal,
        }
    }
}
