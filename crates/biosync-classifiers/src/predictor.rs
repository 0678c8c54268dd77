//! Predictor trait

use biosync_core::Result;

/// A trained binary classifier, treated as an opaque probability source.
///
/// Implementations must be pure: the same input vector always yields the same
/// probability, and calls may happen concurrently from any worker.
pub trait Predictor: Send + Sync {
    /// Probability of the positive (stressed) class for one input row.
    ///
    /// `features` is ordered exactly as the model's required columns.
    fn probability_of_positive(&self, features: &[f64]) -> Result<f64>;

    /// Number of input features this predictor expects
    fn n_features(&self) -> usize;

    /// Short description of the model family, used in logs
    fn kind(&self) -> &'static str;
}
