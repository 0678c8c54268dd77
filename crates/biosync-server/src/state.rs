use biosync_classifiers::{ClassifierRegistry, StressService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

use crate::ServerConfig;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// Stress classification over the startup registry
    pub service: StressService,

    /// Prometheus metrics handle for rendering
    pub metrics_handle: PrometheusHandle,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        registry: ClassifierRegistry,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        Self {
            config: Arc::new(config),
            service: StressService::new(Arc::new(registry)),
            metrics_handle,
        }
    }
}
