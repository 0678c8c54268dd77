//! HTTP routes and handlers

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use biosync_classifiers::{Assessment, ModelStatus};
use biosync_core::{Error, ErrorKind, FeatureInput, FeatureSet};
use serde::Serialize;
use serde_json::json;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;

    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/models", get(models))
        .route("/predict_stress", post(predict_stress))
        .fallback(fallback)
        // Enforced by the body extractor so oversized bodies surface as a JsonRejection
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn metrics(State(state): State<AppState>) -> String {
    state.metrics_handle.render()
}

#[derive(Debug, Serialize)]
struct ModelsResponse {
    models: Vec<ModelStatus>,
}

async fn models(State(state): State<AppState>) -> Json<ModelsResponse> {
    Json(ModelsResponse {
        models: state.service.registry().status(),
    })
}

/// Classify one physiological reading
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
async fn predict_stress(
    State(state): State<AppState>,
    payload: Result<Json<FeatureInput>, JsonRejection>,
) -> Result<Json<Assessment>, AppError> {
    metrics::counter!("biosync_requests_total").increment(1);

    let Json(input) = payload?;
    let features = FeatureSet::from(input);

    let start = Instant::now();
    let assessment = state.service.handle(&features)?;
    let latency_us = start.elapsed().as_micros() as f64;

    metrics::histogram!(
        "biosync_prediction_latency_us",
        "model" => assessment.model_used.as_str()
    )
    .record(latency_us);
    metrics::counter!(
        "biosync_predictions_total",
        "model" => assessment.model_used.as_str(),
        "label" => if assessment.label.is_stressed() { "1" } else { "0" }
    )
    .increment(1);

    info!(
        model = %assessment.model_used,
        label = assessment.label.as_u8(),
        stress_score = assessment.stress_score,
        "Prediction complete"
    );

    Ok(Json(assessment))
}

async fn fallback() -> AppError {
    AppError::NotFound
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    /// Body could not be read as a feature set
    InvalidRequest { status: StatusCode, message: String },

    /// The classification pipeline failed
    Prediction(Error),

    /// No route matched
    NotFound,
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError::Prediction(err)
    }
}

impl AppError {
    fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidRequest { .. } | AppError::NotFound => ErrorKind::MalformedInput,
            AppError::Prediction(err) => err.kind(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        metrics::counter!("biosync_errors_total", "kind" => kind.as_str()).increment(1);

        let (status, message) = match self {
            AppError::InvalidRequest { status, message } => {
                warn!("Rejected request body: {}", message);
                (status, message)
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Prediction(err) => match kind {
                ErrorKind::MalformedInput => {
                    warn!("Rejected feature set: {}", err);
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                ErrorKind::ServiceUnavailable => {
                    warn!("Prediction unavailable: {}", err);
                    (StatusCode::SERVICE_UNAVAILABLE, err.to_string())
                }
                ErrorKind::Internal => {
                    error!("Prediction failed: {}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Prediction failed".to_string(),
                    )
                }
            },
        };

        let body = json!({
            "error": {
                "message": message,
                "type": kind.as_str(),
            }
        });

        (status, Json(body)).into_response()
    }
}
