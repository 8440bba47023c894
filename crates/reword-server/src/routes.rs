//! Route table and request handlers.
//!
//! The boundary stays thin: handlers validate shape, call the engine, and
//! translate outcomes to HTTP. Safety blocks and unresolved presets are
//! well-formed 200 responses; only malformed requests produce 4xx.

use std::time::{Duration, Instant};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use reword_catalog::{
    all_audiences, all_purposes, all_relationships, all_tones, all_voices, AudienceLevel,
    PurposeType, Relationship, TonePreset, VoicePreset,
};
use reword_core::errors::RewordError;
use reword_core::types::{BatchOutcome, BatchTemplate, PlanTier, RewriteRequest, RewriteResult};
use reword_engine::{marks, rewrite, rewrite_batch, EngineConfig};

use crate::config::ServerConfig;
use crate::metrics as metric_names;

/// Shared state accessible from Axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Engine configuration applied to every request.
    pub engine: EngineConfig,
    /// Handle for rendering the `/metrics` endpoint.
    pub metrics: PrometheusHandle,
    /// When the server started.
    pub start_time: Instant,
}

impl AppState {
    /// Build state from the server configuration.
    pub fn new(config: &ServerConfig, metrics: PrometheusHandle) -> Self {
        Self {
            engine: EngineConfig {
                unlock_all_lengths: config.unlock_all_lengths,
            },
            metrics,
            start_time: Instant::now(),
        }
    }
}

/// Build the Axum router with all routes and middleware layers.
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/v1/rewrite", post(rewrite_handler))
        .route("/v1/rewrite/batch", post(batch_handler))
        .route("/v1/speech/markup", post(markup_handler))
        .route("/v1/presets", get(presets_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .with_state(state)
}

/// Request-shape violations, mapped to 4xx before the engine runs further.
struct ApiError(RewordError);

impl From<RewordError> for ApiError {
    fn from(err: RewordError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RewordError::EmptyText | RewordError::StrengthOutOfRange(_) => {
                StatusCode::BAD_REQUEST
            }
            RewordError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// POST /v1/rewrite
async fn rewrite_handler(
    State(state): State<AppState>,
    Json(request): Json<RewriteRequest>,
) -> Result<Json<RewriteResult>, ApiError> {
    let started = Instant::now();
    counter!(metric_names::REWRITE_REQUESTS_TOTAL).increment(1);

    let result = rewrite(&request, &state.engine)?;
    if result.safety.blocked {
        counter!(metric_names::REWRITE_BLOCKED_TOTAL).increment(1);
    }
    histogram!(metric_names::REWRITE_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchRequest {
    text: String,
    templates: Vec<BatchTemplate>,
    #[serde(default)]
    plan_tier: PlanTier,
}

/// POST /v1/rewrite/batch
async fn batch_handler(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<Vec<BatchOutcome>>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(RewordError::EmptyText.into());
    }
    let outcomes = rewrite_batch(
        &request.text,
        &request.templates,
        request.plan_tier,
        &state.engine,
    );
    counter!(metric_names::BATCH_TEMPLATES_TOTAL).increment(outcomes.len() as u64);
    let failures = outcomes
        .iter()
        .filter(|o| matches!(o, BatchOutcome::Failed { .. }))
        .count();
    if failures > 0 {
        counter!(metric_names::BATCH_FAILURES_TOTAL).increment(failures as u64);
    }
    Ok(Json(outcomes))
}

#[derive(Debug, Deserialize)]
struct MarkupRequest {
    text: String,
}

#[derive(Debug, Serialize)]
struct MarkupResponse {
    markup: String,
}

/// POST /v1/speech/markup
async fn markup_handler(Json(request): Json<MarkupRequest>) -> Json<MarkupResponse> {
    counter!(metric_names::MARKUP_REQUESTS_TOTAL).increment(1);
    Json(MarkupResponse {
        markup: marks::annotate_breaks(&request.text),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetCatalog {
    tones: &'static [TonePreset],
    audiences: &'static [AudienceLevel],
    purposes: &'static [PurposeType],
    relationships: &'static [Relationship],
    voices: &'static [VoicePreset],
}

/// GET /v1/presets
async fn presets_handler() -> Json<PresetCatalog> {
    Json(PresetCatalog {
        tones: all_tones(),
        audiences: all_audiences(),
        purposes: all_purposes(),
        relationships: all_relationships(),
        voices: all_voices(),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    uptime_secs: u64,
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /metrics
async fn metrics_handler(State(state): State<AppState>) -> String {
    crate::metrics::render(&state.metrics)
}
