// Axum API Server Module
//
// Purpose: HTTP surface over the diagnosis engine. Classification happens
// upstream; clients post the classifier's predictions.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use moka::future::Cache;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::engine::{DiagnosisEngine, DiagnosisRequest};
use crate::error::DiagnosisError;
use crate::knowledge_base::KnowledgeBase;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub engine: DiagnosisEngine,
    /// Diagnosis is deterministic, so responses can be reused per request body
    pub cache: Cache<String, serde_json::Value>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading knowledge base...");
        let kb = match &config.knowledge_base_path {
            Some(path) => KnowledgeBase::load(Path::new(path))?,
            None => KnowledgeBase::builtin(),
        };
        tracing::info!("Knowledge base ready ({} entries, {} aliases)", kb.len(), kb.alias_count());

        let engine = DiagnosisEngine::new(Arc::new(kb), config.defaults)?;

        tracing::info!("Initializing Moka cache...");
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(Duration::from_secs(config.cache_ttl_secs))
            .build();

        Ok(Self { engine, cache })
    }

    /// State around an existing engine (tests, embedding)
    pub fn with_engine(engine: DiagnosisEngine) -> Self {
        Self {
            engine,
            cache: Cache::builder()
                .max_capacity(1_000)
                .time_to_live(Duration::from_secs(300))
                .build(),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/diagnose", post(diagnose_predictions))
        .route("/api/diagnose/batch", post(diagnose_batch))
        .route("/api/categories", get(get_categories))
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn diagnose_predictions(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let cache_key = serde_json::to_string(&request)
        .map_err(|e| AppError::Internal(format!("Failed to encode cache key: {}", e)))?;

    if let Some(cached) = state.cache.get(&cache_key).await {
        tracing::debug!("Cache hit for diagnosis request");
        return Ok(Json(cached));
    }

    let response = state.engine.diagnose_request(&request)?;
    let result = serde_json::to_value(&response)
        .map_err(|e| AppError::Internal(format!("JSON encode error: {}", e)))?;

    state.cache.insert(cache_key, result.clone()).await;

    Ok(Json(result))
}

async fn diagnose_batch(
    State(state): State<AppState>,
    Json(batch): Json<BatchDiagnosisRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let start = std::time::Instant::now();
    let n_requests = batch.requests.len();

    // Rayon fan-out is CPU-bound; keep it off the async workers
    let engine = state.engine.clone();
    let results = tokio::task::spawn_blocking(move || engine.diagnose_batch(&batch.requests))
        .await
        .map_err(|e| AppError::Internal(format!("Batch task failed: {}", e)))?;

    let data: Vec<serde_json::Value> = results
        .into_iter()
        .map(|result| match result {
            Ok(response) => serde_json::to_value(&response)
                .unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() })),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        })
        .collect();

    let elapsed = start.elapsed();
    tracing::debug!("Batch of {} diagnoses completed in {:?}", n_requests, elapsed);

    Ok(Json(serde_json::json!({
        "rows": data.len(),
        "results": data,
        "query_time_us": elapsed.as_micros(),
    })))
}

async fn get_categories(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.engine.categories())
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(serde::Deserialize, Debug)]
struct BatchDiagnosisRequest {
    requests: Vec<DiagnosisRequest>,
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    InvalidInput(String),
    Classifier(String),
    Internal(String),
}

impl From<DiagnosisError> for AppError {
    fn from(err: DiagnosisError) -> Self {
        match err {
            DiagnosisError::InvalidInput { .. } => AppError::InvalidInput(err.to_string()),
            DiagnosisError::Classifier(_) => AppError::Classifier(err.to_string()),
            DiagnosisError::KnowledgeBase(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Classifier(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
