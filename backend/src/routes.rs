use crate::auth::{CredentialCheck, FixedToken};
use crate::config::ServiceConfig;
use crate::error::ApiError;
use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use crossing_core::{find_intersections, JsonFileSource, LineString, ReferenceSource};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

// Application State
pub struct AppState {
    pub config: ServiceConfig,
    pub credentials: Arc<dyn CredentialCheck>,
    pub references: Arc<dyn ReferenceSource>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        let credentials = Arc::new(FixedToken::new(
            config.auth_header.clone(),
            config.expected_token.clone(),
        ));
        let references = Arc::new(JsonFileSource::new(config.reference_path.clone()));
        Self {
            config,
            credentials,
            references,
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/intersections",
            post(intersections).fallback(method_not_allowed),
        )
        // Polylines are unbounded; size must not preempt the credential check.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn method_not_allowed() -> ApiError {
    warn!("Rejected non-POST request to /intersections");
    ApiError::MethodNotAllowed
}

async fn intersections(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !state.credentials.verify(&headers) {
        warn!("Rejected request with missing or invalid {} header", state.config.auth_header);
        return Err(ApiError::Unauthorized);
    }

    let linestring = parse_linestring(&body).map_err(|e| {
        warn!("Failed to parse linestring: {}", e);
        e
    })?;
    if !linestring.is_tagged_linestring() {
        debug!("Linestring payload has type {:?}", linestring.kind);
    }

    let source = state.references.clone();
    let references = tokio::task::spawn_blocking(move || source.load())
        .await?
        .map_err(|e| {
            warn!("Failed to load reference set: {}", e);
            ApiError::from(e)
        })?;

    let results = find_intersections(&linestring, &references);
    info!(
        "Found {} intersections ({} query segments x {} reference segments)",
        results.len(),
        linestring.segment_count(),
        references.len()
    );

    // JSON has no representation for NaN or infinity.
    if let Some(bad) = results.iter().find(|r| !r.is_finite()) {
        warn!("Non-finite intersection for line {}", bad.line_id);
        return Err(ApiError::Internal(format!(
            "non-finite intersection for line {}",
            bad.line_id
        )));
    }

    let json = serde_json::to_vec(&results).map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        json,
    )
        .into_response())
}

/// Decode the first JSON value in `body`. Anything after it is ignored.
fn parse_linestring(body: &[u8]) -> Result<LineString, ApiError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<LineString>()
        .next()
        .ok_or_else(|| ApiError::BadRequest("empty body".to_string()))?
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
