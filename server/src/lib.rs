use anyhow::{Context, Result};
use axum::{extract::State, http::HeaderValue, routing::{get, post}, Json, Router};
use jobmatch_core::{load_catalog, match_profile, CorpusIndex, ProfileMatches, Query};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub name: Option<serde_json::Value>,
    #[serde(default)]
    pub skills: Option<Query>,
    #[serde(default)]
    pub education: Option<serde_json::Value>,
    #[serde(default)]
    pub state: Option<serde_json::Value>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub num_postings: usize,
    pub vocabulary_size: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub index: Arc<CorpusIndex>,
}

/// Load the catalog at `catalog`, index it, and build the router.
pub fn build_app<P: AsRef<Path>>(catalog: P) -> Result<Router> {
    let catalog = catalog.as_ref();
    let postings = load_catalog(catalog).with_context(|| format!("loading catalog {}", catalog.display()))?;
    let index = CorpusIndex::build(postings).context("indexing catalog")?;
    Ok(build_app_with_index(index))
}

pub fn build_app_with_index(index: CorpusIndex) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/stats", get(stats_handler))
        .route("/profile-setup", post(profile_setup_handler))
        .with_state(app_state)
        .layer(cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref()))
        .layer(TraceLayer::new_for_http())
}

/// Any origin unless `allowed` names at least one parseable origin (comma separated).
pub fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn profile_setup_handler(State(state): State<AppState>, Json(req): Json<ProfileRequest>) -> Json<ProfileMatches> {
    tracing::info!(
        name = ?req.name,
        skills = ?req.skills,
        education = ?req.education,
        state = ?req.state,
        "new profile"
    );
    let matches = match_profile(&state.index, req.skills.unwrap_or_default());
    tracing::info!(
        recommendations = matches.recommendations.len(),
        partial_matches = matches.partial_matches.len(),
        status = ?matches.status(),
        "profile matched"
    );
    Json(matches)
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { num_postings: state.index.num_postings(), vocabulary_size: state.index.vocabulary_size() })
}
