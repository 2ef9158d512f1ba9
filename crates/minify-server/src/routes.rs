use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use minify_core::{MinifyConfig, Profile};
use minify_engine::{Minifier, MinifyResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn minify_routes() -> Router<AppState> {
    Router::new().route("/api/v1/minify", post(minify_text))
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MinifyRequest {
    #[serde(default)]
    pub text: String,
    /// Overrides the server profile for this request.
    pub profile: Option<String>,
    /// Replaces the profile's skip-region names.
    pub skip_regions: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MinifyResponse {
    pub output: String,
    pub profile: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub reduction_pct: f64,
    pub lines_in: usize,
    pub lines_dropped: usize,
    pub directive_lines: usize,
    pub comment_spans: usize,
    pub unterminated_comment: bool,
    pub unterminated_region: bool,
}

impl MinifyResponse {
    fn new(profile: Profile, r: MinifyResult) -> Self {
        Self {
            profile: profile.to_string(),
            original_len: r.original_len,
            minified_len: r.minified_len,
            reduction_pct: r.reduction_pct,
            lines_in: r.lines_in,
            lines_dropped: r.lines_dropped,
            directive_lines: r.directive_lines,
            comment_spans: r.comment_spans,
            unterminated_comment: r.unterminated_comment,
            unterminated_region: r.unterminated_region,
            output: r.output,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "minify-server",
        "version": env!("CARGO_PKG_VERSION"),
        "profile": state.profile.as_str(),
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "requests": state.requests(),
    }))
}

async fn minify_text(
    State(state): State<AppState>,
    Json(req): Json<MinifyRequest>,
) -> Result<Response, ApiError> {
    state.record_request();

    // no text is a no-op, not an error
    if req.text.is_empty() {
        tracing::warn!("minify request without text");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let (profile, result) = if req.profile.is_none() && req.skip_regions.is_none() {
        (state.profile, state.minifier.minify_detailed(&req.text))
    } else {
        let profile = match req.profile.as_deref() {
            Some(name) => name.parse::<Profile>()?,
            None => state.profile,
        };
        let mut config = MinifyConfig::for_profile(profile);
        if let Some(names) = req.skip_regions {
            config = config.with_skip_regions(names);
        }
        (profile, Minifier::new(config)?.minify_detailed(&req.text))
    };

    tracing::debug!(
        profile = profile.as_str(),
        original_len = result.original_len,
        minified_len = result.minified_len,
        "minified request"
    );

    Ok(Json(MinifyResponse::new(profile, result)).into_response())
}
