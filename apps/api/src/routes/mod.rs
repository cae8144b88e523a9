pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as profile;
use crate::narrative::handlers as story;
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // Profile extraction
        .route("/api/v1/profile/parse", post(profile::handle_parse))
        .route("/api/v1/profile/upload", post(profile::handle_upload))
        // Story synthesis
        .route("/api/v1/story", post(story::handle_story))
        .route("/api/v1/story/from-text", post(story::handle_story_from_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
