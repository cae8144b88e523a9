use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{extract, handlers::require_text};
use crate::models::{ParsedProfile, StoryBundle};
use crate::narrative::Synthesizer;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryRequest {
    pub profile: ParsedProfile,
    /// Overrides `STORY_SEED` for this request.
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct StoryFromTextRequest {
    pub raw_text: String,
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoryFromTextResponse {
    pub profile: ParsedProfile,
    pub story: StoryBundle,
}

fn synthesizer(state: &AppState, seed: Option<u64>) -> Synthesizer {
    Synthesizer::for_seed(seed.or(state.config.story_seed))
}

/// POST /api/v1/story
pub async fn handle_story(
    State(state): State<AppState>,
    Json(req): Json<StoryRequest>,
) -> Result<Json<StoryBundle>, AppError> {
    let bundle = synthesizer(&state, req.seed).synthesize(&req.profile);
    info!(
        name = %req.profile.name,
        soft_skills = bundle.soft_skills.len(),
        "generated story"
    );
    Ok(Json(bundle))
}

/// POST /api/v1/story/from-text
/// Upload → Parse → Story in one call.
pub async fn handle_story_from_text(
    State(state): State<AppState>,
    Json(req): Json<StoryFromTextRequest>,
) -> Result<Json<StoryFromTextResponse>, AppError> {
    require_text(&req.raw_text)?;
    let profile = extract(&req.raw_text);
    let story = synthesizer(&state, req.seed).synthesize(&profile);
    info!(
        name = %profile.name,
        target_role = %profile.target_role,
        "generated story from text"
    );
    Ok(Json(StoryFromTextResponse { profile, story }))
}
