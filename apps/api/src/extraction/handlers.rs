use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::documents::{self, DocumentKind};
use crate::errors::AppError;
use crate::extraction::extract;
use crate::models::ParsedProfile;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub raw_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub file_name: String,
    pub characters: usize,
    pub profile: ParsedProfile,
}

/// Rejects blank résumé text before it reaches the extractor.
pub(crate) fn require_text(raw_text: &str) -> Result<(), AppError> {
    if raw_text.trim().is_empty() {
        return Err(AppError::Validation("raw_text must not be empty".to_string()));
    }
    Ok(())
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}

/// POST /api/v1/profile/parse
pub async fn handle_parse(Json(req): Json<ParseRequest>) -> Result<Json<ParsedProfile>, AppError> {
    require_text(&req.raw_text)?;
    let profile = extract(&req.raw_text);
    info!(
        characters = req.raw_text.chars().count(),
        roles = profile.roles.len(),
        skills = profile.skills.len(),
        "parsed profile from text"
    );
    Ok(Json(profile))
}

/// POST /api/v1/profile/upload
/// Multipart field `file` holding a .txt, .pdf or .docx résumé.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no file name".to_string()))?;
        // Fail on the extension before buffering the body.
        DocumentKind::from_file_name(&file_name)?;

        let data = field.bytes().await.map_err(multipart_error)?;
        if data.len() > state.config.max_upload_bytes {
            return Err(AppError::PayloadTooLarge(format!(
                "{file_name} exceeds {} bytes",
                state.config.max_upload_bytes
            )));
        }
        let name = file_name.clone();
        let text = tokio::task::spawn_blocking(move || documents::extract_text(&name, &data))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Document decoding task failed: {e}")))??;

        let profile = extract(&text);
        info!(
            file_name = %file_name,
            bytes = text.len(),
            roles = profile.roles.len(),
            skills = profile.skills.len(),
            "parsed profile from upload"
        );

        return Ok(Json(UploadResponse {
            file_name,
            characters: text.chars().count(),
            profile,
        }));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{FILE_FIELD}' is required"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_rejects_blank() {
        assert!(matches!(require_text(" \n\t"), Err(AppError::Validation(_))));
        assert!(require_text("Jane Doe").is_ok());
    }
}
