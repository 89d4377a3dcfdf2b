//! Axum route handlers for document ingestion.

use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::ingest::extract_text;
use crate::textprep::count_tokens;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub filename: String,
    pub text: String,
    /// Naive token count of the extracted text, for client-side budget
    /// checks before requesting an enhance.
    pub token_count: usize,
}

/// POST /api/v1/documents/extract
///
/// Accepts a multipart form with a single `file` field and returns its
/// extracted text.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::FileRead(format!("failed to read upload: {e}")))?;

        let text = extract_text(&content_type, &filename, data).await?;
        let token_count = count_tokens(&text);

        return Ok(Json(ExtractResponse {
            filename,
            text,
            token_count,
        }));
    }

    Err(AppError::Validation("no file selected".to_string()))
}
