//! Resume upload ingestion — extracts plain text from uploaded documents.
//!
//! Supported formats: plain text and PDF. Word-processor formats are an
//! upstream collaborator's job; they get a typed unsupported-format error.
//! PDF extraction is CPU-bound and must run inside
//! `tokio::task::spawn_blocking`.

pub mod handlers;

use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;

/// Upload formats this service decodes itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Resolves a kind from the multipart content type, falling back to the
    /// filename extension when the client sends a generic type.
    pub fn detect(content_type: &str, filename: &str) -> Option<Self> {
        match content_type {
            "text/plain" => return Some(Self::PlainText),
            "application/pdf" => return Some(Self::Pdf),
            _ => {}
        }
        let ext = filename.rsplit('.').next().map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt") => Some(Self::PlainText),
            Some("pdf") => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// Extracts text from an uploaded document.
///
/// Returns `UnsupportedMedia` for formats outside `DocumentKind` and
/// `FileRead` when a supported payload cannot be decoded.
pub async fn extract_text(
    content_type: &str,
    filename: &str,
    data: Bytes,
) -> Result<String, AppError> {
    let kind = DocumentKind::detect(content_type, filename).ok_or_else(|| {
        AppError::UnsupportedMedia(format!(
            "unsupported upload type '{content_type}' for '{filename}'; upload .txt or .pdf"
        ))
    })?;

    match kind {
        DocumentKind::PlainText => Ok(String::from_utf8_lossy(&data).into_owned()),
        DocumentKind::Pdf => {
            let name = filename.to_string();
            let text =
                tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
                    .await
                    .map_err(|e| {
                        AppError::Internal(anyhow::anyhow!("pdf extraction task failed: {e}"))
                    })?
                    .map_err(|e| {
                        AppError::FileRead(format!("could not read '{name}' as PDF: {e}"))
                    })?;
            info!(file = %filename, "extracted text from PDF");
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect("text/plain", "anything"),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(
            DocumentKind::detect("application/pdf", "resume"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_detect_falls_back_to_extension() {
        assert_eq!(
            DocumentKind::detect("application/octet-stream", "resume.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("application/octet-stream", "notes.txt"),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_detect_rejects_word_processor_formats() {
        let docx = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
        assert_eq!(DocumentKind::detect(docx, "resume.docx"), None);
        assert_eq!(DocumentKind::detect("application/octet-stream", "resume"), None);
    }

    #[tokio::test]
    async fn extract_plain_text_decodes_bytes() {
        let text = extract_text("text/plain", "resume.txt", Bytes::from_static(b"hello resume"))
            .await
            .unwrap();
        assert_eq!(text, "hello resume");
    }

    #[tokio::test]
    async fn extract_unsupported_type_errors() {
        let result = extract_text(
            "application/msword",
            "resume.doc",
            Bytes::from_static(b"\xd0\xcf\x11\xe0"),
        )
        .await;
        assert!(matches!(result, Err(AppError::UnsupportedMedia(_))));
    }

    #[tokio::test]
    async fn extract_invalid_pdf_is_a_read_failure() {
        let result = extract_text(
            "application/pdf",
            "resume.pdf",
            Bytes::from_static(b"this is not a pdf"),
        )
        .await;
        assert!(matches!(result, Err(AppError::FileRead(_))));
    }
}
