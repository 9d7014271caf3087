// Resume pipeline: PDF extraction → model assessment → envelope.
// Every failure below the HTTP layer ends up as a `ProcessResult::Failure`.

pub mod handlers;

use std::path::Path;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use tracing::{error, info};

use crate::assessment::analyze_resume;
use crate::assessment::response::AssessmentResponse;
use crate::extraction::extract_text_from_pdf;
use crate::llm_client::CompletionProvider;

/// Message returned when a PDF has no text layer.
pub const EMPTY_TEXT_MESSAGE: &str = "Could not extract text from PDF";

/// Uniform success/failure envelope.
///
/// Serializes as `{"status": true, "data": ...}` or
/// `{"status": false, "message": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessResult {
    Success(AssessmentResponse),
    Failure(String),
}

impl ProcessResult {
    pub fn failure(message: impl Into<String>) -> Self {
        ProcessResult::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessResult::Success(_))
    }
}

impl Serialize for ProcessResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut envelope = serializer.serialize_struct("ProcessResult", 2)?;
        match self {
            ProcessResult::Success(data) => {
                envelope.serialize_field("status", &true)?;
                envelope.serialize_field("data", data)?;
            }
            ProcessResult::Failure(message) => {
                envelope.serialize_field("status", &false)?;
                envelope.serialize_field("message", message)?;
            }
        }
        envelope.end()
    }
}

/// Runs the full pipeline for one resume.
///
/// A document with no extractable text short-circuits before the provider is
/// called. No step is retried.
pub async fn process_resume(
    provider: &dyn CompletionProvider,
    pdf_path: &Path,
    job_description: &str,
) -> ProcessResult {
    let path = pdf_path.to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_text_from_pdf(&path)).await;

    let resume_text = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            error!("Error processing resume: {e}");
            return ProcessResult::failure(e.to_string());
        }
        // The PDF parser panicked or the task was cancelled.
        Err(e) => {
            error!("PDF extraction task failed: {e}");
            return ProcessResult::failure(format!("PDF extraction failed: {e}"));
        }
    };

    if resume_text.trim().is_empty() {
        info!("No extractable text in {}", pdf_path.display());
        return ProcessResult::failure(EMPTY_TEXT_MESSAGE);
    }

    info!(chars = resume_text.len(), "Extracted resume text");

    match analyze_resume(provider, &resume_text, job_description).await {
        Ok(data) => ProcessResult::Success(data),
        Err(e) => {
            error!("Error processing resume: {e}");
            ProcessResult::failure(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::extraction::test_pdf::write_pdf;
    use crate::llm_client::stub::StubProvider;

    const JD: &str = "Rust backend engineer";

    #[test]
    fn test_failure_envelope_shape() {
        let value = serde_json::to_value(ProcessResult::failure(EMPTY_TEXT_MESSAGE)).unwrap();
        assert_eq!(
            value,
            json!({"status": false, "message": "Could not extract text from PDF"})
        );
    }

    #[test]
    fn test_success_envelope_shape() {
        let value =
            serde_json::to_value(ProcessResult::Success(AssessmentResponse::default())).unwrap();
        assert_eq!(value["status"], json!(true));
        assert_eq!(value["data"]["rank"], json!(0.0));
        assert!(value.get("message").is_none());
    }

    #[tokio::test]
    async fn test_blank_pdf_short_circuits_without_provider_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        write_pdf(&path, &[None]);
        let provider = StubProvider::replying(r#"{"rank": 99}"#);

        let result = process_resume(&provider, &path, JD).await;

        assert_eq!(result, ProcessResult::failure(EMPTY_TEXT_MESSAGE));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_text_pdf_is_assessed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_pdf(&path, &[Some("Skills: Rust, SQL")]);
        let provider = StubProvider::replying(r#"{"rank": 64, "skills": ["Rust", "SQL"]}"#);

        let result = process_resume(&provider, &path, JD).await;

        assert_eq!(provider.calls(), 1);
        let ProcessResult::Success(data) = result else {
            panic!("expected success, got {result:?}");
        };
        assert_eq!(data.rank, 64.0);
        assert_eq!(data.skills, vec!["Rust", "SQL"]);
        assert!(provider.last_prompt().unwrap().contains("Skills: Rust, SQL"));
    }

    #[tokio::test]
    async fn test_missing_file_becomes_failure_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let provider = StubProvider::replying("{}");

        let result = process_resume(&provider, &dir.path().join("gone.pdf"), JD).await;

        let ProcessResult::Failure(message) = result else {
            panic!("expected failure");
        };
        assert!(message.contains("gone.pdf"));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_provider_error_becomes_failure_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_pdf(&path, &[Some("Skills: Go")]);
        let provider = StubProvider::failing(503, "Service Unavailable");

        let result = process_resume(&provider, &path, JD).await;

        let ProcessResult::Failure(message) = result else {
            panic!("expected failure");
        };
        assert!(message.contains("503"));
        assert!(message.contains("Service Unavailable"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_still_succeeds_with_zero_assessment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        write_pdf(&path, &[Some("Skills: Python")]);
        let provider = StubProvider::replying("not json");

        let result = process_resume(&provider, &path, JD).await;

        assert_eq!(result, ProcessResult::Success(AssessmentResponse::default()));
    }
}
