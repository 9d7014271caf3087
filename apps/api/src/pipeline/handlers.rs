//! Axum route handler for resume uploads.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::pipeline::{process_resume, ProcessResult};
use crate::state::AppState;

/// Fields accepted from the upload form.
#[derive(Debug, Default)]
struct ResumeUpload {
    resume: Option<Bytes>,
    job_description: Option<String>,
}

/// POST /api/resume
///
/// Multipart form with a `resume` PDF and a `job_description` (catalog id or
/// free text). Pipeline outcomes, including failures, come back as a
/// `ProcessResult` envelope; only malformed requests are HTTP errors.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ProcessResult>, AppError> {
    let upload = read_upload(multipart).await?;

    let resume = upload
        .resume
        .filter(|bytes| !bytes.is_empty())
        .ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let job_description = upload
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;
    let job_description = state.jobs.resolve(&job_description).to_string();

    // Removed from disk when `file` drops at the end of the request.
    let file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile()
        .context("Failed to create temporary file for upload")?;
    tokio::fs::write(file.path(), &resume)
        .await
        .context("Failed to write uploaded resume")?;

    let request_id = Uuid::new_v4();
    let span = info_span!("analyze_resume", %request_id, bytes = resume.len());
    let result = async {
        let result = process_resume(state.llm.as_ref(), file.path(), &job_description).await;
        info!(success = result.is_success(), "Resume processed");
        result
    }
    .instrument(span)
    .await;

    Ok(Json(result))
}

async fn read_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut upload = ResumeUpload::default();
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("resume") => upload.resume = Some(field.bytes().await?),
            Some("job_description") => upload.job_description = Some(field.text().await?),
            _ => {}
        }
    }
    Ok(upload)
}
