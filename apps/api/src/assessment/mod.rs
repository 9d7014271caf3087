//! Resume assessment — one completion call per resume/job pair.
//!
//! The model does all of the matching and scoring. This module builds the
//! prompt, makes the call, and guarantees the shape of what comes back.

pub mod prompts;
pub mod response;

use serde_json::Value;
use tracing::{debug, error, warn};

use crate::assessment::prompts::build_assessment_prompt;
use crate::assessment::response::{missing_fields, AssessmentResponse};
use crate::llm_client::{CompletionProvider, LlmError};

/// Assesses `resume_text` against `job_description`.
///
/// Unparseable model output is recovered into `AssessmentResponse::default()`.
/// Transport and API failures are returned to the caller.
pub async fn analyze_resume(
    provider: &dyn CompletionProvider,
    resume_text: &str,
    job_description: &str,
) -> Result<AssessmentResponse, LlmError> {
    let prompt = build_assessment_prompt(resume_text, job_description);

    let value = match provider.complete_json(&prompt).await {
        Ok(value) => value,
        Err(LlmError::Parse(e)) => {
            warn!("Model returned invalid JSON, using empty assessment: {e}");
            return Ok(AssessmentResponse::default());
        }
        Err(e) => {
            error!("Error in analyze_resume: {e}");
            return Err(e);
        }
    };

    let Value::Object(object) = value else {
        warn!("Model returned JSON that is not an object, using empty assessment");
        return Ok(AssessmentResponse::default());
    };

    let missing = missing_fields(&object);
    if !missing.is_empty() {
        debug!("Defaulting fields absent from model output: {}", missing.join(", "));
    }

    Ok(AssessmentResponse::from_model_object(&object))
}
