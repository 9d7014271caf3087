use axum::{extract::State, Json};
use serde::Serialize;

use crate::jobs::JobPosting;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub status: bool,
    pub data: Vec<JobPosting>,
}

/// GET /api/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    Json(JobListResponse {
        status: true,
        data: state.jobs.postings().to_vec(),
    })
}
