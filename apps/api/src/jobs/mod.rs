//! Job catalog — a read-only list of job postings loaded once at startup.
//!
//! Clients pick a posting by id; the upload endpoint swaps the id for the
//! posting's description before assessment. Free text passes through as is.

pub mod handlers;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum JobCatalogError {
    #[error("could not read job catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid job catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate job id '{0}'")]
    DuplicateId(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub job_title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    postings: Vec<JobPosting>,
}

impl JobCatalog {
    /// Reads a JSON array of postings from `path`.
    pub fn load(path: &Path) -> Result<Self, JobCatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| JobCatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&raw)?;
        info!(
            "Loaded {} job posting(s) from {}",
            catalog.postings.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self, JobCatalogError> {
        let postings: Vec<JobPosting> = serde_json::from_str(raw)?;
        Self::from_postings(postings)
    }

    pub fn from_postings(postings: Vec<JobPosting>) -> Result<Self, JobCatalogError> {
        let mut seen = HashSet::new();
        for posting in &postings {
            if !seen.insert(posting.id.as_str()) {
                return Err(JobCatalogError::DuplicateId(posting.id.clone()));
            }
        }
        Ok(Self { postings })
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|p| p.id == id)
    }

    /// Description for a posting id, or `value` itself when no posting matches.
    pub fn resolve<'a>(&'a self, value: &'a str) -> &'a str {
        self.get(value.trim())
            .map(|p| p.description.as_str())
            .unwrap_or(value)
    }
}
