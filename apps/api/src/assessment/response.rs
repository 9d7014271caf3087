//! Assessment record returned to callers, and the lenient conversion from raw
//! model output into it.
//!
//! Every field is always present. Anything the model leaves out becomes an
//! empty list, an empty map, or zero.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level fields the model is asked to return.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "rank",
    "skills",
    "total_experience",
    "project_category",
    "missing_skills",
    "score_breakdown",
    "project_description",
];

/// Sub-fields of `score_breakdown`.
pub const SCORE_FIELDS: [&str; 4] = ["skills", "experience", "projects", "keywords"];

/// Per-dimension scores, each 0 – 100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub projects: f64,
    pub keywords: f64,
}

/// Structured relevance of one resume against one job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Overall match, 0 – 100.
    pub rank: f64,
    pub skills: Vec<String>,
    /// Years of work experience.
    pub total_experience: f64,
    pub project_category: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score_breakdown: ScoreBreakdown,
    /// Project name → short description.
    pub project_description: BTreeMap<String, String>,
}

impl AssessmentResponse {
    /// Builds a response from the model's JSON object, defaulting absent
    /// fields and coercing near-miss shapes (numeric strings, scalar list
    /// items). Scores are clamped to 0 – 100.
    pub fn from_model_object(object: &Map<String, Value>) -> Self {
        let breakdown = object.get("score_breakdown").and_then(Value::as_object);
        let score = |field: &str| {
            breakdown
                .and_then(|b| b.get(field))
                .map(coerce_score)
                .unwrap_or_default()
        };

        Self {
            rank: object.get("rank").map(coerce_score).unwrap_or_default(),
            skills: coerce_list(object.get("skills")),
            total_experience: object
                .get("total_experience")
                .map(coerce_number)
                .unwrap_or_default()
                .max(0.0),
            project_category: coerce_list(object.get("project_category")),
            missing_skills: coerce_list(object.get("missing_skills")),
            score_breakdown: ScoreBreakdown {
                skills: score("skills"),
                experience: score("experience"),
                projects: score("projects"),
                keywords: score("keywords"),
            },
            project_description: coerce_map(object.get("project_description")),
        }
    }
}

/// Lists required fields (dotted for score sub-fields) absent from `object`.
pub fn missing_fields(object: &Map<String, Value>) -> Vec<String> {
    let mut missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|f| !object.contains_key(**f))
        .map(|f| f.to_string())
        .collect();

    let breakdown = object.get("score_breakdown").and_then(Value::as_object);
    for field in SCORE_FIELDS {
        if !breakdown.is_some_and(|b| b.contains_key(field)) {
            missing.push(format!("score_breakdown.{field}"));
        }
    }
    missing
}

fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        // "85", "85%", " 4.5 "
        Value::String(s) => s
            .trim()
            .trim_end_matches('%')
            .trim()
            .parse::<f64>()
            .unwrap_or_default(),
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn coerce_score(value: &Value) -> f64 {
    coerce_number(value).clamp(0.0, 100.0)
}

fn coerce_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        // A bare comma-separated string instead of an array.
        Some(Value::String(s)) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}

fn coerce_map(value: Option<&Value>) -> BTreeMap<String, String> {
    match value {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(name, desc)| {
                let desc = match desc {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (name.clone(), desc)
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
