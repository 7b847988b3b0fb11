use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::JobPosting;

/// Reads and parses the jobs file. Missing or unreadable files are `InputNotFound`.
pub fn load_jobs(path: &Path) -> Result<Vec<JobPosting>, AppError> {
    let raw = std::fs::read_to_string(path).map_err(|e| AppError::input_not_found(path, e))?;
    let jobs = parse_jobs(&raw, path)?;
    debug!("Loaded {} job(s) from {}", jobs.len(), path.display());
    Ok(jobs)
}

/// Parses a JSON array of loosely-typed job records, preserving order.
///
/// `source` is only used to label errors.
pub fn parse_jobs(raw: &str, source: &Path) -> Result<Vec<JobPosting>, AppError> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|e| AppError::malformed(source, format!("invalid JSON: {e}")))?;

    let Value::Array(records) = document else {
        return Err(AppError::malformed(
            source,
            format!("expected a JSON array of jobs, found {}", kind(&document)),
        ));
    };

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            if !record.is_object() {
                return Err(AppError::malformed(
                    source,
                    format!("job #{index} is {}, expected an object", kind(record)),
                ));
            }
            RawJob::deserialize(record)
                .map(JobPosting::from)
                .map_err(|e| AppError::malformed(source, format!("job #{index}: {e}")))
        })
        .collect()
}

/// A job record as it appears on disk: every key optional, any JSON type.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawJob {
    id: Option<Value>,
    title: Option<Value>,
    company: Option<Value>,
    location: Option<Value>,
    description: Option<Value>,
    url: Option<Value>,
}

impl From<RawJob> for JobPosting {
    fn from(raw: RawJob) -> Self {
        let text = |value: Option<Value>| value.as_ref().map(as_text).unwrap_or_default();
        JobPosting {
            id: text(raw.id),
            title: text(raw.title),
            company: text(raw.company),
            location: text(raw.location),
            description: text(raw.description),
            url: text(raw.url),
        }
    }
}

/// Coerces any JSON value to text: strings as-is, null as empty,
/// everything else in its compact JSON rendering (`42` → `"42"`).
///
/// Python's `str()` would give `"None"` for null and `"True"` for true;
/// here they are `""` and `"true"`.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
