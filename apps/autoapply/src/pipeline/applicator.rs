//! Records applications as pipe-delimited lines in an append-only log.
//!
//! The log is opened, written and closed once per entry. A failure part-way
//! through a batch leaves the entries already written in place.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::errors::AppError;
use crate::models::job::{JobPosting, ScoredPosting};
use crate::schedule::clock::Clock;

pub const APPLIED: &str = "APPLIED";

/// One line of the application log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry<'a> {
    pub timestamp: DateTime<Utc>,
    pub status: &'static str,
    pub posting: &'a JobPosting,
    pub score: f64,
}

impl<'a> LogEntry<'a> {
    pub fn applied(posting: &'a JobPosting, score: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            status: APPLIED,
            posting,
            score,
        }
    }
}

impl fmt::Display for LogEntry<'_> {
    /// `<timestamp> | APPLIED | id | title | company | location | score | url`, no newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.posting;
        write!(
            f,
            "{} | {} | {} | {} | {} | {} | {:.2} | {}",
            self.timestamp.format("%Y-%m-%dT%H:%M:%S%.6f"),
            self.status,
            p.id,
            p.title,
            p.company,
            p.location,
            self.score,
            p.url
        )
    }
}

/// Appends a single entry, opening and closing the log around the write.
pub fn append_entry(log_path: &Path, entry: &LogEntry<'_>) -> Result<(), AppError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| AppError::log_write(log_path, e))?;
    writeln!(file, "{entry}").map_err(|e| AppError::log_write(log_path, e))
}

/// Logs every eligible posting as applied. Returns how many lines were written.
pub fn apply_to_jobs(
    eligible: &[ScoredPosting],
    log_path: &Path,
    clock: &dyn Clock,
) -> Result<usize, AppError> {
    for scored in eligible {
        let entry = LogEntry::applied(&scored.posting, scored.score, clock.now());
        append_entry(log_path, &entry)?;
        info!(
            "Applied to {} at {} with ATS score {}",
            scored.posting.title, scored.posting.company, scored.score
        );
    }
    Ok(eligible.len())
}
