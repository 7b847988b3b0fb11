// One scan: load → score → filter → log applications.
// Nothing is carried between passes; every pass re-reads both input files.

pub mod applicator;
pub mod filter;
pub mod loader;

use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::errors::AppError;
use crate::pipeline::applicator::apply_to_jobs;
use crate::pipeline::filter::filter_with;
use crate::pipeline::loader::load_jobs;
use crate::schedule::clock::Clock;
use crate::scoring::ats::{MatchScorer, ResumeProfile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub loaded: usize,
    pub eligible: usize,
    pub applied: usize,
}

pub fn read_resume(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|e| AppError::input_not_found(path, e))
}

/// Runs a single pass. Any error aborts the pass; entries logged before the
/// failure stay in the log.
pub fn run_pass(
    config: &Config,
    scorer: &dyn MatchScorer,
    clock: &dyn Clock,
) -> Result<PassSummary, AppError> {
    debug!(
        scorer = scorer.backend(),
        jobs_file = %config.jobs_file.display(),
        resume = %config.resume_file.display(),
        "Starting pass"
    );

    let resume = ResumeProfile::new(&read_resume(&config.resume_file)?);
    let jobs = load_jobs(&config.jobs_file)?;
    let eligible = filter_with(scorer, &jobs, &resume, config.threshold);

    if eligible.is_empty() {
        info!("No jobs met the ATS threshold of {}", config.threshold);
        return Ok(PassSummary {
            loaded: jobs.len(),
            ..PassSummary::default()
        });
    }

    for scored in &eligible {
        let job = &scored.posting;
        info!(
            "Eligible job: {} at {} ({}) score={}",
            job.title, job.company, job.location, scored.score
        );
    }

    let applied = apply_to_jobs(&eligible, &config.log_path, clock)?;
    let summary = PassSummary {
        loaded: jobs.len(),
        eligible: eligible.len(),
        applied,
    };
    info!(
        "Pass complete: {} loaded, {} eligible, {} applied",
        summary.loaded, summary.eligible, summary.applied
    );
    Ok(summary)
}
