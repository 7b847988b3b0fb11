#![allow(dead_code)]

use tracing::debug;

use crate::models::job::{JobPosting, ScoredPosting};
use crate::scoring::ats::{KeywordOverlapScorer, MatchScorer, ResumeProfile};

/// Keeps the postings whose keyword score is at least `threshold`, in input order.
pub fn filter_by_score(jobs: &[JobPosting], resume_text: &str, threshold: f64) -> Vec<ScoredPosting> {
    filter_with(&KeywordOverlapScorer, jobs, &ResumeProfile::new(resume_text), threshold)
}

/// Same as [`filter_by_score`] with an explicit scorer and a pre-tokenised resume.
pub fn filter_with(
    scorer: &dyn MatchScorer,
    jobs: &[JobPosting],
    resume: &ResumeProfile,
    threshold: f64,
) -> Vec<ScoredPosting> {
    jobs.iter()
        .filter_map(|job| {
            let (score, overlap) = scorer.score_detailed(resume, &job.description);
            if let Some(overlap) = overlap {
                debug!(
                    job_id = %job.id,
                    score,
                    matched = ?overlap.matched,
                    missing = ?overlap.missing,
                    "Scored {} at {}",
                    job.title,
                    job.company
                );
            }
            (score >= threshold).then(|| ScoredPosting {
                posting: job.clone(),
                score,
            })
        })
        .collect()
}
