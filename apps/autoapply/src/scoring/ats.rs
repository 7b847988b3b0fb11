#![allow(dead_code)]

//! ATS scoring: how much of a job description's vocabulary a resume covers.
//!
//! The score is asymmetric. It is the share of the *job's* distinct tokens that
//! also appear in the resume, so a long resume is not penalised and a short
//! job description is easy to satisfy.

use std::collections::BTreeSet;

use crate::scoring::normalize::vocabulary;

/// The resume side of a comparison, tokenised once and reused for every posting.
#[derive(Debug, Clone, Default)]
pub struct ResumeProfile {
    vocabulary: BTreeSet<String>,
}

impl ResumeProfile {
    pub fn new(resume_text: &str) -> Self {
        Self {
            vocabulary: vocabulary(resume_text),
        }
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }
}

/// Job tokens split by whether the resume covers them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordOverlap {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

impl KeywordOverlap {
    /// matched / (matched + missing) × 100, rounded to two decimals.
    /// A job with no tokens scores exactly 0.
    pub fn score(&self) -> f64 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            return 0.0;
        }
        round2(self.matched.len() as f64 / total as f64 * 100.0)
    }
}

/// Pluggable scorer seam. The pipeline only sees `&dyn MatchScorer`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, resume: &ResumeProfile, job_description: &str) -> f64;

    /// Score plus the keyword breakdown behind it, when the backend has one.
    fn score_detailed(
        &self,
        resume: &ResumeProfile,
        job_description: &str,
    ) -> (f64, Option<KeywordOverlap>) {
        (self.score(resume, job_description), None)
    }

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Default scorer: plain token-set overlap, see [`keyword_overlap`].
pub struct KeywordOverlapScorer;

impl MatchScorer for KeywordOverlapScorer {
    fn score(&self, resume: &ResumeProfile, job_description: &str) -> f64 {
        keyword_overlap(resume, job_description).score()
    }

    fn score_detailed(
        &self,
        resume: &ResumeProfile,
        job_description: &str,
    ) -> (f64, Option<KeywordOverlap>) {
        let overlap = keyword_overlap(resume, job_description);
        (overlap.score(), Some(overlap))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

pub fn keyword_overlap(resume: &ResumeProfile, job_description: &str) -> KeywordOverlap {
    let (matched, missing) = vocabulary(job_description)
        .into_iter()
        .partition(|word| resume.vocabulary.contains(word));
    KeywordOverlap { matched, missing }
}

/// Scores raw resume text against a raw job description.
pub fn ats_score(resume_text: &str, job_description: &str) -> f64 {
    KeywordOverlapScorer.score(&ResumeProfile::new(resume_text), job_description)
}

/// Two decimals, exact `.xx5` ties to even (3.125 → 3.12, 9.375 → 9.38).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
