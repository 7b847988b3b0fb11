/// A single job listing as loaded from the jobs file.
///
/// Every field is plain text; anything absent upstream is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
}

/// A posting together with its ATS score (0 – 100, two decimals).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPosting {
    pub posting: JobPosting,
    pub score: f64,
}
