// Keyword-overlap ATS scoring: tokenisation and the score itself.

pub mod ats;
pub mod normalize;
