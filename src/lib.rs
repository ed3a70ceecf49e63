//! Job Match - recommendation scoring and listing filters for the job portal
//!
//! This library provides the candidate/job match scorer used to rank the
//! dashboard recommendations and the multi-criteria filter used by the job
//! listing page, plus the in-memory catalog and HTTP routes that serve them.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{matches, matches_at, score, calculate_match_score, JobSearch, Matcher};
pub use models::{CandidateProfile, FilterCriteria, JobPosting, MatchBreakdown, ScoredJob, ScoringWeights};
