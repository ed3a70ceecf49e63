// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod text;

pub use filters::{matches, matches_at, matches_keyword, matches_posted_within, matches_salary_band};
pub use matcher::{JobSearch, MatchResult, Matcher, SearchResult};
pub use scoring::{calculate_match_score, score};
