use chrono::{DateTime, Utc};
use std::cmp::Reverse;
use crate::models::{CandidateProfile, FilterCriteria, JobPosting, JobSort, ScoredJob, ScoringWeights};
use crate::core::{filters::matches_at, scoring::calculate_match_score};

/// Result of ranking recommendations
#[derive(Debug)]
pub struct MatchResult {
    pub recommendations: Vec<ScoredJob>,
    pub total_candidates: usize,
}

/// Result of a listing search
#[derive(Debug)]
pub struct SearchResult {
    pub jobs: Vec<JobPosting>,
    pub total_matches: usize,
}

/// Recommendation orchestrator for the candidate dashboard
///
/// # Pipeline Stages
/// 1. Drop postings that are not active
/// 2. Score each posting against the candidate
/// 3. Drop postings below the minimum score
/// 4. Rank by score, keeping catalog order for ties
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    min_score: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, min_score: u8) -> Self {
        Self { weights, min_score }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), 0)
    }

    /// Rank job recommendations for a candidate
    ///
    /// # Arguments
    /// * `candidate` - The candidate's profile
    /// * `jobs` - Postings to consider, in catalog order
    /// * `limit` - Maximum number of recommendations to return
    pub fn recommend(
        &self,
        candidate: &CandidateProfile,
        jobs: Vec<JobPosting>,
        limit: usize,
    ) -> MatchResult {
        let total_candidates = jobs.len();

        let mut recommendations: Vec<ScoredJob> = jobs
            .into_iter()
            .filter(JobPosting::is_active)
            .filter_map(|job| {
                let breakdown = calculate_match_score(candidate, &job, &self.weights);
                if breakdown.total < self.min_score {
                    return None;
                }

                Some(ScoredJob {
                    match_score: breakdown.total,
                    breakdown,
                    job,
                })
            })
            .collect();

        // sort_by_key is stable: equal scores keep catalog order
        recommendations.sort_by_key(|r| Reverse(r.match_score));
        recommendations.truncate(limit);

        tracing::debug!(
            "Ranked {} recommendations from {} postings",
            recommendations.len(),
            total_candidates
        );

        MatchResult {
            recommendations,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Listing search over active postings
pub struct JobSearch;

impl JobSearch {
    /// Filter, order and paginate postings
    ///
    /// `total_matches` counts every posting that passed the filter, before pagination.
    pub fn search(
        jobs: Vec<JobPosting>,
        criteria: &FilterCriteria,
        sort: JobSort,
        now: DateTime<Utc>,
        offset: usize,
        limit: usize,
    ) -> SearchResult {
        let mut matched: Vec<JobPosting> = jobs
            .into_iter()
            .filter(|job| job.is_active() && matches_at(job, criteria, now))
            .collect();

        sort_jobs(&mut matched, sort);

        let total_matches = matched.len();
        let jobs = matched.into_iter().skip(offset).take(limit).collect();

        SearchResult {
            jobs,
            total_matches,
        }
    }
}

/// Stable ordering of listing results
fn sort_jobs(jobs: &mut [JobPosting], sort: JobSort) {
    match sort {
        JobSort::Relevance => {}
        JobSort::Newest => jobs.sort_by_key(|j| Reverse(j.posted_date)),
        JobSort::SalaryDesc => jobs.sort_by_key(|j| Reverse(j.salary.max)),
        JobSort::SalaryAsc => jobs.sort_by_key(|j| j.salary.min),
    }
}
