use crate::models::{CandidateProfile, JobLevel, JobPosting, MatchBreakdown, ScoringWeights};
use crate::core::text::{contains_ignore_case, mutual_contains_ignore_case, shares_word};

/// Calculate a match score (0-100) between a candidate and a job posting
///
/// Scoring formula:
/// score = round(min(
///     skills_fit +        # share of job skills covered by the candidate (40)
///     experience_fit +    # total years against the job level band (30)
///     location_fit +      # address and job location contain each other (15)
///     title_fit,          # desired title shares a word with the job title (15)
///     100))
///
/// Missing candidate or job fields contribute nothing; this never fails.
pub fn calculate_match_score(
    candidate: &CandidateProfile,
    job: &JobPosting,
    weights: &ScoringWeights,
) -> MatchBreakdown {
    let (skills, matched_skills) = calculate_skills_score(&candidate.skills, &job.skills, weights.skills);

    let experience = if candidate.experience_entries.is_empty() {
        0.0
    } else {
        calculate_experience_score(&job.level, candidate.total_years(), weights.experience)
    };

    let location = if mutual_contains_ignore_case(&candidate.address, &job.location) {
        weights.location
    } else {
        0.0
    };

    let title = if shares_word(&candidate.desired_title, &job.title) {
        weights.title
    } else {
        0.0
    };

    let sum = skills + experience + location + title;
    let total = sum.min(100.0).max(0.0).round() as u8;

    MatchBreakdown {
        skills,
        experience,
        location,
        title,
        matched_skills,
        total,
    }
}

/// Score-only shorthand for [`calculate_match_score`]
#[inline]
pub fn score(candidate: &CandidateProfile, job: &JobPosting, weights: &ScoringWeights) -> u8 {
    calculate_match_score(candidate, job, weights).total
}

/// Skills score: fraction of job skills contained in some candidate skill.
///
/// Matching is substring containment, so "react" is covered by "ReactJS"
/// (and also by "Reactive").
fn calculate_skills_score(
    candidate_skills: &[String],
    job_skills: &[String],
    weight: f64,
) -> (f64, Vec<String>) {
    if candidate_skills.is_empty() || job_skills.is_empty() {
        return (0.0, Vec::new());
    }

    let matched: Vec<String> = job_skills
        .iter()
        .filter(|skill| candidate_skills.iter().any(|own| contains_ignore_case(own, skill)))
        .cloned()
        .collect();

    let fraction = matched.len() as f64 / job_skills.len() as f64;
    (fraction * weight, matched)
}

/// Experience score for a job level.
///
/// Inside the level's band earns the full weight. Outside it earns half for
/// Fresher through Senior and a third for Lead and Manager. Unknown levels
/// earn nothing.
#[inline]
fn calculate_experience_score(level: &JobLevel, total_years: u32, weight: f64) -> f64 {
    let half = weight * 0.5;
    let third = weight / 3.0;

    let (in_band, fallback) = match level {
        JobLevel::Intern => (true, half),
        JobLevel::Fresher => (total_years < 2, half),
        JobLevel::Junior => ((1..3).contains(&total_years), half),
        JobLevel::Middle => ((3..5).contains(&total_years), half),
        JobLevel::Senior => (total_years >= 5, half),
        JobLevel::Lead => (total_years >= 7, third),
        JobLevel::Manager => (total_years >= 8, third),
        JobLevel::Other(_) => return 0.0,
    };

    if in_band {
        weight
    } else {
        fallback
    }
}
