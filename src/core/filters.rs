use chrono::{DateTime, Utc};
use crate::models::{FilterCriteria, JobPosting, PostedWithin, Salary, SalaryBand};
use crate::core::text::contains_ignore_case;

const MILLION: u64 = 1_000_000;
const SECONDS_PER_DAY: i64 = 86_400;

/// Check if a job posting passes every supplied listing criterion, as of now
#[inline]
pub fn matches(job: &JobPosting, criteria: &FilterCriteria) -> bool {
    matches_at(job, criteria, Utc::now())
}

/// Check if a job posting passes every supplied listing criterion
///
/// Each predicate is skipped when its criterion is absent, empty or "all".
/// `now` anchors the posting age band.
pub fn matches_at(job: &JobPosting, criteria: &FilterCriteria, now: DateTime<Utc>) -> bool {
    if let Some(keyword) = active(&criteria.keyword) {
        if !matches_keyword(job, keyword) {
            return false;
        }
    }

    if !matches_exact(&criteria.location, &job.location)
        || !matches_exact(&criteria.category, &job.category)
        || !matches_exact(&criteria.level, job.level.as_str())
        || !matches_exact(&criteria.work_type, job.work_type.as_str())
    {
        return false;
    }

    if let Some(band) = criteria.salary_range {
        if !matches_salary_band(&job.salary, band) {
            return false;
        }
    }

    if !matches_exact(&criteria.company_size, &job.company_size) {
        return false;
    }

    if !criteria.benefits_all.iter().all(|b| job.benefits.contains(b)) {
        return false;
    }

    if let Some(posted_within) = criteria.posted_within {
        if !matches_posted_within(job, posted_within, now) {
            return false;
        }
    }

    if !criteria.skills_any.is_empty()
        && !criteria.skills_any.iter().any(|s| job.skills.contains(s))
    {
        return false;
    }

    true
}

/// A criterion value that actually constrains something
#[inline]
fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("") | Some("all") => None,
        Some(v) => Some(v),
    }
}

#[inline]
fn matches_exact(criterion: &Option<String>, value: &str) -> bool {
    active(criterion).map_or(true, |wanted| wanted == value)
}

/// Keyword hits the title, the employer name or the description
#[inline]
pub fn matches_keyword(job: &JobPosting, keyword: &str) -> bool {
    contains_ignore_case(&job.title, keyword)
        || contains_ignore_case(&job.employer_name, keyword)
        || contains_ignore_case(&job.description, keyword)
}

/// Salary band check. Negotiable salaries pass every band.
#[inline]
pub fn matches_salary_band(salary: &Salary, band: SalaryBand) -> bool {
    if salary.negotiable {
        return true;
    }

    match band {
        SalaryBand::Under10 => salary.max < 10 * MILLION,
        SalaryBand::From10To20 => salary.min >= 10 * MILLION && salary.max <= 20 * MILLION,
        SalaryBand::From20To30 => salary.min >= 20 * MILLION && salary.max <= 30 * MILLION,
        SalaryBand::Over30 => salary.min >= 30 * MILLION,
        SalaryBand::All => true,
    }
}

/// Posting age check in whole days, measured from midnight UTC of the posted date.
/// Undated postings only pass the unbounded band.
#[inline]
pub fn matches_posted_within(job: &JobPosting, band: PostedWithin, now: DateTime<Utc>) -> bool {
    let Some(max_days) = band.max_days() else {
        return true;
    };
    let Some(posted_date) = job.posted_date else {
        return false;
    };

    let posted = posted_date.and_time(chrono::NaiveTime::MIN).and_utc();
    let diff_days = (now - posted).num_seconds().div_euclid(SECONDS_PER_DAY);

    diff_days <= max_days
}
