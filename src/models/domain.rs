use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Candidate profile fields used for job recommendations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(rename = "experienceEntries", default, deserialize_with = "null_as_default")]
    pub experience_entries: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(rename = "desiredTitle", default, deserialize_with = "null_as_default")]
    pub desired_title: String,
}

impl CandidateProfile {
    /// Sum of all experience durations. Overlapping roles are counted twice.
    pub fn total_years(&self) -> u32 {
        self.experience_entries
            .iter()
            .fold(0u32, |acc, e| acc.saturating_add(e.duration_years))
    }
}

/// A single role in a candidate's work history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(rename = "durationYears", default, deserialize_with = "null_as_default")]
    pub duration_years: u32,
}

/// Seniority level of a posting.
///
/// Unknown strings are kept verbatim so listing filters can still compare
/// them exactly, but they earn no experience points when scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobLevel {
    Intern,
    Fresher,
    Junior,
    Middle,
    Senior,
    Lead,
    Manager,
    Other(String),
}

impl JobLevel {
    pub fn as_str(&self) -> &str {
        match self {
            JobLevel::Intern => "Intern",
            JobLevel::Fresher => "Fresher",
            JobLevel::Junior => "Junior",
            JobLevel::Middle => "Middle",
            JobLevel::Senior => "Senior",
            JobLevel::Lead => "Lead",
            JobLevel::Manager => "Manager",
            JobLevel::Other(s) => s,
        }
    }
}

impl From<String> for JobLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Intern" => JobLevel::Intern,
            "Fresher" => JobLevel::Fresher,
            "Junior" => JobLevel::Junior,
            "Middle" => JobLevel::Middle,
            "Senior" => JobLevel::Senior,
            "Lead" => JobLevel::Lead,
            "Manager" => JobLevel::Manager,
            _ => JobLevel::Other(value),
        }
    }
}

impl From<&str> for JobLevel {
    fn from(value: &str) -> Self {
        JobLevel::from(value.to_string())
    }
}

impl From<JobLevel> for String {
    fn from(value: JobLevel) -> Self {
        match value {
            JobLevel::Other(s) => s,
            level => level.as_str().to_string(),
        }
    }
}

impl Default for JobLevel {
    fn default() -> Self {
        JobLevel::Other(String::new())
    }
}

impl fmt::Display for JobLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment arrangement of a posting
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkType {
    FullTime,
    PartTime,
    Remote,
    Hybrid,
    Contract,
    Internship,
    Other(String),
}

impl WorkType {
    pub fn as_str(&self) -> &str {
        match self {
            WorkType::FullTime => "full-time",
            WorkType::PartTime => "part-time",
            WorkType::Remote => "remote",
            WorkType::Hybrid => "hybrid",
            WorkType::Contract => "contract",
            WorkType::Internship => "internship",
            WorkType::Other(s) => s,
        }
    }
}

impl From<String> for WorkType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "full-time" => WorkType::FullTime,
            "part-time" => WorkType::PartTime,
            "remote" => WorkType::Remote,
            "hybrid" => WorkType::Hybrid,
            "contract" => WorkType::Contract,
            "internship" => WorkType::Internship,
            _ => WorkType::Other(value),
        }
    }
}

impl From<&str> for WorkType {
    fn from(value: &str) -> Self {
        WorkType::from(value.to_string())
    }
}

impl From<WorkType> for String {
    fn from(value: WorkType) -> Self {
        match value {
            WorkType::Other(s) => s,
            work_type => work_type.as_str().to_string(),
        }
    }
}

impl Default for WorkType {
    fn default() -> Self {
        WorkType::FullTime
    }
}

/// Salary range in VND
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub negotiable: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Draft,
}

/// Job posting as stored in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "employerName", default, deserialize_with = "null_as_default")]
    pub employer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: JobLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "workType", default, deserialize_with = "null_as_default")]
    pub work_type: WorkType,
    #[serde(rename = "companySize", default, deserialize_with = "null_as_default")]
    pub company_size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub salary: Salary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits: Vec<String>,
    #[serde(rename = "postedDate", default)]
    pub posted_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,
}

impl JobPosting {
    pub fn is_active(&self) -> bool {
        self.status == JobStatus::Active
    }
}

/// Salary band used by the listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryBand {
    #[serde(rename = "under10")]
    Under10,
    #[serde(rename = "10-20")]
    From10To20,
    #[serde(rename = "20-30")]
    From20To30,
    #[serde(rename = "over30")]
    Over30,
    #[default]
    #[serde(rename = "all", other)]
    All,
}

/// Posting age band used by the listing filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostedWithin {
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[default]
    #[serde(rename = "all", other)]
    All,
}

impl PostedWithin {
    /// Maximum posting age in whole days, `None` for no limit
    pub fn max_days(self) -> Option<i64> {
        match self {
            PostedWithin::Day => Some(1),
            PostedWithin::Week => Some(7),
            PostedWithin::Month => Some(30),
            PostedWithin::All => None,
        }
    }
}

/// Listing search criteria.
///
/// Every field is optional; an absent, empty or `"all"` value places no
/// constraint on the corresponding job attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryBand>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub benefits_all: Vec<String>,
    #[serde(default)]
    pub posted_within: Option<PostedWithin>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills_any: Vec<String>,
}

/// Per-factor contributions to a match score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub title: f64,
    pub matched_skills: Vec<String>,
    pub total: u8,
}

/// Job recommendation with its score
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    pub job: JobPosting,
    pub match_score: u8,
    pub breakdown: MatchBreakdown,
}

/// Scoring weights. Each factor's weight is its maximum contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub title: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            experience: 30.0,
            location: 15.0,
            title: 15.0,
        }
    }
}

/// Ordering applied to listing search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobSort {
    #[default]
    Relevance,
    Newest,
    SalaryDesc,
    SalaryAsc,
}
