// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CandidateProfile, ExperienceEntry, FilterCriteria, JobLevel, JobPosting, JobSort, JobStatus,
    MatchBreakdown, PostedWithin, Salary, SalaryBand, ScoredJob, ScoringWeights, WorkType,
};
pub use requests::{RecommendJobsRequest, SearchJobsRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendJobsResponse, SearchJobsResponse};
