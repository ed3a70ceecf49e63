use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateProfile, FilterCriteria, JobSort};

/// Request to rank job recommendations for a candidate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendJobsRequest {
    pub candidate: CandidateProfile,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to filter the job listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchJobsRequest {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort: JobSort,
    #[serde(default)]
    pub offset: usize,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
