use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{JobSearch, Matcher};
use crate::models::{
    ErrorResponse, HealthResponse, RecommendJobsRequest, RecommendJobsResponse, SearchJobsRequest,
    SearchJobsResponse,
};
use crate::services::{CatalogError, JobCatalog};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<JobCatalog>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all job-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/jobs/recommendations", web::post().to(recommend_jobs))
        .route("/jobs/search", web::post().to(search_jobs))
        .route("/jobs/{id}", web::get().to(get_job));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let jobs = state.catalog.len().await;
    let status = if jobs > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        jobs,
    })
}

/// Recommendations endpoint
///
/// POST /api/v1/jobs/recommendations
///
/// Request body:
/// ```json
/// {
///   "candidate": {
///     "skills": ["React", "Node"],
///     "experienceEntries": [{"durationYears": 4}],
///     "address": "Hanoi",
///     "desiredTitle": "Backend Developer"
///   },
///   "limit": 10
/// }
/// ```
async fn recommend_jobs(
    state: web::Data<AppState>,
    req: web::Json<RecommendJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendations request: {:?}", errors);
        return validation_error(errors);
    }

    let limit = state.matching.effective_limit(req.limit);
    let jobs = state.catalog.all().await;

    let result = state.matcher.recommend(&req.candidate, jobs, limit);

    tracing::info!(
        "Returning {} recommendations (from {} postings)",
        result.recommendations.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendJobsResponse {
        recommendations: result.recommendations,
        total_considered: result.total_candidates,
    })
}

/// Listing search endpoint
///
/// POST /api/v1/jobs/search
///
/// Request body:
/// ```json
/// {
///   "criteria": {"location": "TP.HCM", "salaryRange": "10-20"},
///   "sort": "newest",
///   "offset": 0,
///   "limit": 20
/// }
/// ```
async fn search_jobs(
    state: web::Data<AppState>,
    req: web::Json<SearchJobsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return validation_error(errors);
    }

    let limit = state.matching.effective_limit(req.limit);
    let jobs = state.catalog.all().await;

    let result = JobSearch::search(
        jobs,
        &req.criteria,
        req.sort,
        chrono::Utc::now(),
        req.offset,
        limit,
    );

    tracing::debug!(
        "Search matched {} postings, returning {} from offset {}",
        result.total_matches,
        result.jobs.len(),
        req.offset
    );

    HttpResponse::Ok().json(SearchJobsResponse {
        jobs: result.jobs,
        total_results: result.total_matches,
        offset: req.offset,
    })
}

/// Single posting lookup
///
/// GET /api/v1/jobs/{id}
async fn get_job(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id).await {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(CatalogError::NotFound(_)) => HttpResponse::NotFound().json(ErrorResponse {
            error: "Job not found".to_string(),
            message: format!("No job posting with id {}", id),
            status_code: 404,
        }),
        Err(e) => {
            tracing::error!("Failed to fetch job {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch job".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
