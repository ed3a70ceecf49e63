use crate::models::JobPosting;
use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with the job catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Job not found: {0}")]
    NotFound(String),
}

/// In-memory job posting store
///
/// Postings keep their load order, which is the tie-break order for
/// ranking and the default listing order.
pub struct JobCatalog {
    jobs: RwLock<Vec<JobPosting>>,
}

impl JobCatalog {
    pub fn from_jobs(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }

    /// Load postings from a JSON array file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let jobs = read_jobs(path.as_ref()).await?;
        tracing::info!("Loaded {} job postings from {}", jobs.len(), path.as_ref().display());
        Ok(Self::from_jobs(jobs))
    }

    /// Snapshot of every posting, in catalog order
    pub async fn all(&self) -> Vec<JobPosting> {
        self.jobs.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> Result<JobPosting, CatalogError> {
        self.jobs
            .read()
            .await
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jobs.read().await.is_empty()
    }

    /// Swap in a new set of postings
    pub async fn replace(&self, jobs: Vec<JobPosting>) {
        let mut guard = self.jobs.write().await;
        tracing::debug!("Replacing {} postings with {}", guard.len(), jobs.len());
        *guard = jobs;
    }
}

async fn read_jobs(path: &Path) -> Result<Vec<JobPosting>, CatalogError> {
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}
