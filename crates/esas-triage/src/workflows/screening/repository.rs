use serde::{Deserialize, Serialize};

use super::domain::{ScreeningId, ScreeningResult};
use super::record::ScreeningRecord;

/// Repository entry pairing the recommendation with its storage-ready record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredScreening {
    pub id: ScreeningId,
    pub result: ScreeningResult,
    pub record: ScreeningRecord,
}

/// Storage abstraction so the service can be exercised without a database.
pub trait ScreeningRepository: Send + Sync {
    fn insert(&self, screening: StoredScreening) -> Result<StoredScreening, RepositoryError>;
    fn fetch(&self, id: &ScreeningId) -> Result<Option<StoredScreening>, RepositoryError>;
    /// Most recently screened first.
    fn recent(&self, limit: usize) -> Result<Vec<StoredScreening>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("screening already exists")]
    Conflict,
    #[error("screening not found")]
    NotFound,
    #[error("screening store is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
