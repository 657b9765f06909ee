use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::workflows::screening::domain::{
    PatientIdentity, RawAnswers, ScreeningId, ScreeningSubmission, ScreeningType,
};
use crate::workflows::screening::repository::{
    RepositoryError, ScreeningRepository, StoredScreening,
};
use crate::workflows::screening::{screening_router, ScreeningService};

/// Answers with every item at zero except the given overrides.
pub(super) fn answers_with(overrides: &[(u8, i64)]) -> RawAnswers {
    let mut answers: RawAnswers = (1..=9u8).map(|id| (id.to_string(), json!(0))).collect();
    for (id, value) in overrides {
        answers.insert(id.to_string(), json!(value));
    }
    answers
}

pub(super) fn patient() -> PatientIdentity {
    PatientIdentity {
        name: "Wayan Sari".to_string(),
        age: Some(71),
        gender: Some("female".to_string()),
        facility: Some("Palliative Unit 2".to_string()),
    }
}

pub(super) fn submission(overrides: &[(u8, i64)]) -> ScreeningSubmission {
    ScreeningSubmission {
        answers: answers_with(overrides),
        patient: patient(),
        screening_type: ScreeningType::Initial,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<BTreeMap<ScreeningId, StoredScreening>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ScreeningRepository for MemoryRepository {
    fn insert(&self, screening: StoredScreening) -> Result<StoredScreening, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&screening.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(screening.id.clone(), screening.clone());
        Ok(screening)
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<StoredScreening>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredScreening>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().rev().take(limit).cloned().collect())
    }
}

pub(super) struct ConflictRepository;

impl ScreeningRepository for ConflictRepository {
    fn insert(&self, _screening: StoredScreening) -> Result<StoredScreening, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ScreeningId) -> Result<Option<StoredScreening>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<StoredScreening>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ScreeningRepository for UnavailableRepository {
    fn insert(&self, _screening: StoredScreening) -> Result<StoredScreening, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ScreeningId) -> Result<Option<StoredScreening>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<StoredScreening>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ScreeningService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ScreeningService::new(Arc::new(repository.clone()));
    (service, repository)
}

pub(super) fn router_with_service(service: ScreeningService<MemoryRepository>) -> axum::Router {
    screening_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
