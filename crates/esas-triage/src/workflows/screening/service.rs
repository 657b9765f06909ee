use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{RawAnswers, ScreeningId, ScreeningResult, ScreeningSubmission};
use super::evaluation::{ScreeningError, TriageEngine};
use super::import::{ImportedScreening, InvalidField};
use super::record::format_record;
use super::repository::{RepositoryError, ScreeningRepository, StoredScreening};

/// Service composing the triage engine with a screening repository.
pub struct ScreeningService<R> {
    engine: TriageEngine,
    repository: Arc<R>,
}

static SCREENING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_screening_id() -> ScreeningId {
    let id = SCREENING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ScreeningId(format!("scr-{id:06}"))
}

/// Per-row result of a batch import.
#[derive(Debug)]
pub struct BatchOutcome {
    pub row: usize,
    pub patient_name: String,
    pub outcome: Result<StoredScreening, ScreeningServiceError>,
}

impl<R> ScreeningService<R>
where
    R: ScreeningRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            engine: TriageEngine::new(),
            repository,
        }
    }

    /// Evaluate answers without keeping anything.
    pub fn screen(&self, answers: &RawAnswers) -> Result<ScreeningResult, ScreeningServiceError> {
        let outcome = self.engine.screen(answers)?;
        Ok(outcome.result)
    }

    /// Evaluate a submission, format its record, and persist it.
    pub fn record(
        &self,
        submission: ScreeningSubmission,
    ) -> Result<StoredScreening, ScreeningServiceError> {
        let ScreeningSubmission {
            answers,
            patient,
            screening_type,
        } = submission;

        let outcome = self.engine.screen(&answers)?;
        let record = format_record(
            &outcome.result,
            &outcome.assessment,
            patient,
            screening_type,
            Utc::now(),
        );

        let screening = StoredScreening {
            id: next_screening_id(),
            result: outcome.result,
            record,
        };

        let stored = self.repository.insert(screening)?;
        info!(
            screening_id = %stored.id,
            risk = %stored.result.risk_level,
            primary_symptom = %stored.result.primary_symptom_id,
            "screening recorded"
        );
        Ok(stored)
    }

    /// Record every imported row, keeping failures alongside successes.
    pub fn record_batch(&self, imports: Vec<ImportedScreening>) -> Vec<BatchOutcome> {
        imports
            .into_iter()
            .map(|import| {
                let outcome = match import.submission {
                    Ok(submission) => self.record(submission),
                    Err(invalid) => {
                        warn!(row = import.row, error = %invalid, "batch row rejected");
                        Err(invalid.into())
                    }
                };
                BatchOutcome {
                    row: import.row,
                    patient_name: import.patient_name,
                    outcome,
                }
            })
            .collect()
    }

    pub fn get(&self, id: &ScreeningId) -> Result<StoredScreening, ScreeningServiceError> {
        let screening = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(screening)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<StoredScreening>, ScreeningServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Screening(#[from] ScreeningError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    InvalidRow(#[from] InvalidField),
}
