//! ESAS symptom screening: validation, triage, knowledge-base lookups, and the
//! record/service/HTTP layers built on top of them.

mod assembler;
pub mod domain;
pub mod evaluation;
pub mod import;
pub mod knowledge;
pub mod record;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use assembler::assemble;
pub use domain::{
    EsasAssessment, PatientIdentity, RawAnswers, RiskLevel, Score, ScreeningId, ScreeningResult,
    ScreeningSubmission, ScreeningType, SymptomId,
};
pub use evaluation::{
    process_screening, ScreeningError, ScreeningOutcome, TriageEngine, PRIORITY_ORDER,
};
pub use import::{ImportError, ImportedScreening, InvalidField, ScreeningImporter};
pub use record::{format_record, Recommendation, ScreeningRecord, SymptomScoreEntry};
pub use repository::{RepositoryError, ScreeningRepository, StoredScreening};
pub use router::screening_router;
pub use service::{BatchOutcome, ScreeningService, ScreeningServiceError};
pub use validation::{validate, ValidationIssue, ValidationReport, ValidationSummary};
