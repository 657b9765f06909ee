mod aggregate;
mod priority;
mod risk;

pub use aggregate::{aggregate, ScoreAggregate};
pub use priority::{priority_level, resolve_primary, PRIORITY_ORDER};
pub use risk::{
    classify, RiskClassification, ScoreBand, ACTION_COMPLEMENTARY_INTERVENTION, ACTION_ESCALATE,
    ACTION_REASSESS, ACTION_ROUTINE_MONITORING,
};

use super::assembler::assemble;
use super::domain::{EsasAssessment, RawAnswers, ScreeningResult};
use super::validation::{parse_assessment, ValidationReport};
use tracing::{debug, warn};

/// Raised when a submitted answer set cannot be scored.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScreeningError {
    #[error("invalid ESAS assessment: {}", .0.joined())]
    InvalidAssessment(ValidationReport),
}

impl ScreeningError {
    pub fn report(&self) -> &ValidationReport {
        match self {
            ScreeningError::InvalidAssessment(report) => report,
        }
    }
}

/// Validated assessment together with the recommendation derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningOutcome {
    pub assessment: EsasAssessment,
    pub result: ScreeningResult,
}

/// Stateless pipeline: validate, aggregate, resolve priority, classify, assemble.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriageEngine;

impl TriageEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline, refusing to score anything that fails validation.
    pub fn screen(&self, answers: &RawAnswers) -> Result<ScreeningOutcome, ScreeningError> {
        let assessment = parse_assessment(answers).map_err(|report| {
            warn!(errors = report.errors.len(), "rejected ESAS assessment");
            ScreeningError::InvalidAssessment(report)
        })?;

        let result = self.evaluate(&assessment);
        Ok(ScreeningOutcome { assessment, result })
    }

    pub fn evaluate(&self, assessment: &EsasAssessment) -> ScreeningResult {
        let aggregate = aggregate(assessment);
        let primary = resolve_primary(&aggregate.tied);
        let highest_score = aggregate.highest_score.value();
        let classification = classify(highest_score);

        debug!(
            highest_score,
            tied = ?aggregate.tied,
            primary = %primary,
            risk = %classification.risk_level,
            "screening evaluated"
        );

        assemble(
            highest_score,
            primary,
            classification.risk_level,
            classification.action_required,
        )
    }
}

/// Top-level entry point returning only the recommendation.
pub fn process_screening(answers: &RawAnswers) -> Result<ScreeningResult, ScreeningError> {
    TriageEngine::new()
        .screen(answers)
        .map(|outcome| outcome.result)
}
