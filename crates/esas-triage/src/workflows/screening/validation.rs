use serde::Serialize;
use serde_json::Value;

use super::domain::{EsasAssessment, RawAnswers, Score, SymptomId};

/// A single problem found in a submitted answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("item {item} is missing")]
    MissingField { item: SymptomId },
    #[error("item {item} must be a whole number")]
    NonNumeric { item: SymptomId, found: String },
    #[error("item {item} must be between 0 and 10")]
    OutOfRange { item: SymptomId, value: i64 },
}

impl ValidationIssue {
    pub fn item(&self) -> SymptomId {
        match self {
            ValidationIssue::MissingField { item }
            | ValidationIssue::NonNumeric { item, .. }
            | ValidationIssue::OutOfRange { item, .. } => *item,
        }
    }
}

/// Every violation found in one pass over the nine items, in item order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn joined(&self) -> String {
        self.messages().join("; ")
    }

    pub fn summary(&self) -> ValidationSummary {
        ValidationSummary {
            is_valid: self.is_valid(),
            errors: self.messages(),
        }
    }
}

/// Wire form of a validation report for forms and API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

/// Check all nine items without stopping at the first failure.
pub fn validate(answers: &RawAnswers) -> ValidationReport {
    let errors = SymptomId::ALL
        .iter()
        .filter_map(|symptom| read_item(answers, *symptom).err())
        .collect();
    ValidationReport { errors }
}

/// Validate and, when clean, produce the typed assessment.
pub fn parse_assessment(answers: &RawAnswers) -> Result<EsasAssessment, ValidationReport> {
    let mut scores = [Score::ZERO; 9];
    let mut errors = Vec::new();

    for symptom in SymptomId::ALL {
        match read_item(answers, symptom) {
            Ok(score) => scores[symptom.index()] = score,
            Err(issue) => errors.push(issue),
        }
    }

    if errors.is_empty() {
        Ok(EsasAssessment::from_scores(scores))
    } else {
        Err(ValidationReport { errors })
    }
}

/// Build an assessment from scores already in item order.
pub fn assessment_from_values(values: [i64; 9]) -> Result<EsasAssessment, ValidationReport> {
    let answers: RawAnswers = SymptomId::ALL
        .iter()
        .zip(values)
        .map(|(symptom, value)| (symptom.key().to_string(), Value::from(value)))
        .collect();
    parse_assessment(&answers)
}

fn read_item(answers: &RawAnswers, item: SymptomId) -> Result<Score, ValidationIssue> {
    let raw = answers
        .get(item.key())
        .ok_or(ValidationIssue::MissingField { item })?;

    let value = whole_number(raw).ok_or_else(|| ValidationIssue::NonNumeric {
        item,
        found: raw.to_string(),
    })?;

    u8::try_from(value)
        .ok()
        .and_then(Score::new)
        .ok_or(ValidationIssue::OutOfRange { item, value })
}

fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let trimmed = text.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

// Saturating cast: anything too large still lands outside 0-10.
fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0).then_some(value as i64)
}
