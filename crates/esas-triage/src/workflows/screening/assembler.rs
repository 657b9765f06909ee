use super::domain::{RiskLevel, ScreeningResult, SymptomId};
use super::evaluation::priority_level;
use super::knowledge;

/// Compose the final recommendation from the triage decision and the knowledge base.
pub fn assemble(
    highest_score: u8,
    primary_symptom: SymptomId,
    risk_level: RiskLevel,
    action_required: &str,
) -> ScreeningResult {
    let entry = knowledge::entry(primary_symptom);

    ScreeningResult {
        highest_score,
        primary_symptom_id: primary_symptom,
        risk_level,
        action_required: action_required.to_string(),
        diagnosis: entry.diagnosis.to_string(),
        therapy_type: entry.therapy_type.to_string(),
        intervention_steps: entry
            .intervention_steps
            .iter()
            .map(|step| step.to_string())
            .collect(),
        references: entry.references.iter().map(|r| r.to_string()).collect(),
        priority_level: priority_level(primary_symptom),
    }
}
