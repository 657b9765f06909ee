use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    EsasAssessment, PatientIdentity, RiskLevel, ScreeningResult, ScreeningType, SymptomId,
};
use super::evaluation::ScoreBand;
use super::knowledge;

/// Storage-ready shape of a completed screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRecord {
    pub patient: PatientIdentity,
    pub screening_type: ScreeningType,
    pub screened_at: DateTime<Utc>,
    pub symptoms: Vec<SymptomScoreEntry>,
    pub recommendation: Recommendation,
}

/// One ESAS item as it should be displayed and exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomScoreEntry {
    pub symptom_id: SymptomId,
    pub label: String,
    pub score: u8,
    pub severity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub diagnosis: String,
    pub intervention_steps: Vec<String>,
    pub references: Vec<String>,
    pub action_required: String,
    pub priority_level: u8,
    pub therapy_type: String,
    pub frequency: String,
    pub risk_level: RiskLevel,
}

/// Reshape a screening into the record handed to storage and exports.
///
/// Severity labels come from [`ScoreBand`], the same bands the triage decision uses.
pub fn format_record(
    result: &ScreeningResult,
    assessment: &EsasAssessment,
    patient: PatientIdentity,
    screening_type: ScreeningType,
    screened_at: DateTime<Utc>,
) -> ScreeningRecord {
    let symptoms = assessment
        .iter()
        .map(|(symptom, score)| SymptomScoreEntry {
            symptom_id: symptom,
            label: symptom.label().to_string(),
            score: score.value(),
            severity: ScoreBand::for_score(score.value())
                .severity_label()
                .to_string(),
        })
        .collect();

    let recommendation = Recommendation {
        diagnosis: result.diagnosis.clone(),
        intervention_steps: result.intervention_steps.clone(),
        references: result.references.clone(),
        action_required: result.action_required.clone(),
        priority_level: result.priority_level,
        therapy_type: result.therapy_type.clone(),
        frequency: knowledge::frequency(&result.therapy_type, result.risk_level).to_string(),
        risk_level: result.risk_level,
    };

    ScreeningRecord {
        patient,
        screening_type,
        screened_at,
        symptoms,
        recommendation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::screening::evaluation::TriageEngine;
    use crate::workflows::screening::validation::assessment_from_values;
    use chrono::TimeZone;

    fn patient() -> PatientIdentity {
        PatientIdentity {
            name: "Siti Rahma".to_string(),
            age: Some(58),
            gender: Some("female".to_string()),
            facility: Some("Ward 3B".to_string()),
        }
    }

    #[test]
    fn severity_labels_follow_triage_bands() {
        let assessment = assessment_from_values([0, 3, 4, 6, 7, 10, 1, 0, 2]).expect("valid");
        let result = TriageEngine::new().evaluate(&assessment);
        let screened_at = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();

        let record = format_record(
            &result,
            &assessment,
            patient(),
            ScreeningType::Initial,
            screened_at,
        );

        let severities: Vec<&str> = record
            .symptoms
            .iter()
            .map(|entry| entry.severity.as_str())
            .collect();
        assert_eq!(
            severities,
            vec!["none", "mild", "moderate", "moderate", "severe", "severe", "mild", "none", "mild"]
        );
        assert_eq!(record.symptoms[5].label, "Shortness of breath");
        assert_eq!(record.screened_at, screened_at);
    }

    #[test]
    fn recommendation_carries_frequency_for_risk_level() {
        let assessment = assessment_from_values([0, 0, 0, 0, 0, 5, 0, 0, 0]).expect("valid");
        let result = TriageEngine::new().evaluate(&assessment);

        let record = format_record(
            &result,
            &assessment,
            patient(),
            ScreeningType::FollowUp,
            Utc::now(),
        );

        assert_eq!(record.recommendation.risk_level, RiskLevel::Medium);
        assert_eq!(
            record.recommendation.frequency,
            "Every 4 hours while awake, 10 minutes per session"
        );
        assert_eq!(record.recommendation.priority_level, 1);
        assert_eq!(record.screening_type, ScreeningType::FollowUp);
    }

    #[test]
    fn unlisted_therapy_uses_default_frequency() {
        let assessment = assessment_from_values([0, 0, 0, 0, 0, 0, 0, 0, 8]).expect("valid");
        let result = TriageEngine::new().evaluate(&assessment);

        let record = format_record(
            &result,
            &assessment,
            patient(),
            ScreeningType::Initial,
            Utc::now(),
        );

        assert_eq!(record.recommendation.therapy_type, "Music Therapy");
        assert_eq!(
            record.recommendation.frequency,
            knowledge::DEFAULT_FREQUENCY.high
        );
    }
}
