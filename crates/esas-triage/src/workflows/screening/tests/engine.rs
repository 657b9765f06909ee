use super::common::*;
use crate::workflows::screening::domain::{RiskLevel, SymptomId};
use crate::workflows::screening::evaluation::{
    aggregate, ACTION_COMPLEMENTARY_INTERVENTION, ACTION_ROUTINE_MONITORING,
};
use crate::workflows::screening::validation::parse_assessment;
use crate::workflows::screening::{process_screening, ScreeningError, TriageEngine};

#[test]
fn tied_breathlessness_and_pain_resolve_to_breathlessness() {
    let engine = TriageEngine::new();
    let answers = answers_with(&[(1, 2), (6, 2)]);

    let outcome = engine.screen(&answers).expect("valid answers");
    let tied = aggregate(&outcome.assessment).tied;

    assert_eq!(tied, vec![SymptomId::Pain, SymptomId::ShortnessOfBreath]);
    let result = outcome.result;
    assert_eq!(result.highest_score, 2);
    assert_eq!(result.primary_symptom_id, SymptomId::ShortnessOfBreath);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.action_required, ACTION_COMPLEMENTARY_INTERVENTION);
    assert_eq!(result.priority_level, 1);
    assert_eq!(result.diagnosis, "Ineffective breathing pattern");
}

#[test]
fn all_zero_answers_call_for_routine_monitoring() {
    let answers = answers_with(&[]);

    let outcome = TriageEngine::new().screen(&answers).expect("valid answers");

    assert_eq!(aggregate(&outcome.assessment).tied, SymptomId::ALL.to_vec());
    let result = outcome.result;
    assert_eq!(result.highest_score, 0);
    assert_eq!(result.primary_symptom_id, SymptomId::ShortnessOfBreath);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.action_required, ACTION_ROUTINE_MONITORING);
    assert_eq!(result.priority_level, 1);
}

#[test]
fn severe_pain_alone_is_high_risk_with_second_priority() {
    let result = process_screening(&answers_with(&[(1, 9)])).expect("valid answers");

    assert_eq!(result.highest_score, 9);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.primary_symptom_id, SymptomId::Pain);
    assert_eq!(result.priority_level, 2);
    assert_eq!(result.diagnosis, "Chronic pain");
}

#[test]
fn wellbeing_alone_has_lowest_priority() {
    let result = process_screening(&answers_with(&[(9, 5)])).expect("valid answers");

    assert_eq!(result.primary_symptom_id, SymptomId::Wellbeing);
    assert_eq!(result.priority_level, 9);
    assert_eq!(result.risk_level, RiskLevel::Medium);
}

#[test]
fn risk_band_boundaries_follow_highest_score() {
    let cases = [
        (3, RiskLevel::Low),
        (4, RiskLevel::Medium),
        (6, RiskLevel::Medium),
        (7, RiskLevel::High),
        (10, RiskLevel::High),
    ];

    for (score, level) in cases {
        let result = process_screening(&answers_with(&[(4, score)])).expect("valid answers");
        assert_eq!(result.risk_level, level, "score {score}");
        assert_eq!(result.highest_score as i64, score);
    }
}

#[test]
fn identical_inputs_yield_identical_results() {
    let answers = answers_with(&[(2, 6), (5, 6), (8, 6), (3, 1)]);

    let first = process_screening(&answers).expect("valid answers");
    let second = process_screening(&answers.clone()).expect("valid answers");

    assert_eq!(first, second);
    assert_eq!(first.primary_symptom_id, SymptomId::LackOfAppetite);
}

#[test]
fn primary_symptom_always_reaches_highest_score() {
    let patterns: [[i64; 9]; 4] = [
        [3, 7, 7, 1, 0, 2, 7, 5, 4],
        [10, 10, 10, 10, 10, 10, 10, 10, 10],
        [0, 0, 0, 0, 0, 0, 0, 1, 1],
        [4, 2, 9, 9, 1, 8, 0, 3, 6],
    ];

    for pattern in patterns {
        let overrides: Vec<(u8, i64)> = pattern
            .iter()
            .enumerate()
            .map(|(index, value)| (index as u8 + 1, *value))
            .collect();
        let answers = answers_with(&overrides);
        let assessment = parse_assessment(&answers).expect("valid answers");
        let result = TriageEngine::new().evaluate(&assessment);

        let max = *pattern.iter().max().expect("nine values");
        assert_eq!(result.highest_score as i64, max);
        assert_eq!(
            assessment.score(result.primary_symptom_id).value() as i64,
            max,
            "pattern {pattern:?}"
        );
    }
}

#[test]
fn invalid_answers_halt_before_scoring() {
    let mut answers = answers_with(&[(3, 11)]);
    answers.remove("7");

    let err = process_screening(&answers).expect_err("invalid answers");

    let ScreeningError::InvalidAssessment(report) = &err;
    assert_eq!(report.errors.len(), 2);
    assert_eq!(
        err.to_string(),
        "invalid ESAS assessment: item 3 must be between 0 and 10; item 7 is missing"
    );
}
