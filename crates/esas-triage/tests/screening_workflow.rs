//! End-to-end scenarios for the ESAS screening workflow, exercised through the
//! public engine, importer, and service facade.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use serde_json::json;

use esas_triage::workflows::screening::evaluation::resolve_primary;
use esas_triage::workflows::screening::{
    process_screening, validate, PatientIdentity, RawAnswers, RepositoryError, RiskLevel,
    ScreeningId, ScreeningImporter, ScreeningRepository, ScreeningService, ScreeningSubmission,
    ScreeningType, StoredScreening, SymptomId, ValidationIssue, PRIORITY_ORDER,
};

fn answers(scores: [i64; 9]) -> RawAnswers {
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| ((index + 1).to_string(), json!(score)))
        .collect()
}

#[derive(Default)]
struct VecRepository {
    screenings: Mutex<Vec<StoredScreening>>,
}

impl ScreeningRepository for VecRepository {
    fn insert(&self, screening: StoredScreening) -> Result<StoredScreening, RepositoryError> {
        self.screenings
            .lock()
            .expect("repository mutex poisoned")
            .push(screening.clone());
        Ok(screening)
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<StoredScreening>, RepositoryError> {
        let guard = self.screenings.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|screening| &screening.id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredScreening>, RepositoryError> {
        let guard = self.screenings.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().take(limit).cloned().collect())
    }
}

#[test]
fn scenario_tied_mild_breathlessness_and_pain() {
    let result = process_screening(&answers([2, 0, 0, 0, 0, 2, 0, 0, 0])).expect("valid");

    assert_eq!(result.highest_score, 2);
    assert_eq!(result.primary_symptom_id, SymptomId::ShortnessOfBreath);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.priority_level, 1);
    assert_eq!(result.diagnosis, "Ineffective breathing pattern");
}

#[test]
fn scenario_all_zero_answers() {
    let result = process_screening(&answers([0; 9])).expect("valid");

    assert_eq!(result.highest_score, 0);
    assert_eq!(result.primary_symptom_id, SymptomId::ShortnessOfBreath);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.action_required, "continue routine monitoring");
    assert_eq!(result.priority_level, 1);
}

#[test]
fn scenario_severe_pain() {
    let result = process_screening(&answers([9, 0, 0, 0, 0, 0, 0, 0, 0])).expect("valid");

    assert_eq!(result.highest_score, 9);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.primary_symptom_id, SymptomId::Pain);
    assert_eq!(result.priority_level, 2);
}

#[test]
fn every_tied_pair_resolves_to_the_higher_priority_item() {
    for (a_rank, a) in PRIORITY_ORDER.iter().enumerate() {
        for b in &PRIORITY_ORDER[a_rank + 1..] {
            assert_eq!(resolve_primary(&[*a, *b]), *a, "{a} before {b}");
            assert_eq!(resolve_primary(&[*b, *a]), *a, "{b} before {a}");

            let mut scores = [0; 9];
            scores[a.index()] = 5;
            scores[b.index()] = 5;
            let result = process_screening(&answers(scores)).expect("valid");
            assert_eq!(result.primary_symptom_id, *a, "tie between {a} and {b}");
        }
    }
}

#[test]
fn validation_reports_exactly_the_missing_items() {
    let mut input = answers([1, 1, 1, 1, 1, 1, 1, 1, 1]);
    input.remove("2");
    input.remove("5");

    let report = validate(&input);

    assert_eq!(
        report.errors,
        vec![
            ValidationIssue::MissingField {
                item: SymptomId::Tiredness
            },
            ValidationIssue::MissingField {
                item: SymptomId::LackOfAppetite
            },
        ]
    );
}

#[test]
fn service_records_and_reads_back_a_screening() {
    let service = ScreeningService::new(Arc::new(VecRepository::default()));
    let submission = ScreeningSubmission {
        answers: answers([0, 0, 3, 0, 0, 0, 0, 0, 0]),
        patient: PatientIdentity {
            name: "Ketut Ayu".to_string(),
            age: Some(66),
            gender: None,
            facility: Some("Hospice South".to_string()),
        },
        screening_type: ScreeningType::Initial,
    };

    let stored = service.record(submission).expect("recorded");
    let fetched = service.get(&stored.id).expect("fetched");

    assert_eq!(fetched.result.primary_symptom_id, SymptomId::Drowsiness);
    assert_eq!(fetched.record.recommendation.diagnosis, "Disturbed sleep pattern");
    assert_eq!(fetched.record.recommendation.frequency, "Once daily");
    assert_eq!(fetched.record.symptoms[2].severity, "mild");
}

#[test]
fn csv_batch_flows_through_service() {
    let service = ScreeningService::new(Arc::new(VecRepository::default()));
    let csv = "patient_name,age,screening_type,1,2,3,4,5,6,7,8,9\n\
               Nyoman,80,follow_up,4,4,0,0,0,0,0,0,0\n\
               Putu,,initial,0,0,0,0,0,0,0,0\n";

    let imports = ScreeningImporter::from_reader(Cursor::new(csv)).expect("parses");
    let outcomes = service.record_batch(imports);

    let first = outcomes[0].outcome.as_ref().expect("first row recorded");
    assert_eq!(first.result.primary_symptom_id, SymptomId::Pain);
    assert_eq!(first.record.screening_type, ScreeningType::FollowUp);
    assert!(outcomes[1].outcome.is_err());
    assert_eq!(service.recent(10).expect("recent").len(), 1);
}
