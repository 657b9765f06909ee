//! Static clinical content: nursing diagnoses, intervention protocols, and
//! session frequencies. Authored data; the engine only looks it up.

mod frequency;
mod interventions;

pub use frequency::{frequency, FrequencyRow, DEFAULT_FREQUENCY, FREQUENCY_TABLE};
pub use interventions::{InterventionProtocol, INTERVENTIONS};

use super::domain::SymptomId;

const DIAGNOSES: [&str; 9] = [
    "Chronic pain",
    "Fatigue",
    "Disturbed sleep pattern",
    "Nausea",
    "Imbalanced nutrition: less than body requirements",
    "Ineffective breathing pattern",
    "Hopelessness",
    "Anxiety",
    "Impaired comfort",
];

/// Everything the knowledge base holds for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeEntry {
    pub diagnosis: &'static str,
    pub therapy_type: &'static str,
    pub intervention_steps: &'static [&'static str],
    pub references: &'static [&'static str],
}

pub fn diagnosis(symptom: SymptomId) -> &'static str {
    DIAGNOSES[symptom.index()]
}

pub fn intervention(symptom: SymptomId) -> &'static InterventionProtocol {
    &INTERVENTIONS[symptom.index()]
}

pub fn entry(symptom: SymptomId) -> KnowledgeEntry {
    let protocol = intervention(symptom);
    KnowledgeEntry {
        diagnosis: diagnosis(symptom),
        therapy_type: protocol.therapy_type,
        intervention_steps: protocol.steps,
        references: protocol.references,
    }
}
