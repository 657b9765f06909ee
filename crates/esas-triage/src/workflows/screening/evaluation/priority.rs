use super::super::domain::SymptomId;

/// Clinical urgency used to break ties, most urgent first.
pub const PRIORITY_ORDER: [SymptomId; 9] = [
    SymptomId::ShortnessOfBreath,
    SymptomId::Pain,
    SymptomId::Nausea,
    SymptomId::LackOfAppetite,
    SymptomId::Drowsiness,
    SymptomId::Tiredness,
    SymptomId::Anxiety,
    SymptomId::Depression,
    SymptomId::Wellbeing,
];

// 1-based rank of each item, indexed by `SymptomId::index`.
const PRIORITY_RANK: [u8; 9] = {
    let mut rank = [0u8; 9];
    let mut position = 0;
    while position < PRIORITY_ORDER.len() {
        rank[PRIORITY_ORDER[position].index()] = position as u8 + 1;
        position += 1;
    }
    rank
};

/// Rank of `symptom` within [`PRIORITY_ORDER`], starting at 1.
pub fn priority_level(symptom: SymptomId) -> u8 {
    PRIORITY_RANK[symptom.index()]
}

/// Pick the most urgent item among those tied at the highest score.
///
/// An empty slice resolves like a full tie, to the most urgent item overall.
pub fn resolve_primary(tied: &[SymptomId]) -> SymptomId {
    tied.iter()
        .copied()
        .min_by_key(|symptom| priority_level(*symptom))
        .unwrap_or(PRIORITY_ORDER[0])
}
