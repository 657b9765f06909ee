use super::super::domain::{EsasAssessment, Score, SymptomId};

/// Highest item score and every item that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreAggregate {
    pub highest_score: Score,
    /// Items tied at `highest_score`, in item order. Never empty.
    pub tied: Vec<SymptomId>,
}

pub fn aggregate(assessment: &EsasAssessment) -> ScoreAggregate {
    let highest_score = assessment
        .iter()
        .map(|(_, score)| score)
        .max()
        .unwrap_or(Score::ZERO);

    let tied = assessment
        .iter()
        .filter(|(_, score)| *score == highest_score)
        .map(|(symptom, _)| symptom)
        .collect();

    ScoreAggregate {
        highest_score,
        tied,
    }
}
