use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw questionnaire answers keyed by the stringified item number ("1".."9").
///
/// Values stay untyped until the validator has inspected them so that every
/// malformed field can be reported in one pass.
pub type RawAnswers = BTreeMap<String, serde_json::Value>;

/// The nine ESAS items, numbered the way the paper form numbers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SymptomId {
    Pain = 1,
    Tiredness = 2,
    Drowsiness = 3,
    Nausea = 4,
    LackOfAppetite = 5,
    ShortnessOfBreath = 6,
    Depression = 7,
    Anxiety = 8,
    Wellbeing = 9,
}

impl SymptomId {
    pub const ALL: [SymptomId; 9] = [
        SymptomId::Pain,
        SymptomId::Tiredness,
        SymptomId::Drowsiness,
        SymptomId::Nausea,
        SymptomId::LackOfAppetite,
        SymptomId::ShortnessOfBreath,
        SymptomId::Depression,
        SymptomId::Anxiety,
        SymptomId::Wellbeing,
    ];

    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based position used to index the static tables.
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.get(usize::from(number).checked_sub(1)?).copied()
    }

    /// Key under which the item appears in submitted answer maps.
    pub fn key(self) -> &'static str {
        match self {
            SymptomId::Pain => "1",
            SymptomId::Tiredness => "2",
            SymptomId::Drowsiness => "3",
            SymptomId::Nausea => "4",
            SymptomId::LackOfAppetite => "5",
            SymptomId::ShortnessOfBreath => "6",
            SymptomId::Depression => "7",
            SymptomId::Anxiety => "8",
            SymptomId::Wellbeing => "9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SymptomId::Pain => "Pain",
            SymptomId::Tiredness => "Tiredness",
            SymptomId::Drowsiness => "Drowsiness",
            SymptomId::Nausea => "Nausea",
            SymptomId::LackOfAppetite => "Lack of appetite",
            SymptomId::ShortnessOfBreath => "Shortness of breath",
            SymptomId::Depression => "Depression",
            SymptomId::Anxiety => "Anxiety",
            SymptomId::Wellbeing => "Wellbeing",
        }
    }
}

impl fmt::Display for SymptomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<SymptomId> for u8 {
    fn from(value: SymptomId) -> Self {
        value.number()
    }
}

impl TryFrom<u8> for SymptomId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value).ok_or_else(|| format!("unknown ESAS item {value}"))
    }
}

/// A single item score, guaranteed to sit on the 0-10 ESAS scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;
    pub const ZERO: Score = Score(0);

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Score> for u8 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl TryFrom<u8> for Score {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("score {value} is outside 0-10"))
    }
}

/// A complete, validated set of nine ESAS scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EsasAssessment {
    scores: [Score; 9],
}

impl EsasAssessment {
    pub(crate) fn from_scores(scores: [Score; 9]) -> Self {
        Self { scores }
    }

    pub fn score(&self, symptom: SymptomId) -> Score {
        self.scores[symptom.index()]
    }

    /// Scores in item order (1 through 9).
    pub fn iter(&self) -> impl Iterator<Item = (SymptomId, Score)> + '_ {
        SymptomId::ALL
            .iter()
            .map(move |symptom| (*symptom, self.scores[symptom.index()]))
    }
}

/// Triage band derived from the highest item score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured recommendation produced for one screening.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningResult {
    pub highest_score: u8,
    pub primary_symptom_id: SymptomId,
    pub risk_level: RiskLevel,
    pub action_required: String,
    pub diagnosis: String,
    pub therapy_type: String,
    pub intervention_steps: Vec<String>,
    pub references: Vec<String>,
    pub priority_level: u8,
}

/// Canonical patient identity carried alongside a stored screening.
///
/// The engine never inspects these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientIdentity {
    pub name: String,
    #[serde(default)]
    pub age: Option<u16>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub facility: Option<String>,
}

/// Point in the care pathway at which the questionnaire was taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningType {
    #[default]
    Initial,
    #[serde(alias = "follow-up", alias = "followup")]
    FollowUp,
}

impl ScreeningType {
    pub fn label(self) -> &'static str {
        match self {
            ScreeningType::Initial => "initial",
            ScreeningType::FollowUp => "follow_up",
        }
    }
}

impl FromStr for ScreeningType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "initial" => Ok(ScreeningType::Initial),
            "follow_up" | "follow-up" | "followup" => Ok(ScreeningType::FollowUp),
            other => Err(format!("unknown screening type '{other}'")),
        }
    }
}

/// Everything needed to screen a patient and keep the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningSubmission {
    pub answers: RawAnswers,
    pub patient: PatientIdentity,
    #[serde(default)]
    pub screening_type: ScreeningType,
}

/// Identifier wrapper for stored screenings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScreeningId(pub String);

impl fmt::Display for ScreeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
