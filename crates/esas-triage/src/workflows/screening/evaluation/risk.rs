use super::super::domain::RiskLevel;

pub const ACTION_ROUTINE_MONITORING: &str = "continue routine monitoring";
pub const ACTION_COMPLEMENTARY_INTERVENTION: &str =
    "apply complementary intervention per diagnosis";
pub const ACTION_REASSESS: &str =
    "apply complementary intervention and reassess within 24 hours";
pub const ACTION_ESCALATE: &str =
    "escalate to the attending clinician and apply complementary intervention immediately";

/// Severity band of a single 0-10 score.
///
/// Shared by the triage decision and the per-item labels on stored records so
/// both always agree on where the boundaries sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    None,
    Mild,
    Moderate,
    Severe,
}

impl ScoreBand {
    /// Values above 10 fall back to `None`.
    pub fn for_score(score: u8) -> Self {
        match score {
            1..=3 => ScoreBand::Mild,
            4..=6 => ScoreBand::Moderate,
            7..=10 => ScoreBand::Severe,
            _ => ScoreBand::None,
        }
    }

    pub fn severity_label(self) -> &'static str {
        match self {
            ScoreBand::None => "none",
            ScoreBand::Mild => "mild",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Severe => "severe",
        }
    }

    pub fn risk_level(self) -> RiskLevel {
        match self {
            ScoreBand::None | ScoreBand::Mild => RiskLevel::Low,
            ScoreBand::Moderate => RiskLevel::Medium,
            ScoreBand::Severe => RiskLevel::High,
        }
    }

    // None and Mild share a risk level but not an action.
    pub fn action_required(self) -> &'static str {
        match self {
            ScoreBand::None => ACTION_ROUTINE_MONITORING,
            ScoreBand::Mild => ACTION_COMPLEMENTARY_INTERVENTION,
            ScoreBand::Moderate => ACTION_REASSESS,
            ScoreBand::Severe => ACTION_ESCALATE,
        }
    }
}

/// Risk level and action statement for a screening's highest score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassification {
    pub band: ScoreBand,
    pub risk_level: RiskLevel,
    pub action_required: &'static str,
}

pub fn classify(highest_score: u8) -> RiskClassification {
    let band = ScoreBand::for_score(highest_score);
    RiskClassification {
        band,
        risk_level: band.risk_level(),
        action_required: band.action_required(),
    }
}
