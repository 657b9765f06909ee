use super::super::domain::RiskLevel;

/// Recommended session frequency for one therapy at each risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRow {
    pub therapy_type: &'static str,
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

impl FrequencyRow {
    pub fn for_level(&self, level: RiskLevel) -> &'static str {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
        }
    }
}

pub static FREQUENCY_TABLE: &[FrequencyRow] = &[
    FrequencyRow {
        therapy_type: "Pursed-Lip Breathing",
        low: "3 times daily, 5 minutes per session",
        medium: "Every 4 hours while awake, 10 minutes per session",
        high: "During every episode of breathlessness and every 2 hours while awake",
    },
    FrequencyRow {
        therapy_type: "Foot Massage",
        low: "Once daily, 10 minutes per foot",
        medium: "Twice daily, 10 minutes per foot",
        high: "3 times daily, 10 minutes per foot, alongside prescribed analgesia",
    },
    FrequencyRow {
        therapy_type: "Benson Relaxation",
        low: "Once daily, 15 minutes",
        medium: "Twice daily, 15 minutes",
        high: "3 times daily, 20 minutes",
    },
    FrequencyRow {
        therapy_type: "Progressive Muscle Relaxation",
        low: "Once daily, 20 minutes",
        medium: "Twice daily, 20 minutes",
        high: "Twice daily, 20 minutes, plus before sleep",
    },
];

/// Fallback row for therapies without a dedicated schedule.
pub static DEFAULT_FREQUENCY: FrequencyRow = FrequencyRow {
    therapy_type: "default",
    low: "Once daily",
    medium: "Twice daily",
    high: "3 times daily with reassessment after each session",
};

/// Frequency text for `therapy_type` at `level`, falling back to the default row.
pub fn frequency(therapy_type: &str, level: RiskLevel) -> &'static str {
    let wanted = therapy_type.trim();
    FREQUENCY_TABLE
        .iter()
        .find(|row| row.therapy_type.eq_ignore_ascii_case(wanted))
        .unwrap_or(&DEFAULT_FREQUENCY)
        .for_level(level)
}
