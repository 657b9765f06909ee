/// Non-pharmacological protocol recommended for one ESAS item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterventionProtocol {
    pub therapy_type: &'static str,
    pub steps: &'static [&'static str],
    pub references: &'static [&'static str],
}

const ESAS_REFERENCE: &str = "Bruera E, Kuehn N, Miller MJ, Selmser P, Macmillan K. The Edmonton Symptom Assessment System (ESAS): a simple method for the assessment of palliative care patients. J Palliat Care. 1991;7(2):6-9.";
const NANDA_REFERENCE: &str = "Herdman TH, Kamitsuru S, Lopes CT (eds). NANDA International Nursing Diagnoses: Definitions and Classification 2021-2023. Thieme; 2021.";
const NIC_REFERENCE: &str = "Butcher HK, Bulechek GM, Dochterman JM, Wagner CM (eds). Nursing Interventions Classification (NIC), 7th ed. Elsevier; 2018.";
const NCCN_REFERENCE: &str =
    "National Comprehensive Cancer Network. NCCN Clinical Practice Guidelines in Oncology: Palliative Care.";
const BENSON_REFERENCE: &str = "Benson H. The Relaxation Response. William Morrow; 1975.";
const JACOBSON_REFERENCE: &str = "Jacobson E. Progressive Relaxation. University of Chicago Press; 1938.";

/// Indexed by `SymptomId::index`.
pub static INTERVENTIONS: [InterventionProtocol; 9] = [
    // 1: pain
    InterventionProtocol {
        therapy_type: "Foot Massage",
        steps: &[
            "Assess pain location, intensity and character on the 0-10 scale",
            "Position the patient comfortably with both legs supported",
            "Warm the lotion and massage each foot with slow, firm strokes for 10 minutes",
            "Reassess pain intensity 30 minutes after the session",
            "Document the response and report unrelieved pain to the attending physician",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, NCCN_REFERENCE],
    },
    // 2: tiredness
    InterventionProtocol {
        therapy_type: "Benson Relaxation",
        steps: &[
            "Explain the purpose of the exercise and agree on a quiet time of day",
            "Seat or lay the patient comfortably with eyes closed",
            "Relax the muscles progressively from the feet up to the face",
            "Breathe slowly through the nose, repeating a chosen calming word on each exhale",
            "Continue for 10 to 20 minutes, then sit quietly for a few minutes before rising",
            "Record fatigue level before and after the session",
        ],
        references: &[BENSON_REFERENCE, NANDA_REFERENCE, NIC_REFERENCE],
    },
    // 3: drowsiness
    InterventionProtocol {
        therapy_type: "Sleep Hygiene",
        steps: &[
            "Review daytime naps, night-time waking and current sedating medication",
            "Agree on regular sleep and waking times with the patient and family",
            "Limit daytime naps to 30 minutes and encourage light activity when able",
            "Reduce noise, light and interruptions during the night",
            "Report new or worsening drowsiness to the prescribing clinician",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, ESAS_REFERENCE],
    },
    // 4: nausea
    InterventionProtocol {
        therapy_type: "Ginger Aromatherapy",
        steps: &[
            "Confirm the patient tolerates the scent of ginger",
            "Place two drops of ginger essential oil on a cotton pad",
            "Hold the pad 5 cm below the nose and inhale slowly for 2 to 3 minutes",
            "Keep the room ventilated and remove strong food odours",
            "Record nausea intensity and any vomiting episodes after the session",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, NCCN_REFERENCE],
    },
    // 5: lack of appetite
    InterventionProtocol {
        therapy_type: "Nutritional Support",
        steps: &[
            "Provide oral care before each meal",
            "Offer small, frequent meals according to the patient's preferences",
            "Serve food at a comfortable temperature in a calm setting",
            "Monitor intake and weekly body weight",
            "Refer to the dietitian when intake stays below half of requirements",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, NCCN_REFERENCE],
    },
    // 6: shortness of breath
    InterventionProtocol {
        therapy_type: "Pursed-Lip Breathing",
        steps: &[
            "Sit the patient upright or in a forward-leaning position",
            "Relax the neck and shoulder muscles",
            "Inhale slowly through the nose for a count of two",
            "Purse the lips as if to whistle and exhale gently for a count of four",
            "Repeat for 5 to 10 minutes while monitoring respiratory rate and oxygen saturation",
            "Report persistent breathlessness or saturation below target to the attending physician",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, NCCN_REFERENCE],
    },
    // 7: depression
    InterventionProtocol {
        therapy_type: "Guided Imagery",
        steps: &[
            "Build rapport and invite the patient to talk about their feelings",
            "Settle the patient in a quiet room with eyes closed",
            "Guide the patient to imagine a safe and peaceful place in detail",
            "Continue for 10 to 15 minutes, then return attention to the room slowly",
            "Refer to psychology or chaplaincy when hopelessness persists",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, ESAS_REFERENCE],
    },
    // 8: anxiety
    InterventionProtocol {
        therapy_type: "Progressive Muscle Relaxation",
        steps: &[
            "Explain the tense-and-release technique",
            "Tense each muscle group for 5 seconds, starting with the feet",
            "Release the tension and notice the relaxation for 10 seconds",
            "Move upward through legs, abdomen, arms, shoulders and face",
            "Finish with slow breathing and record anxiety level before and after",
        ],
        references: &[JACOBSON_REFERENCE, NANDA_REFERENCE, NIC_REFERENCE],
    },
    // 9: wellbeing
    InterventionProtocol {
        therapy_type: "Music Therapy",
        steps: &[
            "Ask the patient about preferred music",
            "Play the chosen music at a comfortable volume for 20 to 30 minutes",
            "Minimise interruptions during the session",
            "Ask the patient to rate overall wellbeing after the session",
        ],
        references: &[NANDA_REFERENCE, NIC_REFERENCE, ESAS_REFERENCE],
    },
];
