use crate::config::EligibilityConfig;
use crate::screening::domain::{AnswerValue, ParticipantRecord};
use crate::screening::eligibility::EligibilityEngine;

pub(super) fn config() -> EligibilityConfig {
    EligibilityConfig {
        age_adult_lower: 18,
        age_adult_upper: 64,
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(config())
}

/// Baseline record that passes every criterion.
pub(super) fn participant() -> ParticipantRecord {
    ParticipantRecord {
        age: Some(25),
        literate: AnswerValue::Yes,
        guardian: None,
        citizen: AnswerValue::Yes,
        legal_marriage: AnswerValue::No,
        marriage_certificate: AnswerValue::No,
        hiv_status: AnswerValue::Positive,
    }
}
