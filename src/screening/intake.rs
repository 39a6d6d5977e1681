use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::ParticipantRecord;
use super::eligibility::{EligibilityEngine, EligibilityError, EligibilityOutcome};
use crate::config::EligibilityConfig;

/// Seven-character screening identifier, `[0-9A-Z]{7}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreeningIdentifier(pub String);

// Six digits after the prefix; the sequence wraps rather than widen the
// identifier past seven characters.
const SEQUENCE_MODULUS: u64 = 1_000_000;

/// One screening attempt as handed back to the workflow layer. The core
/// keeps no copy; persistence and display belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub screening_identifier: ScreeningIdentifier,
    pub report_datetime: DateTime<Utc>,
    pub outcome: EligibilityOutcome,
}

/// Intake-layer wrapper around the eligibility engine: stamps each
/// evaluation with an identifier and a report datetime.
pub struct ScreeningIntake {
    engine: EligibilityEngine,
    sequence: AtomicU64,
}

impl ScreeningIntake {
    pub fn new(config: EligibilityConfig) -> Self {
        Self {
            engine: EligibilityEngine::new(config),
            sequence: AtomicU64::new(1),
        }
    }

    #[cfg(test)]
    fn with_sequence_start(config: EligibilityConfig, start: u64) -> Self {
        Self {
            engine: EligibilityEngine::new(config),
            sequence: AtomicU64::new(start),
        }
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    fn next_screening_identifier(&self) -> ScreeningIdentifier {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) % SEQUENCE_MODULUS;
        ScreeningIdentifier(format!("S{id:06}"))
    }

    pub fn screen(
        &self,
        participant: &ParticipantRecord,
    ) -> Result<ScreeningReport, EligibilityError> {
        let outcome = self.engine.evaluate(participant)?;
        let screening_identifier = self.next_screening_identifier();

        tracing::info!(
            screening_identifier = %screening_identifier.0,
            eligible = outcome.eligible,
            reasons = outcome.reasons.len(),
            "screening evaluated"
        );

        Ok(ScreeningReport {
            screening_identifier,
            report_datetime: Utc::now(),
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::AnswerValue;

    fn eligible_participant() -> ParticipantRecord {
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

    #[test]
    fn screen_stamps_identifier_and_outcome() {
        let intake = ScreeningIntake::new(EligibilityConfig::default());
        let report = intake
            .screen(&eligible_participant())
            .expect("valid participant screens");

        assert!(report.outcome.eligible);
        assert!(report.outcome.reasons.is_empty());
        let id = &report.screening_identifier.0;
        assert_eq!(id.len(), 7);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn identifiers_are_unique_across_screenings() {
        let intake = ScreeningIntake::new(EligibilityConfig::default());
        let first = intake
            .screen(&eligible_participant())
            .expect("first screening");
        let second = intake
            .screen(&eligible_participant())
            .expect("second screening");
        assert_ne!(first.screening_identifier, second.screening_identifier);
    }

    #[test]
    fn identifier_stays_seven_chars_after_sequence_wraps() {
        let intake = ScreeningIntake::with_sequence_start(EligibilityConfig::default(), 1_234_567);
        let report = intake
            .screen(&eligible_participant())
            .expect("valid participant screens");

        assert_eq!(report.screening_identifier.0, "S234567");
        assert_eq!(report.screening_identifier.0.len(), 7);
    }

    #[test]
    fn each_intake_owns_its_own_sequence() {
        let first = ScreeningIntake::new(EligibilityConfig::default());
        let second = ScreeningIntake::new(EligibilityConfig::default());

        let a = first
            .screen(&eligible_participant())
            .expect("first intake screens");
        let b = second
            .screen(&eligible_participant())
            .expect("second intake screens");
        assert_eq!(a.screening_identifier, b.screening_identifier);
    }

    #[test]
    fn invalid_input_surfaces_instead_of_a_report() {
        let intake = ScreeningIntake::new(EligibilityConfig::default());
        let mut participant = eligible_participant();
        participant.hiv_status = AnswerValue::Yes;

        let err = intake
            .screen(&participant)
            .expect_err("yes/no is not an hiv result");
        assert_eq!(err, EligibilityError::HivStatusOutOfDomain(AnswerValue::Yes));
    }
}
