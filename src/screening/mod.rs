//! Clinic screening intake and eligibility evaluation.

pub mod domain;
pub mod eligibility;
pub mod intake;

pub use domain::{AnswerValue, ParseAnswerError, ParticipantRecord};
pub use eligibility::{
    Criterion, CriterionVerdict, EligibilityEngine, EligibilityError, EligibilityOutcome,
};
pub use intake::{ScreeningIdentifier, ScreeningIntake, ScreeningReport};
