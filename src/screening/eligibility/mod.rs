//! Eligibility evaluation for the clinic screening workflow.
//!
//! Four independent criterion evaluators (literacy, age, citizenship, HIV
//! status) composed into one aggregate verdict with an ordered reason list
//! for every failed criterion. Ineligibility is a normal outcome reported
//! through the verdict; only malformed caller input is an error.

pub mod rules;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::config::EligibilityConfig;
use crate::screening::domain::{AnswerValue, ParticipantRecord};

/// Criterion identifiers in the fixed evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    Literacy,
    Age,
    Citizenship,
    HivStatus,
}

/// Single-criterion verdict. Each evaluator owns exactly one reason slot;
/// a reason is set once on failure and never cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionVerdict {
    pub criterion: Criterion,
    pub eligible: bool,
    pub reason: Option<String>,
}

impl CriterionVerdict {
    pub(crate) fn pass(criterion: Criterion) -> Self {
        Self {
            criterion,
            eligible: true,
            reason: None,
        }
    }

    pub(crate) fn fail(criterion: Criterion, reason: impl Into<String>) -> Self {
        Self {
            criterion,
            eligible: false,
            reason: Some(reason.into()),
        }
    }
}

/// Aggregate decision over one participant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub eligible: bool,
    /// Non-empty reasons in evaluation order: literacy, age, citizenship,
    /// HIV status.
    pub reasons: Vec<String>,
    /// All four verdicts in evaluation order, for audit display.
    pub verdicts: Vec<CriterionVerdict>,
}

/// Malformed caller input, kept apart from ordinary ineligibility so the
/// workflow layer can distinguish "does not qualify" from "bad data".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EligibilityError {
    #[error("invalid age {0}: age in years cannot be negative")]
    NegativeAge(i16),
    #[error("hiv status answer '{0}' is outside the recognized result set")]
    HivStatusOutOfDomain(AnswerValue),
}

/// Stateless engine applying the configured criteria to one participant.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Runs every criterion in the fixed order and aggregates the
    /// verdicts. All four evaluators run even after a failure, so the
    /// reason list can hold up to four entries. The first invalid-input
    /// error encountered is returned as-is and stops evaluation.
    pub fn evaluate(
        &self,
        participant: &ParticipantRecord,
    ) -> Result<EligibilityOutcome, EligibilityError> {
        let verdicts = vec![
            rules::evaluate_literacy(participant.literate, participant.guardian),
            rules::evaluate_age(participant.age, &self.config)?,
            rules::evaluate_citizenship(
                participant.citizen,
                participant.legal_marriage,
                participant.marriage_certificate,
            ),
            rules::evaluate_hiv_status(participant.hiv_status)?,
        ];

        let eligible = verdicts.iter().all(|verdict| verdict.eligible);
        let reasons: Vec<String> = verdicts
            .iter()
            .filter_map(|verdict| verdict.reason.clone())
            .collect();

        for verdict in verdicts.iter().filter(|verdict| !verdict.eligible) {
            tracing::debug!(
                criterion = ?verdict.criterion,
                reason = verdict.reason.as_deref().unwrap_or_default(),
                "criterion failed"
            );
        }

        Ok(EligibilityOutcome {
            eligible,
            reasons,
            verdicts,
        })
    }
}
