use super::{Criterion, CriterionVerdict, EligibilityError};
use crate::config::EligibilityConfig;
use crate::screening::domain::AnswerValue;

/// Age must fall within the configured inclusive adult bounds.
///
/// A missing age is ineligible with its own reason; a negative age is
/// malformed caller input and surfaces as an error rather than a verdict.
pub fn evaluate_age(
    age: Option<i16>,
    config: &EligibilityConfig,
) -> Result<CriterionVerdict, EligibilityError> {
    let verdict = match age {
        None => CriterionVerdict::fail(Criterion::Age, "age unknown"),
        Some(age) if age < 0 => return Err(EligibilityError::NegativeAge(age)),
        Some(age) if age < config.age_adult_lower => {
            CriterionVerdict::fail(Criterion::Age, format!("age<{}", config.age_adult_lower))
        }
        Some(age) if age > config.age_adult_upper => {
            CriterionVerdict::fail(Criterion::Age, format!("age>{}", config.age_adult_upper))
        }
        Some(_) => CriterionVerdict::pass(Criterion::Age),
    };

    Ok(verdict)
}

/// Citizens qualify outright; non-citizens qualify only through a legal
/// marriage to a citizen backed by a marriage certificate. The marriage
/// claim and the certificate must independently be affirmed.
pub fn evaluate_citizenship(
    citizen: AnswerValue,
    legal_marriage: AnswerValue,
    marriage_certificate: AnswerValue,
) -> CriterionVerdict {
    let qualifies = citizen == AnswerValue::Yes
        || (citizen == AnswerValue::No
            && legal_marriage == AnswerValue::Yes
            && marriage_certificate == AnswerValue::Yes);

    if qualifies {
        CriterionVerdict::pass(Criterion::Citizenship)
    } else {
        CriterionVerdict::fail(
            Criterion::Citizenship,
            "Not a citizen and no qualifying marriage proof",
        )
    }
}

/// Illiteracy is not disqualifying when a guardian or representative
/// consents on the participant's behalf. A missing guardian answer fails
/// the same way an explicit refusal does.
pub fn evaluate_literacy(literate: AnswerValue, guardian: Option<AnswerValue>) -> CriterionVerdict {
    if literate == AnswerValue::Yes || guardian == Some(AnswerValue::Yes) {
        CriterionVerdict::pass(Criterion::Literacy)
    } else {
        CriterionVerdict::fail(
            Criterion::Literacy,
            "Illiterate without guardian or representative consent",
        )
    }
}

/// The program enrolls a seropositive cohort: only a confirmed positive
/// status qualifies, and every non-positive state shares one reason.
pub fn evaluate_hiv_status(hiv_status: AnswerValue) -> Result<CriterionVerdict, EligibilityError> {
    match hiv_status {
        AnswerValue::Positive => Ok(CriterionVerdict::pass(Criterion::HivStatus)),
        AnswerValue::Negative
        | AnswerValue::Indeterminate
        | AnswerValue::Unknown
        | AnswerValue::NotAnswering => Ok(CriterionVerdict::fail(
            Criterion::HivStatus,
            "Not a positive participant",
        )),
        answer @ (AnswerValue::Yes | AnswerValue::No) => {
            Err(EligibilityError::HivStatusOutOfDomain(answer))
        }
    }
}
