use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Recognized symbolic response states collected at intake.
///
/// Absence of an answer is modeled as `Option<AnswerValue>` on the fields
/// that permit it and is distinct from an explicit [`AnswerValue::No`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerValue {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
    #[serde(rename = "POS")]
    Positive,
    #[serde(rename = "NEG")]
    Negative,
    #[serde(rename = "IND")]
    Indeterminate,
    #[serde(rename = "UNK")]
    Unknown,
    #[serde(rename = "not_answering")]
    NotAnswering,
}

impl AnswerValue {
    /// Storage token for this answer, matching the intake form constants.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerValue::Yes => "Yes",
            AnswerValue::No => "No",
            AnswerValue::Positive => "POS",
            AnswerValue::Negative => "NEG",
            AnswerValue::Indeterminate => "IND",
            AnswerValue::Unknown => "UNK",
            AnswerValue::NotAnswering => "not_answering",
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an intake token falls outside the recognized answer set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized answer token '{0}'")]
pub struct ParseAnswerError(pub String);

impl FromStr for AnswerValue {
    type Err = ParseAnswerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Yes" => Ok(AnswerValue::Yes),
            "No" => Ok(AnswerValue::No),
            "POS" => Ok(AnswerValue::Positive),
            "NEG" => Ok(AnswerValue::Negative),
            "IND" => Ok(AnswerValue::Indeterminate),
            "UNK" => Ok(AnswerValue::Unknown),
            "not_answering" => Ok(AnswerValue::NotAnswering),
            other => Err(ParseAnswerError(other.to_string())),
        }
    }
}

/// Immutable bundle of intake answers consumed by the eligibility engine.
///
/// A record is built fresh per screening attempt and discarded once the
/// outcome has been read; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    /// Age in whole years, `None` when not collected.
    pub age: Option<i16>,
    pub literate: AnswerValue,
    /// Consent from a guardian or representative, when asked.
    pub guardian: Option<AnswerValue>,
    pub citizen: AnswerValue,
    /// Legally married to a citizen.
    pub legal_marriage: AnswerValue,
    /// Proof of that marriage.
    pub marriage_certificate: AnswerValue,
    /// Restricted to POS/NEG/IND/UNK/not_answering; `Yes`/`No` here is
    /// out-of-domain input and the evaluator rejects it.
    pub hiv_status: AnswerValue,
}
