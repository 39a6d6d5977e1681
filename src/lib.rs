//! Eligibility evaluation engine for a clinical screening workflow.
//!
//! The core is a pure, synchronous decision function: four criterion
//! evaluators (literacy, age, citizenship, HIV status) aggregated into one
//! verdict with an ordered list of disqualification reasons. The
//! surrounding workflow (persistence, rendering, routing) is owned by the
//! caller; this crate only consumes a [`screening::ParticipantRecord`] and
//! hands back the decision.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;

pub use error::AppError;
