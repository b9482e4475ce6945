use thiserror::Error;

use super::model::Field;

/// Why a submission attempt ended on the failure path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// The request never got an answer (network, DNS, CORS, encoding).
    #[error("request failed: {0}")]
    Transport(String),
    /// The form handler answered with a non-2xx status.
    #[error("form handler answered with status {status}")]
    Rejected { status: u16 },
}

/// Why a submit was refused before anything was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the {0} field is missing or malformed")]
    Invalid(Field),
}
