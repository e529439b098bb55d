//! Uniform result of one invocation.
//!
//! Success carries an optional payload (nothing for `create`, the stored
//! record bytes for `query`). Failure carries a human-readable message; no
//! error codes are defined beyond the success/failure split.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(Option<Vec<u8>>),
    Failure(String),
}

impl Response {
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Payload bytes of a successful response, if any.
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Response::Success(payload) => payload.as_deref(),
            Response::Failure(_) => None,
        }
    }

    /// Message of a failed response.
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Failure(msg) => Some(msg),
        }
    }
}
