use assettrack_core::error::CoreError;
use assettrack_ledger::StoreError;

use crate::response::Response;

/// Error type for contract handlers.
///
/// Wraps [`CoreError`] for request and record errors and [`StoreError`] for
/// ledger failures. Converts into a [`Response::Failure`] carrying the
/// error's display text.
#[derive(Debug, thiserror::Error)]
pub enum ChaincodeError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience type alias for handler return values.
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;

impl From<ChaincodeError> for Response {
    fn from(err: ChaincodeError) -> Self {
        match &err {
            ChaincodeError::Core(core) if core.is_client_error() => {
                tracing::warn!(error = %err, "Invocation rejected");
            }
            _ => {
                tracing::error!(error = %err, "Invocation failed");
            }
        }
        Response::Failure(err.to_string())
    }
}
