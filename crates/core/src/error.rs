use crate::operation::OPERATION_TAGS;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Incorrect number of arguments. Expecting {expected}, actual: {actual}")]
    ArgumentCount { expected: String, actual: usize },

    #[error("{0}")]
    Validation(String),

    #[error("Unknown function call: '{0}'")]
    UnknownFunction(String),

    #[error(
        "Unknown action '{}', check the first argument, must be one of {}",
        .0,
        quoted_tags()
    )]
    UnknownAction(String),

    #[error("{0} is not yet implemented")]
    NotImplemented(&'static str),

    #[error("Asset not found: {id}")]
    NotFound { id: String },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether the error was caused by the caller's input rather than by the
    /// stored data.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, CoreError::Serialization(_))
    }
}

fn quoted_tags() -> String {
    let quoted: Vec<String> = OPERATION_TAGS.iter().map(|t| format!("'{t}'")).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        _ => quoted.join(""),
    }
}
