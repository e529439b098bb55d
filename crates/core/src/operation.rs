//! Routing tags carried by an invocation.
//!
//! Both the function name and the sub-operation tag are resolved once, at
//! the dispatcher boundary, into these enums.

/// Function name the host uses for one-time initialization.
pub const FUNCTION_INIT: &str = "init";

/// Function name for every regular operation.
pub const FUNCTION_INVOKE: &str = "invoke";

/// Legal sub-operation tags, in the order error messages list them.
pub const OPERATION_TAGS: [&str; 4] = ["create", "query", "update", "delete"];

/// The function an invocation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Function {
    Init,
    Invoke,
    Unknown(String),
}

impl Function {
    pub fn parse(name: &str) -> Self {
        match name {
            FUNCTION_INIT => Self::Init,
            FUNCTION_INVOKE => Self::Invoke,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// The sub-operation selected by `args[0]` of an `invoke`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create,
    Query,
    Update,
    Delete,
    Unrecognized(String),
}

impl Operation {
    /// Tags are matched exactly; `"Create"` is unrecognized.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "create" => Self::Create,
            "query" => Self::Query,
            "update" => Self::Update,
            "delete" => Self::Delete,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Query => "query",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Unrecognized(tag) => tag,
        }
    }
}
