/// One external request: a function name and its positional arguments.
///
/// `args[0]` is the sub-operation tag for `invoke`. `tx_id` only labels log
/// output; the contract never stores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub tx_id: String,
    pub function: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Create an invocation with a fresh random transaction id.
    pub fn new(function: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            tx_id: uuid::Uuid::new_v4().to_string(),
            function: function.into(),
            args,
        }
    }

    /// Shorthand for an `invoke` call built from string slices.
    pub fn invoke(args: &[&str]) -> Self {
        Self::new(
            assettrack_core::operation::FUNCTION_INVOKE,
            args.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Replace the generated transaction id, e.g. with one assigned by the host.
    pub fn with_tx_id(mut self, tx_id: impl Into<String>) -> Self {
        self.tx_id = tx_id.into();
        self
    }
}
