//! The asset-tracking contract: the two entry points a host calls.
//!
//! [`AssetTrackingContract::init`] runs once when the contract is
//! installed. [`AssetTrackingContract::invoke`] runs once per transaction and
//! routes `args[0]` to a handler. Neither keeps state between calls.

use assettrack_core::error::CoreError;
use assettrack_core::operation::{Function, Operation};
use assettrack_core::validation::ValidationPolicy;
use assettrack_ledger::LedgerStore;

use crate::bootstrap;
use crate::config::ContractConfig;
use crate::error::{ChaincodeError, ChaincodeResult};
use crate::handlers::{create, query};
use crate::invocation::Invocation;
use crate::response::Response;

/// Smallest `invoke` argument list: the tag plus one operand.
const MIN_INVOKE_ARGS: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct AssetTrackingContract {
    policy: ValidationPolicy,
}

impl AssetTrackingContract {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &ContractConfig) -> Self {
        Self::new(config.validation_policy)
    }

    /// Seed the ledger with the example assets.
    pub fn init(&self, store: &mut impl LedgerStore) -> Response {
        let _span = tracing::info_span!("init").entered();
        match bootstrap::seed_ledger(store) {
            Ok(_) => Response::Success(None),
            Err(e) => e.into(),
        }
    }

    /// Handle one `invoke` transaction.
    pub fn invoke(&self, store: &mut impl LedgerStore, invocation: &Invocation) -> Response {
        let _span = tracing::info_span!(
            "invocation",
            tx_id = %invocation.tx_id,
            function = %invocation.function,
            operation = invocation.args.first().map(String::as_str).unwrap_or_default(),
        )
        .entered();

        match self.dispatch(store, invocation) {
            Ok(payload) => {
                tracing::debug!(
                    payload_bytes = payload.as_ref().map_or(0, Vec::len),
                    "Invocation succeeded"
                );
                Response::Success(payload)
            }
            Err(e) => e.into(),
        }
    }

    fn dispatch(
        &self,
        store: &mut impl LedgerStore,
        invocation: &Invocation,
    ) -> ChaincodeResult<Option<Vec<u8>>> {
        match Function::parse(&invocation.function) {
            Function::Invoke => {}
            Function::Init | Function::Unknown(_) => {
                return Err(CoreError::UnknownFunction(invocation.function.clone()).into());
            }
        }

        let args = &invocation.args;
        let Some(tag) = args.first() else {
            return Err(argument_count(args.len()));
        };

        let operation = Operation::parse(tag);
        tracing::debug!(operation = operation.tag(), args = args.len(), "Routing invocation");

        // Reserved operations are refused whatever else was passed.
        match operation {
            Operation::Update => Err(CoreError::NotImplemented("update").into()),
            Operation::Delete => Err(CoreError::NotImplemented("delete").into()),
            _ if args.len() < MIN_INVOKE_ARGS => Err(argument_count(args.len())),
            Operation::Create => create::create_asset(store, args, self.policy).map(|()| None),
            Operation::Query => query::query_asset(&*store, args).map(Some),
            Operation::Unrecognized(tag) => Err(CoreError::UnknownAction(tag).into()),
        }
    }
}

fn argument_count(actual: usize) -> ChaincodeError {
    CoreError::ArgumentCount {
        expected: format!("at least {MIN_INVOKE_ARGS}"),
        actual,
    }
    .into()
}
