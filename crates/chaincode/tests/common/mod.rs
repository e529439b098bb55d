#![allow(dead_code)]

use assettrack_chaincode::{AssetTrackingContract, Invocation, Response};
use assettrack_core::record::Asset;
use assettrack_ledger::{LedgerStore, MemoryLedger, StoreError};

/// A contract with the default (permissive) validation policy.
pub fn contract() -> AssetTrackingContract {
    AssetTrackingContract::default()
}

/// Run an `invoke` with the given arguments.
pub fn invoke(
    contract: &AssetTrackingContract,
    ledger: &mut impl LedgerStore,
    args: &[&str],
) -> Response {
    contract.invoke(ledger, &Invocation::invoke(args))
}

/// Decode the payload of a successful query response.
pub fn decode_payload(response: &Response) -> Asset {
    let payload = response
        .payload()
        .unwrap_or_else(|| panic!("expected payload, got {response:?}"));
    Asset::from_bytes(payload).unwrap()
}

/// Message of a failed response.
pub fn failure_message(response: &Response) -> String {
    response
        .message()
        .unwrap_or_else(|| panic!("expected failure, got {response:?}"))
        .to_string()
}

/// The canonical seven-argument create request.
pub const CREATE_X1: [&str; 7] = ["create", "X1", "SN1", "VEHICLE", "Alice", "desc", "BP1"];

/// Which primitive a [`FailingLedger`] breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Get,
    Put,
    /// Fail the n-th put (0-based); earlier puts succeed.
    NthPut(usize),
}

/// A ledger that fails one primitive and delegates the rest to memory.
pub struct FailingLedger {
    pub inner: MemoryLedger,
    pub fail_on: FailOn,
    puts: usize,
}

impl FailingLedger {
    pub fn new(fail_on: FailOn) -> Self {
        Self {
            inner: MemoryLedger::new(),
            fail_on,
            puts: 0,
        }
    }
}

impl LedgerStore for FailingLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        if self.fail_on == FailOn::Get {
            return Err(StoreError::Get {
                key: key.to_string(),
                reason: "peer unavailable".into(),
            });
        }
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let n = self.puts;
        self.puts += 1;
        let fail = match self.fail_on {
            FailOn::Put => true,
            FailOn::NthPut(target) => n == target,
            FailOn::Get => false,
        };
        if fail {
            return Err(StoreError::Put {
                key: key.to_string(),
                reason: "write rejected".into(),
            });
        }
        self.inner.put(key, value)
    }
}
