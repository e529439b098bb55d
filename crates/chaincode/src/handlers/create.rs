use assettrack_core::builder::build_asset;
use assettrack_core::validation::{validate_create_args, ValidationPolicy};
use assettrack_ledger::LedgerStore;

use crate::error::ChaincodeResult;

/// Validate, build, and store a new asset under its id.
///
/// Overwrites any record already stored under the same id.
pub fn create_asset(
    store: &mut impl LedgerStore,
    args: &[String],
    policy: ValidationPolicy,
) -> ChaincodeResult<()> {
    validate_create_args(args, policy)?;

    let asset = build_asset(args)?;
    let bytes = asset.to_bytes()?;
    tracing::debug!(
        id = %asset.id,
        record = %String::from_utf8_lossy(&bytes),
        "Putting asset"
    );

    store.put(&asset.id, bytes)?;
    tracing::info!(id = %asset.id, asset_type = %asset.asset_type, "Asset created");

    Ok(())
}
