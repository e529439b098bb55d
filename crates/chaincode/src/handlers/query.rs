use assettrack_core::error::CoreError;
use assettrack_core::record::Asset;
use assettrack_ledger::LedgerStore;

use crate::error::ChaincodeResult;

/// `query` takes the tag and the asset id, nothing else.
const QUERY_ARGS: usize = 2;

/// Fetch the raw stored record for `args[1]`.
///
/// The bytes are returned exactly as stored. Decoding happens only for the
/// diagnostic log line and never affects the result.
pub fn query_asset(store: &impl LedgerStore, args: &[String]) -> ChaincodeResult<Vec<u8>> {
    if args.len() != QUERY_ARGS {
        return Err(CoreError::ArgumentCount {
            expected: format!("exactly {QUERY_ARGS} (query, asset id)"),
            actual: args.len(),
        }
        .into());
    }

    let id = &args[1];
    let bytes = store
        .get(id)?
        .ok_or_else(|| CoreError::NotFound { id: id.clone() })?;

    echo_record(id, &bytes);
    Ok(bytes)
}

fn echo_record(id: &str, bytes: &[u8]) {
    let summary = serde_json::json!({
        "id": id,
        "val": String::from_utf8_lossy(bytes),
    });
    match Asset::from_bytes(bytes) {
        Ok(asset) => tracing::debug!(%summary, asset = ?asset, "Query response"),
        Err(e) => tracing::warn!(%id, error = %e, "Stored record does not decode"),
    }
}
