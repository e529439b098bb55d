//! One-time ledger seed run when the contract is initialized.
//!
//! Writes three fixed example assets without event history. Running it again
//! overwrites the same keys with the same bytes.

use assettrack_core::record::Asset;
use assettrack_ledger::LedgerStore;

use crate::error::ChaincodeResult;

const JETTA_DESCRIPTION: &str = "2011 VW JETTA STYLE ACTIVE MANUAL TRANSMISION. SIDE AIRBAGS PACKAGE, COLOR: WHITE CANDY     INTERIOR COLOR: BLACK FABRIC .    ENGINE: 2.5L FIVE CYLINDERS     ENGINE NUMBER: CCC094323     MADE IN: MEXICO      BUYER NAME: JHONN DOE     ADDRESS: 123 ABBY ROAD, THE DOMAIN. AUTIN TEXAS, USA.     SELLER NAME: RAY REDDINGTON";

const WHITE_HOUSE_DESCRIPTION: &str = "Address: 1600 Pennsylvania Ave NW, Washington, DC 20500, USA Floor space: 5,110 m2       Construction started:    October 13, 1792,       Completed:   November 1, 1800";

fn seed_asset(id: &str, serial: &str, asset_type: &str, owner: &str, description: &str) -> Asset {
    Asset {
        id: id.to_string(),
        serial_number: serial.to_string(),
        asset_type: asset_type.to_string(),
        owner_name: owner.to_string(),
        description: description.to_string(),
        events: Vec::new(),
    }
}

/// The example assets written by [`seed_ledger`], in write order.
pub fn seed_assets() -> Vec<Asset> {
    vec![
        seed_asset(
            "14a12ef0-9409-4872-9341-9ab003059ce9",
            "3SZ1W278EJ8",
            "VEHICLE",
            "THOMAS ALVA EDISON",
            "1908 FORD MODEL T\n\
             COLOR: ANYONE, AS LONG AS IT IS BLACK\n\
             INTERIORS COLOR: BROWN LEATHER.\n\
             ENGINE: 2.9 L FOUR CYLINDERS\n\
             ENGINE NUMBER: 000015\n\
             MADE IN: UNITED STATES\n\
             BUYER NAME: THOMAS EDISON\n\
             ADDRESS: 345 Llewellyn Park, New Jersey, United States, USA.\n\
             SELLER NAME: HENRY FORD",
        ),
        seed_asset(
            "9d40ee4e-bf1e-4f74-8237-c5e9b6e8f6d3",
            "3VW1W21KIBM312176",
            "VEHICLE",
            "Jhonn Doe",
            JETTA_DESCRIPTION,
        ),
        seed_asset(
            "ab3af1a9-6d81-4be8-94f8-cd1667a894cb",
            "157590103000100120006906040003",
            "REAL_ESTATE",
            "Donald Trump",
            WHITE_HOUSE_DESCRIPTION,
        ),
    ]
}

/// Store every seed asset. Stops at the first failure; assets written
/// before it stay written.
pub fn seed_ledger(store: &mut impl LedgerStore) -> ChaincodeResult<usize> {
    let assets = seed_assets();
    for asset in &assets {
        store.put(&asset.id, asset.to_bytes()?)?;
        tracing::debug!(id = %asset.id, "Seeded asset");
    }
    tracing::info!(count = assets.len(), "Ledger seeded");
    Ok(assets.len())
}
