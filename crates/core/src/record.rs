//! Asset and event records and their stored JSON form.
//!
//! Field names here are the wire contract for bytes kept in the ledger.
//! Renaming any of them breaks every record already written.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::AssetId;

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// One tracked physical item, stored under its `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "uuid")]
    pub id: AssetId,
    pub serial_number: String,
    pub asset_type: String,
    pub owner_name: String,
    pub description: String,
    /// Chronological; only ever appended to.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub events: Vec<Event>,
}

impl Asset {
    /// Append an event to the history. The caller re-stores the whole asset
    /// under the same key.
    pub fn append_event(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Encode to the canonical stored form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CoreError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode bytes previously written by [`Asset::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A lifecycle occurrence attached to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub summary: String,
    pub description: String,
    /// RFC 3339, see [`crate::types::format_event_date`].
    pub date: String,
    pub business_provider_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_image: Option<String>,
    #[serde(
        default,
        rename = "attachment",
        skip_serializing_if = "Option::is_none"
    )]
    pub encoded_files: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Event>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Event>>::deserialize(deserializer)?.unwrap_or_default())
}
