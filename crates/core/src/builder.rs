//! Construction of a new [`Asset`] and its seed event from `create`
//! arguments.
//!
//! Callers run [`crate::validation::validate_create_args`] first; the
//! builder only guards against indexing past the end.

use chrono::Utc;

use crate::error::CoreError;
use crate::record::{Asset, Event};
use crate::types::{format_event_date, Timestamp};
use crate::validation::{
    is_blank, ARG_ASSET_TYPE, ARG_BUSINESS_PROVIDER_ID, ARG_DESCRIPTION, ARG_ENCODED_FILES,
    ARG_ENCODED_IMAGE, ARG_ID, ARG_OWNER_NAME, ARG_SERIAL_NUMBER, CREATE_MIN_ARGS,
};

/// Summary and description of the event attached at creation.
pub const SEED_EVENT_LABEL: &str = "CREATED";

/// Build an asset stamped with the current time.
pub fn build_asset(args: &[String]) -> Result<Asset, CoreError> {
    build_asset_at(args, Utc::now())
}

/// Build an asset whose seed event is dated `now`.
pub fn build_asset_at(args: &[String], now: Timestamp) -> Result<Asset, CoreError> {
    if args.len() < CREATE_MIN_ARGS {
        return Err(CoreError::ArgumentCount {
            expected: format!("at least {CREATE_MIN_ARGS}"),
            actual: args.len(),
        });
    }

    let seed = Event {
        summary: SEED_EVENT_LABEL.to_string(),
        description: SEED_EVENT_LABEL.to_string(),
        date: format_event_date(now),
        business_provider_id: args[ARG_BUSINESS_PROVIDER_ID].clone(),
        encoded_image: optional_arg(args, ARG_ENCODED_IMAGE),
        encoded_files: optional_arg(args, ARG_ENCODED_FILES),
    };

    Ok(Asset {
        id: args[ARG_ID].clone(),
        serial_number: args[ARG_SERIAL_NUMBER].clone(),
        asset_type: args[ARG_ASSET_TYPE].clone(),
        owner_name: args[ARG_OWNER_NAME].clone(),
        description: args[ARG_DESCRIPTION].clone(),
        events: vec![seed],
    })
}

/// `None` when the argument is missing or blank.
fn optional_arg(args: &[String], index: usize) -> Option<String> {
    args.get(index).filter(|v| !is_blank(v)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn base() -> Vec<String> {
        args(&["create", "X1", "SN1", "VEHICLE", "Alice", "desc", "BP1"])
    }

    fn fixed_now() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap()
    }

    #[test]
    fn builds_asset_with_single_seed_event() {
        let asset = build_asset_at(&base(), fixed_now()).unwrap();

        assert_eq!(asset.id, "X1");
        assert_eq!(asset.serial_number, "SN1");
        assert_eq!(asset.asset_type, "VEHICLE");
        assert_eq!(asset.owner_name, "Alice");
        assert_eq!(asset.description, "desc");
        assert_eq!(asset.events.len(), 1);

        let seed = &asset.events[0];
        assert_eq!(seed.summary, "CREATED");
        assert_eq!(seed.description, "CREATED");
        assert_eq!(seed.date, "2024-05-17T12:30:00Z");
        assert_eq!(seed.business_provider_id, "BP1");
        assert_eq!(seed.encoded_image, None);
        assert_eq!(seed.encoded_files, None);
    }

    #[test]
    fn optional_payloads_are_set_when_present() {
        let mut a = base();
        a.push("imagedata".into());
        a.push("filedata".into());
        let seed = build_asset_at(&a, fixed_now()).unwrap().events.remove(0);
        assert_eq!(seed.encoded_image.as_deref(), Some("imagedata"));
        assert_eq!(seed.encoded_files.as_deref(), Some("filedata"));
    }

    #[test]
    fn blank_image_with_files_leaves_image_unset() {
        let mut a = base();
        a.push("  ".into());
        a.push("filedata".into());
        let seed = build_asset_at(&a, fixed_now()).unwrap().events.remove(0);
        assert_eq!(seed.encoded_image, None);
        assert_eq!(seed.encoded_files.as_deref(), Some("filedata"));
    }

    #[test]
    fn image_only_leaves_files_unset() {
        let mut a = base();
        a.push("imagedata".into());
        let seed = build_asset_at(&a, fixed_now()).unwrap().events.remove(0);
        assert_eq!(seed.encoded_image.as_deref(), Some("imagedata"));
        assert_eq!(seed.encoded_files, None);
    }

    #[test]
    fn round_trips_through_stored_bytes() {
        for extra in [vec![], vec!["img"], vec!["", "files"], vec!["img", "files"]] {
            let mut a = base();
            a.extend(extra.iter().map(|s| s.to_string()));
            let asset = build_asset_at(&a, fixed_now()).unwrap();
            let decoded = Asset::from_bytes(&asset.to_bytes().unwrap()).unwrap();
            assert_eq!(decoded, asset);
        }
    }

    #[test]
    fn short_argument_list_is_an_error_not_a_panic() {
        assert_matches!(
            build_asset(&args(&["create", "X1"])),
            Err(CoreError::ArgumentCount { actual: 2, .. })
        );
    }
}
