use chrono::SecondsFormat;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Ledger keys are the asset ids, stored verbatim.
pub type AssetId = String;

/// Render a timestamp the way event dates are stored: RFC 3339, second
/// precision, `Z` offset. Lexicographic order matches chronological order.
pub fn format_event_date(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}
