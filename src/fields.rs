//! Field-resolution helpers shared by every rule.
//!
//! Payloads are untrusted and partially populated by design: different OS
//! versions fill different subsets of fields for the same event id. Every
//! operation here is therefore total -- missing or malformed input resolves
//! to an empty/absent sentinel, never an error.

use jiff::civil;
use jiff::{Timestamp, tz::TimeZone};
use serde::Serialize;

use crate::raw_event::Payload;

/// Value for `key`, or the empty string when the key is not present.
pub fn resolve(payload: &Payload, key: &str) -> String {
    payload.get(key).unwrap_or("").to_string()
}

/// First non-missing value among `keys`, in order; empty string when none is
/// present. Used when the same logical field is named differently across
/// event schema versions.
pub fn resolve_first(payload: &Payload, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| payload.get(key))
        .unwrap_or("")
        .to_string()
}

/// Composes two payload fields into one identity string.
///
/// Both present: `key2 + separator + key1` when `reverse` is set, otherwise
/// `key1 + separator + key2`. Exactly one present: that value alone, no
/// separator. Neither present: `default`.
///
/// The standard idiom for `domain\user` identities:
/// `compose_pair(payload, "SubjectUserName", "SubjectDomainName", "\\", true, "")`.
pub fn compose_pair(
    payload: &Payload,
    key1: &str,
    key2: &str,
    separator: &str,
    reverse: bool,
    default: &str,
) -> String {
    match (payload.get(key1), payload.get(key2)) {
        (Some(first), Some(second)) => {
            if reverse {
                format!("{second}{separator}{first}")
            } else {
                format!("{first}{separator}{second}")
            }
        }
        (Some(value), None) | (None, Some(value)) => value.to_string(),
        (None, None) => default.to_string(),
    }
}

/// Conditional field substitution.
///
/// Returns `replacement` when `current_action` equals `trigger` exactly
/// (ordinal, case-sensitive), else `current_value` unchanged.
///
/// Certain event sub-types repurpose normally-unused payload fields to carry
/// the real value -- an "object was moved" record keeps the live
/// distinguished name in `NewObjectDN` while the field that normally holds
/// it is stale for that sub-type.
pub fn substitute_when(
    current_action: &str,
    trigger: &str,
    current_value: &str,
    replacement: &str,
) -> String {
    if current_action == trigger {
        replacement.to_string()
    } else {
        current_value.to_string()
    }
}

/// Directory-service attribute operation, decoded from the `OperationType`
/// message-table code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationKind {
    Added,
    Deleted,
    Unknown,
}

const OPERATION_VALUE_ADDED: &str = "%%14674";
const OPERATION_VALUE_DELETED: &str = "%%14675";

/// Maps a raw `OperationType` code to an [`OperationKind`]. Unrecognized or
/// missing input yields `Unknown`.
pub fn operation_kind(raw: &str) -> OperationKind {
    match raw.trim() {
        OPERATION_VALUE_ADDED => OperationKind::Added,
        OPERATION_VALUE_DELETED => OperationKind::Deleted,
        _ => OperationKind::Unknown,
    }
}

/// Culture-invariant parse of an ambiguous date/time string.
///
/// An explicit offset is honored; otherwise the value is assumed to be in
/// system-local time. The result is always a UTC instant. Returns `None` on
/// failure.
pub fn parse_loose_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = value.parse::<civil::DateTime>() {
        return datetime
            .to_zoned(TimeZone::system())
            .ok()
            .map(|zoned| zoned.timestamp());
    }

    if let Ok(date) = value.parse::<civil::Date>() {
        return date
            .to_zoned(TimeZone::system())
            .ok()
            .map(|zoned| zoned.timestamp());
    }

    None
}

/// Recombines an event schema's split date/time pair into one UTC instant.
///
/// Tries `"date time"` first, then `"dateTtimeZ"`. Returns `None` when both
/// parts are missing or every parse attempt fails.
pub fn parse_split_timestamp(date_part: &str, time_part: &str) -> Option<Timestamp> {
    let date_part = date_part.trim();
    let time_part = time_part.trim();
    if date_part.is_empty() && time_part.is_empty() {
        return None;
    }

    parse_loose_timestamp(&format!("{date_part} {time_part}"))
        .or_else(|| parse_loose_timestamp(&format!("{date_part}T{time_part}Z")))
}
