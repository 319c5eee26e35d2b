//! Conversion from SOSS status DTOs to domain types.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::{Station, StationStatus};

use super::error::SossError;
use super::types::{MessageIndexNode, NodeRecord, StatusNode};

/// Prefix SOSS puts in front of every status title.
const TITLE_PREFIX: &str = "Status - ";

/// Convert one status node into a `Station`.
///
/// The `message` is left empty; it is filled in from the message feeds.
pub fn parse_station(node: &StatusNode) -> Result<Station, SossError> {
    Ok(Station {
        id: node.station.clone(),
        name: strip_title_prefix(&node.title),
        status35: parse_status(&node.station, &node.status35),
        status70: parse_status(&node.station, &node.status70),
        updated: parse_modified(&node.station, &node.modified)?,
        message: None,
    })
}

/// Remove the first occurrence of `"Status - "` from a title.
pub fn strip_title_prefix(title: &str) -> String {
    title.replacen(TITLE_PREFIX, "", 1)
}

/// Parse a status string, warning when it falls back to `Unknown`.
fn parse_status(station: &str, raw: &str) -> StationStatus {
    StationStatus::try_parse(raw).unwrap_or_else(|| {
        warn!(station, status = raw, "unrecognized station status");
        StationStatus::Unknown
    })
}

/// Parse a decimal Unix-seconds string into a UTC timestamp.
///
/// Fractional seconds are kept to millisecond precision.
pub fn parse_modified(station: &str, raw: &str) -> Result<DateTime<Utc>, SossError> {
    let invalid = || SossError::InvalidTimestamp {
        station: station.to_string(),
        value: raw.to_string(),
    };

    let secs: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !secs.is_finite() {
        return Err(invalid());
    }

    let millis = (secs * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(invalid());
    }

    DateTime::from_timestamp_millis(millis as i64).ok_or_else(invalid)
}

/// Work out which stations need a message fetched.
///
/// Returns `(station index, station id)` for each message-index record that
/// matches a station, in index order. Matching takes the first station with
/// an equal id; records with no station are skipped.
pub fn match_message_index(
    stations: &[Station],
    index: &[NodeRecord<MessageIndexNode>],
) -> Vec<(usize, String)> {
    index
        .iter()
        .filter_map(|record| {
            let id = &record.node.station;
            match stations.iter().position(|s| &s.id == id) {
                Some(pos) => Some((pos, id.clone())),
                None => {
                    debug!(station = %id, "message index entry has no status record, skipping");
                    None
                }
            }
        })
        .collect()
}

/// Apply fetched messages to stations.
///
/// Messages are applied in order, so a later entry for the same station
/// replaces an earlier one.
pub fn apply_messages(stations: &mut [Station], messages: Vec<(usize, String)>) {
    for (pos, message) in messages {
        if let Some(station) = stations.get_mut(pos) {
            station.message = Some(message);
        }
    }
}
