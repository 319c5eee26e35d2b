//! SOSS and CAFCP response DTOs.
//!
//! These types map directly to the upstream JSON. Every SOSS feed is an array
//! of `{ "node": ... }` wrappers with all values encoded as strings. Fields we
//! don't use are still listed so the shape is documented in one place.

use serde::Deserialize;

/// Wrapper used by every SOSS list feed.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeRecord<T> {
    pub node: T,
}

/// One entry of `soss2-json-status`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusNode {
    /// SOSS station id.
    pub station: String,

    /// Display title, e.g. "Status - Diamond Bar".
    pub title: String,

    /// H35 status, e.g. "online".
    pub status35: String,

    /// H70 status.
    pub status70: String,

    /// Last modified time, as decimal Unix seconds.
    pub modified: String,

    pub enabled35: Option<String>,
    pub enabled70: Option<String>,
    pub fullhours: Option<String>,
    pub unknown: Option<String>,
    pub unknown35: Option<String>,
    pub unknown70: Option<String>,
    pub unknown_threshold: Option<String>,
}

/// One entry of `soss2-json-station-message`.
///
/// Only says *that* a station has a message; the body is fetched separately.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageIndexNode {
    pub station: String,
}

/// One entry of `soss2-station-message-output/{station}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageNode {
    /// The message text shown to drivers.
    pub body: String,

    #[serde(rename = "Nid")]
    pub nid_upper: Option<String>,
    pub nid: Option<String>,
    pub title: Option<String>,
    pub station_nid: Option<String>,
    pub display_date_range: Option<String>,
    pub edit: Option<String>,
    pub end_date_display: Option<String>,
    pub flagged: Option<String>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// Response from `cafcp-station-details/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDetailsResponse {
    pub location: Location,

    /// Rendered station page, as an HTML fragment.
    pub node_view: String,
}

/// Location block of the station details response.
///
/// All values are strings upstream, including the coordinates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Location {
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub postal_code: Option<String>,

    pub additional: Option<String>,
    pub country_name: Option<String>,
    pub is_primary: Option<String>,
    pub name: Option<String>,
    pub province_name: Option<String>,
    pub source: Option<String>,
}

pub type StatusFeed = Vec<NodeRecord<StatusNode>>;
pub type MessageIndexFeed = Vec<NodeRecord<MessageIndexNode>>;
pub type MessageFeed = Vec<NodeRecord<MessageNode>>;
