//! Station records returned to callers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::StationStatus;

/// Live status of one refueling station.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// The station identifier in SOSS.
    pub id: String,
    /// The friendly name of the station.
    pub name: String,
    /// The H35 status level.
    pub status35: StationStatus,
    /// The H70 status level.
    pub status70: StationStatus,
    /// When the data was last updated in SOSS.
    pub updated: DateTime<Utc>,
    /// Any message posted on the station.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Static information about a station, from the CAFCP station page.
///
/// Numeric location fields are `NaN` when upstream omits them or sends
/// something that is not a number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationStaticDetail {
    pub longitude: f64,
    pub latitude: f64,
    pub country: String,
    /// Upstream calls this `province`.
    pub state: String,
    pub city: String,
    pub street: String,
    pub zip: f64,
    /// Renewable share of the station's hydrogen, as a whole percentage.
    /// Expected to be 0-100 but not checked.
    pub renewable: u32,
    /// The type of station (e.g. retail).
    #[serde(rename = "type")]
    pub station_type: String,
    pub status: String,
    /// When the station opened, or is expected to open.
    pub open_date: String,
    /// The pressure levels the station can deliver.
    pub pressure: String,
    /// How the station sources its hydrogen.
    pub source: String,
    pub hours: String,
    /// The operator's website.
    pub website: String,
    /// Customer support number. Keeps any markup from the page (e.g. `<br>`).
    pub phone: String,
}
