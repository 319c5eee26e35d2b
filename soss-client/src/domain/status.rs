//! Station operational status tiers.

use std::fmt;

use serde::Serialize;

/// Fuel availability as reported by SOSS for one pressure tier.
///
/// Tier semantics follow the SOSS 3.x status definitions:
///
/// - **Online**: station can deliver SOC > 95%; boost compressor, high
///   pressure storage, chiller, H2 source and POS all online.
/// - **Limited**: station can still deliver fuel but SOC <= 95%.
/// - **Offline**: station cannot deliver fuel.
/// - **Unknown**: status not reported, or not recognized.
///
/// # Examples
///
/// ```
/// use soss_client::domain::StationStatus;
///
/// assert_eq!(StationStatus::parse("online"), StationStatus::Online);
/// assert_eq!(StationStatus::parse(" Limited "), StationStatus::Limited);
///
/// // Anything unrecognized falls back to Unknown
/// assert_eq!(StationStatus::parse("invalidtag"), StationStatus::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Online,
    Limited,
    Offline,
    Unknown,
}

impl StationStatus {
    /// All variants, in tier order.
    pub const ALL: [StationStatus; 4] = [
        StationStatus::Online,
        StationStatus::Limited,
        StationStatus::Offline,
        StationStatus::Unknown,
    ];

    /// Parse an upstream status string.
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Unrecognized
    /// values map to `Unknown` rather than failing.
    pub fn parse(s: &str) -> Self {
        Self::try_parse(s).unwrap_or(StationStatus::Unknown)
    }

    /// Parse an upstream status string, returning `None` if unrecognized.
    pub fn try_parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
    }

    /// The wire form of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Online => "online",
            StationStatus::Limited => "limited",
            StationStatus::Offline => "offline",
            StationStatus::Unknown => "unknown",
        }
    }

    /// Whether the station can dispense at this tier at all.
    pub fn can_dispense(&self) -> bool {
        matches!(self, StationStatus::Online | StationStatus::Limited)
    }
}

impl fmt::Display for StationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
