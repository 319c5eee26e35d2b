//! Domain types for hydrogen station data.
//!
//! These are the validated records handed to callers. Raw upstream payloads
//! live in `soss::types` and are converted into these types.

mod station;
mod status;

pub use station::{Station, StationStaticDetail};
pub use status::StationStatus;
