//! Hydrogen refueling station client.
//!
//! Fetches live operational status and static details for California
//! hydrogen stations from the CAFCP Station Operational Status System.

pub mod domain;
pub mod soss;
