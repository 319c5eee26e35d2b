//! SOSS (Station Operational Status System) client.
//!
//! This module fetches hydrogen station data from two CAFCP services:
//!
//! - the SOSS JSON feeds, which give live H35/H70 status for every station
//!   plus any operator messages
//! - the CAFCP station detail endpoint, which returns the rendered station
//!   page as an HTML fragment wrapped in JSON
//!
//! Key characteristics of the upstream data:
//! - Every SOSS value is a string, including timestamps (Unix seconds)
//! - Status titles carry a "Status - " prefix
//! - Station page fields are only identifiable by their table row position

mod client;
mod convert;
mod error;
mod extract;
mod mock;
mod transport;
mod types;

pub use client::{SossClient, SossConfig};
pub use convert::{parse_station, strip_title_prefix};
pub use error::{ErrorKind, SossError};
pub use extract::{TableFields, extract_table_fields, trim_or_empty};
pub use mock::MockTransport;
pub use transport::{HttpTransport, Transport};
pub use types::{
    Location, MessageIndexNode, MessageNode, NodeRecord, StationDetailsResponse, StatusNode,
};
