//! SOSS / CAFCP client.
//!
//! Provides the two read operations: live status for every station, and
//! static details for a single station.

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::domain::{Station, StationStaticDetail};

use super::convert::{apply_messages, match_message_index, parse_station};
use super::error::SossError;
use super::extract::station_detail;
use super::transport::{HttpTransport, Transport};
use super::types::{MessageFeed, MessageIndexFeed, StationDetailsResponse, StatusFeed};

/// Default base URL for the SOSS status feeds (CAFCP mobile site).
const DEFAULT_MOBILE_BASE_URL: &str = "https://m.cafcp.org/nocache";

/// Default base URL for the CAFCP station detail pages.
const DEFAULT_SITE_BASE_URL: &str = "https://cafcp.org";

/// Configuration for the SOSS client.
#[derive(Debug, Clone)]
pub struct SossConfig {
    /// Base URL for the status and message feeds
    pub mobile_base_url: String,
    /// Base URL for the station detail endpoint
    pub site_base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl SossConfig {
    /// Create a config pointing at the production CAFCP endpoints.
    pub fn new() -> Self {
        Self {
            mobile_base_url: DEFAULT_MOBILE_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!("soss-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set a custom status feed base URL (for testing).
    pub fn with_mobile_base_url(mut self, url: impl Into<String>) -> Self {
        self.mobile_base_url = url.into();
        self
    }

    /// Set a custom station detail base URL (for testing).
    pub fn with_site_base_url(mut self, url: impl Into<String>) -> Self {
        self.site_base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn status_url(&self) -> String {
        join_url(&self.mobile_base_url, "soss2-json-status")
    }

    fn message_index_url(&self) -> String {
        join_url(&self.mobile_base_url, "soss2-json-station-message")
    }

    fn message_url(&self, station: &str) -> String {
        join_url(
            &self.mobile_base_url,
            &format!("soss2-station-message-output/{station}"),
        )
    }

    fn details_url(&self, id: &str) -> String {
        join_url(&self.site_base_url, &format!("cafcp-station-details/{id}"))
    }
}

impl Default for SossConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Client for the SOSS status feeds and CAFCP station details.
///
/// Every call is a fresh fetch; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SossClient<T = HttpTransport> {
    transport: T,
    config: SossConfig,
}

impl SossClient<HttpTransport> {
    /// Create a client that talks to the network over HTTP.
    pub fn new(config: SossConfig) -> Result<Self, SossError> {
        let transport = HttpTransport::new(config.timeout_secs, &config.user_agent)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> SossClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T, config: SossConfig) -> Self {
        Self { transport, config }
    }

    /// The client's configuration.
    pub fn config(&self) -> &SossConfig {
        &self.config
    }

    /// Get the live status of every station in SOSS.
    ///
    /// Stations listed in the message index get their message attached.
    /// Message fetches run concurrently, one per index entry; results are
    /// applied in index order once all of them have completed. Any failed
    /// fetch fails the whole call.
    pub async fn get_status(&self) -> Result<Vec<Station>, SossError> {
        let status: StatusFeed = self.fetch_json(&self.config.status_url()).await?;
        let index: MessageIndexFeed = self.fetch_json(&self.config.message_index_url()).await?;

        let mut stations = status
            .iter()
            .map(|record| parse_station(&record.node))
            .collect::<Result<Vec<_>, _>>()?;

        let pending = match_message_index(&stations, &index);
        debug!(
            index_entries = index.len(),
            matched = pending.len(),
            "fetching station messages"
        );

        let messages = try_join_all(
            pending
                .into_iter()
                .map(|(pos, id)| async move { Ok::<_, SossError>((pos, self.fetch_message(&id).await?)) }),
        )
        .await?;

        let message_count = messages.len();
        apply_messages(&mut stations, messages);

        info!(
            stations = stations.len(),
            messages = message_count,
            "fetched station status"
        );
        Ok(stations)
    }

    /// Get the static details of a station from its CAFCP page.
    pub async fn get_station_static_details(
        &self,
        id: &str,
    ) -> Result<StationStaticDetail, SossError> {
        let data: StationDetailsResponse = self.fetch_json(&self.config.details_url(id)).await?;
        let detail = station_detail(&data.location, &data.node_view)?;

        info!(station = id, renewable = detail.renewable, "fetched station details");
        Ok(detail)
    }

    /// Fetch the body of the first message posted for a station.
    async fn fetch_message(&self, station: &str) -> Result<String, SossError> {
        let feed: MessageFeed = self.fetch_json(&self.config.message_url(station)).await?;

        feed.into_iter()
            .next()
            .map(|record| record.node.body)
            .ok_or_else(|| SossError::MissingMessageData {
                station: station.to_string(),
            })
    }

    async fn fetch_json<D: DeserializeOwned>(&self, url: &str) -> Result<D, SossError> {
        let body = self.transport.get(url).await?;
        serde_json::from_str(&body).map_err(|e| SossError::json(e, &body))
    }
}
