//! HTTP transport for the SOSS client.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use super::error::SossError;

/// Fetches a URL and returns the response body as text.
///
/// This abstraction allows the client to be tested against fixture data.
pub trait Transport {
    /// GET `url`, failing on network errors and non-2xx responses.
    fn get(&self, url: &str) -> impl Future<Output = Result<String, SossError>> + Send;
}

/// Transport backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the given per-request timeout and user agent.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SossError> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, SossError> {
        debug!(url, "fetching");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SossError::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}
