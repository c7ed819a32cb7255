//! HTTP client for the lookup gateway
//!
//! Posts a [`LookupRequest`] to `/api/search` and decodes the answer.

use async_trait::async_trait;
use callerid_application::{ClientConfig, LookupApi, LookupApiError};
use callerid_domain::{LookupRequest, LookupResult};
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!("callerid/", env!("CARGO_PKG_VERSION"));

/// [`LookupApi`] adapter that talks to a running gateway over HTTP
pub struct HttpLookupApi {
    client: reqwest::Client,
    search_url: String,
}

impl HttpLookupApi {
    pub fn new(config: &ClientConfig) -> Result<Self, LookupApiError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LookupApiError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            search_url: config.search_url(),
        })
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

#[async_trait]
impl LookupApi for HttpLookupApi {
    async fn search(&self, request: &LookupRequest) -> Result<LookupResult, LookupApiError> {
        debug!("POST {}", self.search_url);

        let response = self
            .client
            .post(&self.search_url)
            .json(request)
            .send()
            .await
            .map_err(|e| LookupApiError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupApiError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LookupApiError::InvalidBody(e.to_string()))?;

        // A 2xx body can still carry the gateway's error marker
        if let Some(error) = body.get("error") {
            let message = error.as_str().unwrap_or("unknown error").to_string();
            return Err(LookupApiError::Rejected(message));
        }

        serde_json::from_value(body).map_err(|e| LookupApiError::InvalidBody(e.to_string()))
    }
}
