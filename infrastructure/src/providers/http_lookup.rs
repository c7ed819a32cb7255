//! HTTP lookup provider
//!
//! Queries the provider's search API with the installation identifier as a
//! bearer token and exposes the first matching record through
//! [`ProviderResponse`].

use super::country_directory::CountryDirectory;
use async_trait::async_trait;
use callerid_application::{LookupProvider, ProviderError, ProviderQuery, ProviderResponse};
use callerid_domain::{Address, CountryDetails};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const USER_AGENT: &str = concat!("callerid/", env!("CARGO_PKG_VERSION"));

/// Search type the provider uses for phone numbers
const SEARCH_TYPE_PHONE: &str = "4";

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    data: Option<Vec<SearchRecord>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchRecord {
    name: Option<String>,
    alt_name: Option<String>,
    // Either list may be `null`
    addresses: Option<Vec<Address>>,
    internet_addresses: Option<Vec<InternetAddress>>,
}

#[derive(Debug, Deserialize)]
struct InternetAddress {
    id: Option<String>,
    service: Option<String>,
}

/// Answer from [`HttpLookupProvider`]
#[derive(Debug)]
pub struct HttpProviderResponse {
    record: SearchRecord,
    country_details: Option<CountryDetails>,
    raw: Value,
}

impl HttpProviderResponse {
    fn from_raw(
        raw: Value,
        query: &ProviderQuery,
        directory: &CountryDirectory,
    ) -> Result<Self, ProviderError> {
        let envelope: SearchEnvelope = serde_json::from_value(raw.clone())
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        let record = envelope
            .data
            .into_iter()
            .flatten()
            .next()
            .unwrap_or_default();

        // Prefer the region the provider attributes the number to
        let region = record
            .addresses
            .iter()
            .flatten()
            .next()
            .and_then(Address::country_code)
            .unwrap_or(query.country_code.as_str());
        let country_details = directory.get(region).cloned();

        Ok(Self {
            record,
            country_details,
            raw,
        })
    }
}

impl ProviderResponse for HttpProviderResponse {
    fn name(&self) -> Option<String> {
        self.record.name.clone()
    }

    fn alternate_name(&self) -> Option<String> {
        self.record.alt_name.clone()
    }

    fn addresses(&self) -> Vec<Address> {
        self.record.addresses.clone().unwrap_or_default()
    }

    fn email(&self) -> Option<String> {
        self.record
            .internet_addresses
            .iter()
            .flatten()
            .find(|a| a.service.as_deref() == Some("email"))
            .and_then(|a| a.id.clone())
    }

    fn country_details(&self) -> Option<CountryDetails> {
        self.country_details.clone()
    }

    fn raw(&self) -> Option<&Value> {
        Some(&self.raw)
    }
}

/// [`LookupProvider`] backed by the provider's HTTP search API
pub struct HttpLookupProvider {
    client: reqwest::Client,
    base_url: String,
    directory: Arc<CountryDirectory>,
}

impl HttpLookupProvider {
    pub fn new(
        base_url: impl Into<String>,
        directory: Arc<CountryDirectory>,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ProviderError::ConnectionError(e.to_string()))?;
        Ok(Self::with_client(client, base_url, directory))
    }

    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        directory: Arc<CountryDirectory>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            directory,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/v2/search", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LookupProvider for HttpLookupProvider {
    async fn search(&self, query: &ProviderQuery) -> Result<Box<dyn ProviderResponse>, ProviderError> {
        let url = self.search_url();
        debug!("Querying provider at {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", query.number.as_str()),
                ("countryCode", query.country_code.as_str()),
                ("type", SEARCH_TYPE_PHONE),
                ("locAddr", ""),
                ("encoding", "json"),
            ])
            .bearer_auth(&query.installation_id)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized(status.to_string()));
        }
        if !status.is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "HTTP error: {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let raw: Value = response.json().await.map_err(map_transport_error)?;
        let answer = HttpProviderResponse::from_raw(raw, query, &self.directory)?;
        Ok(Box::new(answer))
    }
}

fn map_transport_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else if e.is_connect() {
        ProviderError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        ProviderError::MalformedResponse(e.to_string())
    } else {
        ProviderError::RequestFailed(e.to_string())
    }
}
