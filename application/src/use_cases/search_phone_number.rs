//! Search Phone Number use case
//!
//! The gateway's single operation: forward a request to the provider and
//! flatten the answer into a [`LookupResult`].

use crate::config::GatewayConfig;
use crate::ports::lookup_provider::{
    LookupProvider, ProviderError, ProviderQuery, ProviderResponse,
};
use callerid_domain::{LookupRequest, LookupResult};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// The only failure a gateway caller ever sees
///
/// The cause is logged at `error` and never returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("An error occurred")]
    LookupFailed,
}

/// Use case for looking up a phone number through the provider
pub struct SearchPhoneNumberUseCase<P: LookupProvider + ?Sized + 'static> {
    provider: Arc<P>,
    installation_id: String,
    provider_timeout: Option<Duration>,
}

impl<P: LookupProvider + ?Sized + 'static> SearchPhoneNumberUseCase<P> {
    pub fn new(provider: Arc<P>, config: &GatewayConfig) -> Self {
        Self {
            provider,
            installation_id: config.installation_id.clone(),
            provider_timeout: config.provider_timeout,
        }
    }

    /// Execute the lookup
    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupResult, SearchError> {
        debug!(
            "Lookup request: countryCode={} phoneNumber={}",
            request.country_code, request.phone_number
        );

        let query = ProviderQuery::new(
            request.phone_number.clone(),
            request.country_code.clone(),
            self.installation_id.clone(),
        );

        let response = match self.query_provider(&query).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error occurred: {}", e);
                return Err(SearchError::LookupFailed);
            }
        };

        if let Some(raw) = response.raw() {
            debug!("Provider response: {}", raw);
        }

        let result = LookupResult {
            name: response.name(),
            alternate_name: response.alternate_name(),
            addresses: response.addresses(),
            email: response.email(),
            country_details: response.country_details(),
        };

        info!(
            "Lookup completed with {} address(es)",
            result.addresses.len()
        );
        Ok(result)
    }

    async fn query_provider(
        &self,
        query: &ProviderQuery,
    ) -> Result<Box<dyn ProviderResponse>, ProviderError> {
        match self.provider_timeout {
            Some(limit) => tokio::time::timeout(limit, self.provider.search(query))
                .await
                .map_err(|_| ProviderError::Timeout)?,
            None => self.provider.search(query).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use callerid_domain::{Address, CountryDetails};
    use serde_json::json;
    use std::sync::Mutex;

    // === Mock implementations ===

    #[derive(Clone)]
    struct StaticResponse(LookupResult);

    impl ProviderResponse for StaticResponse {
        fn name(&self) -> Option<String> {
            self.0.name.clone()
        }

        fn alternate_name(&self) -> Option<String> {
            self.0.alternate_name.clone()
        }

        fn addresses(&self) -> Vec<Address> {
            self.0.addresses.clone()
        }

        fn email(&self) -> Option<String> {
            self.0.email.clone()
        }

        fn country_details(&self) -> Option<CountryDetails> {
            self.0.country_details.clone()
        }
    }

    enum Behavior {
        Answer(LookupResult),
        Fail(fn() -> ProviderError),
        Hang,
    }

    struct MockProvider {
        behavior: Behavior,
        queries: Mutex<Vec<ProviderQuery>>,
    }

    impl MockProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                queries: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LookupProvider for MockProvider {
        async fn search(
            &self,
            query: &ProviderQuery,
        ) -> Result<Box<dyn ProviderResponse>, ProviderError> {
            self.queries.lock().unwrap().push(query.clone());
            match &self.behavior {
                Behavior::Answer(result) => Ok(Box::new(StaticResponse(result.clone()))),
                Behavior::Fail(make) => Err(make()),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(ProviderError::RequestFailed("unreachable".to_string()))
                }
            }
        }
    }

    // === Helpers ===

    fn jane_doe() -> LookupResult {
        serde_json::from_value(json!({
            "name": "Jane Doe",
            "alternateName": null,
            "email": null,
            "addresses": [
                {"city": "Mumbai", "countryCode": "IN", "timeZone": "Asia/Kolkata"}
            ],
            "countryDetails": {
                "name": "India",
                "native": "भारत",
                "phone": [91],
                "continent": "AS",
                "capital": "New Delhi",
                "currency": ["INR"],
                "languages": ["hi", "en"],
                "flag": "🇮🇳"
            }
        }))
        .unwrap()
    }

    fn request() -> LookupRequest {
        LookupRequest::new("IN", "9876543210")
    }

    // === Tests ===

    #[tokio::test]
    async fn test_success_passes_fields_through() {
        let provider = MockProvider::new(Behavior::Answer(jane_doe()));
        let use_case = SearchPhoneNumberUseCase::new(provider, &GatewayConfig::new("install-1"));

        let result = use_case.execute(&request()).await.unwrap();
        assert_eq!(result, jane_doe());
    }

    #[tokio::test]
    async fn test_query_combines_request_and_installation_id() {
        let provider = MockProvider::new(Behavior::Answer(jane_doe()));
        let use_case =
            SearchPhoneNumberUseCase::new(Arc::clone(&provider), &GatewayConfig::new("install-1"));

        use_case.execute(&request()).await.unwrap();

        let queries = provider.queries.lock().unwrap();
        assert_eq!(
            queries.as_slice(),
            &[ProviderQuery::new("9876543210", "IN", "install-1")]
        );
    }

    #[tokio::test]
    async fn test_no_server_side_validation() {
        let provider = MockProvider::new(Behavior::Answer(LookupResult::default()));
        let use_case =
            SearchPhoneNumberUseCase::new(Arc::clone(&provider), &GatewayConfig::new("id"));

        let result = use_case.execute(&LookupRequest::new("", "1")).await;
        assert!(result.is_ok());
        assert_eq!(provider.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_every_provider_error_collapses_to_lookup_failed() {
        let failures: [fn() -> ProviderError; 5] = [
            || ProviderError::ConnectionError("connection refused".to_string()),
            || ProviderError::Timeout,
            || ProviderError::Unauthorized("bad installation id".to_string()),
            || ProviderError::MalformedResponse("expected value".to_string()),
            || ProviderError::RequestFailed("status 503".to_string()),
        ];

        for make in failures {
            let provider = MockProvider::new(Behavior::Fail(make));
            let use_case = SearchPhoneNumberUseCase::new(provider, &GatewayConfig::new("id"));

            let err = use_case.execute(&request()).await.unwrap_err();
            assert_eq!(err, SearchError::LookupFailed);
            assert_eq!(err.to_string(), "An error occurred");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_provider_timeout_is_a_lookup_failure() {
        let provider = MockProvider::new(Behavior::Hang);
        let config = GatewayConfig::new("id").with_provider_timeout(Duration::from_secs(5));
        let use_case = SearchPhoneNumberUseCase::new(provider, &config);

        let err = use_case.execute(&request()).await.unwrap_err();
        assert_eq!(err, SearchError::LookupFailed);
    }

    #[tokio::test]
    async fn test_same_request_twice_gives_same_result() {
        let provider = MockProvider::new(Behavior::Answer(jane_doe()));
        let use_case =
            SearchPhoneNumberUseCase::new(Arc::clone(&provider), &GatewayConfig::new("id"));

        let first = use_case.execute(&request()).await.unwrap();
        let second = use_case.execute(&request()).await.unwrap();
        assert_eq!(first, second);
        // Nothing is cached: both calls reach the provider
        assert_eq!(provider.queries.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_works_behind_trait_object() {
        let provider: Arc<dyn LookupProvider> = MockProvider::new(Behavior::Answer(jane_doe()));
        let use_case = SearchPhoneNumberUseCase::new(provider, &GatewayConfig::new("id"));
        assert!(use_case.execute(&request()).await.is_ok());
    }
}
