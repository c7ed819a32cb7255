//! Gateway routes
//!
//! - `POST /api/search` runs one lookup
//! - `GET /api/health` answers liveness probes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use callerid_application::{LookupProvider, SearchError, SearchPhoneNumberUseCase};
use callerid_domain::{LookupRequest, LookupResult};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Shared state of the router, immutable after startup
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchPhoneNumberUseCase<dyn LookupProvider>>,
}

impl AppState {
    pub fn new(search: Arc<SearchPhoneNumberUseCase<dyn LookupProvider>>) -> Self {
        Self { search }
    }
}

/// Failure body of `POST /api/search`
struct ApiError(SearchError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

/// Build the gateway router with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/search", post(search))
        .route("/api/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn search(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<LookupResult>, ApiError> {
    state.search.execute(&request).await.map(Json).map_err(ApiError)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use callerid_application::{GatewayConfig, ProviderError, ProviderQuery, ProviderResponse};
    use callerid_domain::{Address, CountryDetails};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Mutex;
    use tower::ServiceExt;

    // -- Mock provider ---------------------------------------------------------

    struct Answer(LookupResult);

    impl ProviderResponse for Answer {
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

    struct MockProvider {
        answer: Option<LookupResult>,
        failure: fn() -> ProviderError,
        calls: Mutex<usize>,
    }

    impl MockProvider {
        fn answering(result: LookupResult) -> Arc<Self> {
            Arc::new(Self {
                answer: Some(result),
                failure: || ProviderError::RequestFailed("unused".to_string()),
                calls: Mutex::new(0),
            })
        }

        fn failing(failure: fn() -> ProviderError) -> Arc<Self> {
            Arc::new(Self {
                answer: None,
                failure,
                calls: Mutex::new(0),
            })
        }
    }

    #[async_trait]
    impl LookupProvider for MockProvider {
        async fn search(
            &self,
            _query: &ProviderQuery,
        ) -> Result<Box<dyn ProviderResponse>, ProviderError> {
            *self.calls.lock().unwrap() += 1;
            match &self.answer {
                Some(result) => Ok(Box::new(Answer(result.clone()))),
                None => Err((self.failure)()),
            }
        }
    }

    // -- Helpers ---------------------------------------------------------------

    fn app(provider: Arc<MockProvider>) -> Router {
        let provider: Arc<dyn LookupProvider> = provider;
        let use_case = SearchPhoneNumberUseCase::new(provider, &GatewayConfig::new("install-1"));
        build_router(AppState::new(Arc::new(use_case)))
    }

    fn jane_doe() -> Value {
        json!({
            "name": "Jane Doe",
            "alternateName": null,
            "addresses": [
                {"city": "Mumbai", "countryCode": "IN", "timeZone": "Asia/Kolkata"}
            ],
            "email": null,
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
        })
    }

    fn search_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/search")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    const IN_REQUEST: &str = r#"{"countryCode":"IN","phoneNumber":"9876543210"}"#;

    // -- Tests -----------------------------------------------------------------

    #[tokio::test]
    async fn test_search_returns_provider_fields_unchanged() {
        let result: LookupResult = serde_json::from_value(jane_doe()).unwrap();
        let resp = app(MockProvider::answering(result))
            .oneshot(search_request(IN_REQUEST))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, jane_doe());
    }

    #[tokio::test]
    async fn test_success_body_has_exactly_five_keys() {
        let resp = app(MockProvider::answering(LookupResult::default()))
            .oneshot(search_request(IN_REQUEST))
            .await
            .unwrap();

        let body = body_json(resp).await;
        let object = body.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["addresses", "alternateName", "countryDetails", "email", "name"]
        );
        assert!(body["addresses"].is_array());
    }

    #[tokio::test]
    async fn test_provider_failures_give_generic_500() {
        let failures: [fn() -> ProviderError; 3] = [
            || ProviderError::Timeout,
            || ProviderError::ConnectionError("connect to 10.0.0.7 refused".to_string()),
            || ProviderError::Unauthorized("installation id revoked".to_string()),
        ];

        for failure in failures {
            let resp = app(MockProvider::failing(failure))
                .oneshot(search_request(IN_REQUEST))
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = body_json(resp).await;
            assert_eq!(body, json!({"error": "An error occurred"}));
            let text = body.to_string();
            assert!(!text.contains("Timeout"));
            assert!(!text.contains("10.0.0.7"));
        }
    }

    #[tokio::test]
    async fn test_same_request_twice_gives_same_body() {
        let result: LookupResult = serde_json::from_value(jane_doe()).unwrap();
        let provider = MockProvider::answering(result);
        let router = app(Arc::clone(&provider));

        let first = router.clone().oneshot(search_request(IN_REQUEST)).await.unwrap();
        let second = router.oneshot(search_request(IN_REQUEST)).await.unwrap();

        assert_eq!(body_json(first).await, body_json(second).await);
        assert_eq!(*provider.calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_short_number_is_forwarded_without_validation() {
        let provider = MockProvider::answering(LookupResult::default());
        let resp = app(Arc::clone(&provider))
            .oneshot(search_request(r#"{"countryCode":"IN","phoneNumber":"123"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(*provider.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_malformed_body_rejected_before_provider() {
        let provider = MockProvider::answering(LookupResult::default());
        let resp = app(Arc::clone(&provider))
            .oneshot(search_request("{not json"))
            .await
            .unwrap();

        assert!(resp.status().is_client_error());
        assert_eq!(*provider.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app(MockProvider::answering(LookupResult::default()))
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let resp = app(MockProvider::answering(LookupResult::default()))
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/search")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .and_then(|v| v.to_str().ok()),
            Some("*")
        );
    }
}
