use crate::domain::ports::{ConfigProvider, TriviaLookup};
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct NumbersApiFact {
    text: Option<String>,
}

/// Trivia lookup backed by a numbersapi.com compatible service.
#[derive(Debug, Clone)]
pub struct NumbersApiLookup {
    client: Client,
    endpoint: String,
}

impl NumbersApiLookup {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.trivia_endpoint(), config.trivia_timeout())
    }

    fn fact_url(&self, number: i64) -> String {
        format!("{}/{}?json", self.endpoint, number)
    }
}

#[async_trait]
impl TriviaLookup for NumbersApiLookup {
    async fn lookup(&self, number: i64) -> Result<String> {
        let url = self.fact_url(number);
        tracing::debug!("Requesting trivia from: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("Trivia response status: {}", status);

        if !status.is_success() {
            return Err(ServiceError::TriviaLookupError {
                message: format!("{} returned status {}", url, status),
            });
        }

        let fact: NumbersApiFact = response.json().await?;
        fact.text.ok_or_else(|| ServiceError::TriviaLookupError {
            message: format!("{} returned no 'text' field", url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn lookup_for(server: &MockServer, timeout: Duration) -> NumbersApiLookup {
        NumbersApiLookup::new(&server.base_url(), timeout).unwrap()
    }

    #[test]
    fn test_fact_url_trims_trailing_slash() {
        let lookup = NumbersApiLookup::new("http://numbersapi.com/", Duration::from_secs(3)).unwrap();
        assert_eq!(lookup.fact_url(42), "http://numbersapi.com/42?json");
        assert_eq!(lookup.fact_url(-7), "http://numbersapi.com/-7?json");
    }

    #[tokio::test]
    async fn test_lookup_returns_text_field() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/153");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "text": "153 is a narcissistic number.",
                    "number": 153,
                    "found": true,
                    "type": "trivia"
                }));
        });

        let fact = lookup_for(&server, Duration::from_secs(3))
            .lookup(153)
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(fact, "153 is a narcissistic number.");
    }

    #[tokio::test]
    async fn test_lookup_non_success_status_is_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/42");
            then.status(500);
        });

        let result = lookup_for(&server, Duration::from_secs(3)).lookup(42).await;

        api_mock.assert();
        assert!(matches!(result, Err(ServiceError::TriviaLookupError { .. })));
    }

    #[tokio::test]
    async fn test_lookup_missing_text_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/42");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"number": 42, "found": false}));
        });

        let result = lookup_for(&server, Duration::from_secs(3)).lookup(42).await;

        assert!(matches!(result, Err(ServiceError::TriviaLookupError { .. })));
    }

    #[tokio::test]
    async fn test_lookup_malformed_body_is_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/42");
            then.status(200).body("42 is the answer.");
        });

        let result = lookup_for(&server, Duration::from_secs(3)).lookup(42).await;

        assert!(matches!(result, Err(ServiceError::HttpClientError(_))));
    }

    #[tokio::test]
    async fn test_lookup_times_out() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/7");
            then.status(200)
                .delay(Duration::from_secs(2))
                .json_body(serde_json::json!({"text": "too late"}));
        });

        let result = lookup_for(&server, Duration::from_millis(200)).lookup(7).await;

        match result {
            Err(ServiceError::HttpClientError(e)) => assert!(e.is_timeout()),
            other => panic!("expected timeout, got {:?}", other),
        }
    }
}
