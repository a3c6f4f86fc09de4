//! `SmhiClient` - SMHI observations API client.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use url::Url;

use crate::request::normalize_base;
use crate::temperature::TemperatureService;
use crate::transport::Transport;

/// Default base URL of the meteorological observations API.
pub const DEFAULT_BASE_URL: &str = "https://opendata-download-metobs.smhi.se/";

/// Default User-Agent.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// SMHI observations API client.
///
/// Cheap to clone. Services created from it share one immutable transport.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct SmhiClient {
    /// Shared transport (HTTP client and base URL).
    transport: Arc<Transport>,
}

/// Builder for `SmhiClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SmhiClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl SmhiClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
            http_client: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `smhi-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a transport-level timeout for every request (default: none).
    ///
    /// Elapsed timeouts surface as `SmhiError::DeadlineExceeded`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a caller-provided HTTP client (proxy, TLS settings, shared pool).
    ///
    /// Takes priority over `user_agent` and `timeout`, which are ignored.
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - The default base URL fails to parse.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<SmhiClient> {
        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };

        let http_client = if let Some(client) = self.http_client {
            client
        } else {
            let user_agent = self
                .user_agent
                .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));
            let mut builder = Client::builder().user_agent(&user_agent).gzip(true);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build().context("failed to build HTTP client")?
        };

        Ok(SmhiClient {
            transport: Arc::new(Transport::new(http_client, normalize_base(base_url))),
        })
    }
}

impl SmhiClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> SmhiClientBuilder {
        SmhiClientBuilder::new()
    }

    /// Creates a client against the public API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.transport.base_url()
    }

    /// Shared transport, for issuing catalog requests directly.
    #[must_use]
    pub fn transport(&self) -> Arc<Transport> {
        Arc::clone(&self.transport)
    }

    /// Temperature series and station catalogs.
    #[must_use]
    pub fn temperatures(&self) -> TemperatureService {
        TemperatureService::new(Arc::clone(&self.transport))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use reqwest::header::{HeaderMap, HeaderValue};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::context::CallContext;

    #[test]
    fn test_default_base_url() {
        // Act
        let client = SmhiClient::new().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_builder_with_custom_base_url() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/api-test/").unwrap();

        // Act
        let client = SmhiClient::builder()
            .base_url(custom_url.clone())
            .user_agent("test/0.0.0")
            .build()
            .unwrap();

        // Assert
        assert_eq!(client.base_url(), &custom_url);
    }

    #[test]
    fn test_builder_normalizes_missing_trailing_slash() {
        // Arrange
        let custom_url = Url::parse("http://localhost:8080/api-test").unwrap();

        // Act
        let client = SmhiClient::builder().base_url(custom_url).build().unwrap();

        // Assert
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api-test/");
    }

    #[test]
    fn test_builder_with_timeout_succeeds() {
        // Act
        let result = SmhiClient::builder()
            .timeout(Duration::from_secs(30))
            .build();

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_builder_with_injected_http_client() {
        // Arrange
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/version/latest/parameter/2.json"))
            .and(header("x-proxy-auth", "token-123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;
        let mut headers = HeaderMap::new();
        headers.insert("x-proxy-auth", HeaderValue::from_static("token-123"));
        let http_client = Client::builder().default_headers(headers).build().unwrap();
        let client = SmhiClient::builder()
            .base_url(Url::parse(&mock_server.uri()).unwrap())
            .user_agent("ignored/0.0.0")
            .http_client(http_client)
            .build()
            .unwrap();

        // Act
        let catalog = client
            .temperatures()
            .stations_with_daily_average(&CallContext::background(), true)
            .await
            .unwrap();

        // Assert
        assert!(catalog.station.is_empty());
    }

    #[test]
    fn test_services_share_one_transport() {
        // Arrange
        let client = SmhiClient::new().unwrap();

        // Act
        let first = client.temperatures();
        let second = client.clone().temperatures();

        // Assert
        assert!(Arc::ptr_eq(first.transport(), second.transport()));
        assert!(Arc::ptr_eq(first.transport(), &client.transport()));
    }
}
