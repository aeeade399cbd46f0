//! Blocking HTTP client for the cloud storage resource API.
//!
//! Provides [`DiskClient`], which issues one `GET /v1/disk/resources` for
//! the game folder and maps the response status to a [`SealerError`]. The
//! response body is never read and nothing is retried.

use std::error::Error as StdError;

use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::config::Settings;
use crate::error::{SealerError, SealerResult};

use super::Reachability;

/// Resource listing endpoint, relative to the API host
const RESOURCES_PATH: &str = "/v1/disk/resources";

/// HTTP client for the reachability check.
#[derive(Debug, Clone)]
pub struct DiskClient {
    client: Client,
    resources_url: Url,
    remote_folder: String,
}

impl DiskClient {
    /// Creates a client for the host and folder named in `settings`.
    pub fn new(settings: &Settings) -> SealerResult<Self> {
        let endpoint = format!(
            "{}{}",
            settings.api_base_url.trim_end_matches('/'),
            RESOURCES_PATH
        );
        let mut resources_url = Url::parse(&endpoint)
            .map_err(|e| SealerError::Config(format!("invalid API URL '{endpoint}': {e}")))?;
        // the folder goes out unescaped, `?path=/game`
        resources_url.set_query(Some(&format!("path={}", settings.remote_folder)));

        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            SealerError::Connectivity(format!("failed to build HTTP client: {}", error_chain(&e)))
        })?;

        Ok(Self {
            client,
            resources_url,
            remote_folder: settings.remote_folder.clone(),
        })
    }

    /// The full URL the check requests.
    pub fn resources_url(&self) -> &Url {
        &self.resources_url
    }
}

impl Reachability for DiskClient {
    fn check(&self, token: &str) -> SealerResult<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SealerError::Validation("A token is required".into()));
        }

        let mut auth = HeaderValue::from_str(&format!("OAuth {token}")).map_err(|_| {
            SealerError::Validation("Token contains characters not allowed in a header".into())
        })?;
        auth.set_sensitive(true);

        debug!(url = %self.resources_url, "checking remote folder");
        let response = self
            .client
            .get(self.resources_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, auth)
            .send()
            .map_err(|e| {
                let reason = if e.is_timeout() { "timed out" } else { "failed" };
                SealerError::Connectivity(format!("request {reason}: {}", error_chain(&e)))
            })?;

        let status = response.status();
        debug!(status = %status, "reachability response received");

        match status {
            StatusCode::OK => Ok(()),
            StatusCode::UNAUTHORIZED => Err(SealerError::Authentication(
                "the token was rejected by the storage service".into(),
            )),
            StatusCode::NOT_FOUND => Err(SealerError::ResourceNotFound(format!(
                "folder '{}' does not exist on the remote disk; create it and check again",
                self.remote_folder
            ))),
            other => Err(SealerError::Connectivity(format!(
                "unexpected response status {other}"
            ))),
        }
    }
}

/// Render an error with all of its causes.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings_for(base_url: &str, timeout_secs: Option<u64>) -> Settings {
        Settings {
            request_timeout_secs: timeout_secs,
            ..Settings::default().with_api_base_url(base_url)
        }
    }

    /// Runs the blocking check off the async runtime.
    async fn check_against(
        base_url: String,
        token: &'static str,
        timeout_secs: Option<u64>,
    ) -> SealerResult<()> {
        tokio::task::spawn_blocking(move || {
            DiskClient::new(&settings_for(&base_url, timeout_secs))?.check(token)
        })
        .await
        .expect("check task panicked")
    }

    async fn server_returning(status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/disk/resources"))
            .and(query_param("path", "/game"))
            .respond_with(ResponseTemplate::new(status))
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_resources_url() {
        let client = DiskClient::new(&Settings::default()).unwrap();
        let url = client.resources_url();
        assert_eq!(url.host_str(), Some("cloud-api.yandex.net"));
        assert_eq!(url.path(), "/v1/disk/resources");
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "path");
        assert_eq!(pairs[0].1, "/game");
    }

    #[test]
    fn test_folder_is_not_percent_encoded() {
        let client = DiskClient::new(&Settings::default()).unwrap();
        assert_eq!(client.resources_url().query(), Some("path=/game"));
        assert_eq!(
            client.resources_url().as_str(),
            "https://cloud-api.yandex.net/v1/disk/resources?path=/game"
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = DiskClient::new(&settings_for("http://localhost:8080/", None)).unwrap();
        assert_eq!(client.resources_url().path(), "/v1/disk/resources");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let err = DiskClient::new(&settings_for("not a url", None)).unwrap_err();
        assert!(matches!(err, SealerError::Config(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_succeeds_on_200() {
        let server = server_returning(200).await;
        assert!(check_against(server.uri(), "good-token", None).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_sends_expected_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/disk/resources"))
            .and(query_param("path", "/game"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "application/json"))
            .and(header("authorization", "OAuth y0_token"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        assert!(check_against(server.uri(), "  y0_token  ", None).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_reports_authentication_on_401() {
        let server = server_returning(401).await;
        let err = check_against(server.uri(), "bad-token", None).await.unwrap_err();
        assert!(matches!(err, SealerError::Authentication(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_reports_missing_folder_on_404() {
        let server = server_returning(404).await;
        let err = check_against(server.uri(), "good-token", None).await.unwrap_err();
        assert!(matches!(err, SealerError::ResourceNotFound(ref msg) if msg.contains("/game")));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_reports_connectivity_on_unexpected_status() {
        let server = server_returning(500).await;
        let err = check_against(server.uri(), "good-token", None).await.unwrap_err();
        assert!(matches!(err, SealerError::Connectivity(ref msg) if msg.contains("500")));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_does_not_retry() {
        let server = server_returning(503).await;
        assert!(check_against(server.uri(), "good-token", None).await.is_err());
        // expect(1) is verified when the server drops
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_check_reports_connectivity_on_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let err = check_against(server.uri(), "good-token", Some(1)).await.unwrap_err();
        assert!(matches!(err, SealerError::Connectivity(ref msg) if msg.contains("timed out")));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_empty_token_sends_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = check_against(server.uri(), "   ", None).await.unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_refused_connection_is_connectivity_error() {
        let client = DiskClient::new(&settings_for("http://127.0.0.1:1", Some(5))).unwrap();
        let err = client.check("good-token").unwrap_err();
        assert!(matches!(err, SealerError::Connectivity(_)));
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let client = DiskClient::new(&settings_for("http://127.0.0.1:1", None)).unwrap();
        let err = client.check("abc\ndef").unwrap_err();
        assert!(err.is_validation());
    }
}
