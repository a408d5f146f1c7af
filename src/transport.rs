//! Authenticated HTTP GET against the search API.
//!
//! [`Transport`] is the seam between the service pipeline and the network.
//! [`HttpTransport`] is the reqwest-backed implementation; tests substitute
//! their own to inject canned bodies or failures.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::trace::TraceLog;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use std::time::Duration;

/// Fetches raw response bodies.
///
/// Implementations send exactly one request per call: no retries, no
/// caching. The HTTP status is not inspected, so an error page is returned
/// as a body like any other.
pub trait Transport: Send + Sync {
    /// Send `GET url` with `Authorization: credential` and return the full
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the request cannot be built or sent,
    /// or the body cannot be read.
    fn get(
        &self,
        url: &str,
        credential: &str,
        trace: &mut TraceLog,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, SearchError>> + Send;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from `config`.
    ///
    /// The client has:
    /// - Timeout from config, or none
    /// - Custom User-Agent when configured
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the client cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ref ua) = config.user_agent {
            builder = builder.user_agent(ua.clone());
        }
        let client = builder
            .build()
            .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        credential: &str,
        trace: &mut TraceLog,
    ) -> Result<Vec<u8>, SearchError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| SearchError::Http(format!("invalid request URL: {e}")))?;

        let request = self
            .client
            .get(parsed)
            .header(AUTHORIZATION, credential)
            .build()
            .map_err(|e| SearchError::Http(format!("failed to build request: {e}")))?;

        trace.record(format!("Header: {}", describe_headers(request.headers())));

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| SearchError::Http(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "response received");

        let body = response
            .bytes()
            .await
            .map_err(|e| SearchError::Http(format!("response read failed: {}", e.without_url())))?;

        trace.record(format!("resp.Body: {}", String::from_utf8_lossy(&body)));
        Ok(body.to_vec())
    }
}

/// Render a header map for trace output with the credential masked.
fn describe_headers(headers: &HeaderMap) -> String {
    let rendered: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            if *name == AUTHORIZATION {
                format!("{name}: <redacted>")
            } else {
                format!("{name}: {}", value.to_str().unwrap_or("<binary>"))
            }
        })
        .collect();
    format!("{{{}}}", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, ACCEPT};

    #[test]
    fn build_with_default_config() {
        assert!(HttpTransport::new(&SearchConfig::default()).is_ok());
    }

    #[test]
    fn build_with_timeout_and_custom_ua() {
        let config = SearchConfig {
            timeout_seconds: Some(3),
            user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert!(HttpTransport::new(&config).is_ok());
    }

    #[test]
    fn describe_headers_masks_authorization() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("KakaoAK secret"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        let rendered = describe_headers(&headers);
        assert!(rendered.contains("authorization: <redacted>"));
        assert!(rendered.contains("accept: */*"));
        assert!(!rendered.contains("secret"));
    }

    #[tokio::test]
    async fn invalid_url_is_http_error() {
        let transport = HttpTransport::new(&SearchConfig::default()).expect("client");
        let mut trace = TraceLog::new();
        let err = transport
            .get("not a url/web?query=x", "KakaoAK key", &mut trace)
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Http(_)));
        assert!(err.to_string().contains("invalid request URL"));
        assert!(trace.is_empty());
    }

    #[tokio::test]
    async fn connection_refused_is_http_error() {
        let transport = HttpTransport::new(&SearchConfig::default()).expect("client");
        let mut trace = TraceLog::new();
        // Port 9 (discard) on loopback is not expected to accept connections.
        let err = transport
            .get("http://127.0.0.1:9/web?query=x", "KakaoAK key", &mut trace)
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Http(_)));
        assert!(!err.to_string().contains("KakaoAK key"));
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpTransport>();
    }
}
