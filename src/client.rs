//! Service pipeline: compose URL, fetch, decode, re-encode.
//!
//! [`SearchClient::search`] is the single parameterized operation; the
//! per-service methods (`web`, `blog`, ...) are thin aliases kept for a
//! readable call site.

use crate::codec;
use crate::compose::compose_url;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::response::SearchResponse;
use crate::trace::TraceLog;
use crate::transport::{HttpTransport, Transport};
use crate::types::Service;

/// Client for the search REST API.
///
/// Holds no per-call state: the credential is passed on every call and
/// never stored.
#[derive(Debug, Clone)]
pub struct SearchClient<T: Transport = HttpTransport> {
    config: SearchConfig,
    transport: T,
}

impl SearchClient<HttpTransport> {
    /// Creates a client backed by [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid, or
    /// [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config)?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> SearchClient<T> {
    /// Creates a client with a caller-supplied transport.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn with_transport(config: SearchConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Query `service` and return the typed response.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] on transport failure and
    /// [`SearchError::Decode`] if the body does not match the service shape.
    pub async fn fetch(
        &self,
        service: Service,
        credential: &str,
        keyword: &str,
    ) -> Result<SearchResponse> {
        let mut trace = TraceLog::new();
        self.fetch_traced(service, credential, keyword, &mut trace)
            .await
    }

    /// Query `service` and return the response re-encoded as compact JSON.
    ///
    /// # Errors
    ///
    /// Same as [`fetch`](Self::fetch), plus [`SearchError::Encode`].
    pub async fn search(&self, service: Service, credential: &str, keyword: &str) -> Result<String> {
        let mut trace = TraceLog::new();
        self.search_traced(service, credential, keyword, &mut trace)
            .await
    }

    /// Same as [`search`](Self::search), recording diagnostic lines into
    /// `trace`.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub async fn search_traced(
        &self,
        service: Service,
        credential: &str,
        keyword: &str,
        trace: &mut TraceLog,
    ) -> Result<String> {
        let response = self
            .fetch_traced(service, credential, keyword, trace)
            .await?;
        let encoded = codec::encode(&response)?;
        String::from_utf8(encoded).map_err(|e| SearchError::Encode(e.to_string()))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%service))]
    async fn fetch_traced(
        &self,
        service: Service,
        credential: &str,
        keyword: &str,
        trace: &mut TraceLog,
    ) -> Result<SearchResponse> {
        trace.record(format!("Running {service} function."));
        tracing::trace!(keyword, "search keyword");

        let url = compose_url(&self.config.base_url, service, keyword);
        trace.record(format!("Composed URL: {url}"));

        let body = self.transport.get(&url, credential, trace).await?;
        tracing::debug!(bytes = body.len(), "body received");

        codec::decode(service, &body)
    }

    pub async fn web(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Web, credential, keyword).await
    }

    pub async fn vclip(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Vclip, credential, keyword).await
    }

    pub async fn image(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Image, credential, keyword).await
    }

    pub async fn blog(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Blog, credential, keyword).await
    }

    pub async fn tip(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Tip, credential, keyword).await
    }

    pub async fn book(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Book, credential, keyword).await
    }

    pub async fn cafe(&self, credential: &str, keyword: &str) -> Result<String> {
        self.search(Service::Cafe, credential, keyword).await
    }
}
