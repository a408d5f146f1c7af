//! # kakao-search
//!
//! Typed client for the Kakao (Daum) search REST API.
//!
//! Seven services (web, vclip, image, blog, tip, book, cafe) share one base
//! endpoint and differ only in the path segment and the response shape.
//! Every call is a single round trip:
//!
//! 1. compose `{base}/{service}?query={keyword}`
//! 2. `GET` it with `Authorization: <credential>`
//! 3. decode the body into the service's shape
//! 4. re-encode it as compact JSON for the caller
//!
//! ## Design
//!
//! - No retries, no caching, no background tasks
//! - Errors are returned, never turned into a process exit
//! - Diagnostic lines are collected per call in a [`TraceLog`]
//!
//! ## Security
//!
//! - The credential is passed per call and never stored
//! - It is masked in trace output and never included in error messages
//! - Search keywords are logged only at trace level

pub mod client;
pub mod codec;
pub mod compose;
pub mod config;
pub mod error;
pub mod response;
pub mod trace;
pub mod transport;
pub mod types;

pub use client::SearchClient;
pub use compose::compose_url;
pub use config::{SearchConfig, KAKAO_REST_API_URL};
pub use error::{Result, SearchError};
pub use response::SearchResponse;
pub use trace::{run_with_trace, run_with_trace_to, TraceLog};
pub use transport::{HttpTransport, Transport};
pub use types::Service;

/// Query `service` with the default configuration and return compact JSON.
///
/// Builds a fresh [`SearchClient`] against [`KAKAO_REST_API_URL`]. Reuse a
/// client when making many calls.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the request fails, or
/// [`SearchError::Decode`] if the body does not match the service shape.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> kakao_search::Result<()> {
/// let json = kakao_search::search(kakao_search::Service::Blog, "KakaoAK <key>", "rust").await?;
/// println!("{json}");
/// # Ok(())
/// # }
/// ```
pub async fn search(service: Service, credential: &str, keyword: &str) -> Result<String> {
    SearchClient::new(SearchConfig::default())?
        .search(service, credential, keyword)
        .await
}

/// Web document search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn web(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Web, credential, keyword).await
}

/// Video clip search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn vclip(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Vclip, credential, keyword).await
}

/// Image search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn image(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Image, credential, keyword).await
}

/// Blog search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn blog(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Blog, credential, keyword).await
}

/// Tip search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn tip(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Tip, credential, keyword).await
}

/// Book search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn book(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Book, credential, keyword).await
}

/// Cafe search. See [`search`].
///
/// # Errors
///
/// Same as [`search`].
pub async fn cafe(credential: &str, keyword: &str) -> Result<String> {
    search(Service::Cafe, credential, keyword).await
}
