//! Error types for the kakao-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. The caller's credential never appears in
//! error messages.

/// Errors that can occur while querying the search API.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request could not be built, sent, or its body read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body is not valid JSON for the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A response value could not be serialized back to JSON.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for kakao-search results.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = SearchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_decode() {
        let err = SearchError::Decode("EOF while parsing an object".into());
        assert_eq!(err.to_string(), "decode error: EOF while parsing an object");
    }

    #[test]
    fn display_encode() {
        let err = SearchError::Encode("key must be a string".into());
        assert_eq!(err.to_string(), "encode error: key must be a string");
    }

    #[test]
    fn display_config() {
        let err = SearchError::Config("base_url must not be empty".into());
        assert_eq!(err.to_string(), "config error: base_url must not be empty");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
    }
}
