//! Request URL composition.

use crate::types::Service;

/// Build the request URL for `service` with `keyword` as the query.
///
/// The result is the literal `{base_url}/{service}?query={keyword}`. The
/// keyword is passed through unescaped; reqwest percent-encodes characters
/// that are not valid in a URL when the request is built.
pub fn compose_url(base_url: &str, service: Service, keyword: &str) -> String {
    format!("{base_url}/{service}?query={keyword}")
}
