//! Service identification for the search API.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search services reachable under the common API base URL.
///
/// Each variant selects both the URL path segment and the response shape
/// the body is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Web documents.
    Web,
    /// Video clips.
    Vclip,
    /// Images.
    Image,
    /// Blog posts.
    Blog,
    /// Q&A tips.
    Tip,
    /// Books.
    Book,
    /// Cafe (community board) posts.
    Cafe,
}

impl Service {
    /// Returns the path segment used in request URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Vclip => "vclip",
            Self::Image => "image",
            Self::Blog => "blog",
            Self::Tip => "tip",
            Self::Book => "book",
            Self::Cafe => "cafe",
        }
    }

    /// Returns all available service variants.
    pub fn all() -> &'static [Service] {
        &[
            Self::Web,
            Self::Vclip,
            Self::Image,
            Self::Blog,
            Self::Tip,
            Self::Book,
            Self::Cafe,
        ]
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|service| service.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::Config(format!("unknown service: {s}")))
    }
}
