//! Response shapes returned by each search service.
//!
//! Every service wraps its results in the same envelope: a [`Meta`] block
//! and a list of service-specific documents. All fields default when absent
//! or `null` so partial payloads still decode; unknown fields are ignored.

use crate::types::Service;
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, De, T>(deserializer: De) -> Result<T, De::Error>
where
    De: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Paging information shared by every service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    /// Number of documents matching the query.
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: u64,
    /// Number of those documents that can be paged through.
    #[serde(deserialize_with = "null_as_default")]
    pub pageable_count: u64,
    /// Whether this page is the last one.
    #[serde(deserialize_with = "null_as_default")]
    pub is_end: bool,
}

/// One page of results for a single service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "D: Deserialize<'de> + Default"))]
pub struct Page<D> {
    #[serde(deserialize_with = "null_as_default")]
    pub meta: Meta,
    #[serde(deserialize_with = "null_as_default")]
    pub documents: Vec<D>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VclipDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
    /// Clip length in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub play_time: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub collection: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub display_sitename: String,
    #[serde(deserialize_with = "null_as_default")]
    pub doc_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub blogname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub q_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub a_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    /// Source of the tip (e.g. "tip", "knowledge"). Renamed because `type`
    /// is a keyword.
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub isbn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub publisher: String,
    #[serde(deserialize_with = "null_as_default")]
    pub translators: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub price: i64,
    /// `-1` when the book is not on sale.
    #[serde(deserialize_with = "null_as_default")]
    pub sale_price: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CafeDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contents: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cafename: String,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
}

pub type WebResponse = Page<WebDocument>;
pub type VclipResponse = Page<VclipDocument>;
pub type ImageResponse = Page<ImageDocument>;
pub type BlogResponse = Page<BlogDocument>;
pub type TipResponse = Page<TipDocument>;
pub type BookResponse = Page<BookDocument>;
pub type CafeResponse = Page<CafeDocument>;

/// A decoded response, tagged by the service that produced it.
///
/// Serializes as the inner page only, so the encoded JSON has the same
/// layout the provider sent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Web(WebResponse),
    Vclip(VclipResponse),
    Image(ImageResponse),
    Blog(BlogResponse),
    Tip(TipResponse),
    Book(BookResponse),
    Cafe(CafeResponse),
}

impl SearchResponse {
    /// The service whose shape this response holds.
    pub fn service(&self) -> Service {
        match self {
            Self::Web(_) => Service::Web,
            Self::Vclip(_) => Service::Vclip,
            Self::Image(_) => Service::Image,
            Self::Blog(_) => Service::Blog,
            Self::Tip(_) => Service::Tip,
            Self::Book(_) => Service::Book,
            Self::Cafe(_) => Service::Cafe,
        }
    }

    /// Paging block of the wrapped page.
    pub fn meta(&self) -> &Meta {
        match self {
            Self::Web(page) => &page.meta,
            Self::Vclip(page) => &page.meta,
            Self::Image(page) => &page.meta,
            Self::Blog(page) => &page.meta,
            Self::Tip(page) => &page.meta,
            Self::Book(page) => &page.meta,
            Self::Cafe(page) => &page.meta,
        }
    }

    /// Number of documents on this page.
    pub fn len(&self) -> usize {
        match self {
            Self::Web(page) => page.documents.len(),
            Self::Vclip(page) => page.documents.len(),
            Self::Image(page) => page.documents.len(),
            Self::Blog(page) => page.documents.len(),
            Self::Tip(page) => page.documents.len(),
            Self::Book(page) => page.documents.len(),
            Self::Cafe(page) => page.documents.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
