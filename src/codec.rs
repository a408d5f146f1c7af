//! JSON decoding into typed responses and re-encoding for callers.
//!
//! Decoding validates the provider's body against the shape of the
//! requested service; encoding turns the typed value back into compact
//! JSON with a stable field order.

use crate::error::SearchError;
use crate::response::SearchResponse;
use crate::types::Service;
use serde::de::DeserializeOwned;

fn decode_page<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SearchError> {
    serde_json::from_slice(bytes).map_err(|e| SearchError::Decode(e.to_string()))
}

/// Decode `bytes` into the response shape of `service`.
///
/// # Errors
///
/// Returns [`SearchError::Decode`] if the body is not valid JSON or a field
/// has the wrong type. Missing fields are not an error.
pub fn decode(service: Service, bytes: &[u8]) -> Result<SearchResponse, SearchError> {
    let response = match service {
        Service::Web => SearchResponse::Web(decode_page(bytes)?),
        Service::Vclip => SearchResponse::Vclip(decode_page(bytes)?),
        Service::Image => SearchResponse::Image(decode_page(bytes)?),
        Service::Blog => SearchResponse::Blog(decode_page(bytes)?),
        Service::Tip => SearchResponse::Tip(decode_page(bytes)?),
        Service::Book => SearchResponse::Book(decode_page(bytes)?),
        Service::Cafe => SearchResponse::Cafe(decode_page(bytes)?),
    };
    tracing::trace!(%service, documents = response.len(), "response decoded");
    Ok(response)
}

/// Serialize a response back into compact JSON bytes.
///
/// # Errors
///
/// Returns [`SearchError::Encode`] if serialization fails, which does not
/// happen for values produced by [`decode`].
pub fn encode(response: &SearchResponse) -> Result<Vec<u8>, SearchError> {
    serde_json::to_vec(response).map_err(|e| SearchError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const FIXTURE_WEB: &str = include_str!("../test-data/web.json");
    const FIXTURE_BOOK: &str = include_str!("../test-data/book.json");
    const FIXTURE_IMAGE: &str = include_str!("../test-data/image.json");
    const FIXTURE_BLOG: &str = include_str!("../test-data/blog.json");
    const FIXTURE_VCLIP: &str = include_str!("../test-data/vclip.json");
    const FIXTURE_TIP: &str = include_str!("../test-data/tip.json");
    const FIXTURE_CAFE: &str = include_str!("../test-data/cafe.json");

    #[test]
    fn empty_object_decodes_to_default_page() {
        for service in Service::all() {
            let response = decode(*service, b"{}").expect("lenient decode");
            assert_eq!(response.service(), *service);
            assert!(response.is_empty());
            assert_eq!(response.meta().total_count, 0);
        }
    }

    #[test]
    fn null_fields_decode_as_defaults() {
        let response = decode(Service::Blog, br#"{"meta":null,"documents":[]}"#).expect("null meta");
        assert_eq!(response.meta().total_count, 0);

        let response = decode(Service::Web, br#"{"documents":null}"#).expect("null documents");
        assert!(response.is_empty());

        let response = decode(
            Service::Book,
            br#"{"meta":{"total_count":null,"is_end":null},
                "documents":[{"title":null,"authors":null,"price":null,"isbn":"123"}]}"#,
        )
        .expect("null scalars");
        let SearchResponse::Book(page) = response else {
            panic!("expected book response");
        };
        assert_eq!(page.meta.total_count, 0);
        assert!(!page.meta.is_end);
        let book = &page.documents[0];
        assert_eq!(book.title, "");
        assert!(book.authors.is_empty());
        assert_eq!(book.price, 0);
        assert_eq!(book.isbn, "123");
    }

    #[test]
    fn tip_fixture_keeps_type_field() {
        let response = decode(Service::Tip, FIXTURE_TIP.as_bytes()).expect("decode");
        let SearchResponse::Tip(page) = &response else {
            panic!("expected tip response");
        };
        assert_eq!(page.documents[0].kind, "knowledge");
        let value: Value = serde_json::from_slice(&encode(&response).expect("encode")).expect("json");
        assert_eq!(value["documents"][0]["type"], "knowledge");
        assert!(value["documents"][0].get("kind").is_none());
    }

    #[test]
    fn truncated_json_is_decode_error() {
        let err = decode(Service::Web, br#"{"foo":"#).unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[test]
    fn wrong_field_type_is_decode_error() {
        let err = decode(Service::Vclip, br#"{"documents":[{"play_time":"long"}]}"#).unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[test]
    fn non_object_body_is_decode_error() {
        let err = decode(Service::Blog, b"<html>unauthorized</html>").unwrap_err();
        assert!(err.to_string().starts_with("decode error:"));
    }

    #[test]
    fn fixture_web_decodes_documents() {
        let response = decode(Service::Web, FIXTURE_WEB.as_bytes()).expect("decode");
        let SearchResponse::Web(page) = response else {
            panic!("expected web response");
        };
        assert_eq!(page.meta.total_count, 2_143_907);
        assert!(!page.meta.is_end);
        assert_eq!(page.documents.len(), 2);
        assert_eq!(page.documents[0].url, "https://www.rust-lang.org/");
    }

    #[test]
    fn fixture_book_decodes_lists() {
        let response = decode(Service::Book, FIXTURE_BOOK.as_bytes()).expect("decode");
        let SearchResponse::Book(page) = response else {
            panic!("expected book response");
        };
        let book = &page.documents[0];
        assert_eq!(book.authors, vec!["Steve Klabnik", "Carol Nichols"]);
        assert!(book.translators.is_empty());
        assert_eq!(book.sale_price, -1);
    }

    #[test]
    fn round_trip_preserves_field_values() {
        for (service, fixture) in [
            (Service::Web, FIXTURE_WEB),
            (Service::Vclip, FIXTURE_VCLIP),
            (Service::Image, FIXTURE_IMAGE),
            (Service::Blog, FIXTURE_BLOG),
            (Service::Tip, FIXTURE_TIP),
            (Service::Book, FIXTURE_BOOK),
            (Service::Cafe, FIXTURE_CAFE),
        ] {
            let response = decode(service, fixture.as_bytes()).expect("decode");
            let encoded = encode(&response).expect("encode");
            let original: Value = serde_json::from_str(fixture).expect("fixture json");
            let reencoded: Value = serde_json::from_slice(&encoded).expect("encoded json");
            assert_eq!(original, reencoded, "{service} round trip changed content");
        }
    }

    #[test]
    fn encode_is_compact() {
        let response = decode(Service::Cafe, b"{ \"meta\" : { \"is_end\" : true } }").expect("decode");
        let encoded = String::from_utf8(encode(&response).expect("encode")).expect("utf8");
        assert_eq!(
            encoded,
            r#"{"meta":{"total_count":0,"pageable_count":0,"is_end":true},"documents":[]}"#
        );
    }
}
