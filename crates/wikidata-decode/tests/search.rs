//! Search envelope decoding against saved responses.

use wikidata_decode::{
    decode_entities, decode_search, detect_envelope, DecodeError, EnvelopeKind, ErrorCode, IdKind,
};

const SAMPLE_SEARCH: &str = include_str!("fixtures/sample_search.json");
const EMPTY_SEARCH: &str = include_str!("fixtures/empty_search.json");
const NO_SEARCH: &str = include_str!("fixtures/no_search.json");
const SINGLE_ITEM: &str = include_str!("fixtures/simple_single_item.json");

#[test]
fn test_sample_search() {
    let search = decode_search(SAMPLE_SEARCH).unwrap();
    assert!(search.was_successful());
    assert!(search.error.is_none());
    assert_eq!(search.query.as_deref(), Some("attila the hun"));
    assert_eq!(search.len(), 5);
    assert_eq!(search.continue_offset, Some(5));

    let ids: Vec<_> = search.results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["Q36724", "Q4818133", "Q17385218", "Q2870612", "Q4818134"]);
    assert!(search.results.iter().all(|r| r.kind == IdKind::Item));

    let top = search.top_result().unwrap();
    assert_eq!(top.label.as_deref(), Some("Attila"));
    assert_eq!(top.description.as_deref(), Some("King of the Huns"));

    let descriptions: Vec<_> = search.results.iter().map(|r| r.description.as_deref()).collect();
    assert_eq!(
        descriptions,
        [
            Some("King of the Huns"),
            Some("1954 film by Pietro Francisci"),
            None,
            Some("Gender-bending character in Drawn Together"),
            None,
        ]
    );
}

#[test]
fn test_empty_search() {
    let search = decode_search(EMPTY_SEARCH).unwrap();
    assert!(search.was_successful());
    assert!(search.is_empty());
    assert!(search.top_result().is_none());
    assert_eq!(search.continue_offset, None);
}

#[test]
fn test_error_search() {
    let search = decode_search(NO_SEARCH).unwrap();
    assert!(!search.was_successful());
    assert!(search.is_empty());
    let error = search.error.unwrap();
    assert_eq!(error.code.as_deref(), Some("param-missing"));
    assert_eq!(error.message(), Some("The \"search\" parameter must be set."));
}

#[test]
fn test_search_decode_of_entities_body() {
    let err = decode_search(SINGLE_ITEM).unwrap_err();
    assert_eq!(err, DecodeError::MissingSearchSection);
    assert_eq!(err.code(), ErrorCode::MissingSearchSection);
    assert_eq!(err.code().code(), "E001");
}

#[test]
fn test_entities_decode_of_search_body() {
    // No `entities` section: nothing to decode, but not an error either.
    let result = decode_entities(SAMPLE_SEARCH).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_detects_search_envelopes() {
    assert_eq!(detect_envelope(SAMPLE_SEARCH), EnvelopeKind::Search);
    assert_eq!(detect_envelope(EMPTY_SEARCH), EnvelopeKind::Search);
    assert_eq!(detect_envelope(NO_SEARCH), EnvelopeKind::Error);
}
