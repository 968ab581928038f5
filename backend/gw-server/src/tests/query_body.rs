use crate::{ApiError, QueryBody, registry_all_candidates};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_empty_body_when_parsed_then_single_empty_request() {
    assert_eq!(QueryBody::parse(b"").unwrap(), vec![json!({})]);
    assert_eq!(QueryBody::parse(b"  \n").unwrap(), vec![json!({})]);
}

#[test]
fn given_candidates_when_parsed_then_kept_in_order() {
    let body = br#"{"candidates":[{"id":"1"},{}]}"#;

    assert_eq!(
        QueryBody::parse(body).unwrap(),
        vec![json!({ "id": "1" }), json!({})]
    );
}

#[test]
fn given_single_request_when_parsed_then_one_candidate() {
    let body = br#"{"request":{"owner":"cosmos1abc"}}"#;

    assert_eq!(
        QueryBody::parse(body).unwrap(),
        vec![json!({ "owner": "cosmos1abc" })]
    );
}

#[test]
fn given_both_shapes_when_parsed_then_bad_request() {
    let body = br#"{"candidates":[{}],"request":{}}"#;

    assert!(matches!(
        QueryBody::parse(body),
        Err(ApiError::BadRequest { .. })
    ));
}

#[test]
fn given_empty_candidates_or_garbage_when_parsed_then_rejected() {
    assert_that!(QueryBody::parse(br#"{"candidates":[]}"#), err(anything()));
    assert_that!(QueryBody::parse(b"not json"), err(anything()));
    assert_that!(QueryBody::parse(br#"{"other":1}"#), err(anything()));
}

#[test]
fn given_registry_candidates_then_most_specific_first() {
    let candidates = registry_all_candidates();

    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0]["pagination"]["countTotal"], json!(true));
    assert_eq!(candidates[2], json!({}));
}
