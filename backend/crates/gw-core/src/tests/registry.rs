use crate::{CoreError, DecodedValue, MessageRegistry, ToJson};

use gw_proto::TypeUrl;
use gw_proto::cosmos::bank::v1beta1::MsgSendResponse;
use gw_proto::registry::v1::{Entry, MsgCreatePresignedResponse, QueryGetRegistryResponse};

use prost::Message;
use serde_json::json;

fn presigned_bytes() -> Vec<u8> {
    MsgCreatePresignedResponse {
        entry_id: 42,
        digest: "sha256:abc".to_string(),
        expires_at: 1_700_000_000,
    }
    .encode_to_vec()
}

#[test]
fn given_registered_type_when_decoded_then_json_value_returned() {
    // Given
    let registry = MessageRegistry::standard();

    // When
    let decoded = registry.decode(MsgCreatePresignedResponse::TYPE_URL, &presigned_bytes());

    // Then
    assert_eq!(
        decoded,
        DecodedValue::Decoded(json!({
            "entryId": "42",
            "digest": "sha256:abc",
            "expiresAt": "1700000000",
        }))
    );
}

#[test]
fn given_unregistered_type_when_decoded_then_placeholder_with_raw_bytes() {
    let registry = MessageRegistry::standard();

    let decoded = registry.decode("/unknown.v1.MsgFoo", &[1, 2, 3]);

    assert_eq!(
        decoded,
        DecodedValue::Failed {
            error: "Unknown message type: /unknown.v1.MsgFoo".to_string(),
            raw_bytes: vec![1, 2, 3],
        }
    );
}

#[test]
fn given_placeholder_when_serialized_then_error_and_raw_bytes_fields() {
    let decoded = DecodedValue::unknown_type("/x.Y", &[9, 10]);

    let json = serde_json::to_value(&decoded).unwrap();

    assert_eq!(
        json,
        json!({ "error": "Unknown message type: /x.Y", "rawBytes": [9, 10] })
    );
}

#[test]
fn given_malformed_bytes_for_registered_type_when_decoded_then_placeholder_not_panic() {
    // Given - 0xff is field 31 with the invalid wire type 7
    let registry = MessageRegistry::standard();

    // When
    let decoded = registry.decode(MsgCreatePresignedResponse::TYPE_URL, &[0xff]);

    // Then
    assert!(!decoded.is_decoded());
    assert!(decoded.error().unwrap().contains("MsgCreatePresignedResponse"));
    match decoded {
        DecodedValue::Failed { raw_bytes, .. } => assert_eq!(raw_bytes, vec![0xff]),
        DecodedValue::Decoded(_) => unreachable!(),
    }
}

#[test]
fn given_empty_bytes_when_decoded_then_well_formed_for_any_type() {
    let registry = MessageRegistry::standard();

    let known = registry.decode(MsgSendResponse::TYPE_URL, &[]);
    let unknown = registry.decode("/nope", &[]);

    assert_eq!(known, DecodedValue::Decoded(json!({})));
    assert_eq!(unknown.error(), Some("Unknown message type: /nope"));
}

#[test]
fn given_failing_custom_decoder_when_decoded_then_message_carried() {
    let registry = MessageRegistry::builder()
        .register("/custom.v1.Broken", |_bytes: &[u8]| {
            Err(CoreError::byte_map("decoder exploded"))
        })
        .build();

    let decoded = registry.decode("/custom.v1.Broken", &[7]);

    assert_eq!(decoded, DecodedValue::failed("decoder exploded", &[7]));
}

#[test]
fn given_standard_registry_when_extended_then_original_untouched() {
    // Given
    let standard = MessageRegistry::standard();

    // When
    let extended = standard
        .to_builder()
        .register_message::<QueryGetRegistryResponse>()
        .build();

    // Then
    assert!(!standard.contains(QueryGetRegistryResponse::TYPE_URL));
    assert!(extended.contains(QueryGetRegistryResponse::TYPE_URL));
    assert_eq!(extended.len(), standard.len() + 1);
}

#[test]
fn given_standard_registry_when_listed_then_sorted_type_urls() {
    let registry = MessageRegistry::standard();

    let urls = registry.type_urls();

    let mut sorted = urls.clone();
    sorted.sort_unstable();
    assert_eq!(urls, sorted);
    assert!(urls.contains(&"/cosmos.bank.v1beta1.MsgSendResponse"));
    assert!(urls.contains(&"/registry.v1.MsgCreatePresignedResponse"));
}

#[test]
fn given_entry_with_missing_option_when_rendered_then_null() {
    let response = QueryGetRegistryResponse { entry: None };

    assert_eq!(response.to_json(), json!({ "entry": null }));
}

#[test]
fn given_entry_when_rendered_then_sixty_four_bit_fields_are_strings() {
    let entry = Entry {
        id: u64::MAX,
        owner: "cosmos1owner".to_string(),
        name: "report.pdf".to_string(),
        uri: "ipfs://bafy".to_string(),
        digest: "sha256:00".to_string(),
        created_at: -5,
    };

    let json = entry.to_json();

    assert_eq!(json["id"], json!("18446744073709551615"));
    assert_eq!(json["createdAt"], json!("-5"));
    assert_eq!(json["owner"], json!("cosmos1owner"));
}
