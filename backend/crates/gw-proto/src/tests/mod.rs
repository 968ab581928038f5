use crate::registry::v1::MsgCreatePresignedResponse;
use crate::{Any, PageRequest, TxMsgData, TypeUrl};

use prost::Message;

#[test]
fn given_tx_msg_data_when_decoded_then_local_any_carries_response() {
    // Given - msg_responses is field 2 and holds the locally generated Any
    let inner = MsgCreatePresignedResponse {
        entry_id: 3,
        digest: "sha256:ff".to_string(),
        expires_at: 60,
    };
    let data = TxMsgData {
        msg_responses: vec![Any {
            type_url: MsgCreatePresignedResponse::TYPE_URL.to_string(),
            value: inner.encode_to_vec(),
        }],
    };

    // When
    let bytes = data.encode_to_vec();
    let decoded = TxMsgData::decode(bytes.as_slice()).unwrap();

    // Then
    assert_eq!(bytes[0], 0x12);
    assert_eq!(
        MsgCreatePresignedResponse::decode(decoded.msg_responses[0].value.as_slice()).unwrap(),
        inner
    );
}

#[test]
fn given_page_request_when_encoded_then_field_numbers_follow_proto() {
    let request = PageRequest {
        limit: 100,
        count_total: true,
        ..PageRequest::default()
    };

    assert_eq!(request.encode_to_vec(), vec![0x18, 0x64, 0x20, 0x01]);
}
