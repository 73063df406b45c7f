use serde::Deserialize;

use crate::domain::{MessageResponse, StatusCode};
use crate::transport::TransportError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageResponseJson {
    status_code: i32,
    #[serde(default)]
    status_message: Option<String>,
    #[serde(default)]
    transfer_id: Option<TransportId>,
    #[serde(default)]
    client_message_id: Option<TransportId>,
    #[serde(default)]
    sms_count: Option<u32>,
}

/// Identifiers arrive as strings from some gateway versions and as numbers from others.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportId {
    String(String),
    Number(serde_json::Number),
}

impl TransportId {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn decode_message_response(json: &str) -> Result<MessageResponse, TransportError> {
    let parsed: MessageResponseJson = serde_json::from_str(json)?;
    Ok(MessageResponse {
        status_code: StatusCode::new(parsed.status_code),
        status_message: parsed.status_message.unwrap_or_default(),
        transfer_id: parsed.transfer_id.map(TransportId::into_string),
        client_message_id: parsed.client_message_id.map(TransportId::into_string),
        sms_count: parsed.sms_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepted_response_with_identifiers() {
        let json = r#"
        {
          "statusCode": 2000,
          "statusMessage": "OK",
          "transferId": "005440da6f0000a5ea5a",
          "clientMessageId": "order-17",
          "smsCount": 2
        }
        "#;

        let resp = decode_message_response(json).unwrap();
        assert_eq!(resp.status_code, StatusCode::new(2000));
        assert_eq!(resp.status_message, "OK");
        assert_eq!(resp.transfer_id.as_deref(), Some("005440da6f0000a5ea5a"));
        assert_eq!(resp.client_message_id.as_deref(), Some("order-17"));
        assert_eq!(resp.sms_count, Some(2));
    }

    #[test]
    fn decode_numeric_identifiers_as_strings() {
        let json = r#"{"statusCode": 2001, "statusMessage": "queued", "transferId": 12345}"#;
        let resp = decode_message_response(json).unwrap();
        assert_eq!(resp.transfer_id.as_deref(), Some("12345"));
        assert_eq!(resp.client_message_id, None);
    }

    #[test]
    fn decode_minimal_error_response() {
        let json = r#"{"statusCode": 4002}"#;
        let resp = decode_message_response(json).unwrap();
        assert_eq!(resp.status_code.as_i32(), 4002);
        assert_eq!(resp.status_message, "");
        assert_eq!(resp.sms_count, None);
    }

    #[test]
    fn decode_rejects_missing_status_code() {
        assert!(matches!(
            decode_message_response(r#"{"statusMessage": "OK"}"#),
            Err(TransportError::Json(_))
        ));
        assert!(decode_message_response("{ not json }").is_err());
    }
}
