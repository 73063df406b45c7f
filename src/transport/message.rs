use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};

use crate::domain::{
    BinaryMessage, MessageOptions, OutgoingMessage, RecipientAddress, SenderAddressType,
    TextMessage,
};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base64 segment: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// A message that can be written as a request body.
pub trait WireMessage: OutgoingMessage {
    fn encode_json(&self) -> Result<String, TransportError>;
}

impl WireMessage for TextMessage {
    fn encode_json(&self) -> Result<String, TransportError> {
        encode_text_message(self)
    }
}

impl WireMessage for BinaryMessage {
    fn encode_json(&self) -> Result<String, TransportError> {
        encode_binary_message(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TransportSenderAddressType {
    National,
    International,
    Alphanumeric,
    Shortcode,
}

impl From<SenderAddressType> for TransportSenderAddressType {
    fn from(value: SenderAddressType) -> Self {
        match value {
            SenderAddressType::National => Self::National,
            SenderAddressType::International => Self::International,
            SenderAddressType::Alphanumeric => Self::Alphanumeric,
            SenderAddressType::Shortcode => Self::Shortcode,
        }
    }
}

impl From<TransportSenderAddressType> for SenderAddressType {
    fn from(value: TransportSenderAddressType) -> Self {
        match value {
            TransportSenderAddressType::National => Self::National,
            TransportSenderAddressType::International => Self::International,
            TransportSenderAddressType::Alphanumeric => Self::Alphanumeric,
            TransportSenderAddressType::Shortcode => Self::Shortcode,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OptionsJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sender_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sender_address_type: Option<TransportSenderAddressType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    send_as_flash_sms: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notification_callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client_message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<u32>,
}

impl From<&MessageOptions> for OptionsJson {
    fn from(value: &MessageOptions) -> Self {
        Self {
            sender_address: value.sender_address.clone(),
            sender_address_type: value.sender_address_type.map(Into::into),
            send_as_flash_sms: value.send_as_flash_sms,
            notification_callback_url: value.notification_callback_url.clone(),
            client_message_id: value.client_message_id.clone(),
            priority: value.priority,
        }
    }
}

impl From<OptionsJson> for MessageOptions {
    fn from(value: OptionsJson) -> Self {
        Self {
            sender_address: value.sender_address,
            sender_address_type: value.sender_address_type.map(Into::into),
            send_as_flash_sms: value.send_as_flash_sms,
            notification_callback_url: value.notification_callback_url,
            client_message_id: value.client_message_id,
            priority: value.priority,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextMessageJson {
    #[serde(default)]
    recipient_address_list: Vec<u64>,
    #[serde(default)]
    message_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_sms_per_message: Option<u32>,
    #[serde(default)]
    test: bool,
    #[serde(flatten)]
    options: OptionsJson,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BinaryMessageJson {
    #[serde(default)]
    recipient_address_list: Vec<u64>,
    #[serde(default)]
    message_content: Vec<String>,
    #[serde(default)]
    user_data_header_present: bool,
    #[serde(default)]
    test: bool,
    #[serde(flatten)]
    options: OptionsJson,
}

fn recipient_list(recipients: &[RecipientAddress]) -> Vec<u64> {
    recipients.iter().map(|it| it.value()).collect()
}

fn recipients_from_wire(list: Vec<u64>) -> Vec<RecipientAddress> {
    list.into_iter().map(RecipientAddress::new).collect()
}

pub fn encode_text_message(message: &TextMessage) -> Result<String, TransportError> {
    let wire = TextMessageJson {
        recipient_address_list: recipient_list(message.recipients()),
        message_content: message.content().to_owned(),
        max_sms_per_message: message.max_sms_per_message(),
        test: message.is_test(),
        options: message.options().into(),
    };
    Ok(serde_json::to_string(&wire)?)
}

pub fn decode_text_message(json: &str) -> Result<TextMessage, TransportError> {
    let wire: TextMessageJson = serde_json::from_str(json)?;
    let mut message = TextMessage::new(
        recipients_from_wire(wire.recipient_address_list),
        wire.message_content,
    )
    .with_test(wire.test)
    .with_options(wire.options.into());
    if let Some(max) = wire.max_sms_per_message {
        message = message.with_max_sms_per_message(max);
    }
    Ok(message)
}

pub fn encode_binary_message(message: &BinaryMessage) -> Result<String, TransportError> {
    let wire = BinaryMessageJson {
        recipient_address_list: recipient_list(message.recipients()),
        message_content: message
            .segments()
            .iter()
            .map(|segment| BASE64.encode(segment))
            .collect(),
        user_data_header_present: message.user_data_header_present(),
        test: message.is_test(),
        options: message.options().into(),
    };
    Ok(serde_json::to_string(&wire)?)
}

pub fn decode_binary_message(json: &str) -> Result<BinaryMessage, TransportError> {
    let wire: BinaryMessageJson = serde_json::from_str(json)?;
    let segments = wire
        .message_content
        .iter()
        .map(|segment| BASE64.decode(segment))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BinaryMessage::new(recipients_from_wire(wire.recipient_address_list), segments)
        .with_user_data_header(wire.user_data_header_present)
        .with_test(wire.test)
        .with_options(wire.options.into()))
}
