use crate::domain::value::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Decoded gateway reply to a send request.
pub struct MessageResponse {
    pub status_code: StatusCode,
    pub status_message: String,
    /// Gateway-assigned id of the accepted transfer.
    pub transfer_id: Option<String>,
    /// Echo of [`MessageOptions::client_message_id`](crate::domain::MessageOptions).
    pub client_message_id: Option<String>,
    /// Number of physical SMS the gateway produced.
    pub sms_count: Option<u32>,
}
