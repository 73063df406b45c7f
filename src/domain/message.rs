use crate::domain::value::{RecipientAddress, SenderAddressType};

/// Delivery options shared by text and binary messages.
///
/// Every field is optional; absent fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageOptions {
    pub sender_address: Option<String>,
    pub sender_address_type: Option<SenderAddressType>,
    pub send_as_flash_sms: Option<bool>,
    pub notification_callback_url: Option<String>,
    pub client_message_id: Option<String>,
    pub priority: Option<u32>,
}

/// A message kind the client knows how to submit.
pub trait OutgoingMessage: Clone + Send + Sync {
    /// Path appended to the client's base URL.
    const TARGET_PATH: &'static str;

    fn recipients(&self) -> &[RecipientAddress];

    /// `false` when there is nothing to deliver.
    fn has_content(&self) -> bool;

    fn is_test(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A text SMS (`smsmessaging/text`).
///
/// Construction does not validate; emptiness of content and recipients is checked when
/// the message is sent.
pub struct TextMessage {
    recipients: Vec<RecipientAddress>,
    content: String,
    max_sms_per_message: Option<u32>,
    test: bool,
    options: MessageOptions,
}

impl TextMessage {
    pub fn new(recipients: Vec<RecipientAddress>, content: impl Into<String>) -> Self {
        Self {
            recipients,
            content: content.into(),
            max_sms_per_message: None,
            test: false,
            options: MessageOptions::default(),
        }
    }

    /// Convenience constructor for a single recipient.
    pub fn to_one(recipient: RecipientAddress, content: impl Into<String>) -> Self {
        Self::new(vec![recipient], content)
    }

    pub fn with_options(mut self, options: MessageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_sms_per_message(mut self, max_sms_per_message: u32) -> Self {
        self.max_sms_per_message = Some(max_sms_per_message);
        self
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Copy of `self` with the per-call overrides written unconditionally.
    pub fn with_overrides(&self, max_sms_per_message: u32, test: bool) -> Self {
        self.clone()
            .with_max_sms_per_message(max_sms_per_message)
            .with_test(test)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn max_sms_per_message(&self) -> Option<u32> {
        self.max_sms_per_message
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

impl OutgoingMessage for TextMessage {
    const TARGET_PATH: &'static str = "smsmessaging/text";

    fn recipients(&self) -> &[RecipientAddress] {
        &self.recipients
    }

    fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    fn is_test(&self) -> bool {
        self.test
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A binary SMS (`smsmessaging/binary`).
///
/// Content is a list of segments, each one physical SMS. Set
/// `user_data_header_present` when the segments start with a user data header (for
/// example a port or concatenation header).
///
/// The message counts as empty, and is rejected at send time with
/// [`ValidationError::NoContent`](crate::domain::ValidationError::NoContent), when it has
/// no segments or when every segment is zero-length.
pub struct BinaryMessage {
    recipients: Vec<RecipientAddress>,
    segments: Vec<Vec<u8>>,
    user_data_header_present: bool,
    test: bool,
    options: MessageOptions,
}

impl BinaryMessage {
    pub fn new(recipients: Vec<RecipientAddress>, segments: Vec<Vec<u8>>) -> Self {
        Self {
            recipients,
            segments,
            user_data_header_present: false,
            test: false,
            options: MessageOptions::default(),
        }
    }

    pub fn with_options(mut self, options: MessageOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_user_data_header(mut self, present: bool) -> Self {
        self.user_data_header_present = present;
        self
    }

    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Copy of `self` with the per-call test flag written unconditionally.
    pub fn with_overrides(&self, test: bool) -> Self {
        self.clone().with_test(test)
    }

    pub fn segments(&self) -> &[Vec<u8>] {
        &self.segments
    }

    pub fn user_data_header_present(&self) -> bool {
        self.user_data_header_present
    }

    pub fn options(&self) -> &MessageOptions {
        &self.options
    }
}

impl OutgoingMessage for BinaryMessage {
    const TARGET_PATH: &'static str = "smsmessaging/binary";

    fn recipients(&self) -> &[RecipientAddress] {
        &self.recipients
    }

    fn has_content(&self) -> bool {
        self.segments.iter().any(|segment| !segment.is_empty())
    }

    fn is_test(&self) -> bool {
        self.test
    }
}
