//! Domain layer: message model, value types and validation (no I/O).

mod message;
mod response;
mod validation;
mod value;

pub use message::{BinaryMessage, MessageOptions, OutgoingMessage, TextMessage};
pub use response::MessageResponse;
pub use validation::{AuthorizationError, ValidationError, validate_credentials, validate_message};
pub use value::{KnownStatusCode, PhoneNumber, RecipientAddress, SenderAddressType, StatusCode};

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> RecipientAddress {
        RecipientAddress::new(4367612345678)
    }

    #[test]
    fn text_message_targets_text_path() {
        assert_eq!(TextMessage::TARGET_PATH, "smsmessaging/text");
        assert_eq!(BinaryMessage::TARGET_PATH, "smsmessaging/binary");
    }

    #[test]
    fn text_overrides_leave_original_untouched() {
        let original = TextMessage::to_one(RecipientAddress::new(4367612345678), "Hello World!");
        let copy = original.with_overrides(3, true);

        assert_eq!(original.max_sms_per_message(), None);
        assert!(!original.is_test());
        assert_eq!(copy.max_sms_per_message(), Some(3));
        assert!(copy.is_test());
        assert_eq!(copy.content(), original.content());
        assert_eq!(copy.recipients(), original.recipients());
    }

    #[test]
    fn text_overrides_replace_existing_values() {
        let original = TextMessage::to_one(RecipientAddress::new(4367612345678), "hi")
            .with_max_sms_per_message(5)
            .with_test(true);
        let copy = original.with_overrides(1, false);

        assert_eq!(copy.max_sms_per_message(), Some(1));
        assert!(!copy.is_test());
        assert_eq!(original.max_sms_per_message(), Some(5));
        assert!(original.is_test());
    }

    #[test]
    fn binary_overrides_keep_options_and_segments() {
        let options = MessageOptions {
            client_message_id: Some("abc".to_owned()),
            ..Default::default()
        };
        let original = BinaryMessage::new(vec![recipient()], vec![vec![0x06, 0x05]])
            .with_user_data_header(true)
            .with_options(options.clone());
        let copy = original.with_overrides(true);

        assert!(copy.is_test());
        assert!(!original.is_test());
        assert!(copy.user_data_header_present());
        assert_eq!(copy.options(), &options);
        assert_eq!(copy.segments(), original.segments());
    }

    #[test]
    fn sender_address_type_wire_names() {
        assert_eq!(SenderAddressType::National.as_str(), "national");
        assert_eq!(SenderAddressType::International.as_str(), "international");
        assert_eq!(SenderAddressType::Alphanumeric.as_str(), "alphanumeric");
        assert_eq!(SenderAddressType::Shortcode.as_str(), "shortcode");
    }
}
