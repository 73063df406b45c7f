use std::fmt;

use crate::domain::message::OutgoingMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoContent,
    NoRecipients,
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoContent => f.write_str("No message content."),
            Self::NoRecipients => f.write_str("No recipients"),
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationError {
    /// Username or password is empty; detected before any request is made.
    MissingCredentials,
    /// The gateway answered with HTTP 401.
    Rejected,
}

impl fmt::Display for AuthorizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => f.write_str("Missing username and/or password."),
            Self::Rejected => f.write_str("Authorization failed."),
        }
    }
}

impl std::error::Error for AuthorizationError {}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), AuthorizationError> {
    if username.is_empty() || password.is_empty() {
        return Err(AuthorizationError::MissingCredentials);
    }
    Ok(())
}

/// Content is checked before recipients.
pub fn validate_message<M: OutgoingMessage>(message: &M) -> Result<(), ValidationError> {
    if !message.has_content() {
        return Err(ValidationError::NoContent);
    }
    if message.recipients().is_empty() {
        return Err(ValidationError::NoRecipients);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BinaryMessage, RecipientAddress, TextMessage};

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(ValidationError::NoContent.to_string(), "No message content.");
        assert_eq!(ValidationError::NoRecipients.to_string(), "No recipients");

        let err = ValidationError::Empty { field: "recipientAddress" };
        assert_eq!(err.to_string(), "recipientAddress must not be empty");

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");

        assert_eq!(
            AuthorizationError::MissingCredentials.to_string(),
            "Missing username and/or password."
        );
        assert_eq!(AuthorizationError::Rejected.to_string(), "Authorization failed.");
    }

    #[test]
    fn credentials_require_both_parts() {
        assert!(validate_credentials("u", "p").is_ok());
        assert_eq!(
            validate_credentials("", "p"),
            Err(AuthorizationError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("u", ""),
            Err(AuthorizationError::MissingCredentials)
        );
        assert_eq!(
            validate_credentials("", ""),
            Err(AuthorizationError::MissingCredentials)
        );
    }

    #[test]
    fn content_check_takes_precedence_over_recipients() {
        let msg = TextMessage::new(Vec::new(), "");
        assert_eq!(validate_message(&msg), Err(ValidationError::NoContent));

        let msg = TextMessage::new(Vec::new(), "hi");
        assert_eq!(validate_message(&msg), Err(ValidationError::NoRecipients));

        let msg = TextMessage::new(vec![RecipientAddress::new(4367612345678)], "hi");
        assert!(validate_message(&msg).is_ok());
    }

    #[test]
    fn binary_content_with_only_empty_segments_is_rejected() {
        let to = vec![RecipientAddress::new(4367612345678)];

        let msg = BinaryMessage::new(to.clone(), Vec::new());
        assert_eq!(validate_message(&msg), Err(ValidationError::NoContent));

        let msg = BinaryMessage::new(to.clone(), vec![Vec::new(), Vec::new()]);
        assert_eq!(validate_message(&msg), Err(ValidationError::NoContent));

        let msg = BinaryMessage::new(to, vec![vec![0x01, 0x02]]);
        assert!(validate_message(&msg).is_ok());

        let msg = BinaryMessage::new(Vec::new(), vec![vec![0x01]]);
        assert_eq!(validate_message(&msg), Err(ValidationError::NoRecipients));
    }
}
