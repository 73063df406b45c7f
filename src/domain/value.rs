use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient MSISDN as sent to the gateway (`recipientAddressList`).
///
/// The gateway expects the full international number as an integer, without `+` or
/// leading zeros (for example `4367612345678`).
pub struct RecipientAddress(u64);

impl RecipientAddress {
    /// JSON field name used by the gateway (`recipientAddressList`).
    pub const FIELD: &'static str = "recipientAddressList";

    /// Wrap an already numeric MSISDN.
    pub fn new(msisdn: u64) -> Self {
        Self(msisdn)
    }

    /// Parse a phone-number-shaped string.
    ///
    /// A leading `+` and the separators ` `, `-`, `/`, `(`, `)` are ignored. No country
    /// inference is performed; use [`PhoneNumber::parse`] for that.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let digits = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '/' | '(' | ')'))
            .collect::<String>();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            });
        }

        digits
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            })
    }

    /// The MSISDN as sent on the wire.
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecipientAddress {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RecipientAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<PhoneNumber> for RecipientAddress {
    type Error = ValidationError;

    /// Convert an already-parsed phone number using its E.164 digits.
    fn try_from(value: PhoneNumber) -> Result<Self, Self::Error> {
        Self::parse(value.e164())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number normalized to E.164 with the `phonenumber` crate.
pub struct PhoneNumber {
    e164: String,
}

impl PhoneNumber {
    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: &str,
    ) -> Result<Self, ValidationError> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RecipientAddress::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, raw).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            }
        })?;

        Ok(Self {
            e164: phonenumber::format(&parsed)
                .mode(phonenumber::Mode::E164)
                .to_string(),
        })
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How the gateway should interpret `senderAddress`.
pub enum SenderAddressType {
    National,
    International,
    Alphanumeric,
    Shortcode,
}

impl SenderAddressType {
    /// Wire representation (`senderAddressType`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::National => "national",
            Self::International => "international",
            Self::Alphanumeric => "alphanumeric",
            Self::Shortcode => "shortcode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Gateway status code (`statusCode`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by the gateway.
    pub fn as_i32(self) -> i32 {
        self.0
    }

    /// Map this code to a known status code variant, if one exists.
    pub fn known(self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(self.0)
    }

    /// Returns `true` for `OK`, `OK_QUEUED` and `OK_TEST`.
    pub fn is_success(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_success())
    }

    /// Returns `true` if this status code is considered retryable by the crate.
    pub fn is_retryable(self) -> bool {
        matches!(self.known(), Some(kind) if kind.is_retryable())
    }

    /// Returns `true` if the gateway rejected the supplied credentials.
    pub fn is_auth_error(self) -> bool {
        self.known() == Some(KnownStatusCode::InvalidCredentials)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known gateway status codes.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Ok,
    OkQueued,
    OkTest,
    InvalidCredentials,
    InvalidRecipient,
    InvalidSender,
    TooManyRecipients,
    InvalidMessage,
    InternalError,
    ServiceUnavailable,
}

impl KnownStatusCode {
    /// Convert a raw integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            2000 => Self::Ok,
            2001 => Self::OkQueued,
            2002 => Self::OkTest,
            4001 => Self::InvalidCredentials,
            4002 => Self::InvalidRecipient,
            4003 => Self::InvalidSender,
            4004 => Self::TooManyRecipients,
            4005 => Self::InvalidMessage,
            5000 => Self::InternalError,
            5003 => Self::ServiceUnavailable,
            _ => return None,
        })
    }

    /// Integer code as sent by the gateway.
    pub fn code(self) -> i32 {
        match self {
            Self::Ok => 2000,
            Self::OkQueued => 2001,
            Self::OkTest => 2002,
            Self::InvalidCredentials => 4001,
            Self::InvalidRecipient => 4002,
            Self::InvalidSender => 4003,
            Self::TooManyRecipients => 4004,
            Self::InvalidMessage => 4005,
            Self::InternalError => 5000,
            Self::ServiceUnavailable => 5003,
        }
    }

    /// Whether the gateway accepted the request.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::OkQueued | Self::OkTest)
    }

    /// Whether this status is likely transient and can be retried.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::InternalError | Self::ServiceUnavailable)
    }
}

impl From<KnownStatusCode> for StatusCode {
    fn from(value: KnownStatusCode) -> Self {
        Self(value.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_address_parse_strips_separators() {
        let addr = RecipientAddress::parse(" +43 676 123-45678 ").unwrap();
        assert_eq!(addr.value(), 4367612345678);
        assert_eq!(addr.to_string(), "4367612345678");

        let addr = RecipientAddress::parse("(0043) 676/12345678").unwrap();
        assert_eq!(addr.value(), 4367612345678);
    }

    #[test]
    fn recipient_address_parse_rejects_bad_input() {
        assert!(matches!(
            RecipientAddress::parse("   "),
            Err(ValidationError::Empty {
                field: RecipientAddress::FIELD
            })
        ));
        assert!(matches!(
            RecipientAddress::parse("+"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            RecipientAddress::parse("not-a-number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
        assert!(matches!(
            RecipientAddress::parse("99999999999999999999999"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+4367612345678").unwrap();
        let p2 = PhoneNumber::parse(None, "+43 676 12345678").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+4367612345678");

        let addr = RecipientAddress::try_from(p2).unwrap();
        assert_eq!(addr.value(), 4367612345678);
        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(matches!(
            PhoneNumber::parse(None, "  "),
            Err(ValidationError::Empty { .. })
        ));
    }

    #[test]
    fn phone_number_uses_default_region() {
        let pn = PhoneNumber::parse(Some(country::Id::AT), "0676 12345678").unwrap();
        assert_eq!(pn.e164(), "+4367612345678");
    }

    #[test]
    fn status_code_classification() {
        assert!(StatusCode::new(2000).is_success());
        assert!(StatusCode::new(2001).is_success());
        assert!(StatusCode::new(2002).is_success());
        assert!(!StatusCode::new(4002).is_success());
        assert!(!StatusCode::new(9999).is_success());

        assert!(StatusCode::new(5003).is_retryable());
        assert!(!StatusCode::new(4001).is_retryable());
        assert!(StatusCode::new(4001).is_auth_error());

        let unknown = StatusCode::new(9999);
        assert!(unknown.known().is_none());
        assert!(!unknown.is_retryable());
        assert!(!unknown.is_auth_error());
    }

    #[test]
    fn known_status_codes_map_back_to_their_integer() {
        for code in [2000, 2001, 2002, 4001, 4002, 4003, 4004, 4005, 5000, 5003] {
            let known = KnownStatusCode::from_code(code).unwrap();
            assert_eq!(known.code(), code);
            assert_eq!(StatusCode::from(known), StatusCode::new(code));
        }
    }
}
