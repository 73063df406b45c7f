//! Typed Rust client for the websms JSON SMS gateway.
//!
//! The crate is split into a domain layer of message and value types, a transport layer
//! for the JSON wire format, and a small client layer that validates, posts and
//! classifies each request.
//!
//! ```rust,no_run
//! use websms::{Credentials, RecipientAddress, TextMessage, WebsmsClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), websms::WebsmsError> {
//!     let client = WebsmsClient::new(
//!         Credentials::new("username", "password"),
//!         "https://api.websms.com/json",
//!     )?;
//!     let message = TextMessage::to_one(RecipientAddress::new(4367612345678), "Hello World!");
//!     let response = client.send_text(&message, 1, true).await?;
//!     println!("{} {}", response.status_code, response.status_message);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, WebsmsClient, WebsmsClientBuilder, WebsmsError, classify_response};
pub use domain::{
    AuthorizationError, BinaryMessage, KnownStatusCode, MessageOptions, MessageResponse,
    OutgoingMessage, PhoneNumber, RecipientAddress, SenderAddressType, StatusCode, TextMessage,
    ValidationError,
};
pub use reqwest::Proxy;
pub use transport::{
    TransportError, decode_binary_message, decode_message_response, decode_text_message,
    encode_binary_message, encode_text_message,
};
