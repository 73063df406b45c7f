//! Transport layer: JSON wire format (serialization/deserialization).

mod message;
mod response;

pub use message::{
    TransportError, WireMessage, decode_binary_message, decode_text_message,
    encode_binary_message, encode_text_message,
};
pub use response::decode_message_response;
