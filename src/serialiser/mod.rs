//! Converting messages to and from text formats.
//!
//! Three formats share the [`Serialiser`] contract:
//!
//! - [`JsonSkSerialiser`]: full JSON.sk, with sections and actions
//! - [`LegacyCodeSerialiser`]: `&` codes only, no actions
//! - [`PlainTextSerialiser`]: text only, all formatting dropped
//!
//! Configuration layers store messages through this trait, so any format can
//! be plugged in where a message is read or written as a string.
//!
//! ```
//! use jsonsk::{JsonSkSerialiser, Serialiser};
//!
//! let serialiser = JsonSkSerialiser::new();
//! let message = serialiser.deserialise("&aWelcome||ttp:&7Click me||cmd:/spawn").unwrap();
//! assert_eq!(
//!     serialiser.serialise(&message).unwrap(),
//!     "&aWelcome||ttp:&7Click me||cmd:/spawn"
//! );
//! ```

mod jsonsk;
mod legacy;
mod plain;
pub mod writer;

pub use jsonsk::JsonSkSerialiser;
pub use legacy::LegacyCodeSerialiser;
pub use plain::PlainTextSerialiser;
pub use writer::CodeWriter;

use crate::error::Result;
use crate::message::SendableMessage;

/// Two-way conversion between a [`SendableMessage`] and a string format.
pub trait Serialiser {
    /// Write `message` in this format.
    ///
    /// Fails with [`Error::UnsupportedFeature`](crate::Error::UnsupportedFeature)
    /// when the format cannot express part of the message.
    fn serialise(&self, message: &SendableMessage) -> Result<String>;

    /// Read a message written in this format.
    fn deserialise(&self, input: &str) -> Result<SendableMessage>;
}

impl<S: Serialiser + ?Sized> Serialiser for &S {
    fn serialise(&self, message: &SendableMessage) -> Result<String> {
        (**self).serialise(message)
    }

    fn deserialise(&self, input: &str) -> Result<SendableMessage> {
        (**self).deserialise(input)
    }
}

impl<S: Serialiser + ?Sized> Serialiser for Box<S> {
    fn serialise(&self, message: &SendableMessage) -> Result<String> {
        (**self).serialise(message)
    }

    fn deserialise(&self, input: &str) -> Result<SendableMessage> {
        (**self).deserialise(input)
    }
}
