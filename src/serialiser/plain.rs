//! Text with all formatting stripped.

use crate::error::Result;
use crate::message::SendableMessage;
use crate::serialiser::Serialiser;

/// Lossy plain-text format: writes only the literal text of every component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlainTextSerialiser;

impl PlainTextSerialiser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Serialiser for PlainTextSerialiser {
    fn serialise(&self, message: &SendableMessage) -> Result<String> {
        Ok(message.to_plain_text())
    }

    fn deserialise(&self, input: &str) -> Result<SendableMessage> {
        Ok(SendableMessage::plain(input))
    }
}
