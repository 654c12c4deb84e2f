//! `&` codes without JSON features.

use crate::error::{Error, Result};
use crate::markup::legacy;
use crate::markup::options::{ParserOptions, SerialiserOptions};
use crate::message::SendableMessage;
use crate::section::JsonSection;
use crate::serialiser::Serialiser;
use crate::serialiser::writer::CodeWriter;

/// Legacy colour-code format.
///
/// Uses the same code emission as [`JsonSkSerialiser`](crate::JsonSkSerialiser)
/// but has no delimiters, tags or escaping. Messages with hover, click or
/// insertion actions are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyCodeSerialiser {
    parser: ParserOptions,
    writer: SerialiserOptions,
}

impl Default for LegacyCodeSerialiser {
    fn default() -> Self {
        Self {
            parser: ParserOptions::legacy_only(),
            writer: SerialiserOptions::default(),
        }
    }
}

impl LegacyCodeSerialiser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(parser: ParserOptions, writer: SerialiserOptions) -> Self {
        Self { parser, writer }
    }
}

impl Serialiser for LegacyCodeSerialiser {
    fn serialise(&self, message: &SendableMessage) -> Result<String> {
        if message.has_actions() {
            return Err(Error::UnsupportedFeature(
                "hover, click and insertion actions in legacy format",
            ));
        }
        let mut writer = CodeWriter::new(self.writer);
        for section in message.sections() {
            writer.write_components(section.components());
        }
        Ok(writer.finish())
    }

    fn deserialise(&self, input: &str) -> Result<SendableMessage> {
        let components = legacy::parse(input, &self.parser)?;
        Ok(SendableMessage::new([JsonSection::plain(components)]))
    }
}
