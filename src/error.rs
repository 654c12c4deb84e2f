//! Error types for JSON.sk parsing and serialisation.

use std::fmt;

/// Result type alias for JSON.sk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for JSON.sk operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Style bits outside the five defined [`MessageStyle`](crate::MessageStyle) flags.
    InvalidStyles(u32),
    /// Colour value above `0xFFFFFF`.
    ColourOutOfRange(u32),
    /// Character that is not one of the sixteen legacy colour codes.
    UnknownColourCode(char),
    /// Click tag other than `cmd`, `sgt` or `url`.
    UnknownClickType(String),
    /// Hex colour tag with the wrong digit count or non-hex digits.
    ///
    /// Only raised when the parser runs with [`HexTagPolicy::Strict`](crate::HexTagPolicy::Strict).
    MalformedHexTag { position: usize, tag: String },
    /// The selected format cannot express part of the message.
    UnsupportedFeature(&'static str),
    /// Raw JSON text that could not be read or written.
    InvalidJson(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStyles(bits) => {
                write!(f, "invalid style bits: {bits:#b} is outside the defined styles")
            }
            Self::ColourOutOfRange(value) => {
                write!(f, "colour {value:#x} is outside the 24-bit range")
            }
            Self::UnknownColourCode(code) => write!(f, "unknown colour code: {code:?}"),
            Self::UnknownClickType(tag) => write!(f, "unknown click type: {tag:?}"),
            Self::MalformedHexTag { position, tag } => {
                write!(f, "malformed hex colour tag {tag:?} at byte {position}")
            }
            Self::UnsupportedFeature(feature) => {
                write!(f, "format does not support {feature}")
            }
            Self::InvalidJson(msg) => write!(f, "invalid raw JSON text: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidJson(err.to_string())
    }
}
