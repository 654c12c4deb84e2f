//! `jsonsk` - JSON.sk chat markup
//!
//! Reads and writes the pipe-delimited JSON.sk markup used to store rich
//! chat messages as plain strings: `&` colour and style codes, `<#rrggbb>`
//! hex colours, and `||ttp:`/`||cmd:`/`||sgt:`/`||url:`/`||ins:` action tags.
//!
//! ```
//! use jsonsk::{JsonSkSerialiser, PredefinedColour};
//!
//! let message = JsonSkSerialiser::new()
//!     .parse("&aWelcome||ttp:&7Click me||cmd:/spawn")
//!     .unwrap();
//! let section = &message.sections()[0];
//! assert_eq!(section.components()[0].colour(), Some(PredefinedColour::Green.colour()));
//! assert_eq!(section.click().unwrap().value(), "/spawn");
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)] // Allow markup::MarkupEvent etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod colour;
pub mod component;
pub mod error;
pub mod event;
pub mod interop;
pub mod markup;
pub mod message;
pub mod section;
pub mod serialiser;
pub mod style;

// Re-export core types at crate root
pub use colour::{Colour, PredefinedColour};
pub use component::{ChatComponent, ChatComponentBuilder};
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_log_callback, emit_log, log_level, set_log_callback, set_log_level,
};
pub use message::{SendableMessage, SendableMessageBuilder};
pub use section::{ClickEventInfo, ClickType, JsonHover, JsonSection, JsonSectionBuilder};
pub use style::MessageStyle;

// Re-export markup types
pub use markup::{
    ColourCodePolicy, HexTagPolicy, MarkupEvent, MarkupVisitor, ParserOptions, SerialiserOptions,
    UnrepresentableColour, tokenize,
};

// Re-export formats
pub use interop::RawText;
pub use serialiser::{
    CodeWriter, JsonSkSerialiser, LegacyCodeSerialiser, PlainTextSerialiser, Serialiser,
};
