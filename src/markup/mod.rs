//! Reading JSON.sk markup.
//!
//! Parsing runs in two layers:
//!
//! ```text
//! "&aHi||ttp:&7tip"  ->  tokenizer  ->  [PlainText("&aHi"), Hover("&7tip")]
//!                                            |
//!                        legacy     <-  each text payload
//!                                            |
//!                        [green "Hi"] with hover [gray "tip"]
//! ```
//!
//! The [`tokenizer`] splits the pipe-delimited structure and drives a
//! [`MarkupVisitor`]. The [`legacy`] sub-parser resolves `&` codes and hex
//! tags inside each text payload.

pub mod legacy;
pub mod options;
pub mod tokenizer;

pub use options::{
    ColourCodePolicy, HexTagPolicy, ParserOptions, SerialiserOptions, UnrepresentableColour,
};
pub use tokenizer::{EventCollector, MarkupEvent, MarkupVisitor, drive, tokenize};
