//! Legacy colour-code sub-parser.
//!
//! Turns one plain-text segment into styled components:
//!
//! - `&0`-`&f` set the colour (case-insensitive)
//! - `&k` `&l` `&m` `&n` `&o` add a style
//! - `&r` clears colour and styles
//! - `<#RRGGBB>` / `<#RGB>` set an arbitrary colour when hex colours are enabled
//!
//! Anything else, including `&` before an unknown character, is literal text.

use crate::colour::{Colour, PredefinedColour};
use crate::component::{self, ChatComponent};
use crate::error::{Error, Result};
use crate::event::{LogLevel, log_with};
use crate::markup::options::{HexTagPolicy, ParserOptions};
use crate::style::MessageStyle;

/// Code introducer.
pub const CODE_CHAR: char = '&';

/// Reset code character.
pub const RESET_CHAR: char = 'r';

/// Longest tag body we look at: `#` plus six digits.
const MAX_HEX_TAG_BODY: usize = 7;

/// Parse `text` into compacted components.
///
/// Every segment starts with no colour and no styles.
pub fn parse(text: &str, options: &ParserOptions) -> Result<Vec<ChatComponent>> {
    let mut parser = LegacyParser::new(options);
    parser.run(text)?;
    Ok(component::compact(parser.components))
}

struct LegacyParser<'a> {
    options: &'a ParserOptions,
    colour: Option<Colour>,
    styles: MessageStyle,
    pending: String,
    components: Vec<ChatComponent>,
}

impl<'a> LegacyParser<'a> {
    fn new(options: &'a ParserOptions) -> Self {
        Self {
            options,
            colour: None,
            styles: MessageStyle::empty(),
            pending: String::new(),
            components: Vec::new(),
        }
    }

    fn run(&mut self, text: &str) -> Result<()> {
        let mut pos = 0;
        while let Some(ch) = text[pos..].chars().next() {
            let rest = &text[pos..];
            let consumed = match ch {
                CODE_CHAR => self.code(rest),
                '<' if self.options.hex_colours && rest.starts_with("<#") => {
                    self.hex_tag(rest, pos)?
                }
                _ => None,
            };
            match consumed {
                Some(len) => pos += len,
                None => {
                    self.pending.push(ch);
                    pos += ch.len_utf8();
                }
            }
        }
        self.flush();
        Ok(())
    }

    /// Apply a `&x` code. Returns the bytes consumed, or `None` for literal text.
    fn code(&mut self, rest: &str) -> Option<usize> {
        let code = rest[CODE_CHAR.len_utf8()..].chars().next()?;
        if let Ok(predefined) = PredefinedColour::by_char(code) {
            self.set_colour(predefined.colour());
        } else if let Some(style) = MessageStyle::from_code(code) {
            self.flush();
            self.styles |= style;
        } else if code.eq_ignore_ascii_case(&RESET_CHAR) {
            self.flush();
            self.colour = None;
            self.styles = MessageStyle::empty();
        } else {
            return None;
        }
        Some(CODE_CHAR.len_utf8() + code.len_utf8())
    }

    /// Apply a `<#...>` tag starting at byte `position`.
    fn hex_tag(&mut self, rest: &str, position: usize) -> Result<Option<usize>> {
        let window = rest
            .char_indices()
            .skip(1)
            .take(MAX_HEX_TAG_BODY + 1)
            .find(|&(_, c)| c == '>');

        if let Some((close, _)) = window {
            if let Some(colour) = Colour::from_hex(&rest[1..close]) {
                self.set_colour(colour);
                return Ok(Some(close + 1));
            }
        }

        let tag = match window {
            Some((close, _)) => &rest[..=close],
            None => truncate_chars(rest, MAX_HEX_TAG_BODY + 1),
        };
        match self.options.hex_tags {
            HexTagPolicy::Strict => Err(Error::MalformedHexTag {
                position,
                tag: tag.to_string(),
            }),
            HexTagPolicy::Lenient => {
                log_with(LogLevel::Debug, || {
                    format!("malformed hex colour tag {tag:?} at byte {position} kept as text")
                });
                Ok(None)
            }
        }
    }

    fn set_colour(&mut self, colour: Colour) {
        self.flush();
        self.colour = Some(colour);
        if self.options.colour_codes.resets_styles() {
            self.styles = MessageStyle::empty();
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            let text = std::mem::take(&mut self.pending);
            self.components
                .push(ChatComponent::new(self.colour, self.styles, text));
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
