//! Text styles applied to chat components.
//!
//! [`MessageStyle`] is a bitflag set over the five legacy chat styles. Each
//! style also has a legacy code character:
//!
//! | Style | Code |
//! |---|---|
//! | [`MessageStyle::MAGIC`] | `k` |
//! | [`MessageStyle::BOLD`] | `l` |
//! | [`MessageStyle::STRIKETHROUGH`] | `m` |
//! | [`MessageStyle::UNDERLINE`] | `n` |
//! | [`MessageStyle::ITALIC`] | `o` |
//!
//! # Examples
//!
//! ```
//! use jsonsk::MessageStyle;
//!
//! let styles = MessageStyle::check_range(0b1_0010).unwrap();
//! assert_eq!(styles, MessageStyle::BOLD | MessageStyle::ITALIC);
//! assert!(MessageStyle::check_range(0b10_0000).is_err());
//! ```

use crate::error::{Error, Result};
use bitflags::bitflags;

bitflags! {
    /// Set of text styles.
    ///
    /// Styles combine with bitwise OR. Unknown bits are never retained:
    /// use [`MessageStyle::check_range`] to validate caller-supplied integers.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord)]
    pub struct MessageStyle: u8 {
        /// Obfuscated, constantly changing glyphs.
        const MAGIC         = 0x01;
        /// Bold text.
        const BOLD          = 0x02;
        /// Struck-through text.
        const STRIKETHROUGH = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Italic text.
        const ITALIC        = 0x10;
    }
}

/// Styles in legacy code order, paired with their code characters.
const CODES: [(MessageStyle, char); 5] = [
    (MessageStyle::MAGIC, 'k'),
    (MessageStyle::BOLD, 'l'),
    (MessageStyle::STRIKETHROUGH, 'm'),
    (MessageStyle::UNDERLINE, 'n'),
    (MessageStyle::ITALIC, 'o'),
];

impl MessageStyle {
    /// Validate a raw bitmask, rejecting any bit outside the five styles.
    pub fn check_range(bits: u32) -> Result<Self> {
        u8::try_from(bits)
            .ok()
            .and_then(Self::from_bits)
            .ok_or(Error::InvalidStyles(bits))
    }

    /// The style for a legacy code character (`k`-`o`), ignoring ASCII case.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        CODES
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(style, _)| *style)
    }

    /// Legacy code characters for every style in this set, in code order.
    pub fn codes(self) -> impl Iterator<Item = char> {
        CODES
            .into_iter()
            .filter(move |(style, _)| self.contains(*style))
            .map(|(_, code)| code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        assert_eq!(
            MessageStyle::check_range(0b10_0000),
            Err(Error::InvalidStyles(0b10_0000))
        );
        assert_eq!(
            MessageStyle::check_range(0x1_0002),
            Err(Error::InvalidStyles(0x1_0002))
        );
        assert_eq!(
            MessageStyle::check_range(u32::from(
                (MessageStyle::BOLD | MessageStyle::ITALIC).bits()
            )),
            Ok(MessageStyle::BOLD | MessageStyle::ITALIC)
        );
        assert_eq!(
            MessageStyle::check_range(u32::from(MessageStyle::all().bits())),
            Ok(MessageStyle::all())
        );
        assert_eq!(MessageStyle::check_range(0), Ok(MessageStyle::empty()));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(MessageStyle::from_code('l'), Some(MessageStyle::BOLD));
        assert_eq!(MessageStyle::from_code('O'), Some(MessageStyle::ITALIC));
        assert_eq!(MessageStyle::from_code('k'), Some(MessageStyle::MAGIC));
        assert_eq!(MessageStyle::from_code('r'), None);
        assert_eq!(MessageStyle::from_code('a'), None);
    }

    #[test]
    fn test_codes_in_order() {
        let styles = MessageStyle::ITALIC | MessageStyle::MAGIC | MessageStyle::UNDERLINE;
        assert_eq!(styles.codes().collect::<String>(), "kno");
        assert_eq!(MessageStyle::empty().codes().count(), 0);
        assert_eq!(MessageStyle::all().codes().collect::<String>(), "klmno");
    }

    #[test]
    fn test_union_and_intersection() {
        let a = MessageStyle::BOLD | MessageStyle::ITALIC;
        let b = MessageStyle::ITALIC | MessageStyle::UNDERLINE;
        assert_eq!(a & b, MessageStyle::ITALIC);
        assert_eq!(a | b, MessageStyle::BOLD | MessageStyle::ITALIC | MessageStyle::UNDERLINE);
        assert_eq!(a - b, MessageStyle::BOLD);
    }
}
