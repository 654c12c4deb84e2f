//! 24-bit colours and the sixteen predefined legacy colours.
//!
//! This module provides:
//!
//! - [`Colour`]: an RGB colour packed into the low 24 bits of a `u32`
//! - [`PredefinedColour`]: the closed set of legacy chat colours, each with
//!   a single-character code (`0`-`9`, `a`-`f`)
//!
//! # Examples
//!
//! ```
//! use jsonsk::{Colour, PredefinedColour};
//!
//! let gold = PredefinedColour::by_char('6').unwrap();
//! assert_eq!(gold.colour(), Colour::from_rgb(0xFF, 0xAA, 0x00));
//!
//! // Arbitrary colours map onto the closest legacy colour
//! let orange = Colour::from_hex("#ff9900").unwrap();
//! assert_eq!(PredefinedColour::nearest_to(orange), PredefinedColour::Gold);
//! ```

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// RGB colour stored as `0xRRGGBB`.
///
/// The value never exceeds `0xFFFFFF`; every constructor either masks
/// components into place or validates the integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Colour(u32);

impl Colour {
    /// Largest representable value.
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Opaque black.
    pub const BLACK: Self = Self(0x00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xFF_FFFF);

    /// Create a colour from a packed `0xRRGGBB` integer.
    pub fn new(value: u32) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::ColourOutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a colour from individual components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Create a colour from a big-endian `[r, g, b]` array.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_rgb(bytes[0], bytes[1], bytes[2])
    }

    /// Parse a hex colour string (e.g. `"#FF0000"`, `"f00"`).
    ///
    /// Supports 3-char (`#RGB`, each digit duplicated) and 6-char (`#RRGGBB`)
    /// forms, with or without the leading `#`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self::from_rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let value = u32::from_str_radix(hex, 16).ok()?;
                Some(Self(value))
            }
            _ => None,
        }
    }

    /// Packed `0xRRGGBB` value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Red, green and blue components.
    #[must_use]
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }

    /// Big-endian `[r, g, b]` representation.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 3] {
        let [_, r, g, b] = self.0.to_be_bytes();
        [r, g, b]
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }

    /// Squared Euclidean distance in RGB space.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> u32 {
        let (r1, g1, b1) = self.to_rgb();
        let (r2, g2, b2) = other.to_rgb();
        let dr = u32::from(r1.abs_diff(r2));
        let dg = u32::from(g1.abs_diff(g2));
        let db = u32::from(b1.abs_diff(b2));
        dr * dr + dg * dg + db * db
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl TryFrom<u32> for Colour {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Colour {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Colour> for u32 {
    fn from(colour: Colour) -> Self {
        colour.value()
    }
}

/// One of the sixteen legacy chat colours.
///
/// Declaration order matches the legacy code order `0`-`f`, which is also
/// the tie-break order for [`PredefinedColour::nearest_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PredefinedColour {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl PredefinedColour {
    /// All predefined colours in code order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
    ];

    /// Legacy code character, always lowercase.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
        }
    }

    /// Colour value shown by the vanilla client.
    #[must_use]
    pub const fn colour(self) -> Colour {
        Colour(match self {
            Self::Black => 0x00_0000,
            Self::DarkBlue => 0x00_00AA,
            Self::DarkGreen => 0x00_AA00,
            Self::DarkAqua => 0x00_AAAA,
            Self::DarkRed => 0xAA_0000,
            Self::DarkPurple => 0xAA_00AA,
            Self::Gold => 0xFF_AA00,
            Self::Gray => 0xAA_AAAA,
            Self::DarkGray => 0x55_5555,
            Self::Blue => 0x55_55FF,
            Self::Green => 0x55_FF55,
            Self::Aqua => 0x55_FFFF,
            Self::Red => 0xFF_5555,
            Self::LightPurple => 0xFF_55FF,
            Self::Yellow => 0xFF_FF55,
            Self::White => 0xFF_FFFF,
        })
    }

    /// Lowercase snake-case name, as used in raw JSON text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkAqua => "dark_aqua",
            Self::DarkRed => "dark_red",
            Self::DarkPurple => "dark_purple",
            Self::Gold => "gold",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Aqua => "aqua",
            Self::Red => "red",
            Self::LightPurple => "light_purple",
            Self::Yellow => "yellow",
            Self::White => "white",
        }
    }

    /// Look up a colour by its code character, ignoring ASCII case.
    pub fn by_char(code: char) -> Result<Self> {
        code.to_digit(16)
            .and_then(|index| Self::ALL.get(index as usize).copied())
            .ok_or(Error::UnknownColourCode(code))
    }

    /// Look up a colour by its raw JSON name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The predefined colour with exactly this value, if any.
    #[must_use]
    pub fn exact_to(colour: Colour) -> Option<Self> {
        by_value().get(&colour).copied()
    }

    /// The predefined colour closest to `colour` in RGB space.
    ///
    /// Ties resolve to the first colour in code order.
    #[must_use]
    pub fn nearest_to(colour: Colour) -> Self {
        let mut best = Self::Black;
        let mut best_distance = u32::MAX;
        for candidate in Self::ALL {
            let distance = candidate.colour().distance_squared(colour);
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        best
    }
}

impl From<PredefinedColour> for Colour {
    fn from(predefined: PredefinedColour) -> Self {
        predefined.colour()
    }
}

impl fmt::Display for PredefinedColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn by_value() -> &'static HashMap<Colour, PredefinedColour> {
    static TABLE: OnceLock<HashMap<Colour, PredefinedColour>> = OnceLock::new();
    TABLE.get_or_init(|| {
        PredefinedColour::ALL
            .into_iter()
            .map(|p| (p.colour(), p))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(Colour::new(0xFF_FFFF).map(Colour::value), Ok(0xFF_FFFF));
        assert_eq!(
            Colour::new(0x0100_0000),
            Err(Error::ColourOutOfRange(0x0100_0000))
        );
    }

    #[test]
    fn test_rgb_and_bytes() {
        let colour = Colour::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(colour.value(), 0x12_3456);
        assert_eq!(colour.to_rgb(), (0x12, 0x34, 0x56));
        assert_eq!(colour.to_bytes(), [0x12, 0x34, 0x56]);
        assert_eq!(Colour::from_bytes([0x12, 0x34, 0x56]), colour);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Colour::from_hex("#FF0000"), Some(Colour::from_rgb(255, 0, 0)));
        assert_eq!(Colour::from_hex("00ff00"), Some(Colour::from_rgb(0, 255, 0)));
        assert_eq!(Colour::from_hex("#abc"), Some(Colour::from_rgb(0xAA, 0xBB, 0xCC)));
        assert_eq!(Colour::from_hex("#12345"), None);
        assert_eq!(Colour::from_hex("#gggggg"), None);
        assert_eq!(Colour::from_hex("+12345"), None);
        assert_eq!(Colour::from_hex(""), None);
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        assert_eq!(Colour::from_rgb(0xAB, 0x0C, 0x01).to_string(), "#ab0c01");
        assert_eq!(Colour::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_by_char_case_insensitive() {
        assert_eq!(PredefinedColour::by_char('a'), Ok(PredefinedColour::Green));
        assert_eq!(PredefinedColour::by_char('A'), Ok(PredefinedColour::Green));
        assert_eq!(PredefinedColour::by_char('0'), Ok(PredefinedColour::Black));
        assert_eq!(
            PredefinedColour::by_char('g'),
            Err(Error::UnknownColourCode('g'))
        );
    }

    #[test]
    fn test_exact_and_nearest() {
        assert_eq!(
            PredefinedColour::exact_to(Colour::from_rgb(0xFF, 0x55, 0x55)),
            Some(PredefinedColour::Red)
        );
        assert_eq!(PredefinedColour::exact_to(Colour::from_rgb(1, 2, 3)), None);
        assert_eq!(
            PredefinedColour::nearest_to(Colour::from_rgb(1, 2, 3)),
            PredefinedColour::Black
        );
        assert_eq!(
            PredefinedColour::nearest_to(Colour::from_rgb(0xF0, 0xF0, 0xF0)),
            PredefinedColour::White
        );
    }

    #[test]
    fn test_nearest_tie_prefers_code_order() {
        // Equidistant from black (0,0,0) and dark blue (0,0,0xAA)
        let midpoint = Colour::from_rgb(0, 0, 0x55);
        assert_eq!(
            PredefinedColour::nearest_to(midpoint),
            PredefinedColour::Black
        );
    }

    #[test]
    fn test_predefined_identity() {
        for p in PredefinedColour::ALL {
            assert_eq!(PredefinedColour::by_char(p.code()), Ok(p));
            assert_eq!(
                PredefinedColour::by_char(p.code().to_ascii_uppercase()),
                Ok(p)
            );
            assert_eq!(PredefinedColour::exact_to(p.colour()), Some(p));
            assert_eq!(PredefinedColour::nearest_to(p.colour()), p);
            assert_eq!(PredefinedColour::by_name(p.name()), Some(p));
        }
    }
}
