//! Parser and serialiser configuration.

/// How a colour code interacts with styles that are already active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColourCodePolicy {
    /// A colour code changes only the colour; styles stay until `&r`.
    ///
    /// This is the JSON.sk behaviour: `&c&oA&aB` renders `B` green and italic.
    #[default]
    PreserveStyles,
    /// A colour code also clears every active style, as the vanilla client does.
    ResetStyles,
}

impl ColourCodePolicy {
    #[must_use]
    pub const fn resets_styles(self) -> bool {
        matches!(self, Self::ResetStyles)
    }
}

/// What the parser does with a `<#...>` tag that is not 3 or 6 hex digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexTagPolicy {
    /// Keep the malformed tag as literal text.
    #[default]
    Lenient,
    /// Fail with [`Error::MalformedHexTag`](crate::Error::MalformedHexTag).
    Strict,
}

/// What the serialiser does with a colour that has no legacy code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnrepresentableColour {
    /// Write the code of the nearest predefined colour.
    #[default]
    Nearest,
    /// Write the text without any colour.
    Discard,
    /// Write a `<#rrggbb>` tag. Only parsers with hex colours enabled read it back.
    HexTag,
}

/// Options for reading markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// Recognise `<#RRGGBB>` and `<#RGB>` colour tags.
    pub hex_colours: bool,
    pub colour_codes: ColourCodePolicy,
    pub hex_tags: HexTagPolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            hex_colours: true,
            colour_codes: ColourCodePolicy::default(),
            hex_tags: HexTagPolicy::default(),
        }
    }
}

impl ParserOptions {
    /// Options that only understand `&` codes.
    #[must_use]
    pub fn legacy_only() -> Self {
        Self {
            hex_colours: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_colour_codes(mut self, policy: ColourCodePolicy) -> Self {
        self.colour_codes = policy;
        self
    }

    #[must_use]
    pub const fn with_hex_tags(mut self, policy: HexTagPolicy) -> Self {
        self.hex_tags = policy;
        self
    }
}

/// Options for writing markup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerialiserOptions {
    /// Must match the policy of whoever reads the output back.
    pub colour_codes: ColourCodePolicy,
    pub unrepresentable: UnrepresentableColour,
}

impl SerialiserOptions {
    #[must_use]
    pub const fn with_colour_codes(mut self, policy: ColourCodePolicy) -> Self {
        self.colour_codes = policy;
        self
    }

    #[must_use]
    pub const fn with_unrepresentable(mut self, policy: UnrepresentableColour) -> Self {
        self.unrepresentable = policy;
        self
    }
}
