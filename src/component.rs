//! Styled runs of text.
//!
//! A [`ChatComponent`] is the smallest unit of the model: literal text plus
//! an optional colour and a style set. Components are immutable; build them
//! with [`ChatComponent::builder`] or the shorthand constructors.
//!
//! # Examples
//!
//! ```
//! use jsonsk::{ChatComponent, MessageStyle, PredefinedColour};
//!
//! let warning = ChatComponent::builder()
//!     .colour(PredefinedColour::Red)
//!     .styles(MessageStyle::BOLD)
//!     .text("Careful!")
//!     .build();
//!
//! assert_eq!(warning.text(), "Careful!");
//! assert!(warning.styles().contains(MessageStyle::BOLD));
//! ```

use crate::colour::Colour;
use crate::style::MessageStyle;

/// Immutable run of text with a colour and styles.
///
/// `None` for the colour means "no colour": the client's default applies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChatComponent {
    colour: Option<Colour>,
    styles: MessageStyle,
    text: String,
}

impl ChatComponent {
    /// Create a component from all three parts.
    #[must_use]
    pub fn new(colour: Option<Colour>, styles: MessageStyle, text: impl Into<String>) -> Self {
        Self {
            colour,
            styles,
            text: text.into(),
        }
    }

    /// Create an uncoloured, unstyled component.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(None, MessageStyle::empty(), text)
    }

    /// Create a new component builder.
    #[must_use]
    pub fn builder() -> ChatComponentBuilder {
        ChatComponentBuilder::default()
    }

    /// A builder pre-filled with this component's values.
    #[must_use]
    pub fn to_builder(&self) -> ChatComponentBuilder {
        ChatComponentBuilder {
            component: self.clone(),
        }
    }

    #[must_use]
    pub const fn colour(&self) -> Option<Colour> {
        self.colour
    }

    #[must_use]
    pub const fn styles(&self) -> MessageStyle {
        self.styles
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether `other` renders identically apart from its text.
    #[must_use]
    pub fn same_formatting(&self, other: &Self) -> bool {
        self.colour == other.colour && self.styles == other.styles
    }

    /// Return a copy with different text.
    #[must_use]
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            colour: self.colour,
            styles: self.styles,
            text: text.into(),
        }
    }
}

/// Builder for [`ChatComponent`].
///
/// Builders are plain values: not shared, not synchronised.
#[derive(Clone, Debug, Default)]
pub struct ChatComponentBuilder {
    component: ChatComponent,
}

impl ChatComponentBuilder {
    /// Set the colour.
    #[must_use]
    pub fn colour(mut self, colour: impl Into<Colour>) -> Self {
        self.component.colour = Some(colour.into());
        self
    }

    /// Remove the colour.
    #[must_use]
    pub fn no_colour(mut self) -> Self {
        self.component.colour = None;
        self
    }

    /// Replace the style set.
    #[must_use]
    pub fn styles(mut self, styles: MessageStyle) -> Self {
        self.component.styles = styles;
        self
    }

    /// Add styles to the current set.
    #[must_use]
    pub fn add_styles(mut self, styles: MessageStyle) -> Self {
        self.component.styles |= styles;
        self
    }

    /// Set the text.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.component.text = text.into();
        self
    }

    /// Build the final component.
    #[must_use]
    pub fn build(self) -> ChatComponent {
        self.component
    }
}

/// Normalise a component list.
///
/// Adjacent components with the same colour and styles are merged by
/// concatenating their text, then empty components are dropped. The result
/// is a fixed point: compacting it again returns an equal list.
#[must_use]
pub fn compact(components: impl IntoIterator<Item = ChatComponent>) -> Vec<ChatComponent> {
    let mut out: Vec<ChatComponent> = Vec::new();
    for component in components {
        if component.is_empty() {
            continue;
        }
        match out.last_mut() {
            Some(last) if last.same_formatting(&component) => {
                last.text.push_str(&component.text);
            }
            _ => out.push(component),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::PredefinedColour;

    fn green(text: &str) -> ChatComponent {
        ChatComponent::builder()
            .colour(PredefinedColour::Green)
            .text(text)
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let component = ChatComponent::builder().build();
        assert_eq!(component.colour(), None);
        assert_eq!(component.styles(), MessageStyle::empty());
        assert_eq!(component.text(), "");
        assert!(component.is_empty());
    }

    #[test]
    fn test_builder_and_to_builder() {
        let component = ChatComponent::builder()
            .colour(PredefinedColour::Gold)
            .styles(MessageStyle::BOLD)
            .add_styles(MessageStyle::ITALIC)
            .text("hi")
            .build();
        assert_eq!(component.colour(), Some(PredefinedColour::Gold.colour()));
        assert_eq!(component.styles(), MessageStyle::BOLD | MessageStyle::ITALIC);

        let copy = component.to_builder().no_colour().build();
        assert_eq!(copy.colour(), None);
        assert_eq!(copy.text(), "hi");
    }

    #[test]
    fn test_compact_merges_adjacent_equal_formatting() {
        let compacted = compact([green("a"), green("b"), ChatComponent::plain("c")]);
        assert_eq!(compacted, vec![green("ab"), ChatComponent::plain("c")]);
    }

    #[test]
    fn test_compact_drops_empty_and_merges_across_them() {
        let compacted = compact([
            green("a"),
            ChatComponent::plain(""),
            green("b"),
            green(""),
        ]);
        assert_eq!(compacted, vec![green("ab")]);
    }

    #[test]
    fn test_compact_is_idempotent() {
        let once = compact([
            green("x"),
            ChatComponent::plain("y"),
            ChatComponent::plain("z"),
            green(""),
        ]);
        let twice = compact(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_compact_empty_input() {
        assert!(compact(Vec::<ChatComponent>::new()).is_empty());
        assert!(compact([ChatComponent::plain("")]).is_empty());
    }
}
