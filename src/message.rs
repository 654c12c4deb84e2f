//! Complete renderable messages.
//!
//! A [`SendableMessage`] is an ordered list of [`JsonSection`]s. Building one
//! normalises it: empty sections are dropped and adjacent sections carrying
//! identical actions are merged into one. Different builder call sequences
//! that describe the same rendered text therefore compare equal.
//!
//! ```
//! use jsonsk::{ChatComponent, JsonSection, SendableMessage};
//!
//! let split = SendableMessage::builder()
//!     .section(JsonSection::plain([ChatComponent::plain("Hello, ")]))
//!     .section(JsonSection::plain([ChatComponent::plain("world")]))
//!     .build();
//!
//! assert_eq!(split, SendableMessage::plain("Hello, world"));
//! assert_eq!(split.sections().len(), 1);
//! ```

use crate::component::ChatComponent;
use crate::section::JsonSection;

/// Immutable, normalised sequence of sections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SendableMessage {
    sections: Vec<JsonSection>,
}

impl SendableMessage {
    /// Build a message, dropping empty sections and merging neighbours with
    /// identical actions.
    #[must_use]
    pub fn new(sections: impl IntoIterator<Item = JsonSection>) -> Self {
        let mut out: Vec<JsonSection> = Vec::new();
        for section in sections {
            if section.is_empty() {
                continue;
            }
            match out.last_mut() {
                Some(last) if last.same_actions(&section) => last.absorb(section),
                _ => out.push(section),
            }
        }
        Self { sections: out }
    }

    /// The empty message.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Message of one uncoloured component.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new([JsonSection::plain([ChatComponent::plain(text)])])
    }

    #[must_use]
    pub fn builder() -> SendableMessageBuilder {
        SendableMessageBuilder::default()
    }

    #[must_use]
    pub fn sections(&self) -> &[JsonSection] {
        &self.sections
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether any section carries hover, click or insertion.
    #[must_use]
    pub fn has_actions(&self) -> bool {
        self.sections.iter().any(JsonSection::has_actions)
    }

    /// This message followed by `other`, re-normalised at the seam.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        Self::new(self.sections.iter().chain(&other.sections).cloned())
    }

    /// Concatenated text of every section, without formatting.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.sections.iter().map(JsonSection::plain_text).collect()
    }
}

impl FromIterator<JsonSection> for SendableMessage {
    fn from_iter<I: IntoIterator<Item = JsonSection>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Builder for [`SendableMessage`].
#[derive(Clone, Debug, Default)]
pub struct SendableMessageBuilder {
    sections: Vec<JsonSection>,
}

impl SendableMessageBuilder {
    /// Append a section.
    #[must_use]
    pub fn section(mut self, section: JsonSection) -> Self {
        self.sections.push(section);
        self
    }

    /// Append a section without actions holding a single component.
    #[must_use]
    pub fn component(mut self, component: ChatComponent) -> Self {
        self.sections.push(JsonSection::plain([component]));
        self
    }

    /// Build the normalised message.
    #[must_use]
    pub fn build(self) -> SendableMessage {
        SendableMessage::new(self.sections)
    }
}
