//! Sections: component runs sharing one set of interactive actions.

use crate::component::{self, ChatComponent};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Kind of click action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClickType {
    /// Runs the payload as a chat command.
    RunCommand,
    /// Places the payload in the chat input box.
    SuggestCommand,
    /// Opens the payload as a URL.
    OpenUrl,
}

impl ClickType {
    /// All click types, in tag-recognition order.
    pub const ALL: [Self; 3] = [Self::RunCommand, Self::SuggestCommand, Self::OpenUrl];

    /// Three-letter markup tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::RunCommand => "cmd",
            Self::SuggestCommand => "sgt",
            Self::OpenUrl => "url",
        }
    }

    /// Action name used by raw JSON text.
    #[must_use]
    pub const fn action_name(self) -> &'static str {
        match self {
            Self::RunCommand => "run_command",
            Self::SuggestCommand => "suggest_command",
            Self::OpenUrl => "open_url",
        }
    }

    /// Look up a click type by markup tag.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.tag() == tag)
            .ok_or_else(|| Error::UnknownClickType(tag.to_string()))
    }
}

impl FromStr for ClickType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tag(s)
    }
}

impl fmt::Display for ClickType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Click action with its payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClickEventInfo {
    kind: ClickType,
    value: String,
}

impl ClickEventInfo {
    #[must_use]
    pub fn new(kind: ClickType, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// Build from a markup tag (`cmd`, `sgt`, `url`) and payload.
    pub fn from_tag(tag: &str, value: impl Into<String>) -> Result<Self> {
        Ok(Self::new(ClickType::from_tag(tag)?, value))
    }

    #[must_use]
    pub fn run_command(command: impl Into<String>) -> Self {
        Self::new(ClickType::RunCommand, command)
    }

    #[must_use]
    pub fn suggest_command(command: impl Into<String>) -> Self {
        Self::new(ClickType::SuggestCommand, command)
    }

    #[must_use]
    pub fn open_url(url: impl Into<String>) -> Self {
        Self::new(ClickType::OpenUrl, url)
    }

    #[must_use]
    pub const fn kind(&self) -> ClickType {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split back into markup tag and payload.
    #[must_use]
    pub fn to_tag_and_value(&self) -> (&'static str, &str) {
        (self.kind.tag(), &self.value)
    }
}

/// Hover text: one flat level of components, with no actions of its own.
///
/// Hover components are compacted on construction like section components.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsonHover {
    components: Vec<ChatComponent>,
}

impl JsonHover {
    #[must_use]
    pub fn new(components: impl IntoIterator<Item = ChatComponent>) -> Self {
        Self {
            components: component::compact(components),
        }
    }

    /// Hover text made of a single uncoloured component.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new([ChatComponent::plain(text)])
    }

    #[must_use]
    pub fn components(&self) -> &[ChatComponent] {
        &self.components
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Ordered components plus optional hover, click and insertion actions.
///
/// Construction compacts the component list and normalises an empty hover
/// to no hover, so structural equality is equality after compaction. A
/// section whose components all compact away is empty and is dropped by
/// [`SendableMessage`](crate::SendableMessage).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct JsonSection {
    components: Vec<ChatComponent>,
    hover: Option<JsonHover>,
    click: Option<ClickEventInfo>,
    insertion: Option<String>,
}

impl JsonSection {
    #[must_use]
    pub fn new(
        components: impl IntoIterator<Item = ChatComponent>,
        hover: Option<JsonHover>,
        click: Option<ClickEventInfo>,
        insertion: Option<String>,
    ) -> Self {
        Self {
            components: component::compact(components),
            hover: hover.filter(|h| !h.is_empty()),
            click,
            insertion,
        }
    }

    /// Section without actions.
    #[must_use]
    pub fn plain(components: impl IntoIterator<Item = ChatComponent>) -> Self {
        Self::new(components, None, None, None)
    }

    #[must_use]
    pub fn builder() -> JsonSectionBuilder {
        JsonSectionBuilder::default()
    }

    #[must_use]
    pub fn components(&self) -> &[ChatComponent] {
        &self.components
    }

    #[must_use]
    pub const fn hover(&self) -> Option<&JsonHover> {
        self.hover.as_ref()
    }

    #[must_use]
    pub const fn click(&self) -> Option<&ClickEventInfo> {
        self.click.as_ref()
    }

    #[must_use]
    pub fn insertion(&self) -> Option<&str> {
        self.insertion.as_deref()
    }

    /// Whether the section has no visible text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Whether any of hover, click or insertion is set.
    #[must_use]
    pub const fn has_actions(&self) -> bool {
        self.hover.is_some() || self.click.is_some() || self.insertion.is_some()
    }

    /// Whether both sections carry the same hover, click and insertion.
    #[must_use]
    pub fn same_actions(&self, other: &Self) -> bool {
        self.hover == other.hover && self.click == other.click && self.insertion == other.insertion
    }

    /// Append `other`'s components, keeping this section's actions.
    pub(crate) fn absorb(&mut self, other: Self) {
        let merged = std::mem::take(&mut self.components)
            .into_iter()
            .chain(other.components);
        self.components = component::compact(merged);
    }

    /// Concatenated text of all components.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.components.iter().map(ChatComponent::text).collect()
    }
}

/// Builder for [`JsonSection`].
#[derive(Clone, Debug, Default)]
pub struct JsonSectionBuilder {
    components: Vec<ChatComponent>,
    hover: Option<JsonHover>,
    click: Option<ClickEventInfo>,
    insertion: Option<String>,
}

impl JsonSectionBuilder {
    /// Append a component.
    #[must_use]
    pub fn component(mut self, component: ChatComponent) -> Self {
        self.components.push(component);
        self
    }

    /// Append several components.
    #[must_use]
    pub fn components(mut self, components: impl IntoIterator<Item = ChatComponent>) -> Self {
        self.components.extend(components);
        self
    }

    #[must_use]
    pub fn hover(mut self, hover: JsonHover) -> Self {
        self.hover = Some(hover);
        self
    }

    #[must_use]
    pub fn click(mut self, click: ClickEventInfo) -> Self {
        self.click = Some(click);
        self
    }

    #[must_use]
    pub fn insertion(mut self, insertion: impl Into<String>) -> Self {
        self.insertion = Some(insertion.into());
        self
    }

    /// Build the section, compacting its components.
    #[must_use]
    pub fn build(self) -> JsonSection {
        JsonSection::new(self.components, self.hover, self.click, self.insertion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::PredefinedColour;
    use crate::style::MessageStyle;

    #[test]
    fn test_click_type_tags() {
        for kind in ClickType::ALL {
            assert_eq!(ClickType::from_tag(kind.tag()), Ok(kind));
        }
        assert_eq!(
            ClickType::from_tag("xyz"),
            Err(Error::UnknownClickType("xyz".to_string()))
        );
        assert_eq!("url".parse::<ClickType>(), Ok(ClickType::OpenUrl));
    }

    #[test]
    fn test_click_event_info_tag_round_trip() {
        let click = ClickEventInfo::from_tag("sgt", "/msg ").expect("known tag");
        assert_eq!(click.kind(), ClickType::SuggestCommand);
        assert_eq!(click.to_tag_and_value(), ("sgt", "/msg "));
        assert!(ClickEventInfo::from_tag("abc", "x").is_err());
    }

    #[test]
    fn test_section_equality_is_post_compaction() {
        let red = |t: &str| {
            ChatComponent::builder()
                .colour(PredefinedColour::Red)
                .text(t)
                .build()
        };
        let split = JsonSection::builder()
            .component(red("Hel"))
            .component(ChatComponent::plain(""))
            .component(red("lo"))
            .build();
        let whole = JsonSection::builder().component(red("Hello")).build();
        assert_eq!(split, whole);
        assert_eq!(split.components().len(), 1);
    }

    #[test]
    fn test_section_actions_participate_in_equality() {
        let base = JsonSection::builder().component(ChatComponent::plain("x"));
        let with_click = base
            .clone()
            .click(ClickEventInfo::run_command("/spawn"))
            .build();
        let without = base.build();
        assert_ne!(with_click, without);
        assert!(with_click.has_actions());
        assert!(!without.has_actions());
    }

    #[test]
    fn test_empty_hover_is_no_hover() {
        let section = JsonSection::builder()
            .component(ChatComponent::plain("x"))
            .hover(JsonHover::plain(""))
            .build();
        assert_eq!(section.hover(), None);
        assert!(!section.has_actions());
    }

    #[test]
    fn test_hover_is_compacted() {
        let hover = JsonHover::new([
            ChatComponent::plain("a"),
            ChatComponent::plain("b"),
            ChatComponent::builder()
                .styles(MessageStyle::BOLD)
                .text("")
                .build(),
        ]);
        assert_eq!(hover.components(), &[ChatComponent::plain("ab")]);
    }

    #[test]
    fn test_empty_section() {
        let section = JsonSection::plain([ChatComponent::plain("")]);
        assert!(section.is_empty());
        assert_eq!(section.plain_text(), "");
    }
}
