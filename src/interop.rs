//! Raw JSON rich text.
//!
//! Game clients take chat as a tree of JSON text nodes, where each node's
//! `extra` children inherit its colour, styles and actions unless they
//! override them. [`RawText`] models that tree with serde; this module
//! converts it to and from the flat section model.
//!
//! ```
//! use jsonsk::interop::RawText;
//! use jsonsk::JsonSkSerialiser;
//!
//! let message = JsonSkSerialiser::new().parse("&cAlert||cmd:/help").unwrap();
//! let json = RawText::from_message(&message).to_json().unwrap();
//! let back = RawText::from_json(&json).unwrap().to_message();
//! assert_eq!(back, message);
//! ```

use crate::colour::{Colour, PredefinedColour};
use crate::component::ChatComponent;
use crate::error::{Error, Result};
use crate::event::{LogLevel, log_with};
use crate::message::SendableMessage;
use crate::section::{ClickEventInfo, ClickType, JsonHover, JsonSection};
use crate::style::MessageStyle;
use serde::{Deserialize, Serialize};

/// One node of a raw JSON text tree.
///
/// Unset fields inherit from the parent node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawText {
    #[serde(default)]
    pub text: String,

    /// Colour name (`dark_red`) or `#rrggbb`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insertion: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_event: Option<RawClickEvent>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_event: Option<RawHoverEvent>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<RawText>,
}

/// `clickEvent` object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClickEvent {
    pub action: String,
    pub value: String,
}

/// `hoverEvent` object. Only `show_text` is understood.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHoverEvent {
    pub action: String,
    #[serde(alias = "value")]
    pub contents: Box<RawText>,
}

const SHOW_TEXT: &str = "show_text";

/// Formatting and actions in effect at a node after inheritance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InheritedStyle {
    pub colour: Option<Colour>,
    pub styles: MessageStyle,
    pub hover: Option<JsonHover>,
    pub click: Option<ClickEventInfo>,
    pub insertion: Option<String>,
}

impl InheritedStyle {
    /// Apply a node's own settings on top of the inherited ones.
    fn apply(&self, node: &RawText) -> Self {
        let mut out = self.clone();
        if let Some(name) = &node.color {
            match parse_colour(name) {
                Some(colour) => out.colour = Some(colour),
                None => log_with(LogLevel::Warn, || {
                    format!("unknown colour {name:?} in raw text, keeping the inherited one")
                }),
            }
        }
        for (flag, style) in node.style_flags() {
            match flag {
                Some(true) => out.styles.insert(style),
                Some(false) => out.styles.remove(style),
                None => {}
            }
        }
        if let Some(insertion) = &node.insertion {
            out.insertion = Some(insertion.clone());
        }
        if let Some(click) = &node.click_event {
            match click.to_click_info() {
                Some(info) => out.click = Some(info),
                None => log_with(LogLevel::Debug, || {
                    format!("click action {:?} has no JSON.sk equivalent", click.action)
                }),
            }
        }
        if let Some(hover) = &node.hover_event {
            if hover.action == SHOW_TEXT {
                out.hover = Some(hover.contents.flatten_components());
            } else {
                log_with(LogLevel::Debug, || {
                    format!("hover action {:?} has no JSON.sk equivalent", hover.action)
                });
            }
        }
        out
    }

    fn component(&self, text: &str) -> ChatComponent {
        ChatComponent::new(self.colour, self.styles, text)
    }
}

impl RawClickEvent {
    fn to_click_info(&self) -> Option<ClickEventInfo> {
        ClickType::ALL
            .into_iter()
            .find(|kind| kind.action_name() == self.action)
            .map(|kind| ClickEventInfo::new(kind, self.value.clone()))
    }
}

impl From<&ClickEventInfo> for RawClickEvent {
    fn from(click: &ClickEventInfo) -> Self {
        Self {
            action: click.kind().action_name().to_string(),
            value: click.value().to_string(),
        }
    }
}

impl RawText {
    /// A node holding only text.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn style_flags(&self) -> [(Option<bool>, MessageStyle); 5] {
        [
            (self.obfuscated, MessageStyle::MAGIC),
            (self.bold, MessageStyle::BOLD),
            (self.strikethrough, MessageStyle::STRIKETHROUGH),
            (self.underlined, MessageStyle::UNDERLINE),
            (self.italic, MessageStyle::ITALIC),
        ]
    }

    fn from_component(component: &ChatComponent) -> Self {
        let flag = |style| component.styles().contains(style).then_some(true);
        Self {
            text: component.text().to_string(),
            color: component.colour().map(colour_name),
            bold: flag(MessageStyle::BOLD),
            italic: flag(MessageStyle::ITALIC),
            underlined: flag(MessageStyle::UNDERLINE),
            strikethrough: flag(MessageStyle::STRIKETHROUGH),
            obfuscated: flag(MessageStyle::MAGIC),
            ..Self::default()
        }
    }

    fn from_components(components: &[ChatComponent]) -> Self {
        Self {
            extra: components.iter().map(Self::from_component).collect(),
            ..Self::default()
        }
    }

    /// Build a tree: an empty root whose children are the sections, each
    /// carrying its actions and holding its components as children.
    #[must_use]
    pub fn from_message(message: &SendableMessage) -> Self {
        let sections = message
            .sections()
            .iter()
            .map(|section| {
                let mut node = Self::from_components(section.components());
                node.insertion = section.insertion().map(str::to_string);
                node.click_event = section.click().map(RawClickEvent::from);
                node.hover_event = section.hover().map(|hover| RawHoverEvent {
                    action: SHOW_TEXT.to_string(),
                    contents: Box::new(Self::from_components(hover.components())),
                });
                node
            })
            .collect();
        Self {
            extra: sections,
            ..Self::default()
        }
    }

    /// Visit every node depth-first with the style it inherits, including
    /// its own settings.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Self, &InheritedStyle),
    {
        self.walk_inner(&InheritedStyle::default(), &mut visit);
    }

    fn walk_inner<F>(&self, parent: &InheritedStyle, visit: &mut F)
    where
        F: FnMut(&Self, &InheritedStyle),
    {
        let style = parent.apply(self);
        visit(self, &style);
        for child in &self.extra {
            child.walk_inner(&style, visit);
        }
    }

    /// Flatten into a message. Actions the section model cannot express
    /// (other click or hover kinds) are dropped.
    #[must_use]
    pub fn to_message(&self) -> SendableMessage {
        let mut sections = Vec::new();
        self.walk(|node, style| {
            sections.push(JsonSection::new(
                [style.component(&node.text)],
                style.hover.clone(),
                style.click.clone(),
                style.insertion.clone(),
            ));
        });
        SendableMessage::new(sections)
    }

    /// Flatten into hover text, ignoring any actions.
    fn flatten_components(&self) -> JsonHover {
        let mut components = Vec::new();
        self.walk(|node, style| components.push(style.component(&node.text)));
        JsonHover::new(components)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(Error::from)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }
}

fn colour_name(colour: Colour) -> String {
    PredefinedColour::exact_to(colour).map_or_else(|| colour.to_hex(), |p| p.name().to_string())
}

fn parse_colour(name: &str) -> Option<Colour> {
    if name.starts_with('#') {
        return Colour::from_hex(name);
    }
    PredefinedColour::by_name(name).map(PredefinedColour::colour)
}
