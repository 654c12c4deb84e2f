//! Full JSON.sk format.

use crate::component::ChatComponent;
use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::markup::legacy;
use crate::markup::options::{ParserOptions, SerialiserOptions};
use crate::markup::tokenizer::{
    self, DELIMITER, HOVER_PREFIX, INSERTION_PREFIX, MarkupVisitor, NIL_PREFIX,
};
use crate::message::SendableMessage;
use crate::section::{ClickEventInfo, ClickType, JsonHover, JsonSection};
use crate::serialiser::Serialiser;
use crate::serialiser::writer::CodeWriter;

/// JSON.sk reader and writer.
///
/// Output follows these rules:
///
/// - sections are joined with `||`
/// - each section's actions follow its text as `||ttp:`, `||cmd:`/`||sgt:`/`||url:`, `||ins:`
/// - every `||` inside text or payloads is doubled
/// - text that would read back as a tag, or that starts with `|`, gets a `nil:` prefix
///
/// Reading the output back with matching options yields an equal message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonSkSerialiser {
    parser: ParserOptions,
    writer: SerialiserOptions,
}

impl JsonSkSerialiser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(parser: ParserOptions, writer: SerialiserOptions) -> Self {
        Self { parser, writer }
    }

    #[must_use]
    pub const fn parser_options(&self) -> &ParserOptions {
        &self.parser
    }

    #[must_use]
    pub const fn serialiser_options(&self) -> &SerialiserOptions {
        &self.writer
    }

    /// Serialise and never fail. JSON.sk can express every message.
    #[must_use]
    pub fn to_markup(&self, message: &SendableMessage) -> String {
        let mut out = String::new();
        let mut writer = CodeWriter::new(self.writer);

        for (index, section) in message.sections().iter().enumerate() {
            if index > 0 {
                out.push_str(DELIMITER);
            }

            writer.write_components(section.components());
            let text = tokenizer::escape_pipes(&writer.take());
            if tokenizer::needs_nil_prefix(&text) {
                out.push_str(NIL_PREFIX);
            }
            out.push_str(&text);

            if let Some(hover) = section.hover() {
                writer.write_components(hover.components());
                push_tag(&mut out, HOVER_PREFIX, &writer.take());
            }
            if let Some(click) = section.click() {
                let (tag, value) = click.to_tag_and_value();
                out.push_str(DELIMITER);
                out.push_str(tag);
                out.push(':');
                out.push_str(&tokenizer::escape_pipes(value));
            }
            if let Some(insertion) = section.insertion() {
                push_tag(&mut out, INSERTION_PREFIX, insertion);
            }
        }
        out
    }

    /// Parse markup into a message.
    pub fn parse(&self, input: &str) -> Result<SendableMessage> {
        let mut assembler = MessageAssembler::new(&self.parser);
        tokenizer::drive(input, &mut assembler)?;
        Ok(assembler.finish())
    }
}

fn push_tag(out: &mut String, prefix: &str, payload: &str) {
    out.push_str(DELIMITER);
    out.push_str(prefix);
    out.push_str(&tokenizer::escape_pipes(payload));
}

impl Serialiser for JsonSkSerialiser {
    fn serialise(&self, message: &SendableMessage) -> Result<String> {
        Ok(self.to_markup(message))
    }

    fn deserialise(&self, input: &str) -> Result<SendableMessage> {
        self.parse(input)
    }
}

/// Section under construction.
#[derive(Debug, Default)]
struct PendingSection {
    components: Vec<ChatComponent>,
    hover: Option<JsonHover>,
    click: Option<ClickEventInfo>,
    insertion: Option<String>,
}

impl PendingSection {
    fn build(self) -> JsonSection {
        JsonSection::new(self.components, self.hover, self.click, self.insertion)
    }
}

/// Visitor that turns tokenizer events into a [`SendableMessage`].
struct MessageAssembler<'a> {
    options: &'a ParserOptions,
    sections: Vec<JsonSection>,
    current: Option<PendingSection>,
}

impl<'a> MessageAssembler<'a> {
    const fn new(options: &'a ParserOptions) -> Self {
        Self {
            options,
            sections: Vec::new(),
            current: None,
        }
    }

    fn current(&mut self) -> &mut PendingSection {
        self.current.get_or_insert_with(PendingSection::default)
    }

    fn finish(mut self) -> SendableMessage {
        if let Some(pending) = self.current.take() {
            self.sections.push(pending.build());
        }
        SendableMessage::new(self.sections)
    }
}

impl MarkupVisitor for MessageAssembler<'_> {
    fn plain_text(&mut self, text: &str) -> Result<()> {
        let components = legacy::parse(text, self.options)?;
        if let Some(pending) = self.current.replace(PendingSection {
            components,
            ..PendingSection::default()
        }) {
            self.sections.push(pending.build());
        }
        Ok(())
    }

    fn hover(&mut self, text: &str) -> Result<()> {
        let hover = JsonHover::new(legacy::parse(text, self.options)?);
        if self.current().hover.replace(hover).is_some() {
            emit_log(LogLevel::Debug, "repeated hover tag, keeping the last one");
        }
        Ok(())
    }

    fn click(&mut self, kind: ClickType, value: &str) -> Result<()> {
        let click = ClickEventInfo::new(kind, value);
        if self.current().click.replace(click).is_some() {
            emit_log(LogLevel::Debug, "repeated click tag, keeping the last one");
        }
        Ok(())
    }

    fn insertion(&mut self, text: &str) -> Result<()> {
        if self.current().insertion.replace(text.to_string()).is_some() {
            emit_log(LogLevel::Debug, "repeated insertion tag, keeping the last one");
        }
        Ok(())
    }
}
