//! Legacy-code writer with state tracking.

use crate::colour::{Colour, PredefinedColour};
use crate::component::ChatComponent;
use crate::event::{LogLevel, log_with};
use crate::markup::legacy::{CODE_CHAR, RESET_CHAR};
use crate::markup::options::{SerialiserOptions, UnrepresentableColour};
use crate::style::MessageStyle;

/// Writes components as `&` codes plus text, tracking the colour and styles
/// a reader would have active so that unchanged state is never re-emitted.
///
/// When a component's formatting differs from the tracked state:
///
/// 1. `&r` is written if a style must be turned off or the colour cleared
/// 2. the colour code is written if the component has a colour
/// 3. codes for styles not yet active are written in code order
#[derive(Clone, Debug)]
pub struct CodeWriter {
    buffer: String,
    options: SerialiserOptions,

    // Current state for delta encoding
    current_colour: Option<Colour>,
    current_styles: MessageStyle,
}

impl CodeWriter {
    #[must_use]
    pub fn new(options: SerialiserOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
            current_colour: None,
            current_styles: MessageStyle::empty(),
        }
    }

    /// Forget the tracked state, as a reader does at a section boundary.
    pub fn reset_state(&mut self) {
        self.current_colour = None;
        self.current_styles = MessageStyle::empty();
    }

    /// Write every component in order.
    pub fn write_components(&mut self, components: &[ChatComponent]) {
        for component in components {
            self.write_component(component);
        }
    }

    /// Write one component, preceded by the codes needed to reach its state.
    pub fn write_component(&mut self, component: &ChatComponent) {
        let colour = self.resolve(component.colour());
        self.set_state(colour, component.styles());
        self.buffer.push_str(component.text());
    }

    fn set_state(&mut self, colour: Option<Colour>, styles: MessageStyle) {
        if self.current_colour == colour && self.current_styles == styles {
            return;
        }

        let removed = self.current_styles - styles;
        if !removed.is_empty() || (colour.is_none() && self.current_colour.is_some()) {
            self.push_code(RESET_CHAR);
            self.reset_state();
        }

        if let Some(colour) = colour {
            match PredefinedColour::exact_to(colour) {
                Some(predefined) => self.push_code(predefined.code()),
                None => {
                    self.buffer.push('<');
                    self.buffer.push_str(&colour.to_hex());
                    self.buffer.push('>');
                }
            }
            self.current_colour = Some(colour);
            if self.options.colour_codes.resets_styles() {
                self.current_styles = MessageStyle::empty();
            }
        }

        for code in (styles - self.current_styles).codes() {
            self.push_code(code);
        }
        self.current_styles = styles;
    }

    /// Map a component colour to the colour that will actually be written.
    fn resolve(&self, colour: Option<Colour>) -> Option<Colour> {
        let colour = colour?;
        if PredefinedColour::exact_to(colour).is_some() {
            return Some(colour);
        }
        match self.options.unrepresentable {
            UnrepresentableColour::Nearest => {
                let nearest = PredefinedColour::nearest_to(colour);
                log_with(LogLevel::Warn, || {
                    format!("colour {colour} has no legacy code, writing {nearest} instead")
                });
                Some(nearest.colour())
            }
            UnrepresentableColour::Discard => {
                log_with(LogLevel::Warn, || {
                    format!("colour {colour} has no legacy code, dropping it")
                });
                None
            }
            UnrepresentableColour::HexTag => Some(colour),
        }
    }

    fn push_code(&mut self, code: char) {
        self.buffer.push(CODE_CHAR);
        self.buffer.push(code);
    }

    /// Written output so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Take the written output, leaving the writer empty with reset state.
    pub fn take(&mut self) -> String {
        self.reset_state();
        std::mem::take(&mut self.buffer)
    }

    /// Consume the writer, returning its output.
    #[must_use]
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Write `components` from a clean state.
#[must_use]
pub fn write_components(components: &[ChatComponent], options: SerialiserOptions) -> String {
    let mut writer = CodeWriter::new(options);
    writer.write_components(components);
    writer.finish()
}
