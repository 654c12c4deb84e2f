//! Pipe-delimited JSON.sk tokenizer.
//!
//! Input is split into segments on `||`. The first segment, and every
//! segment without a tag prefix, is plain text and starts a new part. A
//! segment starting with a tag prefix attaches an action to the current
//! part:
//!
//! | Prefix | Event |
//! |---|---|
//! | `ttp:` | [`MarkupEvent::Hover`] |
//! | `cmd:` | [`MarkupEvent::Click`] with [`ClickType::RunCommand`] |
//! | `sgt:` | [`MarkupEvent::Click`] with [`ClickType::SuggestCommand`] |
//! | `url:` | [`MarkupEvent::Click`] with [`ClickType::OpenUrl`] |
//! | `ins:` | [`MarkupEvent::Insertion`] |
//!
//! A `nil:` prefix makes a segment plain text and is stripped once.
//!
//! # Pipe runs
//!
//! Pipes are read in runs. An odd run gives its first pipe to the text on
//! the left. Of the remaining even run, every four pipes are one literal
//! `||` and a leftover pair is the delimiter:
//!
//! ```text
//! a||b        -> "a", "b"
//! a||||b      -> "a||b"
//! a||||||b    -> "a||", "b"
//! a||||||||b  -> "a||||b"
//! a|||b       -> "a|", "b"
//! ```
//!
//! A delimiter with nothing after it is kept as a literal `||`.

use crate::error::Result;
use crate::section::ClickType;
use std::convert::Infallible;

/// Segment delimiter.
pub const DELIMITER: &str = "||";

/// An escaped literal `||`.
pub const ESCAPED_DELIMITER: &str = "||||";

/// Prefix that disables tag recognition for one segment.
pub const NIL_PREFIX: &str = "nil:";

/// Hover text prefix.
pub const HOVER_PREFIX: &str = "ttp:";

/// Insertion prefix.
pub const INSERTION_PREFIX: &str = "ins:";

/// Structural event produced by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MarkupEvent {
    /// Text of a new part, still carrying its legacy codes.
    PlainText(String),
    /// Hover text for the current part, still carrying its legacy codes.
    Hover(String),
    /// Click action for the current part.
    Click(ClickType, String),
    /// Insertion text for the current part.
    Insertion(String),
}

/// Receiver for tokenizer events, called in input order.
///
/// Returning an error stops tokenizing and passes the error to the caller.
pub trait MarkupVisitor {
    fn plain_text(&mut self, text: &str) -> Result<()>;

    fn hover(&mut self, text: &str) -> Result<()>;

    fn click(&mut self, kind: ClickType, value: &str) -> Result<()>;

    fn insertion(&mut self, text: &str) -> Result<()>;
}

/// Collects events into a list.
#[derive(Clone, Debug, Default)]
pub struct EventCollector {
    events: Vec<MarkupEvent>,
}

impl EventCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_events(self) -> Vec<MarkupEvent> {
        self.events
    }
}

impl MarkupVisitor for EventCollector {
    fn plain_text(&mut self, text: &str) -> Result<()> {
        self.events.push(MarkupEvent::PlainText(text.to_string()));
        Ok(())
    }

    fn hover(&mut self, text: &str) -> Result<()> {
        self.events.push(MarkupEvent::Hover(text.to_string()));
        Ok(())
    }

    fn click(&mut self, kind: ClickType, value: &str) -> Result<()> {
        self.events.push(MarkupEvent::Click(kind, value.to_string()));
        Ok(())
    }

    fn insertion(&mut self, text: &str) -> Result<()> {
        self.events.push(MarkupEvent::Insertion(text.to_string()));
        Ok(())
    }
}

/// Tokenize `input` into a list of events.
///
/// Always yields at least one [`MarkupEvent::PlainText`], even for empty input.
#[must_use]
pub fn tokenize(input: &str) -> Vec<MarkupEvent> {
    let mut events = Vec::new();
    let Ok(()) = scan(input, |part| {
        events.push(part.to_event());
        Ok::<(), Infallible>(())
    });
    events
}

/// Tokenize `input`, feeding events to `visitor` as each segment completes.
pub fn drive<V: MarkupVisitor + ?Sized>(input: &str, visitor: &mut V) -> Result<()> {
    scan(input, |part| match part {
        Part::PlainText(text) => visitor.plain_text(text),
        Part::Hover(text) => visitor.hover(text),
        Part::Click(kind, value) => visitor.click(kind, value),
        Part::Insertion(text) => visitor.insertion(text),
    })
}

/// A classified segment, borrowed from the scanner's buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Part<'a> {
    PlainText(&'a str),
    Hover(&'a str),
    Click(ClickType, &'a str),
    Insertion(&'a str),
}

impl Part<'_> {
    fn to_event(self) -> MarkupEvent {
        match self {
            Part::PlainText(text) => MarkupEvent::PlainText(text.to_string()),
            Part::Hover(text) => MarkupEvent::Hover(text.to_string()),
            Part::Click(kind, value) => MarkupEvent::Click(kind, value.to_string()),
            Part::Insertion(text) => MarkupEvent::Insertion(text.to_string()),
        }
    }
}

/// Split `input` on delimiters and hand each classified segment to `emit`.
fn scan<E>(
    input: &str,
    mut emit: impl FnMut(Part<'_>) -> std::result::Result<(), E>,
) -> std::result::Result<(), E> {
    let mut segment = String::new();
    let mut first = true;
    let mut rest = input;

    while let Some(idx) = rest.find('|') {
        segment.push_str(&rest[..idx]);
        let run_len = rest[idx..].bytes().take_while(|&b| b == b'|').count();
        rest = &rest[idx + run_len..];

        let mut even_run = run_len;
        if even_run % 2 == 1 {
            segment.push('|');
            even_run -= 1;
        }
        for _ in 0..even_run / 4 {
            segment.push_str(DELIMITER);
        }
        if even_run % 4 == 2 {
            if rest.is_empty() {
                segment.push_str(DELIMITER);
            } else {
                emit(classify(&segment, first))?;
                segment.clear();
                first = false;
            }
        }
    }

    segment.push_str(rest);
    emit(classify(&segment, first))
}

fn classify(segment: &str, first: bool) -> Part<'_> {
    if let Some(text) = segment.strip_prefix(NIL_PREFIX) {
        return Part::PlainText(text);
    }
    if first {
        return Part::PlainText(segment);
    }
    if let Some(text) = segment.strip_prefix(HOVER_PREFIX) {
        return Part::Hover(text);
    }
    if let Some(text) = segment.strip_prefix(INSERTION_PREFIX) {
        return Part::Insertion(text);
    }
    ClickType::ALL
        .into_iter()
        .find_map(|kind| strip_click_prefix(segment, kind).map(|value| Part::Click(kind, value)))
        .unwrap_or(Part::PlainText(segment))
}

fn strip_click_prefix(segment: &str, kind: ClickType) -> Option<&str> {
    segment.strip_prefix(kind.tag())?.strip_prefix(':')
}

/// Whether a plain-text segment must be written with a `nil:` prefix to
/// read back as plain text.
#[must_use]
pub fn needs_nil_prefix(text: &str) -> bool {
    text.starts_with('|')
        || text.starts_with(NIL_PREFIX)
        || text.starts_with(HOVER_PREFIX)
        || text.starts_with(INSERTION_PREFIX)
        || ClickType::ALL
            .into_iter()
            .any(|kind| strip_click_prefix(text, kind).is_some())
}

/// Double every `||` so it reads back as text rather than a delimiter.
#[must_use]
pub fn escape_pipes(text: &str) -> String {
    text.replace(DELIMITER, ESCAPED_DELIMITER)
}
