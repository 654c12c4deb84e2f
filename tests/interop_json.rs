//! Raw JSON text conversion against markup.

use std::sync::{Arc, Mutex};

use jsonsk::interop::{InheritedStyle, RawText};
use jsonsk::{
    JsonSkSerialiser, LogLevel, MessageStyle, PredefinedColour, clear_log_callback,
    set_log_callback,
};

#[test]
fn markup_survives_json() {
    let serialiser = JsonSkSerialiser::new();
    for input in [
        "&aWelcome||ttp:&7Click me||cmd:/spawn",
        "&6&lGold &r&fwhite||url:https://example.com||ins:me||plain tail",
        "&c&o%VICTIM%&r&a was banned",
    ] {
        let message = serialiser.parse(input).expect("valid markup");
        let json = RawText::from_message(&message).to_json().expect("serialisable");
        let back = RawText::from_json(&json).expect("own output parses").to_message();
        assert_eq!(back, message, "json was {json}");
        assert_eq!(serialiser.to_markup(&back), input);
    }
}

#[test]
fn walk_reports_inherited_style() {
    let json = r#"{"text":"a","color":"dark_aqua","extra":[{"text":"b","underlined":true,"extra":[{"text":"c","color":"yellow"}]}]}"#;
    let root = RawText::from_json(json).expect("valid json");

    let mut seen: Vec<(String, InheritedStyle)> = Vec::new();
    root.walk(|node, style| seen.push((node.text.clone(), style.clone())));

    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].1.colour, Some(PredefinedColour::DarkAqua.colour()));
    assert_eq!(seen[1].1.styles, MessageStyle::UNDERLINE);
    assert_eq!(seen[2].1.colour, Some(PredefinedColour::Yellow.colour()));
    assert_eq!(seen[2].1.styles, MessageStyle::UNDERLINE);
}

#[test]
fn unknown_colour_name_is_logged_and_ignored() {
    let logged = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&logged);
    set_log_callback(move |level, message| {
        if let Ok(mut guard) = sink.lock() {
            guard.push((level, message.to_string()));
        }
    });

    let message = RawText::from_json(r#"{"text":"x","color":"chartreuse"}"#)
        .expect("valid json")
        .to_message();
    clear_log_callback();

    assert_eq!(message.sections()[0].components()[0].colour(), None);
    let logged = logged.lock().expect("not poisoned");
    assert!(
        logged
            .iter()
            .any(|(level, text)| *level == LogLevel::Warn && text.contains("chartreuse"))
    );
}
