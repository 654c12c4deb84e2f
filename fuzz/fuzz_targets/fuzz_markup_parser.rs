//! Fuzz target for the JSON.sk markup parser.
//!
//! Parsing arbitrary strings must never panic, and anything that parses must
//! serialise to markup that parses again.

#![no_main]

use jsonsk::{
    HexTagPolicy, JsonSkSerialiser, ParserOptions, SerialiserOptions, UnrepresentableColour,
    tokenize,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = tokenize(data);

    let strict = JsonSkSerialiser::with_options(
        ParserOptions::default().with_hex_tags(HexTagPolicy::Strict),
        SerialiserOptions::default(),
    );
    let _ = strict.parse(data);

    let serialiser = JsonSkSerialiser::with_options(
        ParserOptions::default(),
        SerialiserOptions::default().with_unrepresentable(UnrepresentableColour::HexTag),
    );
    if let Ok(message) = serialiser.parse(data) {
        let markup = serialiser.to_markup(&message);
        // Literal text such as `&c` can read back as a code, so only
        // successful parsing is checked here.
        assert!(serialiser.parse(&markup).is_ok(), "unparseable output {markup:?}");
    }
});
