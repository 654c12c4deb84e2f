//! Markup parsing and serialisation benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jsonsk::interop::RawText;
use jsonsk::{JsonSkSerialiser, LegacyCodeSerialiser, Serialiser, tokenize};
use std::hint::black_box;

const SAMPLE_MARKUP: [&str; 4] = [
    "Plain text without any codes at all",
    "&aBanned &c&o%VICTIM%&r&a for &a&o%DURATION%&r&a because of &e&o%REASON%&r&a.",
    "&aWelcome||ttp:&7Click me||cmd:/spawn|| &fand ||sgt:/msg ||ins:name",
    "<#123456>deep &lblue with |||| pipes||url:https://example.com",
];

fn build_markup(sections: usize) -> String {
    let section = "&6&lGold &r&7text||ttp:&ehover||cmd:/run";
    let mut markup = String::with_capacity(sections * (section.len() + 2));
    for i in 0..sections {
        if i > 0 {
            markup.push_str("||");
        }
        markup.push_str(section);
    }
    markup
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("markup_tokenize");
    for (idx, input) in SAMPLE_MARKUP.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("sample", idx), input, |b, input| {
            b.iter(|| tokenize(black_box(input)));
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let serialiser = JsonSkSerialiser::new();
    let mut group = c.benchmark_group("markup_parse");
    for (idx, input) in SAMPLE_MARKUP.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("sample", idx), input, |b, input| {
            b.iter(|| serialiser.parse(black_box(input)));
        });
    }
    for sections in [10, 100] {
        let markup = build_markup(sections);
        group.bench_with_input(BenchmarkId::new("sections", sections), &markup, |b, input| {
            b.iter(|| serialiser.parse(black_box(input)));
        });
    }
    group.finish();
}

fn bench_serialise(c: &mut Criterion) {
    let serialiser = JsonSkSerialiser::new();
    let mut group = c.benchmark_group("markup_serialise");
    for sections in [1, 10, 100] {
        let message = serialiser
            .parse(&build_markup(sections))
            .expect("benchmark markup is valid");
        group.bench_with_input(BenchmarkId::new("sections", sections), &message, |b, message| {
            b.iter(|| serialiser.to_markup(black_box(message)));
        });
    }
    group.finish();
}

fn bench_legacy(c: &mut Criterion) {
    let serialiser = LegacyCodeSerialiser::new();
    let input = SAMPLE_MARKUP[1];
    let message = serialiser.deserialise(input).expect("benchmark markup is valid");

    c.bench_function("legacy_deserialise", |b| {
        b.iter(|| serialiser.deserialise(black_box(input)));
    });
    c.bench_function("legacy_serialise", |b| {
        b.iter(|| serialiser.serialise(black_box(&message)));
    });
}

fn bench_raw_json(c: &mut Criterion) {
    let message = JsonSkSerialiser::new()
        .parse(&build_markup(10))
        .expect("benchmark markup is valid");
    let json = RawText::from_message(&message)
        .to_json()
        .expect("benchmark message serialises");

    c.bench_function("raw_json_from_message", |b| {
        b.iter(|| RawText::from_message(black_box(&message)).to_json());
    });
    c.bench_function("raw_json_to_message", |b| {
        b.iter(|| RawText::from_json(black_box(&json)).map(|raw| raw.to_message()));
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_serialise,
    bench_legacy,
    bench_raw_json
);
criterion_main!(benches);
