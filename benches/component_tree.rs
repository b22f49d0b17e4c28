//! Component tree micro-benchmarks
//!
//! Measures flattening, text replacement and compaction over generated trees
//! of increasing width.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use quill::prelude::*;
use std::hint::black_box;

/// A root with `width` styled lines, each carrying a hover tooltip.
fn chat_log(width: usize) -> Component {
    let lines = (0..width).map(|i| {
        let color = if i % 3 == 0 { NamedTextColor::Gold } else { NamedTextColor::Gray };
        Component::text(format!("[{i}] "))
            .with_color(color)
            .append(Component::text("player").decorate(Decoration::Bold))
            .append(Component::text(" said hello to everyone in the lobby").with_color(color))
            .with_hover_event(HoverEvent::show_text(format!("message {i}")))
            .append_newline()
    });
    Component::text("").with_children(lines)
}

fn benchmark_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for width in [10, 100, 1000] {
        let tree = chat_log(width);
        group.bench_with_input(BenchmarkId::new("lines", width), &tree, |b, tree| {
            b.iter(|| ComponentFlattener::basic().flatten_to_string(black_box(tree)));
        });
    }

    group.finish();
}

fn benchmark_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_text");
    let config = TextReplacementConfig::builder()
        .match_literal("hello")
        .replacement(Component::text("hi").with_color(NamedTextColor::Green))
        .build()
        .expect("Failed to build replacement config");

    for width in [10, 100, 1000] {
        let tree = chat_log(width);
        group.bench_with_input(BenchmarkId::new("lines", width), &tree, |b, tree| {
            b.iter(|| black_box(tree).replace_text(&config));
        });
    }

    group.finish();
}

fn benchmark_compact(c: &mut Criterion) {
    let mut group = c.benchmark_group("compact");

    for width in [10, 100, 1000] {
        let tree = chat_log(width);
        group.bench_with_input(BenchmarkId::new("lines", width), &tree, |b, tree| {
            b.iter(|| black_box(tree).compact());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_flatten, benchmark_replace, benchmark_compact);
criterion_main!(benches);
