use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use sitelex::{builtins::GmlBuiltins, registry::Registry, render};

const KATS_SNIPPET: &str = r#"-- fold a list
fun sum(xs :List) :Int
    let acc = 0
    for x in xs
        acc = acc + x
    ret acc
let total = sum([1, 2, 3.5, "<four>"])
"#;

fn bench_render(c: &mut Criterion) {
    let registry = Registry::new(GmlBuiltins::default()).expect("built-in rule tables compile");
    let src = KATS_SNIPPET.repeat(300);
    let tokens = registry.lex("kats", &src).unwrap();

    let mut group = c.benchmark_group("render_benchmarks");

    group.bench_function("html_spans", |b| b.iter(|| render::html(black_box(&tokens))));

    group.bench_function("highlight_block_end_to_end", |b| {
        b.iter(|| render::highlight_block(&registry, black_box("kats"), black_box(&src)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
