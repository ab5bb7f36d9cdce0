#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Rendering benchmarks: urlrender vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// urlrender
use urlrender::{Deployment, Renderer, Url};

// Rust url crate
use url::Url as UrlCrate;

const BASE: &str = "http://www.example.com/shop/app/products/list/page";

const TARGETS: &[&str] = &[
    "http://www.example.com/shop/app/products/list/other?x=1",
    "http://www.example.com/shop/app/cart/add;jsessionid=1p87c5424zjuvd57kljcu2bwa?item=12",
    "http://www.example.com/shop/app/products/list/page/detail/42#reviews",
    "http://www.example.com/shop/static/css/site.css",
];

fn bench_parse_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let input = TARGETS[1];

    group.bench_function("urlrender", |b| {
        b.iter(|| Url::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_relative_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_relative");

    let deployment = Deployment::new("/shop", "/app");
    let renderer = Renderer::with_deployment(Url::parse(BASE).unwrap(), deployment);
    let targets: Vec<Url> = TARGETS.iter().map(|t| Url::parse(t).unwrap()).collect();
    group.bench_function("urlrender", |b| {
        b.iter(|| {
            for target in &targets {
                black_box(renderer.render_relative_url(black_box(target)));
            }
        });
    });

    let base = UrlCrate::parse(BASE).unwrap();
    let targets: Vec<UrlCrate> = TARGETS.iter().map(|t| UrlCrate::parse(t).unwrap()).collect();
    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for target in &targets {
                black_box(base.make_relative(black_box(target)));
            }
        });
    });

    group.finish();
}

fn bench_full_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_full");
    let references = ["../four", "./x/../y?q=1", "/root/path", "a/b/c/../../d#top"];

    let renderer = Renderer::new(Url::parse(BASE).unwrap());
    let parsed: Vec<Url> = references.iter().map(|r| Url::parse(r).unwrap()).collect();
    group.bench_function("urlrender", |b| {
        b.iter(|| {
            for reference in &parsed {
                black_box(renderer.render_full_url(black_box(reference)));
            }
        });
    });

    let base = UrlCrate::parse(BASE).unwrap();
    group.bench_function("url_crate", |b| {
        b.iter(|| {
            for reference in &references {
                black_box(base.join(black_box(reference)).unwrap().to_string());
            }
        });
    });

    group.finish();
}

fn bench_render_url_decision(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_url");
    let renderer = Renderer::new(Url::parse(BASE).unwrap());
    let targets: Vec<Url> = [
        "products/list/other",
        "https://www.example.com/secure/login",
        "//cdn.example.com/lib.js",
        "/absolute/path",
    ]
    .iter()
    .map(|t| Url::parse(t).unwrap())
    .collect();

    group.bench_function("urlrender", |b| {
        b.iter(|| {
            for target in &targets {
                black_box(renderer.render_url(black_box(target)));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_all,
    bench_relative_all,
    bench_full_all,
    bench_render_url_decision
);
criterion_main!(benches);
