use blog_charts::api::BlogChartsConfig;
use blog_charts::catalog::ChartCatalog;
use blog_charts::core::{pairwise_ratio, range_labels, ratio};
use blog_charts::render::{EchartsScriptRenderer, Renderer};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_ratio_10k(c: &mut Criterion) {
    let values: Vec<f64> = (0..10_000).map(|i| 40.0 + f64::from(i) * 0.01).collect();
    let baselines: Vec<f64> = (0..10_000).map(|i| 50.0 + f64::from(i) * 0.02).collect();

    c.bench_function("ratio_10k", |b| {
        b.iter(|| ratio(black_box(&values), black_box(55.297)).expect("ratio"))
    });
    c.bench_function("pairwise_ratio_10k", |b| {
        b.iter(|| pairwise_ratio(black_box(&values), black_box(&baselines)).expect("ratio"))
    });
}

fn bench_range_labels_10k(c: &mut Criterion) {
    c.bench_function("range_labels_10k", |b| {
        b.iter(|| range_labels(black_box(10_000), black_box(100)).expect("labels"))
    });
}

fn bench_catalog_render(c: &mut Criterion) {
    let config = BlogChartsConfig::default();
    let catalog = ChartCatalog::blog(&config).expect("catalog");

    c.bench_function("catalog_build", |b| {
        b.iter(|| ChartCatalog::blog(black_box(&config)).expect("catalog"))
    });
    c.bench_function("catalog_render_scripts", |b| {
        b.iter(|| {
            let mut renderer = EchartsScriptRenderer::new(&config);
            for entry in catalog.iter() {
                renderer.render(&entry.definition).expect("render");
            }
            renderer.len()
        })
    });
}

criterion_group!(
    benches,
    bench_ratio_10k,
    bench_range_labels_10k,
    bench_catalog_render
);
criterion_main!(benches);
