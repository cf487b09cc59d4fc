// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use movie_title_translator::domain::card::{cards_from_page, truncate_overview};
use movie_title_translator::domain::movie::SearchPage;
use std::hint::black_box;

const SEARCH_BODY: &str = include_str!("../tests/fixtures/search_the_godfather.json");

fn card_mapping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("card_mapping");

    let page: SearchPage = serde_json::from_str(SEARCH_BODY).unwrap();
    let overview = page.results[0].overview.clone();

    group.bench_function("truncate_overview", |b| {
        b.iter(|| black_box(truncate_overview(black_box(&overview), 170)));
    });

    group.bench_function("cards_from_page", |b| {
        b.iter(|| black_box(cards_from_page(black_box(&page), 170)));
    });

    group.bench_function("parse_and_map_search_page", |b| {
        b.iter(|| {
            let page: SearchPage = serde_json::from_str(black_box(SEARCH_BODY)).unwrap();
            black_box(cards_from_page(&page, 170))
        });
    });

    group.finish();
}

criterion_group!(benches, card_mapping_benchmark);
criterion_main!(benches);
