// Criterion benchmarks for the City Guide API

use chrono::NaiveDate;
use city_guide_api::core::{filters::matches_search, QueryEngine};
use city_guide_api::models::{Listing, ListingKind, ListingQuery, QueryParams, SortKey};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const CATEGORIES: [&str; 5] = ["Recreation", "Outdoors", "Museum", "Arts", "Shopping"];

fn create_listing(id: u32) -> Listing {
    Listing {
        id,
        kind: ListingKind::Attraction,
        title: format!("Listing {}", id),
        description: format!("Description for listing {} in Macomb County", id),
        category: CATEGORIES[id as usize % CATEGORIES.len()].to_string(),
        address: format!("{} Hall Rd, Clinton Township, MI", 17000 + id),
        rating: 3.5 + (id % 15) as f64 * 0.1,
        price_level: Some((id % 3 + 1) as u8),
        price: None,
        date: NaiveDate::from_ymd_opt(2025, (id % 12 + 1) as u32, (id % 28 + 1) as u32),
        featured: id % 5 == 0,
    }
}

fn create_query() -> ListingQuery {
    ListingQuery {
        search: Some("county".to_string()),
        category: Some("Recreation".to_string()),
        sort: Some("rating-high".to_string()),
        page: Some("1".to_string()),
        limit: Some("9".to_string()),
        ..Default::default()
    }
}

fn bench_search_predicate(c: &mut Criterion) {
    let listing = create_listing(42);

    c.bench_function("matches_search", |b| {
        b.iter(|| matches_search(black_box(&listing), black_box("county")));
    });
}

fn bench_decode(c: &mut Criterion) {
    let engine = QueryEngine::new(9, 100);
    let raw = create_query();

    c.bench_function("decode_query_params", |b| {
        b.iter(|| engine.decode(black_box(&raw), black_box(SortKey::RatingHigh)));
    });
}

fn bench_query_pipeline(c: &mut Criterion) {
    let engine = QueryEngine::new(9, 100);
    let raw = create_query();
    let params: QueryParams = engine.decode(&raw, SortKey::RatingHigh);

    let mut group = c.benchmark_group("query");

    for catalog_size in [10, 50, 100, 500, 1000].iter() {
        let catalog: Vec<Listing> = (0..*catalog_size).map(create_listing).collect();

        group.bench_with_input(
            BenchmarkId::new("filter_sort_paginate", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| engine.query(black_box(&catalog), black_box(&params)));
            },
        );
    }

    group.finish();
}

fn bench_unfiltered_sort(c: &mut Criterion) {
    let engine = QueryEngine::new(9, 100);
    let catalog: Vec<Listing> = (0..100).map(create_listing).collect();
    let params = engine.decode(
        &ListingQuery {
            sort: Some("name-asc".to_string()),
            ..Default::default()
        },
        SortKey::NameAsc,
    );

    c.bench_function("sort_only_100_listings", |b| {
        b.iter(|| engine.query(black_box(&catalog), black_box(&params)));
    });
}

criterion_group!(
    benches,
    bench_search_predicate,
    bench_decode,
    bench_query_pipeline,
    bench_unfiltered_sort
);

criterion_main!(benches);
