// ABOUTME: Criterion benchmarks for the feeding and recommendation engine
// ABOUTME: Measures catalog scoring, ranking, price positioning, and feeding plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for engine operations.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_catalog, CatalogSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pawplan::config::EngineConfig;
use pawplan::models::{PetProfile, Species};
use pawplan::nutrition_calculator::calculate_feeding_plan;
use pawplan::price_position::summarize_sku_price;
use pawplan::recommendation_engine::{recommend_products_with_score, score_products};

fn bench_score_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_products");
    let config = EngineConfig::default();
    let profile = PetProfile::new(Species::Dog, 8.0, true, 3).with_allergies(["닭"]);

    for size in [CatalogSize::Small, CatalogSize::Medium, CatalogSize::Large] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("score", size.count()),
            &catalog,
            |b, catalog| {
                b.iter(|| score_products(black_box(catalog), black_box(&profile), &config));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("recommend_with_score", size.count()),
            &catalog,
            |b, catalog| {
                b.iter(|| {
                    recommend_products_with_score(black_box(catalog), black_box(&profile), &config)
                });
            },
        );
    }

    group.finish();
}

fn bench_price_position(c: &mut Criterion) {
    let config = EngineConfig::default();
    let catalog = generate_catalog(CatalogSize::Small);
    let Some(sku) = catalog[0].first_sku() else {
        return;
    };

    c.bench_function("summarize_sku_price", |b| {
        b.iter(|| summarize_sku_price(black_box(sku), &config.pricing));
    });
}

fn bench_feeding_plan(c: &mut Criterion) {
    let config = EngineConfig::default();
    let profile = PetProfile::new(Species::Cat, 4.2, false, 4);

    c.bench_function("calculate_feeding_plan", |b| {
        b.iter(|| {
            calculate_feeding_plan(
                black_box(&profile),
                black_box(3_850.0),
                &config.nutrition.energy,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_score_products,
    bench_price_position,
    bench_feeding_plan
);
criterion_main!(benches);
