// ABOUTME: Tests for product scoring, allergen safety, ranking, and recommendation reasons
// ABOUTME: Covers nearest-match ranking, price tie-breaks, the never-empty fallback, and reason rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pawplan::{
    config::EngineConfig,
    models::{PetProfile, Species},
    price_position::PricePositionLabel,
    recommendation_engine::{
        generate_recommendation_reasons, products_for_species, recommend_products,
        recommend_products_with_score, score_products, RecommendationEngine,
    },
};

mod common;

// ============================================================================
// RANKING
// ============================================================================

#[test]
fn test_exact_target_match_ranks_first() {
    common::init_test_logging();
    let config = EngineConfig::default();
    let a = common::small_dog_target_product("A");
    let b = common::product("B", 24.0, 13.0, 3.0, 7.0, 10.0);
    let catalog = vec![b, a];

    let ranked = recommend_products(&catalog, &common::dog(5.0), &config);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].id, "A");
    assert_eq!(ranked[1].id, "B");
}

#[test]
fn test_allergen_product_is_excluded() {
    let config = EngineConfig::default();
    let a = common::with_allergens(common::small_dog_target_product("A"), &["닭"]);
    let b = common::product("B", 24.0, 13.0, 3.0, 7.0, 10.0);
    let catalog = vec![b, a];
    let profile = common::dog(5.0).with_allergies(["닭"]);

    let ranked = recommend_products(&catalog, &profile, &config);
    let ids: Vec<&str> = ranked.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["B"]);
}

#[test]
fn test_no_safe_product_result_is_only_safe_products() {
    let config = EngineConfig::default();
    let catalog = vec![
        common::with_allergens(common::product("beef", 26.0, 14.0, 3.0, 7.0, 10.0), &["소고기"]),
        common::with_allergens(common::product("chicken", 27.0, 15.0, 3.0, 7.0, 10.0), &["닭"]),
        common::product("fish", 30.0, 18.0, 4.0, 8.0, 10.0),
    ];
    let profile = common::dog(12.0).with_allergies(["닭", "소고기"]);

    let ranked = recommend_products_with_score(&catalog, &profile, &config);
    assert!(ranked.iter().all(|s| s.is_safe));
    assert!(ranked
        .iter()
        .all(|s| !s.product.allergens.contains("닭") && !s.product.allergens.contains("소고기")));
    assert_eq!(ranked.len(), 1);
}

#[test]
fn test_all_unsafe_falls_back_to_closest_five() {
    common::init_test_logging();
    let config = EngineConfig::default();
    // Protein drifts further from 28 with each product
    let catalog: Vec<_> = (0..7)
        .rev()
        .map(|i| {
            let product = common::product(
                &format!("p{i}"),
                28.0 + f64::from(i),
                15.0,
                3.0,
                7.0,
                10.0,
            );
            common::with_allergens(product, &["닭"])
        })
        .collect();
    let profile = common::dog(5.0).with_allergies(["닭"]);

    let ranked = recommend_products_with_score(&catalog, &profile, &config);
    let ids: Vec<&str> = ranked.iter().map(|s| s.product.id.as_str()).collect();
    assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4"]);
    assert!(ranked.iter().all(|s| !s.is_safe));
}

#[test]
fn test_never_empty_for_non_empty_catalog() {
    let config = EngineConfig::default();
    let catalog = vec![common::with_allergens(
        common::product("only", 20.0, 20.0, 5.0, 8.0, 12.0),
        &["연어"],
    )];
    let profile = common::dog(30.0).with_allergies(["연어"]);
    assert_eq!(recommend_products(&catalog, &profile, &config).len(), 1);
    assert!(recommend_products(&[], &profile, &config).is_empty());
}

#[test]
fn test_equal_distance_tie_broken_by_price_position() {
    let config = EngineConfig::default();
    // Same analysis; "pricey" sits at its historical high, "deal" near its low
    let pricey = common::with_prices(
        common::small_dog_target_product("pricey"),
        40_000.0,
        &[30_000.0, 35_000.0, 40_000.0],
    );
    let deal = common::with_prices(
        common::small_dog_target_product("deal"),
        31_000.0,
        &[30_000.0, 35_000.0, 40_000.0],
    );
    let catalog = vec![pricey, deal];

    let ranked = recommend_products_with_score(&catalog, &common::dog(5.0), &config);
    assert_eq!(ranked[0].product.id, "deal");
    assert!(ranked[0].price_position < ranked[1].price_position);
}

#[test]
fn test_fallback_limit_is_configurable() {
    let mut config = EngineConfig::default();
    config.recommendation.fallback_limit = 2;
    let catalog: Vec<_> = (0..4)
        .map(|i| {
            common::with_allergens(
                common::product(&format!("p{i}"), 28.0, 15.0 + f64::from(i), 3.0, 7.0, 10.0),
                &["닭"],
            )
        })
        .collect();
    let engine = RecommendationEngine::with_config(config);
    let profile = common::dog(5.0).with_allergies(["닭"]);

    let ranked = engine.recommend(&catalog, &profile);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].id, "p0");
}

// ============================================================================
// SCORING
// ============================================================================

#[test]
fn test_scores_preserve_input_order() {
    let config = EngineConfig::default();
    let catalog = vec![
        common::product("far", 18.0, 8.0, 6.0, 9.0, 12.0),
        common::small_dog_target_product("exact"),
        common::with_allergens(common::product("unsafe", 28.0, 15.0, 3.0, 7.0, 10.0), &["닭"]),
    ];
    let profile = common::dog(5.0).with_allergies(["닭"]);

    let scored = score_products(&catalog, &profile, &config);
    let ids: Vec<&str> = scored.iter().map(|s| s.product.id.as_str()).collect();
    assert_eq!(ids, vec!["far", "exact", "unsafe"]);

    assert!(scored[1].nutrition_distance.abs() < 1e-9);
    assert!(scored[0].nutrition_distance > scored[1].nutrition_distance);
    assert!(!scored[2].is_safe);
    assert!(scored[2].reasons.is_empty());
    assert!(!scored[0].reasons.is_empty());
}

#[test]
fn test_short_history_gets_neutral_price_position() {
    let config = EngineConfig::default();
    let catalog = vec![
        common::with_prices(common::small_dog_target_product("two"), 30_000.0, &[20_000.0, 40_000.0]),
        common::with_prices(
            common::small_dog_target_product("three"),
            30_000.0,
            &[30_000.0, 34_000.0, 38_000.0],
        ),
    ];

    let scored = score_products(&catalog, &common::dog(5.0), &config);
    assert!((scored[0].price_position - 50.0).abs() < f64::EPSILON);
    assert_eq!(scored[0].price_position_label, PricePositionLabel::Mid);
    assert!(scored[1].price_position.abs() < 1e-9);
    assert_eq!(scored[1].price_position_label, PricePositionLabel::Low);
}

#[test]
fn test_value_score_in_scored_product() {
    let config = EngineConfig::default();
    let catalog = vec![common::small_dog_target_product("a")];
    let scored = score_products(&catalog, &common::dog(5.0), &config);
    // 30,000 for 2 kg: 1,500 per 100 g
    assert_eq!(scored[0].value_score, 1500);
}

#[test]
fn test_species_filter_helper() {
    let mut cat_food = common::product("cat", 34.0, 16.0, 2.0, 7.0, 10.0);
    cat_food.species = Species::Cat;
    let catalog = vec![common::product("dog", 26.0, 14.0, 3.0, 7.0, 10.0), cat_food];

    let cats = products_for_species(&catalog, Species::Cat);
    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].id, "cat");
}

// ============================================================================
// REASONS
// ============================================================================

#[test]
fn test_reasons_for_exact_match() {
    let config = EngineConfig::default();
    let reasons = generate_recommendation_reasons(
        &common::small_dog_target_product("a"),
        &common::dog(5.0),
        &config,
    );
    assert_eq!(
        reasons,
        vec![
            "체중 구간 권장 단백질(28%)에 가까워요",
            "지방 함량이 적정 범위예요",
            "적정 식이섬유가 소화 건강을 도와요",
        ]
    );
}

#[test]
fn test_reasons_capped_at_three() {
    let config = EngineConfig::default();
    let profile = common::dog(5.0).with_allergies(["닭"]);
    let reasons =
        generate_recommendation_reasons(&common::small_dog_target_product("a"), &profile, &config);
    assert_eq!(reasons.len(), 3);
    assert!(!reasons.iter().any(|r| r.contains("알레르기")));
}

#[test]
fn test_high_protein_and_allergen_free_reasons() {
    let config = EngineConfig::default();
    let profile = common::dog(5.0).with_allergies(["소고기", "닭"]);
    // Protein 6 over target, fat above target, fiber outside 3-5
    let product = common::product("a", 34.0, 22.0, 8.0, 7.0, 10.0);

    let reasons = generate_recommendation_reasons(&product, &profile, &config);
    assert_eq!(
        reasons,
        vec![
            "단백질이 권장치보다 6%p 높아 활동량 많은 아이에게 좋아요",
            "알레르기 유발 성분(닭, 소고기)이 없어요",
        ]
    );
}

#[test]
fn test_low_fat_reason_reports_actual_fat() {
    let config = EngineConfig::default();
    // Medium bracket: protein 26, fat 14
    let product = common::product("lean", 20.0, 9.5, 2.0, 7.0, 10.0);
    let reasons = generate_recommendation_reasons(&product, &common::dog(10.0), &config);
    assert_eq!(reasons, vec!["저지방(9.5%)이라 체중 관리에 도움이 돼요"]);
}

#[test]
fn test_low_protein_alone_gets_balanced_reason() {
    let config = EngineConfig::default();
    let product = common::product("plain", 18.0, 20.0, 1.0, 7.0, 10.0);
    let reasons = generate_recommendation_reasons(&product, &common::dog(20.0), &config);
    assert_eq!(reasons, vec!["균형 잡힌 영양 구성이에요"]);
}

// ============================================================================
// SERVICE
// ============================================================================

#[test]
fn test_engine_feeding_plan_uses_its_config() {
    let mut config = EngineConfig::default();
    config.nutrition.energy.meals_per_day = 4;
    let engine = RecommendationEngine::with_config(config);
    let cat = PetProfile::new(Species::Cat, 4.5, false, 4);

    let plan = engine.feeding_plan(&cat, 3900.0);
    assert_eq!(plan.meals_per_day, 4);
    assert_eq!(engine.config().nutrition.energy.meals_per_day, 4);
    assert!(plan.daily_grams > 0.0);
}

#[test]
fn test_engine_matches_free_functions() {
    let config = EngineConfig::default();
    let engine = RecommendationEngine::new();
    let catalog = vec![
        common::product("b", 24.0, 13.0, 3.0, 7.0, 10.0),
        common::small_dog_target_product("a"),
    ];
    let profile = common::dog(5.0);

    assert_eq!(
        engine.recommend_with_score(&catalog, &profile),
        recommend_products_with_score(&catalog, &profile, &config)
    );
    assert_eq!(engine.score(&catalog, &profile).len(), 2);
}
