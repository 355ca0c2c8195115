// ABOUTME: Recommendation engine configuration for product scoring and explanation
// ABOUTME: Configures tolerances, fiber range, limits, and reason message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Message templates use `{name}` placeholders that the engine fills in:
//! `{target}`, `{diff}`, `{fat}` and `{allergens}`.

use crate::config::intelligence::error::ConfigError;
use pawplan_core::constants::recommendation;
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Percentage points within which protein/fat count as on target (2)
    pub near_target_tolerance: f64,
    /// Lower end of the digestive fiber range, inclusive (3)
    pub fiber_digestive_min: f64,
    /// Upper end of the digestive fiber range, inclusive (5)
    pub fiber_digestive_max: f64,
    /// Maximum reasons per product (3)
    pub max_reasons: usize,
    /// Products returned when nothing passes the allergy filter (5)
    pub fallback_limit: usize,
    /// Reason templates
    pub messages: RecommendationMessages,
}

/// Template messages for recommendation reasons
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationMessages {
    /// Protein within tolerance of the bracket target; `{target}`
    pub protein_near_target: String,
    /// Protein above target; `{diff}`
    pub protein_above_target: String,
    /// Fat within tolerance of the bracket target
    pub fat_in_range: String,
    /// Fat below target; `{fat}`
    pub low_fat: String,
    /// Fiber inside the digestive range
    pub fiber_digestive: String,
    /// None of the pet's allergies present; `{allergens}`
    pub allergen_free: String,
    /// Emitted when no other rule fired
    pub balanced: String,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            near_target_tolerance: recommendation::NEAR_TARGET_TOLERANCE,
            fiber_digestive_min: recommendation::FIBER_DIGESTIVE_MIN,
            fiber_digestive_max: recommendation::FIBER_DIGESTIVE_MAX,
            max_reasons: recommendation::MAX_REASONS,
            fallback_limit: recommendation::FALLBACK_LIMIT,
            messages: RecommendationMessages::default(),
        }
    }
}

impl Default for RecommendationMessages {
    fn default() -> Self {
        Self {
            protein_near_target: "체중 구간 권장 단백질({target}%)에 가까워요".to_owned(),
            protein_above_target: "단백질이 권장치보다 {diff}%p 높아 활동량 많은 아이에게 좋아요"
                .to_owned(),
            fat_in_range: "지방 함량이 적정 범위예요".to_owned(),
            low_fat: "저지방({fat}%)이라 체중 관리에 도움이 돼요".to_owned(),
            fiber_digestive: "적정 식이섬유가 소화 건강을 도와요".to_owned(),
            allergen_free: "알레르기 유발 성분({allergens})이 없어요".to_owned(),
            balanced: "균형 잡힌 영양 구성이에요".to_owned(),
        }
    }
}

impl RecommendationConfig {
    /// Validate tolerances, limits, and templates
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative, the fiber range is
    /// inverted, a limit is zero, or a template is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.near_target_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "near_target_tolerance must not be negative",
            ));
        }
        if self.fiber_digestive_min > self.fiber_digestive_max {
            return Err(ConfigError::InvalidRange(
                "fiber_digestive_min must be <= fiber_digestive_max",
            ));
        }
        if self.max_reasons == 0 || self.fallback_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_reasons and fallback_limit must be at least 1",
            ));
        }

        let messages = &self.messages;
        let templates = [
            ("recommendation.messages.protein_near_target", &messages.protein_near_target),
            ("recommendation.messages.protein_above_target", &messages.protein_above_target),
            ("recommendation.messages.fat_in_range", &messages.fat_in_range),
            ("recommendation.messages.low_fat", &messages.low_fat),
            ("recommendation.messages.fiber_digestive", &messages.fiber_digestive),
            ("recommendation.messages.allergen_free", &messages.allergen_free),
            ("recommendation.messages.balanced", &messages.balanced),
        ];
        for (name, template) in templates {
            if template.trim().is_empty() {
                return Err(ConfigError::MissingField(name));
            }
        }
        Ok(())
    }
}
