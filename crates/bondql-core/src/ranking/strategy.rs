use crate::model::Queryable;
use bondql_config::RankingConfig;
use std::collections::BTreeMap;

///
/// RankingStrategy
///
/// Pure ranking policy. Weights of 1 mean "no boost"; implementations must
/// not depend on mutable state, as one strategy is shared across every
/// query a caller compiles.
///

pub trait RankingStrategy {
    /// Weight applied to clauses constraining `property` directly.
    fn property_weight(&self, property: &Queryable) -> f32;

    /// Weight of quality level `level` (1-based) of `property`.
    fn range_weight(&self, property: &Queryable, level: u32) -> f32;
}

impl<R: RankingStrategy + ?Sized> RankingStrategy for &R {
    fn property_weight(&self, property: &Queryable) -> f32 {
        (**self).property_weight(property)
    }

    fn range_weight(&self, property: &Queryable, level: u32) -> f32 {
        (**self).range_weight(property, level)
    }
}

///
/// Unranked
/// Every weight is 1.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct Unranked;

impl RankingStrategy for Unranked {
    fn property_weight(&self, _: &Queryable) -> f32 {
        1.0
    }

    fn range_weight(&self, _: &Queryable, _: u32) -> f32 {
        1.0
    }
}

///
/// WeightedRanking
///
/// Table-driven weights keyed by property name. A quality level scales the
/// property's weight linearly, so level `n` weighs `n × weight`.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightedRanking {
    weights: BTreeMap<String, f32>,
}

impl WeightedRanking {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weights: BTreeMap::new(),
        }
    }

    /// Set the weight of `property`; non-positive weights are clamped to 1.
    #[must_use]
    pub fn with_weight(mut self, property: &Queryable, weight: f32) -> Self {
        self.weights
            .insert(property.name().to_string(), clamp_weight(weight));
        self
    }
}

impl From<&RankingConfig> for WeightedRanking {
    fn from(config: &RankingConfig) -> Self {
        let weights = config
            .weights
            .iter()
            .map(|(name, weight)| (name.clone(), clamp_weight(*weight)))
            .collect();

        Self { weights }
    }
}

impl RankingStrategy for WeightedRanking {
    fn property_weight(&self, property: &Queryable) -> f32 {
        self.weights.get(property.name()).copied().unwrap_or(1.0)
    }

    #[expect(clippy::cast_precision_loss)]
    fn range_weight(&self, property: &Queryable, level: u32) -> f32 {
        self.property_weight(property) * level as f32
    }
}

fn clamp_weight(weight: f32) -> f32 {
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        1.0
    }
}
