//! Weighted options for weighted-random selection.

use serde::{Deserialize, Deserializer, Serialize};

/// An item paired with a non-negative selection weight.
///
/// The weight is clamped at construction: negative, NaN and infinite weights
/// all become `0.0`, so a stored weight is always finite and `>= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedOption<T> {
    item: T,
    #[serde(deserialize_with = "deserialize_weight")]
    weight: f64,
}

fn clamp_weight(weight: f64) -> f64 {
    if weight.is_finite() {
        weight.max(0.0)
    } else {
        0.0
    }
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_weight)
}

impl<T> WeightedOption<T> {
    /// Create a new weighted option, clamping the weight.
    pub fn new(item: T, weight: f64) -> Self {
        Self {
            item,
            weight: clamp_weight(weight),
        }
    }

    /// The wrapped item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// The clamped weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Consume the option and return its item.
    pub fn into_item(self) -> T {
        self.item
    }
}
