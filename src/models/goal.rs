//! Weight goal model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The owner's weight goals, in grams.
///
/// Both fields are independently optional. Absence of a goal is distinct
/// from a goal of zero: a `Some(0.0)` base weight goal is a real
/// (aspirational) target, while `None` means no target is set at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeightGoal {
    /// Target base weight (pack weight excluding worn and consumables)
    pub base_weight_goal: Option<f64>,

    /// Target total weight
    pub total_weight_goal: Option<f64>,

    /// When this goal was recorded
    pub updated_at: Option<DateTime<Utc>>,
}

impl WeightGoal {
    pub fn new(base_weight_goal: Option<f64>, total_weight_goal: Option<f64>) -> Self {
        Self {
            base_weight_goal,
            total_weight_goal,
            updated_at: Some(Utc::now()),
        }
    }

    /// Whether any goal is set.
    pub fn is_set(&self) -> bool {
        self.base_weight_goal.is_some() || self.total_weight_goal.is_some()
    }
}
