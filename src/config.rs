//! Planner configuration section.

use serde::{Deserialize, Serialize};

mod defaults {
    pub fn cardinal_cost() -> f32 {
        1.0
    }

    pub fn diagonal_cost() -> f32 {
        std::f32::consts::SQRT_2
    }

    pub fn corner_weight() -> f32 {
        1.0 / 3.0
    }

    pub fn frontier_capacity() -> usize {
        256
    }
}

/// Search settings for [`GridPathfinder`](crate::planner::GridPathfinder).
///
/// The defaults reproduce the canonical cost model: cardinal steps pay the
/// entered cell plus 1.0, diagonal steps pay the entered cell plus a third
/// of each flanking cardinal cell plus sqrt(2). The flanking terms make a
/// diagonal move through the corner of an impassable cell impossible and
/// discourage clipping expensive terrain.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Constant added to the entered cell's cost for cardinal moves
    #[serde(default = "defaults::cardinal_cost")]
    pub cardinal_cost: f32,

    /// Constant added to the diagonal composite cost (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Fraction of each flanking cardinal cell charged on a diagonal move
    #[serde(default = "defaults::corner_weight")]
    pub corner_weight: f32,

    /// Initial open-set capacity before the heap grows
    #[serde(default = "defaults::frontier_capacity")]
    pub frontier_capacity: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            cardinal_cost: defaults::cardinal_cost(),
            diagonal_cost: defaults::diagonal_cost(),
            corner_weight: defaults::corner_weight(),
            frontier_capacity: defaults::frontier_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_cost_model() {
        let config = PlannerConfig::default();
        assert_eq!(config.cardinal_cost, 1.0);
        assert_eq!(config.diagonal_cost, std::f32::consts::SQRT_2);
        assert!((config.corner_weight - 1.0 / 3.0).abs() < 1e-6);
        assert!(config.frontier_capacity > 0);
    }
}
