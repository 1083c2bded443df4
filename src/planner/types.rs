//! Frontier records and their ordering.

use std::cmp::Ordering;

use crate::core::GridCoord;
use crate::heap::Compare;

/// A tentative visit sitting in the open set.
///
/// Coordinates are stored compactly as 16-bit values; the flat cell index is
/// reconstructed against the grid width on pop. A cell may have several
/// frontier records at once; all but the best are discarded as stale when
/// popped, which is what lets the heap get by without a decrease-key
/// operation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierNode {
    pub x: u16,
    pub y: u16,
    /// Flat index of the cell this record was expanded from, -1 for a seed.
    pub parent: i32,
    /// Cumulative traversal cost from the seeding source.
    pub distance: f32,
}

impl FrontierNode {
    #[inline]
    pub fn coord(&self) -> GridCoord {
        GridCoord::new(self.x as i32, self.y as i32)
    }

    #[inline]
    pub fn index(&self, width: usize) -> usize {
        self.y as usize * width + self.x as usize
    }
}

/// Frontier ordering: head is the record minimizing
/// `distance + squared_euclidean(cell, target)`.
///
/// Held by value inside the heap so the planner can swap the target between
/// searches. With no target the heuristic term vanishes and pops come out in
/// pure Dijkstra order.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TargetBias {
    target: Option<GridCoord>,
}

impl TargetBias {
    pub fn set_target(&mut self, target: Option<GridCoord>) {
        self.target = target;
    }

    #[inline]
    fn priority(&self, node: &FrontierNode) -> f32 {
        match self.target {
            Some(t) => node.distance + node.coord().distance_squared(&t),
            None => node.distance,
        }
    }
}

impl Compare<FrontierNode> for TargetBias {
    fn compare(&self, a: &FrontierNode, b: &FrontierNode) -> Ordering {
        // Reverse ordering so the lowest priority sits at the head.
        self.priority(b)
            .partial_cmp(&self.priority(a))
            .unwrap_or(Ordering::Equal)
    }
}
