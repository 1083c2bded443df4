//! Weighted best-first search over a cost grid.
//!
//! [`GridPathfinder`] owns a [`CostGrid`](crate::grid::CostGrid) together
//! with the per-cell predecessor and distance fields and a reusable open
//! set. It supports:
//!
//! - **Flood fill**: relax every cell reachable from one or more sources,
//!   populating the predecessor and distance fields ([`GridPathfinder::flood_fill`])
//! - **Target search**: best-first search biased toward a target by a
//!   squared-Euclidean heuristic ([`GridPathfinder::find_path`])
//! - **Path extraction**: walk the predecessor field backward from a target,
//!   emitting only the cells where the direction of travel changes
//!   ([`GridPathfinder::extract_path`])
//!
//! The target bias is deliberately non-admissible: squared distance grows
//! much faster than true distance, which pulls the frontier hard toward the
//! target. On maps with expensive terrain the result may not be globally
//! cheapest; the trade is accepted for speed on open grids. Flood fill uses
//! no bias and produces exact shortest-cost fields.

mod extract;
mod search;
mod types;

pub use search::GridPathfinder;

use crate::core::GridCoord;
use crate::grid::CostGrid;

/// One-shot path query with default configuration.
///
/// Returns the compressed waypoint list (target first, source last), or
/// `None` if the target is unreachable.
pub fn shortest_path(grid: CostGrid, source: GridCoord, target: GridCoord) -> Option<Vec<GridCoord>> {
    let mut planner = GridPathfinder::new(grid);
    if !planner.find_path(&[source], target) {
        return None;
    }
    let mut path = Vec::new();
    planner.extract_path(&mut path, target);
    Some(path)
}
