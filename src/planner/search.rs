//! Search loop: multi-source flood fill and target-biased path search.

use log::{debug, trace};

use super::types::{FrontierNode, TargetBias};
use crate::config::PlannerConfig;
use crate::core::GridCoord;
use crate::grid::CostGrid;
use crate::heap::BinaryHeap;

/// Neighbor expansion order: N, S, E, W, NE, NW, SE, SW.
///
/// Part of the search contract: the order decides which of several
/// equal-cost paths wins tie-breaks, so fixtures depend on it.
const NEIGHBOR_DELTAS: [(i32, i32); 8] = [
    (0, -1),  // N
    (0, 1),   // S
    (1, 0),   // E
    (-1, 0),  // W
    (1, -1),  // NE
    (-1, -1), // NW
    (1, 1),   // SE
    (-1, 1),  // SW
];

/// Weighted best-first pathfinder over an owned cost grid.
///
/// Holds three parallel cell-indexed fields (cost, predecessor, distance)
/// plus a reusable open set. One instance serves one search at a time;
/// concurrent searches need independent instances. All buffers are released
/// on drop.
pub struct GridPathfinder {
    grid: CostGrid,
    config: PlannerConfig,
    /// -1 = unvisited; own index = search root; otherwise the flat index of
    /// the previous cell on the best path found so far.
    pub(super) predecessor: Vec<i32>,
    /// Cumulative traversal cost; meaningful only where predecessor != -1.
    distance: Vec<f32>,
    open: BinaryHeap<FrontierNode, TargetBias>,
}

impl GridPathfinder {
    /// Create a pathfinder with default settings.
    pub fn new(grid: CostGrid) -> Self {
        Self::with_config(grid, PlannerConfig::default())
    }

    /// Create a pathfinder with custom settings.
    pub fn with_config(grid: CostGrid, config: PlannerConfig) -> Self {
        let cells = grid.len();
        let open = BinaryHeap::with_capacity(TargetBias::default(), config.frontier_capacity);
        Self {
            grid,
            config,
            predecessor: vec![-1; cells],
            distance: vec![0.0; cells],
            open,
        }
    }

    /// The cost grid this pathfinder searches.
    #[inline]
    pub fn grid(&self) -> &CostGrid {
        &self.grid
    }

    /// Predecessor of `cell` on its best discovered path.
    ///
    /// `None` if the cell was not reached by the last search. A search root
    /// is its own predecessor.
    pub fn predecessor(&self, cell: GridCoord) -> Option<GridCoord> {
        if !self.grid.contains(cell) {
            return None;
        }
        let p = self.predecessor[cell.to_index(self.grid.width())];
        (p >= 0).then(|| GridCoord::from_index(p as usize, self.grid.width()))
    }

    /// Cumulative traversal cost to `cell`, if it was reached.
    pub fn distance_to(&self, cell: GridCoord) -> Option<f32> {
        if !self.grid.contains(cell) {
            return None;
        }
        let idx = cell.to_index(self.grid.width());
        (self.predecessor[idx] >= 0).then(|| self.distance[idx])
    }

    /// Relax every cell reachable from `sources`, populating the
    /// predecessor and distance fields.
    ///
    /// Returns false (without touching the fields) if `sources` is empty or
    /// any source lies on the impassable border.
    pub fn flood_fill(&mut self, sources: &[GridCoord]) -> bool {
        self.search(sources, None)
    }

    /// Search for a path from any of `sources` to `target`.
    ///
    /// Returns true once the target is reached; the path is read back with
    /// [`extract_path`](Self::extract_path). Returns false if validation
    /// fails or the target is unreachable.
    pub fn find_path(&mut self, sources: &[GridCoord], target: GridCoord) -> bool {
        self.search(sources, Some(target))
    }

    fn search(&mut self, sources: &[GridCoord], target: Option<GridCoord>) -> bool {
        if sources.is_empty() {
            debug!("[Planner] FAILED: no sources given");
            return false;
        }
        for &s in sources {
            if !self.grid.is_interior(s) {
                debug!("[Planner] FAILED: source ({}, {}) on border", s.x, s.y);
                return false;
            }
        }
        if let Some(t) = target {
            if !self.grid.is_interior(t) {
                debug!("[Planner] FAILED: target ({}, {}) on border", t.x, t.y);
                return false;
            }
        }

        let width = self.grid.width();
        let w = width as i32;

        self.open.clear();
        self.open.comparator_mut().set_target(target);
        self.predecessor.fill(-1);

        if let Some(t) = target {
            if sources.contains(&t) {
                // Target is a seeded source: record it as its own root.
                let idx = t.to_index(width);
                self.predecessor[idx] = idx as i32;
                self.distance[idx] = 0.0;
                return true;
            }
        }

        for &s in sources {
            self.open.push(FrontierNode {
                x: s.x as u16,
                y: s.y as u16,
                parent: -1,
                distance: 0.0,
            });
        }

        let target_idx = target.map(|t| t.to_index(width));
        let mut committed = 0usize;

        while let Some(node) = self.open.pop() {
            let idx = node.index(width);

            // Stale entry: the cell already carries a shorter recorded
            // distance, so a better record was committed since this one was
            // pushed. Dropping it here replaces decrease-key.
            if self.predecessor[idx] != -1 && self.distance[idx] < node.distance {
                continue;
            }

            // Seeds commit their own index; that makes the stale check above
            // hold for sources too, since their distance 0 undercuts any
            // later record for the same cell.
            self.predecessor[idx] = if node.parent < 0 { idx as i32 } else { node.parent };
            self.distance[idx] = node.distance;
            committed += 1;

            for (k, &(dx, dy)) in NEIGHBOR_DELTAS.iter().enumerate() {
                // The sealed border keeps every neighbor of a committed cell
                // in bounds, so flat-index arithmetic needs no range checks.
                let nidx = (idx as i32 + dy * w + dx) as usize;
                let entered = self.grid.cost_at(nidx);
                let diagonal = k >= 4;

                let (gate, move_cost) = if diagonal {
                    let flank_h = self.grid.cost_at((idx as i32 + dx) as usize);
                    let flank_v = self.grid.cost_at((idx as i32 + dy * w) as usize);
                    let composite = entered
                        + self.config.corner_weight * flank_h
                        + self.config.corner_weight * flank_v;
                    (composite, composite + self.config.diagonal_cost)
                } else {
                    (entered, entered + self.config.cardinal_cost)
                };

                if target_idx == Some(nidx) && (!diagonal || gate.is_finite()) {
                    self.predecessor[nidx] = idx as i32;
                    self.distance[nidx] = node.distance + move_cost;
                    trace!(
                        "[Planner] SUCCESS: target reached, cost={:.2}, committed={}",
                        self.distance[nidx],
                        committed
                    );
                    return true;
                }

                if gate.is_finite() {
                    self.open.push(FrontierNode {
                        x: (node.x as i32 + dx) as u16,
                        y: (node.y as i32 + dy) as u16,
                        parent: idx as i32,
                        distance: node.distance + move_cost,
                    });
                }
            }
        }

        match target {
            Some(t) => {
                debug!(
                    "[Planner] FAILED: target ({}, {}) unreachable after {} commits",
                    t.x, t.y, committed
                );
                false
            }
            None => {
                trace!("[Planner] flood fill committed {} cells", committed);
                true
            }
        }
    }
}
