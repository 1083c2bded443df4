//! Waypoint extraction from the predecessor field.

use log::trace;

use super::search::GridPathfinder;
use crate::core::GridCoord;

impl GridPathfinder {
    /// Append the path ending at `target` to `out`, target first, source
    /// last.
    ///
    /// The list is turn-compressed: besides the two endpoints it holds only
    /// the cells where the direction of travel changes, so a straight
    /// corridor yields exactly two waypoints and each bend adds one.
    ///
    /// Returns false if `target` was not reached by the last search (or
    /// lies outside the grid); `out` is untouched in that case.
    pub fn extract_path(&self, out: &mut Vec<GridCoord>, target: GridCoord) -> bool {
        if !self.grid().contains(target) {
            return false;
        }
        let width = self.grid().width();
        let target_idx = target.to_index(width);

        let first_hop = self.predecessor[target_idx];
        if first_hop < 0 {
            trace!(
                "[Planner] extract_path: ({}, {}) has no predecessor",
                target.x,
                target.y
            );
            return false;
        }

        out.push(target);
        if first_hop as usize == target_idx {
            // The target was itself a search root.
            return true;
        }

        let mut current = target_idx;
        let mut prev_delta: Option<GridCoord> = None;
        loop {
            let parent = self.predecessor[current];
            let here = GridCoord::from_index(current, width);
            if parent < 0 || parent as usize == current {
                // Reached a root: emit it and stop.
                out.push(here);
                return true;
            }
            let parent = parent as usize;

            let delta = here - GridCoord::from_index(parent, width);
            if let Some(prev) = prev_delta {
                if delta != prev {
                    out.push(here);
                }
            }
            prev_delta = Some(delta);
            current = parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::grid_from_art;

    fn path_for(art: &str, source: (i32, i32), target: (i32, i32)) -> Vec<GridCoord> {
        let mut planner = GridPathfinder::new(grid_from_art(art));
        let target = GridCoord::new(target.0, target.1);
        assert!(planner.find_path(&[GridCoord::new(source.0, source.1)], target));
        let mut out = Vec::new();
        assert!(planner.extract_path(&mut out, target));
        out
    }

    #[test]
    fn test_straight_corridor_two_waypoints() {
        let path = path_for("00000", (1, 1), (5, 1));
        assert_eq!(path, vec![GridCoord::new(5, 1), GridCoord::new(1, 1)]);
    }

    #[test]
    fn test_single_bend_three_waypoints() {
        // The wall forces one turn at (2,2).
        let path = path_for("X0\n00", (1, 2), (2, 1));
        assert_eq!(
            path,
            vec![
                GridCoord::new(2, 1),
                GridCoord::new(2, 2),
                GridCoord::new(1, 2),
            ]
        );
    }

    #[test]
    fn test_bend_count_matches_waypoint_count() {
        // Zigzag corridor: down, right, down, right - three direction
        // changes, five waypoints.
        let art = "0XX\n00X\nX00";
        let path = path_for(art, (1, 1), (3, 3));
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&GridCoord::new(3, 3)));
        assert_eq!(path.last(), Some(&GridCoord::new(1, 1)));
    }

    #[test]
    fn test_identity_single_waypoint() {
        let mut planner = GridPathfinder::new(grid_from_art("000"));
        let cell = GridCoord::new(2, 1);
        assert!(planner.find_path(&[cell], cell));

        let mut out = Vec::new();
        assert!(planner.extract_path(&mut out, cell));
        assert_eq!(out, vec![cell]);
    }

    #[test]
    fn test_unreached_cell_fails() {
        let mut planner = GridPathfinder::new(grid_from_art("0X0"));
        assert!(planner.flood_fill(&[GridCoord::new(1, 1)]));

        let mut out = Vec::new();
        assert!(!planner.extract_path(&mut out, GridCoord::new(3, 1)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_out_of_grid_target_fails() {
        let mut planner = GridPathfinder::new(grid_from_art("000"));
        assert!(planner.flood_fill(&[GridCoord::new(1, 1)]));

        let mut out = Vec::new();
        assert!(!planner.extract_path(&mut out, GridCoord::new(9, 9)));
        assert!(!planner.extract_path(&mut out, GridCoord::new(-1, 0)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_appends_to_existing_list() {
        let mut planner = GridPathfinder::new(grid_from_art("000"));
        let target = GridCoord::new(3, 1);
        assert!(planner.find_path(&[GridCoord::new(1, 1)], target));

        let mut out = vec![GridCoord::new(7, 7)];
        assert!(planner.extract_path(&mut out, target));
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], GridCoord::new(7, 7));
    }

    #[test]
    fn test_flood_fill_then_extract() {
        let mut planner = GridPathfinder::new(grid_from_art("000\n000\n000"));
        assert!(planner.flood_fill(&[GridCoord::new(1, 1)]));

        let mut out = Vec::new();
        assert!(planner.extract_path(&mut out, GridCoord::new(3, 1)));
        assert_eq!(out, vec![GridCoord::new(3, 1), GridCoord::new(1, 1)]);
    }
}
