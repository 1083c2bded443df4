//! # Marga-Nav: Weighted Grid Pathfinding
//!
//! Best-first search over 2D cost grids, built for game maps and indoor
//! robot navigation grids where terrain has graded traversal costs.
//!
//! ## Features
//!
//! - **Multi-source flood fill**: exact shortest-cost predecessor and
//!   distance fields from any number of seed cells
//! - **Target-biased search**: squared-Euclidean bias pulls the frontier
//!   hard toward the target for fast queries on open maps
//! - **Corner-aware diagonals**: diagonal steps are charged a share of both
//!   flanking cells, so paths never cut corners through walls and avoid
//!   clipping expensive terrain
//! - **Turn-compressed paths**: extracted waypoint lists carry only the
//!   endpoints and the cells where the direction of travel changes
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::harness::grid_from_art;
//! use marga_nav::{GridCoord, GridPathfinder};
//!
//! // Two rooms joined by a gap in the wall.
//! let grid = grid_from_art("00X00\n00000");
//! let mut planner = GridPathfinder::new(grid);
//!
//! let target = GridCoord::new(5, 1);
//! assert!(planner.find_path(&[GridCoord::new(1, 1)], target));
//!
//! let mut path = Vec::new();
//! assert!(planner.extract_path(&mut path, target));
//! assert_eq!(path.first(), Some(&target));
//! ```
//!
//! ## Grid Conventions
//!
//! The cost field is a flat row-major `f32` buffer indexed `y * width + x`;
//! `f32::INFINITY` marks impassable cells and the outermost ring must be
//! impassable (checked at construction). Entering a cell costs its value
//! plus 1.0 for cardinal steps or sqrt(2) for diagonal steps.

pub mod config;
pub mod core;
pub mod grid;
pub mod harness;
pub mod heap;
pub mod planner;

pub use crate::core::GridCoord;
pub use config::PlannerConfig;
pub use grid::{CostGrid, GridError, IMPASSABLE};
pub use heap::{BinaryHeap, Compare};
pub use planner::{shortest_path, GridPathfinder};
