//! Map fixtures for tests and benches.
//!
//! Builds [`CostGrid`]s from rectangular character art:
//!
//! - space: cost 0
//! - `'0'..='9'`: that integer cost
//! - any other printable character: impassable
//!
//! The parser wraps the art in a one-cell impassable border, so a 1x1 map
//! becomes a 3x3 grid and interior cell (x, y) of the art lands at grid
//! coordinate (x+1, y+1). Short rows are padded with impassable cells.

use crate::grid::{CostGrid, IMPASSABLE};

/// Build a sealed cost grid from character art.
///
/// # Panics
///
/// Panics if `art` has no rows; fixtures are compiled into tests, so a
/// malformed one is a programming error.
pub fn grid_from_art(art: &str) -> CostGrid {
    let rows: Vec<&str> = art.lines().collect();
    assert!(!rows.is_empty(), "map art needs at least one row");

    let interior_width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .expect("rows checked non-empty");
    let width = interior_width + 2;
    let height = rows.len() + 2;

    let mut cells = vec![IMPASSABLE; width * height];
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            cells[(y + 1) * width + (x + 1)] = match ch {
                ' ' => 0.0,
                '0'..='9' => ch.to_digit(10).unwrap() as f32,
                _ => IMPASSABLE,
            };
        }
    }

    CostGrid::new(width, height, cells).expect("padded art is always sealed")
}
