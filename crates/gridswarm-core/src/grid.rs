//! ToroidalGrid — the wrap-around space agents move in.
//!
//! Coordinates wrap modulo width/height, so the grid has no edges for
//! movement purposes. Distances are Manhattan-style with per-axis wrap.

use crate::error::GridError;
use crate::types::GridPos;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A fixed-size torus of `width × height` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToroidalGrid {
    width: i64,
    height: i64,
}

impl ToroidalGrid {
    /// Create a grid. Both dimensions must be positive; 1×1 is valid.
    pub fn new(width: i64, height: i64) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u64 {
        (self.width * self.height) as u64
    }

    /// Wrap arbitrary integer coordinates onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> GridPos {
        GridPos::new(x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    /// All distinct cells reachable with `|dx|, |dy| <= speed`, excluding the
    /// `(0, 0)` offset.
    ///
    /// Enumeration order is `dx` ascending, then `dy` ascending, keeping the
    /// first occurrence of each cell. When `2 * speed + 1` exceeds a dimension,
    /// several offsets wrap onto the same cell; each cell appears once. On tiny
    /// grids the result can contain `pos` itself (e.g. every offset on a 1×1
    /// grid wraps back to the origin).
    pub fn neighborhood(&self, pos: GridPos, speed: u32) -> Vec<GridPos> {
        let reach = speed as i64;
        let mut seen = HashSet::new();
        let mut cells = Vec::new();
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let cell = self.wrap(pos.x + dx, pos.y + dy);
                if seen.insert(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    /// Manhattan distance with per-axis wrap: `min(|d|, extent - |d|)` summed.
    pub fn toroidal_distance(&self, a: GridPos, b: GridPos) -> i64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        dx.min(self.width - dx) + dy.min(self.height - dy)
    }

    /// Distance to the nearest literal grid border, ignoring wrap.
    ///
    /// Only used as a scoring term: it pulls agents toward the numeric centre
    /// of the grid even though the torus has no real edge. This is an
    /// intentional heuristic quirk of the planning score.
    pub fn edge_distance(&self, pos: GridPos) -> i64 {
        pos.x
            .min(self.width - pos.x - 1)
            .min(pos.y)
            .min(self.height - pos.y - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: i64, h: i64) -> ToroidalGrid {
        ToroidalGrid::new(w, h).unwrap()
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            ToroidalGrid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert!(ToroidalGrid::new(5, -1).is_err());
        assert!(ToroidalGrid::new(1, 1).is_ok());
    }

    #[test]
    fn wrap_handles_negative_and_overflowing_coordinates() {
        let g = grid(5, 4);
        assert_eq!(g.wrap(-1, -1), GridPos::new(4, 3));
        assert_eq!(g.wrap(5, 9), GridPos::new(0, 1));
    }

    #[test]
    fn neighborhood_on_large_grid_has_full_square() {
        let g = grid(10, 10);
        assert_eq!(g.neighborhood(GridPos::new(5, 5), 1).len(), 8);
        assert_eq!(g.neighborhood(GridPos::new(5, 5), 2).len(), 24);
        assert_eq!(g.neighborhood(GridPos::new(0, 0), 3).len(), 48);
    }

    #[test]
    fn neighborhood_order_is_dx_then_dy() {
        let g = grid(10, 10);
        let cells = g.neighborhood(GridPos::new(5, 5), 1);
        assert_eq!(cells[0], GridPos::new(4, 4));
        assert_eq!(cells[1], GridPos::new(4, 5));
        assert_eq!(cells[3], GridPos::new(5, 4));
        assert_eq!(cells[7], GridPos::new(6, 6));
    }

    #[test]
    fn neighborhood_deduplicates_wrapped_offsets() {
        // speed 3 on a 4x4 torus: 48 offsets collapse onto the 15 other cells
        let g = grid(4, 4);
        let cells = g.neighborhood(GridPos::new(1, 2), 3);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(cells.len(), unique.len());
        assert_eq!(cells.len(), 15);
        assert!(!cells.contains(&GridPos::new(1, 2)));

        // narrow strip: only one dimension wraps
        let strip = grid(2, 9);
        let cells = strip.neighborhood(GridPos::new(0, 4), 2);
        let unique: HashSet<_> = cells.iter().copied().collect();
        assert_eq!(cells.len(), unique.len());
    }

    #[test]
    fn neighborhood_on_single_cell_grid_is_the_cell_itself() {
        let g = grid(1, 1);
        for speed in 1..=3 {
            assert_eq!(g.neighborhood(GridPos::new(0, 0), speed), vec![GridPos::new(0, 0)]);
        }
    }

    #[test]
    fn toroidal_distance_takes_short_way_around() {
        let g = grid(5, 5);
        assert_eq!(g.toroidal_distance(GridPos::new(0, 0), GridPos::new(4, 0)), 1);
        assert_eq!(g.toroidal_distance(GridPos::new(0, 0), GridPos::new(2, 2)), 4);
        assert_eq!(g.toroidal_distance(GridPos::new(1, 1), GridPos::new(1, 1)), 0);
        let a = GridPos::new(3, 0);
        let b = GridPos::new(0, 4);
        assert_eq!(g.toroidal_distance(a, b), g.toroidal_distance(b, a));
    }

    #[test]
    fn edge_distance_ignores_wrap() {
        let g = grid(10, 10);
        assert_eq!(g.edge_distance(GridPos::new(0, 5)), 0);
        assert_eq!(g.edge_distance(GridPos::new(9, 5)), 0);
        assert_eq!(g.edge_distance(GridPos::new(4, 5)), 4);
        assert_eq!(g.edge_distance(GridPos::new(2, 7)), 2);
        assert_eq!(grid(1, 1).edge_distance(GridPos::new(0, 0)), 0);
    }
}
