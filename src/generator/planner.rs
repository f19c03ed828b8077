/*
planner.rs

Copyright 2025 Hervé Quatremain

This file is part of Maze100.

Maze100 is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Maze100 is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Maze100. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Paint the base texture of the level.
//!
//! The grid is split in 3×3 zones.
//! Each zone becomes a small room, a mostly open area, a sparse area, or a dense area.
//! Nothing here guarantees connectivity; the primary path takes care of that.

use rand::Rng;

use super::cells::{CellType, Grid};
use super::coordinate::GridCoordinate;
use super::rng::SeededRng;

const ZONE_SIZE: usize = 3;

/// Below this draw, the zone is a 2×2 room.
const ROOM_THRESHOLD: f64 = 0.2;

/// Upper draw bounds for open and sparse zones. Higher draws give dense zones.
const OPEN_ZONE_THRESHOLD: f64 = 0.3;
const SPARSE_ZONE_THRESHOLD: f64 = 0.7;

/// Probability for a cell to be opened, by zone kind.
const OPEN_ZONE_PROBABILITY: f64 = 0.6;
const SPARSE_ZONE_PROBABILITY: f64 = 0.3;
const DENSE_ZONE_PROBABILITY: f64 = 0.1;

/// Open cells in zones of the grid. The outer ring is never touched.
pub fn generate_macro_zones(grid: &mut Grid, rng: &mut SeededRng) {
    let size: usize = grid.size();

    for zone_y in (0..size).step_by(ZONE_SIZE) {
        for zone_x in (0..size).step_by(ZONE_SIZE) {
            let draw: f64 = rng.random();

            if draw < ROOM_THRESHOLD {
                let ox: usize = zone_x + rng.random_range(0..=ZONE_SIZE - 2);
                let oy: usize = zone_y + rng.random_range(0..=ZONE_SIZE - 2);
                for y in oy..(oy + 2).min(size - 1) {
                    for x in ox..(ox + 2).min(size - 1) {
                        if x > 0 && y > 0 {
                            grid.set(GridCoordinate::new(x as i32, y as i32), CellType::Empty);
                        }
                    }
                }
                continue;
            }

            let open_probability: f64 = if draw < OPEN_ZONE_THRESHOLD {
                OPEN_ZONE_PROBABILITY
            } else if draw < SPARSE_ZONE_THRESHOLD {
                SPARSE_ZONE_PROBABILITY
            } else {
                DENSE_ZONE_PROBABILITY
            };

            for y in zone_y..(zone_y + ZONE_SIZE).min(size) {
                for x in zone_x..(zone_x + ZONE_SIZE).min(size) {
                    let c: GridCoordinate = GridCoordinate::new(x as i32, y as i32);
                    if c.is_interior(size) && rng.random::<f64>() < open_probability {
                        grid.set(c, CellType::Empty);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_stays_closed() {
        for level in [1, 17, 64, 99] {
            let mut grid: Grid = Grid::new(15);
            generate_macro_zones(&mut grid, &mut SeededRng::for_level(level));
            for x in 0..15 {
                for c in [
                    GridCoordinate::new(x, 0),
                    GridCoordinate::new(x, 14),
                    GridCoordinate::new(0, x),
                    GridCoordinate::new(14, x),
                ] {
                    assert_eq!(grid.get(c), Some(CellType::Wall));
                }
            }
        }
    }

    #[test]
    fn only_opens_cells() {
        let mut grid: Grid = Grid::new(15);
        generate_macro_zones(&mut grid, &mut SeededRng::for_level(5));
        let open: usize = grid.count(CellType::Empty);
        assert_eq!(open + grid.count(CellType::Wall), 15 * 15);
        assert!(open > 0);
        assert!(open < 13 * 13);
    }

    #[test]
    fn deterministic() {
        let mut a: Grid = Grid::new(15);
        let mut b: Grid = Grid::new(15);
        generate_macro_zones(&mut a, &mut SeededRng::for_level(33));
        generate_macro_zones(&mut b, &mut SeededRng::for_level(33));
        assert_eq!(a, b);
    }
}
