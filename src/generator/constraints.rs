/*
constraints.rs

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

//! False corridors and holes.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use super::cells::{CellType, Grid};
use super::coordinate::{Direction, GridCoordinate};
use super::difficulty::DifficultyProfile;
use super::rng::SeededRng;

/// Maximum length of a false corridor.
const BRANCH_LENGTH: i32 = 3;

/// Random interior coordinate.
fn random_interior(size: usize, rng: &mut SeededRng) -> GridCoordinate {
    let last: i32 = size as i32 - 1;
    let y: i32 = rng.random_range(1..last);
    let x: i32 = rng.random_range(1..last);
    GridCoordinate::new(x, y)
}

/// Carve short dead-end corridors from random open cells.
///
/// Only walls are opened; cells that already hold something keep it. There are never more
/// corridors than interior cells.
///
/// Return the number of corridors carved.
pub fn add_branches(
    grid: &mut Grid,
    profile: &DifficultyProfile,
    rng: &mut SeededRng,
) -> usize {
    let size: usize = grid.size();
    let count: usize = profile.branch_count().min(grid.interior().count());
    let mut carved: usize = 0;

    for _ in 0..count {
        let origin: GridCoordinate = random_interior(size, rng);
        if !grid.is_open(origin) {
            continue;
        }
        let Some(direction) = Direction::from_repr(rng.random_range(0..4)) else {
            continue;
        };

        let mut current: GridCoordinate = origin;
        for _ in 0..BRANCH_LENGTH {
            let next: GridCoordinate = current.neighbor(direction);
            if !next.is_interior(size) {
                break;
            }
            if grid.get(next) == Some(CellType::Wall) {
                grid.set(next, CellType::Empty);
            }
            current = next;
        }
        debug!("Branch from {origin} to {current}");
        carved += 1;
    }
    carved
}

/// Turn open cells into holes, except the protected ones.
pub fn add_hazards(
    grid: &mut Grid,
    protected: &HashSet<GridCoordinate>,
    profile: &DifficultyProfile,
    rng: &mut SeededRng,
) {
    let density: f64 = profile.hazard_density();
    let mut count: usize = 0;

    for c in grid.interior() {
        if grid.is_open(c) && !protected.contains(&c) && rng.random::<f64>() < density {
            grid.set(c, CellType::Hole);
            count += 1;
        }
    }
    debug!("{count} holes added (density {density})");
}
