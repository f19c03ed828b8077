/*
fallback.rs

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

//! Predefined layout used when the random attempts run out.
//!
//! The layout is an L-shaped corridor along the top row and the right column, with a few
//! dead-end columns hanging from the top row.
//! The same level thresholds as the random levels apply, but elements are placed at fixed
//! positions that keep the level solvable.

use log::{debug, error};
use std::collections::HashMap;

use crate::config::{FALLBACK_HAZARD_LEVEL, GRID_SIZE, KEY_GATE_LEVEL, PORTAL_LEVEL};

use super::cells::{CellType, Grid};
use super::coordinate::GridCoordinate;
use super::level::LevelRecord;
use super::solver::Solver;

/// Columns of the dead-end corridors.
const BRANCH_COLUMNS: [i32; 4] = [3, 6, 9, 11];

/// Rows covered by the dead-end corridors.
const BRANCH_ROWS: std::ops::Range<i32> = 2..6;

/// Build the fallback level and check it with the solver.
///
/// Return the level and its minimal number of moves.
/// The move count is [`None`] only if the layout is broken, which is logged as an error.
pub fn fallback_level(level: u32) -> (LevelRecord, Option<usize>) {
    let record: LevelRecord = build(level, GRID_SIZE);

    let moves: Option<usize> = Solver::new(
        &record.grid,
        record.start,
        record.finish,
        &record.portal_pairs,
    )
    .min_moves();
    match moves {
        Some(m) => debug!("Fallback layout for level {level} solved in {m} moves"),
        None => error!("Fallback layout for level {level} cannot be solved"),
    }
    (record, moves)
}

/// Place a cell only if the target is still empty.
fn place(grid: &mut Grid, coord: GridCoordinate, cell: CellType) {
    if grid.get(coord) == Some(CellType::Empty) {
        grid.set(coord, cell);
    }
}

fn build(level: u32, size: usize) -> LevelRecord {
    let last: i32 = size as i32 - 2;
    let start: GridCoordinate = GridCoordinate::new(1, 1);
    let finish: GridCoordinate = GridCoordinate::new(last, last);
    let mut grid: Grid = Grid::new(size);

    for i in 1..=last {
        grid.set(GridCoordinate::new(i, 1), CellType::Empty);
        grid.set(GridCoordinate::new(last, i), CellType::Empty);
    }
    for x in BRANCH_COLUMNS.into_iter().filter(|x| *x < last) {
        for y in BRANCH_ROWS.clone().filter(|y| *y < last - 1) {
            grid.set(GridCoordinate::new(x, y), CellType::Empty);
        }
    }

    // Holes on a sparse lattice, never on the L corridor
    if level >= FALLBACK_HAZARD_LEVEL {
        for y in (3..last).step_by(3) {
            for x in (2..last - 1).step_by(4) {
                place(&mut grid, GridCoordinate::new(x, y), CellType::Hole);
            }
        }
    }

    // The key lies on the top row before the gate: the first slide right collects it and
    // stops against the gate, the second one goes through.
    if level >= KEY_GATE_LEVEL {
        place(&mut grid, GridCoordinate::new(5, 1), CellType::Key);
        place(&mut grid, GridCoordinate::new(last - 1, 1), CellType::Gate);
    }

    let mut portal_pairs: HashMap<GridCoordinate, GridCoordinate> = HashMap::new();
    if level >= PORTAL_LEVEL {
        let p1: GridCoordinate = GridCoordinate::new(BRANCH_COLUMNS[0], BRANCH_ROWS.end - 1);
        let p2: GridCoordinate = GridCoordinate::new(BRANCH_COLUMNS[2], BRANCH_ROWS.end - 1);
        if grid.get(p1) == Some(CellType::Empty) && grid.get(p2) == Some(CellType::Empty) {
            grid.set(p1, CellType::Portal);
            grid.set(p2, CellType::Portal);
            portal_pairs.insert(p1, p2);
            portal_pairs.insert(p2, p1);
        }
    }

    grid.set(start, CellType::Player);
    grid.set(finish, CellType::Finish);

    LevelRecord {
        level_number: level,
        grid_size: size,
        grid,
        start,
        finish,
        patrols: Vec::new(),
        portal_pairs,
        switch_targets: HashMap::new(),
    }
}
