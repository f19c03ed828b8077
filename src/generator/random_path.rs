/*
random_path.rs

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

//! Carve the primary path from the start to the finish.
//!
//! The carver moves in straight runs of two to four cells.
//! After each run it closes the cell just past the end of the run (the stopper), so that a
//! ball sliding along the corridor stops where the carver turned.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::error::Error;
use std::fmt;

use super::cells::{CellType, Grid};
use super::coordinate::{Direction, GridCoordinate};
use super::path;
use super::rng::SeededRng;

/// Maximum number of runs before giving up.
const MAX_ITERATIONS: usize = 150;

/// Shortest and longest straight runs.
const MIN_RUN: i32 = 2;
const MAX_RUN: i32 = 4;

/// Length of the run when no turn is possible.
const DESPERATE_RUN: i32 = 2;

/// The carver stops when it gets that close to the finish.
const FINISH_REACH: u32 = 2;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// The carver ran out of iterations before getting close to the finish.
    FinishNotReached { distance: u32 },
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::FinishNotReached { distance } => {
                write!(f, "the primary path ended {distance} cells away from the finish")
            }
        }
    }
}

impl Error for RandomPathError {}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Starting cell.
    pub start: GridCoordinate,

    /// Target cell.
    pub finish: GridCoordinate,

    /// Side of the grid.
    size: usize,

    /// Number of iterations it took to generate the last random path.
    pub iteration: usize,
}

impl RandomPath {
    /// Create the object for a grid of the given side. The path goes from the top left interior
    /// corner to the bottom right interior corner.
    pub fn new(size: usize) -> Self {
        let last: i32 = size as i32 - 2;
        Self {
            start: GridCoordinate::new(1, 1),
            finish: GridCoordinate::new(last, last),
            size,
            iteration: 0,
        }
    }

    /// Carve a random path in the grid and return it.
    ///
    /// The finish cell is always opened, even when the path does not reach it.
    ///
    /// # Errors
    ///
    /// The method returns an error when the path ends more than two cells away from the finish.
    /// The grid has been modified anyway, and the caller must start over with a new grid.
    pub fn generate(
        &mut self,
        grid: &mut Grid,
        rng: &mut SeededRng,
    ) -> Result<path::Path, RandomPathError> {
        let mut current: GridCoordinate = self.start;
        let mut path: path::Path = path::Path::new(current);
        let mut last_direction: Option<Direction> = None;

        grid.set(current, CellType::Empty);
        self.iteration = 0;

        while current.distance(self.finish) > FINISH_REACH && self.iteration < MAX_ITERATIONS {
            self.iteration += 1;

            // Try to turn: any direction except the one just used
            let mut directions: Vec<Direction> = Direction::ALL
                .into_iter()
                .filter(|d| Some(*d) != last_direction)
                .collect();
            directions.shuffle(rng);

            let mut moved: bool = false;
            for direction in directions {
                let length: i32 = rng.random_range(MIN_RUN..=MAX_RUN);
                if let Some(carved) = self.project(grid, current, direction, length) {
                    current = carved[carved.len() - 1];
                    path.extend(&carved);
                    last_direction = Some(direction);
                    moved = true;
                    break;
                }
            }
            if moved {
                continue;
            }

            // Desperation move: any direction, short run
            if let Some(direction) = Direction::from_repr(rng.random_range(0..4)) {
                debug!("    No turn from {current}, trying a short run {direction}");
                if let Some(carved) = self.project(grid, current, direction, DESPERATE_RUN) {
                    current = carved[carved.len() - 1];
                    path.extend(&carved);
                    last_direction = Some(direction);
                }
            }
        }

        grid.set(self.finish, CellType::Empty);

        let distance: u32 = current.distance(self.finish);
        debug!(
            "Primary path: {} cells, {} iterations, ends at {current} ({distance} from finish)",
            path.len(),
            self.iteration
        );
        if distance <= FINISH_REACH {
            Ok(path)
        } else {
            Err(RandomPathError::FinishNotReached { distance })
        }
    }

    /// Carve a straight run of `length` cells from `from`, and place the stopper.
    ///
    /// Return the carved cells, or [`None`] if the run would touch the outer ring.
    fn project(
        &self,
        grid: &mut Grid,
        from: GridCoordinate,
        direction: Direction,
        length: i32,
    ) -> Option<Vec<GridCoordinate>> {
        let points: Vec<GridCoordinate> = (1..=length).map(|i| from.offset(direction, i)).collect();
        if points.iter().any(|p| !p.is_interior(self.size)) {
            return None;
        }
        let end: GridCoordinate = *points.last()?;

        let stopper: GridCoordinate = end.neighbor(direction);
        if stopper.is_interior(self.size) && stopper != self.finish && grid.is_open(stopper) {
            grid.set(stopper, CellType::Wall);
        }

        for p in &points {
            grid.set(*p, CellType::Empty);
        }
        Some(points)
    }
}
