/*
path.rs

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

//! Primary path carved through the grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::coordinate::GridCoordinate;

/// Path object.
///
/// The cells are kept in carving order. A cell can appear several times when the carver crosses
/// its own corridor.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<GridCoordinate>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<GridCoordinate>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object that starts at the given cell.
    pub fn new(start: GridCoordinate) -> Self {
        let mut path: Path = Self::default();
        path.push(start);
        path
    }

    /// Add a cell to the path.
    pub fn push(&mut self, coord: GridCoordinate) {
        self.path.push(coord);
        self.visited.insert(coord);
    }

    /// Add several cells to the path.
    pub fn extend(&mut self, coords: &[GridCoordinate]) {
        for c in coords {
            self.push(*c);
        }
    }

    /// Get the number of cells in the path, counting repeated cells.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, coord: GridCoordinate) -> bool {
        self.visited.contains(&coord)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<GridCoordinate> {
        &self.path
    }

    /// Return the set of the distinct cells in the path.
    pub fn cells(&self) -> &HashSet<GridCoordinate> {
        &self.visited
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<GridCoordinate> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<GridCoordinate> {
        self.path.last().copied()
    }

    /// Return the cell in the middle of the path.
    pub fn midpoint(&self) -> Option<GridCoordinate> {
        self.path.get(self.path.len() / 2).copied()
    }
}
