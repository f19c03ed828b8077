/*
coordinate.rs

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

//! Grid coordinates and directions.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Slide direction.
///
/// Row 0 is the top row of the grid, therefore [`Direction::Up`] decreases `y`.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, FromRepr,
)]
#[repr(u8)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All the directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(dx, dy)` step for the direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Direction that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Position in the grid. `x` is the column and `y` the row.
///
/// Coordinates are signed so that stepping past the grid edge can be detected.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct GridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl GridCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Adjacent coordinate in the given direction. The result might be outside the grid.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Coordinate `steps` cells away in the given direction.
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * steps, self.y + dy * steps)
    }

    /// Manhattan distance.
    pub fn distance(self, other: GridCoordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Whether the coordinate is in a grid of side `size`.
    pub fn is_within(self, size: usize) -> bool {
        let size: i32 = size as i32;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Whether the coordinate is in a grid of side `size`, but not on its outer ring.
    pub fn is_interior(self, size: usize) -> bool {
        let size: i32 = size as i32;
        self.x > 0 && self.x < size - 1 && self.y > 0 && self.y < size - 1
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
