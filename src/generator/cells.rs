/*
cells.rs

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

//! Cell types and the level grid.
//!
//! A grid can be written as "ASCII art", one row per line and one symbol per cell:
//!
//! ```text
//! #####
//! #S..#
//! #.#k#
//! #..F#
//! #####
//! ```
//!
//! See [`CellType::symbol`] for the list of symbols.
//! [`Grid::parse`] reads this representation and the [`std::fmt::Display`] implementation
//! writes it.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::coordinate::GridCoordinate;

/// Type of a grid cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CellType {
    Empty,
    #[default]
    Wall,
    /// Start marker.
    Player,
    Finish,
    Hole,
    Spike,
    MovingSpike,
    Key,
    Gate,
    Portal,
    PressurePlate,
    ToggleWall,
}

impl CellType {
    /// Whether the player can enter the cell, without considering the game state.
    ///
    /// Gates and toggle walls are reported as not walkable; use [`is_walkable_in_context`] for
    /// them.
    pub fn is_walkable_static(self) -> bool {
        matches!(
            self,
            CellType::Empty
                | CellType::Player
                | CellType::Finish
                | CellType::Key
                | CellType::Portal
                | CellType::PressurePlate
        )
    }

    /// Whether entering the cell kills the player.
    pub fn is_deadly(self) -> bool {
        matches!(
            self,
            CellType::Hole | CellType::Spike | CellType::MovingSpike
        )
    }

    /// Symbol used in the text representation of a grid.
    pub fn symbol(self) -> char {
        match self {
            CellType::Empty => '.',
            CellType::Wall => '#',
            CellType::Player => 'S',
            CellType::Finish => 'F',
            CellType::Hole => 'O',
            CellType::Spike => '^',
            CellType::MovingSpike => 'M',
            CellType::Key => 'k',
            CellType::Gate => 'G',
            CellType::Portal => 'P',
            CellType::PressurePlate => '_',
            CellType::ToggleWall => 'T',
        }
    }

    /// Cell type for a symbol of the text representation.
    pub fn from_symbol(symbol: char) -> Option<CellType> {
        match symbol {
            '.' => Some(CellType::Empty),
            '#' => Some(CellType::Wall),
            'S' => Some(CellType::Player),
            'F' => Some(CellType::Finish),
            'O' => Some(CellType::Hole),
            '^' => Some(CellType::Spike),
            'M' => Some(CellType::MovingSpike),
            'k' => Some(CellType::Key),
            'G' => Some(CellType::Gate),
            'P' => Some(CellType::Portal),
            '_' => Some(CellType::PressurePlate),
            'T' => Some(CellType::ToggleWall),
            _ => None,
        }
    }
}

/// Whether the player can enter the cell at `coord` given the current game state.
///
/// A gate opens when the player holds the key, and a toggle wall is open while its coordinate
/// is in the `toggled` set.
pub fn is_walkable_in_context(
    cell: CellType,
    has_key: bool,
    toggled: &HashSet<GridCoordinate>,
    coord: GridCoordinate,
) -> bool {
    match cell {
        CellType::Gate => has_key,
        CellType::ToggleWall => toggled.contains(&coord),
        _ => cell.is_walkable_static(),
    }
}

/// Square matrix of cells, stored row by row.
///
/// The serialized form is the list of rows. Deserializing goes through the same checks as
/// [`Grid::parse`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<CellType>>", into = "Vec<Vec<CellType>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<CellType>>,
}

impl Grid {
    /// Create a grid filled with walls.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![CellType::Wall; size]; size],
        }
    }

    /// Side of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rows of the grid; `rows()[y][x]`.
    pub fn rows(&self) -> &Vec<Vec<CellType>> {
        &self.cells
    }

    /// Cell at the given coordinate, or [`None`] outside the grid.
    pub fn get(&self, coord: GridCoordinate) -> Option<CellType> {
        if coord.is_within(self.size) {
            Some(self.cells[coord.y as usize][coord.x as usize])
        } else {
            None
        }
    }

    /// Change a cell. Coordinates outside the grid are ignored.
    pub fn set(&mut self, coord: GridCoordinate, cell: CellType) {
        if coord.is_within(self.size) {
            self.cells[coord.y as usize][coord.x as usize] = cell;
        } else {
            debug!("Ignoring out of grid cell {coord}");
        }
    }

    /// Whether the cell at the given coordinate is [`CellType::Empty`].
    pub fn is_open(&self, coord: GridCoordinate) -> bool {
        self.get(coord) == Some(CellType::Empty)
    }

    /// Coordinates of all the cells that are not on the outer ring, row by row.
    pub fn interior(&self) -> impl Iterator<Item = GridCoordinate> + use<> {
        let last: i32 = self.size as i32 - 1;
        (1..last).flat_map(move |y| (1..last).map(move |x| GridCoordinate::new(x, y)))
    }

    /// Coordinates of the cells of the given type, row by row.
    pub fn find(&self, cell: CellType) -> Vec<GridCoordinate> {
        let mut found: Vec<GridCoordinate> = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, c) in row.iter().enumerate() {
                if *c == cell {
                    found.push(GridCoordinate::new(x as i32, y as i32));
                }
            }
        }
        found
    }

    /// Number of cells of the given type.
    pub fn count(&self, cell: CellType) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|c| **c == cell).count())
            .sum()
    }

    /// Parse the text representation of a grid.
    ///
    /// Blank lines and surrounding spaces are ignored.
    ///
    /// # Errors
    ///
    /// The method returns an error when a symbol is unknown or when the grid is not square.
    pub fn parse(source: &str) -> Result<Self, String> {
        let mut cells: Vec<Vec<CellType>> = Vec::new();

        for (line_number, line) in source
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .enumerate()
        {
            let mut row: Vec<CellType> = Vec::with_capacity(line.len());
            for (column, symbol) in line.chars().enumerate() {
                match CellType::from_symbol(symbol) {
                    Some(cell) => row.push(cell),
                    None => {
                        return Err(format!(
                            "Unknown symbol '{symbol}' at row {line_number}, column {column}"
                        ));
                    }
                }
            }
            cells.push(row);
        }
        Self::try_from(cells)
    }
}

impl TryFrom<Vec<Vec<CellType>>> for Grid {
    type Error = String;

    /// Build a grid from its rows, which must form a non-empty square.
    fn try_from(cells: Vec<Vec<CellType>>) -> Result<Self, Self::Error> {
        let size: usize = cells.len();
        if size == 0 {
            return Err("The grid is empty".to_string());
        }
        if let Some((y, row)) = cells.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(format!(
                "Row {y} has {} cells instead of {size}: the grid must be square",
                row.len()
            ));
        }
        Ok(Self { size, cells })
    }
}

impl From<Grid> for Vec<Vec<CellType>> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
