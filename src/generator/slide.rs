/*
slide.rs

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

//! The slide movement rule.
//!
//! A move sends the player in one direction until something stops it:
//!
//! - the grid edge, a wall, a closed gate, or a closed toggle wall: the player stops on the
//!   cell before it.
//! - a deadly cell: the player stops on it and dies.
//! - the finish or a portal: the player stops on it.
//!
//! Keys are collected on the way without stopping.
//! A gate only opens if the key was held when the slide started.
//!
//! Both the solver ([`super::solver`]) and the live game ([`crate::game`]) use [`slide`], so
//! the validation and the gameplay cannot disagree.

use std::collections::HashSet;

use super::cells::{CellType, Grid, is_walkable_in_context};
use super::coordinate::{Direction, GridCoordinate};

/// What ended a slide.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlideStop {
    /// Grid edge or a closed cell.
    Blocked,

    /// The player entered a deadly cell.
    Hazard,

    /// The player reached the finish.
    Finish,

    /// The player entered a portal.
    Portal,
}

/// Result of a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideOutcome {
    /// Cells entered during the slide, in order. Empty if the player could not move.
    pub path: Vec<GridCoordinate>,

    /// Cell where the player stopped.
    pub position: GridCoordinate,

    /// Key possession after the slide.
    pub has_key: bool,

    pub stop: SlideStop,
}

impl SlideOutcome {
    /// Whether the player moved at all.
    pub fn moved(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Slide from `from` in the given direction.
pub fn slide(
    grid: &Grid,
    from: GridCoordinate,
    direction: Direction,
    has_key: bool,
    toggled: &HashSet<GridCoordinate>,
) -> SlideOutcome {
    let mut current: GridCoordinate = from;
    let mut path: Vec<GridCoordinate> = Vec::new();
    let mut collected: bool = false;

    let stop: SlideStop = loop {
        let next: GridCoordinate = current.neighbor(direction);
        let Some(cell) = grid.get(next) else {
            break SlideStop::Blocked;
        };

        if cell.is_deadly() {
            path.push(next);
            current = next;
            break SlideStop::Hazard;
        }
        if !is_walkable_in_context(cell, has_key, toggled, next) {
            break SlideStop::Blocked;
        }

        path.push(next);
        current = next;
        match cell {
            CellType::Key => collected = true,
            CellType::Finish => break SlideStop::Finish,
            CellType::Portal => break SlideStop::Portal,
            _ => (),
        }
    };

    SlideOutcome {
        path,
        position: current,
        has_key: has_key || collected,
        stop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(source: &str) -> Grid {
        Grid::parse(source).expect("valid test grid")
    }

    #[test]
    fn stops_before_a_wall() {
        // Straight corridor of five cells, closed by a wall
        let g: Grid = grid(
            "
            #######
            #.....#
            #######
            #######
            #######
            #######
            #######
        ",
        );
        let outcome: SlideOutcome = slide(
            &g,
            GridCoordinate::new(1, 1),
            Direction::Right,
            false,
            &HashSet::new(),
        );
        assert_eq!(outcome.position, GridCoordinate::new(5, 1));
        assert_eq!(outcome.path.len(), 4);
        assert_eq!(outcome.stop, SlideStop::Blocked);
    }

    #[test]
    fn blocked_immediately() {
        let g: Grid = grid("###\n#.#\n###");
        let outcome: SlideOutcome = slide(
            &g,
            GridCoordinate::new(1, 1),
            Direction::Up,
            false,
            &HashSet::new(),
        );
        assert!(!outcome.moved());
        assert_eq!(outcome.position, GridCoordinate::new(1, 1));
    }

    #[test]
    fn grid_edge_stops_the_slide() {
        let g: Grid = grid("...\n...\n...");
        let outcome: SlideOutcome = slide(
            &g,
            GridCoordinate::new(0, 1),
            Direction::Right,
            false,
            &HashSet::new(),
        );
        assert_eq!(outcome.position, GridCoordinate::new(2, 1));
        assert_eq!(outcome.stop, SlideStop::Blocked);
    }

    #[test]
    fn keys_are_collected_without_stopping() {
        let g: Grid = grid(
            "
            #######
            #.k..G#
            #######
            #######
            #######
            #######
            #######
        ",
        );
        let none: HashSet<GridCoordinate> = HashSet::new();

        // The key collected on the way does not open the gate during the same slide
        let first: SlideOutcome = slide(&g, GridCoordinate::new(1, 1), Direction::Right, false, &none);
        assert_eq!(first.position, GridCoordinate::new(4, 1));
        assert!(first.has_key);

        let second: SlideOutcome = slide(&g, first.position, Direction::Right, first.has_key, &none);
        assert_eq!(second.position, GridCoordinate::new(5, 1));
    }

    #[test]
    fn stops_on_hazards_finish_and_portals() {
        let g: Grid = grid(
            "
            #####
            #.O.#
            #.F.#
            #.P.#
            #####
        ",
        );
        let none: HashSet<GridCoordinate> = HashSet::new();

        let hazard: SlideOutcome = slide(&g, GridCoordinate::new(1, 1), Direction::Right, false, &none);
        assert_eq!(hazard.position, GridCoordinate::new(2, 1));
        assert_eq!(hazard.stop, SlideStop::Hazard);

        let finish: SlideOutcome = slide(&g, GridCoordinate::new(1, 2), Direction::Right, false, &none);
        assert_eq!(finish.position, GridCoordinate::new(2, 2));
        assert_eq!(finish.stop, SlideStop::Finish);

        let portal: SlideOutcome = slide(&g, GridCoordinate::new(3, 3), Direction::Left, false, &none);
        assert_eq!(portal.position, GridCoordinate::new(2, 3));
        assert_eq!(portal.stop, SlideStop::Portal);
    }

    #[test]
    fn toggle_walls_follow_the_toggled_set() {
        let g: Grid = grid("#####\n#.T.#\n#####\n#####\n#####");
        let mut toggled: HashSet<GridCoordinate> = HashSet::new();

        let closed: SlideOutcome = slide(&g, GridCoordinate::new(1, 1), Direction::Right, true, &toggled);
        assert_eq!(closed.position, GridCoordinate::new(1, 1));

        toggled.insert(GridCoordinate::new(2, 1));
        let open: SlideOutcome = slide(&g, GridCoordinate::new(1, 1), Direction::Right, false, &toggled);
        assert_eq!(open.position, GridCoordinate::new(3, 1));
    }
}
