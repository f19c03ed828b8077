/*
solver.rs

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

//! Find the shortest solution of a level.
//!
//! The solver runs a breadth-first search over `(position, has_key)` states.
//! Each edge is one slide (see [`super::slide`]), so the depth of a state is the number of
//! moves, not the number of cells travelled.
//!
//! Deadly cells are reached but never expanded.
//! Standing on a portal is the same as standing on its paired cell.

use log::{Level, debug, log_enabled};
use std::collections::{HashMap, HashSet, VecDeque};

use super::cells::{CellType, Grid};
use super::coordinate::{Direction, GridCoordinate};
use super::slide::slide;

/// Search state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct State {
    position: GridCoordinate,
    has_key: bool,
}

/// Solver object.
pub struct Solver<'a> {
    grid: &'a Grid,
    start: GridCoordinate,
    finish: GridCoordinate,
    portals: &'a HashMap<GridCoordinate, GridCoordinate>,

    /// Generated levels have no pressure plates, so toggle walls stay closed.
    toggled: HashSet<GridCoordinate>,
}

impl<'a> Solver<'a> {
    /// Create a [`Solver`] object.
    pub fn new(
        grid: &'a Grid,
        start: GridCoordinate,
        finish: GridCoordinate,
        portals: &'a HashMap<GridCoordinate, GridCoordinate>,
    ) -> Self {
        Self {
            grid,
            start,
            finish,
            portals,
            toggled: HashSet::new(),
        }
    }

    /// Minimal number of slides from the start to the finish, or [`None`] if the finish cannot
    /// be reached.
    pub fn min_moves(&self) -> Option<usize> {
        self.solution().map(|moves| moves.len())
    }

    /// One of the shortest solutions, as a list of slide directions.
    pub fn solution(&self) -> Option<Vec<Direction>> {
        let start: State = State {
            position: self.start,
            has_key: false,
        };
        let mut parents: HashMap<State, (State, Direction)> = HashMap::new();
        let mut visited: HashSet<State> = HashSet::from([start]);
        let mut queue: VecDeque<State> = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            if current.position == self.finish {
                let moves: Vec<Direction> = Self::rebuild(&parents, current);
                if log_enabled!(Level::Debug) {
                    debug!(
                        "Solved in {} moves ({} states visited): {moves:?}",
                        moves.len(),
                        visited.len()
                    );
                }
                return Some(moves);
            }

            let cell: Option<CellType> = self.grid.get(current.position);
            if cell.is_some_and(CellType::is_deadly) {
                continue;
            }
            let origin: GridCoordinate = match cell {
                Some(CellType::Portal) => *self
                    .portals
                    .get(&current.position)
                    .unwrap_or(&current.position),
                _ => current.position,
            };

            for direction in Direction::ALL {
                let outcome = slide(self.grid, origin, direction, current.has_key, &self.toggled);
                // A blocked slide is not a move
                if !outcome.moved() {
                    continue;
                }
                let next: State = State {
                    position: outcome.position,
                    has_key: outcome.has_key,
                };
                if visited.insert(next) {
                    parents.insert(next, (current, direction));
                    queue.push_back(next);
                }
            }
        }
        debug!("No solution ({} states visited)", visited.len());
        None
    }

    /// Walk back the parent links from the given state.
    fn rebuild(parents: &HashMap<State, (State, Direction)>, end: State) -> Vec<Direction> {
        let mut moves: Vec<Direction> = Vec::new();
        let mut state: State = end;
        while let Some((previous, direction)) = parents.get(&state) {
            moves.push(*direction);
            state = *previous;
        }
        moves.reverse();
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(source: &str, portals: &HashMap<GridCoordinate, GridCoordinate>) -> Option<Vec<Direction>> {
        let grid: Grid = Grid::parse(source).expect("valid test grid");
        let start: GridCoordinate = grid.find(CellType::Player)[0];
        let finish: GridCoordinate = grid.find(CellType::Finish)[0];
        Solver::new(&grid, start, finish, portals).solution()
    }

    #[test]
    fn counts_slides_not_cells() {
        let moves = solve(
            "
            #######
            #S....#
            #####.#
            #####.#
            #####F#
            #######
            #######
        ",
            &HashMap::new(),
        );
        assert_eq!(moves, Some(vec![Direction::Right, Direction::Down]));
    }

    #[test]
    fn unreachable_finish() {
        let moves = solve(
            "
            #####
            #S..#
            #####
            #.F.#
            #####
        ",
            &HashMap::new(),
        );
        assert_eq!(moves, None);
    }

    #[test]
    fn key_opens_the_gate() {
        let source: &str = "
            #######
            #S.k.G#
            #####.#
            #####F#
            #######
            #######
            #######
        ";
        let moves = solve(source, &HashMap::new()).expect("solvable");
        // Right (collect the key, stop at the gate), right (through the gate), down
        assert_eq!(
            moves,
            vec![Direction::Right, Direction::Right, Direction::Down]
        );

        // Without the key, the gate never opens
        let no_key: String = source.replace('k', ".");
        assert_eq!(solve(&no_key, &HashMap::new()), None);
    }

    #[test]
    fn holes_are_dead_ends() {
        // The only way down goes through a hole
        let moves = solve(
            "
            #####
            #S.O#
            ###.#
            ###F#
            #####
        ",
            &HashMap::new(),
        );
        assert_eq!(moves, None);
    }

    #[test]
    fn portals_teleport() {
        let a: GridCoordinate = GridCoordinate::new(3, 1);
        let b: GridCoordinate = GridCoordinate::new(1, 4);
        let portals: HashMap<GridCoordinate, GridCoordinate> = HashMap::from([(a, b), (b, a)]);
        let source: &str = "
            ######
            #S.P##
            ######
            ######
            #P..F#
            ######
        ";
        let moves = solve(source, &portals).expect("solvable through the portal");
        assert_eq!(moves, vec![Direction::Right, Direction::Right]);

        assert_eq!(solve(source, &HashMap::new()), None);
    }

    #[test]
    fn start_on_finish() {
        let grid: Grid = Grid::parse("###\n#F#\n###").expect("valid test grid");
        let c: GridCoordinate = GridCoordinate::new(1, 1);
        let portals: HashMap<GridCoordinate, GridCoordinate> = HashMap::new();
        assert_eq!(Solver::new(&grid, c, c, &portals).min_moves(), Some(0));
    }
}
