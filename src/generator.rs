/*
generator.rs

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

//! Generate the levels of the game.
//!
//! A level is a square grid of cells (see [`cells::CellType`]) that the player crosses by
//! sliding: each move sends the ball in one direction until something stops it (see
//! [`slide`]).
//!
//! Levels are generated in phases, all drawing from the same [`rng::SeededRng`]:
//!
//! * [`planner`] opens random zones of the grid to give it texture.
//! * [`random_path`] carves a primary path from the top left corner to the bottom right
//!   corner, and closes the corridors where the path turns.
//! * [`constraints`] adds false corridors and holes, keeping the primary path clear.
//! * [`advanced`] places keys, gates, portals, and moving hazards, depending on the level.
//! * [`solver`] checks that the finish can be reached and that the level is not too easy.
//!
//! [`level_generator::LevelGenerator`] runs these phases until a level is accepted.
//! If it takes too many attempts, a predefined layout is used instead (see [`fallback`]).

pub mod advanced;
pub mod cells;
pub mod constraints;
pub mod coordinate;
pub mod difficulty;
pub mod fallback;
pub mod level;
pub mod level_generator;
pub mod path;
pub mod planner;
pub mod random_path;
pub mod rng;
pub mod slide;
pub mod solver;

pub use cells::{CellType, Grid};
pub use coordinate::{Direction, GridCoordinate};
pub use level::{Diagnostics, LevelRecord, PatrolDefinition};
pub use level_generator::{LevelGenerator, generate_with_config};
