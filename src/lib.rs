/*
lib.rs

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

//! Procedural level generator for a sliding-ball maze game.
//!
//! Every level is derived from its number only: calling [`generate`] twice with the same
//! number returns the same level.
//!
//! ```
//! let (level, diagnostics) = maze100::generate(12);
//! assert_eq!(level.level_number, 12);
//! assert!(diagnostics.solution_moves.is_some());
//! ```

pub mod config;
pub mod game;
pub mod generator;
pub mod worker;

use generator::level::{Diagnostics, LevelRecord};
use generator::level_generator::LevelGenerator;

/// Generate the level with the given number, with its generation report.
pub fn generate(level: u32) -> (LevelRecord, Diagnostics) {
    LevelGenerator::new(level).generate()
}
