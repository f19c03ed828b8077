/*
level_generator.rs

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

//! Run the generation phases until a level is accepted.
//!
//! Each attempt starts from a grid full of walls and runs, in order, the structural planner,
//! the primary path, the false corridors, the holes, the advanced elements, and the solver.
//! A single [`SeededRng`] is carried from one attempt to the next, so the whole sequence only
//! depends on the level number.
//!
//! When all the attempts fail, the predefined layout from [`super::fallback`] is returned.

use log::{Level, debug, info, log_enabled, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use crate::config::{GRID_SIZE, GeneratorConfig};

use super::advanced::{AdvancedElements, place_advanced_elements};
use super::cells::{CellType, Grid};
use super::constraints::{add_branches, add_hazards};
use super::coordinate::GridCoordinate;
use super::difficulty::DifficultyProfile;
use super::fallback::fallback_level;
use super::level::{Diagnostics, LevelRecord};
use super::path;
use super::planner::generate_macro_zones;
use super::random_path::{RandomPath, RandomPathError};
use super::rng::{SeededRng, level_seed};
use super::solver::Solver;

/// Reasons for rejecting an attempt.
#[derive(Debug, PartialEq)]
pub enum AttemptError {
    /// The primary path could not be carved.
    Path(RandomPathError),

    /// The finish cannot be reached.
    Unsolvable,

    /// The level can be solved with fewer moves than the difficulty requires.
    TooEasy { moves: usize, required: usize },
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttemptError::Path(e) => write!(f, "{e}"),
            AttemptError::Unsolvable => write!(f, "the finish cannot be reached"),
            AttemptError::TooEasy { moves, required } => {
                write!(f, "solved in {moves} moves, at least {required} required")
            }
        }
    }
}

impl Error for AttemptError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AttemptError::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RandomPathError> for AttemptError {
    fn from(e: RandomPathError) -> Self {
        AttemptError::Path(e)
    }
}

/// Level generator object.
pub struct LevelGenerator {
    level: u32,
    seed: u64,
    profile: DifficultyProfile,
    config: GeneratorConfig,
}

impl LevelGenerator {
    /// Create the generator for the given level, with the default settings.
    pub fn new(level: u32) -> Self {
        Self::with_config(level, GeneratorConfig::default())
    }

    pub fn with_config(level: u32, config: GeneratorConfig) -> Self {
        Self {
            level,
            seed: level_seed(level),
            profile: DifficultyProfile::new(level),
            config,
        }
    }

    /// Generate the level.
    ///
    /// Every call starts a new random sequence from the level seed, so repeated calls return
    /// the same level.
    pub fn generate(&self) -> (LevelRecord, Diagnostics) {
        let mut rng: SeededRng = SeededRng::new(self.seed);

        for attempt in 1..=self.config.max_attempts {
            match self.attempt(&mut rng) {
                Ok((record, moves)) => {
                    if attempt > 1 {
                        info!(
                            "Level {} generated after retries (seed {}, {attempt} attempts)",
                            self.level, self.seed
                        );
                    }
                    if log_enabled!(Level::Debug) {
                        debug!("Accepted level ({moves} moves):\n{record}");
                    }
                    let diagnostics: Diagnostics = Diagnostics {
                        level_number: self.level,
                        seed: self.seed,
                        attempts: attempt,
                        used_fallback: false,
                        solution_moves: Some(moves),
                    };
                    return (record, diagnostics);
                }
                Err(e) => debug!("Level {} attempt {attempt} rejected: {e}", self.level),
            }
        }

        warn!(
            "Fallback layout used for level {} (seed {}, {} attempts)",
            self.level, self.seed, self.config.max_attempts
        );
        let (record, moves) = fallback_level(self.level);
        let diagnostics: Diagnostics = Diagnostics {
            level_number: self.level,
            seed: self.seed,
            attempts: self.config.max_attempts,
            used_fallback: true,
            solution_moves: moves,
        };
        (record, diagnostics)
    }

    /// Run all the phases once.
    ///
    /// Return the level and its minimal number of moves.
    fn attempt(&self, rng: &mut SeededRng) -> Result<(LevelRecord, usize), AttemptError> {
        let mut grid: Grid = Grid::new(GRID_SIZE);

        generate_macro_zones(&mut grid, rng);

        let mut random_path: RandomPath = RandomPath::new(GRID_SIZE);
        let path: path::Path = random_path.generate(&mut grid, rng)?;
        let start: GridCoordinate = random_path.start;
        let finish: GridCoordinate = random_path.finish;
        grid.set(start, CellType::Player);
        grid.set(finish, CellType::Finish);

        add_branches(&mut grid, &self.profile, rng);

        let mut protected: HashSet<GridCoordinate> = path.cells().clone();
        protected.insert(start);
        protected.insert(finish);
        add_hazards(&mut grid, &protected, &self.profile, rng);

        let elements: AdvancedElements =
            place_advanced_elements(&mut grid, &path, self.level, rng);

        let moves: usize = Solver::new(&grid, start, finish, &elements.portal_pairs)
            .min_moves()
            .ok_or(AttemptError::Unsolvable)?;
        let required: usize = self.profile.min_moves();
        if moves < required {
            return Err(AttemptError::TooEasy { moves, required });
        }

        let record: LevelRecord = LevelRecord {
            level_number: self.level,
            grid_size: GRID_SIZE,
            grid,
            start,
            finish,
            patrols: elements.patrols,
            portal_pairs: elements.portal_pairs,
            switch_targets: elements.switch_targets,
        };
        Ok((record, moves))
    }
}

/// Generate a level with the given settings.
pub fn generate_with_config(level: u32, config: GeneratorConfig) -> (LevelRecord, Diagnostics) {
    LevelGenerator::with_config(level, config).generate()
}
