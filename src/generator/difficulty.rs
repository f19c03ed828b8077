/*
difficulty.rs

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

//! Difficulty profile derived from the level number.

/// Highest fraction of open cells that can become holes.
const MAX_HAZARD_DENSITY: f64 = 0.2;

/// Difficulty parameters for a level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DifficultyProfile {
    pub level: u32,
}

impl DifficultyProfile {
    pub fn new(level: u32) -> Self {
        Self { level }
    }

    /// Minimum number of slides a generated level must require.
    pub fn min_moves(&self) -> usize {
        4 + self.level as usize / 15
    }

    /// Probability for an open cell off the primary path to become a hole.
    pub fn hazard_density(&self) -> f64 {
        (0.04 + f64::from(self.level) * 0.003).min(MAX_HAZARD_DENSITY)
    }

    /// Number of false corridors to carve.
    pub fn branch_count(&self) -> usize {
        3 + self.level as usize / 10
    }
}
