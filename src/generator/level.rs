/*
level.rs

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

//! Generated level and generation diagnostics.
//!
//! [`LevelRecord`] is the only data product of the generator.
//! Renderers and the live movement layer read it; nothing in it changes after generation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::cells::{CellType, Grid};
use super::coordinate::GridCoordinate;

/// Serialize and deserialize maps keyed by [`GridCoordinate`] with Serde.
///
/// JSON objects only accept string keys, so the map is written as a list of `[key, value]`
/// pairs, sorted by key so that the output is stable.
pub mod coordinate_map {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    use crate::generator::coordinate::GridCoordinate;

    /// Serialize a map keyed by coordinates.
    pub fn serialize<V, S>(
        map: &HashMap<GridCoordinate, V>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        let mut entries: Vec<(&GridCoordinate, &V)> = map.iter().collect();
        entries.sort_by_key(|(k, _)| **k);
        serializer.collect_seq(entries)
    }

    /// Deserialize a map keyed by coordinates.
    pub fn deserialize<'de, V, D>(deserializer: D) -> Result<HashMap<GridCoordinate, V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let entries: Vec<(GridCoordinate, V)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

/// Patrol of a moving hazard between two cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PatrolDefinition {
    /// Where the hazard starts.
    pub start: GridCoordinate,

    /// Other end of the patrol.
    pub end: GridCoordinate,

    /// Time, in seconds, to travel from one end to the other. Always strictly positive.
    pub travel_secs: f64,

    /// Time, in seconds, spent at each end. Never negative.
    pub pause_secs: f64,
}

impl PatrolDefinition {
    /// Cell occupied by the hazard `elapsed` seconds after the level started.
    ///
    /// The hazard moves to the end, pauses, moves back to the start, pauses, and repeats.
    pub fn position_at(&self, elapsed: f64) -> GridCoordinate {
        if self.travel_secs <= 0.0 || !elapsed.is_finite() {
            return self.start;
        }
        let pause: f64 = self.pause_secs.max(0.0);
        let cycle: f64 = 2.0 * (self.travel_secs + pause);
        let t: f64 = elapsed.max(0.0) % cycle;

        let fraction: f64 = if t < self.travel_secs {
            t / self.travel_secs
        } else if t < self.travel_secs + pause {
            1.0
        } else if t < 2.0 * self.travel_secs + pause {
            1.0 - (t - self.travel_secs - pause) / self.travel_secs
        } else {
            0.0
        };

        let x: f64 = f64::from(self.start.x) + f64::from(self.end.x - self.start.x) * fraction;
        let y: f64 = f64::from(self.start.y) + f64::from(self.end.y - self.start.y) * fraction;
        GridCoordinate::new(x.round() as i32, y.round() as i32)
    }
}

/// Complete level, as produced by the generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelRecord {
    /// Level number (starting at 1).
    pub level_number: u32,

    /// Side of the square grid.
    pub grid_size: usize,

    /// Cells of the level. The start cell is [`CellType::Player`] and the finish cell
    /// [`CellType::Finish`].
    pub grid: Grid,

    pub start: GridCoordinate,

    pub finish: GridCoordinate,

    /// Moving hazards.
    pub patrols: Vec<PatrolDefinition>,

    /// Portal pairs. Each entry has its reciprocal entry.
    #[serde(with = "coordinate_map")]
    pub portal_pairs: HashMap<GridCoordinate, GridCoordinate>,

    /// For each pressure plate, the toggle walls it switches.
    #[serde(with = "coordinate_map")]
    pub switch_targets: HashMap<GridCoordinate, Vec<GridCoordinate>>,
}

impl LevelRecord {
    /// Cell at the given coordinate, or [`None`] outside the grid.
    pub fn cell(&self, coord: GridCoordinate) -> Option<CellType> {
        self.grid.get(coord)
    }

    /// Whether the coordinate is in the grid.
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.is_within(self.grid_size)
    }

    /// Whether entering the cell at the given coordinate kills the player.
    pub fn is_deadly(&self, coord: GridCoordinate) -> bool {
        self.cell(coord).is_some_and(CellType::is_deadly)
    }
}

impl fmt::Display for LevelRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Level {}  start = {}  finish = {}",
            self.level_number, self.start, self.finish
        )?;
        write!(f, "{}", self.grid)?;
        let mut portals: Vec<(&GridCoordinate, &GridCoordinate)> = self
            .portal_pairs
            .iter()
            .filter(|(a, b)| a < b)
            .collect();
        portals.sort();
        for (a, b) in portals {
            writeln!(f, "portal {a} <> {b}")?;
        }
        for p in &self.patrols {
            writeln!(
                f,
                "patrol {} -> {} ({}s, pause {}s)",
                p.start, p.end, p.travel_secs, p.pause_secs
            )?;
        }
        Ok(())
    }
}

/// Report about one call to the generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Diagnostics {
    pub level_number: u32,

    /// Seed derived from the level number.
    pub seed: u64,

    /// Number of random attempts consumed.
    pub attempts: usize,

    /// Whether the predefined fallback layout was returned.
    pub used_fallback: bool,

    /// Minimal number of slides that solve the returned level.
    /// [`None`] means the returned level is not solvable, which is a generator bug.
    pub solution_moves: Option<usize>,
}
