/*
advanced.rs

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

//! Keys, gates, portals, and moving hazards.
//!
//! Each mechanic is unlocked at a given level (see [`crate::config`]).
//! Elements are placed on open interior cells that are not on the primary path, except the
//! gate which is placed on the path so that the key is required.

use log::debug;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashMap;

use crate::config::{
    KEY_GATE_LEVEL, MOVING_HAZARD_LEVEL, PATROL_PAUSE_SECS, PATROL_TRAVEL_SECS, PORTAL_LEVEL,
};

use super::cells::{CellType, Grid};
use super::coordinate::GridCoordinate;
use super::level::PatrolDefinition;
use super::path::Path;
use super::rng::SeededRng;

/// The gate is only placed when the path is longer than this.
const MIN_PATH_FOR_GATE: usize = 5;

/// Horizontal reach of a moving hazard patrol.
const PATROL_REACH: i32 = 3;

/// Level elements placed in addition to the cells.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AdvancedElements {
    pub patrols: Vec<PatrolDefinition>,
    pub portal_pairs: HashMap<GridCoordinate, GridCoordinate>,
    pub switch_targets: HashMap<GridCoordinate, Vec<GridCoordinate>>,
}

/// Place the advanced elements for the given level.
///
/// The start and finish markers must already be in the grid, so they are never selected.
pub fn place_advanced_elements(
    grid: &mut Grid,
    path: &Path,
    level: u32,
    rng: &mut SeededRng,
) -> AdvancedElements {
    let mut elements: AdvancedElements = AdvancedElements::default();

    if level >= KEY_GATE_LEVEL {
        place_key_and_gate(grid, path, rng);
    }
    if level >= PORTAL_LEVEL {
        elements.portal_pairs = place_portals(grid, path, rng);
    }
    if level >= MOVING_HAZARD_LEVEL {
        elements.patrols = place_patrols(grid, path, level, rng);
    }
    elements
}

/// Open interior cells that are not on the path.
fn off_path_candidates(grid: &Grid, path: &Path) -> Vec<GridCoordinate> {
    grid.interior()
        .filter(|c| grid.is_open(*c) && !path.contains(*c))
        .collect()
}

/// One key off the path, and a gate in the middle of the path.
fn place_key_and_gate(grid: &mut Grid, path: &Path, rng: &mut SeededRng) {
    let candidates: Vec<GridCoordinate> = off_path_candidates(grid, path);
    let Some(key) = candidates.choose(rng).copied() else {
        debug!("No room for a key");
        return;
    };
    grid.set(key, CellType::Key);
    debug!("Key at {key}");

    if path.len() > MIN_PATH_FOR_GATE
        && let Some(gate) = path.midpoint()
        && !matches!(grid.get(gate), Some(CellType::Player | CellType::Finish))
    {
        grid.set(gate, CellType::Gate);
        debug!("Gate at {gate}");
    }
}

/// Two portals, linked both ways.
fn place_portals(
    grid: &mut Grid,
    path: &Path,
    rng: &mut SeededRng,
) -> HashMap<GridCoordinate, GridCoordinate> {
    let mut pairs: HashMap<GridCoordinate, GridCoordinate> = HashMap::new();
    let mut candidates: Vec<GridCoordinate> = off_path_candidates(grid, path);
    candidates.shuffle(rng);

    if let [p1, p2, ..] = *candidates.as_slice() {
        grid.set(p1, CellType::Portal);
        grid.set(p2, CellType::Portal);
        pairs.insert(p1, p2);
        pairs.insert(p2, p1);
        debug!("Portals {p1} <> {p2}");
    } else {
        debug!("No room for portals");
    }
    pairs
}

/// Horizontal patrols starting on random open cells. Patrols may overlap each other.
fn place_patrols(
    grid: &Grid,
    path: &Path,
    level: u32,
    rng: &mut SeededRng,
) -> Vec<PatrolDefinition> {
    let candidates: Vec<GridCoordinate> = off_path_candidates(grid, path);
    let last: i32 = grid.size() as i32 - 2;
    let mut patrols: Vec<PatrolDefinition> = Vec::new();
    let count: usize = (level / 20) as usize;

    for _ in 0..count.min(candidates.len()) {
        let Some(start) = candidates.choose(rng).copied() else {
            break;
        };
        let end: GridCoordinate = GridCoordinate::new((start.x + PATROL_REACH).min(last), start.y);
        debug!("Patrol {start} -> {end}");
        patrols.push(PatrolDefinition {
            start,
            end,
            travel_secs: PATROL_TRAVEL_SECS,
            pause_secs: PATROL_PAUSE_SECS,
        });
    }
    patrols
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Open grid with a straight path along the second row.
    fn fixture() -> (Grid, Path) {
        let mut grid: Grid = Grid::new(15);
        for c in Grid::new(15).interior() {
            grid.set(c, CellType::Empty);
        }
        let mut path: Path = Path::new(GridCoordinate::new(1, 1));
        for x in 2..=13 {
            path.push(GridCoordinate::new(x, 1));
        }
        grid.set(GridCoordinate::new(1, 1), CellType::Player);
        grid.set(GridCoordinate::new(13, 13), CellType::Finish);
        (grid, path)
    }

    #[test]
    fn nothing_before_level_31() {
        let (mut grid, path) = fixture();
        let before: Grid = grid.clone();
        let elements: AdvancedElements =
            place_advanced_elements(&mut grid, &path, 30, &mut SeededRng::for_level(30));
        assert_eq!(elements, AdvancedElements::default());
        assert_eq!(grid, before);
    }

    #[test]
    fn key_off_path_and_gate_on_path() {
        let (mut grid, path) = fixture();
        let elements: AdvancedElements =
            place_advanced_elements(&mut grid, &path, 31, &mut SeededRng::for_level(31));

        let keys: Vec<GridCoordinate> = grid.find(CellType::Key);
        let gates: Vec<GridCoordinate> = grid.find(CellType::Gate);
        assert_eq!(keys.len(), 1);
        assert!(!path.contains(keys[0]));
        assert_eq!(gates, vec![GridCoordinate::new(7, 1)]);
        assert!(elements.portal_pairs.is_empty());
        assert!(elements.patrols.is_empty());
    }

    #[test]
    fn portals_are_symmetric_and_off_path() {
        let (mut grid, path) = fixture();
        let elements: AdvancedElements =
            place_advanced_elements(&mut grid, &path, 61, &mut SeededRng::for_level(61));

        assert_eq!(elements.portal_pairs.len(), 2);
        for (a, b) in &elements.portal_pairs {
            assert_eq!(elements.portal_pairs.get(b), Some(a));
            assert_ne!(a, b);
            assert!(!path.contains(*a));
            assert_eq!(grid.get(*a), Some(CellType::Portal));
        }
        assert_eq!(grid.find(CellType::Player), vec![GridCoordinate::new(1, 1)]);
        assert_eq!(grid.find(CellType::Finish), vec![GridCoordinate::new(13, 13)]);
    }

    #[test]
    fn patrols_stay_inside() {
        let (mut grid, path) = fixture();
        let elements: AdvancedElements =
            place_advanced_elements(&mut grid, &path, 100, &mut SeededRng::for_level(100));

        assert_eq!(elements.patrols.len(), 5);
        for p in &elements.patrols {
            assert!(p.start.is_interior(15));
            assert!(p.end.is_interior(15));
            assert_eq!(p.start.y, p.end.y);
            assert!(p.end.x >= p.start.x);
            assert!(p.travel_secs > 0.0);
            assert!(p.pause_secs >= 0.0);
        }
    }

    #[test]
    fn patrol_count_is_bounded_by_the_free_cells() {
        let (grid, path) = fixture();
        let candidates: usize = off_path_candidates(&grid, &path).len();
        let patrols: Vec<PatrolDefinition> =
            place_patrols(&grid, &path, u32::MAX, &mut SeededRng::for_level(u32::MAX));
        assert_eq!(patrols.len(), candidates);
    }

    #[test]
    fn short_path_has_no_gate() {
        let (mut grid, _) = fixture();
        let mut path: Path = Path::new(GridCoordinate::new(1, 1));
        path.push(GridCoordinate::new(2, 1));
        place_advanced_elements(&mut grid, &path, 40, &mut SeededRng::for_level(40));
        assert_eq!(grid.count(CellType::Gate), 0);
        assert_eq!(grid.count(CellType::Key), 1);
    }
}
