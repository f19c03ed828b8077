/*
generation.rs

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

use std::time::{Duration, Instant};

use maze100::config::{GRID_SIZE, MAX_GENERATION_ATTEMPTS};
use maze100::game::{Game, Status};
use maze100::generate;
use maze100::generator::cells::CellType;
use maze100::generator::coordinate::GridCoordinate;
use maze100::generator::difficulty::DifficultyProfile;
use maze100::generator::fallback::fallback_level;
use maze100::generator::level::{Diagnostics, LevelRecord};
use maze100::generator::rng::level_seed;
use maze100::generator::solver::Solver;

fn all_levels() -> Vec<(LevelRecord, Diagnostics)> {
    (1..=100).map(generate).collect()
}

#[test]
fn same_level_same_output() {
    for level in [1, 37, 73, 100] {
        assert_eq!(generate(level), generate(level));
    }
    assert_ne!(generate(5).0.grid, generate(6).0.grid);
}

#[test]
fn levels_stay_in_bounds() {
    for (record, diagnostics) in all_levels() {
        let level: u32 = record.level_number;
        assert_eq!(diagnostics.level_number, level);
        assert_eq!(diagnostics.seed, level_seed(level));
        assert_eq!(record.grid_size, GRID_SIZE);
        assert_eq!(record.grid.rows().len(), GRID_SIZE);
        assert!(record.grid.rows().iter().all(|row| row.len() == GRID_SIZE));
        assert!(record.is_valid_coordinate(record.start));
        assert!(record.is_valid_coordinate(record.finish));
        assert_eq!(record.cell(record.start), Some(CellType::Player));
        assert_eq!(record.cell(record.finish), Some(CellType::Finish));
        assert_eq!(record.grid.count(CellType::Player), 1, "level {level}");
        assert_eq!(record.grid.count(CellType::Finish), 1, "level {level}");

        for i in 0..GRID_SIZE as i32 {
            let last: i32 = GRID_SIZE as i32 - 1;
            for c in [
                GridCoordinate::new(i, 0),
                GridCoordinate::new(i, last),
                GridCoordinate::new(0, i),
                GridCoordinate::new(last, i),
            ] {
                assert_eq!(record.cell(c), Some(CellType::Wall), "level {level} at {c}");
            }
        }
    }
}

#[test]
fn portals_are_paired() {
    for (record, _) in all_levels() {
        for (from, to) in &record.portal_pairs {
            assert!(record.is_valid_coordinate(*from));
            assert!(record.is_valid_coordinate(*to));
            assert_eq!(record.portal_pairs.get(to), Some(from));
            assert_eq!(record.cell(*from), Some(CellType::Portal));
            assert_eq!(record.cell(*to), Some(CellType::Portal));
            assert_ne!(*from, record.start);
            assert_ne!(*from, record.finish);
        }
        assert_eq!(record.grid.count(CellType::Portal), record.portal_pairs.len());
    }
}

#[test]
fn patrols_are_valid() {
    for (record, _) in all_levels() {
        for p in &record.patrols {
            assert!(record.is_valid_coordinate(p.start));
            assert!(record.is_valid_coordinate(p.end));
            assert!(p.travel_secs > 0.0);
            assert!(p.pause_secs >= 0.0);
        }
    }
}

#[test]
fn levels_are_solvable_and_hard_enough() {
    for (record, diagnostics) in all_levels() {
        let level: u32 = record.level_number;
        let moves: usize = Solver::new(
            &record.grid,
            record.start,
            record.finish,
            &record.portal_pairs,
        )
        .min_moves()
        .unwrap_or_else(|| panic!("level {level} cannot be solved"));
        assert_eq!(diagnostics.solution_moves, Some(moves));
        assert!(
            moves >= DifficultyProfile::new(level).min_moves(),
            "level {level} solved in {moves} moves"
        );
    }
}

#[test]
fn attempts_stay_within_budget() {
    let mut total: usize = 0;
    let mut fallbacks: usize = 0;
    for (_, diagnostics) in all_levels() {
        assert!(diagnostics.attempts >= 1);
        assert!(diagnostics.attempts <= MAX_GENERATION_ATTEMPTS);
        total += diagnostics.attempts;
        if diagnostics.used_fallback {
            fallbacks += 1;
        }
    }
    assert_eq!(fallbacks, 0);
    assert!((total as f64 / 100.0) < 25.0, "{total} attempts for 100 levels");
}

#[test]
fn very_large_levels_finish_quickly() {
    for level in [20_000_000, u32::MAX] {
        let started: Instant = Instant::now();
        let (record, diagnostics) = generate(level);
        assert!(started.elapsed() < Duration::from_secs(10), "level {level} too slow");
        assert!(record.patrols.len() <= GRID_SIZE * GRID_SIZE);
        assert!(diagnostics.solution_moves.is_some());
    }
}

#[test]
fn mechanics_follow_the_level_thresholds() {
    let (level30, _) = generate(30);
    assert_eq!(level30.grid.count(CellType::Key), 0);
    assert_eq!(level30.grid.count(CellType::Gate), 0);
    assert!(level30.portal_pairs.is_empty());
    assert!(level30.patrols.is_empty());

    let (level31, _) = generate(31);
    assert_eq!(level31.grid.count(CellType::Key), 1);
    assert_eq!(level31.grid.count(CellType::Gate), 1);
    assert!(level31.portal_pairs.is_empty());

    let (level52, _) = generate(52);
    assert!(!level52.patrols.is_empty());
    assert!(level52.portal_pairs.is_empty());

    let (level61, _) = generate(61);
    assert_eq!(level61.portal_pairs.len(), 2);
    assert_eq!(level61.grid.count(CellType::Portal), 2);
}

#[test]
fn fallback_is_solvable() {
    for level in [1, 10, 31, 61, 100] {
        let (record, moves) = fallback_level(level);
        let expected: Option<usize> = Solver::new(
            &record.grid,
            record.start,
            record.finish,
            &record.portal_pairs,
        )
        .min_moves();
        assert!(expected.is_some(), "fallback level {level}");
        assert_eq!(moves, expected);
    }
}

#[test]
fn solutions_can_be_played() {
    for level in [3, 34, 58, 66, 99] {
        let (record, diagnostics) = generate(level);
        let solution = Solver::new(
            &record.grid,
            record.start,
            record.finish,
            &record.portal_pairs,
        )
        .solution()
        .expect("solvable level");
        assert_eq!(Some(solution.len()), diagnostics.solution_moves);

        let mut game: Game = Game::new(&record);
        for direction in solution {
            assert!(game.slide(direction).is_some(), "level {level}: {direction} blocked");
        }
        assert_eq!(game.status(), Status::Won, "level {level}");
    }
}

#[test]
fn json_round_trip() {
    let (record, diagnostics) = generate(64);
    let text: String = serde_json::to_string(&record).expect("serializable level");
    let back: LevelRecord = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(back, record);

    // Coordinate-keyed maps are written as lists of pairs
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");
    let pairs = value["portal_pairs"].as_array().expect("list of pairs");
    assert_eq!(pairs.len(), record.portal_pairs.len());

    let text: String = serde_json::to_string(&diagnostics).expect("serializable diagnostics");
    let back: Diagnostics = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(back, diagnostics);
}
