/*
game.rs

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

//! Manage the status of a level in progress.
//!
//! [`Game`] applies the player moves to a [`LevelRecord`] with the same slide rule as the
//! solver, so every level the generator accepts can be completed here.

use log::debug;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::generator::cells::CellType;
use crate::generator::coordinate::{Direction, GridCoordinate};
use crate::generator::level::LevelRecord;
use crate::generator::slide::{SlideOutcome, SlideStop, slide};

/// Status of the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Dead,
}

/// Result of one player move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// Cells crossed during the slide, for the animation.
    pub path: Vec<GridCoordinate>,

    /// Where the player ended, after a possible teleport.
    pub position: GridCoordinate,

    /// Whether a key was collected during the move.
    pub key_collected: bool,

    /// Portal exit, if the player went through a portal.
    pub teleported_to: Option<GridCoordinate>,

    /// Toggle walls switched by a pressure plate.
    pub toggled: Vec<GridCoordinate>,
}

/// Manage the status of the level in progress.
#[derive(Debug)]
pub struct Game {
    /// Level being played.
    level: LevelRecord,

    /// Current cell of the player.
    position: GridCoordinate,

    has_key: bool,

    /// Toggle walls that are currently open.
    toggled: HashSet<GridCoordinate>,

    /// Number of slides that moved the player.
    moves: usize,

    /// Number of times the player died.
    deaths: usize,

    status: Status,

    /// Time when the game started. Used to compute game duration and patrol positions.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object. The player stands on the start cell.
    pub fn new(level: &LevelRecord) -> Self {
        Self {
            level: level.clone(),
            position: level.start,
            has_key: false,
            toggled: HashSet::new(),
            moves: 0,
            deaths: 0,
            status: Status::Playing,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    pub fn level(&self) -> &LevelRecord {
        &self.level
    }

    pub fn position(&self) -> GridCoordinate {
        self.position
    }

    pub fn has_key(&self) -> bool {
        self.has_key
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn deaths(&self) -> usize {
        self.deaths
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the given toggle wall is currently open.
    pub fn is_toggled(&self, coord: GridCoordinate) -> bool {
        self.toggled.contains(&coord)
    }

    /// Slide the player in the given direction.
    ///
    /// Return [`None`] when the player cannot move: the game is over, or the next cell is
    /// closed. Such an attempt is not counted as a move.
    pub fn slide(&mut self, direction: Direction) -> Option<Move> {
        if self.status != Status::Playing {
            return None;
        }
        let outcome: SlideOutcome = slide(
            &self.level.grid,
            self.position,
            direction,
            self.has_key,
            &self.toggled,
        );
        if !outcome.moved() {
            debug!("Blocked {direction} at {}", self.position);
            return None;
        }

        self.moves += 1;
        let key_collected: bool = outcome.has_key && !self.has_key;
        self.has_key = outcome.has_key;
        self.position = outcome.position;

        let mut teleported_to: Option<GridCoordinate> = None;
        let mut toggled: Vec<GridCoordinate> = Vec::new();
        match outcome.stop {
            SlideStop::Hazard => self.die(),
            SlideStop::Finish => {
                debug!("Level {} completed in {} moves", self.level.level_number, self.moves);
                self.status = Status::Won;
            }
            SlideStop::Portal => {
                if let Some(target) = self.level.portal_pairs.get(&self.position) {
                    debug!("Teleport {} -> {target}", self.position);
                    self.position = *target;
                    teleported_to = Some(*target);
                }
            }
            SlideStop::Blocked => {
                if self.level.cell(self.position) == Some(CellType::PressurePlate) {
                    toggled = self.toggle_walls();
                }
            }
        }

        Some(Move {
            path: outcome.path,
            position: self.position,
            key_collected,
            teleported_to,
            toggled,
        })
    }

    /// Switch the toggle walls linked to the pressure plate under the player.
    fn toggle_walls(&mut self) -> Vec<GridCoordinate> {
        let Some(targets) = self.level.switch_targets.get(&self.position) else {
            return Vec::new();
        };
        for t in targets {
            if !self.toggled.remove(t) {
                self.toggled.insert(*t);
            }
        }
        targets.clone()
    }

    fn die(&mut self) {
        self.status = Status::Dead;
        self.deaths += 1;
        debug!("Player died at {}", self.position);
    }

    /// Kill the player if a moving hazard occupies the player's cell `elapsed` seconds after
    /// the level started.
    ///
    /// Return whether the player is dead.
    pub fn check_patrols(&mut self, elapsed: f64) -> bool {
        if self.status == Status::Playing
            && self
                .level
                .patrols
                .iter()
                .any(|p| p.position_at(elapsed) == self.position)
        {
            self.die();
        }
        self.status == Status::Dead
    }

    /// Bring a dead player back to the start cell.
    ///
    /// The key and the toggle walls keep their state.
    pub fn respawn(&mut self) {
        if self.status == Status::Dead {
            self.position = self.level.start;
            self.status = Status::Playing;
        }
    }

    /// Restart the level from scratch, but keep the death counter and the timer.
    pub fn reset(&mut self) {
        self.position = self.level.start;
        self.has_key = false;
        self.toggled.clear();
        self.moves = 0;
        self.status = Status::Playing;
    }

    /// Pause the game. Pausing an already paused game does nothing.
    pub fn pause(&mut self) {
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        if self.pause_duration.is_none() {
            self.pause_duration = Some(self.start_time.elapsed());
        }
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
    }

    pub fn is_paused(&self) -> bool {
        self.pause_duration.is_some()
    }

    /// Return the played time, without the pauses.
    pub fn get_duration(&self) -> Duration {
        self.pause_duration.unwrap_or_else(|| self.start_time.elapsed())
    }

    /// Kill the player if a moving hazard reaches the player at the current play time.
    pub fn update(&mut self) -> bool {
        let elapsed: f64 = self.get_duration().as_secs_f64();
        self.check_patrols(elapsed)
    }
}
