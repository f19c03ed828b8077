/*
config.rs

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

//! Build-time configuration.

pub static COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Side of the square level grid.
pub const GRID_SIZE: usize = 15;

/// Number of random attempts before the fallback layout is used.
pub const MAX_GENERATION_ATTEMPTS: usize = 300;

/// Mixed into the level number to derive the RNG seed.
pub const SEED_MIX: u64 = 0x5EC6_E1DE;

/// Replacement for a derived seed of zero.
pub const ZERO_SEED_REPLACEMENT: u64 = 0xDEAD_C0DE;

/// First level with a key and a gate.
pub const KEY_GATE_LEVEL: u32 = 31;

/// First level with moving hazards.
pub const MOVING_HAZARD_LEVEL: u32 = 51;

/// First level with a portal pair.
pub const PORTAL_LEVEL: u32 = 61;

/// First level where the fallback layout gets a hole.
pub const FALLBACK_HAZARD_LEVEL: u32 = 10;

/// Time, in seconds, for a moving hazard to travel between its endpoints.
pub const PATROL_TRAVEL_SECS: f64 = 1.5;

/// Time, in seconds, a moving hazard waits at each endpoint.
pub const PATROL_PAUSE_SECS: f64 = 0.5;

/// Run-time settings of the level generator.
///
/// [`crate::generate`] always uses [`GeneratorConfig::default`], so its output only depends on
/// the level number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of random attempts before falling back to the predefined layout.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_GENERATION_ATTEMPTS,
        }
    }
}
