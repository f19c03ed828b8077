/*
rng.rs

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

//! Deterministic random number generator.
//!
//! Levels must be identical on every device and every run, so the generator cannot use
//! [`rand::rng`].
//! [`SeededRng`] is a 64-bit linear congruential generator that implements [`rand::RngCore`];
//! all the [`rand::Rng`] and [`rand::seq::SliceRandom`] helpers work on top of it.
//!
//! The same instance is passed by `&mut` to every generation phase and kept across attempts, so
//! a retry continues the stream instead of restarting it.

use rand::RngCore;
use rand::rand_core::impls;

use crate::config::{SEED_MIX, ZERO_SEED_REPLACEMENT};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Linear congruential generator seeded from a level number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from a raw seed. A zero seed is replaced by a fixed non-zero value.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 {
                ZERO_SEED_REPLACEMENT
            } else {
                seed
            },
        }
    }

    /// Create the generator for the given level.
    pub fn for_level(level: u32) -> Self {
        Self::new(level_seed(level))
    }
}

/// Seed derived from a level number.
pub fn level_seed(level: u32) -> u64 {
    u64::from(level) ^ SEED_MIX
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        // The high bits of an LCG have the longest period
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}
