/*
worker.rs

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

//! Generate levels outside of the calling thread.
//!
//! Generating a level can take a few hundred attempts, so interactive callers should not run it
//! on their main loop.
//! The functions here run the generator on a new thread and return an [`async_channel`]
//! receiver, that async code reads with `recv().await` and blocking code with
//! `recv_blocking()`.

use async_channel::Receiver;
use log::debug;
use std::thread;

use crate::generate;
use crate::generator::level::{Diagnostics, LevelRecord};

/// Generate one level in the background.
pub fn spawn_generation(level: u32) -> Receiver<(LevelRecord, Diagnostics)> {
    let (sender, receiver) = async_channel::bounded::<(LevelRecord, Diagnostics)>(1);

    thread::spawn(move || {
        if sender.send_blocking(generate(level)).is_err() {
            debug!("Level {level} generated, but nobody is waiting for it");
        }
    });
    receiver
}

/// Generate several levels in the background, one after the other.
///
/// The levels are sent in the order of `levels`, as soon as each one is ready.
/// The channel is closed after the last level.
pub fn spawn_batch(levels: Vec<u32>) -> Receiver<(LevelRecord, Diagnostics)> {
    let (sender, receiver) = async_channel::bounded::<(LevelRecord, Diagnostics)>(1);

    thread::spawn(move || {
        for level in levels {
            if sender.send_blocking(generate(level)).is_err() {
                debug!("Batch interrupted at level {level}");
                break;
            }
        }
    });
    receiver
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_level_is_the_same() {
        let receiver = spawn_generation(7);
        let (record, diagnostics) = receiver.recv_blocking().expect("generated level");
        assert_eq!((record, diagnostics), generate(7));
        // Only one level is sent
        assert!(receiver.recv_blocking().is_err());
    }

    #[test]
    fn batch_keeps_the_order() {
        let receiver = spawn_batch(vec![3, 1, 2]);
        let numbers: Vec<u32> = std::iter::from_fn(|| receiver.recv_blocking().ok())
            .map(|(record, _)| record.level_number)
            .collect();
        assert_eq!(numbers, vec![3, 1, 2]);
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        drop(spawn_batch(vec![4, 5, 6]));
    }
}
