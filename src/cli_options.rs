/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the generator.
//! They print generated levels and can report how hard the generator had to work for them.
//!
//! # Examples
//!
//! Print level 42 with its shortest solution:
//!
//! ```
//! $ maze100 -l 42 --solution
//! ```
//!
//! Generate the first hundred levels and print some statistics:
//!
//! ```
//! $ maze100 -c 100 -s
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use serde::Serialize;
use std::env;

use maze100::config::COPYRIGHT_NOTICE;
use maze100::generator::coordinate::Direction;
use maze100::generator::level::{Diagnostics, LevelRecord};
use maze100::generator::solver::Solver;
use maze100::worker;

/// Output format of the levels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
enum Format {
    /// Grid drawn with one character per cell
    #[default]
    Ascii,

    /// One JSON document per level
    Json,
}

/// Generate Maze100 levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of the first level to generate
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    level: u32,

    /// Number of consecutive levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Ascii)]
    format: Format,

    /// Print the shortest solution of each level
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Print some statistics after generating the levels
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON document for one level.
#[derive(Serialize)]
struct LevelOutput<'a> {
    level: &'a LevelRecord,
    diagnostics: &'a Diagnostics,

    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Vec<Direction>>,
}

/// Parse and process command-line options.
///
/// Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let Some(end) = args.level.checked_add(args.count) else {
        eprintln!("Level numbers cannot go past {}", u32::MAX - 1);
        return 1;
    };
    let levels: Vec<u32> = (args.level..end).collect();
    let receiver = worker::spawn_batch(levels);

    let mut total: usize = 0;
    let mut max: usize = 0;
    let mut fallbacks: usize = 0;
    let mut generated: usize = 0;
    while let Ok((record, diagnostics)) = receiver.recv_blocking() {
        debug!("Level {} diagnostics: {diagnostics:?}", record.level_number);
        generated += 1;
        total += diagnostics.attempts;
        max = max.max(diagnostics.attempts);
        if diagnostics.used_fallback {
            fallbacks += 1;
        }

        let solution: Option<Vec<Direction>> = if args.solution {
            Solver::new(
                &record.grid,
                record.start,
                record.finish,
                &record.portal_pairs,
            )
            .solution()
        } else {
            None
        };

        match args.format {
            Format::Ascii => {
                println!("{record}");
                if let Some(moves) = &solution {
                    let moves: Vec<String> = moves.iter().map(Direction::to_string).collect();
                    println!("solution ({} moves): {}\n", moves.len(), moves.join(" "));
                }
            }
            Format::Json => {
                let output: LevelOutput = LevelOutput {
                    level: &record,
                    diagnostics: &diagnostics,
                    solution,
                };
                match serde_json::to_string_pretty(&output) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Cannot serialize level {}: {e}", record.level_number);
                        return 1;
                    }
                }
            }
        }
    }

    // Print some stats
    if args.summary && generated > 0 {
        println!(
            "
            levels = {}
    total attempts = {}
  average attempts = {:.2}
      max attempts = {}
         fallbacks = {}",
            generated,
            total,
            total as f64 / generated as f64,
            max,
            fallbacks
        );
    }
    0
}
