/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Hanoi.

Hanoi is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hanoi is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hanoi. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The starting board comes from a preset (`--preset`), from a JSON literal (`--board`), or is a
//! tower of `--disks` disks on the left peg.
//! Each board produced by the generator is printed, the initial board excluded.
//!
//! # Examples
//!
//! List the available presets:
//!
//! ```
//! $ hanoi --ls
//! classic (3 disks, base width 1, 0s interval)
//! large (8 disks, base width 20, 0.2s interval)
//! small (4 disks, base width 30, 0.5s interval)
//! ```
//!
//! Solve the three-disk puzzle:
//!
//! ```
//! $ hanoi -n 3
//! [[3, 2], [], [1]]
//! [[3], [2], [1]]
//! [[3], [2, 1], []]
//! [[], [2, 1], [3]]
//! [[1], [2], [3]]
//! [[1], [], [3, 2]]
//! [[], [], [3, 2, 1]]
//! ```
//!
//! Move the two top disks of a custom board to the middle peg, as JSON lines:
//!
//! ```
//! $ hanoi -b '[[9,4,3,2],[],[8]]' -t middle -c 2 -f json
//! {"step":1,"move":{"disk":2,"from":"left","to":"right"},"board":[[9,4,3],[],[8,2]]}
//! {"step":2,"move":{"disk":3,"from":"left","to":"middle"},"board":[[9,4],[3],[8,2]]}
//! {"step":3,"move":{"disk":2,"from":"right","to":"middle"},"board":[[9,4],[3,2],[8]]}
//! ```

use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug, info};
use serde::Serialize;
use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime};

use hanoi::draw;
use hanoi::generator::board::Board;
use hanoi::generator::moves::Move;
use hanoi::generator::peg::PegId;
use hanoi::generator::presets;
use hanoi::generator::solver;
use hanoi::record::{self, SolutionRecord};
use hanoi::saver::solution::SaverSolution;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_DISKS, PKGNAME, VERSION};

/// Output format of the boards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
enum Format {
    /// Nested lists, such as `[[3, 2], [], [1]]`
    #[default]
    List,

    /// One JSON object per line, with the move and the board
    Json,

    /// Text drawing of the pegs
    Piles,
}

/// Solve the Towers of Hanoi puzzle and print every board of the optimal solution.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the presets
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Name of the preset to start from
    #[arg(short, long, conflicts_with_all = ["disks", "board"])]
    preset: Option<String>,

    /// Number of disks in the starting tower
    #[arg(short = 'n', long, conflicts_with = "board")]
    disks: Option<usize>,

    /// Size of the smallest disk in the starting tower
    #[arg(short = 'w', long, default_value_t = 1)]
    base_width: u32,

    /// Starting board in JSON, such as '[[3,2,1],[],[]]'
    #[arg(short, long)]
    board: Option<String>,

    /// Peg to take the disks from
    #[arg(value_enum, short, long, default_value_t = PegId::Left)]
    source: PegId,

    /// Peg to move the disks to
    #[arg(value_enum, short, long, default_value_t = PegId::Right)]
    target: PegId,

    /// Number of disks to move (all the disks of the source peg by default)
    #[arg(short, long)]
    count: Option<usize>,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::List)]
    format: Format,

    /// Pause in seconds between two boards (the preset interval by default)
    #[arg(short, long)]
    interval: Option<f32>,

    /// Directory where to save the solution record (solution.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print some statistics after the last board
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Line of the JSON output.
#[derive(Serialize)]
struct StateLine<'a> {
    step: u128,
    #[serde(rename = "move")]
    mv: &'a Move,
    board: &'a Board,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("{PKGNAME} {VERSION}");

    //
    // List the presets
    //
    if args.ls {
        let preset_hash = presets::preset_map();
        let mut names: Vec<&String> = preset_hash.keys().collect();
        names.sort();
        for name in names {
            println!("{}", preset_hash[name]);
        }
        return 0;
    }

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Build the starting board and return it with the pause between two boards.
fn initial_board(args: &Args) -> Result<(Board, Duration), Box<dyn Error>> {
    let mut interval: Duration = Duration::ZERO;

    let board: Board = if let Some(name) = &args.preset {
        let preset_hash = presets::preset_map();
        let preset = preset_hash.get(name).ok_or_else(|| {
            format!("Unknown preset {name}. Use --ls to list the available presets.")
        })?;
        interval = preset.interval;
        preset.board()?
    } else if let Some(json) = &args.board {
        serde_json::from_str(json).map_err(|e| format!("Invalid board {json}: {e}"))?
    } else {
        Board::tower(args.disks.unwrap_or(DEFAULT_DISKS), args.base_width)?
    };

    if let Some(secs) = args.interval {
        interval = Duration::try_from_secs_f32(secs)
            .map_err(|e| format!("Invalid interval {secs}: {e}"))?;
    }
    Ok((board, interval))
}

/// Print a board in the requested format.
fn print_state(
    out: &mut impl Write,
    format: Format,
    step: u128,
    mv: &Move,
    board: &Board,
) -> io::Result<()> {
    match format {
        Format::List => writeln!(out, "{board}"),
        Format::Json => {
            let line: StateLine = StateLine { step, mv, board };
            serde_json::to_writer(&mut *out, &line)?;
            writeln!(out)
        }
        Format::Piles => {
            writeln!(out, "Move {step}: {mv}")?;
            writeln!(out, "{}", draw::draw_board_string(board))?;
            writeln!(out)
        }
    }
}

/// Run the generator and print the boards.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let (board, interval) = initial_board(args)?;
    let disks: usize = args
        .count
        .unwrap_or_else(|| board.peg(args.source).len());

    // Only keep the moves when they must be saved
    let mut solution: Option<SolutionRecord> = args
        .output
        .as_ref()
        .map(|_| SolutionRecord::new(board.clone(), args.source, args.target, disks));

    let start: Instant = Instant::now();
    let mut hanoi: solver::Hanoi = solver::generate(board, args.source, args.target, disks)?;
    info!("Solving {disks} disks in {} moves", hanoi.total());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    while let Some(mv) = hanoi.step() {
        print_state(&mut out, args.format, hanoi.done(), &mv, hanoi.board())?;
        if let Some(r) = solution.as_mut() {
            r.add_move(mv);
        }
        if !interval.is_zero() {
            out.flush()?;
            thread::sleep(interval);
        }
    }
    out.flush()?;
    let duration: Duration = start.elapsed();
    let moves: u128 = hanoi.done();
    let final_board: Board = hanoi.into_board();

    let when: SystemTime = match (solution, &args.output) {
        (Some(mut r), Some(dir)) => {
            r.finish(final_board, duration);
            let saver: SaverSolution = SaverSolution::new(dir.clone());
            saver.save_solution(&r)?;
            info!("Solution saved in {:?}", saver.path());
            r.when
        }
        _ => SystemTime::now(),
    };

    if args.summary {
        println!(
            "
             moves = {}
     minimal moves = {}
      elapsed time = {}s
         completed = {}",
            moves,
            solver::minimal_moves(disks),
            duration.as_secs_f32(),
            record::local_time(when)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn args(list: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("hanoi").chain(list.iter().copied())).unwrap()
    }

    #[test]
    fn command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.source, PegId::Left);
        assert_eq!(a.target, PegId::Right);
        assert_eq!(a.format, Format::List);
        let (board, interval) = initial_board(&a).unwrap();
        assert_eq!(board.to_string(), "[[3, 2, 1], [], []]");
        assert_eq!(interval, Duration::ZERO);
    }

    #[test]
    fn pegs_by_name_or_index() {
        let a = args(&["-s", "middle", "-t", "0"]);
        assert_eq!(a.source, PegId::Middle);
        assert_eq!(a.target, PegId::Left);
        assert!(Args::try_parse_from(["hanoi", "-t", "3"]).is_err());
    }

    #[test]
    fn preset_board() {
        let a = args(&["-p", "large"]);
        let (board, interval) = initial_board(&a).unwrap();
        assert_eq!(board.disk_count(), 8);
        assert_eq!(interval, Duration::from_millis(200));

        let a = args(&["-p", "small", "-i", "0"]);
        let (_, interval) = initial_board(&a).unwrap();
        assert_eq!(interval, Duration::ZERO);

        assert!(initial_board(&args(&["-p", "huge"])).is_err());
    }

    #[test]
    fn conflicting_sources() {
        assert!(Args::try_parse_from(["hanoi", "-p", "small", "-n", "4"]).is_err());
        assert!(Args::try_parse_from(["hanoi", "-b", "[[1],[],[]]", "-n", "4"]).is_err());
    }

    #[test]
    fn json_board() {
        let a = args(&["-b", "[[9,4,3,2],[],[8]]"]);
        let (board, _) = initial_board(&a).unwrap();
        assert_eq!(board.disk_count(), 5);

        assert!(initial_board(&args(&["-b", "[[1,2],[],[]]"])).is_err());
        assert!(initial_board(&args(&["-b", "not json"])).is_err());
    }

    #[test]
    fn negative_interval() {
        assert!(initial_board(&args(&["--interval=-1"])).is_err());
    }

    #[test]
    fn run_saves_record() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        let a = args(&["-n", "4", "-f", "json", "-o", out, "--summary"]);
        run(&a).unwrap();

        let record = SaverSolution::new(dir.path().to_path_buf())
            .get_solution()
            .unwrap()
            .unwrap();
        assert_eq!(record.moves.len(), 15);
        assert!(record.is_consistent());
        assert!(record.final_board.is_complete_on(PegId::Right));
    }

    #[test]
    fn run_reports_precondition() {
        let a = args(&["-b", "[[1],[],[]]", "-c", "2"]);
        let err = run(&a).unwrap_err();
        assert!(err.to_string().contains("not enough disks"));
    }

    #[test]
    fn printed_formats() {
        let board = Board::new([vec![3, 2], vec![], vec![1]]).unwrap();
        let mv = Move {
            disk: board.top(PegId::Right).unwrap(),
            from: PegId::Left,
            to: PegId::Right,
        };

        let mut out: Vec<u8> = Vec::new();
        print_state(&mut out, Format::List, 1, &mv, &board).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[[3, 2], [], [1]]\n");

        let mut out: Vec<u8> = Vec::new();
        print_state(&mut out, Format::Json, 1, &mv, &board).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"step\":1,\"move\":{\"disk\":1,\"from\":\"left\",\"to\":\"right\"},\"board\":[[3,2],[],[1]]}\n"
        );

        let mut out: Vec<u8> = Vec::new();
        print_state(&mut out, Format::Piles, 1, &mv, &board).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Move 1: disk 1 from left to right\n"));
        assert!(text.ends_with("-\n\n"));
    }
}
