/*
record.rs

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

//! Record of a solved puzzle.
//!
//! A [`SolutionRecord`] keeps the starting board, the moves, and the final board of a run.
//! See the [`crate::saver::solution`] module that saves and restores the record.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime};

use crate::generator::board::{Board, BoardError};
use crate::generator::moves::Move;
use crate::generator::peg::PegId;
use crate::generator::solver::{self, SolverError};

/// Object that represents a run of the generator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionRecord {
    /// Board before the first move.
    pub initial: Board,

    /// Peg the disks are taken from.
    pub source: PegId,

    /// Peg the disks are moved to.
    pub target: PegId,

    /// Number of moved disks.
    pub disks: usize,

    /// Moves, in order.
    pub moves: Vec<Move>,

    /// Board after the last move.
    pub final_board: Board,

    /// Completion timestamp.
    pub when: SystemTime,

    /// How long the generation took.
    pub duration: Duration,
}

impl SolutionRecord {
    /// Create a [`SolutionRecord`] object with no moves yet.
    pub fn new(initial: Board, source: PegId, target: PegId, disks: usize) -> Self {
        Self {
            final_board: initial.clone(),
            initial,
            source,
            target,
            disks,
            moves: Vec::new(),
            when: SystemTime::now(),
            duration: Duration::ZERO,
        }
    }

    /// Run the generator until the end and return the record.
    pub fn solve(
        initial: Board,
        source: PegId,
        target: PegId,
        disks: usize,
    ) -> Result<Self, SolverError> {
        let mut record: SolutionRecord = SolutionRecord::new(initial.clone(), source, target, disks);
        let start: Instant = Instant::now();
        let mut moves = solver::generate(initial, source, target, disks)?.moves();
        for mv in moves.by_ref() {
            record.add_move(mv);
        }
        record.finish(moves.into_board(), start.elapsed());
        Ok(record)
    }

    /// Append a move to the record.
    pub fn add_move(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Store the final board and the duration, and set the completion timestamp.
    pub fn finish(&mut self, final_board: Board, duration: Duration) {
        self.final_board = final_board;
        self.duration = duration;
        self.when = SystemTime::now();
    }

    /// Apply the moves to the initial board and return the resulting board.
    ///
    /// # Errors
    ///
    /// The method returns an error if a move is illegal, which happens when the record has been
    /// altered.
    pub fn replay(&self) -> Result<Board, BoardError> {
        let mut board: Board = self.initial.clone();
        for mv in &self.moves {
            board.apply(*mv)?;
        }
        Ok(board)
    }

    /// Whether the moves lead from the initial board to the final board in the minimal number
    /// of moves.
    pub fn is_consistent(&self) -> bool {
        self.moves.len() as u128 == solver::minimal_moves(self.disks)
            && self.replay().is_ok_and(|b| b == self.final_board)
    }
}

/// Format a timestamp, such as [`SolutionRecord::when`], for the local time zone.
pub fn local_time(when: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(when);
    format!("{}", dt.format("%c"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_three_disks() {
        let initial = Board::tower(3, 1).unwrap();
        let record = SolutionRecord::solve(initial.clone(), PegId::Left, PegId::Right, 3).unwrap();
        assert_eq!(record.initial, initial);
        assert_eq!(record.moves.len(), 7);
        assert!(record.final_board.is_complete_on(PegId::Right));
        assert!(record.is_consistent());
        assert_eq!(record.replay().unwrap(), record.final_board);
    }

    #[test]
    fn formatted_timestamp() {
        let epoch = local_time(SystemTime::UNIX_EPOCH);
        assert!(epoch.contains("1970") || epoch.contains("1969"), "{epoch}");

        let record =
            SolutionRecord::solve(Board::tower(1, 1).unwrap(), PegId::Left, PegId::Right, 1)
                .unwrap();
        assert!(!local_time(record.when).is_empty());
    }

    #[test]
    fn altered_record() {
        let initial = Board::tower(3, 1).unwrap();
        let mut record = SolutionRecord::solve(initial, PegId::Left, PegId::Middle, 3).unwrap();
        record.moves.swap(0, 1);
        assert!(record.replay().is_err());
        assert!(!record.is_consistent());

        let mut record =
            SolutionRecord::solve(Board::tower(2, 1).unwrap(), PegId::Left, PegId::Right, 2)
                .unwrap();
        record.moves.pop();
        assert!(!record.is_consistent());
    }

    #[test]
    fn solve_propagates_errors() {
        let initial = Board::tower(1, 1).unwrap();
        assert!(matches!(
            SolutionRecord::solve(initial, PegId::Left, PegId::Right, 2),
            Err(SolverError::InsufficientDisks { .. })
        ));
    }

    #[test]
    fn json_round_trip() {
        let record =
            SolutionRecord::solve(Board::tower(2, 5).unwrap(), PegId::Left, PegId::Right, 2)
                .unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let restored: SolutionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
        assert!(restored.is_consistent());
    }
}
