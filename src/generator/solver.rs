/*
solver.rs

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

//! Generate the minimal sequence of moves that transfers disks between two pegs.
//!
//! Moving `n` disks from a source peg to a target peg is done in three phases: move the top
//! `n - 1` disks to the spare peg, move the remaining disk to the target peg, and then move the
//! `n - 1` disks from the spare peg to the target peg.
//! The solution has `2^n - 1` moves.
//!
//! [`Hanoi`] runs that recursion lazily. Instead of recursive calls, it keeps a stack of
//! pending tasks and only performs the work needed to produce the next move. The stack never
//! holds more than `2n` tasks.
//!
//! [`Hanoi`] owns the board. Each item returned by the iterator is an independent snapshot of
//! the board after one move, so the items can be collected.
//! To avoid copying the board, use [`Hanoi::step`] and read the board with [`Hanoi::board`]
//! between two steps.

use log::debug;
use std::iter::FusedIterator;
use thiserror::Error;

use super::board::Board;
use super::disk::Disk;
use super::moves::Move;
use super::peg::PegId;

/// Maximum number of disks that can be moved. The number of moves must fit in an `u128`.
pub const MAX_DISKS: usize = 128;

/// Type of errors.
///
/// All the errors are detected before the first move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The source peg holds fewer disks than requested.
    #[error("not enough disks on the {peg} peg: {requested} requested, {available} available")]
    InsufficientDisks {
        peg: PegId,
        requested: usize,
        available: usize,
    },

    /// The source and target pegs are the same.
    #[error("the source and target pegs are both the {0} peg")]
    SamePeg(PegId),

    /// The number of moves would not fit in an `u128`.
    #[error("cannot move {0} disks (at most 128)")]
    TooManyDisks(usize),

    /// A smaller disk on the target or spare peg is in the way of a disk it would receive.
    #[error("disk {disk} cannot be moved over disk {top} on the {peg} peg")]
    Blocked { peg: PegId, top: u32, disk: u32 },
}

/// Return the number of moves of the minimal solution for the given number of disks: `2^n - 1`.
///
/// The result saturates at `u128::MAX` above [`MAX_DISKS`].
pub fn minimal_moves(disks: usize) -> u128 {
    if disks == 0 {
        0
    } else {
        u128::MAX >> (MAX_DISKS - disks.min(MAX_DISKS))
    }
}

/// Pending work.
#[derive(Debug, Clone, Copy)]
enum Task {
    /// Move a stack of disks.
    Solve {
        disks: usize,
        from: PegId,
        to: PegId,
    },

    /// Move a single disk.
    Shift { from: PegId, to: PegId },
}

/// Lazy generator of the board states.
#[derive(Debug)]
pub struct Hanoi {
    /// Board, updated after each move.
    board: Board,

    source: PegId,
    target: PegId,

    /// Number of disks to move from the source peg to the target peg.
    disks: usize,

    /// Tasks still to run. The next task is at the end.
    pending: Vec<Task>,

    /// Number of moves already performed.
    done: u128,
}

/// Create the generator that moves the top `disk_count` disks of `source` onto `target`.
///
/// # Errors
///
/// The function returns an error if `source` holds fewer than `disk_count` disks, if `source`
/// and `target` are the same peg, or if a disk on the target or spare peg is smaller than a
/// disk that the peg would receive. Moving zero disks is always possible and produces no board.
pub fn generate(
    board: Board,
    source: PegId,
    target: PegId,
    disk_count: usize,
) -> Result<Hanoi, SolverError> {
    let mut pending: Vec<Task> = Vec::with_capacity(2 * disk_count.min(MAX_DISKS) + 1);

    if disk_count > 0 {
        if source == target {
            return Err(SolverError::SamePeg(source));
        }

        let stack: &[Disk] = board.peg(source).disks();
        if stack.len() < disk_count {
            return Err(SolverError::InsufficientDisks {
                peg: source,
                requested: disk_count,
                available: stack.len(),
            });
        }
        if disk_count > MAX_DISKS {
            return Err(SolverError::TooManyDisks(disk_count));
        }

        // The target receives the largest moved disk, the spare at most the second largest
        let bottom = stack.len() - disk_count;
        let mut receivers: Vec<(PegId, Disk)> = vec![(target, stack[bottom])];
        if disk_count >= 2 {
            receivers.push((PegId::spare(source, target), stack[bottom + 1]));
        }
        for (peg, largest) in receivers {
            if let Some(top) = board.top(peg) {
                if top < largest {
                    return Err(SolverError::Blocked {
                        peg,
                        top: top.size(),
                        disk: largest.size(),
                    });
                }
            }
        }

        pending.push(Task::Solve {
            disks: disk_count,
            from: source,
            to: target,
        });
    }

    debug!(
        "Moving {disk_count} disks from the {source} peg to the {target} peg in {} moves",
        minimal_moves(disk_count)
    );

    Ok(Hanoi {
        board,
        source,
        target,
        disks: disk_count,
        pending,
        done: 0,
    })
}

impl Hanoi {
    /// Apply the next move and return it, or return None when all the disks are on the target
    /// peg.
    pub fn step(&mut self) -> Option<Move> {
        while let Some(task) = self.pending.pop() {
            match task {
                Task::Solve { disks: 0, .. } => {}
                Task::Solve { disks: 1, from, to } | Task::Shift { from, to } => {
                    return self.shift(from, to);
                }
                Task::Solve { disks, from, to } => {
                    // Pushed in reverse order so that the first phase runs first
                    let spare: PegId = PegId::spare(from, to);
                    self.pending.push(Task::Solve {
                        disks: disks - 1,
                        from: spare,
                        to,
                    });
                    self.pending.push(Task::Shift { from, to });
                    self.pending.push(Task::Solve {
                        disks: disks - 1,
                        from,
                        to: spare,
                    });
                }
            }
        }
        None
    }

    /// Move a disk and return the move.
    fn shift(&mut self, from: PegId, to: PegId) -> Option<Move> {
        let Some(disk) = self.board.shift(from, to) else {
            // Cannot happen with a verified board
            self.pending.clear();
            return None;
        };
        self.done += 1;
        Some(Move { disk, from, to })
    }

    /// Return the board in its current state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Stop the generator and return the board in its current state.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Convert the generator into an iterator over the moves, without board snapshots.
    pub fn moves(self) -> Moves {
        Moves(self)
    }

    /// Return the source peg.
    pub fn source(&self) -> PegId {
        self.source
    }

    /// Return the target peg.
    pub fn target(&self) -> PegId {
        self.target
    }

    /// Get the number of disks being moved.
    pub fn disks(&self) -> usize {
        self.disks
    }

    /// Get the total number of moves of the solution.
    pub fn total(&self) -> u128 {
        minimal_moves(self.disks)
    }

    /// Get the number of moves already performed.
    pub fn done(&self) -> u128 {
        self.done
    }

    /// Get the number of moves still to perform.
    pub fn remaining(&self) -> u128 {
        self.total() - self.done
    }

    fn remaining_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl Iterator for Hanoi {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.step()?;
        Some(self.board.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining_hint()
    }
}

impl FusedIterator for Hanoi {}

/// Iterator over the moves of a [`Hanoi`] generator.
#[derive(Debug)]
pub struct Moves(Hanoi);

impl Moves {
    /// Return the board in its current state.
    pub fn board(&self) -> &Board {
        self.0.board()
    }

    /// Stop the iteration and return the board in its current state.
    pub fn into_board(self) -> Board {
        self.0.into_board()
    }
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.0.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.remaining_hint()
    }
}

impl FusedIterator for Moves {}
