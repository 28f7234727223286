/*
board.rs

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

//! Board with its three pegs.
//!
//! A [`Board`] can only be built from a valid arrangement: positive sizes, no duplicated disks,
//! and no disk resting on a smaller one.
//! The JSON representation is an array of three arrays of disk sizes, bottom disk first, such
//! as `[[3,2,1],[],[]]`.
//! Deserializing a board runs the same verifications as [`Board::new`].

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use super::disk::Disk;
use super::moves::Move;
use super::peg::{Peg, PegId};

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A disk with a size of zero.
    #[error("disk sizes must be positive")]
    ZeroSize,

    /// A disk size that does not fit in 32 bits.
    #[error("disk size is too large")]
    SizeOverflow,

    /// The same size is used by two disks.
    #[error("disk {0} appears more than once")]
    DuplicateDisk(u32),

    /// A disk rests on a smaller disk.
    #[error("disks on the {0} peg are not in decreasing order")]
    Unordered(PegId),

    /// Peg index not in 0, 1, or 2.
    #[error("peg index {0} is out of range (expected 0, 1, or 2)")]
    InvalidPeg(usize),

    /// No disk to move.
    #[error("the {0} peg is empty")]
    EmptyPeg(PegId),

    /// The source and destination pegs are the same.
    #[error("cannot move a disk from the {0} peg onto itself")]
    SamePeg(PegId),

    /// The moved disk is larger than the top disk of the destination peg.
    #[error("cannot put disk {disk} on top of disk {top} ({to} peg)")]
    IllegalMove { disk: u32, top: u32, to: PegId },

    /// The move does not refer to the disk at the top of the source peg.
    #[error("the top disk of the {peg} peg is {actual}, not {expected}")]
    DiskMismatch {
        peg: PegId,
        expected: u32,
        actual: u32,
    },
}

/// Three pegs and their disks.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "[Vec<u32>; 3]", into = "[Vec<u32>; 3]")]
pub struct Board {
    pegs: [Peg; 3],
}

impl Board {
    /// Create a [`Board`] object from the disk sizes of each peg, bottom disk first.
    ///
    /// # Errors
    ///
    /// The method returns an error if a size is zero, if two disks have the same size, or if a
    /// disk rests on a smaller disk.
    pub fn new(pegs: [Vec<u32>; 3]) -> Result<Self, BoardError> {
        let mut seen: HashSet<Disk> = HashSet::new();
        let mut board: Board = Board::default();

        for (id, sizes) in PegId::ALL.into_iter().zip(pegs) {
            let mut disks: Vec<Disk> = Vec::with_capacity(sizes.len());
            for size in sizes {
                let disk: Disk = Disk::try_from(size)?;
                if !seen.insert(disk) {
                    return Err(BoardError::DuplicateDisk(size));
                }
                disks.push(disk);
            }
            let peg: Peg = Peg::from_disks(disks);
            if !peg.is_ordered() {
                return Err(BoardError::Unordered(id));
            }
            board.pegs[id.index()] = peg;
        }
        Ok(board)
    }

    /// Create a board with all the disks on the left peg.
    ///
    /// Disk sizes are multiples of `base_width`: the bottom disk is `disks * base_width` wide,
    /// and the top disk is `base_width` wide.
    pub fn tower(disks: usize, base_width: u32) -> Result<Self, BoardError> {
        let mut sizes: Vec<u32> = Vec::with_capacity(disks);
        for i in (1..=disks).rev() {
            let size: u32 = u32::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(base_width))
                .ok_or(BoardError::SizeOverflow)?;
            sizes.push(size);
        }
        debug!("Tower of {disks} disks with a base width of {base_width}");
        Board::new([sizes, Vec::new(), Vec::new()])
    }

    /// Return the three pegs, from left to right.
    pub fn pegs(&self) -> &[Peg; 3] {
        &self.pegs
    }

    /// Return the given peg.
    pub fn peg(&self, id: PegId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// Return the top disk of the given peg.
    pub fn top(&self, id: PegId) -> Option<Disk> {
        self.peg(id).top()
    }

    /// Get the number of disks on the board.
    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Peg::len).sum()
    }

    /// Return all the disks of the board, sorted by size.
    pub fn disks(&self) -> Vec<Disk> {
        let mut disks: Vec<Disk> = self
            .pegs
            .iter()
            .flat_map(|p| p.disks().iter().copied())
            .collect();
        disks.sort_unstable();
        disks
    }

    /// Whether the board is a valid arrangement: every peg ordered and no duplicated disk.
    pub fn is_valid(&self) -> bool {
        let disks: Vec<Disk> = self.disks();
        self.pegs.iter().all(Peg::is_ordered) && disks.windows(2).all(|w| w[0] != w[1])
    }

    /// Whether all the disks are on the given peg.
    pub fn is_complete_on(&self, id: PegId) -> bool {
        self.peg(id).len() == self.disk_count()
    }

    /// Apply a move after verifying that it is legal.
    ///
    /// # Errors
    ///
    /// The method returns an error, and leaves the board unchanged, if the source peg is empty,
    /// if the disk of the move is not at the top of the source peg, or if the disk would rest
    /// on a smaller disk.
    pub fn apply(&mut self, mv: Move) -> Result<(), BoardError> {
        if mv.from == mv.to {
            return Err(BoardError::SamePeg(mv.from));
        }
        let disk: Disk = self.top(mv.from).ok_or(BoardError::EmptyPeg(mv.from))?;
        if disk != mv.disk {
            return Err(BoardError::DiskMismatch {
                peg: mv.from,
                expected: mv.disk.size(),
                actual: disk.size(),
            });
        }
        if let Some(top) = self.top(mv.to) {
            if top < disk {
                return Err(BoardError::IllegalMove {
                    disk: disk.size(),
                    top: top.size(),
                    to: mv.to,
                });
            }
        }
        self.shift(mv.from, mv.to);
        Ok(())
    }

    /// Move the top disk of `from` onto `to` without verifying the destination.
    ///
    /// Return the moved disk, or None if `from` is empty.
    pub(crate) fn shift(&mut self, from: PegId, to: PegId) -> Option<Disk> {
        let disk: Disk = self.pegs[from.index()].pop()?;
        debug_assert!(self.peg(to).accepts(disk), "disk {disk} put on a smaller disk");
        self.pegs[to.index()].push(disk);
        Some(disk)
    }
}

impl TryFrom<[Vec<u32>; 3]> for Board {
    type Error = BoardError;

    fn try_from(pegs: [Vec<u32>; 3]) -> Result<Self, Self::Error> {
        Board::new(pegs)
    }
}

impl From<Board> for [Vec<u32>; 3] {
    fn from(board: Board) -> Self {
        board.pegs.map(|p| p.sizes())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.pegs[0], self.pegs[1], self.pegs[2])
    }
}
