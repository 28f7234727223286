/*
peg.rs

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

//! Pegs and peg identifiers.
//!
//! A [`Peg`] is a stack of disks: the last disk of the list is the top disk, the only one that
//! can be removed.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::board::BoardError;
use super::disk::Disk;

/// Peg identifier.
///
/// The discriminant is the peg index on the board (0, 1, and 2).
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    Ord,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(usize)]
#[serde(rename_all = "lowercase")]
pub enum PegId {
    #[default]
    #[value(alias = "0")]
    Left,
    #[value(alias = "1")]
    Middle,
    #[value(alias = "2")]
    Right,
}

impl PegId {
    /// The three pegs, from left to right.
    pub const ALL: [PegId; 3] = [PegId::Left, PegId::Middle, PegId::Right];

    /// Return the index of the peg on the board.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Return the peg that is neither `a` nor `b`.
    ///
    /// When `a` and `b` are the same peg, the first of the two other pegs is returned.
    pub fn spare(a: PegId, b: PegId) -> PegId {
        PegId::ALL
            .into_iter()
            .find(|&p| p != a && p != b)
            .unwrap_or(a)
    }
}

impl TryFrom<usize> for PegId {
    type Error = BoardError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        PegId::from_repr(index).ok_or(BoardError::InvalidPeg(index))
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PegId::Left => write!(f, "left"),
            PegId::Middle => write!(f, "middle"),
            PegId::Right => write!(f, "right"),
        }
    }
}

/// Stack of disks.
#[derive(Serialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Peg {
    /// Disks from bottom to top.
    disks: Vec<Disk>,
}

impl Peg {
    /// Create a [`Peg`] object from a list of disks, bottom disk first.
    ///
    /// The order is not verified here. See [`Peg::is_ordered`].
    pub fn from_disks(disks: Vec<Disk>) -> Self {
        Self { disks }
    }

    /// Return the disks, bottom disk first.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Return the disk sizes, bottom disk first.
    pub fn sizes(&self) -> Vec<u32> {
        self.disks.iter().map(Disk::size).collect()
    }

    /// Return the top disk, or None if the peg is empty.
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Get the number of disks on the peg.
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Whether the peg has no disks.
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Whether the disk sizes are strictly decreasing from bottom to top.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[0] > w[1])
    }

    /// Whether the given disk can be put on top of the peg.
    pub fn accepts(&self, disk: Disk) -> bool {
        match self.top() {
            Some(top) => top > disk,
            None => true,
        }
    }

    pub(crate) fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    pub(crate) fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, disk) in self.disks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{disk}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg(sizes: &[u32]) -> Peg {
        Peg::from_disks(sizes.iter().map(|&s| Disk::new(s).unwrap()).collect())
    }

    #[test]
    fn spare_peg() {
        assert_eq!(PegId::spare(PegId::Left, PegId::Right), PegId::Middle);
        assert_eq!(PegId::spare(PegId::Right, PegId::Left), PegId::Middle);
        assert_eq!(PegId::spare(PegId::Left, PegId::Middle), PegId::Right);
        assert_eq!(PegId::spare(PegId::Middle, PegId::Right), PegId::Left);
    }

    #[test]
    fn peg_from_index() {
        assert_eq!(PegId::try_from(0usize), Ok(PegId::Left));
        assert_eq!(PegId::try_from(2usize), Ok(PegId::Right));
        assert_eq!(PegId::try_from(3usize), Err(BoardError::InvalidPeg(3)));
        assert_eq!(PegId::Middle.index(), 1);
    }

    #[test]
    fn peg_names_parse_from_command_line() {
        assert_eq!(PegId::from_str("middle", false), Ok(PegId::Middle));
        assert_eq!(PegId::from_str("2", false), Ok(PegId::Right));
        assert!(PegId::from_str("3", false).is_err());
    }

    #[test]
    fn ordering() {
        assert!(peg(&[3, 2, 1]).is_ordered());
        assert!(peg(&[]).is_ordered());
        assert!(!peg(&[1, 2]).is_ordered());
        assert!(!peg(&[2, 2]).is_ordered());
    }

    #[test]
    fn top_and_accepts() {
        let p = peg(&[30, 20]);
        assert_eq!(p.top().map(|d| d.size()), Some(20));
        assert!(p.accepts(Disk::new(10).unwrap()));
        assert!(!p.accepts(Disk::new(25).unwrap()));
        assert!(peg(&[]).accepts(Disk::new(99).unwrap()));
    }

    #[test]
    fn display() {
        assert_eq!(peg(&[3, 2]).to_string(), "[3, 2]");
        assert_eq!(peg(&[]).to_string(), "[]");
        assert_eq!(PegId::Middle.to_string(), "middle");
    }
}
