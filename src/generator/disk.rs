/*
disk.rs

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

//! Disk representation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

use super::board::BoardError;

/// A disk, identified by its size.
///
/// Sizes are positive, and they are pairwise distinct across a [`super::board::Board`].
/// Disks compare by size.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Disk(NonZeroU32);

impl Disk {
    /// Create a [`Disk`] object, or return None if the size is zero.
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size).map(Self)
    }

    /// Return the size of the disk.
    pub fn size(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Disk {
    type Error = BoardError;

    fn try_from(size: u32) -> Result<Self, Self::Error> {
        Disk::new(size).ok_or(BoardError::ZeroSize)
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Disk::new(0), None);
        assert_eq!(Disk::try_from(0u32), Err(BoardError::ZeroSize));
        assert_eq!(Disk::try_from(7u32).map(|d| d.size()), Ok(7));
    }

    #[test]
    fn disks_compare_by_size() {
        let small = Disk::new(10).unwrap();
        let large = Disk::new(30).unwrap();
        assert!(small < large);
        assert_eq!(small.to_string(), "10");
    }

    #[test]
    fn deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Disk>("0").is_err());
        assert_eq!(serde_json::from_str::<Disk>("4").unwrap().size(), 4);
    }
}
