/*
moves.rs

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

//! Move of a disk between two pegs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::disk::Disk;
use super::peg::PegId;

/// Move of the top disk of a peg onto another peg.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Moved disk.
    pub disk: Disk,

    /// Peg the disk is taken from.
    pub from: PegId,

    /// Peg the disk is put on.
    pub to: PegId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_json() {
        let mv = Move {
            disk: Disk::new(2).unwrap(),
            from: PegId::Left,
            to: PegId::Middle,
        };
        assert_eq!(mv.to_string(), "disk 2 from left to middle");
        assert_eq!(
            serde_json::to_string(&mv).unwrap(),
            r#"{"disk":2,"from":"left","to":"middle"}"#
        );
    }
}
