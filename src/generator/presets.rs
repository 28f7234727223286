/*
presets.rs

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

//! Built-in starting configurations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use super::board::{Board, BoardError};

/// Starting configuration: a tower of disks on the left peg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Preset name.
    pub name: String,

    /// Number of disks in the tower.
    pub disks: usize,

    /// Size of the smallest disk. The other sizes are multiples of this value.
    pub base_width: u32,

    /// Pause between two displayed boards.
    pub interval: Duration,
}

impl Preset {
    /// Build the starting board for the preset.
    pub fn board(&self) -> Result<Board, BoardError> {
        Board::tower(self.disks, self.base_width)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} disks, base width {}, {}s interval)",
            self.name,
            self.disks,
            self.base_width,
            self.interval.as_secs_f32()
        )
    }
}

/// Return the list of presets, indexed by name.
pub fn preset_map() -> HashMap<String, Preset> {
    let mut presets: HashMap<String, Preset> = HashMap::new();

    // For developers: add your new preset to the list.
    let p: Preset = Preset {
        name: String::from("classic"),
        disks: 3,
        base_width: 1,
        interval: Duration::ZERO,
    };
    presets.insert(p.name.clone(), p);

    let p: Preset = Preset {
        name: String::from("small"),
        disks: 4,
        base_width: 30,
        interval: Duration::from_millis(500),
    };
    presets.insert(p.name.clone(), p);

    let p: Preset = Preset {
        name: String::from("large"),
        disks: 8,
        base_width: 20,
        interval: Duration::from_millis(200),
    };
    presets.insert(p.name.clone(), p);

    presets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::peg::PegId;

    #[test]
    fn presets_build_towers() {
        let presets = preset_map();
        assert_eq!(presets.len(), 3);
        for (name, preset) in &presets {
            assert_eq!(name, &preset.name);
            let board = preset.board().unwrap();
            assert_eq!(board.disk_count(), preset.disks);
            assert!(board.is_complete_on(PegId::Left));
        }
    }

    #[test]
    fn small_preset() {
        let presets = preset_map();
        let preset = &presets["small"];
        let board = preset.board().unwrap();
        assert_eq!(board.peg(PegId::Left).sizes(), vec![120, 90, 60, 30]);
        assert_eq!(
            preset.to_string(),
            "small (4 disks, base width 30, 0.5s interval)"
        );
    }
}
