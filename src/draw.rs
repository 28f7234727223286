/*
draw.rs

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

//! Draw a board as text.
//!
//! Each peg gets a column. Disks are piled up on their peg, centered, and drawn wider when they
//! are larger. The width depends on the rank of the disk on the board rather than on its size,
//! so that boards with large sizes (such as `[[120, 90, 60, 30], [], []]`) still fit in a
//! terminal.
//!
//! ```text
//!     |        |        |
//!    =|=       |        |
//!   ==|==      |        |
//!  ===|===     |        |
//! ---------------------------
//! ```

use log::{Level, log_enabled, trace};

use crate::generator::board::Board;
use crate::generator::disk::Disk;

const DISK_CHAR: char = '=';
const POLE_CHAR: char = '|';
const BASE_CHAR: char = '-';

/// Return the lines of the drawing, top line first.
///
/// The drawing has one line per disk plus one for the top of the poles, followed by the base
/// line. Trailing spaces are removed.
pub fn draw_board(board: &Board) -> Vec<String> {
    let disks: Vec<Disk> = board.disks();
    let count: usize = disks.len();

    // The largest disk is 2 * count + 1 characters wide, with a space on each side
    let column_width: usize = 2 * count + 3;

    let mut lines: Vec<String> = Vec::with_capacity(count + 2);
    for level in (0..=count).rev() {
        let mut line: String = String::with_capacity(3 * column_width);
        for peg in board.pegs() {
            let width: usize = match peg.disks().get(level) {
                Some(disk) => {
                    let rank: usize = disks.binary_search(disk).map_or(0, |i| i + 1);
                    2 * rank + 1
                }
                None => 1,
            };
            let margin: usize = (column_width - width) / 2;
            line.extend(std::iter::repeat_n(' ', margin));
            if width == 1 {
                line.push(POLE_CHAR);
            } else {
                // Pole in the middle of the disk
                let half: usize = width / 2;
                line.extend(std::iter::repeat_n(DISK_CHAR, half));
                line.push(POLE_CHAR);
                line.extend(std::iter::repeat_n(DISK_CHAR, half));
            }
            line.extend(std::iter::repeat_n(' ', margin));
        }
        lines.push(line.trim_end().to_string());
    }
    lines.push(std::iter::repeat_n(BASE_CHAR, 3 * column_width).collect());

    if log_enabled!(Level::Trace) {
        for line in &lines {
            trace!("{line}");
        }
    }
    lines
}

/// Return the drawing as a single string, lines separated by newlines.
pub fn draw_board_string(board: &Board) -> String {
    draw_board(board).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_disk() {
        let board = Board::new([vec![1], vec![], vec![]]).unwrap();
        assert_eq!(
            draw_board(&board),
            vec![
                "  |    |    |".to_string(),
                " =|=   |    |".to_string(),
                "---------------".to_string(),
            ]
        );
    }

    #[test]
    fn widths_follow_rank() {
        let board = Board::new([vec![120, 90], vec![60], vec![30]]).unwrap();
        let lines = draw_board(&board);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "     |          |          |");
        assert_eq!(lines[2], "     |          |          |");
        assert_eq!(lines[3], "  ===|===       |          |");
        assert_eq!(lines[4], " ====|====    ==|==       =|=");
        assert_eq!(lines[5], "-".repeat(33));
    }

    #[test]
    fn tower_string() {
        let board = Board::tower(3, 1).unwrap();
        let expected = [
            "    |        |        |",
            "   =|=       |        |",
            "  ==|==      |        |",
            " ===|===     |        |",
            "---------------------------",
        ]
        .join("\n");
        assert_eq!(draw_board_string(&board), expected);
    }

    #[test]
    fn empty_board() {
        let board = Board::default();
        assert_eq!(draw_board(&board), vec![" |  |  |", "---------"]);
    }
}
