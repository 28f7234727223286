/*
generator.rs

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

//! Board representation and generation of the optimal solution.
//!
//! A [`board::Board`] groups three [`peg::Peg`] objects, identified by [`peg::PegId`].
//! Each peg is a stack of [`disk::Disk`] objects, the largest at the bottom.
//! A board is built from the disk sizes with [`board::Board::new`], from a
//! [`presets::Preset`], or with [`board::Board::tower`].
//!
//! To solve the puzzle, create a [`solver::Hanoi`] generator with [`solver::generate`].
//! The generator is an iterator over the successive boards, one [`moves::Move`] apart:
//!
//! ```
//! use hanoi::generator::board::Board;
//! use hanoi::generator::peg::PegId;
//! use hanoi::generator::solver::generate;
//!
//! let board = Board::new([vec![3, 2, 1], vec![], vec![]]).unwrap();
//! let states: Vec<String> = generate(board, PegId::Left, PegId::Right, 3)
//!     .unwrap()
//!     .map(|b| b.to_string())
//!     .collect();
//! assert_eq!(states.len(), 7);
//! assert_eq!(states[0], "[[3, 2], [], [1]]");
//! assert_eq!(states[6], "[[], [], [3, 2, 1]]");
//! ```

pub mod board;
pub mod disk;
pub mod moves;
pub mod peg;
pub mod presets;
pub mod solver;
