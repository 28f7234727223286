/*
lib.rs

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

//! Optimal solution of the Towers of Hanoi puzzle.
//!
//! * [`generator`] holds the board representation and the lazy generator of the board states.
//! * [`draw`] draws a board as text.
//! * [`record`] and [`saver`] keep a record of a run and store it in a JSON file.

pub mod draw;
pub mod generator;
pub mod record;
pub mod saver;
