/*
solution.rs

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

//! Save and restore the record of a solved puzzle.
//!
//! The saved object is a serialization of the [`SolutionRecord`] object in JSON format by
//! using [`serde`]. A record read back from disk is replayed before it is returned.

use log::{debug, warn};
use std::error::Error as StdError;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::record::SolutionRecord;

/// Error raised when a saved record does not describe a minimal solution.
#[derive(Error, Debug)]
pub enum SaveError {
    /// The moves are illegal, do not reach the final board, or are not minimal.
    #[error("{path:?} does not hold a solution of {disks} disks")]
    Inconsistent { path: PathBuf, disks: usize },
}

/// Object to save and restore a solution record.
pub struct SaverSolution {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverSolution {
    /// Create a [`SaverSolution`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the record must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("solution.json");
        debug!("Solution file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Return the path to the save file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`SolutionRecord`] object from the save file.
    ///
    /// Return the [`SolutionRecord`] object or None if the save file does not exist.
    ///
    /// # Errors
    ///
    /// The method returns [`SaveError::Inconsistent`] if the moves in the file do not replay
    /// from the initial board to the final board in the minimal number of moves.
    pub fn get_solution(&self) -> Result<Option<SolutionRecord>, Box<dyn StdError>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let record: SolutionRecord = serde_json::from_reader(reader)?;
        if !record.is_consistent() {
            warn!("The solution in {:?} has been altered", self.save_file);
            return Err(Box::new(SaveError::Inconsistent {
                path: self.save_file.clone(),
                disks: record.disks,
            }));
        }
        Ok(Some(record))
    }

    /// Save the provided [`SolutionRecord`] object.
    pub fn save_solution(&self, record: &SolutionRecord) -> Result<(), Box<dyn StdError>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, record)?;
        writer.flush()?;
        debug!("{} moves saved", record.moves.len());
        Ok(())
    }

    /// Delete the save file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
