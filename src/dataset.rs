// TOPOSTAT: Comparison and Statistics of Traceroute-Inferred Internet Topology Snapshots
// Copyright (C) 2025 The topostat authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//! Dataset description files: the list of measured ASes with their type and
//! snapshot date.

use std::{
    fs,
    path::{Path, PathBuf},
};

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DATE_RE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `<AS>:<type>:<date>`, got `{text}`")]
    MalformedLine { line: usize, text: String },
    #[error("line {line}: unknown AS type `{text}`")]
    UnknownAsType { line: usize, text: String },
    #[error("line {line}: expected a `YYYY-MM-DD` snapshot date, got `{text}`")]
    MalformedDate { line: usize, text: String },
}

/// Classification of an AS in the dataset description.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum_macros::EnumString,
)]
pub enum AsType {
    Stub,
    Transit,
    #[serde(rename = "Tier-1")]
    #[strum(serialize = "Tier-1")]
    Tier1,
}

/// One AS of a dataset description: a `<name>:<type>:<date>` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetEntry {
    pub name: String,
    pub as_type: AsType,
    pub date: String,
}

impl DatasetEntry {
    /// Location of this AS's snapshot below `root`:
    /// `<root>/<AS>/<year>/<date>/<AS>_<date>.graph`.
    pub fn graph_path(&self, root: impl AsRef<Path>) -> PathBuf {
        let year = &self.date[..4];
        root.as_ref()
            .join(&self.name)
            .join(year)
            .join(&self.date)
            .join(format!("{}_{}.graph", self.name, self.date))
    }
}

/// Parse a dataset description file, one `<AS>:<type>:<date>` per line, and
/// return its entries sorted by AS name. Blank lines are skipped; anything
/// else that does not parse is fatal.
pub fn parse(path: impl AsRef<Path>) -> Result<Vec<DatasetEntry>, DatasetError> {
    let raw = fs::read_to_string(path)?;

    let mut entries = raw
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| {
            let (name, as_type, date) =
                line.split(':')
                    .collect_tuple()
                    .ok_or_else(|| DatasetError::MalformedLine {
                        line: i + 1,
                        text: line.to_string(),
                    })?;
            let as_type = as_type
                .parse()
                .map_err(|_| DatasetError::UnknownAsType {
                    line: i + 1,
                    text: as_type.to_string(),
                })?;
            if !DATE_RE.is_match(date) {
                return Err(DatasetError::MalformedDate {
                    line: i + 1,
                    text: date.to_string(),
                });
            }
            Ok(DatasetEntry {
                name: name.to_string(),
                as_type,
                date: date.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
