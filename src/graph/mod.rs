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
//! Parsing of `.graph` snapshot files.
//!
//! A snapshot is a text file with two newline-terminated sections, each ending
//! at a blank line: the vertex section (`<id> - <label>`) followed by the edge
//! section (`<src> -> <dst>[ via <descriptor>]`).

mod edge;
mod labels;
mod matrix;

pub use edge::{EdgeLine, LinkKind};
pub use labels::VertexLabels;
pub use matrix::AdjacencyMatrix;

use std::{fmt, fs, path::Path, str::FromStr};

/// Errors raised while parsing a `.graph` snapshot.
#[derive(Debug, thiserror::Error)]
pub enum GraphFileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `<id> - <label>`, got `{text}`")]
    MalformedVertexLine { line: usize, text: String },
    #[error("line {line}: expected `<source> -> <destination>`, got `{text}`")]
    MalformedEdgeLine { line: usize, text: String },
    #[error("line {line}: vertex identifiers must be sequential, expected `N{line}`, got `{id}`")]
    NonSequentialVertex { line: usize, id: VertexId },
    #[error("line {line}: vertex `{id}` is not declared in the vertex section ({count} vertices)")]
    UndeclaredVertex { line: usize, id: VertexId, count: usize },
}

/// Identifier of a neighborhood, as written in the snapshot (`N1`, `N2`, ...).
///
/// The numeric part is 1-based and assigned sequentially over the vertex
/// section; [`VertexId::index`] gives the 0-based matrix index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    pub fn new(number: usize) -> Self {
        debug_assert!(number >= 1);
        Self(number)
    }

    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 0-based matrix index of this vertex.
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid vertex identifier `{0}`, expected `N<integer>`")]
pub struct ParseVertexIdError(String);

impl FromStr for VertexId {
    type Err = ParseVertexIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('N')
            .and_then(|num| num.parse::<usize>().ok())
            .filter(|&num| num >= 1)
            .map(Self)
            .ok_or_else(|| ParseVertexIdError(s.to_string()))
    }
}

/// A parsed `.graph` snapshot: the vertex labels and the adjacency matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSnapshot {
    labels: VertexLabels,
    matrix: AdjacencyMatrix,
}

impl GraphSnapshot {
    /// Read and parse a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphFileError> {
        let raw = fs::read_to_string(path)?;
        Self::parse(&raw.lines().collect::<Vec<_>>())
    }

    /// Parse a snapshot from its lines.
    pub fn parse(lines: &[&str]) -> Result<Self, GraphFileError> {
        let labels = VertexLabels::parse(lines)?;
        let matrix = AdjacencyMatrix::parse(lines, &labels)?;
        Ok(Self { labels, matrix })
    }

    pub fn labels(&self) -> &VertexLabels {
        &self.labels
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }
}
