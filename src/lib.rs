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
//! Library for parsing and summarizing traceroute-inferred Internet topology snapshots.

pub mod comparison;
pub mod dataset;
pub mod graph;
pub mod stats;
pub mod targets;
pub mod util;

pub mod prelude {
    pub use super::{
        comparison::{compare, ComparisonReport},
        dataset::{AsType, DatasetEntry},
        graph::{AdjacencyMatrix, GraphSnapshot, LinkKind, VertexId, VertexLabels},
        stats::CdfPoint,
    };
}
