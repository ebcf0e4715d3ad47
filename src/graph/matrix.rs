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
//! Dense adjacency matrix over the vertices of one snapshot.

use super::{EdgeLine, GraphFileError, LinkKind, VertexId, VertexLabels};

/// Square matrix of link classifications, indexed by [`VertexId::index`] on
/// both axes. Cells hold 0 (no link), 1 (direct/indirect) or 2 (remote).
///
/// Built once per snapshot and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Parse the edge section of a snapshot.
    ///
    /// The section starts one line after the blank line terminating the
    /// vertex section and ends at the next blank line. Edges referencing a
    /// vertex that was never declared are fatal.
    pub fn parse(lines: &[&str], labels: &VertexLabels) -> Result<Self, GraphFileError> {
        let mut matrix = Self::new(labels.declared());

        let vertex_section_end = lines
            .iter()
            .position(|line| line.is_empty())
            .unwrap_or(lines.len());

        for (i, line) in lines.iter().enumerate().skip(vertex_section_end + 1) {
            if line.is_empty() {
                break;
            }

            let edge = EdgeLine::parse(line, i + 1)?;
            for id in [edge.source, edge.target] {
                if id.index() >= matrix.n {
                    return Err(GraphFileError::UndeclaredVertex {
                        line: i + 1,
                        id,
                        count: matrix.n,
                    });
                }
            }
            matrix.set(edge.source, edge.target, edge.kind);
        }

        Ok(matrix)
    }

    /// Number of vertices, i.e. the matrix is `vertex_count x vertex_count`.
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    /// Absolute assignment: a pair appearing more than once keeps the
    /// classification seen last.
    pub fn set(&mut self, src: VertexId, dst: VertexId, kind: LinkKind) {
        self.cells[src.index() * self.n + dst.index()] = kind.weight();
    }

    /// Raw cell value at 0-based indices.
    pub fn cell(&self, i: usize, j: usize) -> u8 {
        self.cells[i * self.n + j]
    }

    pub fn get(&self, src: VertexId, dst: VertexId) -> Option<LinkKind> {
        match self.cell(src.index(), dst.index()) {
            0 => None,
            1 => Some(LinkKind::Direct),
            _ => Some(LinkKind::Remote),
        }
    }

    /// Weighted link density: the sum of all cell values (remote links count
    /// double) over the full `n^2` denominator. `None` for an empty matrix.
    pub fn density(&self) -> Option<f64> {
        if self.n == 0 {
            return None;
        }
        let weighted: u64 = self.cells.iter().map(|&c| c as u64).sum();
        Some(weighted as f64 / (self.n * self.n) as f64)
    }

    /// Degree of one vertex: its outgoing plus incoming links of any kind.
    pub fn degree(&self, v: VertexId) -> usize {
        let i = v.index();
        (0..self.n)
            .map(|j| (self.cell(i, j) > 0) as usize + (self.cell(j, i) > 0) as usize)
            .sum()
    }

    /// Degrees of all vertices, in identifier order.
    pub fn degrees(&self) -> Vec<usize> {
        (0..self.n)
            .map(|i| self.degree(VertexId::from_index(i)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SNAPSHOT: [&str; 8] = [
        "N1 - 1.2.3.0/24",
        "N2 - 5.6.7.0/24",
        "N3 - 9.9.9.0/24",
        "",
        "N1 -> N2",
        "N2 -> N3 via 10.0.0.0/24",
        "N1 -> N3 via 10.0.0.1 (miscellaneous)",
        "",
    ];

    fn parse(lines: &[&str]) -> Result<AdjacencyMatrix, GraphFileError> {
        let labels = VertexLabels::parse(lines).unwrap();
        AdjacencyMatrix::parse(lines, &labels)
    }

    #[test]
    fn classified_cells() {
        let matrix = parse(&SNAPSHOT).unwrap();

        assert_eq!(matrix.vertex_count(), 3);
        assert_eq!(matrix.cell(0, 1), 1);
        assert_eq!(matrix.cell(1, 2), 1);
        assert_eq!(matrix.cell(0, 2), 2);
        for (i, j) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(matrix.cell(i, j), 0, "cell ({i}, {j}) should be empty");
        }
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse(&SNAPSHOT).unwrap(), parse(&SNAPSHOT).unwrap());
    }

    #[test]
    fn repeated_pair_takes_last_classification() {
        let lines = [
            "N1 - a",
            "N2 - b",
            "",
            "N1 -> N2 via 10.0.0.0/24",
            "N1 -> N2 via anonymous hop",
        ];
        let matrix = parse(&lines).unwrap();
        assert_eq!(matrix.get(VertexId::new(1), VertexId::new(2)), Some(LinkKind::Remote));
    }

    #[test]
    fn edge_scan_starts_after_blank_line() {
        // the duplicate label shrinks the mapping to 2 entries, yet the edge
        // section still starts right after the blank line at position 3, and
        // the matrix still spans all 3 declared identifiers
        let lines = ["N1 - a", "N2 - b", "N3 - b", "", "N1 -> N2", "N1 -> N3", ""];
        let labels = VertexLabels::parse(&lines).unwrap();
        assert_eq!(labels.len(), 2);

        let matrix = AdjacencyMatrix::parse(&lines, &labels).unwrap();
        assert_eq!(matrix.vertex_count(), 3);
        assert_eq!(matrix.get(VertexId::new(1), VertexId::new(2)), Some(LinkKind::Direct));
        assert_eq!(matrix.get(VertexId::new(1), VertexId::new(3)), Some(LinkKind::Direct));
    }

    #[test]
    fn undeclared_vertex_is_fatal() {
        let lines = ["N1 - a", "N2 - b", "", "N1 -> N7"];
        assert!(matches!(
            parse(&lines),
            Err(GraphFileError::UndeclaredVertex { line: 4, count: 2, .. })
        ));
    }

    #[test]
    fn empty_matrix_has_no_density() {
        assert_eq!(AdjacencyMatrix::new(0).density(), None);
    }

    #[test]
    fn density_weighs_remote_links_double() {
        let mut matrix = AdjacencyMatrix::new(2);
        matrix.set(VertexId::new(1), VertexId::new(2), LinkKind::Direct);
        matrix.set(VertexId::new(2), VertexId::new(1), LinkKind::Remote);
        assert_eq!(matrix.density(), Some(0.75));
    }

    #[test]
    fn degrees_count_both_directions() {
        let matrix = parse(&SNAPSHOT).unwrap();
        // N1: out {N2, N3}; N2: out {N3}, in {N1}; N3: in {N1, N2}
        assert_eq!(matrix.degrees(), vec![2, 2, 2]);
    }
}
