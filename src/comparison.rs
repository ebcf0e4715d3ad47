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
//! Similarity metrics between two snapshots of the same network.

use std::{collections::HashSet, fmt};

use serde::Serialize;

use crate::graph::{GraphSnapshot, LinkKind, VertexId};

/// Outcome of comparing two snapshots.
///
/// Every ratio is a percentage and `None` whenever its denominator is zero
/// (rendered as `n/a`).
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub first_vertices: usize,
    pub second_vertices: usize,
    pub common_vertices: usize,
    /// Share of the first snapshot's vertices that appear in the second.
    pub vertex_overlap: Option<f64>,
    pub first_density: Option<f64>,
    pub second_density: Option<f64>,
    /// Direct/indirect links of the first snapshot that also exist in the second.
    pub common_edges: usize,
    /// Direct/indirect links of the first snapshot between common vertices.
    pub total_edges: usize,
    /// Links of any kind of the first snapshot between common vertices.
    pub true_total_edges: usize,
    /// All links of the first snapshot, common or not.
    pub total_edges_first_graph: usize,
    pub common_edge_ratio: Option<f64>,
    pub true_common_edge_ratio: Option<f64>,
    pub first_graph_edge_ratio: Option<f64>,
}

fn percent(numerator: usize, denominator: usize) -> Option<f64> {
    (denominator > 0).then(|| numerator as f64 / denominator as f64 * 100.0)
}

/// Compare two snapshots: vertex overlap, per-snapshot density, and the
/// overlap of the first snapshot's direct/indirect links within the second.
pub fn compare(first: &GraphSnapshot, second: &GraphSnapshot) -> ComparisonReport {
    let common: Vec<&str> = first
        .labels()
        .iter()
        .map(|(label, _)| label)
        .filter(|label| second.labels().contains(label))
        .collect();

    let reverse = first.labels().reverse();

    // deduplicates on the formatted endpoint pairs
    let mut common_edges: HashSet<String> = HashSet::new();
    let mut total_edges = 0;
    let mut true_total_edges = 0;
    let mut total_edges_first_graph = 0;

    for label in &common {
        let id1 = first.labels().get(label).unwrap();
        let id2 = second.labels().get(label).unwrap();

        for j in 0..first.matrix().vertex_count() {
            let target = VertexId::from_index(j);
            let link = first.matrix().get(id1, target);

            if link.is_some() {
                total_edges_first_graph += 1;
            }

            // a dropped duplicate leaves its identifier without a label; such
            // a target cannot be a common vertex
            let other_label = match reverse.get(&target) {
                Some(other_label) if second.labels().contains(other_label) => other_label,
                _ => continue,
            };

            match link {
                Some(LinkKind::Direct) => {
                    total_edges += 1;
                    true_total_edges += 1;

                    let id4 = second.labels().get(other_label).unwrap();
                    if second.matrix().get(id2, id4) == Some(LinkKind::Direct) {
                        common_edges.insert(format!("{id1} -> {target} <=> {id2} -> {id4}"));
                    }
                }
                Some(LinkKind::Remote) => {
                    true_total_edges += 1;
                }
                None => {}
            }
        }
    }

    ComparisonReport {
        first_vertices: first.labels().len(),
        second_vertices: second.labels().len(),
        common_vertices: common.len(),
        vertex_overlap: percent(common.len(), first.labels().len()),
        first_density: first.matrix().density(),
        second_density: second.matrix().density(),
        common_edges: common_edges.len(),
        total_edges,
        true_total_edges,
        total_edges_first_graph,
        common_edge_ratio: percent(common_edges.len(), total_edges),
        true_common_edge_ratio: percent(common_edges.len(), true_total_edges),
        first_graph_edge_ratio: percent(common_edges.len(), total_edges_first_graph),
    }
}

fn fmt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}%"),
        None => "n/a".to_string(),
    }
}

fn fmt_density(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => "n/a".to_string(),
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Common vertices: {} ({} / {})",
            fmt_percent(self.vertex_overlap),
            self.common_vertices,
            self.first_vertices
        )?;
        writeln!(
            f,
            "Density: {} vs. {}",
            fmt_density(self.first_density),
            fmt_density(self.second_density)
        )?;
        writeln!(
            f,
            "Total of (in)direct links that can exist in both graphs:  {}",
            self.total_edges
        )?;
        writeln!(
            f,
            "Total of (in)direct links that exist in both graphs:      {}  ({})",
            self.common_edges,
            fmt_percent(self.common_edge_ratio)
        )?;
        writeln!(
            f,
            "Total of links (any kind) that can exist in both graphs:  {}  ({})",
            self.true_total_edges,
            fmt_percent(self.true_common_edge_ratio)
        )?;
        write!(
            f,
            "Total of edges in the first graph:                        {}  ({})",
            self.total_edges_first_graph,
            fmt_percent(self.first_graph_edge_ratio)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::GraphSnapshot;

    fn snapshot(lines: &[&str]) -> GraphSnapshot {
        GraphSnapshot::parse(lines).unwrap()
    }

    #[test]
    fn self_comparison_is_total_overlap() {
        let g = snapshot(&[
            "N1 - a",
            "N2 - b",
            "N3 - c",
            "",
            "N1 -> N2",
            "N2 -> N3 via 10.0.0.0/24",
            "N1 -> N3 via 10.0.0.1 (miscellaneous)",
            "",
        ]);

        let report = compare(&g, &g);
        assert_eq!(report.vertex_overlap, Some(100.0));
        assert_eq!(report.common_edges, 2);
        assert_eq!(report.common_edge_ratio, Some(100.0));
        assert_eq!(report.true_common_edge_ratio, Some(2.0 / 3.0 * 100.0));
        assert_eq!(report.first_graph_edge_ratio, Some(2.0 / 3.0 * 100.0));
    }

    #[test]
    fn partial_overlap() {
        let g1 = snapshot(&[
            "N1 - a",
            "N2 - b",
            "N3 - c",
            "",
            "N1 -> N2",
            "N1 -> N3 via anonymous hop",
            "",
        ]);
        let g2 = snapshot(&["N1 - b", "N2 - a", "", "N2 -> N1", ""]);

        let report = compare(&g1, &g2);
        assert_eq!(report.common_vertices, 2);
        assert_eq!(report.vertex_overlap, Some(2.0 / 3.0 * 100.0));
        // a's direct link to b is the only one between common vertices, and
        // it exists in the second snapshot as well
        assert_eq!(report.total_edges, 1);
        assert_eq!(report.true_total_edges, 1);
        assert_eq!(report.common_edges, 1);
        // a's remote link to c still counts into the first snapshot's total
        assert_eq!(report.total_edges_first_graph, 2);
        assert_eq!(report.common_edge_ratio, Some(100.0));
        assert_eq!(report.first_graph_edge_ratio, Some(50.0));
    }

    #[test]
    fn disjoint_snapshots_have_guarded_ratios() {
        let g1 = snapshot(&["N1 - a", "", "", ""]);
        let g2 = snapshot(&["N1 - z", "", "", ""]);

        let report = compare(&g1, &g2);
        assert_eq!(report.common_vertices, 0);
        assert_eq!(report.vertex_overlap, Some(0.0));
        assert_eq!(report.common_edge_ratio, None);
        assert_eq!(report.true_common_edge_ratio, None);
        assert_eq!(report.first_graph_edge_ratio, None);
    }

    #[test]
    fn empty_snapshots_do_not_divide_by_zero() {
        let empty = snapshot(&[""]);
        let report = compare(&empty, &empty);
        assert_eq!(report.vertex_overlap, None);
        assert_eq!(report.first_density, None);
        assert_eq!(report.second_density, None);
        assert!(format!("{report}").contains("n/a"));
    }

    #[test]
    fn remote_only_overlap_counts_no_common_edges() {
        let g1 = snapshot(&["N1 - a", "N2 - b", "", "N1 -> N2 via anonymous hop", ""]);
        let g2 = snapshot(&["N1 - a", "N2 - b", "", "N1 -> N2", ""]);

        let report = compare(&g1, &g2);
        assert_eq!(report.total_edges, 0);
        assert_eq!(report.true_total_edges, 1);
        assert_eq!(report.common_edges, 0);
        assert_eq!(report.common_edge_ratio, None);
        assert_eq!(report.true_common_edge_ratio, Some(0.0));
    }
}
