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
//! Vertex-section parsing: maps neighborhood labels to their identifiers.

use std::collections::{hash_map::Entry, HashMap};

use lazy_static::lazy_static;
use regex::Regex;

use super::{GraphFileError, VertexId};

lazy_static! {
    static ref VERTEX_RE: Regex = Regex::new(r"^(?P<id>N[1-9][0-9]*) - (?P<label>.*)$").unwrap();
}

/// Marker set on vertices that were inferred but never probed directly. The
/// parenthesized annotation carrying it is not part of the label.
const NOT_AMONG_TARGETS: &str = "not among targets";

/// Label -> identifier mapping built from the vertex section of one snapshot.
///
/// Identifiers are assigned externally in the file as the dense sequence
/// `N1..NN`. A duplicate label is a data-quality defect: it is reported and
/// dropped, the first occurrence wins. Its identifier stays declared, so the
/// mapping can be smaller than the number of declared vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexLabels {
    by_label: HashMap<String, VertexId>,
    declared: usize,
}

impl VertexLabels {
    /// Parse the vertex section, i.e. everything up to the first blank line.
    pub fn parse(lines: &[&str]) -> Result<Self, GraphFileError> {
        let mut by_label = HashMap::new();
        let mut declared = 0;

        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                break;
            }

            let Some(m) = VERTEX_RE.captures(line) else {
                return Err(GraphFileError::MalformedVertexLine {
                    line: i + 1,
                    text: line.to_string(),
                });
            };
            let id: VertexId = m["id"].parse().unwrap();
            if id != VertexId::new(i + 1) {
                return Err(GraphFileError::NonSequentialVertex { line: i + 1, id });
            }
            declared += 1;

            let mut label = m.name("label").unwrap().as_str();
            if label.contains(NOT_AMONG_TARGETS) {
                label = label.split(" (").next().unwrap();
            }

            match by_label.entry(label.to_string()) {
                Entry::Occupied(_) => {
                    log::warn!("duplicate neighborhood `{label}` (line {})", i + 1);
                }
                Entry::Vacant(e) => {
                    e.insert(id);
                }
            }
        }

        Ok(Self { by_label, declared })
    }

    /// Number of labels in the mapping.
    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    /// Number of vertex identifiers declared in the section, including those
    /// of dropped duplicates. The adjacency matrix spans `N1..=N<declared>`.
    pub fn declared(&self) -> usize {
        self.declared
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<VertexId> {
        self.by_label.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, VertexId)> {
        self.by_label.iter().map(|(label, id)| (label.as_str(), *id))
    }

    /// Identifier -> label lookup, to walk edges back to their labels.
    pub fn reverse(&self) -> HashMap<VertexId, &str> {
        self.by_label
            .iter()
            .map(|(label, id)| (*id, label.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn dense_identifiers() {
        let lines = ["N1 - 1.2.3.0/24", "N2 - {5.6.7.0/24, 8.9.0.0/24}", "N3 - 4.4.4.0/30"];
        let labels = VertexLabels::parse(&lines).unwrap();

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.declared(), 3);
        assert_eq!(
            labels.iter().map(|(_, id)| id).sorted().collect_vec(),
            vec![VertexId::new(1), VertexId::new(2), VertexId::new(3)]
        );
        assert_eq!(labels.get("1.2.3.0/24"), Some(VertexId::new(1)));
        assert_eq!(labels.get("4.4.4.0/30"), Some(VertexId::new(3)));
    }

    #[test]
    fn stops_at_blank_line() {
        let lines = ["N1 - a", "N2 - b", "", "this is not a vertex line"];
        let labels = VertexLabels::parse(&lines).unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn strips_not_among_targets_annotation() {
        let lines = ["N1 - 1.2.3.0/24 (not among targets)"];
        let labels = VertexLabels::parse(&lines).unwrap();
        assert_eq!(labels.get("1.2.3.0/24"), Some(VertexId::new(1)));
    }

    #[test]
    fn duplicate_keeps_first() {
        let lines = ["N1 - a", "N2 - b", "N3 - a"];
        let labels = VertexLabels::parse(&lines).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.declared(), 3);
        assert_eq!(labels.get("a"), Some(VertexId::new(1)));
    }

    #[test]
    fn gap_in_identifiers_is_fatal() {
        let lines = ["N1 - a", "N3 - b"];
        assert!(matches!(
            VertexLabels::parse(&lines),
            Err(GraphFileError::NonSequentialVertex { line: 2, .. })
        ));
    }

    #[test]
    fn missing_separator_is_fatal() {
        let lines = ["N1 - a", "N2 b"];
        assert!(matches!(
            VertexLabels::parse(&lines),
            Err(GraphFileError::MalformedVertexLine { line: 2, .. })
        ));
    }

    #[test]
    fn bad_identifier_is_fatal() {
        let lines = ["X1 - a"];
        assert!(matches!(
            VertexLabels::parse(&lines),
            Err(GraphFileError::MalformedVertexLine { line: 1, .. })
        ));
    }

    #[test]
    fn reverse_lookup() {
        let lines = ["N1 - a", "N2 - b"];
        let labels = VertexLabels::parse(&lines).unwrap();
        let reverse = labels.reverse();
        assert_eq!(reverse[&VertexId::new(1)], "a");
        assert_eq!(reverse[&VertexId::new(2)], "b");
    }
}
