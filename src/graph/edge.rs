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
//! Edge-section line parsing.
//!
//! Classification happens here, before any matrix write: every edge line is
//! turned into an [`EdgeLine`] carrying a [`LinkKind`], so the substring
//! checks on the intermediate descriptor live in exactly one place.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{GraphFileError, VertexId};

lazy_static! {
    static ref EDGE_RE: Regex = Regex::new(r"^(?P<src>N[1-9][0-9]*) -> (?P<rest>.*)$").unwrap();
}

/// How two neighborhoods are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    /// Direct or indirect link with an attributable path.
    Direct,
    /// Link routed through a miscellaneous or anonymous intermediate.
    Remote,
}

impl LinkKind {
    /// Matrix cell value of this link. Remote links count double in the
    /// density computation.
    pub fn weight(self) -> u8 {
        match self {
            Self::Direct => 1,
            Self::Remote => 2,
        }
    }

    fn classify(descriptor: &str) -> Self {
        if descriptor.contains("miscellaneous") || descriptor.contains("anonymous") {
            Self::Remote
        } else {
            Self::Direct
        }
    }
}

/// One parsed line of the edge section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLine {
    pub source: VertexId,
    pub target: VertexId,
    pub kind: LinkKind,
}

impl EdgeLine {
    /// Parse a single edge line. `line` is its 1-based line number, used in
    /// error reporting.
    ///
    /// The target is either left of the literal `" via "` (the right part is
    /// the intermediate descriptor deciding direct vs. remote), or everything
    /// before an optional `" ("` annotation.
    pub fn parse(text: &str, line: usize) -> Result<Self, GraphFileError> {
        let malformed = || GraphFileError::MalformedEdgeLine {
            line,
            text: text.to_string(),
        };

        let m = EDGE_RE.captures(text).ok_or_else(&malformed)?;
        let source: VertexId = m["src"].parse().unwrap();

        let rest = m.name("rest").unwrap().as_str();
        let (target, kind) = match rest.split_once(" via ") {
            Some((target, descriptor)) => (target, LinkKind::classify(descriptor)),
            None => (rest.split(" (").next().unwrap(), LinkKind::Direct),
        };
        let target: VertexId = target.parse().map_err(|_| malformed())?;

        Ok(Self {
            source,
            target,
            kind,
        })
    }
}
