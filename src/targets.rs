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
//! Target list files: one IPv4 address or prefix per line.

use std::{fs, net::Ipv4Addr, path::Path, str::FromStr};

use ipnet::Ipv4Net;

/// Number of addresses in the full IPv4 scope.
pub const IPV4_SCOPE: u64 = 1 << 32;

#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: `{text}` is neither an IPv4 address nor a prefix")]
    MalformedTarget { line: usize, text: String },
}

/// Number of addresses one target line covers: 1 for a bare address,
/// 2^(32-p) for a `/p` prefix.
pub fn target_capacity(text: &str) -> Option<u64> {
    if text.contains('/') {
        let net = Ipv4Net::from_str(text).ok()?;
        Some(1u64 << (32 - net.prefix_len()))
    } else {
        Ipv4Addr::from_str(text).ok().map(|_| 1)
    }
}

/// Sum of the capacities over all lines of a target file. Blank lines are
/// skipped; a line that is neither an address nor a prefix is fatal.
pub fn count_targets(path: impl AsRef<Path>) -> Result<u64, TargetError> {
    let raw = fs::read_to_string(path)?;

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            target_capacity(line.trim()).ok_or_else(|| TargetError::MalformedTarget {
                line: i + 1,
                text: line.to_string(),
            })
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn capacities() {
        assert_eq!(target_capacity("10.0.0.1"), Some(1));
        assert_eq!(target_capacity("10.0.0.0/24"), Some(256));
        assert_eq!(target_capacity("10.0.0.1/32"), Some(1));
        assert_eq!(target_capacity("0.0.0.0/0"), Some(IPV4_SCOPE));
        assert_eq!(target_capacity("not an address"), None);
        assert_eq!(target_capacity("10.0.0.0/33"), None);
    }

    #[test]
    fn counts_a_target_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "10.0.0.0/24\n10.0.1.17\n\n10.1.0.0/30\n").unwrap();
        assert_eq!(count_targets(file.path()).unwrap(), 256 + 1 + 4);
    }

    #[test]
    fn malformed_target_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "10.0.0.0/24\ngarbage\n").unwrap();
        assert!(matches!(
            count_targets(file.path()),
            Err(TargetError::MalformedTarget { line: 2, .. })
        ));
    }
}
