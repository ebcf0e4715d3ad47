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
//! Empirical distribution functions over integer samples.

use itertools::Itertools;
use serde::Serialize;

/// One step of an empirical CDF: the cumulative fraction of samples at or
/// below `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CdfPoint {
    pub value: usize,
    pub cumulative: f64,
}

/// Empirical CDF of a list of samples: one point per distinct value, in
/// increasing order, the last point at 1.0. Empty input gives an empty CDF.
pub fn empirical_cdf(samples: impl IntoIterator<Item = usize>) -> Vec<CdfPoint> {
    let samples = samples.into_iter().sorted().collect_vec();
    let total = samples.len();
    if total == 0 {
        return Vec::new();
    }

    let mut cumulative = 0.0;
    samples
        .into_iter()
        .dedup_with_count()
        .map(|(count, value)| {
            cumulative += count as f64 / total as f64;
            CdfPoint { value, cumulative }
        })
        .collect()
}

/// The largest sampled value of a CDF.
pub fn max_value(cdf: &[CdfPoint]) -> Option<usize> {
    cdf.last().map(|point| point.value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn simple_cdf() {
        let cdf = empirical_cdf([1, 1, 2]);
        assert_eq!(cdf.len(), 2);
        assert_eq!(cdf[0].value, 1);
        assert!((cdf[0].cumulative - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(cdf[1].value, 2);
        assert!((cdf[1].cumulative - 1.0).abs() < 1e-12);
    }

    #[test]
    fn input_order_does_not_matter() {
        assert_eq!(empirical_cdf([3, 1, 2, 1]), empirical_cdf([1, 1, 2, 3]));
    }

    #[test]
    fn empty_input_gives_empty_cdf() {
        assert!(empirical_cdf([]).is_empty());
        assert_eq!(max_value(&[]), None);
    }

    #[test]
    fn max_value_is_last_point() {
        let cdf = empirical_cdf([5, 2, 19, 2]);
        assert_eq!(max_value(&cdf), Some(19));
    }
}
