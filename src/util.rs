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
//! Utility module collection of functions

pub fn init_logging() {
    pretty_env_logger::init();
}

/// Smallest power of ten at or above `n`, for log-scale axis bounds.
pub fn next_power_of_ten(n: usize) -> usize {
    let mut power = 1;
    while power < n {
        power *= 10;
    }
    power
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn powers_of_ten() {
        assert_eq!(next_power_of_ten(0), 1);
        assert_eq!(next_power_of_ten(1), 1);
        assert_eq!(next_power_of_ten(5), 10);
        assert_eq!(next_power_of_ten(10), 10);
        assert_eq!(next_power_of_ten(11), 100);
        assert_eq!(next_power_of_ten(20_000), 100_000);
    }
}
