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
//! Sum the measured target capacities of every AS directory and compare the
//! total against the full IPv4 scope.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;

use topostat::{targets, util};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Directory holding one `AS<number>` sub-directory per measured AS.
    #[arg(short, long, default_value = "./")]
    data_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    util::init_logging();

    let args = Args::parse();
    let mut as_dirs: Vec<String> = fs::read_dir(&args.data_path)
        .with_context(|| format!("failed to read {}", args.data_path.display()))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let name = entry.file_name().to_string_lossy().to_string();
            (entry.path().is_dir() && name.starts_with("AS")).then_some(name)
        })
        .collect();
    as_dirs.sort_by(|a, b| human_sort::compare(a, b));

    let mut total = 0u64;
    for name in &as_dirs {
        let target_file = args.data_path.join(name).join(format!("{name}.txt"));
        if !target_file.is_file() {
            log::warn!("{} does not exist, skipping {name}", target_file.display());
            continue;
        }

        let count = targets::count_targets(&target_file)
            .with_context(|| format!("failed to parse {}", target_file.display()))?;
        total += count;
        println!("{name}: {count} IPs");
    }

    println!("Total of target IPs: {total}");
    let ratio = total as f64 / targets::IPV4_SCOPE as f64 * 100.0;
    println!("Ratio w.r.t. IPv4 scope: {ratio:.6}%");

    Ok(())
}
