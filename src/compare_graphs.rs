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
//! Compare the content of two `.graph` snapshots to evaluate how similar they
//! are.

use std::{fs, path::PathBuf, process};

use anyhow::Context;
use clap::Parser;

use topostat::{comparison, graph::GraphSnapshot, util};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// First `.graph` snapshot.
    first: PathBuf,
    /// Second `.graph` snapshot.
    second: PathBuf,
    /// Additionally write the report as JSON to the given path.
    #[arg(short, long)]
    json: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    util::init_logging();

    let args = Args::parse();
    for path in [&args.first, &args.second] {
        if !path.is_file() {
            log::error!("{} does not exist!", path.display());
            process::exit(1);
        }
    }

    let first = GraphSnapshot::load(&args.first)
        .with_context(|| format!("failed to parse {}", args.first.display()))?;
    let second = GraphSnapshot::load(&args.second)
        .with_context(|| format!("failed to parse {}", args.second.display()))?;

    let report = comparison::compare(&first, &second);
    println!("{report}");

    if let Some(json_path) = args.json {
        let file = fs::File::create(&json_path)
            .with_context(|| format!("failed to create {}", json_path.display()))?;
        serde_json::to_writer_pretty(file, &report)?;
        log::info!("report written to {}", json_path.display());
    }

    Ok(())
}
