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
//! Survey the neighborhood degrees over every snapshot of a dataset and plot
//! one degree CDF per AS type.

use std::{collections::HashMap, fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use indicatif::{MultiProgress, ParallelProgressIterator, ProgressBar, ProgressStyle};
use indicatif_log_bridge::LogWrapper;
use plotly::{
    common::{DashType, Line, Mode},
    layout::{Axis, AxisType},
    Plot, Scatter,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;
use strum::IntoEnumIterator;

use topostat::{
    dataset::{self, AsType},
    graph::GraphSnapshot,
    stats::{self, CdfPoint},
    util,
};

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Dataset description file, one `<AS>:<type>:<date>` per line.
    dataset: PathBuf,
    /// Root directory of the per-AS snapshot files.
    #[arg(short, long, default_value = "./data/")]
    data_path: PathBuf,
    /// Output directory for the chart and the CSV export.
    #[arg(short, long, default_value = "./plots/")]
    output_path: PathBuf,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct CdfRecord {
    as_type: AsType,
    degree: usize,
    cumulative: f64,
}

fn main() -> anyhow::Result<()> {
    let logger = pretty_env_logger::formatted_builder().build();
    let multi = MultiProgress::new();
    LogWrapper::new(multi.clone(), logger).try_init().unwrap();

    let args = Args::parse();
    let entries = dataset::parse(&args.dataset)
        .with_context(|| format!("failed to parse {}", args.dataset.display()))?;
    log::info!("surveying the snapshots of {} ASes", entries.len());
    fs::create_dir_all(&args.output_path)?;

    let pb = multi.add(
        ProgressBar::new(entries.len() as u64).with_style(
            ProgressStyle::with_template("[{bar:80}] AS: {pos:>4}/{len:4}, elapsed: {elapsed}")
                .unwrap()
                .progress_chars("##-"),
        ),
    );

    // one snapshot per AS, each parsed independently
    let degrees_per_as = entries
        .into_par_iter()
        .progress_with(pb)
        .map(|entry| {
            let path = entry.graph_path(&args.data_path);
            if !path.is_file() {
                log::warn!("{} does not exist, skipping {}", path.display(), entry.name);
                return Ok(None);
            }
            let snapshot = GraphSnapshot::load(&path)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            Ok(Some((entry.as_type, snapshot.matrix().degrees())))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut by_type: HashMap<AsType, Vec<usize>> = HashMap::new();
    for (as_type, degrees) in degrees_per_as.into_iter().flatten() {
        by_type.entry(as_type).or_default().extend(degrees);
    }

    let cdfs: HashMap<AsType, Vec<CdfPoint>> = by_type
        .into_iter()
        .map(|(as_type, degrees)| (as_type, stats::empirical_cdf(degrees)))
        .collect();

    write_csv(&cdfs, args.output_path.join("neighborhood_degrees.csv"))?;
    write_plot(&cdfs, args.output_path.join("neighborhood_degrees.html"));

    Ok(())
}

fn write_csv(
    cdfs: &HashMap<AsType, Vec<CdfPoint>>,
    csv_path: PathBuf,
) -> anyhow::Result<()> {
    let mut csv = csv::WriterBuilder::new().has_headers(true).from_writer(
        fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&csv_path)
            .with_context(|| format!("failed to create {}", csv_path.display()))?,
    );

    for as_type in AsType::iter() {
        for point in cdfs.get(&as_type).map(Vec::as_slice).unwrap_or_default() {
            csv.serialize(CdfRecord {
                as_type,
                degree: point.value,
                cumulative: point.cumulative,
            })?;
        }
    }
    csv.flush()?;

    Ok(())
}

fn write_plot(cdfs: &HashMap<AsType, Vec<CdfPoint>>, plot_path: PathBuf) {
    let mut plot = Plot::new();

    let mut max_degree = 0;
    for (as_type, dash) in AsType::iter().zip([DashType::Solid, DashType::Dot, DashType::Dash]) {
        let Some(cdf) = cdfs.get(&as_type) else {
            continue;
        };
        max_degree = max_degree.max(stats::max_value(cdf).unwrap_or(0));

        let (degrees, cumulative): (Vec<_>, Vec<_>) =
            cdf.iter().map(|point| (point.value, point.cumulative)).unzip();
        let trace = Scatter::new(degrees, cumulative)
            .name(format!("{as_type} ASes"))
            .mode(Mode::Lines)
            .line(Line::new().dash(dash));
        plot.add_trace(trace);
    }

    let x_bound = util::next_power_of_ten(max_degree) as f64;
    plot.set_layout(
        plot.layout()
            .clone()
            .title("<b>Neighborhood degree distribution</b>")
            .x_axis(
                Axis::new()
                    .title("Neighborhood degree")
                    .type_(AxisType::Log)
                    .range(vec![0.0, x_bound.log10()]),
            )
            .y_axis(
                Axis::new()
                    .title("Cumulative distribution function (CDF)")
                    .range(vec![0.0, 1.05]),
            ),
    );

    log::debug!("Plotting {}", plot_path.display());
    plot.write_html(plot_path);
}
