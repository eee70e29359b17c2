// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

use simplex_contract::{
    contraction::{ContractionParams, run},
    io::Dataset,
};

/// Contracts edges of a filtered 2-complex within a per-pass epsilon bound.
///
/// Reads `<dir>/<name>/<name>{Data,Edges,Triangles}.txt` and writes
/// `<name>Contracted{Data,Edges,Triangles}.txt` next to them.
#[derive(Parser)]
#[command(name = "contract")]
struct Cmd {
    /// Directory holding the `<name>` dataset folder
    #[arg(long)]
    dir: PathBuf,

    /// Dataset name
    #[arg(long)]
    name: String,

    /// Per-pass filtration shift bound
    #[arg(long, default_value_t = 0.0)]
    epsilon: f64,

    /// Maximum number of passes (unbounded when omitted)
    #[arg(long)]
    max_passes: Option<usize>,

    /// Maximum number of contractions (unbounded when omitted)
    #[arg(long)]
    max_contractions: Option<usize>,

    /// Freeze vertices on edges that bound a single triangle
    #[arg(long)]
    detect_boundary: bool,

    /// Also write the run report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();

    let dataset = Dataset::new(&cmd.dir, &cmd.name);
    if !dataset.exists() {
        bail!("dataset '{}' not found under {}", cmd.name, cmd.dir.display());
    }

    let params = ContractionParams {
        epsilon: cmd.epsilon,
        max_passes: cmd.max_passes,
        max_contractions: cmd.max_contractions,
    };
    params.validate()?;

    let mut complex = dataset
        .load::<f64>()
        .with_context(|| format!("loading dataset '{}'", cmd.name))?;
    if cmd.detect_boundary {
        let marked = complex.detect_boundary();
        tracing::info!(marked, "boundary vertices frozen");
    }

    let report = run(&mut complex, &params)?;

    dataset
        .save(&complex)
        .with_context(|| format!("writing contracted '{}'", cmd.name))?;

    if let Some(path) = &cmd.report {
        let doc = json!({
            "dataset": cmd.name,
            "params": params,
            "report": report,
            "distortion_bound": params.epsilon * report.passes as f64,
        });
        std::fs::write(path, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing report {}", path.display()))?;
    }

    println!(
        "{}\tTime: {} ms\tContracted: {} edges\tIterations: {}",
        cmd.name,
        report.millis(),
        report.contractions,
        report.passes
    );
    Ok(())
}
