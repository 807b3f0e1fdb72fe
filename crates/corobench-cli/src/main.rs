// corobench - comparative benchmark harness for concurrency runtimes
//
// Copyright (c) 2026 corobench contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! corobench command line interface.
//!
//! ```bash
//! # Full sweep: writes RESULTS.json / RESULTS.md / RESULTS.csv / RESULTS.html
//! corobench run
//!
//! # Quick sanity pass: single thread count, table on stdout only
//! corobench run --quick
//!
//! # Fold a supplementary single-benchmark run into the main dataset
//! corobench merge RESULTS.json skynet-only.json
//!
//! # Regenerate the summary table from a persisted dataset
//! corobench report RESULTS.json RESULTS.md
//! ```

mod cli;
mod commands;
mod error;
mod exec;
mod hostinfo;
mod suite;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Commands;

/// Comparative benchmark harness for concurrency runtimes.
#[derive(Parser)]
#[command(name = "corobench", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
