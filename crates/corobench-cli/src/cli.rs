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

//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::commands;
use crate::error::Result;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Build every runtime, run the benchmark suite, and collate results.
    Run(RunArgs),
    /// Merge a source results file into a destination results file.
    Merge(MergeArgs),
    /// Regenerate the summary table from a persisted results file.
    Report(ReportArgs),
}

/// Arguments for `corobench run`.
#[derive(Args)]
pub struct RunArgs {
    /// Quick mode: a single thread count, summary table on stdout, no
    /// files written.
    #[arg(long)]
    pub quick: bool,

    /// TOML suite definition; the built-in suite is used when omitted.
    #[arg(long)]
    pub suite: Option<PathBuf>,

    /// Directory the report files are written into.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

/// Arguments for `corobench merge`.
#[derive(Args)]
pub struct MergeArgs {
    /// Results file merged into; rewritten in place.
    pub dest: PathBuf,
    /// Results file whose runtimes overwrite the destination's.
    pub source: PathBuf,
}

/// Arguments for `corobench report`.
#[derive(Args)]
pub struct ReportArgs {
    /// Results document to read.
    #[arg(default_value = "RESULTS.json")]
    pub input: PathBuf,
    /// Markdown file to write.
    #[arg(default_value = "RESULTS.md")]
    pub output: PathBuf,
}

impl Commands {
    /// Dispatches to the command handler.
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Run(args) => commands::run::execute(args),
            Commands::Merge(args) => commands::merge::execute(args),
            Commands::Report(args) => commands::report::execute(args),
        }
    }
}
