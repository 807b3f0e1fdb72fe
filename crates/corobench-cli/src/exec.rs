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

//! Build and benchmark process invocation.
//!
//! Benchmarks are CPU-saturating stress tests: they are launched and
//! awaited strictly one at a time so they never compete for cores. A
//! single process failure or unparsable output drops that one run; it
//! never cancels the remaining sweep.
//!
//! A benchmark executable prints a YAML mapping to stdout:
//!
//! ```yaml
//! threads: 8
//! runs:
//!   - iteration_count: 100
//!     duration: 1234 us
//!     elements/sec: 810372
//! ```
//!
//! `duration` is required per run entry; the first field whose key ends in
//! `/sec` is taken as the run's throughput.

use std::path::{Path, PathBuf};
use std::process::Command;

use corobench_core::BenchError;
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Key suffix marking a throughput field in benchmark output.
pub const THROUGHPUT_SUFFIX: &str = "/sec";

/// Captured outcome of a runtime's build step.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Whether the build script exited zero.
    pub success: bool,
    /// Exit code, or -1 if the script was killed by a signal.
    pub code: i32,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

/// Runs a runtime's build script in its directory, capturing all output.
///
/// A failing build is reported in the outcome, not as an error; the caller
/// excludes the runtime and moves on.
pub fn build_runtime(dir: &Path, build_script: &str) -> Result<BuildOutcome> {
    let script = dir.join(build_script);
    let output = Command::new("sh")
        .arg(&script)
        .current_dir(dir)
        .output()
        .map_err(|e| CliError::io(&script, e))?;

    Ok(BuildOutcome {
        success: output.status.success(),
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Path of a benchmark executable: `<dir>/build/<bench>` for a plain
/// runtime, `<dir>/build/<bench>_<config>` for a configuration variant.
pub fn executable_path(dir: &Path, benchmark: &str, config: Option<&str>) -> PathBuf {
    let file = match config {
        Some(cfg) => format!("{benchmark}_{cfg}"),
        None => benchmark.to_string(),
    };
    dir.join("build").join(file)
}

/// Launches one benchmark run and captures its stdout.
///
/// The parameter value, when present, is the first argument; the thread
/// count, when requested, follows it. The exit status is ignored: some
/// benchmarks report a result and then exit non-zero on a self-check, and
/// the output parser is the arbiter of usability either way.
pub fn run_benchmark(
    runtime: &str,
    benchmark: &str,
    exe: &Path,
    params: &str,
    threads: Option<u32>,
) -> std::result::Result<String, BenchError> {
    let mut cmd = Command::new(exe);
    if !params.is_empty() {
        cmd.arg(params);
    }
    if let Some(threads) = threads {
        cmd.arg(threads.to_string());
    }

    let output = cmd.output().map_err(|e| {
        BenchError::execution(runtime, benchmark, format!("failed to launch: {e}"))
    })?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// One usable run entry from benchmark output.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRun {
    /// Raw duration string, e.g. `"1234 us"`.
    pub duration: String,
    /// First `*/sec` field, if the run reported one.
    pub throughput: Option<f64>,
}

/// Parsed benchmark stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedOutput {
    /// Thread count echoed by the executable, if present.
    pub threads: Option<u32>,
    /// Run entries in output order; never empty.
    pub runs: Vec<ParsedRun>,
}

#[derive(Debug, Deserialize)]
struct RawOutput {
    #[serde(default)]
    threads: Option<u32>,
    #[serde(default)]
    runs: Vec<serde_yaml::Mapping>,
}

/// Parses captured stdout into run entries.
///
/// # Errors
///
/// Returns a recoverable [`BenchError::ExecutionFailure`] when the text is
/// not a YAML mapping, has no `runs` list, or a run entry lacks a string
/// `duration`. The caller logs the failure and drops that single run.
pub fn parse_output(
    runtime: &str,
    benchmark: &str,
    stdout: &str,
) -> std::result::Result<ParsedOutput, BenchError> {
    let raw: RawOutput = serde_yaml::from_str(stdout)
        .map_err(|e| BenchError::execution(runtime, benchmark, e.to_string()))?;

    if raw.runs.is_empty() {
        return Err(BenchError::execution(
            runtime,
            benchmark,
            "output has no runs",
        ));
    }

    let mut runs = Vec::with_capacity(raw.runs.len());
    for entry in &raw.runs {
        let mut duration = None;
        let mut throughput = None;
        for (key, value) in entry {
            let Some(key) = key.as_str() else { continue };
            if key == "duration" && duration.is_none() {
                duration = value.as_str().map(str::to_string);
            } else if key.ends_with(THROUGHPUT_SUFFIX) && throughput.is_none() {
                throughput = value.as_f64();
            }
        }
        match duration {
            Some(duration) => runs.push(ParsedRun {
                duration,
                throughput,
            }),
            None => {
                return Err(BenchError::execution(
                    runtime,
                    benchmark,
                    "run entry has no duration",
                ))
            }
        }
    }

    Ok(ParsedOutput {
        threads: raw.threads,
        runs,
    })
}
