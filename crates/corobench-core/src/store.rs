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

//! The accumulating result record store.
//!
//! A [`ResultStore`] maps a config-qualified runtime key to benchmark name
//! to the ordered series of runs executed for that pair. It is an owned,
//! single-writer aggregate: the collection phase appends records, then a
//! derivation pass fills in the `scaled`/`speedup` fields once all runs for
//! a benchmark are present. The store is rebuilt from scratch on every
//! invocation; only the merge utility revives one from persisted JSON.
//!
//! Series order is significant. Records must be appended in ascending
//! thread-count order: index 0 is the baseline for speedup, and the last
//! element (the widest run) is the representative result for summary
//! tables. Appending out of order is rejected rather than silently
//! accepted.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::duration::{parse_duration, Resolution};
use crate::error::{BenchError, Result};

/// Separator between a runtime name and its configuration variant.
pub const CONFIG_SEPARATOR: char = '_';

/// Builds the effective runtime key for a (runtime, config) pair.
///
/// A configuration variant widens the runtime's identity so that variants
/// compete independently in rankings: `("libcoro", Some("uring"))` becomes
/// `"libcoro_uring"`.
pub fn effective_runtime_key(runtime: &str, config: Option<&str>) -> String {
    match config {
        Some(cfg) if !cfg.is_empty() => format!("{runtime}{CONFIG_SEPARATOR}{cfg}"),
        _ => runtime.to_string(),
    }
}

/// Recovers the base runtime name from a possibly config-qualified key by
/// stripping at the first separator.
pub fn base_runtime_name(key: &str) -> &str {
    match key.split_once(CONFIG_SEPARATOR) {
        Some((base, _)) => base,
        None => key,
    }
}

/// Human-readable benchmark label: `name` when params is empty, otherwise
/// `name(params)`, optionally suffixed with a run-position tag when several
/// positions of the same series are reported side by side.
///
/// Idempotent over already-qualified names: a benchmark stored under
/// `"fib(40)"` does not grow a second parameter suffix.
pub fn friendly_name(benchmark: &str, params: &str, tag: Option<&str>) -> String {
    let mut name = if params.is_empty() || benchmark.ends_with(&format!("({params})")) {
        benchmark.to_string()
    } else {
        format!("{benchmark}({params})")
    };
    if let Some(tag) = tag {
        name.push_str(&format!(" ({tag})"));
    }
    name
}

/// The measured outcome of a single run, as persisted.
///
/// `duration` keeps the raw `"<integer> <unit>"` string exactly as the
/// benchmark printed it; canonical values are re-derived on demand so a
/// merged snapshot never trusts stale numbers. `scaled` and `speedup` are
/// filled by the derivation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Raw duration string, e.g. `"1234 us"`.
    pub duration: String,
    /// Throughput reported by the benchmark, if any (first `*/sec` field).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<f64>,
    /// Duration divided by the best duration observed for this benchmark
    /// across the whole cohort. Derived, `>= 1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaled: Option<f64>,
    /// First-sweep-point duration divided by this run's duration. Derived;
    /// measures intra-runtime scaling only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speedup: Option<f64>,
}

/// One execution of one benchmark under one runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Benchmark-specific argument; empty string means no parameter.
    #[serde(default)]
    pub params: String,
    /// Concurrency width the run was executed at.
    pub threads: u32,
    /// Configuration variant tag, if the runtime was benchmarked under one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
    /// Measured outcome.
    pub result: RunResult,
}

impl RunRecord {
    /// Creates a record with no throughput and underived fields.
    pub fn new(params: impl Into<String>, threads: u32, raw_duration: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            threads,
            config: None,
            result: RunResult {
                duration: raw_duration.into(),
                throughput: None,
                scaled: None,
                speedup: None,
            },
        }
    }

    /// Tags the record with a configuration variant.
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    /// Attaches a throughput value.
    pub fn with_throughput(mut self, throughput: f64) -> Self {
        self.result.throughput = Some(throughput);
        self
    }

    /// Canonical duration at the given resolution, parsed from the raw
    /// string.
    pub fn duration_in(&self, resolution: Resolution) -> Result<u64> {
        parse_duration(&self.result.duration, resolution)
    }
}

/// Ordered sequence of runs for one (runtime, benchmark) pair.
pub type BenchmarkSeries = Vec<RunRecord>;

/// Accumulating mapping of runtime key -> benchmark name -> run series.
///
/// Keys iterate in sorted order so that every rendering of the same store
/// is byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultStore {
    runs: BTreeMap<String, BTreeMap<String, BenchmarkSeries>>,
}

impl ResultStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a run to the series for `(runtime_key, benchmark)`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::OutOfOrderSweep`] when the record's thread
    /// count does not exceed the last appended point's. Each sweep visits a
    /// concurrency width exactly once, in ascending order.
    pub fn record(&mut self, runtime_key: &str, benchmark: &str, record: RunRecord) -> Result<()> {
        let series = self
            .runs
            .entry(runtime_key.to_string())
            .or_default()
            .entry(benchmark.to_string())
            .or_default();

        if let Some(last) = series.last() {
            if record.threads <= last.threads {
                return Err(BenchError::OutOfOrderSweep {
                    runtime: runtime_key.to_string(),
                    benchmark: benchmark.to_string(),
                    threads: record.threads,
                    last: last.threads,
                });
            }
        }

        series.push(record);
        Ok(())
    }

    /// The run series for `(runtime_key, benchmark)`, if any.
    pub fn series_for(&self, runtime_key: &str, benchmark: &str) -> Option<&[RunRecord]> {
        self.runs
            .get(runtime_key)
            .and_then(|benches| benches.get(benchmark))
            .map(|series| series.as_slice())
    }

    /// Whether the store holds no runtimes at all.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of runtimes present.
    pub fn runtime_count(&self) -> usize {
        self.runs.len()
    }

    /// Runtime keys in sorted order.
    pub fn runtimes(&self) -> impl Iterator<Item = &str> {
        self.runs.keys().map(String::as_str)
    }

    /// Iterates `(runtime_key, benchmarks)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, BenchmarkSeries>)> {
        self.runs.iter()
    }

    /// Mutable iteration over `(runtime_key, benchmarks)`.
    pub fn iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (&String, &mut BTreeMap<String, BenchmarkSeries>)> {
        self.runs.iter_mut()
    }

    /// Every benchmark name appearing under any runtime, sorted.
    pub fn benchmark_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .runs
            .values()
            .flat_map(|benches| benches.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Replaces a runtime's entire benchmark map, wholesale.
    ///
    /// Used by the merge utility: the incoming snapshot's entry wins even
    /// when the previous entry covered more benchmarks.
    pub fn replace_runtime(&mut self, runtime_key: String, benches: BTreeMap<String, BenchmarkSeries>) {
        self.runs.insert(runtime_key, benches);
    }

    /// Consumes the store, yielding `(runtime_key, benchmarks)` pairs.
    pub fn into_runtimes(self) -> impl Iterator<Item = (String, BTreeMap<String, BenchmarkSeries>)> {
        self.runs.into_iter()
    }
}

/// The persisted results document: opaque host metadata plus the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsDoc {
    /// Pass-through host/build metadata (CPU model, kernel, compiler, start
    /// time). Never validated or parsed here.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// The collected results.
    #[serde(default)]
    pub results: ResultStore,
}

impl ResultsDoc {
    /// Loads a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes the document as pretty-printed JSON with a trailing newline,
    /// fully overwriting any previous file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        fs::write(path, text).map_err(|e| BenchError::io(path, e))
    }
}
