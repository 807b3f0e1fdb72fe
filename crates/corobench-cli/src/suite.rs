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

//! Declarative suite configuration.
//!
//! The set of runtimes, benchmarks, parameter lists, and the thread sweep
//! are data, not code: one [`SuiteConfig`] drives the whole pipeline. The
//! built-in default reproduces the standard suite; a TOML file can replace
//! it wholesale.
//!
//! ```toml
//! bench_root = "cpp"
//! threads = [1, 2, 4, 8]
//!
//! [[runtimes]]
//! name = "libcoro"
//! url = "https://github.com/jbaldwin/libcoro"
//! configs = ["epoll", "uring"]
//!
//! [[benchmarks]]
//! name = "fib"
//! params = ["40"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use corobench_core::reporters::default_urls;
use corobench_core::CollectSpec;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

fn default_bench_root() -> PathBuf {
    PathBuf::from("cpp")
}

fn default_build_script() -> String {
    "build_all.sh".to_string()
}

/// One runtime under benchmark.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Directory name under the bench root, and the reporting key.
    pub name: String,
    /// Project page, hyperlinked in the summary tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Configuration variants to benchmark separately. Each variant
    /// competes under its own `name_config` key.
    #[serde(default)]
    pub configs: Vec<String>,
    /// Build script, relative to the runtime's directory.
    #[serde(default = "default_build_script")]
    pub build_script: String,
}

impl RuntimeSpec {
    fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: Some(url.to_string()),
            configs: Vec::new(),
            build_script: default_build_script(),
        }
    }

    /// The variants to execute: `[None]` for a plain runtime, one `Some`
    /// per configured variant otherwise.
    pub fn variants(&self) -> Vec<Option<&str>> {
        if self.configs.is_empty() {
            vec![None]
        } else {
            self.configs.iter().map(|cfg| Some(cfg.as_str())).collect()
        }
    }
}

/// One benchmark in the suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSpec {
    /// Executable name under the runtime's `build/` directory.
    pub name: String,
    /// Parameter values to sweep; empty means a single parameterless run.
    #[serde(default)]
    pub params: Vec<String>,
    /// Series positions to report in the summary; empty means the default
    /// (last point, untagged).
    #[serde(default)]
    pub collect: Vec<CollectSpec>,
}

impl BenchmarkSpec {
    fn new(name: &str, params: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            collect: Vec::new(),
        }
    }

    /// Parameter values to execute, with the empty string standing in for
    /// "no parameter".
    pub fn param_sets(&self) -> Vec<&str> {
        if self.params.is_empty() {
            vec![""]
        } else {
            self.params.iter().map(String::as_str).collect()
        }
    }
}

/// The whole declarative pipeline input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Directory containing one subdirectory per runtime.
    #[serde(default = "default_bench_root")]
    pub bench_root: PathBuf,
    /// Runtimes to build and benchmark, in execution order.
    pub runtimes: Vec<RuntimeSpec>,
    /// Benchmarks to run per runtime, in execution order.
    pub benchmarks: Vec<BenchmarkSpec>,
    /// Thread sweep; empty selects the host-derived default.
    #[serde(default)]
    pub threads: Vec<u32>,
}

impl SuiteConfig {
    /// Loads a suite definition from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        toml::from_str(&text).map_err(|e| CliError::suite(path, e.to_string()))
    }

    /// The thread counts to sweep, ascending.
    pub fn sweep(&self) -> Vec<u32> {
        if self.threads.is_empty() {
            default_sweep()
        } else {
            self.threads.clone()
        }
    }

    /// Runtime URL mapping: built-in table extended by suite entries.
    pub fn url_map(&self) -> BTreeMap<String, String> {
        let mut urls = default_urls();
        for runtime in &self.runtimes {
            if let Some(url) = &runtime.url {
                urls.insert(runtime.name.clone(), url.clone());
            }
        }
        urls
    }

    /// Collect specs keyed by benchmark name, for benchmarks that override
    /// the default.
    pub fn collect_map(&self) -> BTreeMap<String, Vec<CollectSpec>> {
        self.benchmarks
            .iter()
            .filter(|bench| !bench.collect.is_empty())
            .map(|bench| (bench.name.clone(), bench.collect.clone()))
            .collect()
    }
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            bench_root: default_bench_root(),
            runtimes: vec![
                RuntimeSpec::new("TooManyCooks", "https://github.com/tzcnt/TooManyCooks"),
                RuntimeSpec::new("libfork", "https://github.com/ConorWilliams/libfork"),
                RuntimeSpec::new(
                    "tbb",
                    "https://www.intel.com/content/www/us/en/developer/tools/oneapi/onetbb.html",
                ),
                RuntimeSpec::new("coros", "https://github.com/mtmucha/coros"),
                RuntimeSpec::new("concurrencpp", "https://github.com/David-Haim/concurrencpp"),
                RuntimeSpec::new("taskflow", "https://github.com/taskflow/taskflow"),
            ],
            benchmarks: vec![
                BenchmarkSpec::new("skynet", &[]),
                BenchmarkSpec::new("nqueens", &[]),
                BenchmarkSpec::new("fib", &["40"]),
                BenchmarkSpec::new("matmul", &["2048"]),
            ],
            threads: Vec::new(),
        }
    }
}

/// Powers of two up to the host's available parallelism, ending at the
/// full width.
pub fn default_sweep() -> Vec<u32> {
    let max = std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1);
    let mut sweep = Vec::new();
    let mut t = 1;
    while t < max {
        sweep.push(t);
        t *= 2;
    }
    sweep.push(max);
    sweep
}
