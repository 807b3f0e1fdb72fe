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

//! The `run` command: build, execute, collate, report.
//!
//! Execution is strictly sequential and completes for the whole suite
//! before any derivation runs; that barrier is what makes the cohort
//! minima well-defined. A failed build excludes one runtime; a failed or
//! unparsable run drops one record. Neither aborts the sweep.

use std::fs;

use chrono::Utc;
use corobench_core::reporters::{export_csv, export_html, export_json, export_markdown, render_markdown};
use corobench_core::{
    collate_with, derive_sweep, effective_runtime_key, friendly_name, rank, BenchError,
    ResultStore, ResultsDoc, RunRecord,
};
use tracing::{info, warn};

use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use crate::exec;
use crate::hostinfo;
use crate::suite::SuiteConfig;

pub fn execute(args: RunArgs) -> Result<()> {
    let suite = match &args.suite {
        Some(path) => SuiteConfig::load(path)?,
        None => SuiteConfig::default(),
    };

    let start_time = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let full_sweep = suite.sweep();
    let sweep: Vec<u32> = if args.quick {
        // Quick mode measures only the widest point.
        vec![*full_sweep.last().unwrap_or(&1)]
    } else {
        full_sweep
    };

    let store = collect(&suite, &sweep)?;
    if store.is_empty() {
        warn!("no benchmark produced usable results; nothing to report");
        return Ok(());
    }

    let collated = collate_with(&store, &suite.collect_map())?;
    let groups = rank(&collated);
    let urls = suite.url_map();
    print!("{}", render_markdown(&collated, &groups, &urls));

    if args.quick {
        return Ok(());
    }

    let mut store = store;
    derive_sweep(&mut store)?;

    let mut metadata = hostinfo::collect_metadata(&suite);
    metadata.insert("start_time".to_string(), start_time);
    let doc = ResultsDoc {
        metadata,
        results: store,
    };

    fs::create_dir_all(&args.out_dir).map_err(|e| CliError::io(&args.out_dir, e))?;
    export_json(&doc, &args.out_dir.join("RESULTS.json"))?;
    export_markdown(&collated, &groups, &urls, &args.out_dir.join("RESULTS.md"))?;
    export_csv(&collated, &groups, &urls, &args.out_dir.join("RESULTS.csv"))?;
    export_html(&doc, &args.out_dir.join("RESULTS.html"))?;
    info!("reports written to {}", args.out_dir.display());

    Ok(())
}

/// Builds every runtime and executes the whole suite, one process at a
/// time.
fn collect(suite: &SuiteConfig, sweep: &[u32]) -> Result<ResultStore> {
    let mut store = ResultStore::new();

    for runtime in &suite.runtimes {
        let dir = suite.bench_root.join(&runtime.name);
        if !dir.is_dir() {
            info!("{}: no checkout at {}, skipping", runtime.name, dir.display());
            continue;
        }

        info!("building {}", runtime.name);
        match exec::build_runtime(&dir, &runtime.build_script) {
            Ok(build) if !build.success => {
                // Echo the captured output so the failure is diagnosable,
                // then carry on without this runtime.
                print!("{}", build.stdout);
                eprint!("{}", build.stderr);
                let err = BenchError::BuildFailure {
                    runtime: runtime.name.clone(),
                    code: build.code,
                };
                warn!("{err}, excluding it");
                continue;
            }
            Err(err) => {
                warn!("build failed for {}: {err}, excluding it", runtime.name);
                continue;
            }
            Ok(_) => {}
        }

        for variant in runtime.variants() {
            let key = effective_runtime_key(&runtime.name, variant);
            for bench in &suite.benchmarks {
                let param_sets = bench.param_sets();
                let multi_params = param_sets.len() > 1;

                // Runtimes without this benchmark (or this variant of it)
                // are skipped without comment.
                let exe = exec::executable_path(&dir, &bench.name, variant);
                if !exe.is_file() {
                    continue;
                }

                for params in param_sets {
                    // With several parameter values, each value sweeps as
                    // its own series.
                    let series_key = if multi_params {
                        friendly_name(&bench.name, params, None)
                    } else {
                        bench.name.clone()
                    };

                    for &threads in sweep {
                        info!(
                            "running {} {} ({} threads)",
                            exe.display(),
                            params,
                            threads
                        );
                        let stdout = match exec::run_benchmark(
                            &key,
                            &bench.name,
                            &exe,
                            params,
                            Some(threads),
                        ) {
                            Ok(stdout) => stdout,
                            Err(err) => {
                                warn!("{err}");
                                continue;
                            }
                        };
                        let parsed = match exec::parse_output(&key, &bench.name, &stdout) {
                            Ok(parsed) => parsed,
                            Err(err) => {
                                warn!("{err}");
                                continue;
                            }
                        };

                        let first = &parsed.runs[0];
                        let mut record = RunRecord::new(
                            params,
                            parsed.threads.unwrap_or(threads),
                            first.duration.clone(),
                        );
                        if let Some(config) = variant {
                            record = record.with_config(config);
                        }
                        if let Some(throughput) = first.throughput {
                            record = record.with_throughput(throughput);
                        }
                        store.record(&key, &series_key, record)?;
                    }
                }
            }
        }
    }

    Ok(store)
}
