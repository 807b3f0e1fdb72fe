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

//! Ratio and speedup derivation.
//!
//! Two comparison granularities exist, one per reporting pipeline:
//!
//! - **Representative** ([`collate`]): one duration per (runtime,
//!   benchmark), taken from a named position of the series (by default the
//!   last, i.e. widest, run). Feeds the summary tables and the mean-ratio
//!   ranking. Canonical unit: microseconds. Ratios stay unrounded here so
//!   the ranking mean never compounds rounding error.
//! - **Per sweep point** ([`derive_sweep`]): every record in every series
//!   gets `scaled` (against the best duration in the whole cohort for that
//!   benchmark) and `speedup` (against the series' own first point), both
//!   rounded to two decimals for presentation. Canonical unit: nanoseconds.
//!
//! `speedup` measures intra-runtime scaling only; it is never divided by
//! the cohort minimum.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::duration::{parse_duration, Resolution};
use crate::error::Result;
use crate::store::{friendly_name, ResultStore};

/// Which record of a series a summary entry is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunPosition {
    /// The first sweep point (the speedup baseline).
    First,
    /// The last sweep point (the widest, representative run).
    Last,
}

/// A named position of a series to collect into the summary.
///
/// With a `tag`, the position renders as its own column, e.g.
/// `skynet (first run)` next to `skynet (last run)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectSpec {
    /// Position within the series.
    pub position: RunPosition,
    /// Display-name suffix distinguishing this position, if several
    /// positions of the same series are reported side by side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl Default for CollectSpec {
    fn default() -> Self {
        Self {
            position: RunPosition::Last,
            tag: None,
        }
    }
}

/// One (runtime, benchmark) summary cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollatedEntry {
    /// Original duration string as reported by the benchmark.
    pub raw: String,
    /// Canonical duration in microseconds.
    pub us: u64,
    /// Duration divided by the best duration in the cohort; `1.0` marks the
    /// best-in-class runtime (ties broken by first-seen).
    pub ratio: f64,
}

/// The collated summary model: one entry per (runtime, display name).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collated {
    /// runtime key -> benchmark display name -> entry.
    pub entries: BTreeMap<String, BTreeMap<String, CollatedEntry>>,
    /// Benchmark display names in first-seen order.
    pub bench_order: Vec<String>,
}

impl Collated {
    /// The entry for `(runtime_key, display_name)`, if present.
    pub fn entry(&self, runtime_key: &str, display_name: &str) -> Option<&CollatedEntry> {
        self.entries
            .get(runtime_key)
            .and_then(|benches| benches.get(display_name))
    }

    /// Runtime keys in sorted order.
    pub fn runtimes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Collates every series at its default representative position (the last
/// sweep point).
pub fn collate(store: &ResultStore) -> Result<Collated> {
    collate_with(store, &BTreeMap::new())
}

/// Collates the store into the summary model.
///
/// `collect` maps a benchmark name to the positions to report for it;
/// benchmarks without an entry use the default (last point, untagged).
/// Ratios are computed against the minimum microsecond duration among all
/// runtimes reporting each display name. A cohort of size 1 is valid and
/// trivially yields ratio `1.0`.
///
/// # Errors
///
/// Fails on the first malformed or unknown-unit duration string; every
/// downstream computation depends on comparable units, so there is no
/// skipping here.
pub fn collate_with(
    store: &ResultStore,
    collect: &BTreeMap<String, Vec<CollectSpec>>,
) -> Result<Collated> {
    let default_specs = vec![CollectSpec::default()];
    let mut collated = Collated::default();

    for (runtime, benches) in store.iter() {
        for (bench, series) in benches {
            if series.is_empty() {
                continue;
            }
            // Benchmarks stored under a parameter-qualified key ("fib(40)")
            // still pick up collect specs registered for the base name.
            let base = bench.split('(').next().unwrap_or(bench);
            let specs = collect
                .get(bench)
                .or_else(|| collect.get(base))
                .filter(|specs| !specs.is_empty())
                .unwrap_or(&default_specs);

            for spec in specs {
                let record = match spec.position {
                    RunPosition::First => &series[0],
                    RunPosition::Last => &series[series.len() - 1],
                };
                let display = friendly_name(bench, &record.params, spec.tag.as_deref());
                let us = parse_duration(&record.result.duration, Resolution::Micros)?;

                collated
                    .entries
                    .entry(runtime.clone())
                    .or_default()
                    .insert(
                        display.clone(),
                        CollatedEntry {
                            raw: record.result.duration.clone(),
                            us,
                            ratio: 1.0,
                        },
                    );
                if !collated.bench_order.contains(&display) {
                    collated.bench_order.push(display);
                }
            }
        }
    }

    // Second pass: ratio against the per-benchmark minimum. Recomputed on
    // every collation, never cached across merges.
    for display in &collated.bench_order {
        let best = collated
            .entries
            .values()
            .filter_map(|benches| benches.get(display))
            .map(|entry| entry.us)
            .min();
        let Some(best) = best else { continue };

        for benches in collated.entries.values_mut() {
            if let Some(entry) = benches.get_mut(display) {
                entry.ratio = entry.us as f64 / best as f64;
            }
        }
    }

    Ok(collated)
}

/// Rounds to two decimal places, presentation precision for sweep fields.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Fills `scaled` and `speedup` for every record in the store.
///
/// For each benchmark, the denominator for `scaled` is the minimum
/// nanosecond duration across all records of all runtimes reporting that
/// benchmark. `speedup` divides each series' first-point duration by the
/// record's own, independently per (runtime, benchmark) series. Both are
/// recomputed from the raw duration strings; any previously derived values
/// are overwritten.
pub fn derive_sweep(store: &mut ResultStore) -> Result<()> {
    let mut lowest: BTreeMap<String, u64> = BTreeMap::new();

    for (_, benches) in store.iter() {
        for (bench, series) in benches {
            for record in series {
                let dur = record.duration_in(Resolution::Nanos)?;
                lowest
                    .entry(bench.clone())
                    .and_modify(|best| *best = (*best).min(dur))
                    .or_insert(dur);
            }
        }
    }

    for (_, benches) in store.iter_mut() {
        for (bench, series) in benches.iter_mut() {
            let Some(&best) = lowest.get(bench) else {
                continue;
            };
            let mut first_dur = None;
            for record in series.iter_mut() {
                let dur = record.duration_in(Resolution::Nanos)?;
                let first = *first_dur.get_or_insert(dur);
                record.result.scaled = Some(round2(dur as f64 / best as f64));
                record.result.speedup = Some(round2(first as f64 / dur as f64));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RunRecord;

    fn store_with(rows: &[(&str, &str, &str, u32, &str)]) -> ResultStore {
        let mut store = ResultStore::new();
        for &(runtime, bench, params, threads, raw) in rows {
            store
                .record(runtime, bench, RunRecord::new(params, threads, raw))
                .unwrap();
        }
        store
    }

    #[test]
    fn ratios_against_best_in_class() {
        let store = store_with(&[
            ("alpha", "fib", "40", 8, "100 us"),
            ("beta", "fib", "40", 8, "150 us"),
            ("gamma", "fib", "40", 8, "200 us"),
        ]);

        let collated = collate(&store).unwrap();
        assert_eq!(collated.bench_order, vec!["fib(40)"]);
        assert_eq!(collated.entry("alpha", "fib(40)").unwrap().ratio, 1.0);
        assert_eq!(collated.entry("beta", "fib(40)").unwrap().ratio, 1.5);
        assert_eq!(collated.entry("gamma", "fib(40)").unwrap().ratio, 2.0);
    }

    #[test]
    fn ratio_floor_is_one() {
        let store = store_with(&[
            ("alpha", "skynet", "", 8, "3 ms"),
            ("beta", "skynet", "", 8, "3000 us"),
            ("gamma", "skynet", "", 8, "9000 us"),
        ]);

        let collated = collate(&store).unwrap();
        let mut min_ratio = f64::INFINITY;
        for runtime in ["alpha", "beta", "gamma"] {
            let ratio = collated.entry(runtime, "skynet").unwrap().ratio;
            assert!(ratio >= 1.0);
            min_ratio = min_ratio.min(ratio);
        }
        assert_eq!(min_ratio, 1.0);
    }

    #[test]
    fn representative_is_last_sweep_point() {
        let store = store_with(&[
            ("alpha", "skynet", "", 1, "400 us"),
            ("alpha", "skynet", "", 8, "100 us"),
        ]);

        let collated = collate(&store).unwrap();
        let entry = collated.entry("alpha", "skynet").unwrap();
        assert_eq!(entry.raw, "100 us");
        assert_eq!(entry.us, 100);
    }

    #[test]
    fn tagged_positions_render_side_by_side() {
        let store = store_with(&[
            ("alpha", "skynet", "", 1, "400 us"),
            ("alpha", "skynet", "", 8, "100 us"),
        ]);

        let collect = BTreeMap::from([(
            "skynet".to_string(),
            vec![
                CollectSpec {
                    position: RunPosition::First,
                    tag: Some("first run".to_string()),
                },
                CollectSpec {
                    position: RunPosition::Last,
                    tag: Some("last run".to_string()),
                },
            ],
        )]);

        let collated = collate_with(&store, &collect).unwrap();
        assert_eq!(
            collated.bench_order,
            vec!["skynet (first run)", "skynet (last run)"]
        );
        assert_eq!(
            collated.entry("alpha", "skynet (first run)").unwrap().us,
            400
        );
        assert_eq!(collated.entry("alpha", "skynet (last run)").unwrap().us, 100);
    }

    #[test]
    fn single_member_cohort_is_valid() {
        let store = store_with(&[("alpha", "nqueens", "", 8, "5000 us")]);
        let collated = collate(&store).unwrap();
        assert_eq!(collated.entry("alpha", "nqueens").unwrap().ratio, 1.0);
    }

    #[test]
    fn malformed_duration_aborts_collation() {
        let store = store_with(&[("alpha", "fib", "40", 8, "5 minutes")]);
        assert!(collate(&store).is_err());
    }

    #[test]
    fn sweep_speedup_and_scaled() {
        let mut store = store_with(&[
            ("alpha", "skynet", "", 1, "400 us"),
            ("alpha", "skynet", "", 2, "220 us"),
            ("alpha", "skynet", "", 4, "130 us"),
            ("alpha", "skynet", "", 8, "100 us"),
        ]);

        derive_sweep(&mut store).unwrap();

        let series = store.series_for("alpha", "skynet").unwrap();
        let speedups: Vec<f64> = series
            .iter()
            .map(|r| r.result.speedup.unwrap())
            .collect();
        assert_eq!(speedups, vec![1.0, 1.82, 3.08, 4.0]);

        let scaled: Vec<f64> = series.iter().map(|r| r.result.scaled.unwrap()).collect();
        assert_eq!(scaled, vec![4.0, 2.2, 1.3, 1.0]);
    }

    #[test]
    fn sweep_scaled_uses_cohort_minimum() {
        let mut store = store_with(&[
            ("alpha", "skynet", "", 1, "400 us"),
            ("alpha", "skynet", "", 8, "100 us"),
            ("beta", "skynet", "", 1, "300 us"),
            ("beta", "skynet", "", 8, "50 us"),
        ]);

        derive_sweep(&mut store).unwrap();

        // beta's 8-thread point is the cohort best; alpha scales against it.
        let alpha = store.series_for("alpha", "skynet").unwrap();
        assert_eq!(alpha[1].result.scaled, Some(2.0));
        let beta = store.series_for("beta", "skynet").unwrap();
        assert_eq!(beta[1].result.scaled, Some(1.0));

        // speedup stays intra-runtime: alpha's own first point is its
        // baseline, not beta's minimum.
        assert_eq!(alpha[1].result.speedup, Some(4.0));
        assert_eq!(beta[1].result.speedup, Some(6.0));
    }

    #[test]
    fn derivation_overwrites_stale_fields() {
        let mut store = ResultStore::new();
        let mut rec = RunRecord::new("", 1, "100 us");
        rec.result.scaled = Some(99.0);
        rec.result.speedup = Some(99.0);
        store.record("alpha", "fib", rec).unwrap();

        derive_sweep(&mut store).unwrap();
        let series = store.series_for("alpha", "fib").unwrap();
        assert_eq!(series[0].result.scaled, Some(1.0));
        assert_eq!(series[0].result.speedup, Some(1.0));
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(400.0 / 220.0), 1.82);
        assert_eq!(round2(400.0 / 130.0), 3.08);
        assert_eq!(round2(1.0), 1.0);
    }
}
