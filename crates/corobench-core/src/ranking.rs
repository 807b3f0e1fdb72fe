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

//! Mean-ratio ranking over cohort groups.
//!
//! Ratio-to-best is only meaningful over a consistent comparison cohort, so
//! benchmarks are first grouped by the exact set of runtimes that reported
//! them: benchmarks with identical reporting sets share one table, and the
//! ranking runs independently per group. One global mean across benchmarks
//! with heterogeneous coverage would silently reward runtimes that skip the
//! hard benchmarks.
//!
//! Within a group, a runtime's mean ratio averages its ratios over the
//! benchmarks it reports there; benchmarks a runtime is missing are
//! excluded from, not penalized in, the mean. That leniency is deliberate
//! and carried as-is.

use std::cmp::Ordering;

use serde::Serialize;

use crate::collate::Collated;

/// A runtime's aggregate score within one cohort group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuntimeRanking {
    /// Config-qualified runtime key.
    pub runtime: String,
    /// Arithmetic mean of ratio-to-best over the group's benchmarks.
    pub mean_ratio: f64,
}

/// Benchmarks sharing one reporting runtime set, with their ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortGroup {
    /// Benchmark display names, in collation order.
    pub benchmarks: Vec<String>,
    /// Runtimes sorted ascending by mean ratio; rank 1 first.
    pub rankings: Vec<RuntimeRanking>,
}

/// Groups benchmarks by reporting runtime set and ranks each group.
///
/// Group order follows the first appearance of each runtime set in
/// `collated.bench_order`, so identical input yields identical output.
pub fn rank(collated: &Collated) -> Vec<CohortGroup> {
    // (reporting set, benchmarks) in first-appearance order.
    let mut groups: Vec<(Vec<String>, Vec<String>)> = Vec::new();

    for display in &collated.bench_order {
        let reporters: Vec<String> = collated
            .entries
            .iter()
            .filter(|(_, benches)| benches.contains_key(display))
            .map(|(runtime, _)| runtime.clone())
            .collect();
        if reporters.is_empty() {
            continue;
        }

        match groups.iter_mut().find(|(set, _)| *set == reporters) {
            Some((_, benches)) => benches.push(display.clone()),
            None => groups.push((reporters, vec![display.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(reporters, benchmarks)| {
            let mut rankings: Vec<RuntimeRanking> = reporters
                .into_iter()
                .map(|runtime| {
                    let ratios: Vec<f64> = benchmarks
                        .iter()
                        .filter_map(|bench| collated.entry(&runtime, bench))
                        .map(|entry| entry.ratio)
                        .collect();
                    let mean_ratio = ratios.iter().sum::<f64>() / ratios.len() as f64;
                    RuntimeRanking {
                        runtime,
                        mean_ratio,
                    }
                })
                .collect();

            rankings.sort_by(|a, b| {
                a.mean_ratio
                    .partial_cmp(&b.mean_ratio)
                    .unwrap_or(Ordering::Equal)
            });

            CohortGroup {
                benchmarks,
                rankings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::collate;
    use crate::store::{ResultStore, RunRecord};

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
    fn single_benchmark_mean_equals_own_ratio() {
        let store = store_with(&[
            ("alpha", "fib", "40", 8, "100 us"),
            ("beta", "fib", "40", 8, "150 us"),
            ("gamma", "fib", "40", 8, "200 us"),
        ]);

        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        assert_eq!(groups.len(), 1);

        let rankings = &groups[0].rankings;
        assert_eq!(rankings[0].runtime, "alpha");
        assert_eq!(rankings[0].mean_ratio, 1.0);
        assert_eq!(rankings[1].runtime, "beta");
        assert_eq!(rankings[1].mean_ratio, 1.5);
        assert_eq!(rankings[2].runtime, "gamma");
        assert_eq!(rankings[2].mean_ratio, 2.0);
    }

    #[test]
    fn mean_over_multiple_benchmarks() {
        let store = store_with(&[
            ("alpha", "fib", "40", 8, "100 us"),
            ("alpha", "skynet", "", 8, "400 us"),
            ("beta", "fib", "40", 8, "200 us"),
            ("beta", "skynet", "", 8, "200 us"),
        ]);

        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].benchmarks, vec!["fib(40)", "skynet"]);

        // alpha: 1.0 and 2.0 -> 1.5; beta: 2.0 and 1.0 -> 1.5. Stable order
        // keeps the sorted runtime iteration order on ties.
        let rankings = &groups[0].rankings;
        assert_eq!(rankings[0].mean_ratio, 1.5);
        assert_eq!(rankings[1].mean_ratio, 1.5);
        assert_eq!(rankings[0].runtime, "alpha");
    }

    #[test]
    fn heterogeneous_coverage_splits_groups() {
        let store = store_with(&[
            ("alpha", "fib", "40", 8, "100 us"),
            ("alpha", "matmul", "2048", 8, "900 us"),
            ("beta", "fib", "40", 8, "300 us"),
        ]);

        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        assert_eq!(groups.len(), 2);

        // fib is reported by both, matmul by alpha alone.
        assert_eq!(groups[0].benchmarks, vec!["fib(40)"]);
        assert_eq!(groups[0].rankings.len(), 2);
        assert_eq!(groups[1].benchmarks, vec!["matmul(2048)"]);
        assert_eq!(groups[1].rankings.len(), 1);
        assert_eq!(groups[1].rankings[0].mean_ratio, 1.0);
    }

    #[test]
    fn config_variants_rank_independently() {
        let store = store_with(&[
            ("libcoro_epoll", "channel", "", 8, "300 us"),
            ("libcoro_uring", "channel", "", 8, "150 us"),
        ]);

        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].rankings[0].runtime, "libcoro_uring");
        assert_eq!(groups[0].rankings[0].mean_ratio, 1.0);
        assert_eq!(groups[0].rankings[1].mean_ratio, 2.0);
    }
}
