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

//! Result collation and cross-run aggregation for concurrency runtime
//! benchmarks.
//!
//! Each benchmark is an external executable; this crate normalizes their
//! heterogeneous textual outputs (varying units, parameter sets, thread
//! counts, optional per-runtime configuration variants) into one comparable
//! model, computes relative-performance ratios and speedup curves, and
//! renders deterministic summaries.
//!
//! ## Pipeline
//!
//! raw duration strings -> [`duration`] parser -> [`store::ResultStore`]
//! -> [`collate`] ratio/speedup derivation -> [`ranking`] mean-ratio
//! ranking -> [`reporters`].
//!
//! Everything is synchronous and in-memory. The collection phase finishes
//! completely before derivation begins; derived fields are a second pass
//! over an otherwise immutable set of records. The [`merge`] module
//! operates directly on persisted JSON snapshots and reuses the same
//! derivation.

pub mod collate;
pub mod duration;
pub mod error;
pub mod merge;
pub mod ranking;
pub mod reporters;
pub mod store;

pub use collate::{collate, collate_with, derive_sweep, Collated, CollatedEntry, CollectSpec, RunPosition};
pub use duration::{parse_duration, Resolution, TimeUnit};
pub use error::{BenchError, Result};
pub use merge::{merge_docs, merge_files};
pub use ranking::{rank, CohortGroup, RuntimeRanking};
pub use store::{
    base_runtime_name, effective_runtime_key, friendly_name, BenchmarkSeries, ResultStore,
    ResultsDoc, RunRecord, RunResult,
};
