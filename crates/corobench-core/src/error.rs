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

//! Error types for result collation and aggregation.
//!
//! Errors fall into two families. Fatal errors (`UnknownUnit`,
//! `MalformedDuration`, `OutOfOrderSweep`, `EmptyMergeDest`) abort the whole
//! aggregation run: they indicate the data model itself is broken and every
//! downstream computation would be built on incomparable values. Recoverable
//! errors (`ExecutionFailure`, `BuildFailure`) are caught at the collection
//! boundary, logged, and leave a gap in the report instead of blocking it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for collation operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while collating and aggregating benchmark results.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A duration string carried a unit outside the recognized set.
    ///
    /// Always fatal: continuing would mix incomparable magnitudes.
    #[error("unknown duration unit '{unit}' in '{raw}'")]
    UnknownUnit {
        /// The full duration string as read from benchmark output.
        raw: String,
        /// The unrecognized unit token.
        unit: String,
    },

    /// A duration string did not have the `"<integer> <unit>"` shape.
    #[error("malformed duration string '{0}' (expected '<integer> <unit>')")]
    MalformedDuration(String),

    /// A sweep point was appended with a thread count that does not exceed
    /// the previous point's.
    ///
    /// Series order is load-bearing: index 0 is the speedup baseline and the
    /// last element is the representative run for summary tables.
    #[error(
        "sweep for '{runtime}/{benchmark}' appended out of order: \
         {threads} threads after {last}"
    )]
    OutOfOrderSweep {
        /// Config-qualified runtime key.
        runtime: String,
        /// Benchmark name.
        benchmark: String,
        /// Thread count of the rejected record.
        threads: u32,
        /// Thread count of the last accepted record.
        last: u32,
    },

    /// A benchmark process produced no usable output.
    ///
    /// Recovered locally: the single run is dropped and the sweep continues.
    #[error("no usable output from '{runtime}/{benchmark}': {message}")]
    ExecutionFailure {
        /// Config-qualified runtime key.
        runtime: String,
        /// Benchmark name.
        benchmark: String,
        /// What went wrong with the captured output.
        message: String,
    },

    /// A runtime's build step exited non-zero.
    ///
    /// Recovered by excluding that runtime from the rest of the pipeline.
    #[error("build failed for runtime '{runtime}' (exit code {code})")]
    BuildFailure {
        /// Runtime whose build script failed.
        runtime: String,
        /// Exit code of the build script, or -1 if killed by a signal.
        code: i32,
    },

    /// The merge destination has no runtimes to merge into.
    #[error("merge destination contains no runtimes")]
    EmptyMergeDest,

    /// I/O failure with file path context.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// JSON serialization or deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writer failure.
    #[error("CSV error: {0}")]
    Csv(String),
}

impl BenchError {
    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an execution failure for a single dropped run.
    pub fn execution(
        runtime: impl Into<String>,
        benchmark: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ExecutionFailure {
            runtime: runtime.into(),
            benchmark: benchmark.into(),
            message: message.into(),
        }
    }

    /// Whether this error must abort the whole aggregation run.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            BenchError::ExecutionFailure { .. } | BenchError::BuildFailure { .. }
        )
    }
}
