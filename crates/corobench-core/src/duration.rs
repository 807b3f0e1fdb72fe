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

//! Parsing of human-readable duration strings.
//!
//! Benchmark executables report elapsed time as `"<integer> <unit>"`, e.g.
//! `"1234 us"` or `"3 ms"`. All durations for one benchmark must be reduced
//! to a single canonical unit before they can be compared; which unit that
//! is depends on the pipeline: the summary tables canonicalize to
//! microseconds, the sweep/chart pipeline to nanoseconds. The two
//! resolutions are never mixed within one computation.
//!
//! Malformed input is not repaired. An unknown unit or a non-integer
//! magnitude is a fatal error, since a silently wrong value would poison
//! every ratio computed downstream.

use crate::error::{BenchError, Result};

/// A recognized time unit in benchmark output.
///
/// `s` and `sec` both denote seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    /// Microseconds (`us`).
    Micros,
    /// Milliseconds (`ms`).
    Millis,
    /// Seconds (`s` or `sec`).
    Secs,
}

impl TimeUnit {
    /// Parses a unit token. Returns `None` for anything outside the
    /// recognized set.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "us" => Some(TimeUnit::Micros),
            "ms" => Some(TimeUnit::Millis),
            "s" | "sec" => Some(TimeUnit::Secs),
            _ => None,
        }
    }

    /// Canonical spelling used when rendering.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
            TimeUnit::Secs => "s",
        }
    }
}

/// Canonical resolution a duration is reduced to.
///
/// The summary-table pipeline uses [`Resolution::Micros`]; the sweep/chart
/// pipeline uses [`Resolution::Nanos`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// Canonicalize to microseconds.
    #[default]
    Micros,
    /// Canonicalize to nanoseconds.
    Nanos,
}

impl Resolution {
    /// Multiplier that converts a magnitude in `unit` to this resolution.
    pub fn multiplier(self, unit: TimeUnit) -> u64 {
        match (self, unit) {
            (Resolution::Micros, TimeUnit::Micros) => 1,
            (Resolution::Micros, TimeUnit::Millis) => 1_000,
            (Resolution::Micros, TimeUnit::Secs) => 1_000_000,
            (Resolution::Nanos, TimeUnit::Micros) => 1_000,
            (Resolution::Nanos, TimeUnit::Millis) => 1_000_000,
            (Resolution::Nanos, TimeUnit::Secs) => 1_000_000_000,
        }
    }
}

/// Parses a `"<integer> <unit>"` duration string into the given resolution.
///
/// # Errors
///
/// Returns [`BenchError::MalformedDuration`] when the string does not have
/// the expected shape, and [`BenchError::UnknownUnit`] when the unit token
/// is not one of `us`, `ms`, `s`, `sec`. Both are fatal to the run.
pub fn parse_duration(raw: &str, resolution: Resolution) -> Result<u64> {
    let (magnitude, unit_token) = raw
        .split_once(' ')
        .ok_or_else(|| BenchError::MalformedDuration(raw.to_string()))?;

    let magnitude: u64 = magnitude
        .parse()
        .map_err(|_| BenchError::MalformedDuration(raw.to_string()))?;

    let unit = TimeUnit::from_token(unit_token).ok_or_else(|| BenchError::UnknownUnit {
        raw: raw.to_string(),
        unit: unit_token.to_string(),
    })?;

    Ok(magnitude * resolution.multiplier(unit))
}
