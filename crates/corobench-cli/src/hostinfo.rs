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

//! Best-effort host metadata probes.
//!
//! Every probe returns `Option<String>`: an unavailable tool, a missing
//! file, or an unexpected format is the `None` outcome, rendered with the
//! documented [`UNKNOWN`] fallback. The collected map is attached to the
//! results document as opaque pass-through; nothing downstream parses it.
//!
//! TODO: lscpu is Linux-only; Darwin would need `sysctl machdep.cpu`.

use std::collections::BTreeMap;
use std::process::Command;

use crate::suite::SuiteConfig;

/// Fallback value for a probe that produced nothing.
pub const UNKNOWN: &str = "unknown";

fn shell(cmd: &str) -> Option<String> {
    let output = Command::new("sh").arg("-c").arg(cmd).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).into_owned();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn lscpu_field(marker: &str) -> Option<String> {
    let text = shell("lscpu")?;
    text.lines()
        .find(|line| line.contains(marker))
        .and_then(|line| line.split(':').nth(1))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// CPU model name.
pub fn probe_cpu() -> Option<String> {
    lscpu_field("Model name:")
}

/// Physical core count per socket.
pub fn probe_cores() -> Option<String> {
    lscpu_field("per socket:")
}

/// Kernel version string.
pub fn probe_kernel() -> Option<String> {
    shell("uname -v").map(|text| text.trim().to_string())
}

/// Compiler identity, read from the first runtime whose build directory
/// carries a `compile_commands.json`.
pub fn probe_compiler(suite: &SuiteConfig) -> Option<String> {
    for runtime in &suite.runtimes {
        let ccj = suite
            .bench_root
            .join(&runtime.name)
            .join("build")
            .join("compile_commands.json");
        let Ok(text) = std::fs::read_to_string(&ccj) else {
            continue;
        };
        let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) else {
            continue;
        };
        let Some(command) = value
            .get(0)
            .and_then(|entry| entry.get("command"))
            .and_then(|command| command.as_str())
        else {
            continue;
        };
        let Some(compiler_bin) = command.split_whitespace().next() else {
            continue;
        };
        let Some(version) = shell(&format!("{compiler_bin} --version")) else {
            continue;
        };
        if let Some(line) = version.lines().next() {
            return Some(line.trim().to_string());
        }
    }
    None
}

/// Runs every probe and fills gaps with [`UNKNOWN`].
pub fn collect_metadata(suite: &SuiteConfig) -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "cpu".to_string(),
            probe_cpu().unwrap_or_else(|| UNKNOWN.to_string()),
        ),
        (
            "cores".to_string(),
            probe_cores().unwrap_or_else(|| UNKNOWN.to_string()),
        ),
        (
            "kernel".to_string(),
            probe_kernel().unwrap_or_else(|| UNKNOWN.to_string()),
        ),
        (
            "compiler".to_string(),
            probe_compiler(suite).unwrap_or_else(|| UNKNOWN.to_string()),
        ),
    ])
}
