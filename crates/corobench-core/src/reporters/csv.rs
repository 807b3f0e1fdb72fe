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

//! CSV export of the summary tables.
//!
//! Same cells as the Markdown renderer, minus the separator row. Cohort
//! groups become consecutive blocks separated by a blank line.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::collate::Collated;
use crate::error::{BenchError, Result};
use crate::ranking::CohortGroup;
use crate::reporters::markdown::{runtime_label, MEAN_RATIO_HEADER};

fn render_group(
    collated: &Collated,
    group: &CohortGroup,
    urls: &BTreeMap<String, String>,
) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Runtime".to_string(), MEAN_RATIO_HEADER.to_string()];
    header.extend(group.benchmarks.iter().cloned());
    writer
        .write_record(&header)
        .map_err(|e| BenchError::Csv(e.to_string()))?;

    for ranking in &group.rankings {
        let mut row = vec![
            runtime_label(&ranking.runtime, urls),
            format!("{:.2}x", ranking.mean_ratio),
        ];
        for bench in &group.benchmarks {
            let cell = collated
                .entry(&ranking.runtime, bench)
                .map(|entry| entry.raw.clone())
                .unwrap_or_else(|| "N/A".to_string());
            row.push(cell);
        }
        writer
            .write_record(&row)
            .map_err(|e| BenchError::Csv(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BenchError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| BenchError::Csv(e.to_string()))
}

/// Renders the summary as CSV, one block per cohort group.
pub fn render_csv(
    collated: &Collated,
    groups: &[CohortGroup],
    urls: &BTreeMap<String, String>,
) -> Result<String> {
    let blocks: Vec<String> = groups
        .iter()
        .map(|group| render_group(collated, group, urls))
        .collect::<Result<_>>()?;
    Ok(blocks.join("\n"))
}

/// Writes the CSV summary to a file, fully overwriting it.
pub fn export_csv(
    collated: &Collated,
    groups: &[CohortGroup],
    urls: &BTreeMap<String, String>,
    path: &Path,
) -> Result<()> {
    let csv = render_csv(collated, groups, urls)?;
    fs::write(path, csv).map_err(|e| BenchError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::collate;
    use crate::ranking::rank;
    use crate::reporters::markdown::default_urls;
    use crate::store::{ResultStore, RunRecord};

    #[test]
    fn renders_header_and_rows() {
        let mut store = ResultStore::new();
        store
            .record("libfork", "fib", RunRecord::new("40", 8, "100 us"))
            .unwrap();
        store
            .record("tbb", "fib", RunRecord::new("40", 8, "150 us"))
            .unwrap();

        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        let out = render_csv(&collated, &groups, &default_urls()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Runtime,Mean Ratio to Best<br>(lower is better),fib(40)"
        );
        assert!(lines[1].starts_with("[libfork]"));
        assert!(lines[1].ends_with("1.00x,100 us"));
        assert!(lines[2].ends_with("1.50x,150 us"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let mut store = ResultStore::new();
        store
            .record("a", "skynet", RunRecord::new("", 8, "300 us"))
            .unwrap();
        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        let urls = default_urls();

        assert_eq!(
            render_csv(&collated, &groups, &urls).unwrap(),
            render_csv(&collated, &groups, &urls).unwrap()
        );
    }
}
