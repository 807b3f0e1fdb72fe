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

//! Markdown export of the summary tables.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::collate::Collated;
use crate::error::{BenchError, Result};
use crate::ranking::CohortGroup;
use crate::store::base_runtime_name;

/// Second header column; mean ratio reads best when low.
pub const MEAN_RATIO_HEADER: &str = "Mean Ratio to Best<br>(lower is better)";

/// Project pages for the runtimes shipped with the default suite.
static RUNTIME_URLS: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("TooManyCooks", "https://github.com/tzcnt/TooManyCooks"),
        ("libfork", "https://github.com/ConorWilliams/libfork"),
        (
            "tbb",
            "https://www.intel.com/content/www/us/en/developer/tools/oneapi/onetbb.html",
        ),
        ("cppcoro", "https://github.com/andreasbuhr/cppcoro"),
        ("taskflow", "https://github.com/taskflow/taskflow"),
        ("coros", "https://github.com/mtmucha/coros"),
        ("HPX", "https://github.com/STEllAR-GROUP/hpx"),
        ("concurrencpp", "https://github.com/David-Haim/concurrencpp"),
        ("libcoro", "https://github.com/jbaldwin/libcoro"),
    ])
});

/// The built-in runtime URL mapping as an owned map, ready to be extended
/// with suite-provided entries.
pub fn default_urls() -> BTreeMap<String, String> {
    RUNTIME_URLS
        .iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
}

/// Renders a runtime cell: a `[name](url)` hyperlink when the mapping knows
/// the runtime (directly or via its base name), plain text otherwise.
pub fn runtime_label(runtime_key: &str, urls: &BTreeMap<String, String>) -> String {
    let url = urls
        .get(runtime_key)
        .or_else(|| urls.get(base_runtime_name(runtime_key)));
    match url {
        Some(url) => format!("[{runtime_key}]({url})"),
        None => runtime_key.to_string(),
    }
}

/// Renders the summary as Markdown tables, one block per cohort group,
/// blocks separated by a blank line. Rows are runtimes sorted ascending by
/// mean ratio; a runtime missing a benchmark renders `N/A`.
pub fn render_markdown(
    collated: &Collated,
    groups: &[CohortGroup],
    urls: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }

        out.push_str(&format!("| Runtime | {MEAN_RATIO_HEADER} |"));
        for bench in &group.benchmarks {
            out.push_str(&format!(" {bench} |"));
        }
        out.push('\n');

        out.push_str("| --- | --- |");
        for _ in &group.benchmarks {
            out.push_str(" --- |");
        }
        out.push('\n');

        for ranking in &group.rankings {
            out.push_str(&format!(
                "| {} | {:.2}x |",
                runtime_label(&ranking.runtime, urls),
                ranking.mean_ratio
            ));
            for bench in &group.benchmarks {
                let cell = collated
                    .entry(&ranking.runtime, bench)
                    .map(|entry| entry.raw.clone())
                    .unwrap_or_else(|| "N/A".to_string());
                out.push_str(&format!(" {cell} |"));
            }
            out.push('\n');
        }
    }

    out
}

/// Writes the Markdown summary to a file, fully overwriting it.
pub fn export_markdown(
    collated: &Collated,
    groups: &[CohortGroup],
    urls: &BTreeMap<String, String>,
    path: &Path,
) -> Result<()> {
    let md = render_markdown(collated, groups, urls);
    fs::write(path, md).map_err(|e| BenchError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collate::collate;
    use crate::ranking::rank;
    use crate::store::{ResultStore, RunRecord};

    fn sample() -> (Collated, Vec<CohortGroup>) {
        let mut store = ResultStore::new();
        for (runtime, raw) in [("libfork", "100 us"), ("tbb", "150 us")] {
            store
                .record(runtime, "fib", RunRecord::new("40", 8, raw))
                .unwrap();
        }
        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        (collated, groups)
    }

    #[test]
    fn renders_sorted_rows_with_links() {
        let (collated, groups) = sample();
        let md = render_markdown(&collated, &groups, &default_urls());

        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(
            lines[0],
            "| Runtime | Mean Ratio to Best<br>(lower is better) | fib(40) |"
        );
        assert_eq!(lines[1], "| --- | --- | --- |");
        assert_eq!(
            lines[2],
            "| [libfork](https://github.com/ConorWilliams/libfork) | 1.00x | 100 us |"
        );
        assert_eq!(
            lines[3],
            "| [tbb](https://www.intel.com/content/www/us/en/developer/tools/oneapi/onetbb.html) | 1.50x | 150 us |"
        );
    }

    #[test]
    fn rendering_is_idempotent() {
        let (collated, groups) = sample();
        let urls = default_urls();
        let first = render_markdown(&collated, &groups, &urls);
        let second = render_markdown(&collated, &groups, &urls);
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_runtime_renders_plain() {
        assert_eq!(runtime_label("mystery", &default_urls()), "mystery");
    }

    #[test]
    fn config_variant_links_via_base_name() {
        let label = runtime_label("libcoro_uring", &default_urls());
        assert_eq!(
            label,
            "[libcoro_uring](https://github.com/jbaldwin/libcoro)"
        );
    }

    #[test]
    fn missing_cell_renders_na() {
        let mut store = ResultStore::new();
        store
            .record("libfork", "fib", RunRecord::new("40", 8, "100 us"))
            .unwrap();
        store
            .record("libfork", "skynet", RunRecord::new("", 8, "900 us"))
            .unwrap();
        store
            .record("tbb", "fib", RunRecord::new("40", 8, "150 us"))
            .unwrap();

        let collated = collate(&store).unwrap();
        // Force a single table over both benchmarks to exercise the N/A
        // path that cohort grouping normally avoids.
        let group = CohortGroup {
            benchmarks: vec!["fib(40)".to_string(), "skynet".to_string()],
            rankings: rank(&collated)
                .into_iter()
                .flat_map(|g| g.rankings)
                .collect(),
        };

        let md = render_markdown(&collated, &[group], &default_urls());
        assert!(md.contains("N/A"));
    }

    #[test]
    fn groups_are_separated_by_blank_line() {
        let mut store = ResultStore::new();
        store
            .record("libfork", "fib", RunRecord::new("40", 8, "100 us"))
            .unwrap();
        store
            .record("tbb", "fib", RunRecord::new("40", 8, "150 us"))
            .unwrap();
        store
            .record("tbb", "matmul", RunRecord::new("2048", 8, "700 us"))
            .unwrap();

        let collated = collate(&store).unwrap();
        let groups = rank(&collated);
        assert_eq!(groups.len(), 2);

        let md = render_markdown(&collated, &groups, &default_urls());
        assert!(md.contains("|\n\n| Runtime |"));
    }
}
