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

//! End-to-end tests for the `corobench` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn corobench() -> Command {
    Command::cargo_bin("corobench").unwrap()
}

fn write_results(path: &Path, results_json: &str) {
    let doc = format!("{{\"metadata\": {{}}, \"results\": {results_json}}}");
    std::fs::write(path, doc).unwrap();
}

#[test]
fn merge_requires_exactly_two_paths() {
    corobench()
        .args(["merge", "only-one.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    corobench()
        .args(["merge", "a.json", "b.json", "c.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn merge_unions_and_rederives() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("dest.json");
    let source = dir.path().join("source.json");

    write_results(
        &dest,
        r#"{"alpha": {"fib": [{"params": "40", "threads": 8, "result": {"duration": "100 us"}}]}}"#,
    );
    write_results(
        &source,
        r#"{"beta": {"fib": [{"params": "40", "threads": 8, "result": {"duration": "50 us"}}]}}"#,
    );

    corobench()
        .args(["merge"])
        .arg(&dest)
        .arg(&source)
        .assert()
        .success();

    let merged = std::fs::read_to_string(&dest).unwrap();
    let value: serde_json::Value = serde_json::from_str(&merged).unwrap();
    let alpha_run = &value["results"]["alpha"]["fib"][0]["result"];
    let beta_run = &value["results"]["beta"]["fib"][0]["result"];
    assert_eq!(alpha_run["scaled"], 2.0);
    assert_eq!(beta_run["scaled"], 1.0);
}

#[test]
fn merge_overwrite_is_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("dest.json");
    let source = dir.path().join("source.json");

    write_results(
        &dest,
        r#"{"x": {
            "fib": [{"params": "40", "threads": 8, "result": {"duration": "100 us"}}],
            "skynet": [{"params": "", "threads": 8, "result": {"duration": "200 us"}}]
        }}"#,
    );
    write_results(
        &source,
        r#"{"x": {"fib": [{"params": "40", "threads": 8, "result": {"duration": "90 us"}}]}}"#,
    );

    corobench()
        .args(["merge"])
        .arg(&dest)
        .arg(&source)
        .assert()
        .success();

    let merged = std::fs::read_to_string(&dest).unwrap();
    let value: serde_json::Value = serde_json::from_str(&merged).unwrap();
    // The whole runtime entry was replaced: skynet is gone.
    assert!(value["results"]["x"]["skynet"].is_null());
    assert_eq!(
        value["results"]["x"]["fib"][0]["result"]["duration"],
        "90 us"
    );
}

#[test]
fn merge_into_empty_destination_fails() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("dest.json");
    let source = dir.path().join("source.json");

    write_results(&dest, "{}");
    write_results(
        &source,
        r#"{"beta": {"fib": [{"params": "40", "threads": 8, "result": {"duration": "50 us"}}]}}"#,
    );

    corobench()
        .args(["merge"])
        .arg(&dest)
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no runtimes"));
}

#[test]
fn report_renders_ranked_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("RESULTS.json");
    let output = dir.path().join("RESULTS.md");

    write_results(
        &input,
        r#"{
            "libfork": {"fib": [
                {"params": "40", "threads": 1, "result": {"duration": "400 us"}},
                {"params": "40", "threads": 8, "result": {"duration": "100 us"}}
            ]},
            "tbb": {"fib": [
                {"params": "40", "threads": 1, "result": {"duration": "500 us"}},
                {"params": "40", "threads": 8, "result": {"duration": "150 us"}}
            ]}
        }"#,
    );

    corobench()
        .args(["report"])
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("| Runtime |"))
        .stdout(predicate::str::contains("fib(40)"))
        .stdout(predicate::str::contains("1.00x"));

    let md = std::fs::read_to_string(&output).unwrap();
    // Representative run is the widest sweep point; libfork ranks first.
    let libfork_line = md.lines().find(|l| l.contains("libfork")).unwrap();
    assert!(libfork_line.contains("1.00x"));
    assert!(libfork_line.contains("100 us"));
    let tbb_line = md.lines().find(|l| l.contains("tbb")).unwrap();
    assert!(tbb_line.contains("1.50x"));
}

#[test]
fn report_rejects_unknown_units() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("RESULTS.json");

    write_results(
        &input,
        r#"{"alpha": {"fib": [{"params": "", "threads": 1, "result": {"duration": "5 minutes"}}]}}"#,
    );

    corobench()
        .args(["report"])
        .arg(&input)
        .arg(dir.path().join("out.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown duration unit"));
}

#[test]
fn report_output_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("RESULTS.json");

    write_results(
        &input,
        r#"{"alpha": {"skynet": [{"params": "", "threads": 8, "result": {"duration": "300 us"}}]}}"#,
    );

    let mut outputs = Vec::new();
    for name in ["a.md", "b.md"] {
        let out = dir.path().join(name);
        corobench()
            .args(["report"])
            .arg(&input)
            .arg(&out)
            .assert()
            .success();
        outputs.push(std::fs::read_to_string(&out).unwrap());
    }
    assert_eq!(outputs[0], outputs[1]);
}
