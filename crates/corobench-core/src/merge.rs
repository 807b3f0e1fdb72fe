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

//! Merging of persisted result snapshots.
//!
//! A full sweep takes hours; a single slow benchmark can be re-run alone
//! and folded into the main dataset afterwards. The union is per runtime
//! key and wholesale: the source's entry replaces the destination's entry
//! entirely. If the source covers fewer benchmarks for a runtime than the
//! destination did, the extra benchmarks are lost. This is not a deep
//! merge.
//!
//! After the union, `scaled` and `speedup` are recomputed from the raw
//! duration strings across the whole unioned dataset; derived fields in
//! either input are never trusted, since the per-benchmark minimum may
//! have shifted.

use std::path::Path;

use crate::collate::derive_sweep;
use crate::error::{BenchError, Result};
use crate::store::ResultsDoc;

/// Merges `source` into `dest` and re-derives all sweep fields.
///
/// # Errors
///
/// Returns [`BenchError::EmptyMergeDest`] when the destination holds no
/// runtimes: there is nothing to merge into, and an empty destination
/// almost certainly points at the wrong file.
pub fn merge_docs(dest: &mut ResultsDoc, source: ResultsDoc) -> Result<()> {
    if dest.results.is_empty() {
        return Err(BenchError::EmptyMergeDest);
    }

    for (runtime, benches) in source.results.into_runtimes() {
        dest.results.replace_runtime(runtime, benches);
    }

    derive_sweep(&mut dest.results)
}

/// Loads both files, merges `source_path` into `dest_path`, and rewrites
/// the destination in place.
pub fn merge_files(dest_path: &Path, source_path: &Path) -> Result<()> {
    let mut dest = ResultsDoc::load(dest_path)?;
    let source = ResultsDoc::load(source_path)?;
    merge_docs(&mut dest, source)?;
    dest.save(dest_path)
}
