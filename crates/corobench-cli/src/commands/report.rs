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

//! The `report` command: summary table from a persisted results file.
//!
//! The representative record per series is the last (widest) sweep point;
//! ratios and the ranking are recomputed from the raw durations, so a
//! merged or hand-edited document always reports consistently.

use corobench_core::reporters::{default_urls, export_markdown, render_markdown};
use corobench_core::{collate, rank, ResultsDoc};

use crate::cli::ReportArgs;
use crate::error::Result;

pub fn execute(args: ReportArgs) -> Result<()> {
    let doc = ResultsDoc::load(&args.input)?;
    let collated = collate(&doc.results)?;
    let groups = rank(&collated);
    let urls = default_urls();

    export_markdown(&collated, &groups, &urls, &args.output)?;
    print!("{}", render_markdown(&collated, &groups, &urls));
    Ok(())
}
