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

//! The `merge` command: fold one results file into another.

use corobench_core::merge_files;
use tracing::info;

use crate::cli::MergeArgs;
use crate::error::Result;

pub fn execute(args: MergeArgs) -> Result<()> {
    merge_files(&args.dest, &args.source)?;
    info!(
        "merged {} into {}",
        args.source.display(),
        args.dest.display()
    );
    Ok(())
}
