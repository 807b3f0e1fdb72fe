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

//! HTML export: the results document spliced into a static chart page.
//!
//! The template is a self-contained page that renders speedup curves and
//! ratio bars offline. The JSON document is substituted verbatim at a
//! single placeholder token; no other transformation happens.

use std::fs;
use std::path::Path;

use crate::error::{BenchError, Result};
use crate::reporters::json::to_json_string;
use crate::store::ResultsDoc;

static TEMPLATE: &str = include_str!("../../templates/results.html");

/// Literal token in the template replaced by the JSON document.
pub const DATA_PLACEHOLDER: &str = "__COROBENCH_DATA__";

/// Renders the chart page with the document's JSON embedded.
pub fn render_html(doc: &ResultsDoc) -> Result<String> {
    let json = to_json_string(doc)?;
    Ok(TEMPLATE.replacen(DATA_PLACEHOLDER, json.trim_end(), 1))
}

/// Writes the chart page to a file, fully overwriting it.
pub fn export_html(doc: &ResultsDoc, path: &Path) -> Result<()> {
    let html = render_html(doc)?;
    fs::write(path, html).map_err(|e| BenchError::io(path, e))
}
