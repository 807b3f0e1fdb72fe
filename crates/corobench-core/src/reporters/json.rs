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

//! JSON export of the results document.

use std::path::Path;

use crate::error::Result;
use crate::store::ResultsDoc;

/// Serializes the document as pretty-printed JSON with a trailing newline.
///
/// Map keys iterate sorted, so identical documents serialize to identical
/// bytes.
pub fn to_json_string(doc: &ResultsDoc) -> Result<String> {
    let mut text = serde_json::to_string_pretty(doc)?;
    text.push('\n');
    Ok(text)
}

/// Writes the document to a JSON file, fully overwriting it.
pub fn export_json(doc: &ResultsDoc, path: &Path) -> Result<()> {
    doc.save(path)
}
