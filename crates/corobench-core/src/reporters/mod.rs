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

//! Report renderers for the collated results.
//!
//! Given identical input records, every renderer here produces
//! byte-identical output; the only varying field in any report is the
//! `metadata.start_time` timestamp carried inside the results document.
//! Files are written once, after all computation, with full overwrite
//! semantics.
//!
//! # Modules
//!
//! - `markdown`: summary table, one block per cohort group
//! - `csv`: the same cells, comma-delimited
//! - `json`: the persisted `{metadata, results}` document
//! - `html`: a static chart page with the JSON document spliced in

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;

pub use self::csv::{export_csv, render_csv};
pub use self::html::{export_html, render_html, DATA_PLACEHOLDER};
pub use self::json::{export_json, to_json_string};
pub use self::markdown::{default_urls, export_markdown, render_markdown, runtime_label};
