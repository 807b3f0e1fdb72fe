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

//! Structured error types for the harness CLI.

use std::io;
use std::path::PathBuf;

use corobench_core::BenchError;
use thiserror::Error;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user by the CLI.
///
/// Recoverable collection failures never reach this type; they are logged
/// and skipped at the collection boundary. Anything that does reach it
/// terminates the process with a non-zero exit.
#[derive(Error, Debug)]
pub enum CliError {
    /// A fatal error from the collation engine.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// I/O failure with file path context.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// The suite configuration file could not be parsed.
    #[error("invalid suite configuration '{path}': {message}")]
    Suite {
        /// The configuration file path.
        path: PathBuf,
        /// What was wrong with it.
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a suite configuration error.
    pub fn suite(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Suite {
            path: path.into(),
            message: message.into(),
        }
    }
}
