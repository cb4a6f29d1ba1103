// Copyright 2025 Salescope Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for Salescope
//!
//! The analytical computations themselves never fail: missing dimension
//! rows, null order dates, and zero divisors all degrade to documented
//! sentinel values. Errors exist only at the selector-parsing surface,
//! where a caller names a report or a granularity by string.

use thiserror::Error;

/// Result type alias for Salescope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Salescope
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Report selector did not match any known report name
    #[error("unknown report '{0}'")]
    UnknownReport(String),

    /// Granularity string was not one of day, month, year
    #[error("unknown granularity '{0}', expected 'day', 'month', or 'year'")]
    UnknownGranularity(String),
}
