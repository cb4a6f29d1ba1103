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

//! Core types and definitions for Salescope
//!
//! This module contains the fundamental types used throughout the
//! analytics engine:
//!
//! - [`Dataset`] - The immutable input snapshot (fact + dimensions)
//! - [`Sale`], [`Customer`], [`Product`] - The three input relations
//! - [`Granularity`] - Time-series grouping unit
//! - [`Error`] - Error types for the selector-parsing surface

pub mod dataset;
pub mod date;
pub mod error;

// Re-export main types for convenience
pub use dataset::{Customer, Dataset, Product, Sale};
pub use date::{months_between, truncate, years_between, Granularity};
pub use error::{Error, Result};
