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

//! # Salescope - In-memory sales analytics
//!
//! Salescope computes descriptive statistics, time-series rollups, and
//! rule-based segmentation over a fixed retail star schema: one sales
//! fact table and two dimensions (customers, products). Every report is
//! a pure, stateless pass over an immutable snapshot — there is no
//! ingestion, no mutation, and no runtime state beyond the snapshot and
//! a single frozen evaluation date.
//!
//! ## Reports
//!
//! - Sales over time at day/month/year granularity, with running totals
//!   and a cumulative average price at month grain
//! - Year-over-year product performance with above/below-average labels
//! - Category revenue share and product cost-band counts
//! - Customer profiles with VIP/Regular/New segmentation
//! - Product profiles with High/Mid/Low performance segmentation
//! - A fixed-order headline KPI sheet
//!
//! ## Quick Start
//!
//! ```rust
//! use salescope::{Analytics, Dataset, Report, ReportOutput, Sale};
//!
//! let sales = vec![Sale {
//!     order_number: 1,
//!     order_date: Some("2021-01-10".parse().unwrap()),
//!     customer_key: 1,
//!     product_key: 1,
//!     quantity: 2,
//!     sales_amount: 100.0,
//!     price: 50.0,
//! }];
//! let analytics = Analytics::new(Dataset::new(sales, vec![], vec![]));
//!
//! let profiles = analytics.customer_profiles();
//! assert_eq!(profiles[0].total_sales, 100.0);
//!
//! // or by selector string
//! let report: Report = "kpi-summary".parse().unwrap();
//! assert!(matches!(analytics.run(report), ReportOutput::KpiSummary(_)));
//! ```
//!
//! ## Degenerate input policy
//!
//! Reports never fail on data: fact rows with a null order date are
//! excluded from date-dependent aggregates, fact rows whose key has no
//! dimension row keep left-outer semantics (attributes become `None`),
//! and every ratio has a documented zero-divisor fallback.
//!
//! ## Modules
//!
//! - [`api`] - Public interface ([`api::Analytics`])
//! - [`core`] - Core types ([`Dataset`], [`Sale`], [`Customer`],
//!   [`Product`], [`Granularity`], [`Error`])
//! - [`reports`] - The report catalog, one module per component

pub mod api;
pub mod core;
pub mod reports;

// Re-export main types for convenience
pub use crate::core::{
    Customer, Dataset, Error, Granularity, Product, Result, Sale,
};

pub use api::Analytics;

pub use reports::{
    AgeGroup, AverageLabel, CategoryShare, ChangeLabel, CostBand, CostBandCount, CustomerProfile,
    CustomerSegment, KpiMeasure, MeasureValue, MonthlyTrend, PeriodSales, ProductProfile,
    ProductSegment, Report, ReportOutput, YearlyProductPerformance,
};
