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

//! Public interface: the [`Analytics`] handle
//!
//! An `Analytics` owns an immutable [`Dataset`] snapshot together with
//! a single frozen evaluation date. Age and recency metrics are always
//! computed against that one date, never re-read per row, so a run is
//! deterministic end to end and re-running any report yields identical
//! output.

use chrono::{NaiveDate, Utc};
use rayon::prelude::*;

use crate::core::{Dataset, Granularity};
use crate::reports::{
    customers, kpi, products, segments, timeseries, trend, CategoryShare, CostBandCount,
    CustomerProfile, KpiMeasure, MonthlyTrend, PeriodSales, ProductProfile, Report, ReportOutput,
    YearlyProductPerformance,
};

/// A dataset snapshot plus a frozen evaluation date
pub struct Analytics {
    dataset: Dataset,
    eval_date: NaiveDate,
}

impl Analytics {
    /// Wraps a dataset, freezing today (UTC) as the evaluation date
    pub fn new(dataset: Dataset) -> Self {
        Analytics {
            dataset,
            eval_date: Utc::now().date_naive(),
        }
    }

    /// Wraps a dataset with an explicit evaluation date
    ///
    /// Use this for reproducible runs: the same dataset and the same
    /// date always produce byte-identical reports.
    pub fn with_evaluation_date(dataset: Dataset, eval_date: NaiveDate) -> Self {
        Analytics { dataset, eval_date }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn evaluation_date(&self) -> NaiveDate {
        self.eval_date
    }

    /// Revenue/customers/quantity per period at the given granularity
    pub fn sales_over_time(&self, granularity: Granularity) -> Vec<PeriodSales> {
        timeseries::sales_over_time(&self.dataset, granularity)
    }

    /// Monthly revenue with running total and cumulative average price
    pub fn monthly_trend(&self) -> Vec<MonthlyTrend> {
        timeseries::monthly_trend(&self.dataset)
    }

    /// Year-over-year revenue per product with lag and mean comparison
    pub fn yearly_product_performance(&self) -> Vec<YearlyProductPerformance> {
        trend::yearly_product_performance(&self.dataset)
    }

    /// Revenue per category with its share of the grand total
    pub fn category_share(&self) -> Vec<CategoryShare> {
        segments::category_share(&self.dataset)
    }

    /// Product counts per cost band
    pub fn cost_bands(&self) -> Vec<CostBandCount> {
        segments::cost_bands(&self.dataset)
    }

    /// Lifetime metrics and segment per customer
    pub fn customer_profiles(&self) -> Vec<CustomerProfile> {
        customers::customer_profiles(&self.dataset, self.eval_date)
    }

    /// Lifetime metrics and segment per product
    pub fn product_profiles(&self) -> Vec<ProductProfile> {
        products::product_profiles(&self.dataset, self.eval_date)
    }

    /// The six headline scalars in fixed report order
    pub fn kpi_summary(&self) -> Vec<KpiMeasure> {
        kpi::kpi_summary(&self.dataset)
    }

    /// Runs one report by selector
    pub fn run(&self, report: Report) -> ReportOutput {
        match report {
            Report::SalesOverTime(granularity) => {
                ReportOutput::PeriodSales(self.sales_over_time(granularity))
            }
            Report::MonthlyTrend => ReportOutput::MonthlyTrend(self.monthly_trend()),
            Report::YearlyProductPerformance => {
                ReportOutput::YearlyProductPerformance(self.yearly_product_performance())
            }
            Report::CategoryShare => ReportOutput::CategoryShare(self.category_share()),
            Report::CostBands => ReportOutput::CostBands(self.cost_bands()),
            Report::CustomerProfiles => ReportOutput::CustomerProfiles(self.customer_profiles()),
            Report::ProductProfiles => ReportOutput::ProductProfiles(self.product_profiles()),
            Report::KpiSummary => ReportOutput::KpiSummary(self.kpi_summary()),
        }
    }

    /// Runs several reports in parallel over the shared snapshot
    ///
    /// Reports have no ordering dependencies on each other, so they fan
    /// out across the rayon pool; outputs come back in input order.
    pub fn run_many(&self, reports: &[Report]) -> Vec<ReportOutput> {
        reports.par_iter().map(|&report| self.run(report)).collect()
    }
}
