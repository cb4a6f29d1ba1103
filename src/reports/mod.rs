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

//! The report catalog
//!
//! One module per analytical component, each a pure function from the
//! immutable [`Dataset`](crate::core::Dataset) (plus, where relevant, a
//! frozen evaluation date) to an ordered sequence of records. [`Report`]
//! names them for dispatch through
//! [`Analytics::run`](crate::api::Analytics::run), and parses from
//! kebab-case selector strings.

pub mod customers;
pub mod kpi;
pub mod products;
pub mod segments;
pub mod timeseries;
pub mod trend;

use std::str::FromStr;

use crate::core::{Error, Granularity, Result};

pub use customers::{age_group, classify_customer, AgeGroup, CustomerProfile, CustomerSegment};
pub use kpi::{KpiMeasure, MeasureValue};
pub use products::{classify_product, ProductProfile, ProductSegment};
pub use segments::{cost_band, CategoryShare, CostBand, CostBandCount};
pub use timeseries::{MonthlyTrend, PeriodSales};
pub use trend::{AverageLabel, ChangeLabel, YearlyProductPerformance};

/// Selector naming one report of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    SalesOverTime(Granularity),
    MonthlyTrend,
    YearlyProductPerformance,
    CategoryShare,
    CostBands,
    CustomerProfiles,
    ProductProfiles,
    KpiSummary,
}

impl FromStr for Report {
    type Err = Error;

    /// Parses kebab-case selectors, e.g. `"customer-profiles"` or
    /// `"sales-over-time:day"`; the granularity suffix defaults to
    /// month when omitted.
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_ascii_lowercase();
        let (name, arg) = match lower.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (lower.as_str(), None),
        };
        match name {
            "sales-over-time" => {
                let granularity = match arg {
                    Some(arg) => arg.parse()?,
                    None => Granularity::Month,
                };
                Ok(Report::SalesOverTime(granularity))
            }
            "monthly-trend" => Ok(Report::MonthlyTrend),
            "yearly-product-performance" => Ok(Report::YearlyProductPerformance),
            "category-share" => Ok(Report::CategoryShare),
            "cost-bands" => Ok(Report::CostBands),
            "customer-profiles" => Ok(Report::CustomerProfiles),
            "product-profiles" => Ok(Report::ProductProfiles),
            "kpi-summary" => Ok(Report::KpiSummary),
            _ => Err(Error::UnknownReport(s.to_string())),
        }
    }
}

/// The structured result of running one [`Report`]
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutput {
    PeriodSales(Vec<PeriodSales>),
    MonthlyTrend(Vec<MonthlyTrend>),
    YearlyProductPerformance(Vec<YearlyProductPerformance>),
    CategoryShare(Vec<CategoryShare>),
    CostBands(Vec<CostBandCount>),
    CustomerProfiles(Vec<CustomerProfile>),
    ProductProfiles(Vec<ProductProfile>),
    KpiSummary(Vec<KpiMeasure>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_str() {
        assert_eq!(
            "kpi-summary".parse::<Report>().unwrap(),
            Report::KpiSummary
        );
        assert_eq!(
            "Sales-Over-Time".parse::<Report>().unwrap(),
            Report::SalesOverTime(Granularity::Month)
        );
        assert_eq!(
            "sales-over-time:day".parse::<Report>().unwrap(),
            Report::SalesOverTime(Granularity::Day)
        );
    }

    #[test]
    fn test_report_from_str_errors() {
        assert_eq!(
            "weekly-digest".parse::<Report>(),
            Err(Error::UnknownReport("weekly-digest".to_string()))
        );
        assert_eq!(
            "sales-over-time:week".parse::<Report>(),
            Err(Error::UnknownGranularity("week".to_string()))
        );
    }
}
