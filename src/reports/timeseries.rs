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

//! Time-series rollups over the sales fact table
//!
//! Two entry points:
//! - [`sales_over_time`] - revenue/customers/quantity per period at a
//!   caller-chosen granularity
//! - [`monthly_trend`] - monthly revenue with a running total and a
//!   cumulative (not windowed) average of the per-month mean price
//!
//! Running aggregates are computed sort-then-scan: group into a map,
//! sort the periods ascending, then a single forward pass carrying the
//! accumulators.

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{truncate, Dataset, Granularity};

/// One period of the [`sales_over_time`] rollup
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodSales {
    /// First day of the period
    pub period: NaiveDate,
    pub total_sales: f64,
    /// Distinct customers active in the period
    pub total_customers: i64,
    pub total_quantity: i64,
}

/// One month of the [`monthly_trend`] report
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTrend {
    /// First day of the month
    pub period: NaiveDate,
    pub total_sales: f64,
    /// Cumulative sum of `total_sales` over all months up to this one
    pub running_total_sales: f64,
    /// Mean line price within the month
    pub avg_price: f64,
    /// Cumulative mean of `avg_price` over all months up to this one
    pub moving_avg_price: f64,
}

#[derive(Default)]
struct PeriodAcc {
    total_sales: f64,
    customers: FxHashSet<i64>,
    total_quantity: i64,
}

/// Rolls the fact table up into one row per period, ordered ascending
///
/// Rows with a null order date are excluded before grouping.
pub fn sales_over_time(dataset: &Dataset, granularity: Granularity) -> Vec<PeriodSales> {
    let mut groups: FxHashMap<NaiveDate, PeriodAcc> = FxHashMap::default();
    for (date, sale) in dataset.dated_sales() {
        let acc = groups.entry(truncate(date, granularity)).or_default();
        acc.total_sales += sale.sales_amount;
        acc.customers.insert(sale.customer_key);
        acc.total_quantity += sale.quantity;
    }

    let mut rows: Vec<PeriodSales> = groups
        .into_iter()
        .map(|(period, acc)| PeriodSales {
            period,
            total_sales: acc.total_sales,
            total_customers: acc.customers.len() as i64,
            total_quantity: acc.total_quantity,
        })
        .collect();
    rows.sort_by_key(|row| row.period);
    rows
}

#[derive(Default)]
struct MonthAcc {
    total_sales: f64,
    price_sum: f64,
    line_count: i64,
}

/// Monthly revenue with running total and cumulative average price
pub fn monthly_trend(dataset: &Dataset) -> Vec<MonthlyTrend> {
    let mut groups: FxHashMap<NaiveDate, MonthAcc> = FxHashMap::default();
    for (date, sale) in dataset.dated_sales() {
        let acc = groups.entry(truncate(date, Granularity::Month)).or_default();
        acc.total_sales += sale.sales_amount;
        acc.price_sum += sale.price;
        acc.line_count += 1;
    }

    let mut months: Vec<(NaiveDate, MonthAcc)> = groups.into_iter().collect();
    months.sort_by_key(|(period, _)| *period);

    let mut running_total = 0.0;
    let mut avg_price_sum = 0.0;
    let mut rows = Vec::with_capacity(months.len());
    for (index, (period, acc)) in months.into_iter().enumerate() {
        // line_count is at least 1 for any group that exists
        let avg_price = acc.price_sum / acc.line_count as f64;
        running_total += acc.total_sales;
        avg_price_sum += avg_price;
        rows.push(MonthlyTrend {
            period,
            total_sales: acc.total_sales,
            running_total_sales: running_total,
            avg_price,
            moving_avg_price: avg_price_sum / (index + 1) as f64,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Sale;

    fn sale(order: i64, date: &str, amount: f64, price: f64) -> Sale {
        Sale {
            order_number: order,
            order_date: Some(date.parse().unwrap()),
            customer_key: order,
            product_key: 1,
            quantity: 1,
            sales_amount: amount,
            price,
        }
    }

    #[test]
    fn test_yearly_rollup_groups_across_months() {
        let dataset = Dataset::new(
            vec![
                sale(1, "2021-01-10", 100.0, 100.0),
                sale(2, "2021-06-20", 50.0, 50.0),
                sale(3, "2022-03-05", 75.0, 75.0),
            ],
            vec![],
            vec![],
        );
        let rows = sales_over_time(&dataset, Granularity::Year);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2021-01-01".parse().unwrap());
        assert_eq!(rows[0].total_sales, 150.0);
        assert_eq!(rows[0].total_customers, 2);
        assert_eq!(rows[1].total_sales, 75.0);
    }

    #[test]
    fn test_monthly_trend_running_total() {
        let dataset = Dataset::new(
            vec![
                sale(1, "2021-01-10", 100.0, 10.0),
                sale(2, "2021-01-20", 100.0, 30.0),
                sale(3, "2021-02-05", 50.0, 40.0),
            ],
            vec![],
            vec![],
        );
        let rows = monthly_trend(&dataset);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total_sales, 200.0);
        assert_eq!(rows[0].running_total_sales, 200.0);
        assert_eq!(rows[0].avg_price, 20.0);
        assert_eq!(rows[0].moving_avg_price, 20.0);
        assert_eq!(rows[1].running_total_sales, 250.0);
        assert_eq!(rows[1].avg_price, 40.0);
        // cumulative mean of 20 and 40
        assert_eq!(rows[1].moving_avg_price, 30.0);
    }

    #[test]
    fn test_null_dates_excluded() {
        let mut undated = sale(9, "2021-01-01", 999.0, 999.0);
        undated.order_date = None;
        let dataset = Dataset::new(
            vec![sale(1, "2021-01-10", 100.0, 100.0), undated],
            vec![],
            vec![],
        );
        let rows = sales_over_time(&dataset, Granularity::Month);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_sales, 100.0);
    }
}
