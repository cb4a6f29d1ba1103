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

//! Time-Series Aggregator Tests
//!
//! Rollup granularities, period ordering, running-total monotonicity,
//! and the cumulative (not windowed) moving average.

use chrono::NaiveDate;
use salescope::{Analytics, Dataset, Granularity, Sale};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn sale(order: i64, day: &str, amount: f64, price: f64) -> Sale {
    Sale {
        order_number: order,
        order_date: Some(day.parse().unwrap()),
        customer_key: order,
        product_key: 1,
        quantity: 1,
        sales_amount: amount,
        price,
    }
}

/// Daily granularity keeps one row per calendar day, ordered ascending
#[test]
fn test_daily_rollup_ordered() {
    let dataset = Dataset::new(
        vec![
            sale(3, "2021-02-05", 30.0, 30.0),
            sale(1, "2021-01-10", 10.0, 10.0),
            sale(2, "2021-01-10", 20.0, 20.0),
        ],
        vec![],
        vec![],
    );
    let analytics = Analytics::with_evaluation_date(dataset, date("2021-06-01"));
    let rows = analytics.sales_over_time(Granularity::Day);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].period, date("2021-01-10"));
    assert_eq!(rows[0].total_sales, 30.0);
    assert_eq!(rows[0].total_customers, 2);
    assert_eq!(rows[1].period, date("2021-02-05"));
}

/// Periods are keyed on the first day of month/year
#[test]
fn test_period_truncation() {
    let dataset = Dataset::new(vec![sale(1, "2021-07-19", 10.0, 10.0)], vec![], vec![]);
    let analytics = Analytics::with_evaluation_date(dataset, date("2021-12-01"));

    let monthly = analytics.sales_over_time(Granularity::Month);
    assert_eq!(monthly[0].period, date("2021-07-01"));

    let yearly = analytics.sales_over_time(Granularity::Year);
    assert_eq!(yearly[0].period, date("2021-01-01"));
}

/// Running total never decreases while amounts are non-negative
#[test]
fn test_running_total_non_decreasing() {
    let dataset = Dataset::new(
        vec![
            sale(1, "2021-01-10", 100.0, 10.0),
            sale(2, "2021-02-10", 0.0, 20.0),
            sale(3, "2021-03-10", 55.5, 30.0),
            sale(4, "2021-05-10", 12.25, 40.0),
        ],
        vec![],
        vec![],
    );
    let analytics = Analytics::with_evaluation_date(dataset, date("2021-12-01"));
    let rows = analytics.monthly_trend();
    assert_eq!(rows.len(), 4);
    for pair in rows.windows(2) {
        assert!(pair[1].running_total_sales >= pair[0].running_total_sales);
    }
    assert_eq!(rows[3].running_total_sales, 167.75);
}

/// The moving average is cumulative over every month seen so far
#[test]
fn test_moving_average_is_cumulative() {
    let dataset = Dataset::new(
        vec![
            sale(1, "2021-01-10", 10.0, 10.0),
            sale(2, "2021-02-10", 10.0, 20.0),
            sale(3, "2021-03-10", 10.0, 60.0),
        ],
        vec![],
        vec![],
    );
    let analytics = Analytics::with_evaluation_date(dataset, date("2021-12-01"));
    let rows = analytics.monthly_trend();
    assert_eq!(rows[0].moving_avg_price, 10.0);
    assert_eq!(rows[1].moving_avg_price, 15.0);
    // (10 + 20 + 60) / 3, not a 2-month window
    assert_eq!(rows[2].moving_avg_price, 30.0);
}

/// An empty fact table produces empty rollups, not an error
#[test]
fn test_empty_dataset() {
    let dataset = Dataset::new(vec![], vec![], vec![]);
    let analytics = Analytics::with_evaluation_date(dataset, date("2021-12-01"));
    assert!(analytics.sales_over_time(Granularity::Month).is_empty());
    assert!(analytics.monthly_trend().is_empty());
}
