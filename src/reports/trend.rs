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

//! Year-over-year product performance
//!
//! Groups sales into (product, year) buckets, then walks each product's
//! years in ascending order carrying a one-slot lookback for the prior
//! year's revenue (the lag) and comparing each year against the
//! product's all-years mean. Year gaps are not filled: the "previous
//! year" is the previous year *present* for that product.

use std::fmt;

use chrono::Datelike;
use rustc_hash::FxHashMap;

use crate::core::Dataset;

/// Direction of a year-over-year change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeLabel {
    Increase,
    Decrease,
    /// Also covers the first year, where no prior year exists
    NoChange,
}

impl fmt::Display for ChangeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeLabel::Increase => write!(f, "Increase"),
            ChangeLabel::Decrease => write!(f, "Decrease"),
            ChangeLabel::NoChange => write!(f, "No Change"),
        }
    }
}

/// Position of a year's revenue relative to the product's mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AverageLabel {
    AboveAverage,
    BelowAverage,
    Average,
}

impl fmt::Display for AverageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AverageLabel::AboveAverage => write!(f, "Above Average"),
            AverageLabel::BelowAverage => write!(f, "Below Average"),
            AverageLabel::Average => write!(f, "Average"),
        }
    }
}

/// One (product, year) row of the year-over-year report
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyProductPerformance {
    pub order_year: i32,
    /// `None` when the fact row's product key has no dimension row;
    /// such sales partition together under the missing name.
    pub product_name: Option<String>,
    pub current_sales: f64,
    /// Mean of `current_sales` across all of this product's years
    pub average_sales: f64,
    pub diff_from_avg: f64,
    pub sales_result: AverageLabel,
    /// Revenue of the previous year present for this product
    pub py_sales: Option<f64>,
    pub py_diff: Option<f64>,
    pub py_result: ChangeLabel,
}

fn change_label(diff: Option<f64>) -> ChangeLabel {
    match diff {
        Some(d) if d > 0.0 => ChangeLabel::Increase,
        Some(d) if d < 0.0 => ChangeLabel::Decrease,
        _ => ChangeLabel::NoChange,
    }
}

fn average_label(diff: f64) -> AverageLabel {
    if diff > 0.0 {
        AverageLabel::AboveAverage
    } else if diff < 0.0 {
        AverageLabel::BelowAverage
    } else {
        AverageLabel::Average
    }
}

/// Builds the year-over-year report, ordered by product name then year
pub fn yearly_product_performance(dataset: &Dataset) -> Vec<YearlyProductPerformance> {
    // (product name, year) -> summed revenue
    let mut groups: FxHashMap<(Option<String>, i32), f64> = FxHashMap::default();
    for (date, sale) in dataset.dated_sales() {
        let name = dataset
            .product(sale.product_key)
            .map(|p| p.product_name.clone());
        *groups.entry((name, date.year())).or_insert(0.0) += sale.sales_amount;
    }

    // Regroup into per-product partitions with years ascending
    let mut partitions: FxHashMap<Option<String>, Vec<(i32, f64)>> = FxHashMap::default();
    for ((name, year), sales) in groups {
        partitions.entry(name).or_default().push((year, sales));
    }

    let mut names: Vec<Option<String>> = partitions.keys().cloned().collect();
    names.sort();

    let mut rows = Vec::new();
    for name in names {
        let mut years = partitions.remove(&name).unwrap_or_default();
        years.sort_by_key(|(year, _)| *year);

        let total: f64 = years.iter().map(|(_, sales)| sales).sum();
        let average_sales = total / years.len() as f64;

        let mut previous: Option<f64> = None;
        for (order_year, current_sales) in years {
            let py_diff = previous.map(|py| current_sales - py);
            let diff_from_avg = current_sales - average_sales;
            rows.push(YearlyProductPerformance {
                order_year,
                product_name: name.clone(),
                current_sales,
                average_sales,
                diff_from_avg,
                sales_result: average_label(diff_from_avg),
                py_sales: previous,
                py_diff,
                py_result: change_label(py_diff),
            });
            previous = Some(current_sales);
        }
    }
    rows
}
