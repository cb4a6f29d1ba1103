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

//! Category revenue share and product cost-band bucketing

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::core::Dataset;

/// One category's slice of overall revenue
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// `None` groups the sales whose product key has no dimension row
    pub category: Option<String>,
    pub total_sales: f64,
    /// Share of overall revenue, in percent, rounded to one decimal
    pub sales_percentage: f64,
}

impl CategoryShare {
    /// Renders the share the way the report prints it, e.g. `"21.4%"`
    pub fn percentage_label(&self) -> String {
        format!("{:.1}%", self.sales_percentage)
    }
}

/// Product cost bands, in rule evaluation order
///
/// The band edges at 100, 500, and 1000 are inclusive on the upper
/// side, so a cost of exactly 500 lands in `From100To500` (first match
/// wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostBand {
    Below100,
    From100To500,
    From500To1000,
    Above1000,
}

impl fmt::Display for CostBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostBand::Below100 => write!(f, "Below 100"),
            CostBand::From100To500 => write!(f, "100-500"),
            CostBand::From500To1000 => write!(f, "500-1000"),
            CostBand::Above1000 => write!(f, "Above 1000"),
        }
    }
}

/// How many products fall in one cost band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostBandCount {
    pub band: CostBand,
    pub product_count: i64,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Revenue per category with its share of the grand total
///
/// Ordered by revenue descending; ties broken by category name so
/// repeated runs are byte-identical.
pub fn category_share(dataset: &Dataset) -> Vec<CategoryShare> {
    let mut groups: FxHashMap<Option<String>, f64> = FxHashMap::default();
    for (_, sale) in dataset.dated_sales() {
        let category = dataset
            .product(sale.product_key)
            .map(|p| p.category.clone());
        *groups.entry(category).or_insert(0.0) += sale.sales_amount;
    }

    let overall_sales: f64 = groups.values().sum();
    let mut rows: Vec<CategoryShare> = groups
        .into_iter()
        .map(|(category, total_sales)| CategoryShare {
            category,
            total_sales,
            sales_percentage: if overall_sales == 0.0 {
                0.0
            } else {
                round_tenth(total_sales / overall_sales * 100.0)
            },
        })
        .collect();
    rows.sort_by(|a, b| {
        b.total_sales
            .partial_cmp(&a.total_sales)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });
    rows
}

/// Classifies a product cost into its band, first match wins
pub fn cost_band(cost: f64) -> CostBand {
    if cost < 100.0 {
        CostBand::Below100
    } else if cost <= 500.0 {
        CostBand::From100To500
    } else if cost <= 1000.0 {
        CostBand::From500To1000
    } else {
        CostBand::Above1000
    }
}

const BAND_ORDER: [CostBand; 4] = [
    CostBand::Below100,
    CostBand::From100To500,
    CostBand::From500To1000,
    CostBand::Above1000,
];

/// Counts products per cost band, ordered by count descending
///
/// Empty bands are omitted; count ties keep band order.
pub fn cost_bands(dataset: &Dataset) -> Vec<CostBandCount> {
    let mut counts = [0i64; 4];
    for product in dataset.products() {
        let slot = BAND_ORDER
            .iter()
            .position(|&b| b == cost_band(product.cost))
            .unwrap_or(0);
        counts[slot] += 1;
    }

    let mut rows: Vec<CostBandCount> = BAND_ORDER
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&band, product_count)| CostBandCount {
            band,
            product_count,
        })
        .collect();
    rows.sort_by(|a, b| b.product_count.cmp(&a.product_count));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_band_rules() {
        assert_eq!(cost_band(50.0), CostBand::Below100);
        assert_eq!(cost_band(100.0), CostBand::From100To500);
        // 500 matches both written ranges; the first band wins
        assert_eq!(cost_band(500.0), CostBand::From100To500);
        assert_eq!(cost_band(501.0), CostBand::From500To1000);
        assert_eq!(cost_band(1000.0), CostBand::From500To1000);
        assert_eq!(cost_band(1500.0), CostBand::Above1000);
    }

    #[test]
    fn test_cost_band_display() {
        assert_eq!(CostBand::Below100.to_string(), "Below 100");
        assert_eq!(CostBand::From100To500.to_string(), "100-500");
        assert_eq!(CostBand::Above1000.to_string(), "Above 1000");
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(33.333), 33.3);
        assert_eq!(round_tenth(66.666), 66.7);
    }
}
