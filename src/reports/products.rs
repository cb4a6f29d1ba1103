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

//! Per-product lifetime metrics and segmentation
//!
//! The mirror image of the customer profiler, keyed by product. The
//! average selling price is a per-line mean of `sales_amount /
//! quantity`; zero-quantity lines are excluded from that mean rather
//! than contributing a zero.

use std::fmt;

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{months_between, Dataset};

/// Revenue performance segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSegment {
    HighPerformer,
    MidRange,
    LowPerformer,
}

impl fmt::Display for ProductSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductSegment::HighPerformer => write!(f, "High-Performer"),
            ProductSegment::MidRange => write!(f, "Mid-Range"),
            ProductSegment::LowPerformer => write!(f, "Low-Performer"),
        }
    }
}

/// Classifies a product by lifetime revenue
///
/// The upper test is strict: exactly 50000 is Mid-Range. The lower
/// bound of Mid-Range is inclusive: exactly 10000 is Mid-Range.
pub fn classify_product(total_sales: f64) -> ProductSegment {
    if total_sales > 50000.0 {
        ProductSegment::HighPerformer
    } else if total_sales >= 10000.0 {
        ProductSegment::MidRange
    } else {
        ProductSegment::LowPerformer
    }
}

/// Lifetime metrics for one product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductProfile {
    pub product_key: i64,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub cost: Option<f64>,
    /// Distinct order numbers
    pub total_orders: i64,
    /// Distinct customers who bought the product
    pub total_customers: i64,
    pub total_sales: f64,
    pub total_quantity: i64,
    /// Mean per-line unit price, rounded to one decimal; 0 when every
    /// line had zero quantity
    pub avg_selling_price: f64,
    pub last_sale_date: NaiveDate,
    /// Months between the first and last sale
    pub lifespan_months: i32,
    /// Months between the last sale and the evaluation date
    pub recency_months: i32,
    pub segment: ProductSegment,
    /// 0 when there are no orders
    pub avg_order_revenue: f64,
    /// Falls back to `total_sales` when the lifespan is 0 months
    pub avg_monthly_revenue: f64,
}

struct ProductAcc {
    orders: FxHashSet<i64>,
    customers: FxHashSet<i64>,
    total_sales: f64,
    total_quantity: i64,
    unit_price_sum: f64,
    unit_price_count: i64,
    first_sale: NaiveDate,
    last_sale: NaiveDate,
}

impl ProductAcc {
    fn new(date: NaiveDate) -> Self {
        ProductAcc {
            orders: FxHashSet::default(),
            customers: FxHashSet::default(),
            total_sales: 0.0,
            total_quantity: 0,
            unit_price_sum: 0.0,
            unit_price_count: 0,
            first_sale: date,
            last_sale: date,
        }
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds one profile per product key, ordered by key ascending
pub fn product_profiles(dataset: &Dataset, eval_date: NaiveDate) -> Vec<ProductProfile> {
    let mut groups: FxHashMap<i64, ProductAcc> = FxHashMap::default();
    for (date, sale) in dataset.dated_sales() {
        let acc = groups
            .entry(sale.product_key)
            .or_insert_with(|| ProductAcc::new(date));
        acc.orders.insert(sale.order_number);
        acc.customers.insert(sale.customer_key);
        acc.total_sales += sale.sales_amount;
        acc.total_quantity += sale.quantity;
        if sale.quantity != 0 {
            acc.unit_price_sum += sale.sales_amount / sale.quantity as f64;
            acc.unit_price_count += 1;
        }
        acc.first_sale = acc.first_sale.min(date);
        acc.last_sale = acc.last_sale.max(date);
    }

    let mut keys: Vec<i64> = groups.keys().copied().collect();
    keys.sort_unstable();

    let mut profiles = Vec::with_capacity(keys.len());
    for key in keys {
        let acc = match groups.remove(&key) {
            Some(acc) => acc,
            None => continue,
        };
        let product = dataset.product(key);
        let lifespan_months = months_between(acc.first_sale, acc.last_sale);
        let total_orders = acc.orders.len() as i64;

        profiles.push(ProductProfile {
            product_key: key,
            product_name: product.map(|p| p.product_name.clone()),
            category: product.map(|p| p.category.clone()),
            subcategory: product.map(|p| p.subcategory.clone()),
            cost: product.map(|p| p.cost),
            total_orders,
            total_customers: acc.customers.len() as i64,
            total_sales: acc.total_sales,
            total_quantity: acc.total_quantity,
            avg_selling_price: if acc.unit_price_count == 0 {
                0.0
            } else {
                round_tenth(acc.unit_price_sum / acc.unit_price_count as f64)
            },
            last_sale_date: acc.last_sale,
            lifespan_months,
            recency_months: months_between(acc.last_sale, eval_date),
            segment: classify_product(acc.total_sales),
            avg_order_revenue: if total_orders == 0 {
                0.0
            } else {
                acc.total_sales / total_orders as f64
            },
            avg_monthly_revenue: if lifespan_months == 0 {
                acc.total_sales
            } else {
                acc.total_sales / lifespan_months as f64
            },
        });
    }
    profiles
}
