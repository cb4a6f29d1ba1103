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

//! Per-customer lifetime metrics and segmentation
//!
//! Profiles are fact-driven: one profile per customer key seen in the
//! dated sales, built in a single group-then-finalize pass. Dimension
//! attributes resolve left-outer, so a sale with an unknown customer
//! key still produces a profile with `None` name/country/age.

use std::fmt;

use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{months_between, years_between, Dataset};

/// Age bands for customer demographics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Under20,
    From20To29,
    From30To39,
    From40To49,
    Above50,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::Under20 => write!(f, "Under 20"),
            AgeGroup::From20To29 => write!(f, "20-29"),
            AgeGroup::From30To39 => write!(f, "30-39"),
            AgeGroup::From40To49 => write!(f, "40-49"),
            AgeGroup::Above50 => write!(f, "50 and above"),
        }
    }
}

/// Buckets a whole-year age into its band
pub fn age_group(age: i32) -> AgeGroup {
    if age < 20 {
        AgeGroup::Under20
    } else if age <= 29 {
        AgeGroup::From20To29
    } else if age <= 39 {
        AgeGroup::From30To39
    } else if age <= 49 {
        AgeGroup::From40To49
    } else {
        AgeGroup::Above50
    }
}

/// Customer value segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSegment {
    Vip,
    Regular,
    New,
}

impl fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomerSegment::Vip => write!(f, "VIP"),
            CustomerSegment::Regular => write!(f, "Regular"),
            CustomerSegment::New => write!(f, "New"),
        }
    }
}

/// Classifies a customer by history length and spend, first match wins
///
/// The sales test is strict: exactly 5000 with a 12-month lifespan is
/// Regular, not VIP.
pub fn classify_customer(lifespan_months: i32, total_sales: f64) -> CustomerSegment {
    if lifespan_months >= 12 && total_sales > 5000.0 {
        CustomerSegment::Vip
    } else if lifespan_months >= 12 {
        CustomerSegment::Regular
    } else {
        CustomerSegment::New
    }
}

/// Lifetime metrics for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerProfile {
    pub customer_key: i64,
    pub customer_number: Option<String>,
    /// First and last name joined, when the dimension row exists
    pub name: Option<String>,
    pub country: Option<String>,
    /// Whole years at the evaluation date; `None` without a birthdate
    pub age: Option<i32>,
    pub age_group: Option<AgeGroup>,
    /// Distinct order numbers
    pub total_orders: i64,
    pub total_sales: f64,
    pub total_quantity: i64,
    /// Distinct products bought
    pub total_products: i64,
    pub last_order_date: NaiveDate,
    /// Months between the first and last order
    pub lifespan_months: i32,
    /// Months between the last order and the evaluation date
    pub recency_months: i32,
    pub segment: CustomerSegment,
    /// 0 when there are no orders
    pub avg_order_value: f64,
    /// Falls back to `total_sales` when the lifespan is 0 months
    pub avg_monthly_spend: f64,
}

struct CustomerAcc {
    orders: FxHashSet<i64>,
    products: FxHashSet<i64>,
    total_sales: f64,
    total_quantity: i64,
    first_order: NaiveDate,
    last_order: NaiveDate,
}

impl CustomerAcc {
    fn new(date: NaiveDate) -> Self {
        CustomerAcc {
            orders: FxHashSet::default(),
            products: FxHashSet::default(),
            total_sales: 0.0,
            total_quantity: 0,
            first_order: date,
            last_order: date,
        }
    }
}

/// Builds one profile per customer key, ordered by key ascending
///
/// `eval_date` is the frozen "now" for age and recency; callers must
/// capture it once per run so repeated runs are byte-identical.
pub fn customer_profiles(dataset: &Dataset, eval_date: NaiveDate) -> Vec<CustomerProfile> {
    let mut groups: FxHashMap<i64, CustomerAcc> = FxHashMap::default();
    for (date, sale) in dataset.dated_sales() {
        let acc = groups
            .entry(sale.customer_key)
            .or_insert_with(|| CustomerAcc::new(date));
        acc.orders.insert(sale.order_number);
        acc.products.insert(sale.product_key);
        acc.total_sales += sale.sales_amount;
        acc.total_quantity += sale.quantity;
        acc.first_order = acc.first_order.min(date);
        acc.last_order = acc.last_order.max(date);
    }

    let mut keys: Vec<i64> = groups.keys().copied().collect();
    keys.sort_unstable();

    let mut profiles = Vec::with_capacity(keys.len());
    for key in keys {
        let acc = match groups.remove(&key) {
            Some(acc) => acc,
            None => continue,
        };
        let customer = dataset.customer(key);
        let age = customer
            .and_then(|c| c.birthdate)
            .map(|birthdate| years_between(birthdate, eval_date));
        let lifespan_months = months_between(acc.first_order, acc.last_order);
        let total_orders = acc.orders.len() as i64;

        profiles.push(CustomerProfile {
            customer_key: key,
            customer_number: customer.map(|c| c.customer_number.clone()),
            name: customer.map(|c| format!("{} {}", c.first_name, c.last_name)),
            country: customer.map(|c| c.country.clone()),
            age,
            age_group: age.map(age_group),
            total_orders,
            total_sales: acc.total_sales,
            total_quantity: acc.total_quantity,
            total_products: acc.products.len() as i64,
            last_order_date: acc.last_order,
            lifespan_months,
            recency_months: months_between(acc.last_order, eval_date),
            segment: classify_customer(lifespan_months, acc.total_sales),
            avg_order_value: if total_orders == 0 {
                0.0
            } else {
                acc.total_sales / total_orders as f64
            },
            avg_monthly_spend: if lifespan_months == 0 {
                acc.total_sales
            } else {
                acc.total_sales / lifespan_months as f64
            },
        });
    }
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_bands() {
        assert_eq!(age_group(19), AgeGroup::Under20);
        assert_eq!(age_group(20), AgeGroup::From20To29);
        assert_eq!(age_group(29), AgeGroup::From20To29);
        assert_eq!(age_group(30), AgeGroup::From30To39);
        assert_eq!(age_group(49), AgeGroup::From40To49);
        assert_eq!(age_group(50), AgeGroup::Above50);
        assert_eq!(age_group(90), AgeGroup::Above50);
    }

    #[test]
    fn test_classify_customer() {
        assert_eq!(classify_customer(12, 5000.01), CustomerSegment::Vip);
        // sales condition is strict, 5000 exactly is Regular
        assert_eq!(classify_customer(12, 5000.0), CustomerSegment::Regular);
        assert_eq!(classify_customer(24, 100.0), CustomerSegment::Regular);
        assert_eq!(classify_customer(11, 9999.0), CustomerSegment::New);
        assert_eq!(classify_customer(0, 0.0), CustomerSegment::New);
    }

    #[test]
    fn test_segment_display() {
        assert_eq!(CustomerSegment::Vip.to_string(), "VIP");
        assert_eq!(AgeGroup::Above50.to_string(), "50 and above");
    }
}
