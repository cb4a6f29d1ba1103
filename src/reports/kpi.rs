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

//! Global KPI sheet: the headline scalars flattened into a fixed-order
//! name/value list

use std::fmt;

use rustc_hash::FxHashSet;

use crate::core::Dataset;

/// A scalar KPI value, integer or float depending on the measure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureValue {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for MeasureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureValue::Integer(i) => write!(f, "{}", i),
            MeasureValue::Float(v) => write!(f, "{:.2}", v),
        }
    }
}

/// One row of the KPI sheet
#[derive(Debug, Clone, PartialEq)]
pub struct KpiMeasure {
    pub name: &'static str,
    pub value: MeasureValue,
}

/// Computes the six headline measures in their fixed report order
///
/// Order and transaction scalars are taken over fact rows with a known
/// order date; the product and customer counts are dimension row
/// counts. The average price is 0 on an empty fact table.
pub fn kpi_summary(dataset: &Dataset) -> Vec<KpiMeasure> {
    let mut total_quantity = 0i64;
    let mut total_sales = 0.0f64;
    let mut price_sum = 0.0f64;
    let mut line_count = 0i64;
    let mut orders: FxHashSet<i64> = FxHashSet::default();

    for (_, sale) in dataset.dated_sales() {
        total_quantity += sale.quantity;
        total_sales += sale.sales_amount;
        price_sum += sale.price;
        line_count += 1;
        orders.insert(sale.order_number);
    }

    let avg_price = if line_count == 0 {
        0.0
    } else {
        price_sum / line_count as f64
    };

    vec![
        KpiMeasure {
            name: "Total Quantity",
            value: MeasureValue::Integer(total_quantity),
        },
        KpiMeasure {
            name: "Total Sales",
            value: MeasureValue::Float(total_sales),
        },
        KpiMeasure {
            name: "Average Price",
            value: MeasureValue::Float(avg_price),
        },
        KpiMeasure {
            name: "Total Orders",
            value: MeasureValue::Integer(orders.len() as i64),
        },
        KpiMeasure {
            name: "Total Products",
            value: MeasureValue::Integer(dataset.products().len() as i64),
        },
        KpiMeasure {
            name: "Total Customers",
            value: MeasureValue::Integer(dataset.customers().len() as i64),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_value_display() {
        assert_eq!(MeasureValue::Integer(42).to_string(), "42");
        assert_eq!(MeasureValue::Float(19.5).to_string(), "19.50");
    }

    #[test]
    fn test_empty_dataset_yields_zero_measures() {
        let dataset = Dataset::new(vec![], vec![], vec![]);
        let measures = kpi_summary(&dataset);
        assert_eq!(measures.len(), 6);
        assert_eq!(measures[0].value, MeasureValue::Integer(0));
        assert_eq!(measures[2].value, MeasureValue::Float(0.0));
    }
}
