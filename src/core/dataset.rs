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

//! The input relations: one fact table and two dimension tables
//!
//! A [`Dataset`] owns an immutable snapshot of the three relations and
//! indexes the dimensions by key so that fact rows can be resolved with
//! left-outer-join semantics: a lookup miss is `None`, never an error,
//! and the fact row still participates in every aggregate.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

/// One order line from the sales fact table
///
/// `order_number` is the order header identifier and repeats across the
/// lines of a multi-line order; it is not unique per row. Rows with a
/// `None` order date are carried in the snapshot but excluded from all
/// date-dependent aggregations.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub order_number: i64,
    pub order_date: Option<NaiveDate>,
    pub customer_key: i64,
    pub product_key: i64,
    pub quantity: i64,
    pub sales_amount: f64,
    pub price: f64,
}

/// A row of the customer dimension, keyed by `customer_key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_key: i64,
    pub customer_number: String,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub gender: String,
    pub birthdate: Option<NaiveDate>,
}

/// A row of the product dimension, keyed by `product_key`
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub product_key: i64,
    pub product_name: String,
    pub category: String,
    pub subcategory: String,
    pub cost: f64,
}

/// An immutable snapshot of the three input relations
///
/// Construction indexes both dimensions by key. If a dimension key
/// appears twice the later row wins; fact rows are kept verbatim,
/// duplicates included.
#[derive(Debug, Clone)]
pub struct Dataset {
    sales: Vec<Sale>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    customers_by_key: FxHashMap<i64, usize>,
    products_by_key: FxHashMap<i64, usize>,
}

impl Dataset {
    pub fn new(sales: Vec<Sale>, customers: Vec<Customer>, products: Vec<Product>) -> Self {
        let customers_by_key = customers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.customer_key, i))
            .collect();
        let products_by_key = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.product_key, i))
            .collect();
        Dataset {
            sales,
            customers,
            products,
            customers_by_key,
            products_by_key,
        }
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Resolves a fact row's customer key, left-outer style
    pub fn customer(&self, customer_key: i64) -> Option<&Customer> {
        self.customers_by_key
            .get(&customer_key)
            .map(|&i| &self.customers[i])
    }

    /// Resolves a fact row's product key, left-outer style
    pub fn product(&self, product_key: i64) -> Option<&Product> {
        self.products_by_key
            .get(&product_key)
            .map(|&i| &self.products[i])
    }

    /// Fact rows with a known order date, paired with that date
    ///
    /// Every date-dependent aggregation starts from this iterator so the
    /// null-date exclusion rule is applied in exactly one place.
    pub(crate) fn dated_sales(&self) -> impl Iterator<Item = (NaiveDate, &Sale)> {
        self.sales
            .iter()
            .filter_map(|sale| sale.order_date.map(|date| (date, sale)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(order: i64, date: Option<&str>, customer: i64, product: i64) -> Sale {
        Sale {
            order_number: order,
            order_date: date.map(|d| d.parse().unwrap()),
            customer_key: customer,
            product_key: product,
            quantity: 1,
            sales_amount: 10.0,
            price: 10.0,
        }
    }

    #[test]
    fn test_dimension_lookup() {
        let dataset = Dataset::new(
            vec![],
            vec![Customer {
                customer_key: 7,
                customer_number: "CU7".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                country: "United Kingdom".into(),
                gender: "Female".into(),
                birthdate: None,
            }],
            vec![Product {
                product_key: 3,
                product_name: "Road Bike".into(),
                category: "Bikes".into(),
                subcategory: "Road".into(),
                cost: 850.0,
            }],
        );
        assert_eq!(dataset.customer(7).map(|c| c.first_name.as_str()), Some("Ada"));
        assert_eq!(dataset.product(3).map(|p| p.category.as_str()), Some("Bikes"));
        assert!(dataset.customer(8).is_none());
        assert!(dataset.product(4).is_none());
    }

    #[test]
    fn test_dated_sales_skips_null_dates() {
        let dataset = Dataset::new(
            vec![
                sale(1, Some("2021-01-10"), 1, 1),
                sale(2, None, 1, 1),
                sale(3, Some("2021-02-05"), 1, 1),
            ],
            vec![],
            vec![],
        );
        let dated: Vec<_> = dataset.dated_sales().collect();
        assert_eq!(dated.len(), 2);
        assert_eq!(dated[0].1.order_number, 1);
        assert_eq!(dated[1].1.order_number, 3);
    }

    #[test]
    fn test_duplicate_dimension_key_last_wins() {
        let mk = |key, name: &str| Product {
            product_key: key,
            product_name: name.into(),
            category: "Bikes".into(),
            subcategory: "Road".into(),
            cost: 100.0,
        };
        let dataset = Dataset::new(vec![], vec![], vec![mk(1, "Old"), mk(1, "New")]);
        assert_eq!(dataset.product(1).map(|p| p.product_name.as_str()), Some("New"));
    }
}
