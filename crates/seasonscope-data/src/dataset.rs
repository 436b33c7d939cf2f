//! The merged, immutable order dataset.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDateTime;
use seasonscope_core::Season;
use tracing::{debug, warn};

use crate::customers::Customer;
use crate::orders::Order;

/// One order joined with its customer's state.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    /// Order identifier, if the orders table carried one.
    pub order_id: Option<String>,
    /// Parsed purchase timestamp.
    pub purchased_at: NaiveDateTime,
    /// Calendar-quarter season of the purchase.
    pub season: Season,
    /// Purchase month (1–12).
    pub month: u32,
    /// Product category; `None` when the orders table left it empty.
    pub product_category_name: Option<String>,
    /// Join key.
    pub customer_id: String,
    /// State of the ordering customer.
    pub customer_state: String,
}

/// Orders inner-joined to customers on `customer_id`.
///
/// Built once and never mutated; every analysis takes it by shared reference.
///
/// # Examples
///
/// ```
/// use seasonscope_data::{Customer, Dataset, Order};
///
/// let orders = vec![
///     Order::new(Some("1".into()), "2023-01-15", Some("toys".into()), "A").unwrap(),
///     Order::new(Some("2".into()), "2023-07-10", Some("toys".into()), "B").unwrap(),
/// ];
/// let customers = vec![Customer::new("A", "SP"), Customer::new("B", "RJ")];
/// let data = Dataset::from_parts(orders, customers);
/// assert_eq!(data.len(), 2);
/// assert_eq!(data.states(), vec!["RJ", "SP"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<MergedRecord>,
}

impl Dataset {
    /// Inner-join `orders` to `customers` on `customer_id`.
    ///
    /// Orders keep their input order. An order without a matching customer is
    /// dropped; an order whose id appears on several customer rows yields one
    /// record per match.
    pub fn from_parts(orders: Vec<Order>, customers: Vec<Customer>) -> Self {
        let mut by_id: HashMap<String, Vec<String>> = HashMap::new();
        for customer in customers {
            by_id
                .entry(customer.customer_id)
                .or_default()
                .push(customer.customer_state);
        }

        let order_count = orders.len();
        let mut unmatched = 0usize;
        let mut records = Vec::with_capacity(order_count);

        for order in orders {
            let Some(states) = by_id.get(&order.customer_id) else {
                unmatched += 1;
                continue;
            };
            for state in states {
                records.push(MergedRecord {
                    order_id: order.order_id.clone(),
                    purchased_at: order.purchased_at,
                    season: order.season,
                    month: order.month,
                    product_category_name: order.product_category_name.clone(),
                    customer_id: order.customer_id.clone(),
                    customer_state: state.clone(),
                });
            }
        }

        if unmatched > 0 {
            warn!(
                unmatched,
                total = order_count,
                "orders without a matching customer were dropped"
            );
        }
        debug!(merged = records.len(), "merged orders with customers");

        Self { records }
    }

    /// All merged records in join order.
    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose category equals `category` exactly.
    pub fn in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a MergedRecord> + 'a {
        self.records
            .iter()
            .filter(move |r| r.product_category_name.as_deref() == Some(category))
    }

    /// Distinct categories in first-seen order. Uncategorized orders are skipped.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(|r| r.product_category_name.as_deref())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Distinct customer states, sorted ascending.
    pub fn states(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|r| r.customer_state.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
