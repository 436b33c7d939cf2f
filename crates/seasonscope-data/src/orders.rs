//! Orders table loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use seasonscope_core::{Season, SeasonError};
use serde::Deserialize;
use tracing::debug;

use crate::columns::{csv_reader, require_columns};
use crate::timestamp::{parse_timestamp, season_and_month};

/// Columns the orders table must contain.
pub const REQUIRED_ORDER_COLUMNS: &[&str] = &[
    "order_purchase_timestamp",
    "customer_id",
    "product_category_name",
];

/// One order with its derived calendar fields.
///
/// # Examples
///
/// ```
/// use seasonscope_core::Season;
/// use seasonscope_data::Order;
///
/// let order = Order::new(Some("1".into()), "2023-01-15", Some("toys".into()), "A").unwrap();
/// assert_eq!(order.season, Season::Summer);
/// assert_eq!(order.month, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier, when the table carries an `order_id` column.
    pub order_id: Option<String>,
    /// Parsed purchase timestamp.
    pub purchased_at: NaiveDateTime,
    /// Calendar-quarter season of the purchase.
    pub season: Season,
    /// Purchase month (1–12).
    pub month: u32,
    /// Product category; `None` when the cell is empty.
    pub product_category_name: Option<String>,
    /// Foreign key into the customers table.
    pub customer_id: String,
}

impl Order {
    /// Build an order from raw field values, deriving season and month.
    ///
    /// Returns `None` if the timestamp cannot be parsed.
    pub fn new(
        order_id: Option<String>,
        timestamp: &str,
        product_category_name: Option<String>,
        customer_id: impl Into<String>,
    ) -> Option<Self> {
        let purchased_at = parse_timestamp(timestamp)?;
        let (season, month) = season_and_month(&purchased_at);
        Some(Self {
            order_id,
            purchased_at,
            season,
            month,
            product_category_name: product_category_name.filter(|c| !c.is_empty()),
            customer_id: customer_id.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OrderRow {
    #[serde(default)]
    order_id: Option<String>,
    order_purchase_timestamp: String,
    customer_id: String,
    product_category_name: Option<String>,
}

/// Load the orders table from a CSV file.
///
/// # Errors
///
/// Returns [`SeasonError::Io`] if the file cannot be opened, otherwise the
/// errors of [`read_orders`] with `path` named in
/// [`SeasonError::MissingColumn`].
pub fn load_orders(path: &Path) -> Result<Vec<Order>, SeasonError> {
    let file = File::open(path)?;
    let orders = read_orders_from(file, path)?;
    debug!(path = %path.display(), rows = orders.len(), "loaded orders");
    Ok(orders)
}

/// Read the orders table from any CSV source with a header row.
///
/// # Errors
///
/// Returns [`SeasonError::MissingColumn`] if a required column is absent,
/// [`SeasonError::Csv`] on malformed records, or
/// [`SeasonError::Timestamp`] for an unparseable purchase timestamp.
///
/// # Examples
///
/// ```
/// use seasonscope_data::orders::read_orders;
///
/// let csv = "order_id,order_purchase_timestamp,product_category_name,customer_id\n\
///            1,2023-01-15,toys,A\n";
/// let orders = read_orders(csv.as_bytes()).unwrap();
/// assert_eq!(orders.len(), 1);
/// assert_eq!(orders[0].product_category_name.as_deref(), Some("toys"));
/// ```
pub fn read_orders<R: Read>(reader: R) -> Result<Vec<Order>, SeasonError> {
    read_orders_from(reader, Path::new("<orders>"))
}

fn read_orders_from<R: Read>(reader: R, origin: &Path) -> Result<Vec<Order>, SeasonError> {
    let mut csv_reader = csv_reader(reader);
    let headers = csv_reader.headers()?.clone();
    require_columns(&headers, REQUIRED_ORDER_COLUMNS, origin)?;

    let mut orders = Vec::new();
    for (idx, result) in csv_reader.deserialize::<OrderRow>().enumerate() {
        let row = result?;
        let order = Order::new(
            row.order_id,
            &row.order_purchase_timestamp,
            row.product_category_name,
            row.customer_id,
        )
        .ok_or_else(|| SeasonError::Timestamp {
            row: idx + 1,
            value: row.order_purchase_timestamp.clone(),
        })?;
        orders.push(order);
    }

    Ok(orders)
}
