//! Order and customer loading for seasonal demand analysis.
//!
//! Reads the orders and customers CSV tables, parses purchase timestamps into
//! season and month fields, and inner-joins the two tables on `customer_id`
//! into an immutable [`Dataset`].

pub mod customers;
pub mod dataset;
pub mod orders;
pub mod timestamp;

mod columns;

pub use customers::Customer;
pub use dataset::{Dataset, MergedRecord};
pub use orders::Order;

use std::path::Path;

use seasonscope_core::SeasonError;

/// Load both tables from disk and merge them.
///
/// # Errors
///
/// Returns [`SeasonError::Io`] if a file cannot be opened,
/// [`SeasonError::MissingColumn`] if a required column is absent,
/// [`SeasonError::Csv`] on malformed records, or
/// [`SeasonError::Timestamp`] if a purchase timestamp cannot be parsed.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use seasonscope_data::load_dataset;
///
/// let data = load_dataset(
///     Path::new("olist_orders_dataset.csv"),
///     Path::new("olist_customers_dataset.csv"),
/// ).unwrap();
/// println!("{} merged orders", data.len());
/// ```
pub fn load_dataset(orders_path: &Path, customers_path: &Path) -> Result<Dataset, SeasonError> {
    let orders = orders::load_orders(orders_path)?;
    let customers = customers::load_customers(customers_path)?;
    Ok(Dataset::from_parts(orders, customers))
}
