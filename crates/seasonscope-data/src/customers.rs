//! Customers table loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use seasonscope_core::SeasonError;
use serde::Deserialize;
use tracing::debug;

use crate::columns::{csv_reader, require_columns};

/// Columns the customers table must contain.
pub const REQUIRED_CUSTOMER_COLUMNS: &[&str] = &["customer_id", "customer_state"];

/// A customer and the state they order from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Customer {
    /// Primary key referenced by orders.
    pub customer_id: String,
    /// State code, e.g. `"SP"`.
    pub customer_state: String,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, customer_state: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            customer_state: customer_state.into(),
        }
    }
}

/// Load the customers table from a CSV file.
///
/// # Errors
///
/// Returns [`SeasonError::Io`] if the file cannot be opened,
/// [`SeasonError::MissingColumn`] naming `path` if a required column is
/// absent, or [`SeasonError::Csv`] on malformed records.
pub fn load_customers(path: &Path) -> Result<Vec<Customer>, SeasonError> {
    let file = File::open(path)?;
    let customers = read_customers_from(file, path)?;
    debug!(path = %path.display(), rows = customers.len(), "loaded customers");
    Ok(customers)
}

/// Read the customers table from any CSV source with a header row.
///
/// # Examples
///
/// ```
/// use seasonscope_data::customers::read_customers;
///
/// let csv = "customer_id,customer_zip_code_prefix,customer_state\nA,01001,SP\n";
/// let customers = read_customers(csv.as_bytes()).unwrap();
/// assert_eq!(customers[0].customer_state, "SP");
/// ```
pub fn read_customers<R: Read>(reader: R) -> Result<Vec<Customer>, SeasonError> {
    read_customers_from(reader, Path::new("<customers>"))
}

fn read_customers_from<R: Read>(reader: R, origin: &Path) -> Result<Vec<Customer>, SeasonError> {
    let mut csv_reader = csv_reader(reader);
    let headers = csv_reader.headers()?.clone();
    require_columns(&headers, REQUIRED_CUSTOMER_COLUMNS, origin)?;

    let mut customers = Vec::new();
    for result in csv_reader.deserialize::<Customer>() {
        customers.push(result?);
    }
    Ok(customers)
}
