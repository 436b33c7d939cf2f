//! State × season demand share for a single product category.

use seasonscope_core::SeasonError;
use seasonscope_data::Dataset;
use tracing::debug;

use crate::contingency::ContingencyTable;
use crate::matrix::{Heatmap, HeatmapLabels};

/// Build the seasonal demand heatmap for `category`.
///
/// Rows are states (sorted), columns are the seasons in which the category
/// sold anything (calendar order), and each cell is the state's share of its
/// own orders for the category that fell in that season.
///
/// # Errors
///
/// Returns [`SeasonError::EmptyCategory`] if no merged record has exactly
/// this category.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::seasonal_heatmap;
/// use seasonscope_data::{Customer, Dataset, Order};
///
/// let data = Dataset::from_parts(
///     vec![Order::new(None, "2023-01-15", Some("toys".into()), "A").unwrap()],
///     vec![Customer::new("A", "SP")],
/// );
/// let heatmap = seasonal_heatmap(&data, "toys").unwrap();
/// assert_eq!(heatmap.matrix.columns, vec!["Summer"]);
/// assert!(seasonal_heatmap(&data, "books").is_err());
/// ```
pub fn seasonal_heatmap(data: &Dataset, category: &str) -> Result<Heatmap, SeasonError> {
    let table = ContingencyTable::from_pairs(
        data.in_category(category)
            .map(|r| (r.customer_state.as_str(), r.season)),
    );

    if table.is_empty() {
        return Err(SeasonError::EmptyCategory(category.to_string()));
    }

    debug!(
        category,
        states = table.rows().len(),
        seasons = table.columns().len(),
        "built seasonal contingency table"
    );

    Ok(Heatmap {
        labels: HeatmapLabels {
            title: format!("Seasonal Demand Patterns by State: {category}"),
            x_label: "Season".into(),
            y_label: "State".into(),
            colorbar_label: Some("Relative Demand".into()),
            rotate_x_labels: false,
        },
        matrix: table.row_normalized(),
    })
}
