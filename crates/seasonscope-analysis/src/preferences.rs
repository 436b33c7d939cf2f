//! Regional category preferences: which states over- or under-index on a
//! category compared with other states.

use seasonscope_core::{Dispersion, SeasonError};
use seasonscope_data::Dataset;
use tracing::info;

use crate::contingency::ContingencyTable;
use crate::matrix::{Heatmap, HeatmapLabels, HeatmapMatrix};
use crate::stats::cmp_desc_undefined_last;

/// Build the state × category preference heatmap for the `top_n`
/// categories whose share varies most across states.
///
/// Each state's row holds the fraction of that state's orders going to each
/// category (computed over all categories, so the kept columns need not sum
/// to 1.0). Columns are ordered by variance, highest first; ties keep
/// alphabetical order and categories with undefined variance come last.
/// When `top_n` exceeds the number of categories every column is kept.
///
/// # Errors
///
/// Returns [`SeasonError::InvalidArgument`] if `top_n` is zero, or
/// [`SeasonError::EmptyDataset`] if no merged record has a category.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::preference_heatmap;
/// use seasonscope_core::Dispersion;
/// use seasonscope_data::{Customer, Dataset, Order};
///
/// let data = Dataset::from_parts(
///     vec![
///         Order::new(None, "2023-01-15", Some("toys".into()), "A").unwrap(),
///         Order::new(None, "2023-01-15", Some("books".into()), "B").unwrap(),
///     ],
///     vec![Customer::new("A", "SP"), Customer::new("B", "RJ")],
/// );
/// let heatmap = preference_heatmap(&data, 3, Dispersion::Sample).unwrap();
/// assert_eq!(heatmap.matrix.columns.len(), 2);
/// ```
pub fn preference_heatmap(
    data: &Dataset,
    top_n: usize,
    dispersion: Dispersion,
) -> Result<Heatmap, SeasonError> {
    if top_n == 0 {
        return Err(SeasonError::InvalidArgument(
            "top_n_categories must be at least 1".into(),
        ));
    }

    let table = ContingencyTable::from_pairs(data.records().iter().filter_map(|r| {
        r.product_category_name
            .as_deref()
            .map(|c| (r.customer_state.as_str(), c))
    }));
    if table.is_empty() {
        return Err(SeasonError::EmptyDataset);
    }

    let preferences = table.row_normalized();
    let matrix = most_variable_columns(&preferences, top_n, dispersion);

    info!(
        states = matrix.rows.len(),
        categories = preferences.columns.len(),
        kept = matrix.columns.len(),
        "selected most regionally variable categories"
    );

    Ok(Heatmap {
        labels: HeatmapLabels {
            title: "Regional Product Category Preferences".into(),
            x_label: "Product Category".into(),
            y_label: "State".into(),
            colorbar_label: None,
            rotate_x_labels: true,
        },
        matrix,
    })
}

/// Keep the `top_n` columns of `matrix` with the largest variance across rows.
pub fn most_variable_columns(
    matrix: &HeatmapMatrix,
    top_n: usize,
    dispersion: Dispersion,
) -> HeatmapMatrix {
    let variances = matrix.column_variances(dispersion);
    let mut order: Vec<usize> = (0..matrix.columns.len()).collect();
    order.sort_by(|&a, &b| cmp_desc_undefined_last(variances[a], variances[b]));
    order.truncate(top_n);
    matrix.select_columns(&order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use seasonscope_data::{Customer, Order};

    fn dataset(rows: &[(&str, &str, usize)]) -> Dataset {
        let mut orders = Vec::new();
        let mut customers = Vec::new();
        for (state, category, n) in rows {
            let customer = format!("cust-{state}");
            if !customers.iter().any(|c: &Customer| c.customer_id == customer) {
                customers.push(Customer::new(customer.clone(), *state));
            }
            for _ in 0..*n {
                orders.push(
                    Order::new(None, "2023-03-01", Some((*category).into()), customer.clone())
                        .unwrap(),
                );
            }
        }
        Dataset::from_parts(orders, customers)
    }

    fn regional() -> Dataset {
        dataset(&[
            ("SP", "beleza_saude", 5),
            ("SP", "esporte_lazer", 5),
            ("SP", "moveis_decoracao", 10),
            ("RJ", "beleza_saude", 5),
            ("RJ", "esporte_lazer", 10),
            ("RJ", "moveis_decoracao", 5),
            ("MG", "beleza_saude", 5),
            ("MG", "esporte_lazer", 5),
            ("MG", "moveis_decoracao", 5),
            ("MG", "telefonia", 5),
        ])
    }

    #[test]
    fn never_more_than_top_n_columns() {
        let heatmap = preference_heatmap(&regional(), 3, Dispersion::Sample).unwrap();
        assert_eq!(heatmap.matrix.columns.len(), 3);
        assert_eq!(heatmap.matrix.rows, vec!["MG", "RJ", "SP"]);
    }

    #[test]
    fn top_n_larger_than_categories_keeps_all() {
        let data = dataset(&[("SP", "a", 1), ("RJ", "b", 2)]);
        let heatmap = preference_heatmap(&data, 3, Dispersion::Sample).unwrap();
        let mut columns = heatmap.matrix.columns.clone();
        columns.sort();
        assert_eq!(columns, vec!["a", "b"]);
    }

    #[test]
    fn constant_share_category_is_dropped_first() {
        // beleza_saude is 25% in every state, so it has zero variance.
        let data = dataset(&[
            ("SP", "beleza_saude", 1),
            ("SP", "moveis_decoracao", 3),
            ("RJ", "beleza_saude", 1),
            ("RJ", "esporte_lazer", 3),
        ]);
        let heatmap = preference_heatmap(&data, 2, Dispersion::Sample).unwrap();
        assert!(!heatmap.matrix.columns.contains(&"beleza_saude".to_string()));
    }

    #[test]
    fn columns_ordered_by_variance() {
        let data = regional();
        let heatmap = preference_heatmap(&data, 10, Dispersion::Population).unwrap();
        let all = ContingencyTable::from_pairs(data.records().iter().map(|r| {
            (
                r.customer_state.as_str(),
                r.product_category_name.as_deref().unwrap(),
            )
        }))
        .row_normalized();
        let variances: Vec<f64> = heatmap
            .matrix
            .columns
            .iter()
            .map(|c| {
                let idx = all.column_index(c).unwrap();
                all.column_variances(Dispersion::Population)[idx].unwrap()
            })
            .collect();
        for pair in variances.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn shares_are_fractions_of_each_states_total() {
        let heatmap = preference_heatmap(&regional(), 10, Dispersion::Sample).unwrap();
        let m = &heatmap.matrix;
        for sum in m.row_sums() {
            assert!((sum - 1.0).abs() < 1e-9);
        }
        let sp = m.row_index("SP").unwrap();
        let moveis = m.column_index("moveis_decoracao").unwrap();
        assert!((m.value(sp, moveis) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let err = preference_heatmap(&regional(), 0, Dispersion::Sample).unwrap_err();
        assert!(matches!(err, SeasonError::InvalidArgument(_)));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = preference_heatmap(&Dataset::default(), 5, Dispersion::Sample).unwrap_err();
        assert!(matches!(err, SeasonError::EmptyDataset));
    }

    #[test]
    fn single_state_keeps_columns_despite_undefined_variance() {
        let data = dataset(&[("SP", "a", 1), ("SP", "b", 3)]);
        let heatmap = preference_heatmap(&data, 1, Dispersion::Sample).unwrap();
        assert_eq!(heatmap.matrix.columns, vec!["a"]);
    }

    #[test]
    fn labels_rotate_category_ticks() {
        let heatmap = preference_heatmap(&regional(), 2, Dispersion::Sample).unwrap();
        assert!(heatmap.labels.rotate_x_labels);
        assert_eq!(heatmap.labels.x_label, "Product Category");
    }
}
