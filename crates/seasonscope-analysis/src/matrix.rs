//! Normalized heatmap matrices and their chart labels.

use seasonscope_core::Dispersion;
use serde::{Deserialize, Serialize};

use crate::stats::variance;

/// A row-labelled, column-labelled matrix of demand shares.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::HeatmapMatrix;
///
/// let m = HeatmapMatrix::new(
///     vec!["SP".into()],
///     vec!["Summer".into(), "Winter".into()],
///     vec![vec![0.25, 0.75]],
/// );
/// assert_eq!(m.value(0, 1), 0.75);
/// assert_eq!(m.row_sums(), vec![1.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapMatrix {
    /// Row labels (states).
    pub rows: Vec<String>,
    /// Column labels (season labels or category names).
    pub columns: Vec<String>,
    /// `values[row][column]`, each in `0.0..=1.0`.
    pub values: Vec<Vec<f64>>,
}

impl HeatmapMatrix {
    pub fn new(rows: Vec<String>, columns: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        debug_assert_eq!(rows.len(), values.len());
        debug_assert!(values.iter().all(|r| r.len() == columns.len()));
        Self {
            rows,
            columns,
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[row][column]
    }

    pub fn row_index(&self, label: &str) -> Option<usize> {
        self.rows.iter().position(|r| r == label)
    }

    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }

    /// Sum of each row.
    pub fn row_sums(&self) -> Vec<f64> {
        self.values.iter().map(|row| row.iter().sum()).collect()
    }

    /// Variance of each column across rows.
    pub fn column_variances(&self, dispersion: Dispersion) -> Vec<Option<f64>> {
        (0..self.columns.len())
            .map(|c| {
                let column: Vec<f64> = self.values.iter().map(|row| row[c]).collect();
                variance(&column, dispersion)
            })
            .collect()
    }

    /// A new matrix holding only `indices`, in the given order.
    pub fn select_columns(&self, indices: &[usize]) -> Self {
        Self {
            rows: self.rows.clone(),
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
            values: self
                .values
                .iter()
                .map(|row| indices.iter().map(|&i| row[i]).collect())
                .collect(),
        }
    }

    /// Smallest and largest cell value, `None` for an empty matrix.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .flatten()
            .fold(None, |acc, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Titles and axis captions describing what a heatmap shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Caption beside the color bar, if one is drawn.
    pub colorbar_label: Option<String>,
    /// Rotate column tick labels (long category names).
    pub rotate_x_labels: bool,
}

/// An analysis result ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub labels: HeatmapLabels,
    pub matrix: HeatmapMatrix,
}
