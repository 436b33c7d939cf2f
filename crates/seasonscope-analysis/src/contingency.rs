//! Cross-tabulation of two categorical variables.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use crate::matrix::HeatmapMatrix;

/// Counts of observations cross-classified by a row key and a column key.
///
/// Rows and columns hold only observed keys, each sorted by the key's `Ord`.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::ContingencyTable;
///
/// let table = ContingencyTable::from_pairs([("SP", "toys"), ("SP", "books"), ("RJ", "toys")]);
/// assert_eq!(table.rows(), ["RJ", "SP"]);
/// assert_eq!(table.columns(), ["books", "toys"]);
/// assert_eq!(table.count(1, 1), 1);
/// assert_eq!(table.count(0, 0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    rows: Vec<String>,
    columns: Vec<String>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Tally `(row, column)` observations.
    pub fn from_pairs<R, C, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (R, C)>,
        R: Ord + Display,
        C: Ord + Clone + Display,
    {
        let mut cells: BTreeMap<R, BTreeMap<C, u64>> = BTreeMap::new();
        let mut column_keys: BTreeSet<C> = BTreeSet::new();

        for (row, column) in pairs {
            column_keys.insert(column.clone());
            *cells.entry(row).or_default().entry(column).or_default() += 1;
        }

        let counts = cells
            .values()
            .map(|row| {
                column_keys
                    .iter()
                    .map(|c| row.get(c).copied().unwrap_or(0))
                    .collect()
            })
            .collect();

        Self {
            rows: cells.keys().map(ToString::to_string).collect(),
            columns: column_keys.iter().map(ToString::to_string).collect(),
            counts,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Count at `(row, column)` by position.
    pub fn count(&self, row: usize, column: usize) -> u64 {
        self.counts[row][column]
    }

    /// `true` when no observation was tallied.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of each row.
    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    /// Divide each row by its total so every row sums to 1.0.
    ///
    /// Rows with a zero total are omitted.
    pub fn row_normalized(&self) -> HeatmapMatrix {
        let mut rows = Vec::with_capacity(self.rows.len());
        let mut values = Vec::with_capacity(self.rows.len());

        for (label, counts) in self.rows.iter().zip(&self.counts) {
            let total: u64 = counts.iter().sum();
            if total == 0 {
                continue;
            }
            rows.push(label.clone());
            values.push(counts.iter().map(|&c| c as f64 / total as f64).collect());
        }

        HeatmapMatrix::new(rows, self.columns.clone(), values)
    }
}
