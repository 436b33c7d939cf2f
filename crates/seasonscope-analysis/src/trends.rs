//! Categories ranked by how strongly their demand varies across seasons.

use seasonscope_core::{Dispersion, Season};
use seasonscope_data::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::stats::{cmp_desc_undefined_last, coefficient_of_variation};

/// Seasonal variability of one product category.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::VariationScore;
///
/// let s = VariationScore {
///     category: "toys".into(),
///     season_counts: [0, 0, 0, 40],
///     score: Some(2.0),
/// };
/// assert_eq!(s.total_orders(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationScore {
    /// Product category name.
    pub category: String,
    /// Orders per season, indexed by [`Season::index`].
    pub season_counts: [u64; 4],
    /// Coefficient of variation of `season_counts`; `None` when undefined.
    pub score: Option<f64>,
}

impl VariationScore {
    /// Score a category from its per-season order counts.
    pub fn from_counts(
        category: impl Into<String>,
        season_counts: [u64; 4],
        dispersion: Dispersion,
    ) -> Self {
        let values = season_counts.map(|c| c as f64);
        Self {
            category: category.into(),
            season_counts,
            score: coefficient_of_variation(&values, dispersion),
        }
    }

    pub fn total_orders(&self) -> u64 {
        self.season_counts.iter().sum()
    }

    /// The season with the most orders (earliest on ties).
    pub fn peak_season(&self) -> Season {
        let mut best = 0;
        for (i, &count) in self.season_counts.iter().enumerate() {
            if count > self.season_counts[best] {
                best = i;
            }
        }
        Season::ALL[best]
    }
}

/// Rank every category by the coefficient of variation of its per-season
/// order counts, highest first.
///
/// All four seasons participate, so a season without orders counts as zero.
/// Ties keep the order in which categories first appear in the dataset and
/// undefined scores sort last. Uncategorized orders are ignored.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::seasonal_trends;
/// use seasonscope_core::Dispersion;
/// use seasonscope_data::{Customer, Dataset, Order};
///
/// let orders = ["2023-01-01", "2023-04-01", "2023-07-01", "2023-10-01"]
///     .iter()
///     .map(|ts| Order::new(None, ts, Some("flat".into()), "A").unwrap())
///     .chain(std::iter::once(
///         Order::new(None, "2023-12-24", Some("xmas".into()), "A").unwrap(),
///     ))
///     .collect();
/// let data = Dataset::from_parts(orders, vec![Customer::new("A", "SP")]);
///
/// let ranked = seasonal_trends(&data, Dispersion::Sample);
/// assert_eq!(ranked[0].category, "xmas");
/// assert_eq!(ranked[1].score, Some(0.0));
/// ```
pub fn seasonal_trends(data: &Dataset, dispersion: Dispersion) -> Vec<VariationScore> {
    let categories = data.categories();
    let mut counts: Vec<[u64; 4]> = vec![[0; 4]; categories.len()];

    let position: std::collections::HashMap<&str, usize> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (*c, i))
        .collect();

    for record in data.records() {
        let Some(category) = record.product_category_name.as_deref() else {
            continue;
        };
        if let Some(&i) = position.get(category) {
            counts[i][record.season.index()] += 1;
        }
    }

    let scores = categories
        .iter()
        .zip(counts)
        .map(|(category, season_counts)| {
            VariationScore::from_counts(*category, season_counts, dispersion)
        })
        .collect();

    let ranked = rank_by_variation(scores);
    debug!(categories = ranked.len(), %dispersion, "ranked seasonal variation");
    ranked
}

/// Stable sort by score, highest first, undefined last.
pub fn rank_by_variation(mut scores: Vec<VariationScore>) -> Vec<VariationScore> {
    scores.sort_by(|a, b| cmp_desc_undefined_last(a.score, b.score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use seasonscope_data::{Customer, Order};

    const QUARTER_DATES: [&str; 4] = ["2023-02-01", "2023-05-01", "2023-08-01", "2023-11-01"];

    fn dataset(table: &[(&str, [u64; 4])]) -> Dataset {
        let mut orders = Vec::new();
        for (category, counts) in table {
            for (q, &n) in counts.iter().enumerate() {
                for _ in 0..n {
                    orders.push(
                        Order::new(None, QUARTER_DATES[q], Some((*category).into()), "A").unwrap(),
                    );
                }
            }
        }
        Dataset::from_parts(orders, vec![Customer::new("A", "SP")])
    }

    #[test]
    fn uniform_counts_have_zero_cv() {
        let ranked = seasonal_trends(&dataset(&[("flat", [10, 10, 10, 10])]), Dispersion::Sample);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].season_counts, [10, 10, 10, 10]);
        assert_eq!(ranked[0].score, Some(0.0));
    }

    #[test]
    fn single_season_category_is_most_variable() {
        let data = dataset(&[
            ("flat", [10, 10, 10, 10]),
            ("mild", [5, 10, 15, 10]),
            ("spike", [0, 0, 0, 40]),
            ("two", [20, 0, 20, 0]),
        ]);
        for dispersion in [Dispersion::Sample, Dispersion::Population] {
            let ranked = seasonal_trends(&data, dispersion);
            assert_eq!(ranked[0].category, "spike");
            assert_eq!(ranked.last().unwrap().category, "flat");
            let top = ranked[0].score.unwrap();
            assert!(ranked[1..].iter().all(|s| s.score.unwrap() < top));
        }
    }

    #[test]
    fn output_is_sorted_descending() {
        let data = dataset(&[
            ("a", [1, 2, 3, 4]),
            ("b", [9, 1, 1, 1]),
            ("c", [3, 3, 3, 4]),
            ("d", [0, 7, 0, 1]),
        ]);
        let ranked = seasonal_trends(&data, Dispersion::Sample);
        for pair in ranked.windows(2) {
            assert!(pair[0].score.unwrap() >= pair[1].score.unwrap());
        }
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let data = dataset(&[
            ("zeta", [4, 0, 0, 0]),
            ("alpha", [0, 4, 0, 0]),
            ("mid", [2, 2, 2, 2]),
        ]);
        let ranked = seasonal_trends(&data, Dispersion::Sample);
        let names: Vec<&str> = ranked.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn uncategorized_orders_are_ignored() {
        let orders = vec![
            Order::new(None, "2023-01-01", None, "A").unwrap(),
            Order::new(None, "2023-01-01", Some("toys".into()), "A").unwrap(),
        ];
        let data = Dataset::from_parts(orders, vec![Customer::new("A", "SP")]);
        let ranked = seasonal_trends(&data, Dispersion::Sample);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].total_orders(), 1);
    }

    #[test]
    fn zero_counts_give_undefined_score() {
        let s = VariationScore::from_counts("ghost", [0, 0, 0, 0], Dispersion::Sample);
        assert_eq!(s.score, None);
        let ranked = rank_by_variation(vec![
            s,
            VariationScore::from_counts("real", [1, 0, 0, 0], Dispersion::Sample),
        ]);
        assert_eq!(ranked[0].category, "real");
    }

    #[test]
    fn peak_season_picks_largest_count() {
        let s = VariationScore::from_counts("x", [1, 5, 5, 2], Dispersion::Sample);
        assert_eq!(s.peak_season(), Season::Autumn);
    }

    #[test]
    fn empty_dataset_ranks_nothing() {
        assert!(seasonal_trends(&Dataset::default(), Dispersion::Sample).is_empty());
    }
}
