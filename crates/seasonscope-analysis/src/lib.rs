//! Seasonal and regional demand analysis.
//!
//! Every analysis is a pure function over a borrowed [`Dataset`]:
//! - [`seasonal::seasonal_heatmap`]: state × season demand share for one category
//! - [`trends::seasonal_trends`]: categories ranked by seasonal coefficient of variation
//! - [`preferences::preference_heatmap`]: state × category share for the most variable categories
//!
//! [`Dataset`]: seasonscope_data::Dataset

pub mod contingency;
pub mod matrix;
pub mod preferences;
pub mod seasonal;
pub mod stats;
pub mod trends;

pub use contingency::ContingencyTable;
pub use matrix::{Heatmap, HeatmapLabels, HeatmapMatrix};
pub use preferences::preference_heatmap;
pub use seasonal::seasonal_heatmap;
pub use trends::{seasonal_trends, VariationScore};
