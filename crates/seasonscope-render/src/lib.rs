//! Rendering for seasonscope results.
//!
//! - [`heatmap`]: annotated SVG heatmaps drawn with `plotters`
//! - [`palette`]: sequential color scales for heatmap cells
//! - [`output`]: text, JSON and Markdown views of matrices and rankings

pub mod heatmap;
pub mod output;
pub mod palette;

pub use heatmap::{render_svg, HeatmapStyle};
