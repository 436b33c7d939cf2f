//! Text, JSON and Markdown views of analysis results.

use std::fmt::Write;

use seasonscope_analysis::{Heatmap, VariationScore};
use seasonscope_core::{OutputFormat, Season, SeasonError};
use serde::Serialize;

/// JSON-serializable ranking entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankOutput<'a> {
    rank: usize,
    category: &'a str,
    score: Option<f64>,
    total_orders: u64,
    peak_season: Season,
    season_counts: SeasonCounts,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeasonCounts {
    summer: u64,
    autumn: u64,
    winter: u64,
    spring: u64,
}

impl From<[u64; 4]> for SeasonCounts {
    fn from([summer, autumn, winter, spring]: [u64; 4]) -> Self {
        Self {
            summer,
            autumn,
            winter,
            spring,
        }
    }
}

/// Render a heatmap matrix in the requested format.
///
/// # Errors
///
/// Returns [`SeasonError::Serialization`] if JSON serialization fails.
pub fn format_heatmap(heatmap: &Heatmap, format: OutputFormat) -> Result<String, SeasonError> {
    match format {
        OutputFormat::Text => Ok(heatmap_text(heatmap)),
        OutputFormat::Json => heatmap_json(heatmap),
        OutputFormat::Markdown => Ok(heatmap_markdown(heatmap)),
    }
}

/// Render a category ranking in the requested format.
///
/// # Errors
///
/// Returns [`SeasonError::Serialization`] if JSON serialization fails.
pub fn format_trends(
    scores: &[VariationScore],
    format: OutputFormat,
) -> Result<String, SeasonError> {
    match format {
        OutputFormat::Text => Ok(trends_text(scores)),
        OutputFormat::Json => trends_json(scores),
        OutputFormat::Markdown => Ok(trends_markdown(scores)),
    }
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn score_label(score: Option<f64>) -> String {
    score.map_or_else(|| "NaN".to_string(), |s| format!("{s:.4}"))
}

/// Aligned plain-text table with percentage cells.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::{Heatmap, HeatmapLabels, HeatmapMatrix};
/// use seasonscope_render::output::heatmap_text;
///
/// let heatmap = Heatmap {
///     labels: HeatmapLabels {
///         title: "Demand".into(),
///         x_label: "Season".into(),
///         y_label: "State".into(),
///         colorbar_label: None,
///         rotate_x_labels: false,
///     },
///     matrix: HeatmapMatrix::new(
///         vec!["SP".into()],
///         vec!["Summer".into()],
///         vec![vec![1.0]],
///     ),
/// };
/// let text = heatmap_text(&heatmap);
/// assert!(text.contains("100.00%"));
/// ```
pub fn heatmap_text(heatmap: &Heatmap) -> String {
    let m = &heatmap.matrix;
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", heatmap.labels.title);

    if m.is_empty() {
        out.push_str("(no data)\n");
        return out;
    }

    let first = m
        .rows
        .iter()
        .map(|r| r.chars().count())
        .chain(std::iter::once(heatmap.labels.y_label.chars().count()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = m
        .columns
        .iter()
        .map(|c| c.chars().count().max("100.00%".len()))
        .collect();

    let _ = write!(out, "{:<first$}", heatmap.labels.y_label);
    for (column, width) in m.columns.iter().zip(&widths) {
        let _ = write!(out, "  {column:>width$}");
    }
    out.push('\n');

    for (row, values) in m.rows.iter().zip(&m.values) {
        let _ = write!(out, "{row:<first$}");
        for (value, width) in values.iter().zip(&widths) {
            let _ = write!(out, "  {:>width$}", percent(*value));
        }
        out.push('\n');
    }
    out
}

/// Pretty JSON with camelCase keys: labels plus the raw fractions.
///
/// # Errors
///
/// Returns [`SeasonError::Serialization`] if serialization fails.
pub fn heatmap_json(heatmap: &Heatmap) -> Result<String, SeasonError> {
    serde_json::to_string_pretty(heatmap).map_err(SeasonError::from)
}

/// Markdown table with percentage cells.
pub fn heatmap_markdown(heatmap: &Heatmap) -> String {
    let m = &heatmap.matrix;
    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", heatmap.labels.title);

    if m.is_empty() {
        out.push_str("_No data._\n");
        return out;
    }

    let _ = write!(out, "| {} |", heatmap.labels.y_label);
    for column in &m.columns {
        let _ = write!(out, " {column} |");
    }
    out.push_str("\n|---|");
    for _ in &m.columns {
        out.push_str("---:|");
    }
    out.push('\n');

    for (row, values) in m.rows.iter().zip(&m.values) {
        let _ = write!(out, "| {row} |");
        for value in values {
            let _ = write!(out, " {} |", percent(*value));
        }
        out.push('\n');
    }
    out
}

/// Ranked categories, one per line, with per-season counts.
///
/// # Examples
///
/// ```
/// use seasonscope_analysis::VariationScore;
/// use seasonscope_core::Dispersion;
/// use seasonscope_render::output::trends_text;
///
/// let scores = vec![VariationScore::from_counts("toys", [0, 0, 0, 40], Dispersion::Sample)];
/// let text = trends_text(&scores);
/// assert!(text.contains("toys"));
/// assert!(text.contains("2.0000"));
/// ```
pub fn trends_text(scores: &[VariationScore]) -> String {
    if scores.is_empty() {
        return "No categorized orders.\n".to_string();
    }

    let width = scores
        .iter()
        .map(|s| s.category.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<width$}  {:>8}  {:>7} {:>7} {:>7} {:>7}  Peak",
        "Rank", "Category", "CV", "Summer", "Autumn", "Winter", "Spring"
    );
    for (i, s) in scores.iter().enumerate() {
        let [summer, autumn, winter, spring] = s.season_counts;
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>8}  {summer:>7} {autumn:>7} {winter:>7} {spring:>7}  {}",
            i + 1,
            s.category,
            score_label(s.score),
            s.peak_season(),
        );
    }
    out
}

/// Ranking as a pretty JSON array; undefined scores become `null`.
///
/// # Errors
///
/// Returns [`SeasonError::Serialization`] if serialization fails.
pub fn trends_json(scores: &[VariationScore]) -> Result<String, SeasonError> {
    let output: Vec<RankOutput<'_>> = scores
        .iter()
        .enumerate()
        .map(|(i, s)| RankOutput {
            rank: i + 1,
            category: &s.category,
            score: s.score,
            total_orders: s.total_orders(),
            peak_season: s.peak_season(),
            season_counts: s.season_counts.into(),
        })
        .collect();

    serde_json::to_string_pretty(&output).map_err(SeasonError::from)
}

/// Ranking as a Markdown table.
pub fn trends_markdown(scores: &[VariationScore]) -> String {
    let mut out = String::new();
    out.push_str("# Seasonal Variation by Category\n\n");

    if scores.is_empty() {
        out.push_str("_No categorized orders._\n");
        return out;
    }

    out.push_str("| Rank | Category | CV | Summer | Autumn | Winter | Spring | Peak |\n");
    out.push_str("|---:|---|---:|---:|---:|---:|---:|---|\n");
    for (i, s) in scores.iter().enumerate() {
        let [summer, autumn, winter, spring] = s.season_counts;
        let _ = writeln!(
            out,
            "| {} | `{}` | {} | {summer} | {autumn} | {winter} | {spring} | {} |",
            i + 1,
            s.category,
            score_label(s.score),
            s.peak_season(),
        );
    }
    out
}
