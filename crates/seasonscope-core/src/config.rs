use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeasonError;
use crate::types::{Dispersion, Palette};

/// Top-level configuration loaded from `.seasonscope.toml`.
///
/// Resolution order: CLI flags > config file > defaults.
///
/// # Examples
///
/// ```
/// use seasonscope_core::SeasonConfig;
///
/// let config = SeasonConfig::default();
/// assert_eq!(config.analysis.top_n_categories, 10);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeasonConfig {
    /// Heatmap styling.
    #[serde(default)]
    pub chart: ChartConfig,
    /// Statistical settings.
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl SeasonConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError::Io`] if the file cannot be read,
    /// [`SeasonError::Toml`] if the content is not valid TOML, or
    /// [`SeasonError::Config`] if a value is out of range.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use seasonscope_core::SeasonConfig;
    /// use std::path::Path;
    ///
    /// let config = SeasonConfig::from_file(Path::new(".seasonscope.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, SeasonError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError::Toml`] if parsing fails, or
    /// [`SeasonError::Config`] if a value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use seasonscope_core::SeasonConfig;
    ///
    /// let toml = r#"
    /// [analysis]
    /// top_n_categories = 5
    /// "#;
    /// let config = SeasonConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.analysis.top_n_categories, 5);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, SeasonError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), SeasonError> {
        if self.analysis.top_n_categories == 0 {
            return Err(SeasonError::Config(
                "analysis.top_n_categories must be at least 1".into(),
            ));
        }
        if self.chart.width < 200 || self.chart.height < 200 {
            return Err(SeasonError::Config(format!(
                "chart size {}x{} is too small (minimum 200x200)",
                self.chart.width, self.chart.height
            )));
        }
        Ok(())
    }
}

/// Heatmap styling passed explicitly into every render call.
///
/// # Examples
///
/// ```
/// use seasonscope_core::{ChartConfig, Palette};
///
/// let config = ChartConfig::default();
/// assert_eq!(config.palette, Palette::YlOrRd);
/// assert_eq!((config.width, config.height), (1200, 800));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Canvas width in pixels (default: 1200).
    #[serde(default = "default_width")]
    pub width: u32,
    /// Canvas height in pixels (default: 800).
    #[serde(default = "default_height")]
    pub height: u32,
    /// Cell color scale (default: `"ylorrd"`).
    #[serde(default)]
    pub palette: Palette,
    /// Font family for all text (default: `"sans-serif"`).
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Title font size (default: 28).
    #[serde(default = "default_title_size")]
    pub title_size: u32,
    /// Axis label and tick font size (default: 16).
    #[serde(default = "default_label_size")]
    pub label_size: u32,
    /// Cell annotation font size (default: 13).
    #[serde(default = "default_annotation_size")]
    pub annotation_size: u32,
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    800
}

fn default_font_family() -> String {
    "sans-serif".into()
}

fn default_title_size() -> u32 {
    28
}

fn default_label_size() -> u32 {
    16
}

fn default_annotation_size() -> u32 {
    13
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            palette: Palette::default(),
            font_family: default_font_family(),
            title_size: default_title_size(),
            label_size: default_label_size(),
            annotation_size: default_annotation_size(),
        }
    }
}

/// Statistical settings for the trend ranker and preference heatmap.
///
/// # Examples
///
/// ```
/// use seasonscope_core::{AnalysisConfig, Dispersion};
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.dispersion, Dispersion::Sample);
/// assert_eq!(config.top_n_categories, 10);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Standard deviation / variance estimator (default: `"sample"`).
    #[serde(default)]
    pub dispersion: Dispersion,
    /// Columns kept in the preference heatmap (default: 10).
    #[serde(default = "default_top_n_categories")]
    pub top_n_categories: usize,
}

fn default_top_n_categories() -> usize {
    10
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dispersion: Dispersion::default(),
            top_n_categories: default_top_n_categories(),
        }
    }
}
