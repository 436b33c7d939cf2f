use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Calendar-quarter season, named by the Southern-Hemisphere convention.
///
/// The mapping is fixed: Q1 = Summer, Q2 = Autumn, Q3 = Winter, Q4 = Spring.
///
/// # Examples
///
/// ```
/// use seasonscope_core::Season;
///
/// assert_eq!(Season::from_quarter(1), Some(Season::Summer));
/// assert_eq!(Season::from_month(8), Some(Season::Winter));
/// assert_eq!(Season::Spring.label(), "Spring");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// January to March.
    Summer,
    /// April to June.
    Autumn,
    /// July to September.
    Winter,
    /// October to December.
    Spring,
}

impl Season {
    /// All seasons in calendar-quarter order.
    pub const ALL: [Season; 4] = [
        Season::Summer,
        Season::Autumn,
        Season::Winter,
        Season::Spring,
    ];

    /// Map a calendar quarter (1–4) to its season.
    pub fn from_quarter(quarter: u32) -> Option<Self> {
        match quarter {
            1 => Some(Season::Summer),
            2 => Some(Season::Autumn),
            3 => Some(Season::Winter),
            4 => Some(Season::Spring),
            _ => None,
        }
    }

    /// Map a month (1–12) to the season of its quarter.
    pub fn from_month(month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Self::from_quarter((month - 1) / 3 + 1)
    }

    /// Calendar quarter (1–4).
    pub fn quarter(self) -> u32 {
        match self {
            Season::Summer => 1,
            Season::Autumn => 2,
            Season::Winter => 3,
            Season::Spring => 4,
        }
    }

    /// Zero-based position in [`Season::ALL`].
    pub fn index(self) -> usize {
        self.quarter() as usize - 1
    }

    /// Display label used for heatmap columns.
    pub fn label(self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which estimator to use for standard deviation and variance.
///
/// # Examples
///
/// ```
/// use seasonscope_core::Dispersion;
///
/// let d: Dispersion = "population".parse().unwrap();
/// assert_eq!(d.ddof(), 0);
/// assert_eq!(Dispersion::default().ddof(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dispersion {
    /// Bessel-corrected estimator (divides by `n - 1`).
    #[default]
    Sample,
    /// Population estimator (divides by `n`).
    Population,
}

impl Dispersion {
    /// Delta degrees of freedom subtracted from `n` in the divisor.
    pub fn ddof(self) -> usize {
        match self {
            Dispersion::Sample => 1,
            Dispersion::Population => 0,
        }
    }
}

impl fmt::Display for Dispersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispersion::Sample => write!(f, "sample"),
            Dispersion::Population => write!(f, "population"),
        }
    }
}

impl FromStr for Dispersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sample" => Ok(Dispersion::Sample),
            "population" | "pop" => Ok(Dispersion::Population),
            other => Err(format!("unknown dispersion: {other}")),
        }
    }
}

/// Sequential color scale used to fill heatmap cells.
///
/// # Examples
///
/// ```
/// use seasonscope_core::Palette;
///
/// let p: Palette = "YlOrRd".parse().unwrap();
/// assert_eq!(p, Palette::YlOrRd);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Yellow → orange → red (ColorBrewer), colorblind friendly.
    #[default]
    YlOrRd,
    /// Light to dark blue (ColorBrewer).
    Blues,
    /// Perceptually uniform purple → green → yellow.
    Viridis,
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Palette::YlOrRd => write!(f, "ylorrd"),
            Palette::Blues => write!(f, "blues"),
            Palette::Viridis => write!(f, "viridis"),
        }
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ylorrd" => Ok(Palette::YlOrRd),
            "blues" => Ok(Palette::Blues),
            "viridis" => Ok(Palette::Viridis),
            other => Err(format!("unknown palette: {other}")),
        }
    }
}

/// Output format for analysis results.
///
/// # Examples
///
/// ```
/// use seasonscope_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
///
/// let fmt: OutputFormat = "md".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Markdown);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Machine-readable JSON with camelCase keys.
    Json,
    /// Markdown tables.
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
