//! Core types, configuration, and error handling for seasonscope.
//!
//! This crate provides the shared foundation used by all other seasonscope crates:
//! - [`SeasonError`]: unified error type using `thiserror` and `miette`
//! - [`SeasonConfig`]: configuration loaded from `.seasonscope.toml`
//! - Shared types: [`Season`], [`Dispersion`], [`Palette`], [`OutputFormat`]

mod config;
mod error;
mod types;

pub use config::{AnalysisConfig, ChartConfig, SeasonConfig};
pub use error::SeasonError;
pub use types::{Dispersion, OutputFormat, Palette, Season};

/// A convenience `Result` type for seasonscope operations.
pub type Result<T> = std::result::Result<T, SeasonError>;
