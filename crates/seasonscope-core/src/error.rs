use std::path::PathBuf;

/// Errors that can occur while loading, analyzing, or rendering order data.
///
/// Library crates return this type directly; the binary converts it to a
/// `miette::Report` at the boundary.
///
/// # Examples
///
/// ```
/// use seasonscope_core::SeasonError;
///
/// let err = SeasonError::EmptyCategory("toys".into());
/// assert!(err.to_string().contains("toys"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SeasonError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    #[diagnostic(code(seasonscope::io))]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected a record.
    #[error("CSV error: {0}")]
    #[diagnostic(code(seasonscope::csv))]
    Csv(#[from] csv::Error),

    /// A required column is absent from an input table.
    #[error("missing column `{column}` in {}", .file.display())]
    #[diagnostic(
        code(seasonscope::missing_column),
        help("check that the file starts with a header row naming every required column")
    )]
    MissingColumn {
        /// Input file (or `<reader>` for in-memory sources).
        file: PathBuf,
        /// Name of the absent column.
        column: String,
    },

    /// A purchase timestamp could not be parsed.
    #[error("unparseable timestamp {value:?} at row {row}")]
    #[diagnostic(
        code(seasonscope::timestamp),
        help("expected `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, RFC 3339, or `YYYY-MM-DD`")
    )]
    Timestamp {
        /// 1-based data row (header excluded).
        row: usize,
        /// The raw cell content.
        value: String,
    },

    /// A category filter matched no merged records.
    #[error("no orders found for category `{0}`")]
    #[diagnostic(
        code(seasonscope::empty_category),
        help("category names must match the dataset exactly; run `seasonscope trends` to list them")
    )]
    EmptyCategory(String),

    /// The merged dataset has no usable rows.
    #[error("dataset contains no categorized orders")]
    #[diagnostic(code(seasonscope::empty_dataset))]
    EmptyDataset,

    /// A caller-supplied argument is out of range.
    #[error("invalid argument: {0}")]
    #[diagnostic(code(seasonscope::invalid_argument))]
    InvalidArgument(String),

    /// Chart drawing failure.
    #[error("render error: {0}")]
    #[diagnostic(code(seasonscope::render))]
    Render(String),

    /// Invalid configuration value.
    #[error("configuration error: {0}")]
    #[diagnostic(code(seasonscope::config))]
    Config(String),

    /// JSON serialization failure.
    #[error("serialization error: {0}")]
    #[diagnostic(code(seasonscope::serialization))]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(seasonscope::toml))]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SeasonError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn missing_column_shows_file_and_column() {
        let err = SeasonError::MissingColumn {
            file: PathBuf::from("/data/orders.csv"),
            column: "customer_id".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/orders.csv"));
        assert!(msg.contains("customer_id"));
    }

    #[test]
    fn timestamp_error_names_row_and_value() {
        let err = SeasonError::Timestamp {
            row: 7,
            value: "yesterday".into(),
        };
        assert_eq!(
            err.to_string(),
            "unparseable timestamp \"yesterday\" at row 7"
        );
    }

    #[test]
    fn empty_category_displays_name() {
        let err = SeasonError::EmptyCategory("garden_tools".into());
        assert_eq!(
            err.to_string(),
            "no orders found for category `garden_tools`"
        );
    }
}
