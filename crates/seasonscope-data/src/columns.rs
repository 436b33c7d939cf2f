use std::path::Path;

use csv::StringRecord;
use seasonscope_core::SeasonError;

/// Fail with [`SeasonError::MissingColumn`] unless every name in `required`
/// appears in `headers`.
pub(crate) fn require_columns(
    headers: &StringRecord,
    required: &[&str],
    origin: &Path,
) -> Result<(), SeasonError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(SeasonError::MissingColumn {
                file: origin.to_path_buf(),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn csv_reader<R: std::io::Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_columns_pass() {
        let headers = StringRecord::from(vec!["a", "b", "c"]);
        assert!(require_columns(&headers, &["c", "a"], Path::new("t.csv")).is_ok());
    }

    #[test]
    fn first_absent_column_is_reported() {
        let headers = StringRecord::from(vec!["a"]);
        let err = require_columns(&headers, &["a", "b", "c"], Path::new("t.csv")).unwrap_err();
        match err {
            SeasonError::MissingColumn { column, .. } => assert_eq!(column, "b"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
