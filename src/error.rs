//! Error types for schema inference.
//!
//! Every variant is fatal: an inference run either completes and yields a
//! schema, or aborts without producing any DDL.

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum InferError {
    /// A configured type cannot be turned into a working detector.
    #[error("Invalid configuration for type '{type_name}': {message}")]
    Configuration { type_name: String, message: String },

    /// The row source failed while reading the given row.
    #[error("Error reading row {row}: {source}")]
    RowRead {
        row: usize,
        #[source]
        source: BoxedSource,
    },

    /// The row source ended before the first data row.
    #[error("Input ended before the first data row (row {row})")]
    EmptyInput { row: usize },

    /// A row's field count disagrees with the established column count.
    #[error("Row {row} has the wrong number of fields, {found} vs {expected}")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl InferError {
    pub fn configuration(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    pub fn row_read<E>(row: usize, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::RowRead {
            row,
            source: Box::new(source),
        }
    }

    /// 1-based row number the error refers to, when there is one.
    pub fn row(&self) -> Option<usize> {
        match self {
            InferError::Configuration { .. } => None,
            InferError::RowRead { row, .. }
            | InferError::EmptyInput { row }
            | InferError::RowShape { row, .. } => Some(*row),
        }
    }
}

/// Failures raised by the CSV-backed row source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Failed to decode field {field} with encoding {encoding}")]
    Decode {
        field: usize,
        encoding: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_number_is_exposed_for_row_errors() {
        let err = InferError::RowShape {
            row: 4,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.row(), Some(4));
        assert_eq!(
            err.to_string(),
            "Row 4 has the wrong number of fields, 2 vs 3"
        );
        assert_eq!(InferError::configuration("uuid", "bad").row(), None);
    }

    #[test]
    fn row_read_keeps_the_underlying_source() {
        let io = std::io::Error::other("disk gone");
        let err = InferError::row_read(7, io);
        assert_eq!(err.to_string(), "Error reading row 7: disk gone");
        assert!(std::error::Error::source(&err).is_some());
    }
}
