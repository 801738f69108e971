//! Error types for momentr

use std::fmt;

use thiserror::Error;

/// Result type alias using momentr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the three partition input lines an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLine {
    /// First line: 1-based row offsets
    RowOffsets,
    /// Second line: 1-based column indices
    ColumnIndices,
    /// Third line: nonzero values
    Values,
}

impl fmt::Display for InputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputLine::RowOffsets => "row-offsets line",
            InputLine::ColumnIndices => "column-indices line",
            InputLine::Values => "values line",
        };
        f.write_str(name)
    }
}

/// Structural consistency checks applied to a decoded partition.
///
/// The encoding's validity conditions are checked in a fixed order and each
/// variant carries the numbers that failed it, so every failure mode is
/// independently reportable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralCheck {
    /// Fewer than two row offsets, so the partition declares no rows
    RowCount {
        /// Length of the decoded row-offsets line
        offsets_len: usize,
    },
    /// Column-index and value sequences differ in length
    EntryLengths {
        /// Number of decoded column indices
        column_indices: usize,
        /// Number of decoded values
        values: usize,
    },
    /// Last row offset disagrees with the number of stored values
    OffsetSpan {
        /// Nonzero count implied by the final row offset
        declared: i64,
        /// Number of values actually supplied
        actual: usize,
    },
    /// Largest column index is below 1, so the partition has no features
    FeatureCount {
        /// Largest decoded column index
        max_column: i64,
    },
    /// A column index below 1 cannot address a feature
    ColumnRange {
        /// The offending column index
        column: i64,
    },
}

impl fmt::Display for StructuralCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralCheck::RowCount { offsets_len } => {
                write!(f, "expected at least 2 row offsets, got {}", offsets_len)
            }
            StructuralCheck::EntryLengths {
                column_indices,
                values,
            } => {
                write!(
                    f,
                    "got {} column indices but {} values",
                    column_indices, values
                )
            }
            StructuralCheck::OffsetSpan { declared, actual } => {
                write!(
                    f,
                    "row offsets declare {} nonzeros but {} values were supplied",
                    declared, actual
                )
            }
            StructuralCheck::FeatureCount { max_column } => {
                write!(f, "largest column index is {}, expected at least 1", max_column)
            }
            StructuralCheck::ColumnRange { column } => {
                write!(f, "column index {} is below 1", column)
            }
        }
    }
}

/// Errors that can occur in momentr operations
#[derive(Error, Debug)]
pub enum Error {
    /// A partition ended before all three input lines were read
    #[error("Truncated input: missing {line}")]
    TruncatedInput {
        /// The line that was missing
        line: InputLine,
    },

    /// A token on an input line failed numeric parsing
    #[error("Numeric format error on {line}: cannot parse {token:?}")]
    NumericFormat {
        /// The offending token
        token: String,
        /// The line the token came from
        line: InputLine,
    },

    /// A decoded partition failed a structural consistency check
    #[error("Structural validation failed: {check}")]
    StructuralValidation {
        /// The check that failed
        check: StructuralCheck,
    },

    /// Statistics records over different feature counts cannot be combined
    #[error("Dimension mismatch: {left} features vs {right}")]
    DimensionMismatch {
        /// Feature count of the left record
        left: usize,
        /// Feature count of the right record
        right: usize,
    },

    /// Finalizing a record with zero observations is undefined
    #[error("Empty dataset: no observations to finalize")]
    EmptyDataset,

    /// Variation coefficient is undefined for a zero-mean feature
    #[error("Degenerate moment for feature {feature}: mean is zero")]
    DegenerateMoment {
        /// The zero-mean feature
        feature: usize,
    },

    /// The named partition does not exist at the source
    #[error("Partition not found: {name:?}")]
    PartitionNotFound {
        /// The requested partition name
        name: String,
    },

    /// Underlying I/O failure while reading a partition
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a structural validation error
    pub fn structural(check: StructuralCheck) -> Self {
        Self::StructuralValidation { check }
    }

    /// Create a numeric format error
    pub fn numeric_format(token: impl Into<String>, line: InputLine) -> Self {
        Self::NumericFormat {
            token: token.into(),
            line,
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        Self::DimensionMismatch { left, right }
    }
}
