//! Validated CSR partition data

use crate::error::{Error, Result, StructuralCheck};

/// CSR (Compressed Sparse Row) matrix for one partition
///
/// Row offsets are kept exactly as encoded (1-based, length `num_rows + 1`);
/// column indices are normalized to 0-based feature slots during validation.
/// The feature count is the largest column index observed in this partition.
#[derive(Debug, Clone)]
pub struct CsrMatrix {
    num_rows: usize,
    num_features: usize,
    row_offsets: Vec<i64>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Build a matrix from the raw decoded sequences
    ///
    /// # Arguments
    ///
    /// * `row_offsets` - 1-based row offsets (length: num_rows + 1)
    /// * `col_indices` - 1-based column index for each stored nonzero
    /// * `values` - Stored nonzero values
    ///
    /// # Errors
    ///
    /// Returns [`Error::StructuralValidation`] naming the first check that
    /// failed, in order:
    ///
    /// - fewer than 2 row offsets (no rows)
    /// - col_indices and values differ in length
    /// - values length != last row offset - 1
    /// - largest column index below 1 (no features)
    /// - any column index below 1
    pub fn from_raw(
        row_offsets: Vec<i64>,
        col_indices: Vec<i64>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if row_offsets.len() < 2 {
            return Err(Error::structural(StructuralCheck::RowCount {
                offsets_len: row_offsets.len(),
            }));
        }
        let num_rows = row_offsets.len() - 1;

        if col_indices.len() != values.len() {
            return Err(Error::structural(StructuralCheck::EntryLengths {
                column_indices: col_indices.len(),
                values: values.len(),
            }));
        }

        // Offsets are 1-based, so the last one is nnz + 1.
        let declared = row_offsets[num_rows] - 1;
        if declared < 0 || declared as usize != values.len() {
            return Err(Error::structural(StructuralCheck::OffsetSpan {
                declared,
                actual: values.len(),
            }));
        }

        let max_column = col_indices.iter().copied().max().unwrap_or(0);
        if max_column < 1 {
            return Err(Error::structural(StructuralCheck::FeatureCount {
                max_column,
            }));
        }
        if let Some(&column) = col_indices.iter().find(|&&c| c < 1) {
            return Err(Error::structural(StructuralCheck::ColumnRange { column }));
        }

        let num_features = max_column as usize;
        let col_indices = col_indices.into_iter().map(|c| (c - 1) as usize).collect();

        Ok(Self {
            num_rows,
            num_features,
            row_offsets,
            col_indices,
            values,
        })
    }

    /// Number of data vectors (rows) in the partition
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of feature columns (largest encoded column index)
    pub fn num_features(&self) -> usize {
        self.num_features
    }

    /// Number of stored nonzero entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Row offsets exactly as encoded (1-based)
    pub fn row_offsets(&self) -> &[i64] {
        &self.row_offsets
    }

    /// 0-based feature slot of each stored entry
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Stored nonzero values
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate the stored entries as `(feature, value)` pairs
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.col_indices
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}
