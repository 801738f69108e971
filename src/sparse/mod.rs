//! Sparse partition decoding for momentr
//!
//! A partition arrives as three text lines of comma-separated decimals:
//!
//! 1. row offsets, 1-based, one more entry than the partition has rows;
//! 2. column indices, 1-based, one entry per stored nonzero;
//! 3. nonzero values as decimal floating-point literals.
//!
//! There is no header line and no trailing metadata. [`decode_partition`]
//! parses the three lines and [`CsrMatrix`] holds the validated result with
//! column indices normalized to 0-based feature slots.
//!
//! # Usage
//!
//! ```
//! use momentr::sparse::decode_partition;
//!
//! // 2 rows over 2 features:
//! // row 0 stores {col 1: 2.0}, row 1 stores {col 1: 4.0, col 2: 1.0}
//! let matrix = decode_partition(b"1,2,4\n1,1,2\n2.0,4.0,1.0\n")?;
//!
//! assert_eq!(matrix.num_rows(), 2);
//! assert_eq!(matrix.num_features(), 2);
//! assert_eq!(matrix.nnz(), 3);
//! # Ok::<(), momentr::error::Error>(())
//! ```

mod csr;
mod decode;

pub use csr::CsrMatrix;
pub use decode::decode_partition;
