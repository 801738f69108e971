//! Textual partition decoding

use std::str::FromStr;

use crate::error::{Error, InputLine, Result};

use super::csr::CsrMatrix;

/// Decode raw partition bytes into a validated [`CsrMatrix`]
///
/// The content must be three lines of comma-separated decimals: 1-based row
/// offsets, 1-based column indices, and nonzero values. Bytes are read as
/// UTF-8; a mangled byte sequence surfaces as a numeric format error on the
/// token it lands in.
///
/// # Errors
///
/// - [`Error::TruncatedInput`] if a line is missing
/// - [`Error::NumericFormat`] if a token fails parsing, carrying the token
/// - [`Error::StructuralValidation`] from [`CsrMatrix::from_raw`]
pub fn decode_partition(bytes: &[u8]) -> Result<CsrMatrix> {
    let text = String::from_utf8_lossy(bytes);
    let mut lines = text.lines();

    let row_offsets = parse_line::<i64>(lines.next(), InputLine::RowOffsets)?;
    let col_indices = parse_line::<i64>(lines.next(), InputLine::ColumnIndices)?;
    let values = parse_line::<f64>(lines.next(), InputLine::Values)?;

    CsrMatrix::from_raw(row_offsets, col_indices, values)
}

fn parse_line<T: FromStr>(line: Option<&str>, which: InputLine) -> Result<Vec<T>> {
    let line = line.ok_or(Error::TruncatedInput { line: which })?;
    line.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<T>()
                .map_err(|_| Error::numeric_format(token, which))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid() {
        let matrix = decode_partition(b"1,2,4\n1,1,2\n2.0,4.0,1.0\n").unwrap();
        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix.num_features(), 2);
        assert_eq!(matrix.values(), &[2.0, 4.0, 1.0]);
    }

    #[test]
    fn test_decode_tolerates_token_whitespace() {
        let matrix = decode_partition(b"1, 2, 4\n1, 1, 2\n2.0, 4.0, 1.0").unwrap();
        assert_eq!(matrix.nnz(), 3);
    }

    #[test]
    fn test_decode_missing_values_line() {
        let err = decode_partition(b"1,2\n1\n").unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                line: InputLine::Values
            }
        ));
    }

    #[test]
    fn test_decode_empty_input() {
        let err = decode_partition(b"").unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                line: InputLine::RowOffsets
            }
        ));
    }

    #[test]
    fn test_decode_bad_offset_token() {
        let err = decode_partition(b"1,two\n1\n3.0\n").unwrap_err();
        match err {
            Error::NumericFormat { token, line } => {
                assert_eq!(token, "two");
                assert_eq!(line, InputLine::RowOffsets);
            }
            other => panic!("expected NumericFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_bad_value_token() {
        let err = decode_partition(b"1,2\n1\n3.0.1\n").unwrap_err();
        match err {
            Error::NumericFormat { token, line } => {
                assert_eq!(token, "3.0.1");
                assert_eq!(line, InputLine::Values);
            }
            other => panic!("expected NumericFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_fractional_offset_rejected() {
        // Offsets are integers; a float literal on the first line is a
        // format error, not a silent truncation.
        let err = decode_partition(b"1.5,2\n1\n3.0\n").unwrap_err();
        assert!(matches!(
            err,
            Error::NumericFormat {
                line: InputLine::RowOffsets,
                ..
            }
        ));
    }
}
