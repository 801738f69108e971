//! Common test helpers for momentr integration tests

#![allow(dead_code)]

use std::collections::HashMap;

use momentr::error::{Error, Result};
use momentr::partition::PartitionSource;
use momentr::sparse::decode_partition;
use momentr::stats::PartialMoments;

pub fn approx_eq_f64(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

/// Relative comparison; exact matches (including infinities) pass.
pub fn rel_eq(a: f64, b: f64, rel: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() <= rel * a.abs().max(b.abs())
}

pub fn assert_records_close(a: &PartialMoments, b: &PartialMoments, rel: f64) {
    assert_eq!(a.observation_count(), b.observation_count());
    assert_eq!(a.num_features(), b.num_features());
    for f in 0..a.num_features() {
        assert!(
            rel_eq(a.sum()[f], b.sum()[f], rel),
            "sum[{f}]: {} vs {}",
            a.sum()[f],
            b.sum()[f]
        );
        assert!(
            rel_eq(a.sum_squares()[f], b.sum_squares()[f], rel),
            "sum_squares[{f}]: {} vs {}",
            a.sum_squares()[f],
            b.sum_squares()[f]
        );
        assert_eq!(a.min()[f], b.min()[f], "min[{f}]");
        assert_eq!(a.max()[f], b.max()[f], "max[{f}]");
    }
}

/// Render a partition as its three-line textual encoding.
pub fn encode_partition(row_offsets: &[i64], col_indices: &[i64], values: &[f64]) -> Vec<u8> {
    let ints = |xs: &[i64]| {
        xs.iter()
            .map(|x| x.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    let vals = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}\n{}\n{}\n", ints(row_offsets), ints(col_indices), vals).into_bytes()
}

/// Decode an encoded partition and reduce it to its partial record.
pub fn partial_of(encoded: &[u8]) -> PartialMoments {
    PartialMoments::from_csr(&decode_partition(encoded).unwrap())
}

/// Partition source over named in-memory buffers.
#[derive(Debug, Default)]
pub struct MapSource {
    partitions: HashMap<String, Vec<u8>>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, bytes: Vec<u8>) {
        self.partitions.insert(name.to_string(), bytes);
    }
}

impl PartitionSource for MapSource {
    fn read_partition(&self, name: &str) -> Result<Vec<u8>> {
        self.partitions
            .get(name)
            .cloned()
            .ok_or_else(|| Error::PartitionNotFound {
                name: name.to_string(),
            })
    }
}

/// Dense row-major data rendered as the sparse three-line encoding, keeping
/// explicit entries only for nonzero cells.
pub fn encode_dense_rows(rows: &[Vec<f64>]) -> Vec<u8> {
    let mut row_offsets = vec![1i64];
    let mut col_indices = Vec::new();
    let mut values = Vec::new();

    for row in rows {
        for (col, &value) in row.iter().enumerate() {
            if value != 0.0 {
                col_indices.push(col as i64 + 1);
                values.push(value);
            }
        }
        row_offsets.push(col_indices.len() as i64 + 1);
    }

    encode_partition(&row_offsets, &col_indices, &values)
}
