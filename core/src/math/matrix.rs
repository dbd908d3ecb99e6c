use serde::{Deserialize, Serialize};

use crate::prelude::{MathError, MathResult};

/// Dense row-major matrix backed by a single flat buffer.
///
/// Rectangularity is enforced when the matrix is built, so callers can hand
/// the backing slice to the `_raw` arithmetic entry points and index with
/// `row * width + col` without re-validating shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseMatrix {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl DenseMatrix {
    /// Zero-filled matrix of the given shape.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Wraps an existing flat row-major buffer.
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> MathResult<Self> {
        if data.len() != width * height {
            return Err(MathError::InvalidInput(format!(
                "buffer length {} does not match {}x{} shape",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Flattens nested rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<f32>]) -> MathResult<Self> {
        if rows.is_empty() {
            return Err(MathError::InvalidInput("no rows provided".into()));
        }
        let width = rows[0].len();
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MathError::InvalidInput(format!(
                    "row {} has length {}, expected {}",
                    index,
                    row.len(),
                    width
                )));
            }
        }

        let mut data = Vec::with_capacity(width * rows.len());
        for row in rows {
            data.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height: rows.len(),
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Element at `(row, col)`; out-of-range indices panic.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.width + col]
    }

    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.data[row * self.width + col]
    }

    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
