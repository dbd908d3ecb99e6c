use crate::prelude::{MathError, MathResult};

/// Fused scale-and-add operations over vectors and dense matrices.
pub struct SaxpyHelper;

impl SaxpyHelper {
    /// Checked vector form: `out[i] = alpha * x[i] + y[i]`.
    ///
    /// Rejects empty or mismatched-length operands before writing any output.
    pub fn saxpy(alpha: f32, x: &[f32], y: &[f32], out: &mut [f32]) -> MathResult<()> {
        if x.is_empty() || y.is_empty() {
            return Err(MathError::InvalidInput("empty operand".into()));
        }
        if x.len() != y.len() {
            return Err(MathError::InvalidInput(format!(
                "operand lengths differ: {} vs {}",
                x.len(),
                y.len()
            )));
        }

        for i in 0..x.len() {
            out[i] = alpha * x[i] + y[i];
        }
        Ok(())
    }

    /// Unchecked vector form over `width` elements. Dimensions are a caller
    /// contract and are not validated.
    pub fn saxpy_raw(alpha: f32, x: &[f32], y: &[f32], out: &mut [f32], width: usize) {
        for i in 0..width {
            out[i] = alpha * x[i] + y[i];
        }
    }

    /// Checked matrix form over nested rows:
    /// `out[row][col] += sum_k a[row][k] * x[k][col] + y[row][col]`.
    ///
    /// `a` must be square (M x M); `x` and `y` must carry M rows. The result
    /// is ACCUMULATED into `out`: callers that want `A*X + Y` alone must
    /// pass a zeroed output, otherwise the result is additive on top of
    /// whatever `out` already holds.
    pub fn saxpy_matrix(
        a: &[Vec<f32>],
        x: &[Vec<f32>],
        y: &[Vec<f32>],
        out: &mut [Vec<f32>],
    ) -> MathResult<()> {
        if a.is_empty() || x.is_empty() || y.is_empty() {
            return Err(MathError::InvalidInput("empty operand".into()));
        }
        let m = a.len();
        if a[0].len() != m {
            return Err(MathError::InvalidInput(format!(
                "lhs matrix must be square, got {}x{}",
                m,
                a[0].len()
            )));
        }
        if x.len() != m || y.len() != m {
            return Err(MathError::InvalidInput(format!(
                "operand row counts must match lhs order {}: x has {}, y has {}",
                m,
                x.len(),
                y.len()
            )));
        }

        let n = x[0].len();
        for row in 0..m {
            for col in 0..n {
                // Row of a times column of x gives one product element.
                for inner in 0..m {
                    out[row][col] += a[row][inner] * x[inner][col];
                }
                out[row][col] += y[row][col];
            }
        }
        Ok(())
    }

    /// Unchecked flat row-major matrix form: `a` is an M x M buffer, `x`,
    /// `y`, and `out` are M x N buffers indexed as `row * n + col`.
    ///
    /// Same accumulate-into-output behavior as [`SaxpyHelper::saxpy_matrix`].
    pub fn saxpy_matrix_raw(
        a: &[f32],
        x: &[f32],
        y: &[f32],
        out: &mut [f32],
        m: usize,
        n: usize,
    ) {
        for row in 0..m {
            for col in 0..n {
                let id = row * n + col;
                out[id] += y[id];
                for inner in 0..m {
                    out[id] += a[row * m + inner] * x[inner * n + col];
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::MathError;
    use ndarray::Array2;

    #[test]
    fn saxpy_scales_and_adds() {
        let x = [1.0, 1.0, 1.0];
        let y = [1.0, 2.0, 3.0];
        let mut out = [0.0f32; 3];

        SaxpyHelper::saxpy(2.0, &x, &y, &mut out).unwrap();
        assert_eq!(out, [3.0, 4.0, 5.0]);
    }

    #[test]
    fn saxpy_rejects_empty_operands() {
        let filled = [1.0, 2.0];
        let mut out = [0.0f32; 2];

        let err = SaxpyHelper::saxpy(1.0, &[], &filled, &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
        let err = SaxpyHelper::saxpy(1.0, &filled, &[], &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn saxpy_rejects_length_mismatch() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 2.0];
        let mut out = [0.0f32; 3];

        let err = SaxpyHelper::saxpy(1.0, &x, &y, &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn saxpy_raw_matches_checked_form() {
        let x = [0.5, -2.0, 4.0, 1.25];
        let y = [1.0, 1.0, -1.0, 0.0];
        let mut checked = [0.0f32; 4];
        let mut raw = [0.0f32; 4];

        SaxpyHelper::saxpy(-1.5, &x, &y, &mut checked).unwrap();
        SaxpyHelper::saxpy_raw(-1.5, &x, &y, &mut raw, 4);
        assert_eq!(checked, raw);
    }

    #[test]
    fn matrix_saxpy_identity_passes_operand_through() {
        let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let x = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let y = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let mut out = vec![vec![0.0f32; 2]; 2];

        SaxpyHelper::saxpy_matrix(&a, &x, &y, &mut out).unwrap();
        assert_eq!(out, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn matrix_saxpy_accumulates_into_existing_output() {
        let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let x = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let y = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let mut out = vec![vec![10.0f32; 2]; 2];

        SaxpyHelper::saxpy_matrix(&a, &x, &y, &mut out).unwrap();
        assert_eq!(out, vec![vec![11.0, 12.0], vec![13.0, 14.0]]);
    }

    #[test]
    fn matrix_saxpy_rejects_non_square_lhs() {
        let a = vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 2.0]];
        let x = vec![vec![1.0], vec![2.0]];
        let y = vec![vec![0.0], vec![0.0]];
        let mut out = vec![vec![0.0f32; 1]; 2];

        let err = SaxpyHelper::saxpy_matrix(&a, &x, &y, &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn matrix_saxpy_rejects_row_count_mismatch() {
        let a = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let x = vec![vec![1.0, 2.0]];
        let y = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let mut out = vec![vec![0.0f32; 2]; 2];

        let err = SaxpyHelper::saxpy_matrix(&a, &x, &y, &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn matrix_saxpy_raw_matches_nested_form() {
        let m = 2;
        let n = 3;
        let a_flat = [2.0, 1.0, 0.5, -1.0];
        let x_flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y_flat = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6];

        let a: Vec<Vec<f32>> = a_flat.chunks(m).map(|r| r.to_vec()).collect();
        let x: Vec<Vec<f32>> = x_flat.chunks(n).map(|r| r.to_vec()).collect();
        let y: Vec<Vec<f32>> = y_flat.chunks(n).map(|r| r.to_vec()).collect();

        let mut nested = vec![vec![0.0f32; n]; m];
        let mut flat = vec![0.0f32; m * n];

        SaxpyHelper::saxpy_matrix(&a, &x, &y, &mut nested).unwrap();
        SaxpyHelper::saxpy_matrix_raw(&a_flat, &x_flat, &y_flat, &mut flat, m, n);

        for row in 0..m {
            for col in 0..n {
                assert_eq!(nested[row][col], flat[row * n + col]);
            }
        }
    }

    #[test]
    fn matrix_saxpy_matches_ndarray_oracle() {
        let m = 3;
        let n = 2;
        let a = [1.0, 2.0, 0.0, -1.0, 0.5, 3.0, 2.0, 2.0, 1.0];
        let x = [4.0, -2.0, 1.0, 0.5, 3.0, 3.0];
        let y = [1.0, 1.0, -1.0, 0.0, 2.0, 0.25];

        let mut out = vec![0.0f32; m * n];
        SaxpyHelper::saxpy_matrix_raw(&a, &x, &y, &mut out, m, n);

        let a_nd = Array2::from_shape_vec((m, m), a.to_vec()).unwrap();
        let x_nd = Array2::from_shape_vec((m, n), x.to_vec()).unwrap();
        let y_nd = Array2::from_shape_vec((m, n), y.to_vec()).unwrap();
        let expected = a_nd.dot(&x_nd) + &y_nd;

        for row in 0..m {
            for col in 0..n {
                let delta = (out[row * n + col] - expected[[row, col]]).abs();
                assert!(delta < 1e-5, "mismatch at ({}, {}): {}", row, col, delta);
            }
        }
    }
}
