use crate::prelude::{MathError, MathResult};

/// Element-wise addition over caller-owned dense buffers.
///
/// Output buffers are never resized or allocated here; callers size them to
/// hold the full result before the call.
pub struct ElementwiseHelper;

impl ElementwiseHelper {
    /// Checked add: `out[i] = a[i] + b[i]` for every index.
    ///
    /// Rejects empty or mismatched-length operands. `out` is assumed to be
    /// pre-sized to the operand length; a short output panics on the bounds
    /// check rather than being validated.
    pub fn add(a: &[f32], b: &[f32], out: &mut [f32]) -> MathResult<()> {
        if a.is_empty() || b.is_empty() {
            return Err(MathError::InvalidInput("empty addend".into()));
        }
        if a.len() != b.len() {
            return Err(MathError::InvalidInput(format!(
                "addend lengths differ: {} vs {}",
                a.len(),
                b.len()
            )));
        }

        for i in 0..a.len() {
            out[i] = a[i] + b[i];
        }
        Ok(())
    }

    /// Unchecked add over `width * height` linear row-major indices.
    ///
    /// Dimensions are a caller contract and are not validated.
    pub fn add_raw(a: &[f32], b: &[f32], out: &mut [f32], width: usize, height: usize) {
        let len = width * height;
        for i in 0..len {
            out[i] = a[i] + b[i];
        }
    }

    /// Returns true iff `c` is exactly the element-wise sum of `a` and `b`.
    ///
    /// Comparison is exact floating-point equality, no tolerance. This is a
    /// correctness oracle, not an arithmetic primitive.
    pub fn verify_add(a: &[f32], b: &[f32], c: &[f32], width: usize, height: usize) -> bool {
        let len = width * height;
        for i in 0..len {
            if c[i] != a[i] + b[i] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::MathError;

    #[test]
    fn add_produces_elementwise_sum() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let mut out = [0.0f32; 3];

        ElementwiseHelper::add(&a, &b, &mut out).unwrap();
        assert_eq!(out, [5.0, 7.0, 9.0]);
    }

    #[test]
    fn add_rejects_empty_addends() {
        let filled = [1.0, 2.0];
        let mut out = [0.0f32; 2];

        let err = ElementwiseHelper::add(&[], &filled, &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
        let err = ElementwiseHelper::add(&filled, &[], &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
    }

    #[test]
    fn add_rejects_length_mismatch() {
        let a = [1.0, 2.0];
        let b = [1.0, 2.0, 3.0];
        let mut out = [0.0f32; 3];

        let err = ElementwiseHelper::add(&a, &b, &mut out).unwrap_err();
        assert!(matches!(err, MathError::InvalidInput(_)));
        assert_eq!(out, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn add_raw_matches_checked_form() {
        let a = [0.5, -1.0, 2.25, 8.0, 0.0, -3.5];
        let b = [1.5, 4.0, -0.25, 1.0, 7.0, 3.5];
        let mut checked = [0.0f32; 6];
        let mut raw = [0.0f32; 6];

        ElementwiseHelper::add(&a, &b, &mut checked).unwrap();
        ElementwiseHelper::add_raw(&a, &b, &mut raw, 3, 2);
        assert_eq!(checked, raw);
    }

    #[test]
    fn verify_add_accepts_exact_sum() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let c = [5.0, 7.0, 9.0];

        assert!(ElementwiseHelper::verify_add(&a, &b, &c, 3, 1));
    }

    #[test]
    fn verify_add_rejects_single_perturbed_element() {
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let c = [5.0, 7.0, 10.0];

        assert!(!ElementwiseHelper::verify_add(&a, &b, &c, 3, 1));
    }
}
