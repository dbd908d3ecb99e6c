//! Dense matrix and vector arithmetic core for the Rust exercise platform.
//!
//! The modules mirror the legacy dmath routines while providing typed errors,
//! paired checked/unchecked entry points, and a flat row-major matrix type.

pub mod math;
pub mod prelude;

pub use math::{DenseMatrix, ElementwiseHelper, SaxpyHelper};
pub use prelude::{MathError, MathResult};
