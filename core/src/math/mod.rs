pub mod elementwise;
pub mod matrix;
pub mod saxpy;

pub use elementwise::ElementwiseHelper;
pub use matrix::DenseMatrix;
pub use saxpy::SaxpyHelper;
