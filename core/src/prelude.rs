/// Common error type for the arithmetic entry points.
///
/// Checked entry points validate their dimensional preconditions up front and
/// return `InvalidInput` before any output element is written. The unchecked
/// `_raw` variants perform no validation; mismatched dimensions there surface
/// as slice bounds panics.
#[derive(thiserror::Error, Debug)]
pub enum MathError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type MathResult<T> = Result<T, MathError>;
