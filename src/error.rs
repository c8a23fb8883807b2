use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EmsaError {
    #[error("scheme was configured for a {expected} byte digest but was given {actual} bytes")]
    LengthMismatch { expected: usize, actual: usize },
}
