use thiserror::Error;

use crate::matrix::MatrixError;

#[derive(Debug, Error)]
pub enum RayCasterError {
    #[error("Attempt to use a non-vector tuple in a vector-only context")]
    NonVectorTuple,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
