use crate::{Matrix, Result, Tuple};

/// Builds the matrix that maps world space into camera space, given the eye
/// position, the point to look at, and which way is up.
pub fn view_transform(from: Tuple, to: Tuple, up: Tuple) -> Result<Matrix> {
    let forward = (to - from).normalize();
    let left = forward.cross(&up.normalize())?;
    let true_up = left.cross(&forward)?;
    let orientation = Matrix::new(
        4,
        4,
        vec![
            left.x, left.y, left.z, 0., //
            true_up.x, true_up.y, true_up.z, 0., //
            -forward.x, -forward.y, -forward.z, 0., //
            0., 0., 0., 1.,
        ],
    );
    // moving the eye to `from` is really moving the world the other way
    Ok(orientation * Matrix::translation(-from.x, -from.y, -from.z))
}
