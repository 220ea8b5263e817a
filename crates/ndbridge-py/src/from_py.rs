//! NumPy array -> native buffer conversions.
//!
//! [`vector`] copies and is always safe to keep. [`view`] borrows numpy's own
//! buffer: it is faster but is only valid while the array handle is alive and
//! Python code leaves the buffer alone. Both reject anything but the exact
//! element type `T` at the downcast, and both force C order before reading.

use ndbridge::{check_shape, from_host, shape_from_array, ImageDims, Shape, SUPPORTED_RANKS};
use numpy::{Element, PyArrayDyn};
use pyo3::prelude::*;

/// Validates an image-shaped array without touching its data.
pub fn validate<T: Element + Copy>(
    array: &Bound<'_, PyArrayDyn<T>>,
    dims: ImageDims,
) -> PyResult<Shape> {
    let shape = shape_from_array(array, SUPPORTED_RANKS, dims.total_size()?)?;
    check_shape(shape.dims(), dims)?;
    Ok(shape)
}

/// Copies an image-shaped array into a `Vec` in row-major order.
pub fn vector<T: Element + Copy>(
    array: &Bound<'_, PyArrayDyn<T>>,
    dims: ImageDims,
) -> PyResult<Vec<T>> {
    Ok(from_host::vector(array, dims)?)
}

/// Copies an array of any accepted rank into a `Vec` in row-major order.
pub fn vector_any<T: Element + Copy>(array: &Bound<'_, PyArrayDyn<T>>) -> PyResult<Vec<T>> {
    Ok(from_host::vector_any(array)?)
}

/// Borrows the buffer of an image-shaped array.
///
/// A non C-contiguous `array` is rebound to a C-ordered copy first, and the slice
/// points into that copy.
pub fn view<'a, T: Element + Copy>(
    array: &'a mut Bound<'_, PyArrayDyn<T>>,
    dims: ImageDims,
) -> PyResult<&'a [T]> {
    Ok(from_host::view(array, dims)?)
}

/// Borrows the buffer of an array of any accepted rank.
pub fn view_any<'a, T: Element + Copy>(
    array: &'a mut Bound<'_, PyArrayDyn<T>>,
) -> PyResult<&'a [T]> {
    Ok(from_host::view_any(array)?)
}

/// Returns `array` if it is C-contiguous, otherwise a C-ordered copy.
pub fn ensure_c_contiguous<'py, T: Element + Copy>(
    array: Bound<'py, PyArrayDyn<T>>,
) -> PyResult<Bound<'py, PyArrayDyn<T>>> {
    Ok(ndbridge::ensure_row_major_contiguous(array)?)
}
