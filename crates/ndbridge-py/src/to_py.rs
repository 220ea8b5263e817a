//! Native buffer -> NumPy array conversions.

use ndbridge::{image_shape, to_host, ImageDims};
use numpy::{Element, PyArrayDyn};
use pyo3::prelude::*;

/// Copies `data` into a new array of shape `dims`.
pub fn from_vec<'py, T: Element + Copy>(
    py: Python<'py>,
    data: &[T],
    dims: &[usize],
) -> PyResult<Bound<'py, PyArrayDyn<T>>> {
    Ok(to_host::from_vec(&py, data, dims)?)
}

/// Hands the allocation of `data` to numpy; `data` is empty afterwards.
///
/// A shape that does not match `data.len()` raises `ValueError` and leaves `data`
/// untouched.
pub fn from_vec_moved<'py, T: Element + Copy>(
    py: Python<'py>,
    data: &mut Vec<T>,
    dims: &[usize],
) -> PyResult<Bound<'py, PyArrayDyn<T>>> {
    Ok(to_host::from_vec_moved(&py, data, dims)?)
}

/// Copies a borrowed slice into a new array of shape `dims`.
pub fn from_view<'py, T: Element + Copy>(
    py: Python<'py>,
    data: &[T],
    dims: &[usize],
) -> PyResult<Bound<'py, PyArrayDyn<T>>> {
    Ok(to_host::from_view(&py, data, dims)?)
}

/// Copies `data` into an image-shaped array (`[h, w]` or `[c, h, w]`).
pub fn image<'py, T: Element + Copy>(
    py: Python<'py>,
    data: &[T],
    dims: ImageDims,
) -> PyResult<Bound<'py, PyArrayDyn<T>>> {
    let shape = image_shape(dims)?;
    from_view(py, data, shape.dims())
}

/// Moves `data` into an image-shaped array.
pub fn image_moved<'py, T: Element + Copy>(
    py: Python<'py>,
    data: &mut Vec<T>,
    dims: ImageDims,
) -> PyResult<Bound<'py, PyArrayDyn<T>>> {
    let shape = image_shape(dims)?;
    from_vec_moved(py, data, shape.dims())
}
