use ndbridge::ImageDims;
use numpy::{
    dtype_bound, PyArrayDescrMethods, PyArrayDyn, PyUntypedArray, PyUntypedArrayMethods,
};
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

use crate::{from_py, to_py};

/// Downcasts `$array` to the `PyArrayDyn` whose element type is equivalent to
/// its dtype and evaluates `$body` with the typed handle bound to `$typed`.
macro_rules! with_typed_array {
    ($array:expr, |$typed:ident| $body:expr) => {{
        let array: &Bound<'_, PyAny> = $array;
        let py = array.py();
        let dtype = array.downcast::<PyUntypedArray>()?.dtype();
        if dtype.is_equiv_to(&dtype_bound::<f32>(py)) {
            let $typed = array.downcast::<PyArrayDyn<f32>>()?.clone();
            $body
        } else if dtype.is_equiv_to(&dtype_bound::<f64>(py)) {
            let $typed = array.downcast::<PyArrayDyn<f64>>()?.clone();
            $body
        } else if dtype.is_equiv_to(&dtype_bound::<i32>(py)) {
            let $typed = array.downcast::<PyArrayDyn<i32>>()?.clone();
            $body
        } else if dtype.is_equiv_to(&dtype_bound::<i64>(py)) {
            let $typed = array.downcast::<PyArrayDyn<i64>>()?.clone();
            $body
        } else if dtype.is_equiv_to(&dtype_bound::<u8>(py)) {
            let $typed = array.downcast::<PyArrayDyn<u8>>()?.clone();
            $body
        } else {
            Err(PyTypeError::new_err(format!(
                "unsupported dtype: {}. Supported types: float32, float64, int32, int64, uint8",
                dtype
            )))
        }
    }};
}

fn image_dims(width: usize, height: usize, channels: usize) -> ImageDims {
    ImageDims::new(width, height).with_channels(channels)
}

/// Return `array` unchanged if it is C-contiguous, otherwise a C-ordered copy.
#[pyfunction]
pub fn ensure_c_contiguous<'py>(array: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
    with_typed_array!(array, |typed| {
        from_py::ensure_c_contiguous(typed).map(Bound::into_any)
    })
}

/// Check that `array` holds a `width` x `height` image with `channels` planes.
///
/// Returns the array's shape. Raises `ValueError` on mismatch.
#[pyfunction]
#[pyo3(signature = (array, width, height, channels = 1))]
pub fn validate_image(
    array: &Bound<'_, PyAny>,
    width: usize,
    height: usize,
    channels: usize,
) -> PyResult<Vec<usize>> {
    let dims = image_dims(width, height, channels);
    with_typed_array!(array, |typed| {
        from_py::validate(&typed, dims).map(|shape| shape.into_dims())
    })
}

/// Shape used for an image: `[height, width]`, or `[channels, height, width]`.
#[pyfunction]
#[pyo3(signature = (width, height, channels = 1))]
pub fn image_shape(width: usize, height: usize, channels: usize) -> PyResult<Vec<usize>> {
    Ok(ndbridge::image_shape(image_dims(width, height, channels))?.into_dims())
}

/// Copy an image-shaped array into a new 1-D C-ordered array.
#[pyfunction]
#[pyo3(signature = (array, width, height, channels = 1))]
pub fn flatten_image<'py>(
    array: &Bound<'py, PyAny>,
    width: usize,
    height: usize,
    channels: usize,
) -> PyResult<Bound<'py, PyAny>> {
    let py = array.py();
    let dims = image_dims(width, height, channels);
    with_typed_array!(array, |typed| {
        let mut data = from_py::vector(&typed, dims)?;
        let len = data.len();
        log::trace!("flattening {} elements into a 1-D array", len);
        to_py::from_vec_moved(py, &mut data, &[len]).map(Bound::into_any)
    })
}
