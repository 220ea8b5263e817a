#![allow(clippy::useless_conversion)]

//! NumPy bindings for `ndbridge`.
//!
//! [`from_py`] and [`to_py`] are the typed Rust entry points for code that
//! already holds a `PyArrayDyn<T>`. The `_native` module exposes dtype-dispatched
//! helpers to Python.

use pyo3::prelude::*;

pub mod from_py;
pub mod image;
pub mod to_py;

#[pymodule]
fn _native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(image::ensure_c_contiguous, m)?)?;
    m.add_function(wrap_pyfunction!(image::validate_image, m)?)?;
    m.add_function(wrap_pyfunction!(image::image_shape, m)?)?;
    m.add_function(wrap_pyfunction!(image::flatten_image, m)?)?;
    Ok(())
}
