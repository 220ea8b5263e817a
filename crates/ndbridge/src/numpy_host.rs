//! NumPy host: arrays are `Bound<'py, PyArrayDyn<T>>`, allocation goes through
//! `Python<'py>`.
//!
//! Holding a `Bound<'py, _>` proves the GIL is held, so every protocol call below
//! runs with the interpreter locked.

use numpy::{Element, PyArray, PyArrayDyn, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::{ConversionError, HostError, ShapeError};
use crate::host::{ArrayHost, HostArray};
use crate::shape::Shape;

impl<'py, T: Element + Copy> HostArray for Bound<'py, PyArrayDyn<T>> {
    type Elem = T;

    fn dims(&self) -> &[usize] {
        PyUntypedArrayMethods::shape(self)
    }

    fn byte_strides(&self) -> Vec<isize> {
        PyUntypedArrayMethods::strides(self).to_vec()
    }

    fn is_row_major(&self) -> bool {
        self.is_c_contiguous()
    }

    fn to_row_major(&self) -> Result<Self, HostError> {
        let py = self.py();
        py.import_bound("numpy")
            .and_then(|module| module.call_method1("ascontiguousarray", (self,)))
            .and_then(|arr| arr.downcast_into::<PyArrayDyn<T>>().map_err(PyErr::from))
            .map_err(|e| HostError::new("numpy.ascontiguousarray", e))
    }

    fn row_major_slice(&self) -> Option<&[T]> {
        if !self.is_c_contiguous() {
            return None;
        }
        // SAFETY: the slice borrows `self`, which keeps the array object alive while
        // the GIL is held. Callers of `view` accept that Python code must not resize
        // or write the buffer while it is borrowed.
        unsafe { self.as_slice().ok() }
    }
}

impl<'py, T: Element + Copy> ArrayHost<T> for Python<'py> {
    type Array = Bound<'py, PyArrayDyn<T>>;

    fn copy_from_slice(&self, data: &[T], shape: &Shape) -> Result<Self::Array, HostError> {
        PyArray::from_slice_bound(*self, data)
            .reshape(shape.dims())
            .map_err(|e| HostError::new("allocate numpy array", e))
    }

    fn adopt_vec(&self, data: Vec<T>, shape: &Shape) -> Result<Self::Array, HostError> {
        // The Vec ends up inside a capsule that numpy releases together with the array.
        PyArray::from_vec_bound(*self, data)
            .reshape(shape.dims())
            .map_err(|e| HostError::new("adopt buffer into numpy array", e))
    }
}

impl From<ShapeError> for PyErr {
    fn from(err: ShapeError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

impl From<ConversionError> for PyErr {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::Shape(err) => err.into(),
            ConversionError::NotRowMajor { dims } => PyValueError::new_err(format!(
                "host returned a non row-major array for shape {dims:?}"
            )),
            ConversionError::Host(err) => {
                let context = err.context();
                match err.into_source().downcast::<PyErr>() {
                    Ok(py_err) => *py_err,
                    Err(other) => PyRuntimeError::new_err(format!("{context}: {other}")),
                }
            }
        }
    }
}
