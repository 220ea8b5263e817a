use ndbridge::{ImageDims, SUPPORTED_RANKS};
use ndbridge_py::{from_py, image, to_py};
use numpy::{PyArray, PyArrayDyn, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

/// Runs `f` with the GIL held, or skips when numpy is not importable.
fn with_numpy<F>(f: F)
where
    F: for<'py> FnOnce(Python<'py>),
{
    Python::with_gil(|py| {
        if py.import_bound("numpy").is_err() {
            eprintln!("numpy not available; skipping");
            return;
        }
        f(py);
    });
}

fn array<'py, T: numpy::Element>(
    py: Python<'py>,
    data: Vec<T>,
    dims: &[usize],
) -> Bound<'py, PyArrayDyn<T>> {
    PyArray::from_vec_bound(py, data).reshape(dims).unwrap()
}

fn transposed<'py, T: numpy::Element>(arr: &Bound<'py, PyArrayDyn<T>>) -> Bound<'py, PyArrayDyn<T>> {
    arr.getattr("T")
        .unwrap()
        .downcast_into::<PyArrayDyn<T>>()
        .unwrap()
}

#[test]
fn view_of_2x3_int_array_is_flat_sequence() {
    with_numpy(|py| {
        let mut arr = array(py, (1..=6).collect::<Vec<i32>>(), &[2, 3]);
        let span = from_py::view(&mut arr, ImageDims::new(3, 2)).unwrap();
        assert_eq!(span, &[1, 2, 3, 4, 5, 6]);
    });
}

#[test]
fn transposed_array_is_copied_in_logical_order() {
    with_numpy(|py| {
        // Physical [1, 3, 2, 4] transposed reads as [[1, 2], [3, 4]].
        let base = array(py, vec![1i32, 3, 2, 4], &[2, 2]);
        let mut logical = transposed(&base);
        assert!(!logical.is_c_contiguous());

        let owned = from_py::vector(&logical, ImageDims::new(2, 2)).unwrap();
        assert_eq!(owned, vec![1, 2, 3, 4]);
        assert!(!logical.is_c_contiguous());

        let span = from_py::view(&mut logical, ImageDims::new(2, 2)).unwrap();
        assert_eq!(span, &[1, 2, 3, 4]);
        assert!(logical.is_c_contiguous());
    });
}

#[test]
fn ensure_c_contiguous_fixes_strides() {
    with_numpy(|py| {
        let base = array(py, (0..12).map(f64::from).collect::<Vec<f64>>(), &[3, 4]);
        let fixed = from_py::ensure_c_contiguous(transposed(&base)).unwrap();
        assert!(fixed.is_c_contiguous());
        assert_eq!(fixed.shape(), &[4, 3]);
        assert_eq!(fixed.strides(), &[24, 8]);
    });
}

#[test]
fn mismatched_shape_raises_value_error() {
    with_numpy(|py| {
        let arr = array(py, vec![0u8; 12], &[3, 4]);
        let err = from_py::vector(&arr, ImageDims::new(3, 4)).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));

        let err = from_py::vector(&arr, ImageDims::new(4, 3).with_channels(2)).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}

#[test]
fn rank_four_is_rejected() {
    with_numpy(|py| {
        let arr = array(py, vec![0.0f32; 16], &[2, 2, 2, 2]);
        assert_eq!(SUPPORTED_RANKS, &[1, 2, 3]);
        let err = from_py::vector_any(&arr).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}

#[test]
fn from_vec_moved_hands_buffer_to_numpy() {
    with_numpy(|py| {
        let mut data: Vec<i64> = (0..12).collect();
        let arr = to_py::from_vec_moved(py, &mut data, &[3, 2, 2]).unwrap();
        assert!(data.is_empty());
        assert_eq!(arr.shape(), &[3, 2, 2]);
        assert_eq!(from_py::vector_any(&arr).unwrap(), (0..12).collect::<Vec<i64>>());
    });
}

#[test]
fn from_vec_moved_leaves_data_on_size_mismatch() {
    with_numpy(|py| {
        let mut data = vec![1.0f32, 2.0, 3.0, 4.0];
        let err = to_py::from_vec_moved(py, &mut data, &[3, 4]).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
        assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0]);
    });
}

#[test]
fn from_view_rejects_mismatched_slice() {
    with_numpy(|py| {
        let buffer = [1u8, 2, 3];
        let err = to_py::from_view(py, &buffer[..], &[2, 2]).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
        assert!(err.to_string().contains("expected 4 elements, found 3"));
    });
}

#[test]
fn copies_are_independent_of_the_source() {
    with_numpy(|py| {
        let mut data = vec![1u8, 2, 3, 4, 5, 6];
        let arr = to_py::from_vec(py, &data, &[2, 3]).unwrap();
        data[0] = 99;
        assert_eq!(from_py::vector_any(&arr).unwrap(), vec![1, 2, 3, 4, 5, 6]);

        let img = to_py::image(py, &data, ImageDims::new(3, 2)).unwrap();
        assert_eq!(img.shape(), &[2, 3]);
    });
}

#[test]
fn module_helpers_dispatch_on_dtype() {
    with_numpy(|py| {
        let arr = array(py, (0..24).collect::<Vec<u8>>(), &[2, 3, 4]);
        let shape = image::validate_image(arr.as_any(), 4, 3, 2).unwrap();
        assert_eq!(shape, vec![2, 3, 4]);

        let flat = image::flatten_image(arr.as_any(), 4, 3, 2).unwrap();
        let flat = flat.downcast_into::<PyArrayDyn<u8>>().unwrap();
        assert_eq!(flat.shape(), &[24]);

        assert_eq!(image::image_shape(4, 3, 1).unwrap(), vec![3, 4]);
    });
}

#[test]
fn unsupported_dtype_raises_type_error() {
    with_numpy(|py| {
        let arr = array(py, vec![0u16; 6], &[2, 3]);
        let err = image::validate_image(arr.as_any(), 3, 2, 1).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
    });
}

#[test]
fn byte_swapped_dtype_is_not_coerced() {
    with_numpy(|py| {
        let arr = array(py, vec![0.0f32; 6], &[2, 3]);
        let swapped = if cfg!(target_endian = "little") { ">f4" } else { "<f4" };
        let foreign = arr.call_method1("astype", (swapped,)).unwrap();
        let err = image::validate_image(&foreign, 3, 2, 1).unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
    });
}
