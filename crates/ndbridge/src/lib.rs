//! # ndbridge - row-major bridge between host arrays and native buffers
//!
//! Converts rank 1–3 arrays owned by a host runtime (NumPy through
//! `ndbridge-py`, or `ndarray` in-process) to and from `Vec<T>` / `&[T]`,
//! enforcing row-major (C-order) layout and exact shape agreement.
//!
//! ## Overview
//!
//! - [`Shape`], [`Strides`], [`shape_from_array`], [`strides_from_shape`]: shape
//!   extraction and row-major stride computation.
//! - [`validation`]: rank-specific checks against declared image extents.
//! - [`ensure_row_major_contiguous`]: replaces strided arrays with row-major copies.
//! - [`from_host`]: `vector` (owned copy) and `view` (zero-copy borrow).
//! - [`to_host`]: `from_vec` (copy), `from_vec_moved` (ownership transfer) and
//!   `from_view` (copy from a borrow).
//! - [`HostArray`] / [`ArrayHost`]: the protocol a host implements. The crate
//!   ships an `ndarray` host and, behind the `numpy` feature, a NumPy host.
//!
//! ## Example
//!
//! ```
//! use ndbridge::{from_host, to_host, ImageDims, NdarrayHost};
//!
//! let mut pixels = vec![1u8, 2, 3, 4, 5, 6];
//! let array = to_host::from_vec_moved(&NdarrayHost, &mut pixels, &[2, 3]).unwrap();
//! assert!(pixels.is_empty());
//!
//! let copy = from_host::vector(&array, ImageDims::new(3, 2)).unwrap();
//! assert_eq!(copy, vec![1, 2, 3, 4, 5, 6]);
//! ```

pub mod contiguity;
mod env;
pub mod error;
pub mod from_host;
pub mod host;
pub mod image;
pub mod ndarray_host;
#[cfg(feature = "numpy")]
pub mod numpy_host;
pub mod shape;
pub mod to_host;
pub mod validation;

pub use contiguity::{ensure_row_major_contiguous, is_row_major};
pub use error::{Axis, ConversionError, HostError, ShapeError};
pub use host::{ArrayHost, HostArray};
pub use image::{image_shape, to_image_array, to_image_array_moved, ImageDims};
pub use ndarray_host::{NdArray, NdarrayHost};
pub use shape::{
    checked_byte_size, checked_element_count, shape_from_array, strides_from_shape, Rank, Shape,
    Strides, SUPPORTED_RANKS,
};
pub use validation::{
    check_shape, check_shape_1d, check_shape_2d, check_shape_3d, check_slice_matches_shape,
    check_vec_matches_shape,
};
