//! Host array -> native buffer conversions.
//!
//! Two families with the same validation:
//!
//! * [`vector`] / [`vector_any`] copy the elements into a new `Vec<T>`. The result
//!   is independent of the host array and may outlive it. Costs one allocation
//!   and a full copy.
//! * [`view`] / [`view_any`] return a slice into the host's own buffer. No copy
//!   is made, but the slice is only valid while the handle that produced it is
//!   alive and unmodified by the host; the caller is responsible for keeping it
//!   alive.
//!
//! Both families validate the shape before touching any data and force the
//! buffer to row-major order first, so elements always come out in logical
//! row-major order.

use crate::contiguity::force_row_major;
use crate::env;
use crate::error::ConversionError;
use crate::host::HostArray;
use crate::image::ImageDims;
use crate::shape::{shape_from_array, Shape, SUPPORTED_RANKS};
use crate::validation::check_shape;

fn validate_image<A: HostArray>(array: &A, dims: ImageDims) -> Result<Shape, ConversionError> {
    let shape = shape_from_array(array, SUPPORTED_RANKS, dims.total_size()?)?;
    check_shape(shape.dims(), dims)?;
    Ok(shape)
}

fn validate_undeclared<A: HostArray>(
    array: &A,
    allowed_ranks: &[usize],
) -> Result<Shape, ConversionError> {
    let total = crate::shape::checked_element_count(array.dims())?;
    Ok(shape_from_array(array, allowed_ranks, total)?)
}

fn copy_out<A: HostArray>(array: &A) -> Result<Vec<A::Elem>, ConversionError> {
    let forced;
    let source = if array.is_row_major() {
        array
    } else {
        forced = force_row_major(array)?;
        &forced
    };
    let data = source
        .row_major_slice()
        .ok_or_else(|| ConversionError::NotRowMajor {
            dims: source.dims().to_vec(),
        })?;
    Ok(data.to_vec())
}

fn borrow_in_place<A: HostArray>(array: &mut A) -> Result<&[A::Elem], ConversionError> {
    if !array.is_row_major() {
        *array = force_row_major(array)?;
    }
    let array = &*array;
    array
        .row_major_slice()
        .ok_or_else(|| ConversionError::NotRowMajor {
            dims: array.dims().to_vec(),
        })
}

/// Copies an image-shaped host array into a new `Vec`.
///
/// The array must be `[width * height * channels]`, `[height, width]` (single
/// channel) or `[channels, height, width]`. Validation runs before any copy, so a
/// failed call never produces partial output. The caller's handle is not
/// modified; a strided input is copied through a temporary row-major replacement.
pub fn vector<A: HostArray>(array: &A, dims: ImageDims) -> Result<Vec<A::Elem>, ConversionError> {
    validate_image(array, dims)?;
    copy_out(array)
}

/// Copies a host array of any accepted rank into a new `Vec`.
///
/// Accepted ranks default to 1–3 and can be narrowed with
/// `NDBRIDGE_UNDECLARED_RANKS`.
pub fn vector_any<A: HostArray>(array: &A) -> Result<Vec<A::Elem>, ConversionError> {
    vector_in_ranks(array, env::undeclared_ranks())
}

fn vector_in_ranks<A: HostArray>(
    array: &A,
    allowed_ranks: &[usize],
) -> Result<Vec<A::Elem>, ConversionError> {
    validate_undeclared(array, allowed_ranks)?;
    copy_out(array)
}

/// Borrows the buffer of an image-shaped host array without copying.
///
/// Validation is identical to [`vector`]. If the array is not row-major, `*array`
/// is first rebound to the host's row-major copy, and the returned slice points
/// into that copy. The slice borrows `array`: it is valid only as long as the
/// handle stays alive and the host leaves the buffer in place. Prefer [`vector`]
/// whenever the data must outlive the handle.
pub fn view<A: HostArray>(array: &mut A, dims: ImageDims) -> Result<&[A::Elem], ConversionError> {
    validate_image(array, dims)?;
    borrow_in_place(array)
}

/// Borrows the buffer of a host array of any accepted rank without copying.
///
/// Same lifetime contract as [`view`]; same rank policy as [`vector_any`].
pub fn view_any<A: HostArray>(array: &mut A) -> Result<&[A::Elem], ConversionError> {
    view_in_ranks(array, env::undeclared_ranks())
}

fn view_in_ranks<'a, A: HostArray>(
    array: &'a mut A,
    allowed_ranks: &[usize],
) -> Result<&'a [A::Elem], ConversionError> {
    validate_undeclared(array, allowed_ranks)?;
    borrow_in_place(array)
}
