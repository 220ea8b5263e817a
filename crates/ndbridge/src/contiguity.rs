//! Row-major contiguity enforcement.

use crate::error::ConversionError;
use crate::host::HostArray;

/// Whether `array` can be read as one flat row-major buffer.
pub fn is_row_major<A: HostArray>(array: &A) -> bool {
    array.is_row_major()
}

/// Returns `array` itself when it is already row-major, otherwise the host's
/// row-major copy of it. Callers rebind their handle to the returned value.
///
/// After a successful return the flat buffer lists elements in logical
/// (shape-indexed) order, and every axis with extent > 1 has the stride
/// [`strides_from_shape`](crate::shape::strides_from_shape) gives it. Axes of
/// extent 1 may keep any stride the host reports.
pub fn ensure_row_major_contiguous<A: HostArray>(array: A) -> Result<A, ConversionError> {
    if array.is_row_major() {
        return Ok(array);
    }
    force_row_major(&array)
}

/// Materializes a row-major copy and verifies the host honoured the request.
pub(crate) fn force_row_major<A: HostArray>(array: &A) -> Result<A, ConversionError> {
    log::debug!(
        "forcing row-major copy of array with dims {:?} and byte strides {:?}",
        array.dims(),
        array.byte_strides()
    );
    let replacement = array.to_row_major()?;
    if !replacement.is_row_major() {
        return Err(ConversionError::NotRowMajor {
            dims: replacement.dims().to_vec(),
        });
    }
    Ok(replacement)
}
