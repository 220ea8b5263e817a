//! Native buffer -> host array conversions.
//!
//! Every function validates `data.len() == product(dims)` (and a rank of 1–3)
//! before the host is asked to allocate anything.

use std::mem;

use crate::error::ConversionError;
use crate::host::ArrayHost;
use crate::validation::check_slice_matches_shape;

/// Copies an owned buffer into a newly allocated host array. `data` is not modified.
pub fn from_vec<H, T>(host: &H, data: &[T], dims: &[usize]) -> Result<H::Array, ConversionError>
where
    H: ArrayHost<T>,
{
    let shape = check_slice_matches_shape(data, dims)?;
    Ok(host.copy_from_slice(data, &shape)?)
}

/// Transfers the allocation behind `data` to the host without copying.
///
/// On success `data` is left empty and the host frees the memory once its array
/// is released. Validation runs before `data` is consumed, so a rejected shape
/// leaves `data` exactly as it was.
pub fn from_vec_moved<H, T>(
    host: &H,
    data: &mut Vec<T>,
    dims: &[usize],
) -> Result<H::Array, ConversionError>
where
    H: ArrayHost<T>,
{
    let shape = check_slice_matches_shape(data.as_slice(), dims)?;
    let owned = mem::take(data);
    log::debug!(
        "handing {} element buffer to host as shape {}",
        owned.len(),
        shape
    );
    Ok(host.adopt_vec(owned, &shape)?)
}

/// Copies a borrowed slice into a newly allocated host array.
///
/// A slice does not own its memory, so ownership can never be transferred; this
/// always allocates and copies.
pub fn from_view<H, T>(host: &H, data: &[T], dims: &[usize]) -> Result<H::Array, ConversionError>
where
    H: ArrayHost<T>,
{
    let shape = check_slice_matches_shape(data, dims)?;
    Ok(host.copy_from_slice(data, &shape)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::host::HostArray;
    use crate::ndarray_host::NdarrayHost;

    #[test]
    fn from_vec_copies() {
        let mut data = vec![2.2f64, 3.3, 4.4, 5.5];
        let arr = from_vec(&NdarrayHost, &data, &[2, 2]).unwrap();
        assert_eq!(arr.dims(), &[2, 2]);
        data[0] = -1.0;
        assert_eq!(arr[[0, 0]], 2.2);
        assert_eq!(arr[[1, 1]], 5.5);
    }

    #[test]
    fn from_vec_moved_transfers_ownership() {
        let mut data = vec![7, 8, 9, 10, 11, 12];
        let ptr = data.as_ptr();
        let arr = from_vec_moved(&NdarrayHost, &mut data, &[3, 2]).unwrap();
        assert!(data.is_empty());
        assert_eq!(arr.dims(), &[3, 2]);
        let flat = arr.row_major_slice().unwrap();
        assert_eq!(flat.as_ptr(), ptr);
        assert_eq!(flat[0], 7);
        assert_eq!(flat[5], 12);
    }

    #[test]
    fn from_vec_moved_leaves_buffer_on_failure() {
        let mut data = vec![1, 2, 3, 4];
        let err = from_vec_moved(&NdarrayHost, &mut data, &[3, 4]).unwrap_err();
        assert_eq!(
            err.as_shape_error(),
            Some(&ShapeError::SizeMismatch {
                expected: 12,
                actual: 4
            })
        );
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn from_view_copies_slice() {
        let buffer = [0.5f32, 1.5, 2.5, 3.5, 4.5, 5.5];
        let arr = from_view(&NdarrayHost, &buffer[..], &[2, 3]).unwrap();
        assert_eq!(arr.dims(), &[2, 3]);
        assert_eq!(arr[[0, 2]], 2.5);
        assert_eq!(arr[[1, 2]], 5.5);
    }

    #[test]
    fn from_view_rejects_mismatched_slice() {
        let buffer = [1u8, 2, 3];
        let err = from_view(&NdarrayHost, &buffer[..], &[2, 2]).unwrap_err();
        assert_eq!(
            err.as_shape_error(),
            Some(&ShapeError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn outbound_rejects_empty_shape() {
        let data: Vec<i32> = Vec::new();
        let err = from_vec(&NdarrayHost, &data, &[]).unwrap_err();
        assert!(matches!(
            err.as_shape_error(),
            Some(ShapeError::UnsupportedRank { rank: 0, .. })
        ));
    }
}
