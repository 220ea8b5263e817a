//! Checks of reported dimensions against caller-declared image extents.

use crate::error::{Axis, ShapeError};
use crate::image::ImageDims;
use crate::shape::{checked_byte_size, Rank, Shape};

fn expect_dim(axis: Axis, expected: usize, actual: usize) -> Result<(), ShapeError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ShapeError::DimensionMismatch {
            axis,
            expected,
            actual,
        })
    }
}

fn expect_rank(dims: &[usize], rank: Rank) -> Result<(), ShapeError> {
    if dims.len() == rank.ndim() {
        Ok(())
    } else {
        Err(ShapeError::UnsupportedRank {
            rank: dims.len(),
            allowed: vec![rank.ndim()],
        })
    }
}

/// Flattened buffer: `dims == [width * height]`.
pub fn check_shape_1d(dims: &[usize], width: usize, height: usize) -> Result<(), ShapeError> {
    expect_rank(dims, Rank::One)?;
    let expected = width
        .checked_mul(height)
        .ok_or_else(|| ShapeError::ElementCountOverflow {
            dims: vec![width, height],
        })?;
    expect_dim(Axis::Length, expected, dims[0])
}

/// Single-channel image: `dims == [height, width]`.
pub fn check_shape_2d(dims: &[usize], width: usize, height: usize) -> Result<(), ShapeError> {
    expect_rank(dims, Rank::Two)?;
    expect_dim(Axis::Height, height, dims[0])?;
    expect_dim(Axis::Width, width, dims[1])
}

/// Channel-first image: `dims == [channels, height, width]`, checked in that order.
pub fn check_shape_3d(
    dims: &[usize],
    channels: usize,
    width: usize,
    height: usize,
) -> Result<(), ShapeError> {
    expect_rank(dims, Rank::Three)?;
    expect_dim(Axis::Channels, channels, dims[0])?;
    expect_dim(Axis::Height, height, dims[1])?;
    expect_dim(Axis::Width, width, dims[2])
}

/// Rank-dispatching entry point over the three supported layouts.
///
/// A flattened buffer must hold `width * height * channels` elements; a 2-D
/// buffer is only valid for single-channel images.
pub fn check_shape(dims: &[usize], expected: ImageDims) -> Result<(), ShapeError> {
    match Rank::from_ndim(dims.len())? {
        Rank::One => expect_dim(Axis::Length, expected.total_size()?, dims[0]),
        Rank::Two => {
            expect_dim(Axis::Channels, expected.channels, 1)?;
            check_shape_2d(dims, expected.width, expected.height)
        }
        Rank::Three => check_shape_3d(dims, expected.channels, expected.width, expected.height),
    }
}

/// Ensures a native slice holds exactly as many elements as `dims` describes.
pub fn check_slice_matches_shape<T>(data: &[T], dims: &[usize]) -> Result<Shape, ShapeError> {
    let shape = Shape::new(dims.to_vec())?;
    checked_byte_size::<T>(shape.dims())?;
    let expected = shape.num_elements();
    if data.len() != expected {
        return Err(ShapeError::SizeMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(shape)
}

/// [`check_slice_matches_shape`] for an owned buffer.
#[allow(clippy::ptr_arg)]
pub fn check_vec_matches_shape<T>(data: &Vec<T>, dims: &[usize]) -> Result<Shape, ShapeError> {
    check_slice_matches_shape(data.as_slice(), dims)
}
