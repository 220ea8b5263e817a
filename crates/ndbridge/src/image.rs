//! Image-shaped conventions layered over the generic converters.
//!
//! Images travel as `[height, width]` when single-channel and as
//! `[channels, height, width]` otherwise; a flattened `[width * height * channels]`
//! buffer is accepted on the way in.

use crate::error::{ConversionError, ShapeError};
use crate::host::ArrayHost;
use crate::shape::{checked_element_count, Shape};
use crate::to_host;

/// Caller-declared extents of an image buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDims {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl ImageDims {
    /// Single-channel dimensions.
    pub const fn new(width: usize, height: usize) -> Self {
        ImageDims {
            width,
            height,
            channels: 1,
        }
    }

    pub const fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// `width * height * channels`, overflow-checked.
    pub fn total_size(&self) -> Result<usize, ShapeError> {
        checked_element_count(&[self.width, self.height, self.channels])
    }
}

/// Host shape for an image with the given dimensions.
pub fn image_shape(dims: ImageDims) -> Result<Shape, ShapeError> {
    if dims.channels == 1 {
        Shape::new([dims.height, dims.width])
    } else {
        Shape::new([dims.channels, dims.height, dims.width])
    }
}

/// Copies `data` into a new host array shaped as an image.
pub fn to_image_array<H, T>(
    host: &H,
    data: &[T],
    dims: ImageDims,
) -> Result<H::Array, ConversionError>
where
    H: ArrayHost<T>,
{
    let shape = image_shape(dims)?;
    to_host::from_vec(host, data, shape.dims())
}

/// Moves `data` into a new host array shaped as an image.
///
/// On success `data` is left empty; on failure it is left untouched.
pub fn to_image_array_moved<H, T>(
    host: &H,
    data: &mut Vec<T>,
    dims: ImageDims,
) -> Result<H::Array, ConversionError>
where
    H: ArrayHost<T>,
{
    let shape = image_shape(dims)?;
    to_host::from_vec_moved(host, data, shape.dims())
}
