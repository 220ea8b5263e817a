//! Shape and stride bookkeeping for row-major (C-order) arrays.

use std::fmt;
use std::mem::size_of;

use crate::error::ShapeError;
use crate::host::HostArray;

/// Ranks every conversion path understands.
pub const SUPPORTED_RANKS: &[usize] = &[1, 2, 3];

/// Closed set of supported ranks, used for rank-dependent dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    One,
    Two,
    Three,
}

impl Rank {
    /// Maps a dimension count onto a supported rank.
    pub fn from_ndim(ndim: usize) -> Result<Self, ShapeError> {
        match ndim {
            1 => Ok(Rank::One),
            2 => Ok(Rank::Two),
            3 => Ok(Rank::Three),
            other => Err(ShapeError::UnsupportedRank {
                rank: other,
                allowed: SUPPORTED_RANKS.to_vec(),
            }),
        }
    }

    pub const fn ndim(self) -> usize {
        match self {
            Rank::One => 1,
            Rank::Two => 2,
            Rank::Three => 3,
        }
    }
}

/// Validated logical extent of an array: rank 1–3, overflow-free element count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Builds a shape, rejecting unsupported ranks and overflowing element counts.
    pub fn new<D: Into<Vec<usize>>>(dims: D) -> Result<Self, ShapeError> {
        let dims = dims.into();
        Rank::from_ndim(dims.len())?;
        checked_element_count(&dims)?;
        Ok(Shape { dims })
    }

    /// Borrow the raw dimension slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn rank(&self) -> Rank {
        match self.dims.len() {
            1 => Rank::One,
            2 => Rank::Two,
            _ => Rank::Three,
        }
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements implied by the shape.
    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn into_dims(self) -> Vec<usize> {
        self.dims
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        if self.dims.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

impl AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] {
        &self.dims
    }
}

/// Byte strides of a row-major layout, one per axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Strides(Vec<usize>);

impl Strides {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Byte offset of the element at `indices`.
    pub fn offset(&self, indices: &[usize]) -> usize {
        debug_assert_eq!(self.0.len(), indices.len());
        self.0.iter().zip(indices).map(|(s, i)| s * i).sum()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl PartialEq<Vec<usize>> for Strides {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

/// Computes `product(dims)` with overflow checking.
pub fn checked_element_count(dims: &[usize]) -> Result<usize, ShapeError> {
    let mut count = 1usize;
    for dim in dims {
        count = count
            .checked_mul(*dim)
            .ok_or_else(|| ShapeError::ElementCountOverflow {
                dims: dims.to_vec(),
            })?;
    }
    Ok(count)
}

/// Computes `product(dims) * size_of::<T>()` with overflow checking.
///
/// A shape that passes this check for `T` has byte strides that fit in `usize`.
pub fn checked_byte_size<T>(dims: &[usize]) -> Result<usize, ShapeError> {
    checked_element_count(dims)?
        .checked_mul(size_of::<T>())
        .ok_or_else(|| ShapeError::ElementCountOverflow {
            dims: dims.to_vec(),
        })
}

/// Row-major byte strides for `shape` holding elements of type `T`.
///
/// The last axis advances by `size_of::<T>()` bytes and every earlier axis by the
/// product of all faster axes. Shapes rejected by [`checked_byte_size`] for `T`
/// saturate at `usize::MAX` instead of wrapping.
pub fn strides_from_shape<T>(shape: &Shape) -> Strides {
    let dims = shape.dims();
    let mut strides = vec![0usize; dims.len()];
    let mut stride = size_of::<T>();
    for axis in (0..dims.len()).rev() {
        strides[axis] = stride;
        if axis > 0 {
            stride = stride.saturating_mul(dims[axis]);
        }
    }
    Strides(strides)
}

/// Reads the dimensions reported by `array` and validates them.
///
/// Fails with [`ShapeError::UnsupportedRank`] when the rank is not listed in
/// `allowed_ranks` (ranks outside 1–3 are never accepted), with
/// [`ShapeError::ElementCountOverflow`] when the byte size does not fit in
/// `usize`, and with [`ShapeError::SizeMismatch`] when the element count differs from
/// `expected_total_size`. The buffer itself is never read.
pub fn shape_from_array<A: HostArray>(
    array: &A,
    allowed_ranks: &[usize],
    expected_total_size: usize,
) -> Result<Shape, ShapeError> {
    let dims = array.dims();
    if !allowed_ranks.contains(&dims.len()) {
        return Err(ShapeError::UnsupportedRank {
            rank: dims.len(),
            allowed: allowed_ranks.to_vec(),
        });
    }
    let shape = Shape::new(dims.to_vec())?;
    checked_byte_size::<A::Elem>(shape.dims())?;
    let actual = shape.num_elements();
    if actual != expected_total_size {
        return Err(ShapeError::SizeMismatch {
            expected: expected_total_size,
            actual,
        });
    }
    log::trace!("validated host array shape {}", shape);
    Ok(shape)
}
