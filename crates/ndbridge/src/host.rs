//! Host-array protocol.
//!
//! A host is whatever runtime owns the foreign arrays (a Python interpreter with
//! NumPy, or `ndarray` for native callers). The conversion layer only talks to it
//! through the two traits below and never keeps a handle past the call that
//! received it.

use crate::error::HostError;
use crate::shape::Shape;

/// Refcounted n-d array handle owned by a host runtime.
///
/// The element type is an associated type, so a conversion can only ever read
/// elements of exactly the type the host stores.
pub trait HostArray: Sized {
    type Elem: Copy;

    /// Per-axis extents as reported by the host.
    fn dims(&self) -> &[usize];

    /// Per-axis byte strides as reported by the host.
    fn byte_strides(&self) -> Vec<isize>;

    /// Whether the buffer is laid out row-major with no gaps.
    fn is_row_major(&self) -> bool;

    /// Asks the host for a row-major copy with the same shape and logical element order.
    fn to_row_major(&self) -> Result<Self, HostError>;

    /// The whole buffer as a flat slice, or `None` if it is not row-major.
    ///
    /// The slice aliases host memory: it stays valid only while `self` is alive and
    /// the host does not resize or free the buffer.
    fn row_major_slice(&self) -> Option<&[Self::Elem]>;
}

/// Allocator side of a host: builds new arrays from native buffers.
pub trait ArrayHost<T> {
    type Array: HostArray<Elem = T>;

    /// Allocates a fresh array of `shape` and copies `data` into it in row-major order.
    fn copy_from_slice(&self, data: &[T], shape: &Shape) -> Result<Self::Array, HostError>;

    /// Hands the allocation of `data` to the host without copying.
    ///
    /// The host releases the memory once the last reference to the array is gone.
    fn adopt_vec(&self, data: Vec<T>, shape: &Shape) -> Result<Self::Array, HostError>;
}
