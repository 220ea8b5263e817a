//! In-process host backed by `ndarray::ArcArray`.
//!
//! `ArcArray` is refcounted and may carry arbitrary strides (transposes, slices),
//! which makes it a faithful stand-in for a foreign array runtime without an
//! interpreter.

use std::mem::size_of;

use ndarray::{ArcArray, IxDyn};

use crate::error::HostError;
use crate::host::{ArrayHost, HostArray};
use crate::shape::Shape;

/// Shared, dynamically ranked `ndarray` used as a host array.
pub type NdArray<T> = ArcArray<T, IxDyn>;

impl<T: Copy> HostArray for ArcArray<T, IxDyn> {
    type Elem = T;

    fn dims(&self) -> &[usize] {
        self.shape()
    }

    fn byte_strides(&self) -> Vec<isize> {
        let elem = size_of::<T>() as isize;
        self.strides().iter().map(|s| s * elem).collect()
    }

    fn is_row_major(&self) -> bool {
        self.is_standard_layout()
    }

    fn to_row_major(&self) -> Result<Self, HostError> {
        Ok(self.as_standard_layout().into_owned().into_shared())
    }

    fn row_major_slice(&self) -> Option<&[T]> {
        self.as_slice()
    }
}

/// Allocator for [`NdArray`] values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdarrayHost;

impl<T: Copy> ArrayHost<T> for NdarrayHost {
    type Array = NdArray<T>;

    fn copy_from_slice(&self, data: &[T], shape: &Shape) -> Result<NdArray<T>, HostError> {
        ArcArray::from_shape_vec(IxDyn(shape.dims()), data.to_vec())
            .map_err(|e| HostError::new("allocate ndarray", e))
    }

    fn adopt_vec(&self, data: Vec<T>, shape: &Shape) -> Result<NdArray<T>, HostError> {
        ArcArray::from_shape_vec(IxDyn(shape.dims()), data)
            .map_err(|e| HostError::new("adopt buffer into ndarray", e))
    }
}
