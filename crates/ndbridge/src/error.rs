//! Error types shared by every conversion path.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Axis named by a [`ShapeError::DimensionMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Flattened length of a rank-1 buffer.
    Length,
    Channels,
    Height,
    Width,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Length => "length",
            Axis::Channels => "channels",
            Axis::Height => "height",
            Axis::Width => "width",
        };
        f.write_str(name)
    }
}

/// Validation failures raised before any data is copied or moved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("unsupported array rank {rank}: expected one of {allowed:?}")]
    UnsupportedRank { rank: usize, allowed: Vec<usize> },
    #[error("size mismatch: expected {expected} elements, found {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("{axis} mismatch: expected {expected}, found {actual}")]
    DimensionMismatch {
        axis: Axis,
        expected: usize,
        actual: usize,
    },
    #[error("size of shape {dims:?} overflows usize")]
    ElementCountOverflow { dims: Vec<usize> },
}

/// Failure reported by the array host (allocation, layout copy, ...).
#[derive(Debug, Error)]
#[error("{context}")]
pub struct HostError {
    context: &'static str,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl HostError {
    pub fn new<E>(context: &'static str, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        HostError {
            context,
            source: source.into(),
        }
    }

    /// Short description of the host operation that failed.
    pub fn context(&self) -> &'static str {
        self.context
    }

    /// Recovers the host's own error value, e.g. to re-raise it unchanged.
    pub fn into_source(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.source
    }
}

/// Every failure a conversion can surface to its caller.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Host(#[from] HostError),
    #[error("host returned a non row-major array for shape {dims:?}")]
    NotRowMajor { dims: Vec<usize> },
}

impl ConversionError {
    /// Returns the validation failure, if this error is one.
    pub fn as_shape_error(&self) -> Option<&ShapeError> {
        match self {
            ConversionError::Shape(err) => Some(err),
            _ => None,
        }
    }
}
