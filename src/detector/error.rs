use thiserror::Error;

/// Raised when an input buffer cannot be read as a 3-channel 8-bit image.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DetectionError {
    #[error("row stride of {stride} bytes is smaller than a {row_bytes}-byte row")]
    InvalidStride { stride: usize, row_bytes: usize },
    #[error("image view needs {required} bytes but the buffer holds {actual}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("image buffer holds {actual} bytes, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    #[error("expected 3 color channels, got {0}")]
    UnsupportedChannels(usize),
    #[error("image dimensions {width}x{height} are too large")]
    DimensionOverflow { width: usize, height: usize },
}
