//! Error types for PCM processing.

use thiserror::Error;

/// Result type for PCM operations.
pub type PcmResult<T> = Result<T, PcmError>;

/// Errors that can occur while building or transforming PCM buffers.
#[derive(Debug, Error)]
pub enum PcmError {
    /// Requested sample data does not fit the fixed buffer capacity.
    #[error("sample capacity exceeded: {requested} samples, capacity is {capacity}")]
    CapacityExceeded {
        /// Total number of samples requested.
        requested: usize,
        /// Maximum total number of samples a buffer may hold.
        capacity: usize,
    },

    /// A buffer cannot have zero channels.
    #[error("invalid channel count: {channels}")]
    InvalidChannelCount {
        /// The invalid channel count.
        channels: usize,
    },

    /// A trim window extends past the available data.
    #[error("trim window out of bounds: start {start} + len {len} exceeds size {size}")]
    TrimOutOfBounds {
        /// Requested start offset in samples per channel.
        start: usize,
        /// Requested window length in samples per channel.
        len: usize,
        /// The source buffer's per-channel sample count.
        size: usize,
    },

    /// Two buffers combined sample-by-sample must have the same shape.
    #[error(
        "buffer shapes do not match: {left_size} samples x {left_channels} channels \
         vs {right_size} samples x {right_channels} channels"
    )]
    ShapeMismatch {
        /// Per-channel sample count of the first buffer.
        left_size: usize,
        /// Channel count of the first buffer.
        left_channels: usize,
        /// Per-channel sample count of the second buffer.
        right_size: usize,
        /// Channel count of the second buffer.
        right_channels: usize,
    },
}
