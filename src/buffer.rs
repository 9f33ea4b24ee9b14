//! The core PCM buffer type and its structural derivations.

use crate::error::{PcmError, PcmResult};

/// Maximum total number of samples (across all channels) a buffer may hold.
pub const MAX_SAMPLES: usize = 131072;

/// Channel index of the left channel in interleaved data.
pub const CHANNEL_LEFT: usize = 0;
/// Channel index of the right channel in interleaved data.
pub const CHANNEL_RIGHT: usize = 1;

/// An owned buffer of interleaved integer PCM samples.
///
/// Samples are stored as `i32` regardless of the nominal resolution, which
/// leaves headroom for intermediate values that transiently exceed the
/// nominal range (resampling's mean step, unclamped morphs). Resolutions
/// 16, 24, and 32 are signed; 8-bit data follows the WAV convention of
/// unsigned values biased by 128.
///
/// `size` counts samples per channel; the flat data length is always
/// `size * channels`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    pub(crate) resolution: u32,
    pub(crate) channels: usize,
    pub(crate) size: usize,
    pub(crate) data: Vec<i32>,
}

impl Default for PcmBuffer {
    /// An empty 16-bit mono buffer.
    fn default() -> Self {
        Self {
            resolution: 16,
            channels: 1,
            size: 0,
            data: Vec::new(),
        }
    }
}

impl PcmBuffer {
    /// Creates a buffer from a flat, channel-interleaved sample vector.
    ///
    /// Trailing samples that do not fill a whole frame are dropped, so the
    /// stored length is always a multiple of the channel count.
    ///
    /// # Errors
    /// `InvalidChannelCount` if `channels` is zero; `CapacityExceeded` if
    /// the vector holds more than [`MAX_SAMPLES`] samples.
    pub fn from_samples(channels: usize, resolution: u32, mut data: Vec<i32>) -> PcmResult<Self> {
        if channels == 0 {
            return Err(PcmError::InvalidChannelCount { channels });
        }
        if data.len() > MAX_SAMPLES {
            return Err(PcmError::CapacityExceeded {
                requested: data.len(),
                capacity: MAX_SAMPLES,
            });
        }
        let size = data.len() / channels;
        data.truncate(size * channels);
        Ok(Self {
            resolution,
            channels,
            size,
            data,
        })
    }

    /// Bit depth of the stored samples.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of samples per channel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of stored samples across all channels.
    pub fn total_samples(&self) -> usize {
        self.size * self.channels
    }

    /// The flat, channel-interleaved sample data.
    pub fn samples(&self) -> &[i32] {
        &self.data
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Replaces the sample data, deriving the per-channel size from the
    /// vector length. Partial trailing frames are dropped.
    pub(crate) fn set_data(&mut self, mut data: Vec<i32>) {
        self.size = data.len() / self.channels;
        data.truncate(self.size * self.channels);
        self.data = data;
    }

    /// Extracts a single channel into a new mono buffer.
    ///
    /// An index outside `[0, channels - 1]` falls back to the left
    /// channel rather than failing.
    pub fn from_channel(&self, channel: usize) -> PcmBuffer {
        let channel = if channel >= self.channels {
            CHANNEL_LEFT
        } else {
            channel
        };

        let data: Vec<i32> = self
            .data
            .iter()
            .skip(channel)
            .step_by(self.channels)
            .copied()
            .collect();

        PcmBuffer {
            resolution: self.resolution,
            channels: 1,
            size: self.size,
            data,
        }
    }

    /// Copies a window of `len` samples per channel starting at `start`
    /// into a new buffer, preserving channel count and resolution.
    ///
    /// # Errors
    /// `TrimOutOfBounds` if the window extends past the available data.
    pub fn trim(&self, start: usize, len: usize) -> PcmResult<PcmBuffer> {
        let in_bounds = start
            .checked_add(len)
            .is_some_and(|end| end <= self.size);
        if !in_bounds {
            return Err(PcmError::TrimOutOfBounds {
                start,
                len,
                size: self.size,
            });
        }

        let lo = start * self.channels;
        let hi = (start + len) * self.channels;
        Ok(PcmBuffer {
            resolution: self.resolution,
            channels: self.channels,
            size: len,
            data: self.data[lo..hi].to_vec(),
        })
    }

    /// Returns the BLAKE3 hash of the sample data, serialized as
    /// little-endian `i32`s, as a hex string.
    ///
    /// Two buffers with identical samples hash identically regardless of
    /// how they were produced, which makes this the cheap way to assert
    /// determinism of a transform chain.
    pub fn content_hash(&self) -> String {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for &sample in &self.data {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        blake3::hash(&bytes).to_hex().to_string()
    }
}
