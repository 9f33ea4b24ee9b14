//! Linear cross-fade between two waveforms.

use crate::buffer::PcmBuffer;
use crate::error::{PcmError, PcmResult};

/// Produces the waveform that sits `scale` of the way between `start` and
/// `end`: each output sample is `start + (end - start) * scale`, truncated
/// toward zero. Useful scales lie in `(0, 1)`; 0 reproduces `start` and 1
/// reproduces `end` up to truncation.
///
/// The result is a new buffer with `start`'s channel count and resolution.
///
/// # Errors
/// `ShapeMismatch` if the inputs differ in per-channel sample count or
/// channel count.
pub fn morph(start: &PcmBuffer, end: &PcmBuffer, scale: f32) -> PcmResult<PcmBuffer> {
    if start.size != end.size || start.channels != end.channels {
        return Err(PcmError::ShapeMismatch {
            left_size: start.size,
            left_channels: start.channels,
            right_size: end.size,
            right_channels: end.channels,
        });
    }

    let mut data = Vec::with_capacity(start.data.len());
    for (&a, &b) in start.data.iter().zip(&end.data) {
        let diff = b as f32 - a as f32;
        data.push((a as f32 + diff * scale) as i32);
    }

    let mut morphed = PcmBuffer::default();
    morphed.resolution = start.resolution;
    morphed.channels = start.channels;
    morphed.set_data(data);
    Ok(morphed)
}
