//! Deterministic synthetic waveform sources.
//!
//! Fixed 1024-sample, 16-bit, single-channel waveforms with no side
//! effects, usable as wavetable building blocks and as test fixtures.

use crate::buffer::PcmBuffer;

/// Number of samples in a generated waveform.
const WAVE_SAMPLES: usize = 1024;

/// Generates a sawtooth waveform: a linear ramp from 0 to 32704 in steps
/// of 64 over the first half, then from -32768 to -64 over the second.
pub fn saw() -> PcmBuffer {
    let mut data = vec![0i32; WAVE_SAMPLES];
    for i in 0..WAVE_SAMPLES / 2 {
        data[i] = (i as i32) * 64;
        data[i + WAVE_SAMPLES / 2] = (i as i32) * 64 - 32768;
    }

    let mut pcm = PcmBuffer::default();
    pcm.set_data(data);
    pcm
}

/// Generates a square waveform: 32767 for the first half, -32768 for the
/// second.
pub fn square() -> PcmBuffer {
    let mut data = vec![0i32; WAVE_SAMPLES];
    for i in 0..WAVE_SAMPLES / 2 {
        data[i] = 32767;
        data[i + WAVE_SAMPLES / 2] = -32768;
    }

    let mut pcm = PcmBuffer::default();
    pcm.set_data(data);
    pcm
}
