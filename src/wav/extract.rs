//! PCM sample extraction from a scanned WAV payload.

use crate::buffer::{PcmBuffer, MAX_SAMPLES};

use super::scanner::{scan_meta, WavMeta};

/// Decodes a window of samples out of a WAV byte buffer.
///
/// The source byte index starts at `data_start + start * bytes_per_sample`
/// (the start offset counts individual samples, not frames). For each
/// requested sample, for each channel, `bytes_per_sample` bytes are
/// accumulated in little-endian order into a signed value. Reads at or
/// past `data_end` (or past the end of the buffer itself) are skipped, not
/// substituted, so trailing samples are under-filled rather than failing;
/// a sample whose most significant byte was skipped is never
/// sign-extended. 8-bit samples are kept as raw unsigned bytes per the
/// WAV convention.
///
/// Requests whose result would exceed the buffer capacity are clamped to
/// [`MAX_SAMPLES`] total samples.
///
/// # Arguments
/// * `meta` - Scanned metadata for `bytes`
/// * `bytes` - The WAV byte buffer the metadata was scanned from
/// * `start` - Sample offset into the payload
/// * `samples` - Number of samples per channel to decode
pub fn extract(meta: &WavMeta, bytes: &[u8], start: usize, samples: usize) -> PcmBuffer {
    if meta.channels == 0 {
        return PcmBuffer::default();
    }

    let bps = meta.bytes_per_sample();
    let samples = samples.min(MAX_SAMPLES / meta.channels);
    let end = meta.data_end.min(bytes.len());
    let mut dx = meta.data_start.saturating_add(start.saturating_mul(bps));

    let mut data = Vec::with_capacity(samples * meta.channels);
    for _ in 0..samples {
        for _ in 0..meta.channels {
            let mut sample = 0i32;
            let mut top_byte_read = false;
            for bn in 0..bps {
                if dx < end {
                    if bn < 4 {
                        sample |= (bytes[dx] as i32) << (8 * bn);
                    }
                    if bn == bps - 1 {
                        top_byte_read = true;
                    }
                    dx += 1;
                }
            }
            if top_byte_read && (9..=32).contains(&meta.resolution) {
                let shift = 32 - meta.resolution;
                sample = (sample << shift) >> shift;
            }
            data.push(sample);
        }
    }

    let mut pcm = PcmBuffer::default();
    pcm.resolution = meta.resolution;
    pcm.channels = meta.channels;
    pcm.set_data(data);
    pcm
}

/// Scans a WAV byte buffer and decodes its entire payload.
///
/// [`WavMeta::samples`] counts individual samples across all channels;
/// this converts it to the per-channel count [`extract`] expects.
///
/// # Returns
/// The decoded buffer, or `None` if the scan fails (see
/// [`scan_meta`]). A successful scan of an empty data chunk yields an
/// empty buffer, so callers interested in audio should still check the
/// sample count.
pub fn decode(bytes: &[u8]) -> Option<PcmBuffer> {
    let meta = scan_meta(bytes)?;
    let frames = meta.samples() / meta.channels;
    Some(extract(&meta, bytes, 0, frames))
}
