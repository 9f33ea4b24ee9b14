//! Byte-level WAV metadata scanner.

/// Offset of the channel-count byte, relative to the final byte of a
/// matched `"fmt "` tag. Assumes the canonical 16-byte PCM format body.
const CHANNEL_OFFSET: usize = 7;
/// Offset of the bits-per-sample byte, relative to the final byte of a
/// matched `"fmt "` tag.
const RESOLUTION_OFFSET: usize = 19;

/// Minimum byte length of a WAV file with a canonical header.
const MIN_WAV_LEN: usize = 44;

const FMT_TAG: [u8; 4] = *b"fmt ";
const DATA_TAG: [u8; 4] = *b"data";

/// Metadata scanned out of a WAV byte buffer.
///
/// Produced once per scan, consumed by [`super::extract`], then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavMeta {
    /// Byte offset where the PCM payload begins.
    pub data_start: usize,
    /// Byte offset one past the end of the PCM payload, as declared by the
    /// data chunk's length field. Untrusted; extraction bounds every read
    /// by the actual buffer length as well.
    pub data_end: usize,
    /// Number of interleaved channels.
    pub channels: usize,
    /// Bits per sample.
    pub resolution: u32,
}

impl WavMeta {
    /// Bytes per sample, per channel.
    pub fn bytes_per_sample(&self) -> usize {
        (self.resolution / 8) as usize
    }

    /// Number of individual samples the payload declares, derived from the
    /// data extent and the resolution. Zero when the resolution is too
    /// small to span a whole byte.
    pub fn samples(&self) -> usize {
        let bps = self.bytes_per_sample();
        if bps == 0 {
            return 0;
        }
        self.data_end.saturating_sub(self.data_start) / bps
    }
}

/// Scans a WAV byte buffer for the `"fmt "` and `"data"` chunk markers and
/// derives channel count, resolution, and the PCM payload extent.
///
/// The scan walks the buffer once, keeping an independent partial-match
/// cursor per tag. The matcher is deliberately naive: a mismatched byte
/// resets its cursor without being re-examined as a potential tag start,
/// so a tag immediately preceded by its own first byte (`"ffmt "`) is not
/// found. On a `"fmt "` match the channel count and resolution are read at
/// fixed offsets from the tag, assuming the canonical 16-byte PCM format
/// body; the chunk's declared length is not consulted, so files with
/// extended format chunks misparse. This limitation is intentional and
/// kept for compatibility with the files downstream consumers process.
///
/// Tag matching is gated on the fields still being unset (a zero channel
/// count keeps the `"fmt "` matcher running; a zero data end keeps the
/// `"data"` matcher running), and the walk stops as soon as all four
/// values have been found.
///
/// # Returns
/// `None` if the buffer is shorter than 44 bytes or the scan never finds
/// all of channel count, resolution, data start, and data end.
pub fn scan_meta(bytes: &[u8]) -> Option<WavMeta> {
    if bytes.len() < MIN_WAV_LEN {
        return None;
    }

    let mut channels = 0usize;
    let mut resolution = 0u32;
    let mut data_start = 0usize;
    let mut data_end = 0usize;

    let mut fmt_cursor = 0usize;
    let mut data_cursor = 0usize;

    for (i, &b) in bytes.iter().enumerate() {
        if channels == 0 {
            if b == FMT_TAG[fmt_cursor] {
                if fmt_cursor == 3 {
                    // i is the final byte of the format chunk identifier.
                    if i + CHANNEL_OFFSET < bytes.len() {
                        channels = bytes[i + CHANNEL_OFFSET] as usize;
                    }
                    if i + RESOLUTION_OFFSET < bytes.len() {
                        resolution = bytes[i + RESOLUTION_OFFSET] as u32;
                    }
                    fmt_cursor = 0;
                } else {
                    fmt_cursor += 1;
                }
            } else {
                fmt_cursor = 0;
            }
        }

        if data_end == 0 {
            if b == DATA_TAG[data_cursor] {
                if data_cursor == 3 {
                    // i is the final byte of the data chunk identifier. The
                    // payload begins at i + 5; the four bytes in between
                    // hold its little-endian length.
                    if i + 4 < bytes.len() {
                        data_start = i + 5;
                        let len = u32::from_le_bytes([
                            bytes[i + 1],
                            bytes[i + 2],
                            bytes[i + 3],
                            bytes[i + 4],
                        ]);
                        data_end = data_start + len as usize;
                    }
                    data_cursor = 0;
                } else {
                    data_cursor += 1;
                }
            } else {
                data_cursor = 0;
            }
        }

        if data_start != 0 && data_end != 0 && channels != 0 && resolution != 0 {
            break;
        }
    }

    if data_start == 0 || data_end == 0 || channels == 0 || resolution == 0 {
        return None;
    }

    Some(WavMeta {
        data_start,
        data_end,
        channels,
        resolution,
    })
}
