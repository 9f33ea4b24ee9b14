//! # pcmkit
//!
//! Deterministic PCM audio processing: WAV container scanning and a
//! closed set of exact, fixed-point sample transforms.
//!
//! # Overview
//!
//! The crate decodes interleaved integer samples out of canonical WAV
//! bytes and reshapes them for downstream tooling (wavetable builders,
//! hardware transfer protocols) that needs audio at a fixed resolution
//! and sample count:
//!
//! - **Scanning/decoding** - locate the `"fmt "` and `"data"` chunks and
//!   extract samples ([`wav`])
//! - **Resolution conversion** - sign-aware rounding bit-depth changes
//!   ([`PcmBuffer::change_resolution`])
//! - **Resampling** - expand-by-interpolation / collapse-by-decimation
//!   ([`PcmBuffer::resize`])
//! - **Normalization** - peak scaling ([`PcmBuffer::normalize`])
//! - **Structural derivations** - channel extraction, trimming, cloning
//!   ([`buffer`])
//! - **Morphing** - linear cross-fade between equal-shape waveforms
//!   ([`morph`])
//! - **Generators** - fixed saw/square wavetable sources ([`generators`])
//!
//! # Determinism
//!
//! Every operation is a pure, single-pass computation: the same input
//! bytes always produce the same samples, which
//! [`PcmBuffer::content_hash`] can assert cheaply. There is no I/O, no
//! randomness, and no shared state; buffers own their storage outright,
//! so independent buffers may be processed on separate threads freely.
//!
//! # Example
//!
//! ```
//! use pcmkit::{decode, morph};
//!
//! # fn wav_bytes() -> Vec<u8> {
//! #     let spec = hound::WavSpec {
//! #         channels: 1,
//! #         sample_rate: 44100,
//! #         bits_per_sample: 16,
//! #         sample_format: hound::SampleFormat::Int,
//! #     };
//! #     let mut cursor = std::io::Cursor::new(Vec::new());
//! #     let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
//! #     for i in 0..64i16 {
//! #         writer.write_sample(i * 512).unwrap();
//! #     }
//! #     writer.finalize().unwrap();
//! #     cursor.into_inner()
//! # }
//! let mut pcm = decode(&wav_bytes()).expect("valid WAV");
//!
//! // Shape the sample into a 1024-point full-scale wavetable cycle.
//! pcm.resize(1024);
//! pcm.change_resolution(16);
//! pcm.normalize(1.0);
//!
//! let blend = morph(&pcm, &pcmkit::generators::square(), 0.5).unwrap();
//! assert_eq!(blend.size(), 1024);
//! ```

pub mod buffer;
pub mod error;
pub mod generators;
pub mod morph;
pub mod wav;

mod normalize;
mod resample;
mod resolution;

// Re-export main types at crate root
pub use buffer::{PcmBuffer, CHANNEL_LEFT, CHANNEL_RIGHT, MAX_SAMPLES};
pub use error::{PcmError, PcmResult};
pub use morph::morph;
pub use wav::{decode, extract, scan_meta, WavMeta};
