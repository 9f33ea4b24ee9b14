//! WAV container scanning and PCM extraction.
//!
//! The scanner locates the `"fmt "` and `"data"` chunks with a byte-level
//! fixed-offset heuristic rather than a full RIFF chunk-tree walk; see
//! [`scan_meta`] for the exact (and deliberately limited) matching rules.
//! Extraction decodes little-endian samples out of the located payload
//! into a [`crate::PcmBuffer`].

mod extract;
mod scanner;


// Re-export public API
pub use extract::{decode, extract};
pub use scanner::{scan_meta, WavMeta};
