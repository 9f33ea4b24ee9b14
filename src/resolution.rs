//! Bit-depth conversion.

use crate::buffer::PcmBuffer;

impl PcmBuffer {
    /// Changes the resolution of every stored sample in place.
    ///
    /// Any target in `[8, 32]` is accepted; targets outside that range are
    /// ignored and the buffer is left untouched. Converting to the current
    /// resolution is a no-op.
    ///
    /// Reduction keeps one round bit past the target width and rounds with
    /// a sign-aware rule: up when the round bit is set and the shifted
    /// value is non-negative, down when the round bit is clear and the
    /// value is negative. The rounding adjustment is bounded above by
    /// `2^target - 1` and below by `-2^target`, the full unsigned span of
    /// the target width rather than its signed half, so full-scale inputs
    /// can round past the nominal signed range. The rule is exact
    /// and deterministic; callers depending on bit-identical output must
    /// not substitute a different rounding scheme.
    ///
    /// Increase zero-fills by shifting left. 8-bit data is unbiased from
    /// the unsigned WAV convention before converting and re-biased (and
    /// masked to 8 bits) when 8 is the target.
    pub fn change_resolution(&mut self, new_resolution: u32) {
        if !(8..=32).contains(&new_resolution) {
            return;
        }
        if new_resolution == self.resolution {
            return;
        }

        let current = self.resolution;
        let mut data = Vec::with_capacity(self.data.len());
        for &raw in &self.data {
            let mut sample = i64::from(raw);

            // 8-bit WAV data is unsigned; shift to two's complement first.
            if current == 8 {
                sample -= 128;
            }

            if new_resolution < current {
                let max = (1i64 << new_resolution) - 1;
                let min = -1 - max;

                // Shift away unused bits, keeping the round bit.
                sample >>= current - new_resolution - 1;
                let round_up = (sample & 1 == 1) && sample >= 0;
                let round_dn = (sample & 1 == 0) && sample < 0;

                sample >>= 1;
                if round_up && sample < max {
                    sample += 1;
                }
                if round_dn && sample > min {
                    sample -= 1;
                }
            }

            if new_resolution > current {
                sample <<= new_resolution - current;
            }

            // Back to the unsigned convention for 8-bit output.
            if new_resolution == 8 {
                sample += 128;
                sample &= 0xff;
            }

            data.push(sample as i32);
        }

        self.resolution = new_resolution;
        self.data = data;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::buffer::PcmBuffer;

    #[test]
    fn test_same_resolution_is_noop() {
        let mut pcm = PcmBuffer::from_samples(1, 16, vec![1, -1, 12345]).unwrap();
        pcm.change_resolution(16);
        assert_eq!(pcm.resolution(), 16);
        assert_eq!(pcm.samples(), &[1, -1, 12345]);
    }

    #[test]
    fn test_invalid_resolution_is_ignored() {
        let mut pcm = PcmBuffer::from_samples(1, 16, vec![1, -1, 12345]).unwrap();
        pcm.change_resolution(40);
        assert_eq!(pcm.resolution(), 16);
        assert_eq!(pcm.samples(), &[1, -1, 12345]);

        pcm.change_resolution(3);
        assert_eq!(pcm.resolution(), 16);
        assert_eq!(pcm.samples(), &[1, -1, 12345]);
    }

    #[test]
    fn test_reduce_16_to_8_rounding() {
        // 1000 >> 7 = 7 with round bit set, so the positive value rounds
        // up: 3 + 1 = 4, then biased to 132. -1000 >> 7 = -8 with round
        // bit clear, so the negative value rounds down: -4 - 1 = -5,
        // biased to 123.
        let mut pcm = PcmBuffer::from_samples(1, 16, vec![1000, -1000, 0]).unwrap();
        pcm.change_resolution(8);
        assert_eq!(pcm.resolution(), 8);
        assert_eq!(pcm.samples(), &[132, 123, 128]);
    }

    #[test]
    fn test_reduce_16_to_12() {
        // 1000 / 16 = 62.5; round bit set and non-negative, so 63.
        let mut pcm = PcmBuffer::from_samples(1, 16, vec![1000]).unwrap();
        pcm.change_resolution(12);
        assert_eq!(pcm.samples(), &[63]);
    }

    #[test]
    fn test_increase_8_to_16() {
        // Biased 8-bit values: 128 is zero, 132 is +4, 123 is -5.
        let mut pcm = PcmBuffer::from_samples(1, 8, vec![128, 132, 123]).unwrap();
        pcm.change_resolution(16);
        assert_eq!(pcm.resolution(), 16);
        assert_eq!(pcm.samples(), &[0, 4 << 8, -5 << 8]);
    }

    #[test]
    fn test_increase_16_to_24() {
        let mut pcm = PcmBuffer::from_samples(1, 16, vec![1, -1, 32767, -32768]).unwrap();
        pcm.change_resolution(24);
        assert_eq!(pcm.resolution(), 24);
        assert_eq!(
            pcm.samples(),
            &[1 << 8, -(1 << 8), 32767 << 8, -32768 << 8]
        );
    }

    #[test]
    fn test_increase_16_to_32() {
        let mut pcm = PcmBuffer::from_samples(1, 16, vec![32767, -32768]).unwrap();
        pcm.change_resolution(32);
        assert_eq!(pcm.samples(), &[32767 << 16, -32768 << 16]);
    }

    #[test]
    fn test_round_trip_16_to_24_to_16() {
        let original = vec![0, 1, -1, 1000, -1000, 32767, -32768];
        let mut pcm = PcmBuffer::from_samples(1, 16, original.clone()).unwrap();
        pcm.change_resolution(24);
        pcm.change_resolution(16);

        // Zero-filled low bits mean the reduction sees no round bit for
        // non-negative values; negatives pick up the round-down rule.
        assert_eq!(pcm.resolution(), 16);
        assert_eq!(pcm.samples(), &[0, 1, -2, 1000, -1001, 32767, -32769]);
    }

    #[test]
    fn test_reduction_range_for_moderate_values() {
        // Away from full scale the reduced values stay inside the signed
        // range of the target width.
        let values = vec![1000, -1000, 12345, -12345, 255, -256, 16000, -16000];
        for target in [15u32, 12, 10, 8] {
            let mut pcm = PcmBuffer::from_samples(1, 16, values.clone()).unwrap();
            pcm.change_resolution(target);

            let max = (1i32 << (target - 1)) - 1;
            let min = -1 - max;
            for &s in pcm.samples() {
                let signed = if target == 8 { s - 128 } else { s };
                assert!(
                    signed >= min && signed <= max,
                    "{} out of range [{}, {}] at {} bits",
                    signed,
                    min,
                    max,
                    target
                );
            }
        }
    }

    #[test]
    fn test_empty_buffer_changes_resolution_only() {
        let mut pcm = PcmBuffer::default();
        pcm.change_resolution(24);
        assert_eq!(pcm.resolution(), 24);
        assert!(pcm.is_empty());
    }
}
